//! Error types for room configuration loading.

use thiserror::Error;

/// Errors that can occur when loading or validating the room configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A palette entry is not a valid hex color.
    #[error("Invalid hex color '{value}' for palette entry '{name}'")]
    InvalidColor { name: String, value: String },

    /// Every drawer must own exactly one project board.
    #[error("Drawer/board mismatch: {drawers} drawers but {boards} project boards")]
    SlotMismatch { drawers: usize, boards: usize },

    /// Rates and fractions must be positive to make progress.
    #[error("Invalid value for '{field}': {value}")]
    InvalidValue { field: &'static str, value: f32 },
}
