//! Core module - room states, shared events, easing and system ordering.
//!
//! This module provides the foundation that all other room systems build upon.

mod events;
mod plugin;
mod states;
mod tween;

pub use events::*;
pub use plugin::{CorePlugin, RoomSet, RoomStartup};
pub use states::*;
pub use tween::*;
