//! UI module - screen-space overlays.

mod intro;
mod panels;
mod plugin;

pub use intro::{HintsUi, IntroUi};
pub use panels::{AboutPanel, CloseAboutButton, ProjectCaption};
pub use plugin::UiPlugin;
