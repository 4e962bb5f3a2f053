//! Interaction module - toggle flags, pointer forwarding and action dispatch.

mod dispatch;
mod picking;
mod plugin;
mod toggles;

pub use dispatch::{dispatch_interactions, InteractionTable, RoomAction};
pub use plugin::InteractionPlugin;
pub use toggles::{ToggleFlag, ToggleStore};
