//! Camera module - the single orthographic room camera.

mod plugin;
mod rig;

pub use plugin::CameraPlugin;
pub use rig::{start_look_target, zoomed_scale, CameraConfig, RoomCamera};
