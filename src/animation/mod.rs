//! Animation module - per-frame animators for drawers, boards, ball, windows
//! and the book.

pub mod book;
pub mod docking;
pub mod drawers;
pub mod hinge;
mod plugin;
pub mod projectile;

pub use book::{BookCover, BookState};
pub use docking::{DisplayBoard, Docking};
pub use drawers::{DrawerBank, DrawerSlot, DrawerState};
pub use hinge::{HingeLeaf, HingeSide, HingeState};
pub use plugin::{init_animation_state, AnimationPlugin};
pub use projectile::{Ball, BallPhase, BallPhysics};
