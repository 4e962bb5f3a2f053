//! Room state definitions that control the overall flow of the scene.
//!
//! States determine which systems run at any given time. For example, the
//! pointer-driven look-at only runs during `Start`, while orbit controls only
//! run once the visitor is `Exploring`.

use bevy::prelude::*;

/// Main room states - controls overall flow.
///
/// - Start in `Loading` while the font is fetched
/// - Move to `Start` once the font has loaded or failed
/// - Enter `Exploring` when the visitor clicks through the intro
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum RoomState {
    /// Waiting on the font asset
    #[default]
    Loading,
    /// Intro overlay, camera follows the pointer
    Start,
    /// Free orbit around the room
    Exploring,
}
