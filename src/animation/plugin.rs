//! Animation plugin - registers the per-frame animators.

use bevy::prelude::*;

use super::book::{animate_book, BookState};
use super::docking::{dock_boards, Docking};
use super::drawers::{sync_drawer_targets, DrawerBank};
use super::hinge::{swing_windows, HingeState};
use super::projectile::{step_ball, BallPhysics};
use crate::core::{update_smooth_translations, RoomSet, RoomStartup};
use crate::world::RoomConfig;

/// Animation plugin - drawers, boards, ball, windows and book.
///
/// Every animator runs in `RoomSet::Animate`, after the frame's input has
/// been dispatched, and reads the same frame time.
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_animation_state.in_set(RoomStartup::State))
            .add_systems(
                Update,
                (
                    sync_drawer_targets.before(update_smooth_translations),
                    dock_boards,
                    step_ball,
                    swing_windows,
                    animate_book,
                )
                    .in_set(RoomSet::Animate),
            );
    }
}

/// Derive the animators' state from the configuration table.
pub fn init_animation_state(mut commands: Commands, config: Res<RoomConfig>) {
    commands.insert_resource(DrawerBank::new(&config.drawers));
    commands.insert_resource(Docking::new(&config.boards));
    commands.insert_resource(BallPhysics::new(&config.ball));
    commands.insert_resource(HingeState::new(&config.hinge));
    commands.insert_resource(BookState::new(&config.book));
}
