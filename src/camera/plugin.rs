//! Camera plugin - start-screen look-at and orbit controls.

use bevy::prelude::*;

use crate::core::{RoomSet, RoomStartup, RoomState};

use super::rig::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraConfig>()
            .add_systems(Startup, spawn_camera.in_set(RoomStartup::Scene))
            .add_systems(OnEnter(RoomState::Exploring), reset_to_orbit)
            .add_systems(
                Update,
                (
                    look_at_cursor.run_if(in_state(RoomState::Start)),
                    (orbit_camera, zoom_camera).run_if(in_state(RoomState::Exploring)),
                )
                    .in_set(RoomSet::Input),
            );
    }
}
