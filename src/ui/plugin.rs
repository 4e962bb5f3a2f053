//! UI plugin - start screen, hints, about-me panel and captions.

use bevy::prelude::*;

use crate::core::{RoomSet, RoomState};

use super::intro::*;
use super::panels::*;

/// UI plugin - handles all screen-space overlays.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app
            // Start screen
            .add_systems(OnEnter(RoomState::Start), setup_intro)
            .add_systems(
                Update,
                intro_input
                    .run_if(in_state(RoomState::Start))
                    .in_set(RoomSet::Input),
            )
            .add_systems(OnExit(RoomState::Start), cleanup_intro)

            // Exploring
            .add_systems(OnEnter(RoomState::Exploring), setup_hints)
            .add_systems(Update, about_panel_input.in_set(RoomSet::Input))
            .add_systems(
                Update,
                (show_about_panel, update_captions)
                    .run_if(in_state(RoomState::Exploring))
                    .in_set(RoomSet::Present),
            );
    }
}
