//! Text plugin - font loading and typewriter animation.

use bevy::prelude::*;

use crate::core::{RoomSet, RoomStartup, RoomState};

use super::fonts::{load_fonts, poll_fonts};
use super::typewriter::{run_typewriters, TypewriterCue};

/// Text plugin - owns the loading state and drives every typewriter.
pub struct TextPlugin;

impl Plugin for TextPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TypewriterCue>()
            .add_systems(Startup, load_fonts.in_set(RoomStartup::State))
            .add_systems(
                Update,
                poll_fonts.run_if(in_state(RoomState::Loading)),
            )
            .add_systems(Update, run_typewriters.in_set(RoomSet::Present));
    }
}
