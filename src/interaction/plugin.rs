//! Interaction plugin - pointer input and toggle state.

use bevy::prelude::*;

use super::dispatch::{dispatch_interactions, InteractionTable};
use super::picking::{forward_pointer_click, forward_pointer_over};
use super::toggles::ToggleStore;
use crate::core::RoomSet;

/// Interaction plugin - turns picking events into room actions.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ToggleStore>()
            .init_resource::<InteractionTable>()
            .add_observer(forward_pointer_over)
            .add_observer(forward_pointer_click)
            .add_systems(Update, dispatch_interactions.in_set(RoomSet::Input));
    }
}
