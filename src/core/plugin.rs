//! Core plugin that sets up room states, events, and frame ordering.

use bevy::prelude::*;

use super::events::*;
use super::states::*;
use super::tween::*;

/// Frame ordering: input is dispatched before any animator reads `dt`, and
/// presentation reads the animated state last.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoomSet {
    Input,
    Animate,
    Present,
}

/// Startup ordering: the config table is loaded before animation state is
/// derived from it, and both exist before the scene is spawned.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoomStartup {
    Config,
    State,
    Scene,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Room states (Loading, Start, Exploring)
/// - Shared events (InteractEvent, OpenLinkEvent, ...)
/// - Frame ordering and translation easing
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_state::<RoomState>()

            // Register shared events
            .add_event::<InteractEvent>()
            .add_event::<OpenLinkEvent>()
            .add_event::<DrawerToggled>()
            .add_event::<BookOpened>()
            .add_event::<BookClosed>()

            .configure_sets(
                Startup,
                (RoomStartup::Config, RoomStartup::State, RoomStartup::Scene).chain(),
            )
            .configure_sets(
                Update,
                (RoomSet::Input, RoomSet::Animate, RoomSet::Present).chain(),
            )

            // Smooth translation easing (runs in every room state)
            .add_systems(Update, update_smooth_translations.in_set(RoomSet::Animate));
    }
}
