//! Portfolio Room - an interactive 3D portfolio scene in Bevy.
//!
//! # Architecture
//!
//! The room is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Room states, shared events, easing and system ordering
//! - **Interaction**: Toggle flags, pointer forwarding, action dispatch
//! - **Animation**: Drawers, display boards, ball physics, window hinges, book
//! - **Text**: Typewriter state machine and font loading
//! - **Camera**: Start-phase look-at and orbit controls
//! - **World**: Configuration table, palette materials, scene construction
//! - **UI**: Intro overlay, about-me panel, project captions
//! - **Links**: Opening external URLs

pub mod animation;
pub mod camera;
pub mod core;
pub mod interaction;
pub mod links;
pub mod text;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main room plugin that adds all sub-plugins.
pub struct RoomPlugin;

impl Plugin for RoomPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Configuration table and scene
            .add_plugins(world::WorldPlugin)

            // Pointer input and toggle state
            .add_plugins(interaction::InteractionPlugin)

            // Per-frame animators
            .add_plugins(animation::AnimationPlugin)

            // Typewriter and fonts
            .add_plugins(text::TextPlugin)

            // Camera rig
            .add_plugins(camera::CameraPlugin)

            // UI overlays
            .add_plugins(ui::UiPlugin)

            // Outbound links
            .add_plugins(links::LinksPlugin);
    }
}
