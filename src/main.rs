//! Portfolio Room - Entry Point
//!
//! A stylized, interactive 3D room used as a personal portfolio.
//!
//! Controls:
//! - Mouse over objects: lamps, laptop, windows, ball, book
//! - Click: drawers, project boards, laptop links
//! - Click / Enter: leave the start screen
//! - Left drag: orbit, wheel: zoom

use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Portfolio Room".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Pointer picking against scene meshes
        .add_plugins(MeshPickingPlugin)

        .insert_resource(ClearColor(Color::BLACK))

        // Our room plugin
        .add_plugins(portfolio_room::RoomPlugin)

        .run();
}
