//! World plugin - configuration table, palette and room construction.

use bevy::prelude::*;

use crate::core::{RoomSet, RoomStartup};
use crate::interaction::{InteractionTable, ToggleStore};

use super::builder::{build_room, RoomBuilder};
use super::data::{load_room_config, RoomConfig};
use super::lights::{apply_dark_glows, apply_toggle_lights, apply_toggle_tints, apply_visibility};
use super::materials::{MaterialRegistry, Palette};

/// World plugin - handles configuration loading and scene setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (load_room_config, load_palette)
                .chain()
                .in_set(RoomStartup::Config),
        )
        .add_systems(Startup, setup_room.in_set(RoomStartup::Scene))
        .add_systems(
            Update,
            (
                apply_toggle_lights,
                apply_dark_glows,
                apply_toggle_tints,
                apply_visibility,
            )
                .run_if(resource_changed::<ToggleStore>)
                .in_set(RoomSet::Present),
        );
    }
}

/// Parse the palette, falling back to the built-in colors.
pub fn load_palette(mut commands: Commands, config: Res<RoomConfig>) {
    let palette = Palette::from_hex(&config.palette).unwrap_or_else(|e| {
        error!("{}. Using the default palette.", e);
        Palette::from_hex(&RoomConfig::default().palette).unwrap_or_else(|_| Palette::empty())
    });
    commands.insert_resource(palette);
}

/// Set up the room from the configuration table.
pub fn setup_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut table: ResMut<InteractionTable>,
    config: Res<RoomConfig>,
    palette: Res<Palette>,
) {
    info!("Building room");

    let mut builder = RoomBuilder {
        commands: &mut commands,
        meshes: &mut meshes,
        materials: MaterialRegistry::new(&mut materials, &palette),
        table: &mut table,
    };
    build_room(&mut builder, &config);
}
