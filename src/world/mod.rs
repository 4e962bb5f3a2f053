//! World module - configuration table, palette and the room scene.

mod builder;
mod data;
mod error;
mod geometry;
mod lights;
mod materials;
mod plugin;

pub use builder::{build_room, RoomBuilder};
pub use data::{
    load_room_config, vec3, BallConfig, BoardConfig, BookConfig, DrawerConfig, HingeConfig,
    IntroLine, ProjectDef, RoomConfig, SocialLink, TextConfig, ROOM_CONFIG_PATH,
};
pub use error::ConfigError;
pub use geometry::RoomGeometry;
pub use lights::{DarkGlow, ShowWhen, ToggleLight, ToggleTint};
pub use materials::{MaterialRegistry, Palette};
pub use plugin::{load_palette, setup_room, WorldPlugin};
