//! Links plugin - outbound URLs.

use bevy::prelude::*;

use crate::core::RoomSet;

use super::opener::open_external_links;

pub struct LinksPlugin;

impl Plugin for LinksPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, open_external_links.in_set(RoomSet::Present));
    }
}
