//! Font loading for every typed text field.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::core::RoomState;
use crate::world::RoomConfig;

/// Load progress of the room font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStatus {
    #[default]
    Pending,
    Ready,
    /// Text is never spawned once loading has failed
    Failed,
}

impl FontStatus {
    /// Map an asset load state; `None` means the handle is unknown to the
    /// server, which only happens when the load was never queued.
    pub fn from_load_state(state: Option<&LoadState>) -> Self {
        match state {
            Some(LoadState::Loaded) => FontStatus::Ready,
            Some(LoadState::Failed(_)) | None => FontStatus::Failed,
            Some(_) => FontStatus::Pending,
        }
    }
}

/// The single font used by overlays and captions.
#[derive(Resource, Debug, Clone, Default)]
pub struct RoomFonts {
    pub handle: Handle<Font>,
    pub status: FontStatus,
}

impl RoomFonts {
    pub fn is_ready(&self) -> bool {
        self.status == FontStatus::Ready
    }

    /// Text style for a given size, or `None` until the font is usable.
    pub fn text_font(&self, font_size: f32) -> Option<TextFont> {
        self.is_ready().then(|| TextFont {
            font: self.handle.clone(),
            font_size,
            ..default()
        })
    }
}

/// Queue the font load.
pub fn load_fonts(mut commands: Commands, asset_server: Res<AssetServer>, config: Res<RoomConfig>) {
    let handle = asset_server.load(config.text.font_path.clone());
    commands.insert_resource(RoomFonts {
        handle,
        status: FontStatus::Pending,
    });
}

/// Wait for the font to resolve either way, then leave the loading state.
pub fn poll_fonts(
    asset_server: Res<AssetServer>,
    config: Res<RoomConfig>,
    mut fonts: ResMut<RoomFonts>,
    mut next_state: ResMut<NextState<RoomState>>,
) {
    let state = asset_server.get_load_state(fonts.handle.id());
    let status = FontStatus::from_load_state(state.as_ref());

    match status {
        FontStatus::Pending => return,
        FontStatus::Ready => info!("Loaded font {}", config.text.font_path),
        FontStatus::Failed => {
            error!(
                "Failed to load font {}. Typed text is disabled.",
                config.text.font_path
            );
        }
    }

    fonts.status = status;
    next_state.set(RoomState::Start);
}
