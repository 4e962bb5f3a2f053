//! Palette and material registry for room geometry.

use bevy::prelude::*;
use std::collections::HashMap;

use super::error::ConfigError;

/// Immutable table of named colors, parsed once from the room config.
#[derive(Resource, Debug, Clone)]
pub struct Palette {
    colors: HashMap<String, Color>,
}

impl Palette {
    /// Parse every hex entry, rejecting the whole palette on the first bad one.
    pub fn from_hex(entries: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut colors = HashMap::with_capacity(entries.len());
        for (name, value) in entries {
            let srgba = Srgba::hex(value).map_err(|_| ConfigError::InvalidColor {
                name: name.clone(),
                value: value.clone(),
            })?;
            colors.insert(name.clone(), Color::Srgba(srgba));
        }
        Ok(Self { colors })
    }

    /// A palette with no entries; every lookup falls back.
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// Look up a color by name. Unknown names fall back to magenta so they
    /// stand out in the scene.
    pub fn color(&self, name: &str) -> Color {
        self.colors.get(name).copied().unwrap_or_else(|| {
            warn!("Unknown palette color '{}'", name);
            Color::srgb(1.0, 0.0, 1.0)
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }
}

/// Material registry mapping palette names to shared handles.
pub struct MaterialRegistry<'a> {
    materials: &'a mut Assets<StandardMaterial>,
    palette: &'a Palette,
    shared: HashMap<String, Handle<StandardMaterial>>,
}

impl<'a> MaterialRegistry<'a> {
    pub fn new(materials: &'a mut Assets<StandardMaterial>, palette: &'a Palette) -> Self {
        Self {
            materials,
            palette,
            shared: HashMap::new(),
        }
    }

    /// Shared matte material for a palette color.
    pub fn get(&mut self, name: &str) -> Handle<StandardMaterial> {
        if let Some(handle) = self.shared.get(name) {
            return handle.clone();
        }
        let handle = self.materials.add(StandardMaterial {
            base_color: self.palette.color(name),
            perceptual_roughness: 0.8,
            ..default()
        });
        self.shared.insert(name.to_string(), handle.clone());
        handle
    }

    /// Material owned by a single entity, for surfaces whose color or glow
    /// changes at runtime.
    pub fn unique(&mut self, name: &str) -> Handle<StandardMaterial> {
        self.materials.add(StandardMaterial {
            base_color: self.palette.color(name),
            perceptual_roughness: 0.8,
            ..default()
        })
    }

    /// Translucent material (window panes).
    pub fn glass(&mut self, name: &str, alpha: f32) -> Handle<StandardMaterial> {
        self.materials.add(StandardMaterial {
            base_color: self.palette.color(name).with_alpha(alpha),
            alpha_mode: AlphaMode::Blend,
            ..default()
        })
    }

    pub fn palette(&self) -> &Palette {
        self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_parses() {
        let config = crate::world::RoomConfig::default();
        let palette = Palette::from_hex(&config.palette).unwrap();
        assert!(palette.contains("orange"));
        assert_eq!(palette.color("trueWhite"), Color::Srgba(Srgba::WHITE));
    }

    #[test]
    fn bad_hex_is_rejected() {
        let mut entries = HashMap::new();
        entries.insert("oops".to_string(), "#12zz".to_string());
        let err = Palette::from_hex(&entries).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { ref name, .. } if name == "oops"));
    }
}
