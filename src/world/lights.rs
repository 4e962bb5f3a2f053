//! Scene presentation driven by the toggle store: lights, glows, tints and
//! toggle-gated visibility.

use bevy::prelude::*;

use crate::interaction::{ToggleFlag, ToggleStore};

/// A point light that follows a toggle flag.
#[derive(Component, Debug, Clone, Copy)]
pub struct ToggleLight {
    pub flag: ToggleFlag,
    /// False for glow lights that shine while their object is off
    pub lit_when_on: bool,
    /// Intensity while lit
    pub intensity: f32,
}

impl ToggleLight {
    pub fn intensity_for(&self, on: bool) -> f32 {
        if on == self.lit_when_on {
            self.intensity
        } else {
            0.0
        }
    }
}

/// Emissive hint that is only visible while the room is dark.
#[derive(Component, Debug, Clone)]
pub struct DarkGlow {
    /// Every listed flag must be off for the glow to show
    pub when_all_off: Vec<ToggleFlag>,
    pub color: LinearRgba,
}

/// Base color that switches with a toggle flag.
#[derive(Component, Debug, Clone, Copy)]
pub struct ToggleTint {
    pub flag: ToggleFlag,
    pub on: Color,
    pub off: Color,
}

/// Entity is only shown while a flag is on.
#[derive(Component, Debug, Clone, Copy)]
pub struct ShowWhen(pub ToggleFlag);

pub fn apply_toggle_lights(
    toggles: Res<ToggleStore>,
    mut lights: Query<(&ToggleLight, &mut PointLight)>,
) {
    for (toggle, mut light) in lights.iter_mut() {
        light.intensity = toggle.intensity_for(toggles.is_on(toggle.flag));
    }
}

pub fn apply_dark_glows(
    toggles: Res<ToggleStore>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    glows: Query<(&DarkGlow, &MeshMaterial3d<StandardMaterial>)>,
) {
    for (glow, handle) in glows.iter() {
        let Some(material) = materials.get_mut(&handle.0) else {
            continue;
        };
        material.emissive = if toggles.all_off(&glow.when_all_off) {
            glow.color
        } else {
            LinearRgba::BLACK
        };
    }
}

pub fn apply_toggle_tints(
    toggles: Res<ToggleStore>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tints: Query<(&ToggleTint, &MeshMaterial3d<StandardMaterial>)>,
) {
    for (tint, handle) in tints.iter() {
        if let Some(material) = materials.get_mut(&handle.0) {
            material.base_color = if toggles.is_on(tint.flag) { tint.on } else { tint.off };
        }
    }
}

pub fn apply_visibility(
    toggles: Res<ToggleStore>,
    mut gated: Query<(&ShowWhen, &mut Visibility)>,
) {
    for (show_when, mut visibility) in gated.iter_mut() {
        *visibility = if toggles.is_on(show_when.0) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.init_resource::<ToggleStore>()
            .init_resource::<Assets<StandardMaterial>>()
            .add_systems(
                Update,
                (apply_toggle_lights, apply_dark_glows, apply_toggle_tints, apply_visibility),
            );
        app
    }

    fn flip(app: &mut App, flag: ToggleFlag) {
        app.world_mut().resource_mut::<ToggleStore>().interact(flag);
        app.update();
    }

    #[test]
    fn lights_follow_their_flag() {
        let mut app = app();
        let lamp = app
            .world_mut()
            .spawn((
                PointLight::default(),
                ToggleLight {
                    flag: ToggleFlag::DeskLamp,
                    lit_when_on: true,
                    intensity: 1000.0,
                },
            ))
            .id();
        let glow = app
            .world_mut()
            .spawn((
                PointLight::default(),
                ToggleLight {
                    flag: ToggleFlag::DeskLamp,
                    lit_when_on: false,
                    intensity: 50.0,
                },
            ))
            .id();

        app.update();
        assert_eq!(app.world().get::<PointLight>(lamp).unwrap().intensity, 0.0);
        assert_eq!(app.world().get::<PointLight>(glow).unwrap().intensity, 50.0);

        flip(&mut app, ToggleFlag::DeskLamp);
        assert_eq!(app.world().get::<PointLight>(lamp).unwrap().intensity, 1000.0);
        assert_eq!(app.world().get::<PointLight>(glow).unwrap().intensity, 0.0);
    }

    #[test]
    fn dark_glow_needs_every_flag_off() {
        let mut app = app();
        let handle = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());
        app.world_mut().spawn((
            MeshMaterial3d(handle.clone()),
            DarkGlow {
                when_all_off: vec![ToggleFlag::DeskLamp, ToggleFlag::StringLights],
                color: LinearRgba::RED,
            },
        ));

        let emissive = |app: &App| {
            app.world()
                .resource::<Assets<StandardMaterial>>()
                .get(&handle)
                .unwrap()
                .emissive
        };

        app.update();
        assert_eq!(emissive(&app), LinearRgba::RED);

        flip(&mut app, ToggleFlag::StringLights);
        assert_eq!(emissive(&app), LinearRgba::BLACK);

        // The laptop is not one of the listed flags.
        flip(&mut app, ToggleFlag::StringLights);
        flip(&mut app, ToggleFlag::Laptop);
        assert_eq!(emissive(&app), LinearRgba::RED);
    }

    #[test]
    fn link_tiles_hidden_until_laptop_is_on() {
        let mut app = app();
        let tile = app
            .world_mut()
            .spawn((Visibility::Inherited, ShowWhen(ToggleFlag::Laptop)))
            .id();

        app.update();
        assert_eq!(*app.world().get::<Visibility>(tile).unwrap(), Visibility::Hidden);

        flip(&mut app, ToggleFlag::Laptop);
        assert_eq!(*app.world().get::<Visibility>(tile).unwrap(), Visibility::Inherited);
    }
}
