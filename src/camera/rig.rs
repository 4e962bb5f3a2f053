//! Orthographic room camera: cursor look-at on the start screen, orbit
//! controls once the visitor is exploring.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::window::PrimaryWindow;

/// Camera controller settings.
#[derive(Resource, Debug, Clone)]
pub struct CameraConfig {
    /// Radians of orbit per pixel of drag
    pub rotate_sensitivity: f32,
    /// Fraction of scale changed per wheel line
    pub zoom_speed: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub min_azimuth: f32,
    pub max_azimuth: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    /// Start-screen look-at target is clamped to this box around the origin
    pub look_bound: f32,
    /// World units visible vertically at scale 1
    pub viewport_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            rotate_sensitivity: 0.005,
            zoom_speed: 0.03,
            min_scale: 0.3,
            max_scale: 1.5,
            min_azimuth: 0.0,
            max_azimuth: FRAC_PI_2,
            min_polar: 0.1,
            max_polar: FRAC_PI_2,
            look_bound: 5.0,
            viewport_height: 9.0,
        }
    }
}

/// Spherical camera placement around a focus point.
///
/// Azimuth is measured around +Y from +Z toward +X, polar from +Y down.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RoomCamera {
    pub focus: Vec3,
    pub radius: f32,
    pub azimuth: f32,
    pub polar: f32,
}

impl Default for RoomCamera {
    /// Looking at the origin from (10, 10, 10).
    fn default() -> Self {
        Self::from_position(Vec3::splat(10.0), Vec3::ZERO)
    }
}

impl RoomCamera {
    pub fn from_position(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let radius = offset.length();
        Self {
            focus,
            radius,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn position(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        self.focus
            + self.radius * Vec3::new(sin_polar * sin_azimuth, cos_polar, sin_polar * cos_azimuth)
    }

    /// Apply a drag delta in pixels, keeping both angles in range.
    pub fn orbit(&mut self, delta: Vec2, config: &CameraConfig) {
        self.azimuth = (self.azimuth - delta.x * config.rotate_sensitivity)
            .clamp(config.min_azimuth, config.max_azimuth);
        self.polar = (self.polar - delta.y * config.rotate_sensitivity)
            .clamp(config.min_polar, config.max_polar);
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.focus, Vec3::Y)
    }
}

/// Start-screen look-at point for a cursor position normalized to [0, 1]
/// with y pointing down.
pub fn start_look_target(cursor: Vec2, bound: f32) -> Vec3 {
    let x = cursor.x * 5.0 - 2.5;
    let y = (1.0 - cursor.y) * 5.0 - 1.7;
    Vec3::new(x.clamp(-bound, bound), y.clamp(-bound, bound), 0.0)
}

/// Scale after `lines` of wheel input; positive lines zoom in.
pub fn zoomed_scale(scale: f32, lines: f32, config: &CameraConfig) -> f32 {
    (scale * (1.0 - lines * config.zoom_speed)).clamp(config.min_scale, config.max_scale)
}

/// Spawn the orthographic room camera.
pub fn spawn_camera(mut commands: Commands, config: Res<CameraConfig>) {
    let rig = RoomCamera::default();

    commands.spawn((
        Camera3d::default(),
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: config.viewport_height,
            },
            ..OrthographicProjection::default_3d()
        }),
        rig.transform(),
        rig,
    ));
}

/// Follow the cursor while the intro is showing.
pub fn look_at_cursor(
    config: Res<CameraConfig>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<(&mut Transform, &RoomCamera)>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let size = window.size();
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }

    let target = start_look_target(cursor / size, config.look_bound);
    for (mut transform, rig) in camera_query.iter_mut() {
        transform.translation = rig.position();
        transform.look_at(target, Vec3::Y);
    }
}

/// Put the camera back on its orbit when exploring starts.
pub fn reset_to_orbit(mut camera_query: Query<(&mut Transform, &RoomCamera)>) {
    for (mut transform, rig) in camera_query.iter_mut() {
        *transform = rig.transform();
    }
}

/// Left-drag orbits the room.
pub fn orbit_camera(
    mut mouse_motion: EventReader<MouseMotion>,
    buttons: Res<ButtonInput<MouseButton>>,
    config: Res<CameraConfig>,
    mut camera_query: Query<(&mut Transform, &mut RoomCamera)>,
) {
    // Accumulate mouse movement
    let mut delta = Vec2::ZERO;
    for event in mouse_motion.read() {
        delta += event.delta;
    }

    if delta == Vec2::ZERO || !buttons.pressed(MouseButton::Left) {
        return;
    }

    for (mut transform, mut rig) in camera_query.iter_mut() {
        rig.orbit(delta, &config);
        *transform = rig.transform();
    }
}

/// Mouse wheel zooms the orthographic projection.
pub fn zoom_camera(
    mut wheel: EventReader<MouseWheel>,
    config: Res<CameraConfig>,
    mut projection_query: Query<&mut Projection, With<RoomCamera>>,
) {
    let lines: f32 = wheel
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / 100.0,
        })
        .sum();

    if lines == 0.0 {
        return;
    }

    for mut projection in projection_query.iter_mut() {
        if let Projection::Orthographic(ortho) = projection.as_mut() {
            ortho.scale = zoomed_scale(ortho.scale, lines, &config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rig_sits_at_ten_ten_ten() {
        let rig = RoomCamera::default();
        assert!((rig.azimuth - FRAC_PI_4).abs() < 1e-6);
        assert!(rig.position().distance(Vec3::splat(10.0)) < 1e-4);
    }

    #[test]
    fn orbit_angles_are_clamped() {
        let config = CameraConfig::default();
        let mut rig = RoomCamera::default();

        rig.orbit(Vec2::new(-10_000.0, 10_000.0), &config);
        assert_eq!(rig.azimuth, config.max_azimuth);
        assert_eq!(rig.polar, config.min_polar);

        rig.orbit(Vec2::new(10_000.0, -10_000.0), &config);
        assert_eq!(rig.azimuth, config.min_azimuth);
        assert_eq!(rig.polar, config.max_polar);
        // Never below the floor plane.
        assert!(rig.position().y >= rig.focus.y - 1e-4);
    }

    #[test]
    fn start_target_follows_cursor_within_bounds() {
        let center = start_look_target(Vec2::new(0.5, 0.5), 5.0);
        assert!((center.x - 0.0).abs() < 1e-6);
        assert!((center.y - 0.8).abs() < 1e-6);

        let tight = start_look_target(Vec2::new(1.0, 0.0), 1.0);
        assert_eq!(tight, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn zoom_is_clamped() {
        let config = CameraConfig::default();
        assert!(zoomed_scale(1.0, 1.0, &config) < 1.0);
        assert_eq!(zoomed_scale(1.0, 1_000.0, &config), config.min_scale);
        assert_eq!(zoomed_scale(1.0, -1_000.0, &config), config.max_scale);
    }

    #[test]
    fn drag_orbits_only_while_left_button_held() {
        let mut app = App::new();
        app.add_event::<MouseMotion>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<CameraConfig>()
            .add_systems(Update, orbit_camera);

        let rig = RoomCamera::default();
        let camera = app.world_mut().spawn((rig.transform(), rig)).id();

        app.world_mut().send_event(MouseMotion {
            delta: Vec2::new(40.0, 0.0),
        });
        app.update();
        assert_eq!(*app.world().get::<RoomCamera>(camera).unwrap(), rig);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.world_mut().send_event(MouseMotion {
            delta: Vec2::new(40.0, 0.0),
        });
        app.update();

        let moved = app.world().get::<RoomCamera>(camera).unwrap();
        assert!(moved.azimuth < rig.azimuth);
        let transform = app.world().get::<Transform>(camera).unwrap();
        assert!(transform.translation.distance(moved.position()) < 1e-4);
    }
}
