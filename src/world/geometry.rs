//! Primitive spawning helpers for room construction.

use bevy::prelude::*;

use super::lights::ToggleLight;

/// Marker for all room geometry.
#[derive(Component)]
pub struct RoomGeometry;

/// Spawn a box centered at `position`.
pub fn spawn_box(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    material: Handle<StandardMaterial>,
    size: Vec3,
    position: Vec3,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(material),
            Transform::from_translation(position),
            RoomGeometry,
        ))
        .id()
}

/// Spawn a sphere centered at `position`.
pub fn spawn_sphere(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    material: Handle<StandardMaterial>,
    radius: f32,
    position: Vec3,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(radius))),
            MeshMaterial3d(material),
            Transform::from_translation(position),
            RoomGeometry,
        ))
        .id()
}

/// Spawn an upright cylinder centered at `position`.
pub fn spawn_cylinder(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    material: Handle<StandardMaterial>,
    radius: f32,
    height: f32,
    position: Vec3,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(Cylinder::new(radius, height))),
            MeshMaterial3d(material),
            Transform::from_translation(position),
            RoomGeometry,
        ))
        .id()
}

/// Spawn a point light that follows a toggle flag. It starts dark; the
/// presentation systems set its intensity on the first frame.
pub fn spawn_toggle_light(
    commands: &mut Commands,
    position: Vec3,
    color: Color,
    range: f32,
    toggle: ToggleLight,
) -> Entity {
    commands
        .spawn((
            PointLight {
                color,
                intensity: 0.0,
                range,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(position),
            toggle,
            RoomGeometry,
        ))
        .id()
}

/// An empty transform node used as a pivot or group.
pub fn spawn_pivot(commands: &mut Commands, transform: Transform) -> Entity {
    commands
        .spawn((transform, Visibility::default(), RoomGeometry))
        .id()
}
