//! Window leaves swinging outward around a single shared target.

use bevy::prelude::*;

use crate::core::ease_toward;
use crate::world::HingeConfig;

/// Shared hinge state for every window leaf in the room.
///
/// Both sides ease toward the same target, so the leaves can never drift
/// out of sync.
#[derive(Resource, Debug, Clone)]
pub struct HingeState {
    pub left: f32,
    pub right: f32,
    pub target: f32,
    open_angle: f32,
    rate: f32,
}

impl HingeState {
    pub fn new(config: &HingeConfig) -> Self {
        Self {
            left: 0.0,
            right: 0.0,
            target: 0.0,
            open_angle: config.open_angle,
            rate: config.rate,
        }
    }

    /// Flip the shared target between closed and open.
    pub fn toggle(&mut self) -> bool {
        let opening = self.target.abs() < 0.01;
        self.target = if opening { self.open_angle } else { 0.0 };
        opening
    }

    pub fn step(&mut self, dt: f32) {
        self.left = ease_toward(self.left, self.target, self.rate, dt);
        self.right = ease_toward(self.right, self.target, self.rate, dt);
    }

    /// Y rotation of a leaf; right leaves swing the other way.
    pub fn leaf_angle(&self, side: HingeSide) -> f32 {
        match side {
            HingeSide::Left => self.left,
            HingeSide::Right => -self.right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HingeSide {
    Left,
    Right,
}

/// A rotating window panel.
#[derive(Component, Debug, Clone, Copy)]
pub struct HingeLeaf(pub HingeSide);

/// Ease the shared hinge and apply it to every leaf.
pub fn swing_windows(
    time: Res<Time>,
    mut hinge: ResMut<HingeState>,
    mut leaves: Query<(&HingeLeaf, &mut Transform)>,
) {
    if hinge.left == hinge.target && hinge.right == hinge.target {
        return;
    }

    hinge.step(time.delta_secs());

    for (leaf, mut transform) in leaves.iter_mut() {
        transform.rotation = Quat::from_rotation_y(hinge.leaf_angle(leaf.0));
    }
}
