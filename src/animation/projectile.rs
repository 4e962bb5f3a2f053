//! Lacrosse ball: a one-shot fall with gravity, bounces and friction.

use bevy::prelude::*;

use crate::world::{vec3, BallConfig};

/// Motion phase of the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallPhase {
    /// Resting on the stick, waiting for the first hover
    #[default]
    Idle,
    /// Launched, has not touched the floor yet
    Falling,
    /// Has bounced at least once
    Bouncing,
    /// Came to rest; stays wherever it stopped
    Settled,
}

impl BallPhase {
    pub fn is_moving(self) -> bool {
        matches!(self, BallPhase::Falling | BallPhase::Bouncing)
    }
}

/// Physics constants shared by the ball systems.
#[derive(Resource, Debug, Clone)]
pub struct BallPhysics {
    pub launch_velocity: Vec3,
    pub gravity: f32,
    pub bounce_factor: f32,
    pub friction: f32,
    pub rest_threshold: f32,
    pub floor_y: f32,
    pub spin: f32,
}

impl BallPhysics {
    pub fn new(config: &BallConfig) -> Self {
        Self {
            launch_velocity: vec3(config.launch_velocity),
            gravity: config.gravity,
            bounce_factor: config.bounce_factor,
            friction: config.friction,
            rest_threshold: config.rest_threshold,
            floor_y: config.floor_y,
            spin: config.spin,
        }
    }
}

/// The ball's dynamic state.
#[derive(Component, Debug, Clone, Default)]
pub struct Ball {
    pub velocity: Vec3,
    pub phase: BallPhase,
    /// One-shot latch: once set the ball can never be launched again
    pub triggered: bool,
    /// Accumulated decorative spin around x and z
    pub spin: Vec2,
}

impl Ball {
    /// Launch the ball. Returns false if it was already launched this session.
    pub fn trigger(&mut self, physics: &BallPhysics) -> bool {
        if self.triggered || self.phase.is_moving() {
            return false;
        }
        self.triggered = true;
        self.phase = BallPhase::Falling;
        self.velocity = physics.launch_velocity;
        true
    }

    /// Advance one frame, moving `position` in place.
    pub fn step(&mut self, position: &mut Vec3, physics: &BallPhysics, dt: f32) {
        if !self.phase.is_moving() || dt <= 0.0 {
            return;
        }

        self.velocity.y += physics.gravity * dt;
        *position += self.velocity * dt;

        if position.y < physics.floor_y {
            position.y = physics.floor_y;

            let impact = self.velocity.y.abs();
            // The rebound must be able to lift the ball off the floor within
            // one frame, otherwise discrete steps keep it hopping forever.
            let lifts_off = impact * physics.bounce_factor >= physics.gravity.abs() * dt;

            if impact > physics.rest_threshold && lifts_off {
                self.velocity.y = impact * physics.bounce_factor;
                self.velocity.x *= physics.friction;
                self.velocity.z *= physics.friction;
                self.phase = BallPhase::Bouncing;
            } else {
                self.velocity = Vec3::ZERO;
                self.phase = BallPhase::Settled;
                debug!("Ball settled at {:?}", *position);
            }
        }

        self.spin.x += self.velocity.x * dt * physics.spin;
        self.spin.y += self.velocity.z * dt * physics.spin;
    }
}

/// Integrate the ball every frame it is in motion.
pub fn step_ball(
    time: Res<Time>,
    physics: Res<BallPhysics>,
    mut balls: Query<(&mut Ball, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (mut ball, mut transform) in balls.iter_mut() {
        if !ball.phase.is_moving() {
            continue;
        }

        let mut position = transform.translation;
        ball.step(&mut position, &physics, dt);
        transform.translation = position;
        transform.rotation = Quat::from_euler(EulerRot::XYZ, ball.spin.x, 0.0, ball.spin.y);
    }
}
