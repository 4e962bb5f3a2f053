//! Exponential-decay easing toward a mutable target.

use bevy::prelude::*;

/// Values that can be moved fractionally toward a target.
pub trait Ease: Copy {
    fn ease_to(self, target: Self, fraction: f32) -> Self;
}

impl Ease for f32 {
    fn ease_to(self, target: Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Ease for Vec3 {
    fn ease_to(self, target: Self, fraction: f32) -> Self {
        self.lerp(target, fraction)
    }
}

/// Fraction of the remaining distance covered in `dt` seconds at `rate`.
///
/// Always in `[0, 1)`, so easing never overshoots. Negative `dt` counts as zero.
pub fn ease_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt.max(0.0)).exp()
}

/// Move `current` toward `target` by one frame of exponential decay.
pub fn ease_toward<T: Ease>(current: T, target: T, rate: f32, dt: f32) -> T {
    current.ease_to(target, ease_factor(rate, dt))
}

/// Component for smooth translation toward a target.
///
/// Only event handlers and other animators write `target`; the easing system
/// only ever writes the transform.
#[derive(Component, Debug, Clone, Copy)]
pub struct SmoothTranslation {
    pub target: Vec3,
    /// Decay rate per second (higher = faster)
    pub rate: f32,
}

impl SmoothTranslation {
    pub fn new(target: Vec3, rate: f32) -> Self {
        Self { target, rate }
    }
}

/// System that eases translations toward their targets.
pub fn update_smooth_translations(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &SmoothTranslation)>,
) {
    let dt = time.delta_secs();

    for (mut transform, smooth) in query.iter_mut() {
        if transform.translation != smooth.target {
            transform.translation =
                ease_toward(transform.translation, smooth.target, smooth.rate, dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_never_overshoots() {
        let target = Vec3::new(0.6, 1.0, 0.0);
        for &dt in &[0.0, 0.001, 1.0 / 60.0, 0.1, 0.5, 3.0] {
            let mut current = Vec3::new(0.0, 1.0, 0.0);
            for _ in 0..50 {
                let next = ease_toward(current, target, 5.0, dt);
                assert!(next.distance(target) <= current.distance(target) + 1e-6);
                assert!(next.x >= current.x - 1e-6 && next.x <= target.x + 1e-6);
                current = next;
            }
        }
    }

    #[test]
    fn target_is_a_fixed_point() {
        let p = Vec3::new(-1.4, 0.1, 0.4);
        assert_eq!(ease_toward(p, p, 5.0, 1.0 / 60.0), p);
        assert_eq!(ease_toward(0.5_f32, 0.5, 10.0, 0.2), 0.5);
    }

    #[test]
    fn negative_delta_is_ignored() {
        assert_eq!(ease_factor(5.0, -1.0), 0.0);
        assert_eq!(ease_toward(1.0_f32, 0.0, 5.0, -0.5), 1.0);
    }

    #[test]
    fn easing_matches_exponential_decay() {
        let next = ease_toward(0.0_f32, 1.0, 5.0, 0.2);
        assert!((next - (1.0 - (-1.0_f32).exp())).abs() < 1e-6);
    }
}
