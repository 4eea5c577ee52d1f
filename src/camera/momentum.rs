//! Rotation momentum: after a horizontal swipe the camera keeps turning in
//! the same direction until input stops entirely.

use super::pose::{yaw_step, CameraPose};
use crate::options::{sign, Options};

/// Continuation state left behind by the last horizontal rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Momentum {
    active: bool,
    last_rotation: f32,
}

impl Momentum {
    /// Whether the spin is running.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Signed yaw (degrees) of the rotation that armed the spin.
    #[inline]
    pub fn last_rotation(&self) -> f32 {
        self.last_rotation
    }

    /// Arm with the yaw just applied by a swipe.
    pub fn arm(&mut self, degrees: f32) {
        self.active = true;
        self.last_rotation = degrees;
    }

    /// Stop the spin.
    pub fn clear(&mut self) {
        if self.active {
            log::trace!("momentum cleared");
        }
        self.active = false;
    }

    /// Blend the pose toward one fixed yaw step in the swipe direction.
    pub fn apply(&self, pose: &mut CameraPose, options: &Options, dt: f32) {
        if !self.active {
            return;
        }

        let settings = &options.direction_change;
        let direction = if self.last_rotation > 0.0 { 1.0 } else { -1.0 };
        let step =
            direction * sign(options.invert.direction_change) * settings.angle;

        let stepped = yaw_step(step) * pose.rotation;
        let t = (settings.speed * dt).clamp(0.0, 1.0);
        pose.rotation = pose.rotation.lerp(stepped, t);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn inactive_momentum_is_a_no_op() {
        let opts = Options::default();
        let mut pose = CameraPose::at(Vec3::Y * 40.0);
        Momentum::default().apply(&mut pose, &opts, 0.1);
        assert_eq!(pose, CameraPose::at(Vec3::Y * 40.0));
    }

    #[test]
    fn spins_in_swipe_direction() {
        let opts = Options::default();
        let mut momentum = Momentum::default();
        let mut pose = CameraPose::default();

        momentum.arm(3.0);
        momentum.apply(&mut pose, &opts, 0.1);
        // Half of a 5 degree step at speed 5 * 0.1
        assert!((pose.yaw() - 2.5).abs() < 0.01);

        momentum.arm(-3.0);
        let before = pose.yaw();
        momentum.apply(&mut pose, &opts, 0.1);
        assert!(pose.yaw() < before);
    }

    #[test]
    fn inverted_direction_change_flips_spin() {
        let mut opts = Options::default();
        opts.invert.direction_change = true;
        let mut momentum = Momentum::default();
        let mut pose = CameraPose::default();
        momentum.arm(3.0);
        momentum.apply(&mut pose, &opts, 0.1);
        assert!(pose.yaw() < 0.0);
    }

    #[test]
    fn clear_stops_spin_but_keeps_direction() {
        let mut momentum = Momentum::default();
        momentum.arm(-1.5);
        momentum.clear();
        assert!(!momentum.is_active());
        assert_eq!(momentum.last_rotation(), -1.5);
    }
}
