use super::pose::{rotation_from_degrees, CameraPose};
use crate::options::{sign, Options};

/// Pitch the camera by `angle_delta * tilt_speed * dt` degrees, clamped to
/// `[min_x_angle, max_x_angle]`. Yaw and roll are kept.
///
/// Positive input tilts the view up (pitch decreases).
pub fn tilt(pose: &mut CameraPose, angle_delta: f32, options: &Options, dt: f32) {
    let (yaw, pitch, roll) = pose.euler_degrees();
    let amount = sign(options.invert.tilt)
        * angle_delta
        * options.movement.tilt_speed
        * dt;
    let limits = &options.limits;
    let pitch = (pitch - amount).max(limits.min_x_angle).min(limits.max_x_angle);
    pose.rotation = rotation_from_degrees(yaw, pitch, roll);
}
