//! One-finger (or mouse) drag mapping.
//!
//! Each frame picks exactly one motion from the drag delta. Horizontal is
//! checked first, so a diagonal swipe past the threshold rotates.

use glam::{Vec2, Vec3};

use super::pose::CameraPose;
use crate::options::{sign, Options};

/// The single motion a drag delta resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SingleContactMotion {
    /// Yaw about world up, in degrees.
    Rotate {
        /// Signed yaw applied this frame.
        degrees: f32,
    },
    /// Height change, before clamping.
    Height {
        /// Signed height offset.
        amount: f32,
    },
    /// World-space X/Z translation, before clamping.
    Planar {
        /// Offset applied to `(x, z)`.
        offset: Vec2,
    },
}

impl SingleContactMotion {
    /// Pick the motion for a drag `delta` over a frame of `dt` seconds.
    pub fn resolve(delta: Vec2, options: &Options, dt: f32) -> Self {
        let sensitivity = options.touch.touch_sensitivity;
        let speed = options.movement.camera_speed;
        let invert = &options.invert;

        if delta.x.abs() > sensitivity {
            Self::Rotate {
                degrees: sign(invert.swipe_horizontal)
                    * delta.x
                    * options.movement.rotation_speed_horizontal
                    * dt,
            }
        } else if delta.y.abs() > sensitivity {
            Self::Height {
                amount: sign(invert.swipe_vertical) * delta.y * speed * dt,
            }
        } else {
            Self::Planar {
                offset: sign(invert.movement) * -delta * speed * dt,
            }
        }
    }

    /// Apply the motion to `pose`, clamping to the configured limits.
    pub fn apply(self, pose: &mut CameraPose, options: &Options) {
        let limits = &options.limits;
        match self {
            Self::Rotate { degrees } => pose.rotate_yaw(degrees),
            Self::Height { amount } => {
                pose.set_height(limits.clamp_height(pose.position.y + amount));
            }
            Self::Planar { offset } => {
                let moved = pose.position + Vec3::new(offset.x, 0.0, offset.y);
                pose.position = Vec3::new(
                    limits.clamp_planar(moved.x),
                    moved.y,
                    limits.clamp_planar(moved.z),
                );
            }
        }
    }
}
