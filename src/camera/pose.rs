use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World-space camera transform: position plus orientation.
///
/// The host owns the pose; the controller borrows it mutably once per frame
/// and keeps no copy between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Camera position in world space. `y` is height.
    pub position: Vec3,
    /// Camera orientation.
    pub rotation: Quat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl CameraPose {
    /// Pose at `position` with no rotation.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Pose from yaw (about world up), pitch (about local X) and roll
    /// (about local Z), all in degrees.
    pub fn from_euler_degrees(
        position: Vec3,
        yaw: f32,
        pitch: f32,
        roll: f32,
    ) -> Self {
        Self {
            position,
            rotation: rotation_from_degrees(yaw, pitch, roll),
        }
    }

    /// `(yaw, pitch, roll)` in degrees, yaw in `(-180, 180]`.
    pub fn euler_degrees(&self) -> (f32, f32, f32) {
        let (yaw, pitch, roll) = self.rotation.to_euler(EulerRot::YXZ);
        (yaw.to_degrees(), pitch.to_degrees(), roll.to_degrees())
    }

    /// Yaw in degrees.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.euler_degrees().0
    }

    /// Pitch (tilt) in degrees.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.euler_degrees().1
    }

    /// Roll in degrees.
    #[inline]
    pub fn roll(&self) -> f32 {
        self.euler_degrees().2
    }

    /// Current yaw with pitch and roll removed.
    pub fn upright(&self) -> Quat {
        Quat::from_rotation_y(self.yaw().to_radians())
    }

    /// Rotate about the world up axis by `degrees`.
    pub fn rotate_yaw(&mut self, degrees: f32) {
        self.rotation = yaw_step(degrees) * self.rotation;
    }

    /// Set the height, leaving X/Z untouched.
    #[inline]
    pub fn set_height(&mut self, y: f32) {
        self.position.y = y;
    }

    /// World-to-view matrix for this pose.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }
}

/// World-space yaw rotation of `degrees` about +Y.
#[inline]
pub(crate) fn yaw_step(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.to_radians())
}

pub(crate) fn rotation_from_degrees(yaw: f32, pitch: f32, roll: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        yaw.to_radians(),
        pitch.to_radians(),
        roll.to_radians(),
    )
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform layout for hosts that upload the camera pose directly.
pub struct PoseUniform {
    /// World-to-view matrix.
    pub view: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl From<&CameraPose> for PoseUniform {
    fn from(pose: &CameraPose) -> Self {
        Self {
            view: pose.view_matrix().to_cols_array_2d(),
            position: pose.position.to_array(),
            _pad: 0.0,
        }
    }
}
