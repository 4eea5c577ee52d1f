use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Movement", inline)]
#[serde(default)]
/// Speeds for the motions the controller applies, in world units (or
/// degrees) per pixel per second.
pub struct MovementOptions {
    /// Forward dolly speed. Carried in presets, not bound to a gesture.
    #[schemars(skip)]
    pub forward_speed: f32,
    /// Backward dolly speed. Carried in presets, not bound to a gesture.
    #[schemars(skip)]
    pub backward_speed: f32,
    /// Horizontal swipe speed. Carried in presets, not bound to a gesture.
    #[schemars(skip)]
    pub swipe_speed_horizontal: f32,
    /// Vertical swipe speed. Carried in presets, not bound to a gesture.
    #[schemars(skip)]
    pub swipe_speed_vertical: f32,
    /// Degrees of yaw per pixel per second for a horizontal drag.
    #[schemars(title = "Rotation Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub rotation_speed_horizontal: f32,
    /// Vertical rotation speed. Carried in presets, not bound to a gesture.
    #[schemars(skip)]
    pub rotation_speed_vertical: f32,
    /// Continuous horizontal rotation speed. Carried in presets.
    #[schemars(skip)]
    pub continuous_rotation_speed_horizontal: f32,
    /// Continuous vertical rotation speed. Carried in presets.
    #[schemars(skip)]
    pub continuous_rotation_speed_vertical: f32,
    /// Acceleration. Carried in presets.
    #[schemars(skip)]
    pub acceleration: f32,
    /// Deceleration. Carried in presets.
    #[schemars(skip)]
    pub deceleration: f32,
    /// World units per pixel per second for vertical and planar pans.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 50.0), extend("step" = 0.5))]
    pub camera_speed: f32,
    /// Degrees of pitch per unit of tilt input per second.
    #[schemars(title = "Tilt Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub tilt_speed: f32,
}

impl Default for MovementOptions {
    fn default() -> Self {
        Self {
            forward_speed: 15.0,
            backward_speed: 15.0,
            swipe_speed_horizontal: 1.0,
            swipe_speed_vertical: 1.0,
            rotation_speed_horizontal: 1.0,
            rotation_speed_vertical: 1.0,
            continuous_rotation_speed_horizontal: 20.0,
            continuous_rotation_speed_vertical: 20.0,
            acceleration: 1.0,
            deceleration: 1.0,
            camera_speed: 10.0,
            tilt_speed: 1.0,
        }
    }
}
