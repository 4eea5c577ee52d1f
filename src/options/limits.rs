use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Limits", inline)]
#[serde(default)]
/// Bounds every camera motion is clamped to.
pub struct LimitOptions {
    /// Lowest camera height.
    #[schemars(title = "Min Height", range(min = 0.0, max = 500.0), extend("step" = 1.0))]
    pub min_y: f32,
    /// Highest camera height.
    #[schemars(title = "Max Height", range(min = 0.0, max = 500.0), extend("step" = 1.0))]
    pub max_y: f32,
    /// Lowest tilt (pitch) in degrees.
    #[schemars(title = "Min Tilt", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub min_x_angle: f32,
    /// Highest tilt (pitch) in degrees.
    #[schemars(title = "Max Tilt", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub max_x_angle: f32,
    /// Half-extent of the square the camera's X/Z position is kept inside.
    #[schemars(skip)]
    pub planar_bound: f32,
}

impl Default for LimitOptions {
    fn default() -> Self {
        Self {
            min_y: 10.0,
            max_y: 80.0,
            min_x_angle: 10.0,
            max_x_angle: 80.0,
            planar_bound: 100.0,
        }
    }
}

impl LimitOptions {
    /// Clamp a camera height to `[min_y, max_y]`.
    ///
    /// Unlike `f32::clamp` this never panics on a misordered preset; the
    /// upper bound wins.
    #[inline]
    pub fn clamp_height(&self, y: f32) -> f32 {
        y.max(self.min_y).min(self.max_y)
    }

    /// Clamp a planar coordinate to `[-planar_bound, planar_bound]`.
    #[inline]
    pub fn clamp_planar(&self, v: f32) -> f32 {
        let bound = self.planar_bound.abs();
        v.max(-bound).min(bound)
    }
}
