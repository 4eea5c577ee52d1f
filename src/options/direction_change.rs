use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Direction Change", inline)]
#[serde(default)]
/// Momentum spin that continues a horizontal rotation after the swipe.
pub struct DirectionChangeOptions {
    /// Direction change factor. Carried in presets.
    #[schemars(skip)]
    pub factor: f32,
    /// Blend rate from the current rotation toward the stepped one, per
    /// second.
    #[schemars(title = "Momentum Blend", range(min = 0.0, max = 20.0), extend("step" = 0.1))]
    pub speed: f32,
    /// Yaw step in degrees the momentum blends toward each frame.
    #[schemars(title = "Momentum Angle", range(min = 0.0, max = 45.0), extend("step" = 0.5))]
    pub angle: f32,
}

impl Default for DirectionChangeOptions {
    fn default() -> Self {
        Self {
            factor: 0.1,
            speed: 5.0,
            angle: 5.0,
        }
    }
}
