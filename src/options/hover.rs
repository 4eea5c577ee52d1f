use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Hover", inline)]
#[serde(default)]
/// Free-running vertical bob around the starting height.
pub struct HoverOptions {
    /// Lerp rate toward the bob height, per second.
    #[schemars(title = "Smoothness", range(min = 0.0, max = 20.0), extend("step" = 0.1))]
    pub smoothness: f32,
    /// Peak height offset from the baseline, in world units.
    #[schemars(title = "Amplitude", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub amplitude: f32,
    /// Angular frequency of the bob, in radians per second.
    #[schemars(title = "Frequency", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub frequency: f32,
}

impl Default for HoverOptions {
    fn default() -> Self {
        Self {
            smoothness: 1.0,
            amplitude: 1.0,
            frequency: 1.0,
        }
    }
}
