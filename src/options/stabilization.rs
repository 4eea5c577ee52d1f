use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Stabilization", inline)]
#[serde(default)]
/// Idle re-leveling of the camera after interaction ends.
pub struct StabilizationOptions {
    /// Slerp rate toward upright, per second.
    #[schemars(title = "Stabilization Speed", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub speed: f32,
    /// Grace period in seconds between the end of interaction and the
    /// start of re-leveling.
    #[schemars(skip)]
    pub delay: f32,
}

impl Default for StabilizationOptions {
    fn default() -> Self {
        Self {
            speed: 1.0,
            delay: 0.5,
        }
    }
}
