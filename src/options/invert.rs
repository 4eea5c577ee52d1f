use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-motion sign inversion toggles. All off by default.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Invert", inline)]
#[serde(default)]
pub struct InvertOptions {
    /// Invert horizontal drag rotation.
    pub swipe_horizontal: bool,
    /// Invert vertical drag height pan.
    pub swipe_vertical: bool,
    /// Reserved: no continuous horizontal rotation motion consumes it.
    #[schemars(skip)]
    pub continuous_rotation_horizontal: bool,
    /// Reserved: no continuous vertical rotation motion consumes it.
    #[schemars(skip)]
    pub continuous_rotation_vertical: bool,
    /// Invert tilt.
    pub tilt: bool,
    /// Invert planar pan.
    pub movement: bool,
    /// Invert momentum spin direction.
    pub direction_change: bool,
}

/// `-1.0` when `inverted`, `1.0` otherwise.
#[inline]
pub fn sign(inverted: bool) -> f32 {
    if inverted {
        -1.0
    } else {
        1.0
    }
}
