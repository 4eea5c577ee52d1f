use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Touch", inline)]
#[serde(default)]
/// Gesture thresholds and screen-edge sizes, in pixels.
pub struct TouchOptions {
    /// Per-frame drag distance a single contact must exceed on one axis
    /// before it rotates or pans vertically instead of panning planar.
    #[schemars(title = "Touch Sensitivity", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub touch_sensitivity: f32,
    /// World units of height per pixel of pinch per second.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Horizontal edge threshold. Carried in presets.
    #[schemars(skip)]
    pub horizontal_edge_threshold: f32,
    /// Vertical edge threshold. Carried in presets.
    #[schemars(skip)]
    pub vertical_edge_threshold: f32,
    /// Width of the band along each screen edge that counts as "near".
    #[schemars(title = "Screen Edge Border", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub screen_edge_border: f32,
}

impl Default for TouchOptions {
    fn default() -> Self {
        Self {
            touch_sensitivity: 10.0,
            zoom_speed: 1.0,
            horizontal_edge_threshold: 30.0,
            vertical_edge_threshold: 45.0,
            screen_edge_border: 5.0,
        }
    }
}
