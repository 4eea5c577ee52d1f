//! Controller tuning options with TOML preset support.
//!
//! Every speed, threshold, and limit the camera controller reads lives here,
//! grouped by concern. Options serialize to/from TOML so tuning presets can
//! be kept next to the application that hosts the controller. The
//! controller treats them as immutable for its lifetime.

mod direction_change;
mod hover;
mod invert;
mod limits;
mod movement;
mod stabilization;
mod touch;

use std::path::Path;

pub use direction_change::DirectionChangeOptions;
pub use hover::HoverOptions;
pub use invert::{sign, InvertOptions};
pub use limits::LimitOptions;
pub use movement::MovementOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use stabilization::StabilizationOptions;
pub use touch::TouchOptions;

use crate::error::HovercamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[hover]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Motion speeds.
    pub movement: MovementOptions,
    /// Gesture thresholds and screen edges.
    pub touch: TouchOptions,
    /// Height, tilt, and planar bounds.
    pub limits: LimitOptions,
    /// Idle re-leveling.
    pub stabilization: StabilizationOptions,
    /// Idle vertical bob.
    pub hover: HoverOptions,
    /// Rotation momentum.
    pub direction_change: DirectionChangeOptions,
    /// Per-motion sign inversion.
    pub invert: InvertOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, HovercamError> {
        let content =
            std::fs::read_to_string(path).map_err(HovercamError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, HovercamError> {
        toml::from_str(content)
            .map_err(|e| HovercamError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), HovercamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HovercamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(HovercamError::Io)?;
        }
        std::fs::write(path, content).map_err(HovercamError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
