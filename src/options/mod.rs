//! Gesture control options with TOML preset support.
//!
//! Camera and object control settings are consolidated here. Options
//! serialize to/from TOML so gesture mappings can be kept as presets. A
//! count constraint is written as an integer (`hands = 1`) or an inclusive
//! pair (`fingers = [2, 3]`).

mod camera;
mod object;

use std::path::Path;

pub use camera::CameraControlOptions;
pub use object::ObjectControlOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::HandcamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
///
/// A channel table such as `[camera.rotate]` is laid over that channel's
/// own defaults, so keys it leaves out keep their per-channel values.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera orbit controls.
    pub camera: CameraControlOptions,
    /// Object manipulation controls.
    pub object: ObjectControlOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, HandcamError> {
        let content = std::fs::read_to_string(path).map_err(HandcamError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, HandcamError> {
        toml::from_str(content)
            .map_err(|e| HandcamError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), HandcamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HandcamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(HandcamError::Io)?;
        }
        std::fs::write(path, content).map_err(HandcamError::Io)
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
