//! Centralized style and timing options with TOML preset support.
//!
//! All tweakable settings (colors, stroke geometry, frame pacing) are
//! consolidated here and serialize to/from TOML. Geometry that defines the
//! widget's identity (step count, triangle pair, phase constants) is fixed
//! at compile time and deliberately not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::error::TristepError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[style]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Colors and stroke geometry.
    pub style: StyleOptions,
    /// Frame pacing.
    pub timing: TimingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TristepError> {
        let content = std::fs::read_to_string(path).map_err(TristepError::Io)?;
        toml::from_str(&content)
            .map_err(|e| TristepError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TristepError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TristepError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TristepError::Io)?;
        }
        std::fs::write(path, content).map_err(TristepError::Io)
    }
}

/// Colors and stroke geometry for the step shapes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StyleOptions {
    /// RGB color for triangle strokes and fills.
    pub fore_color: [f32; 3],
    /// RGB background clear color.
    pub back_color: [f32; 3],
    /// Stroke width divisor: width = `min(w, h) / stroke_factor`.
    pub stroke_factor: f32,
    /// Triangle size divisor: size = `gap / size_factor`.
    pub size_factor: f32,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            // #4CAF50 on #212121
            fore_color: [0.298, 0.686, 0.314],
            back_color: [0.129, 0.129, 0.129],
            stroke_factor: 90.0,
            size_factor: 2.9,
        }
    }
}

/// Frame pacing options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingOptions {
    /// Delay between animation ticks, in milliseconds.
    pub frame_delay_ms: u64,
}

impl TimingOptions {
    /// Tick delay as a [`Duration`].
    #[must_use]
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self { frame_delay_ms: 50 }
    }
}
