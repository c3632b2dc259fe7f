//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::axis::AxisConfig;
use super::timing::StepTiming;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named axis configurations.
    pub axes: FnvIndexMap<String<16>, AxisConfig, 4>,

    /// Shared step timing.
    #[serde(default)]
    pub timing: StepTiming,
}

impl SystemConfig {
    /// Get an axis configuration by name.
    pub fn axis(&self, name: &str) -> Option<&AxisConfig> {
        self.axes
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all axis names.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(|s| s.as_str())
    }
}

impl Default for SystemConfig {
    /// Two-axis defaults matching the deployed rig.
    fn default() -> Self {
        let mut axes = FnvIndexMap::new();
        let _ = axes.insert(String::try_from("pan").unwrap_or_default(), AxisConfig::pan());
        let _ = axes.insert(String::try_from("tilt").unwrap_or_default(), AxisConfig::tilt());
        Self {
            axes,
            timing: StepTiming::default(),
        }
    }
}
