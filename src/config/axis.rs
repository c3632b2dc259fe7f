//! Per-axis configuration.

use heapless::String;
use serde::Deserialize;

/// Reference value assigned to an axis position when homing completes
/// at the negative limit switch.
///
/// Pan's usable range starts at its negative limit, so its reference is
/// zero; tilt's range is centered, so its reference is `soft_min`. The
/// asymmetry reflects the mechanics, which is why it is an explicit
/// configuration value rather than a code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum HomeReference {
    /// Position becomes 0 at the negative limit.
    #[default]
    Zero,
    /// Position becomes `soft_min` at the negative limit.
    SoftMin,
}

/// Complete axis configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Human-readable name (max 16 chars).
    pub name: String<16>,

    /// Minimum allowed position in steps.
    pub soft_min: i32,

    /// Maximum allowed position in steps.
    pub soft_max: i32,

    /// Invert direction pin logic (wiring-dependent).
    #[serde(default)]
    pub invert_direction: bool,

    /// Position reference assigned at the negative limit after homing.
    #[serde(default)]
    pub home_reference: HomeReference,

    /// Maximum steps to issue while seeking the negative limit before
    /// declaring the switch missing.
    pub seek_limit_steps: u32,

    /// Steps to back off after the fast seek, clearing the switch.
    #[serde(default = "default_backoff_steps")]
    pub backoff_steps: u32,
}

fn default_backoff_steps() -> u32 {
    200
}

impl AxisConfig {
    /// Pan axis defaults for the deployed rig.
    ///
    /// Physical travel is ~4255 steps; soft limits sit slightly inside.
    /// The motor wiring inverts the DIR sense.
    pub fn pan() -> Self {
        Self {
            name: String::try_from("PAN").unwrap_or_default(),
            soft_min: 0,
            soft_max: 4200,
            invert_direction: true,
            home_reference: HomeReference::Zero,
            seek_limit_steps: 20_000,
            backoff_steps: 200,
        }
    }

    /// Tilt axis defaults for the deployed rig.
    pub fn tilt() -> Self {
        Self {
            name: String::try_from("TILT").unwrap_or_default(),
            soft_min: -2000,
            soft_max: 2000,
            invert_direction: false,
            home_reference: HomeReference::SoftMin,
            seek_limit_steps: 5_000,
            backoff_steps: 200,
        }
    }

    /// Check whether a position lies within the soft range.
    #[inline]
    pub fn contains(&self, steps: i32) -> bool {
        steps >= self.soft_min && steps <= self.soft_max
    }

    /// The position value assigned after a successful homing run.
    #[inline]
    pub fn home_position(&self) -> i32 {
        match self.home_reference {
            HomeReference::Zero => 0,
            HomeReference::SoftMin => self.soft_min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_defaults() {
        let config = AxisConfig::pan();
        assert_eq!(config.soft_min, 0);
        assert_eq!(config.soft_max, 4200);
        assert!(config.invert_direction);
        assert_eq!(config.home_position(), 0);
    }

    #[test]
    fn test_tilt_defaults() {
        let config = AxisConfig::tilt();
        assert_eq!(config.soft_min, -2000);
        assert_eq!(config.soft_max, 2000);
        assert!(!config.invert_direction);
        // Tilt zero is mid-range; homing lands at soft_min
        assert_eq!(config.home_position(), -2000);
    }

    #[test]
    fn test_contains() {
        let config = AxisConfig::tilt();
        assert!(config.contains(0));
        assert!(config.contains(-2000));
        assert!(config.contains(2000));
        assert!(!config.contains(-2001));
        assert!(!config.contains(2001));
    }
}
