//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{AxisConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Soft limits are valid (min < max)
/// - Homing seek ceiling is nonzero
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (name, axis) in config.axes.iter() {
        validate_axis(name.as_str(), axis)?;
    }

    Ok(())
}

fn validate_axis(_name: &str, config: &AxisConfig) -> Result<()> {
    if config.soft_min >= config.soft_max {
        return Err(Error::Config(ConfigError::InvalidSoftLimits {
            min: config.soft_min,
            max: config.soft_max,
        }));
    }

    if config.seek_limit_steps == 0 {
        return Err(Error::Config(ConfigError::InvalidSeekLimit));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SystemConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_inverted_soft_limits() {
        let mut axis = AxisConfig::pan();
        axis.soft_min = 100;
        axis.soft_max = -100;

        let result = validate_axis("pan", &axis);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidSoftLimits { .. }))
        ));
    }

    #[test]
    fn test_zero_seek_ceiling() {
        let mut axis = AxisConfig::tilt();
        axis.seek_limit_steps = 0;

        let result = validate_axis("tilt", &axis);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidSeekLimit))
        ));
    }
}
