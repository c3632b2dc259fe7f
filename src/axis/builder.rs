//! Builder pattern for Axis.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::{AxisConfig, StepTiming};
use crate::error::{ConfigError, Error, Result};

use super::driver::Axis;

/// Builder for creating [`Axis`] instances.
pub struct AxisBuilder<STEP, DIR, NEG, POS, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    NEG: InputPin,
    POS: InputPin,
    DELAY: DelayNs,
{
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    neg_limit_pin: Option<NEG>,
    pos_limit_pin: Option<POS>,
    delay: Option<DELAY>,
    config: Option<AxisConfig>,
    timing: Option<StepTiming>,
}

impl<STEP, DIR, NEG, POS, DELAY> Default for AxisBuilder<STEP, DIR, NEG, POS, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    NEG: InputPin,
    POS: InputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, NEG, POS, DELAY> AxisBuilder<STEP, DIR, NEG, POS, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    NEG: InputPin,
    POS: InputPin,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            step_pin: None,
            dir_pin: None,
            neg_limit_pin: None,
            pos_limit_pin: None,
            delay: None,
            config: None,
            timing: None,
        }
    }

    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the negative limit switch input (active-low).
    pub fn neg_limit_pin(mut self, pin: NEG) -> Self {
        self.neg_limit_pin = Some(pin);
        self
    }

    /// Set the positive limit switch input (active-low).
    pub fn pos_limit_pin(mut self, pin: POS) -> Self {
        self.pos_limit_pin = Some(pin);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the axis configuration.
    pub fn config(mut self, config: AxisConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set step timing (defaults to [`StepTiming::default`]).
    pub fn timing(mut self, timing: StepTiming) -> Self {
        self.timing = Some(timing);
        self
    }

    /// Build the axis.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing.
    pub fn build(self) -> Result<Axis<STEP, DIR, NEG, POS, DELAY>> {
        let step_pin = self
            .step_pin
            .ok_or(Error::Config(ConfigError::MissingField("step_pin")))?;
        let dir_pin = self
            .dir_pin
            .ok_or(Error::Config(ConfigError::MissingField("dir_pin")))?;
        let neg_limit_pin = self
            .neg_limit_pin
            .ok_or(Error::Config(ConfigError::MissingField("neg_limit_pin")))?;
        let pos_limit_pin = self
            .pos_limit_pin
            .ok_or(Error::Config(ConfigError::MissingField("pos_limit_pin")))?;
        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;
        let config = self
            .config
            .ok_or(Error::Config(ConfigError::MissingField("config")))?;

        if config.soft_min >= config.soft_max {
            return Err(Error::Config(ConfigError::InvalidSoftLimits {
                min: config.soft_min,
                max: config.soft_max,
            }));
        }

        Ok(Axis::new(
            step_pin,
            dir_pin,
            neg_limit_pin,
            pos_limit_pin,
            delay,
            config,
            self.timing.unwrap_or_default(),
        ))
    }
}
