//! Homing sequencer.
//!
//! Establishes an absolute origin by driving toward the negative limit
//! switch, backing off to clear it, and re-approaching slowly so the
//! final trigger point is free of the fast seek's overshoot variance.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::{Error, HomingError, Result};

use super::driver::Axis;
use super::Direction;

/// Phase of a homing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomingPhase {
    /// No homing run has started.
    #[default]
    Idle,
    /// Fast travel toward the negative limit switch.
    SeekingLimit,
    /// Reversing a fixed number of steps to clear the switch.
    BackingOff,
    /// Slow single-step approach back onto the switch.
    ReapproachingSlow,
    /// Homing completed; reference position assigned.
    Homed,
    /// The switch was not found within the seek ceiling.
    Failed,
}

impl<STEP, DIR, NEG, POS, DELAY> Axis<STEP, DIR, NEG, POS, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    NEG: InputPin,
    POS: InputPin,
    DELAY: DelayNs,
{
    /// Run the homing sequence to completion (blocking).
    ///
    /// Seek toward the negative limit at the normal step rate, bounded
    /// by the configured step ceiling; back off a fixed count with no
    /// limit checks (a controlled short move inside mechanical travel);
    /// then re-approach one slow step at a time until the switch
    /// re-asserts. On success the position becomes the configured home
    /// reference and the axis is marked homed.
    ///
    /// # Errors
    ///
    /// [`HomingError::LimitNotFound`] if the seek ceiling is reached
    /// before the switch asserts; position and homed flag are left
    /// untouched, and a later homing command retries from scratch.
    pub fn home(&mut self) -> Result<()> {
        let timing = self.timing();

        self.set_homing_phase(HomingPhase::SeekingLimit);
        self.set_direction(Direction::Negative)?;

        let mut count: u32 = 0;
        while !self.neg_limit_active()? {
            if count >= self.config().seek_limit_steps {
                self.set_homing_phase(HomingPhase::Failed);
                return Err(Error::Homing(HomingError::LimitNotFound {
                    axis: self.config().name.clone(),
                }));
            }
            self.step_pulse()?;
            count += 1;
        }

        self.set_homing_phase(HomingPhase::BackingOff);
        self.pause(timing.phase_pause_us);
        self.set_direction(Direction::Positive)?;
        for _ in 0..self.config().backoff_steps {
            self.step_pulse()?;
        }

        self.set_homing_phase(HomingPhase::ReapproachingSlow);
        self.pause(timing.phase_pause_us);
        self.set_direction(Direction::Negative)?;
        while !self.neg_limit_active()? {
            self.step_pulse()?;
            self.pause(timing.slow_approach_extra_us);
        }

        // Homing pulses bypass the position counter; only the reference
        // assignment below touches it.
        let reference = self.config().home_position();
        self.position_mut().set_reference(reference);
        self.set_homing_phase(HomingPhase::Homed);
        Ok(())
    }
}
