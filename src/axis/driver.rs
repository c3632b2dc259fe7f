//! Axis motion executor.
//!
//! Generic over embedded-hal 1.0 pin types. Every step pulse is gated
//! by a hardware limit-switch read and a soft-limit check, so no
//! command can drive the mechanics past a physical or logical boundary.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::{AxisConfig, StepTiming};
use crate::error::{AxisError, Result};

use super::builder::AxisBuilder;
use super::homing::HomingPhase;
use super::position::PositionState;
use super::{Direction, PositionerAxis};

/// One positioner axis.
///
/// Generic over:
/// - `STEP`, `DIR`: output pins (`OutputPin`)
/// - `NEG`, `POS`: limit switch inputs (`InputPin`, active-low)
/// - `DELAY`: busy-wait delay provider (`DelayNs`)
pub struct Axis<STEP, DIR, NEG, POS, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    NEG: InputPin,
    POS: InputPin,
    DELAY: DelayNs,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (level selects travel direction, possibly inverted).
    dir_pin: DIR,

    /// Negative limit switch input (active-low).
    neg_limit_pin: NEG,

    /// Positive limit switch input (active-low).
    pos_limit_pin: POS,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Axis configuration.
    config: AxisConfig,

    /// Step and settle timing.
    timing: StepTiming,

    /// Current absolute position and homed flag.
    position: PositionState,

    /// Outcome of the most recent homing run.
    homing_phase: HomingPhase,
}

impl<STEP, DIR, NEG, POS, DELAY> Axis<STEP, DIR, NEG, POS, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    NEG: InputPin,
    POS: InputPin,
    DELAY: DelayNs,
{
    /// Start building an axis.
    pub fn builder() -> AxisBuilder<STEP, DIR, NEG, POS, DELAY> {
        AxisBuilder::new()
    }

    pub(crate) fn new(
        step_pin: STEP,
        dir_pin: DIR,
        neg_limit_pin: NEG,
        pos_limit_pin: POS,
        delay: DELAY,
        config: AxisConfig,
        timing: StepTiming,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            neg_limit_pin,
            pos_limit_pin,
            delay,
            config,
            timing,
            position: PositionState::new(),
            homing_phase: HomingPhase::Idle,
        }
    }

    /// Get the axis name.
    #[inline]
    pub fn name(&self) -> &str {
        self.config.name.as_str()
    }

    /// Get the axis configuration.
    #[inline]
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// Current absolute position in steps.
    #[inline]
    pub fn position(&self) -> i32 {
        self.position.steps()
    }

    /// Whether homing has completed since power-up.
    #[inline]
    pub fn is_homed(&self) -> bool {
        self.position.is_homed()
    }

    /// Phase the most recent homing run finished in.
    #[inline]
    pub fn homing_phase(&self) -> HomingPhase {
        self.homing_phase
    }

    /// Move by a signed step count, bounded by hard and soft limits.
    ///
    /// Direction is taken from the sign. The DIR output is written once
    /// before motion, followed by the direction-setup settle delay. Each
    /// step is preceded by a hard-limit read (the switch in the direction
    /// of travel) and a soft-limit check on the tentative next position;
    /// either stops the move immediately.
    ///
    /// Returns the signed steps actually completed. The magnitude never
    /// exceeds the request; a shortfall means a limit intervened and the
    /// position reflects exactly the pulses issued.
    pub fn move_steps(&mut self, steps: i32) -> Result<i32> {
        if steps == 0 {
            return Ok(0);
        }

        let direction = Direction::of(steps);
        let count = steps.unsigned_abs();

        self.set_direction(direction)?;

        let mut taken: i32 = 0;
        for _ in 0..count {
            if self.limit_active_toward(direction)? {
                break;
            }
            let next = self.position.steps() + direction.sign();
            if !self.config.contains(next) {
                break;
            }
            self.step_pulse()?;
            self.position.advance(direction.sign());
            taken += 1;
        }

        Ok(taken * direction.sign())
    }

    /// Whether the negative limit switch is asserted (active-low).
    pub fn neg_limit_active(&mut self) -> Result<bool> {
        Ok(self.neg_limit_pin.is_low().map_err(|_| AxisError::Pin)?)
    }

    /// Whether the positive limit switch is asserted (active-low).
    pub fn pos_limit_active(&mut self) -> Result<bool> {
        Ok(self.pos_limit_pin.is_low().map_err(|_| AxisError::Pin)?)
    }

    /// Release the owned hardware resources.
    pub fn free(self) -> (STEP, DIR, NEG, POS, DELAY) {
        (
            self.step_pin,
            self.dir_pin,
            self.neg_limit_pin,
            self.pos_limit_pin,
            self.delay,
        )
    }

    /// Limit switch in the direction of travel.
    pub(crate) fn limit_active_toward(&mut self, direction: Direction) -> Result<bool> {
        match direction {
            Direction::Positive => self.pos_limit_active(),
            Direction::Negative => self.neg_limit_active(),
        }
    }

    /// Write the DIR level for a logical direction, then settle.
    pub(crate) fn set_direction(&mut self, direction: Direction) -> Result<()> {
        let pin_high = match direction {
            Direction::Positive => !self.config.invert_direction,
            Direction::Negative => self.config.invert_direction,
        };

        let result = if pin_high {
            self.dir_pin.set_high()
        } else {
            self.dir_pin.set_low()
        };
        result.map_err(|_| AxisError::Pin)?;

        self.delay.delay_us(self.timing.direction_setup_us);
        Ok(())
    }

    /// One step pulse: fixed active period, equal inactive period.
    pub(crate) fn step_pulse(&mut self) -> Result<()> {
        self.step_pin.set_high().map_err(|_| AxisError::Pin)?;
        self.delay.delay_us(self.timing.pulse_width_us);
        self.step_pin.set_low().map_err(|_| AxisError::Pin)?;
        self.delay.delay_us(self.timing.pulse_width_us);
        Ok(())
    }

    /// Busy-wait pause.
    pub(crate) fn pause(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    pub(crate) fn timing(&self) -> StepTiming {
        self.timing
    }

    pub(crate) fn set_homing_phase(&mut self, phase: HomingPhase) {
        self.homing_phase = phase;
    }

    pub(crate) fn position_mut(&mut self) -> &mut PositionState {
        &mut self.position
    }
}

impl<STEP, DIR, NEG, POS, DELAY> PositionerAxis for Axis<STEP, DIR, NEG, POS, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    NEG: InputPin,
    POS: InputPin,
    DELAY: DelayNs,
{
    fn name(&self) -> &str {
        Axis::name(self)
    }

    fn position(&self) -> i32 {
        Axis::position(self)
    }

    fn is_homed(&self) -> bool {
        Axis::is_homed(self)
    }

    fn move_steps(&mut self, steps: i32) -> Result<i32> {
        Axis::move_steps(self, steps)
    }

    fn home(&mut self) -> Result<()> {
        Axis::home(self)
    }

    fn neg_limit_active(&mut self) -> Result<bool> {
        Axis::neg_limit_active(self)
    }

    fn pos_limit_active(&mut self) -> Result<bool> {
        Axis::pos_limit_active(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AxisConfig;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    fn wide_config() -> AxisConfig {
        let mut config = AxisConfig::tilt();
        config.invert_direction = false;
        config
    }

    #[test]
    fn test_move_two_steps_positive() {
        // DIR set high once, then two step pulses, each gated by one
        // read of the positive limit switch (released = high).
        let step = PinMock::new(&[
            Transaction::set(State::High),
            Transaction::set(State::Low),
            Transaction::set(State::High),
            Transaction::set(State::Low),
        ]);
        let dir = PinMock::new(&[Transaction::set(State::High)]);
        let neg = PinMock::new(&[]);
        let pos = PinMock::new(&[
            Transaction::get(State::High),
            Transaction::get(State::High),
        ]);

        let mut axis = Axis::new(
            step.clone(),
            dir.clone(),
            neg.clone(),
            pos.clone(),
            NoopDelay::new(),
            wide_config(),
            StepTiming::default(),
        );

        let actual = axis.move_steps(2).unwrap();
        assert_eq!(actual, 2);
        assert_eq!(axis.position(), 2);

        for mut pin in [step, dir, neg, pos] {
            pin.done();
        }
    }

    #[test]
    fn test_hard_limit_stops_before_first_step() {
        // Positive switch asserted (active-low): no pulses at all.
        let step = PinMock::new(&[]);
        let dir = PinMock::new(&[Transaction::set(State::High)]);
        let neg = PinMock::new(&[]);
        let pos = PinMock::new(&[Transaction::get(State::Low)]);

        let mut axis = Axis::new(
            step.clone(),
            dir.clone(),
            neg.clone(),
            pos.clone(),
            NoopDelay::new(),
            wide_config(),
            StepTiming::default(),
        );

        let actual = axis.move_steps(3).unwrap();
        assert_eq!(actual, 0);
        assert_eq!(axis.position(), 0);

        for mut pin in [step, dir, neg, pos] {
            pin.done();
        }
    }

    #[test]
    fn test_soft_limit_stops_at_min() {
        // Pan range starts at 0; from 0, a negative move completes no
        // steps. Wiring is inverted, so logical negative drives DIR high.
        let step = PinMock::new(&[]);
        let dir = PinMock::new(&[Transaction::set(State::High)]);
        let neg = PinMock::new(&[Transaction::get(State::High)]);
        let pos = PinMock::new(&[]);

        let mut axis = Axis::new(
            step.clone(),
            dir.clone(),
            neg.clone(),
            pos.clone(),
            NoopDelay::new(),
            AxisConfig::pan(),
            StepTiming::default(),
        );

        let actual = axis.move_steps(-5).unwrap();
        assert_eq!(actual, 0);
        assert_eq!(axis.position(), 0);

        for mut pin in [step, dir, neg, pos] {
            pin.done();
        }
    }

    #[test]
    fn test_zero_steps_is_noop() {
        let step = PinMock::new(&[]);
        let dir = PinMock::new(&[]);
        let neg = PinMock::new(&[]);
        let pos = PinMock::new(&[]);

        let mut axis = Axis::new(
            step.clone(),
            dir.clone(),
            neg.clone(),
            pos.clone(),
            NoopDelay::new(),
            wide_config(),
            StepTiming::default(),
        );

        assert_eq!(axis.move_steps(0).unwrap(), 0);

        for mut pin in [step, dir, neg, pos] {
            pin.done();
        }
    }
}
