//! Step and settle timing.
//!
//! Motion is constant-rate: a step pulse is a fixed active period on
//! STEP followed by an equal inactive period, timed by busy-wait via
//! `DelayNs`. The defaults are the source rig's cycle-count delays at
//! 16 MHz expressed in microseconds.

use serde::Deserialize;

/// Busy-wait delay durations used by the motion executor and homing
/// sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StepTiming {
    /// STEP pulse active and inactive width, microseconds.
    #[serde(default = "default_pulse_width_us")]
    pub pulse_width_us: u32,

    /// Settle time after writing DIR, before the first pulse.
    #[serde(default = "default_direction_setup_us")]
    pub direction_setup_us: u32,

    /// Extra inter-step delay during the slow homing re-approach.
    #[serde(default = "default_slow_approach_extra_us")]
    pub slow_approach_extra_us: u32,

    /// Pause between homing phases (seek -> back-off -> re-approach).
    #[serde(default = "default_phase_pause_us")]
    pub phase_pause_us: u32,
}

fn default_pulse_width_us() -> u32 {
    125
}

fn default_direction_setup_us() -> u32 {
    625
}

fn default_slow_approach_extra_us() -> u32 {
    315
}

fn default_phase_pause_us() -> u32 {
    6250
}

impl Default for StepTiming {
    fn default() -> Self {
        Self {
            pulse_width_us: default_pulse_width_us(),
            direction_setup_us: default_direction_setup_us(),
            slow_approach_extra_us: default_slow_approach_extra_us(),
            phase_pause_us: default_phase_pause_us(),
        }
    }
}

impl StepTiming {
    /// Full step period (active + inactive) in microseconds.
    #[inline]
    pub fn step_period_us(&self) -> u32 {
        self.pulse_width_us.saturating_mul(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let timing = StepTiming::default();
        assert_eq!(timing.pulse_width_us, 125);
        assert_eq!(timing.step_period_us(), 250);
        assert!(timing.slow_approach_extra_us > 0);
    }
}
