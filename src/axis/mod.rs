//! Axis motion: per-step executor, position tracking, and homing.

mod builder;
mod driver;
mod homing;
mod position;

pub use builder::AxisBuilder;
pub use driver::Axis;
pub use homing::HomingPhase;
pub use position::PositionState;

use crate::error::Result;

/// Direction of travel along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward `soft_max` / the positive limit switch.
    Positive,
    /// Toward `soft_min` / the negative limit switch.
    Negative,
}

impl Direction {
    /// Position delta per step in this direction.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }

    /// Direction of a nonzero signed step count.
    #[inline]
    pub fn of(steps: i32) -> Self {
        if steps > 0 {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }
}

/// The seam between the dispatch loop and a concrete, pin-generic axis.
///
/// [`Axis`] implements this; tests substitute simple fakes.
pub trait PositionerAxis {
    /// Axis name, as configured.
    fn name(&self) -> &str;

    /// Current absolute position in steps.
    fn position(&self) -> i32;

    /// Whether a homing sequence has completed since power-up.
    fn is_homed(&self) -> bool;

    /// Move by a signed step count, bounded by hard and soft limits.
    ///
    /// Returns the signed number of steps actually completed. A smaller
    /// magnitude than requested means a limit stopped the move; that is
    /// not an error.
    fn move_steps(&mut self, steps: i32) -> Result<i32>;

    /// Run the homing sequence to completion.
    fn home(&mut self) -> Result<()>;

    /// Whether the negative limit switch is currently asserted.
    fn neg_limit_active(&mut self) -> Result<bool>;

    /// Whether the positive limit switch is currently asserted.
    fn pos_limit_active(&mut self) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Positive.sign(), 1);
        assert_eq!(Direction::Negative.sign(), -1);
    }

    #[test]
    fn test_direction_of() {
        assert_eq!(Direction::of(50), Direction::Positive);
        assert_eq!(Direction::of(-3), Direction::Negative);
    }
}
