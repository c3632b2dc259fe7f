//! Position tracking for a positioner axis.

/// Absolute position and homed flag for one axis.
///
/// Starts at `(0, unhomed)` on power-up. Mutated only by the motion
/// executor (one unit per completed step) and by the homing sequencer
/// (reference assignment), so the value is always consistent with the
/// pulses physically issued.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionState {
    steps: i32,
    homed: bool,
}

impl PositionState {
    /// Create a new, un-homed position at 0.
    #[inline]
    pub const fn new() -> Self {
        Self {
            steps: 0,
            homed: false,
        }
    }

    /// Current position in steps.
    #[inline]
    pub fn steps(&self) -> i32 {
        self.steps
    }

    /// Whether homing has established an absolute reference.
    #[inline]
    pub fn is_homed(&self) -> bool {
        self.homed
    }

    /// Apply one completed step.
    #[inline]
    pub fn advance(&mut self, delta: i32) {
        self.steps += delta;
    }

    /// Assign the homing reference and mark the axis homed.
    #[inline]
    pub fn set_reference(&mut self, steps: i32) {
        self.steps = steps;
        self.homed = true;
    }
}
