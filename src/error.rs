//! Error types for pantilt-control.
//!
//! Provides unified error handling across configuration, axis motion, and
//! homing. Protocol-level failures (unknown commands, malformed numbers,
//! limit stops) are deliberately *not* errors: they are reported through
//! the serial response line, per the wire contract.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all pantilt-control operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Axis motion or GPIO error
    Axis(AxisError),
    /// Homing sequence failure
    Homing(HomingError),
    /// Serial transmit failed
    Tx,
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Axis name not found in configuration
    AxisNotFound(heapless::String<16>),
    /// Invalid soft limits (min must be < max)
    InvalidSoftLimits {
        /// Minimum limit in steps
        min: i32,
        /// Maximum limit in steps
        max: i32,
    },
    /// Homing seek ceiling must be nonzero
    InvalidSeekLimit,
    /// A required builder field was not provided
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Axis motion errors.
///
/// Reaching a hard or soft limit mid-move is not an error; the truncated
/// step count returned by the motion executor is the signal.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisError {
    /// GPIO pin operation failed
    Pin,
}

/// Homing sequence errors.
#[derive(Debug, Clone, PartialEq)]
pub enum HomingError {
    /// The negative limit switch never asserted within the seek ceiling.
    ///
    /// The axis remains un-homed with its position unchanged; re-issuing
    /// the homing command retries from scratch.
    LimitNotFound {
        /// Name of the axis that failed to home
        axis: heapless::String<16>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Axis(e) => write!(f, "Axis error: {}", e),
            Error::Homing(e) => write!(f, "Homing error: {}", e),
            Error::Tx => write!(f, "Serial transmit failed"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::AxisNotFound(name) => write!(f, "Axis '{}' not found", name),
            ConfigError::InvalidSoftLimits { min, max } => {
                write!(f, "Invalid soft limits: min ({}) must be < max ({})", min, max)
            }
            ConfigError::InvalidSeekLimit => write!(f, "Homing seek ceiling must be > 0"),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisError::Pin => write!(f, "GPIO pin operation failed"),
        }
    }
}

impl fmt::Display for HomingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomingError::LimitNotFound { axis } => {
                write!(f, "{} negative limit not found", axis)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<AxisError> for Error {
    fn from(e: AxisError) -> Self {
        Error::Axis(e)
    }
}

impl From<HomingError> for Error {
    fn from(e: HomingError) -> Self {
        Error::Homing(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for AxisError {}

#[cfg(feature = "std")]
impl std::error::Error for HomingError {}
