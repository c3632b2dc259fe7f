//! Configuration module for pantilt-control.
//!
//! Provides types for loading and validating axis and timing
//! configurations from TOML files (with `std` feature) or from the
//! built-in defaults matching the deployed rig.

mod axis;
#[cfg(feature = "std")]
mod loader;
mod system;
mod timing;
mod validation;

pub use axis::{AxisConfig, HomeReference};
pub use system::SystemConfig;
pub use timing::StepTiming;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
