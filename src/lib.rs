//! # pantilt-control
//!
//! Control core for a two-axis (pan/tilt) stepper positioner commanded
//! over a serial link, built on embedded-hal 1.0.
//!
//! ## Features
//!
//! - **Line protocol**: newline-terminated ASCII commands (`PAN_REL:`,
//!   `HOME_ALL`, `GET_STATUS`, ...) with one response line per command
//! - **embedded-hal 1.0**: `OutputPin` for STEP/DIR, `InputPin` for limit
//!   switches, `DelayNs` for step timing, `embedded_io::Write` for TX
//! - **Safety interlocks**: hardware limit switches and software soft
//!   limits checked before every step pulse
//! - **Homing**: seek / back-off / slow-reapproach sequence establishing
//!   a repeatable absolute origin per axis
//! - **no_std compatible**: core works without the standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pantilt_control::{Axis, AxisConfig, Controller, StepTiming};
//!
//! let pan = Axis::builder()
//!     .config(AxisConfig::pan())
//!     .timing(StepTiming::default())
//!     .step_pin(pan_step).dir_pin(pan_dir)
//!     .neg_limit_pin(pan_neg).pos_limit_pin(pan_pos)
//!     .delay(delay)
//!     .build()?;
//! let tilt = Axis::builder()
//!     .config(AxisConfig::tilt())
//!     /* tilt pins */
//!     .build()?;
//!
//! let mut controller = Controller::new(pan, tilt, uart_tx);
//! controller.announce_ready()?;
//! loop {
//!     controller.service(&MAILBOX)?;
//! }
//! ```
//!
//! The receive interrupt feeds bytes into an [`IrqMailbox`]; the main
//! loop drains it one complete line at a time. While a line is pending,
//! further bytes are dropped — the mailbox is a single slot, not a queue.
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt formatting for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod axis;
pub mod config;
pub mod controller;
pub mod error;
pub mod protocol;

// Re-exports for ergonomic API
pub use axis::{Axis, AxisBuilder, Direction, HomingPhase, PositionerAxis};
pub use config::{validate_config, AxisConfig, HomeReference, StepTiming, SystemConfig};
pub use controller::Controller;
pub use error::{Error, Result};
pub use protocol::{Command, IrqMailbox, RxMailbox};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
