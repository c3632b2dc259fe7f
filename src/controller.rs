//! Dispatch loop: routes decoded commands to the axes and emits exactly
//! one response line per command (homing additionally emits its trace
//! lines, matching the wire contract).

use core::fmt::Write as _;

use embedded_io::Write;

use crate::axis::PositionerAxis;
use crate::error::{Error, Result};
use crate::protocol::{Command, IrqMailbox};

/// Longest response line: `ERROR:` plus a full-length echoed command.
const RESPONSE_CAPACITY: usize = 80;

/// Two-axis command dispatcher.
///
/// Owns both axes and the serial transmit half. Commands are processed
/// strictly one at a time, start to finish; motion and homing block
/// until complete. The only cancellation is a limit or a homing
/// timeout.
pub struct Controller<PAN, TILT, TX>
where
    PAN: PositionerAxis,
    TILT: PositionerAxis,
    TX: Write,
{
    pan: PAN,
    tilt: TILT,
    tx: TX,
}

impl<PAN, TILT, TX> Controller<PAN, TILT, TX>
where
    PAN: PositionerAxis,
    TILT: PositionerAxis,
    TX: Write,
{
    /// Create a controller from its axes and transmit half.
    pub fn new(pan: PAN, tilt: TILT, tx: TX) -> Self {
        Self { pan, tilt, tx }
    }

    /// Access the pan axis.
    #[inline]
    pub fn pan(&self) -> &PAN {
        &self.pan
    }

    /// Access the tilt axis.
    #[inline]
    pub fn tilt(&self) -> &TILT {
        &self.tilt
    }

    /// Emit the startup banner. Call once after initialization.
    pub fn announce_ready(&mut self) -> Result<()> {
        self.send_line("READY")
    }

    /// One poll iteration: if a line is pending in the mailbox, handle
    /// it, emit the response, then release the slot. Returns `true` if
    /// a command was processed.
    ///
    /// The slot is released only after the response is out, so bytes
    /// arriving mid-command are dropped by the receiver — the
    /// single-slot contract.
    pub fn service(&mut self, mailbox: &IrqMailbox) -> Result<bool> {
        let Some(line) = mailbox.pending() else {
            return Ok(false);
        };
        let result = self.handle_line(&line);
        mailbox.release();
        result.map(|()| true)
    }

    /// Parse and execute one command line, emitting its response.
    ///
    /// Unknown commands and homing timeouts are reported on the wire
    /// and return `Ok`; only pin and transmit failures are `Err`.
    pub fn handle_line(&mut self, line: &str) -> Result<()> {
        match Command::parse(line) {
            Command::PanRelative(steps) => {
                let actual = self.pan.move_steps(steps)?;
                self.send_fmt(format_args!("OK PAN:{}", actual))
            }
            Command::TiltRelative(steps) => {
                let actual = self.tilt.move_steps(steps)?;
                self.send_fmt(format_args!("OK TILT:{}", actual))
            }
            Command::PanAbsolute(target) => {
                let delta = target.saturating_sub(self.pan.position());
                self.pan.move_steps(delta)?;
                self.send_fmt(format_args!("OK PAN:{}", self.pan.position()))
            }
            Command::TiltAbsolute(target) => {
                let delta = target.saturating_sub(self.tilt.position());
                self.tilt.move_steps(delta)?;
                self.send_fmt(format_args!("OK TILT:{}", self.tilt.position()))
            }
            Command::HomePan => self.home_pan(),
            Command::HomeTilt => self.home_tilt(),
            Command::HomeAll => {
                self.home_pan()?;
                self.home_tilt()?;
                self.send_line("ALL HOMED")
            }
            Command::Center => {
                let pan_delta = -self.pan.position();
                self.pan.move_steps(pan_delta)?;
                let tilt_delta = -self.tilt.position();
                self.tilt.move_steps(tilt_delta)?;
                self.send_line("CENTERED")
            }
            Command::GetPosition => self.send_fmt(format_args!(
                "POS PAN:{} TILT:{}",
                self.pan.position(),
                self.tilt.position()
            )),
            Command::GetStatus => {
                let pn = self.pan.neg_limit_active()? as u8;
                let pp = self.pan.pos_limit_active()? as u8;
                let tn = self.tilt.neg_limit_active()? as u8;
                let tp = self.tilt.pos_limit_active()? as u8;
                let ph = self.pan.is_homed() as u8;
                let th = self.tilt.is_homed() as u8;
                self.send_fmt(format_args!(
                    "STATUS PN:{} PP:{} TN:{} TP:{} PH:{} TH:{}",
                    pn, pp, tn, tp, ph, th
                ))
            }
            Command::Ping => self.send_line("PONG"),
            Command::Unknown(text) => self.send_fmt(format_args!("ERROR:{}", text)),
        }
    }

    /// Release the owned axes and transmit half.
    pub fn free(self) -> (PAN, TILT, TX) {
        (self.pan, self.tilt, self.tx)
    }

    fn home_pan(&mut self) -> Result<()> {
        self.send_line("HOMING PAN...")?;
        match self.pan.home() {
            Ok(()) => self.send_line("PAN HOMED"),
            Err(Error::Homing(_)) => self.send_line("ERROR: PAN NEG LIMIT NOT FOUND"),
            Err(e) => Err(e),
        }
    }

    fn home_tilt(&mut self) -> Result<()> {
        self.send_line("HOMING TILT...")?;
        match self.tilt.home() {
            Ok(()) => self.send_line("TILT HOMED"),
            Err(Error::Homing(_)) => self.send_line("ERROR: TILT NEG LIMIT NOT FOUND"),
            Err(e) => Err(e),
        }
    }

    fn send_fmt(&mut self, args: core::fmt::Arguments<'_>) -> Result<()> {
        let mut line: heapless::String<RESPONSE_CAPACITY> = heapless::String::new();
        let _ = line.write_fmt(args);
        self.send_line(&line)
    }

    fn send_line(&mut self, line: &str) -> Result<()> {
        self.tx.write_all(line.as_bytes()).map_err(|_| Error::Tx)?;
        self.tx.write_all(b"\r\n").map_err(|_| Error::Tx)?;
        Ok(())
    }
}
