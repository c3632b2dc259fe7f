//! Frame receiver: newline-terminated line assembly and the single-slot
//! mailbox between the receive interrupt and the dispatch loop.

use core::cell::RefCell;

use critical_section::Mutex;

/// Capacity of the receive line buffer in bytes (one byte reserved for
/// the terminator slot, so lines hold at most `RX_CAPACITY - 1` chars).
pub const RX_CAPACITY: usize = 64;

/// Single-slot line mailbox.
///
/// Fed one byte at a time from the receive interrupt; drained one
/// complete line at a time by the dispatch loop. While a line is ready
/// and not yet released, *all* incoming bytes are dropped — this is a
/// deliberate last-writer-blocked single slot, not a queue, so serial
/// input arriving while a command is still executing can be silently
/// lost. The flag is cleared only by the consumer, after the line has
/// been fully consumed.
#[derive(Debug)]
pub struct RxMailbox {
    buf: [u8; RX_CAPACITY],
    cursor: usize,
    len: usize,
    ready: bool,
}

impl RxMailbox {
    /// Create an empty mailbox.
    pub const fn new() -> Self {
        Self {
            buf: [0; RX_CAPACITY],
            cursor: 0,
            len: 0,
            ready: false,
        }
    }

    /// Feed one received byte. Returns `true` if a line just completed.
    ///
    /// CR or LF terminates the line (empty lines produce nothing and
    /// just reset the cursor). Printable ASCII is appended while the
    /// buffer has room; overflow bytes and control bytes are silently
    /// dropped.
    pub fn push_byte(&mut self, byte: u8) -> bool {
        if self.ready {
            return false;
        }

        match byte {
            b'\r' | b'\n' => {
                if self.cursor > 0 {
                    self.len = self.cursor;
                    self.ready = true;
                }
                self.cursor = 0;
                self.ready
            }
            0x20..=0x7E => {
                if self.cursor < RX_CAPACITY - 1 {
                    self.buf[self.cursor] = byte;
                    self.cursor += 1;
                }
                false
            }
            _ => false,
        }
    }

    /// Whether a complete line is waiting for the dispatch loop.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The pending line, if any.
    pub fn line(&self) -> Option<&str> {
        if self.ready {
            core::str::from_utf8(&self.buf[..self.len]).ok()
        } else {
            None
        }
    }

    /// Release the slot. Only the consumer calls this, and only after
    /// the line has been fully consumed.
    pub fn clear(&mut self) {
        self.ready = false;
        self.len = 0;
    }
}

impl Default for RxMailbox {
    fn default() -> Self {
        Self::new()
    }
}

/// Critical-section wrapper making the mailbox shareable between the
/// interrupt and main contexts.
///
/// The mailbox is the only state the two contexts share; every access
/// goes through a `critical_section` so the handoff cannot tear.
///
/// ```rust,ignore
/// static MAILBOX: IrqMailbox = IrqMailbox::new();
///
/// // interrupt context, once per received byte:
/// MAILBOX.on_byte(byte);
///
/// // main context:
/// if let Some(line) = MAILBOX.pending() {
///     // ... handle, emit response ...
///     MAILBOX.release();
/// }
/// ```
pub struct IrqMailbox {
    inner: Mutex<RefCell<RxMailbox>>,
}

impl IrqMailbox {
    /// Create an empty mailbox, usable in a `static`.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(RxMailbox::new())),
        }
    }

    /// Feed one received byte (interrupt context). Returns `true` if a
    /// line just completed.
    pub fn on_byte(&self, byte: u8) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).push_byte(byte))
    }

    /// Copy out the pending line without releasing the slot.
    ///
    /// The slot stays occupied (and incoming bytes keep being dropped)
    /// until [`release`](Self::release) is called, which the dispatch
    /// loop does only after the response has been emitted.
    pub fn pending(&self) -> Option<heapless::String<RX_CAPACITY>> {
        critical_section::with(|cs| {
            self.inner
                .borrow_ref(cs)
                .line()
                .and_then(|line| heapless::String::try_from(line).ok())
        })
    }

    /// Release the slot so the receiver resumes accepting bytes.
    pub fn release(&self) {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).clear());
    }
}

impl Default for IrqMailbox {
    fn default() -> Self {
        Self::new()
    }
}
