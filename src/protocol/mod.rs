//! Serial line protocol: frame assembly and command decoding.

mod command;
mod frame;

pub use command::{parse_decimal, Command};
pub use frame::{IrqMailbox, RxMailbox, RX_CAPACITY};
