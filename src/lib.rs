//! Change-gated serial printing for no-std embedded targets.
//!
//! # Highlights
//! - Print a labeled value only when it changed since the last call.
//! - Label before (`Brightness=100`) or after (`20Temp=`) the value.
//! - No allocation; output goes to any `core::fmt::Write` sink.
//!
//! # Quick start
//! ```
//! use ph_changeprint::ChangeGatedPrinter;
//!
//! static BRIGHTNESS: &str = "Brightness=";
//!
//! let mut serial: heapless::String<64> = heapless::String::new();
//! let mut brightness = ChangeGatedPrinter::new(BRIGHTNESS);
//!
//! for reading in [100u8, 100, 200, 200, 100] {
//!     brightness.print_leading(&mut serial, reading);
//! }
//!
//! assert_eq!(serial.as_str(), "Brightness=100\r\nBrightness=200\r\nBrightness=100\r\n");
//! ```
//!
//! # No-std
//! The crate is `#![no_std]` by default. Tests require `std`.
//!
//! # Semantics
//! - A new printer has no baseline: the first call always prints.
//! - `last()` always equals the value passed to the most recent print call.
//! - `print*` ignore sink errors; `try_print*` return them.
//! - One printer per monitored value, driven from a single polling loop.
//!
//! # Features
//! - `defmt`: trace prints and suppressions through `defmt`.
#![no_std]

mod fmt;

pub mod change_print;

pub use change_print::{ChangeGatedPrinter, LineEnding, Placement};

#[cfg(test)]
extern crate std;
