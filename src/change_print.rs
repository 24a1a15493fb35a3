//! Change-gated printing of a single labeled value.
//!
//! # Overview
//! - One `ChangeGatedPrinter` per monitored value, bound to a borrowed label.
//! - Each print call compares against the last observed value and writes only on change.
//! - The label goes before (`print_leading`) or after (`print_trailing`) the value.
//! - Output goes to any `core::fmt::Write` sink supplied per call.
//!
//! # Baseline
//! A fresh printer has no baseline, so its first call always prints. Use
//! [`ChangeGatedPrinter::with_default_baseline`] to start from `T::default()` instead,
//! in which case a first value equal to the default is suppressed.
//!
//! # Sink failures
//! `print*` are best-effort and ignore sink errors. `try_print*` return them. In both
//! cases the new value is recorded before anything is written.

use core::fmt::{Display, Write};

use crate::fmt::trace;

/// Where the label is placed relative to the value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Placement {
    /// `label` then `value`, e.g. `Brightness=100`.
    Leading,
    /// `value` then `label`, e.g. `20Temp=`.
    Trailing,
}

/// Line terminator written after each print.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineEnding {
    /// `\r\n`, what serial monitors expect from `println`.
    #[default]
    CrLf,
    /// `\n`
    Lf,
}

impl LineEnding {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// Prints a labeled value only when it differs from the previous call.
pub struct ChangeGatedPrinter<'a, T> {
    label: &'a str,
    last: Option<T>,
    line_ending: LineEnding,
    suppressed: usize,
}

impl<'a, T> ChangeGatedPrinter<'a, T> {
    /// Create a printer with no baseline. The first print call always writes.
    pub const fn new(label: &'a str) -> Self {
        Self {
            label,
            last: None,
            line_ending: LineEnding::CrLf,
            suppressed: 0,
        }
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    #[inline]
    pub fn label(&self) -> &'a str {
        self.label
    }

    #[inline]
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// The most recently observed value, `None` before the first call (or after `reset`).
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    /// Forget the baseline so the next call prints regardless of value.
    #[inline]
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// How many calls were swallowed as unchanged since creation (or since reset).
    #[inline]
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// Reset the suppression counter.
    #[inline]
    pub fn reset_suppressed(&mut self) {
        self.suppressed = 0;
    }
}

impl<'a, T: Default> ChangeGatedPrinter<'a, T> {
    /// Create a printer whose baseline is `T::default()`.
    ///
    /// A first observation equal to the default produces no output. Prefer [`Self::new`]
    /// unless that is the behavior you want.
    pub fn with_default_baseline(label: &'a str) -> Self {
        Self {
            last: Some(T::default()),
            ..Self::new(label)
        }
    }
}

impl<'a, T: PartialEq + Display> ChangeGatedPrinter<'a, T> {
    /// Write `label` + `value` + line ending if `value` changed.
    /// Returns true if the value changed (and a print was attempted).
    #[inline]
    pub fn print_leading<W: Write + ?Sized>(&mut self, out: &mut W, value: T) -> bool {
        self.print(out, value, Placement::Leading)
    }

    /// Write `value` + `label` + line ending if `value` changed.
    /// Returns true if the value changed (and a print was attempted).
    #[inline]
    pub fn print_trailing<W: Write + ?Sized>(&mut self, out: &mut W, value: T) -> bool {
        self.print(out, value, Placement::Trailing)
    }

    /// Best-effort print with the given placement; sink errors are discarded.
    pub fn print<W: Write + ?Sized>(&mut self, out: &mut W, value: T, placement: Placement) -> bool {
        // On error the value was still recorded, so it counts as printed.
        self.try_print(out, value, placement).unwrap_or(true)
    }

    #[inline]
    pub fn try_print_leading<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        value: T,
    ) -> Result<bool, core::fmt::Error> {
        self.try_print(out, value, Placement::Leading)
    }

    #[inline]
    pub fn try_print_trailing<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        value: T,
    ) -> Result<bool, core::fmt::Error> {
        self.try_print(out, value, Placement::Trailing)
    }

    /// Print with the given placement, surfacing sink errors.
    ///
    /// `Ok(false)` means the value was unchanged and nothing was written.
    pub fn try_print<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        value: T,
        placement: Placement,
    ) -> Result<bool, core::fmt::Error> {
        if self.last.as_ref() == Some(&value) {
            self.suppressed = self.suppressed.saturating_add(1);
            trace!("unchanged: {=str}", self.label);
            return Ok(false);
        }

        let value = &*self.last.insert(value);
        trace!("changed: {=str} ({})", self.label, placement);
        match placement {
            Placement::Leading => {
                out.write_str(self.label)?;
                write!(out, "{value}")?;
            }
            Placement::Trailing => {
                write!(out, "{value}")?;
                out.write_str(self.label)?;
            }
        }
        out.write_str(self.line_ending.as_str())?;
        Ok(true)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for ChangeGatedPrinter<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChangeGatedPrinter")
            .field("label", &self.label)
            .field("last", &self.last)
            .field("line_ending", &self.line_ending)
            .field("suppressed", &self.suppressed)
            .finish()
    }
}
