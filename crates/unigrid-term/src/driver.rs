// SPDX-License-Identifier: MIT
//
// Terminal driver — the capability surface the grid renders against.
//
// The renderer never writes escape sequences itself. It talks to a
// `TermDriver`, a trait exposing exactly the handful of operations a
// full-screen grid needs: clear screen, clear to end of line, cursor
// movement and visibility, standout, and the current dimensions. The
// production implementation is [`AnsiDriver`], which emits the
// sequences from the [`ansi`](crate::ansi) module into any writer.
//
// Making this a trait keeps the renderer testable: tests drive it with
// an `AnsiDriver<Vec<u8>>` and assert on the exact byte stream, no TTY
// required.

use std::io::{self, Write};

use crate::ansi;
use crate::cell::TermCodepoint;
use crate::terminal::Size;

// ─── TermProfile ─────────────────────────────────────────────────────────────

/// Identity of the terminal we're driving, derived from `$TERM`.
///
/// The driver only emits standard ANSI/ECMA-48 sequences, so the profile
/// exists to *refuse* terminals that can't handle them rather than to
/// select among capability sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermProfile {
    /// The terminal name as reported by `$TERM`.
    pub name: String,
}

/// Why a terminal profile could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// `$TERM` is not set in the environment.
    TermUnset,
    /// `$TERM` names a terminal with no cursor addressing.
    Unsupported(String),
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TermUnset => write!(f, "TERM is not set"),
            Self::Unsupported(name) => {
                write!(f, "terminal type {name:?} does not support cursor addressing")
            }
        }
    }
}

impl std::error::Error for ProfileError {}

impl TermProfile {
    /// Build a profile from a `$TERM` value.
    ///
    /// # Errors
    ///
    /// [`ProfileError::TermUnset`] if the value is `None` or empty, and
    /// [`ProfileError::Unsupported`] for terminal types that lack cursor
    /// addressing (`dumb`, `unknown`).
    pub fn from_term(term: Option<&str>) -> Result<Self, ProfileError> {
        let name = match term {
            Some(t) if !t.is_empty() => t,
            _ => return Err(ProfileError::TermUnset),
        };

        match name {
            "dumb" | "unknown" => Err(ProfileError::Unsupported(name.to_string())),
            _ => Ok(Self {
                name: name.to_string(),
            }),
        }
    }

    /// Build a profile from the process environment.
    ///
    /// # Errors
    ///
    /// Same conditions as [`from_term`](Self::from_term).
    pub fn from_env() -> Result<Self, ProfileError> {
        let term = std::env::var("TERM").ok();
        Self::from_term(term.as_deref())
    }
}

// ─── TermDriver ──────────────────────────────────────────────────────────────

/// The operations the grid renderer needs from a terminal.
pub trait TermDriver {
    /// Clear the whole screen.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Clear from the cursor to the end of the current line.
    fn clear_to_eol(&mut self) -> io::Result<()>;

    /// Move the cursor to column `x`, row `y` (0-indexed).
    fn cursor_move(&mut self, x: u16, y: u16) -> io::Result<()>;

    /// Show or hide the cursor.
    fn cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Enter or leave standout mode for subsequent output.
    fn standout(&mut self, on: bool) -> io::Result<()>;

    /// Write one codepoint at the current cursor position.
    ///
    /// Styled codepoints carry their own SGR state; the driver resets
    /// attributes afterwards so plain output stays plain.
    fn put(&mut self, cp: &TermCodepoint) -> io::Result<()>;

    /// Write a plain string at the current cursor position.
    fn put_str(&mut self, s: &str) -> io::Result<()>;

    /// Current terminal width in columns.
    fn columns(&self) -> u16;

    /// Current terminal height in rows.
    fn lines(&self) -> u16;

    /// Flush buffered output to the terminal.
    fn flush(&mut self) -> io::Result<()>;
}

// ─── AnsiDriver ──────────────────────────────────────────────────────────────

/// ANSI escape-sequence driver over any writer.
///
/// Holds the current [`Size`] (updated via [`set_size`](Self::set_size)
/// on resize) and a standout latch so repeated `standout(true)` calls
/// emit the sequence only once.
pub struct AnsiDriver<W: Write> {
    out: W,
    size: Size,
    standout_on: bool,
}

impl<W: Write> AnsiDriver<W> {
    /// Wrap a writer with the given initial size.
    pub fn new(out: W, size: Size) -> Self {
        Self {
            out,
            size,
            standout_on: false,
        }
    }

    /// Update the cached terminal size after a resize.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Consume the driver, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TermDriver for AnsiDriver<W> {
    fn clear_screen(&mut self) -> io::Result<()> {
        ansi::clear_screen(&mut self.out)
    }

    fn clear_to_eol(&mut self) -> io::Result<()> {
        ansi::clear_to_eol(&mut self.out)
    }

    fn cursor_move(&mut self, x: u16, y: u16) -> io::Result<()> {
        ansi::cursor_to(&mut self.out, x, y)
    }

    fn cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            ansi::cursor_show(&mut self.out)
        } else {
            ansi::cursor_hide(&mut self.out)
        }
    }

    fn standout(&mut self, on: bool) -> io::Result<()> {
        if on == self.standout_on {
            return Ok(());
        }
        self.standout_on = on;
        ansi::standout(&mut self.out, on)
    }

    fn put(&mut self, cp: &TermCodepoint) -> io::Result<()> {
        if cp.is_styled() {
            ansi::effects(&mut self.out, cp.flags)?;
            ansi::fg(&mut self.out, cp.fg)?;
            ansi::bg(&mut self.out, cp.bg)?;
            write!(self.out, "{}", cp.cp)?;
            ansi::reset(&mut self.out)?;
            // Reset cleared the standout latch along with everything else.
            if self.standout_on {
                ansi::standout(&mut self.out, true)?;
            }
            Ok(())
        } else {
            write!(self.out, "{}", cp.cp)
        }
    }

    fn put_str(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }

    fn columns(&self) -> u16 {
        self.size.cols
    }

    fn lines(&self) -> u16 {
        self.size.rows
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
