// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit — that's the driver's job. This module
// just knows the byte-level encoding of every terminal command we need.
//
// All cursor positions are 0-indexed in our API and converted to 1-indexed
// for the terminal (ANSI standard uses 1-based coordinates).
//
// All functions return `io::Result` propagated from the underlying writer.
// In practice they never fail when writing to a Vec-backed buffer.
use std::io::{self, Write};

use crate::cell::StyleFlags;
use crate::color::CellColor;

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Move the cursor to `(x, y)` using the CUP (Cursor Position) sequence.
///
/// Our coordinates are 0-indexed; ANSI CUP is 1-indexed.
#[inline]
pub fn cursor_to(w: &mut impl Write, x: u16, y: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

/// Hide the cursor (DECTCEM reset).
#[inline]
pub fn cursor_hide(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25l")
}

/// Show the cursor (DECTCEM set).
#[inline]
pub fn cursor_show(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25h")
}

// ─── Screen ──────────────────────────────────────────────────────────────────

/// Clear the entire screen (ED 2).
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2J")
}

/// Clear from the cursor to the end of the line (EL 0).
#[inline]
pub fn clear_to_eol(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[K")
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Standout ────────────────────────────────────────────────────────────────

/// Enter or leave standout mode (SGR 7 / SGR 27, the so/se termcap pair).
#[inline]
pub fn standout(w: &mut impl Write, on: bool) -> io::Result<()> {
    if on {
        w.write_all(b"\x1b[7m")
    } else {
        w.write_all(b"\x1b[27m")
    }
}

// ─── Foreground Color ────────────────────────────────────────────────────────

/// Set the foreground (text) color.
///
/// Uses compact SGR codes for standard colors (30-37, 90-97), the 256-color
/// extended format for palette indices 16-255, and 24-bit `TrueColor` for RGB.
pub fn fg(w: &mut impl Write, color: CellColor) -> io::Result<()> {
    match color {
        CellColor::Default => w.write_all(b"\x1b[39m"),
        CellColor::Ansi256(idx) => {
            if idx < 8 {
                write!(w, "\x1b[{}m", 30 + u16::from(idx))
            } else if idx < 16 {
                write!(w, "\x1b[{}m", 82 + u16::from(idx))
            } else {
                write!(w, "\x1b[38;5;{idx}m")
            }
        }
        CellColor::Rgb(r, g, b) => write!(w, "\x1b[38;2;{r};{g};{b}m"),
    }
}

// ─── Background Color ────────────────────────────────────────────────────────

/// Set the background color.
///
/// Same encoding strategy as [`fg`] but with BG-specific SGR codes
/// (40–47, 100–107, 48;5;N, 48;2;R;G;B).
pub fn bg(w: &mut impl Write, color: CellColor) -> io::Result<()> {
    match color {
        CellColor::Default => w.write_all(b"\x1b[49m"),
        CellColor::Ansi256(idx) => {
            if idx < 8 {
                write!(w, "\x1b[{}m", 40 + u16::from(idx))
            } else if idx < 16 {
                write!(w, "\x1b[{}m", 92 + u16::from(idx))
            } else {
                write!(w, "\x1b[48;5;{idx}m")
            }
        }
        CellColor::Rgb(r, g, b) => write!(w, "\x1b[48;2;{r};{g};{b}m"),
    }
}

// ─── Text Effects ────────────────────────────────────────────────────────────

/// Emit SGR codes for style flags as a single CSI sequence.
///
/// Multiple effects are semicolon-separated: `\x1b[1;7m` for bold +
/// standout. Does nothing if no flags are set.
pub fn effects(w: &mut impl Write, flags: StyleFlags) -> io::Result<()> {
    if flags.is_empty() {
        return Ok(());
    }

    w.write_all(b"\x1b[")?;
    let mut first = true;

    macro_rules! emit {
        ($flag:expr, $code:expr) => {
            if flags.contains($flag) {
                if !first {
                    w.write_all(b";")?;
                }
                w.write_all($code)?;
                first = false;
            }
        };
    }

    emit!(StyleFlags::BOLD, b"1");
    emit!(StyleFlags::UNDERLINE, b"4");
    emit!(StyleFlags::STANDOUT, b"7");
    let _ = first; // Last expansion sets first; suppress dead-write warning.

    w.write_all(b"m")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: run an ANSI function and return its output as a string.
    fn emit<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── Cursor ──────────────────────────────────────────────────────────

    #[test]
    fn cursor_to_origin() {
        assert_eq!(emit(|w| cursor_to(w, 0, 0)), "\x1b[1;1H");
    }

    #[test]
    fn cursor_to_position() {
        assert_eq!(emit(|w| cursor_to(w, 10, 20)), "\x1b[21;11H");
    }

    #[test]
    fn cursor_to_max() {
        // Verify no overflow with large coordinates.
        let s = emit(|w| cursor_to(w, 999, 499));
        assert_eq!(s, "\x1b[500;1000H");
    }

    #[test]
    fn cursor_hide_sequence() {
        assert_eq!(emit(|w| cursor_hide(w)), "\x1b[?25l");
    }

    #[test]
    fn cursor_show_sequence() {
        assert_eq!(emit(|w| cursor_show(w)), "\x1b[?25h");
    }

    // ── Screen ──────────────────────────────────────────────────────────

    #[test]
    fn clear_screen_sequence() {
        assert_eq!(emit(|w| clear_screen(w)), "\x1b[2J");
    }

    #[test]
    fn clear_to_eol_sequence() {
        assert_eq!(emit(|w| clear_to_eol(w)), "\x1b[K");
    }

    #[test]
    fn reset_sequence() {
        assert_eq!(emit(|w| reset(w)), "\x1b[0m");
    }

    // ── Standout ────────────────────────────────────────────────────────

    #[test]
    fn standout_on() {
        assert_eq!(emit(|w| standout(w, true)), "\x1b[7m");
    }

    #[test]
    fn standout_off() {
        assert_eq!(emit(|w| standout(w, false)), "\x1b[27m");
    }

    // ── Foreground Color ────────────────────────────────────────────────

    #[test]
    fn fg_default() {
        assert_eq!(emit(|w| fg(w, CellColor::Default)), "\x1b[39m");
    }

    #[test]
    fn fg_ansi_standard() {
        assert_eq!(emit(|w| fg(w, CellColor::Ansi256(1))), "\x1b[31m");
    }

    #[test]
    fn fg_ansi_bright() {
        assert_eq!(emit(|w| fg(w, CellColor::Ansi256(9))), "\x1b[91m");
    }

    #[test]
    fn fg_ansi_extended() {
        assert_eq!(emit(|w| fg(w, CellColor::Ansi256(42))), "\x1b[38;5;42m");
    }

    #[test]
    fn fg_rgb() {
        assert_eq!(
            emit(|w| fg(w, CellColor::Rgb(255, 128, 0))),
            "\x1b[38;2;255;128;0m"
        );
    }

    // ── Background Color ────────────────────────────────────────────────

    #[test]
    fn bg_default() {
        assert_eq!(emit(|w| bg(w, CellColor::Default)), "\x1b[49m");
    }

    #[test]
    fn bg_ansi_standard() {
        assert_eq!(emit(|w| bg(w, CellColor::Ansi256(2))), "\x1b[42m");
    }

    #[test]
    fn bg_ansi_extended() {
        assert_eq!(emit(|w| bg(w, CellColor::Ansi256(200))), "\x1b[48;5;200m");
    }

    #[test]
    fn bg_rgb() {
        assert_eq!(
            emit(|w| bg(w, CellColor::Rgb(0, 100, 200))),
            "\x1b[48;2;0;100;200m"
        );
    }

    // ── Effects ─────────────────────────────────────────────────────────

    #[test]
    fn effects_empty_emits_nothing() {
        assert_eq!(emit(|w| effects(w, StyleFlags::empty())), "");
    }

    #[test]
    fn effects_standout() {
        assert_eq!(emit(|w| effects(w, StyleFlags::STANDOUT)), "\x1b[7m");
    }

    #[test]
    fn effects_bold() {
        assert_eq!(emit(|w| effects(w, StyleFlags::BOLD)), "\x1b[1m");
    }

    #[test]
    fn effects_combined() {
        let s = StyleFlags::BOLD | StyleFlags::UNDERLINE | StyleFlags::STANDOUT;
        assert_eq!(emit(|w| effects(w, s)), "\x1b[1;4;7m");
    }

    // ── Composition ─────────────────────────────────────────────────────

    #[test]
    fn multiple_sequences_compose() {
        let mut buf = Vec::new();
        cursor_to(&mut buf, 5, 3).unwrap();
        standout(&mut buf, true).unwrap();
        clear_to_eol(&mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "\x1b[4;6H\x1b[7m\x1b[K");
    }
}
