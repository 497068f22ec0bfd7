// SPDX-License-Identifier: MIT
//
// unigrid-term — Terminal layer for unigrid.
//
// Raw-mode control, escape-sequence output, and single-byte input for a
// full-screen code-point inspector. The driver surface is deliberately
// small: cursor movement, line/screen clearing, standout, visibility,
// and size queries — the handful of capabilities a grid viewer needs.
//
// This crate intentionally avoids external TUI frameworks (ratatui,
// crossterm) in favor of direct terminal control via ANSI escape
// sequences and raw termios. Every byte sent to the terminal is
// accounted for.

pub mod ansi;
pub mod cell;
pub mod color;
pub mod driver;
pub mod event_loop;
pub mod reader;
pub mod terminal;
