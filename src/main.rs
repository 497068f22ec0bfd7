// SPDX-License-Identifier: MIT
//
// unigrid — a terminal Unicode code-point inspector.
//
// Paints a scrollable grid of every code point, 16 per row, 4096 rows
// per plane, 17 planes, each glyph at its classified display width and
// every row annotated with its block name. Navigated with vi keys.
//
//   unigrid-term → raw mode, ANSI driver, stdin reader, event loop
//   unigrid-grid → width classifier, plane cache, blitter, navigation
//
// The UnicodeView implements unigrid-term's App trait; each keypress
// flows through:
//
//   stdin → on_byte → navigation update → plane cache → draw → driver
//
// Layout:
//
//   ┌──────────────────────────────┐
//   │ P00│ 0│ 1│ … │ F│ (standout) │  ← header, 1 row
//   ├──────────────────────────────┤
//   │ 0000│  │  │ … block name     │  ← body, lines − 2 rows
//   ├──────────────────────────────┤
//   │ key: j  U+0010  TERM=…       │  ← status, 1 row
//   └──────────────────────────────┘
//
// Environment checks happen once before the terminal is touched; each
// failure has its own exit code so scripts can tell them apart:
//
//   1 — stdin is not a terminal
//   2 — TERM is not set
//   3 — terminal profile or driver initialization failed

use std::process;

use unigrid_grid::view::UnicodeView;
use unigrid_term::driver::{ProfileError, TermProfile};
use unigrid_term::event_loop::EventLoop;
use unigrid_term::terminal;

fn main() {
    if !terminal::is_tty() {
        eprintln!("unigrid: standard input is not a terminal");
        process::exit(1);
    }

    let profile = match TermProfile::from_env() {
        Ok(profile) => profile,
        Err(e @ ProfileError::TermUnset) => {
            eprintln!("unigrid: {e}");
            process::exit(2);
        }
        Err(e @ ProfileError::Unsupported(_)) => {
            eprintln!("unigrid: {e}");
            process::exit(3);
        }
    };

    let mut event_loop = EventLoop::new().unwrap_or_else(|e| {
        eprintln!("unigrid: failed to initialize terminal: {e}");
        process::exit(3);
    });

    let mut view = UnicodeView::new(profile, event_loop.size());

    if let Err(e) = event_loop.run(&mut view) {
        eprintln!("unigrid: {e}");
        process::exit(3);
    }
}
