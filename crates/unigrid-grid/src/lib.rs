// SPDX-License-Identifier: MIT
//
// unigrid-grid — the code-point grid core.
//
// Everything that decides *what* appears on screen lives here: the
// block table and width classifier, the per-plane line cache, the
// viewport blitter, and the key-driven navigation state. Terminal
// mechanics (raw mode, escapes, input) live in `unigrid-term`; this
// crate only talks to them through the `TermDriver` trait, so the whole
// core is testable without a TTY.
//
// Dependency order, leaves first: blocks → width → plane → render → view.

pub mod blocks;
pub mod plane;
pub mod render;
pub mod view;
pub mod width;
