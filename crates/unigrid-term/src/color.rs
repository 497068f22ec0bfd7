// SPDX-License-Identifier: MIT
//
// Cell colors — the 4-byte color representation stored per codepoint.
//
// Three encodings cover every terminal in practice: the terminal's own
// default pair, the 256-color palette, and 24-bit TrueColor. The grid
// mostly renders in default colors; the type exists so a line can carry
// per-codepoint color without the renderer caring how it was chosen.

/// A resolved terminal color, ready for SGR emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CellColor {
    /// 24-bit `TrueColor` (the standard for modern terminals).
    Rgb(u8, u8, u8),

    /// ANSI 256-color palette index.
    Ansi256(u8),

    /// Terminal default color (inherits from terminal settings).
    #[default]
    Default,
}

impl CellColor {
    /// Whether this is the terminal default (no SGR needed when the
    /// terminal is already in its default state).
    #[inline]
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn cell_color_is_4_bytes() {
        assert_eq!(mem::size_of::<CellColor>(), 4);
    }

    #[test]
    fn default_is_default_variant() {
        assert_eq!(CellColor::default(), CellColor::Default);
        assert!(CellColor::Default.is_default());
    }

    #[test]
    fn rgb_and_palette_are_not_default() {
        assert!(!CellColor::Rgb(1, 2, 3).is_default());
        assert!(!CellColor::Ansi256(42).is_default());
    }
}
