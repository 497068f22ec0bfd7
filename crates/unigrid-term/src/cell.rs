// SPDX-License-Identifier: MIT
//
// TermCodepoint and TermLine — the atoms of grid rendering.
//
// Every glyph the inspector draws is a TermCodepoint: a Unicode scalar
// plus its classified display width and styling. A TermLine is one
// pre-rendered row of them — hex header, sixteen padded glyph slots,
// separators, block-name tail — built once per plane load and immutable
// until the plane changes.
//
// Width lives *in* the codepoint rather than being recomputed at draw
// time: classification happens once when a line is built, and the
// renderer only accumulates `cols` to clip at the viewport edge.
//
// Size: 16 bytes per codepoint, Copy-friendly. A full plane is 4096
// lines of ~90 codepoints = ~6 MB — trivial, and rebuilt only on plane
// switches.

use crate::color::CellColor;

// ─── Style Flags ─────────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Terminal effects stored as a compact bitfield.
    ///
    /// These correspond to the classic termcap mode pairs (so/se, us/ue,
    /// md/me) and map to SGR parameters on ANSI terminals. Combine with
    /// bitwise OR:
    ///
    /// ```
    /// use unigrid_term::cell::StyleFlags;
    ///
    /// let style = StyleFlags::STANDOUT | StyleFlags::BOLD;
    /// assert!(style.contains(StyleFlags::STANDOUT));
    /// assert!(!style.contains(StyleFlags::UNDERLINE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct StyleFlags: u8 {
        /// SGR 7 — standout (inverse video). Used for the header row
        /// and the active-plane indicator.
        const STANDOUT  = 1 << 0;
        /// SGR 4 — underline.
        const UNDERLINE = 1 << 1;
        /// SGR 1 — bold / increased intensity.
        const BOLD      = 1 << 2;
    }
}

impl StyleFlags {
    /// Whether no effects are set.
    #[inline]
    #[must_use]
    pub const fn is_plain(self) -> bool {
        self.bits() == 0
    }
}

// ─── TermCodepoint ───────────────────────────────────────────────────────────

/// One rendered code point: scalar value, display width, and styling.
///
/// Immutable once placed in a [`TermLine`]. The width is the *classified*
/// width (0, 1, or 2 columns), decided when the line was built — the
/// renderer never re-derives it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TermCodepoint {
    /// The Unicode scalar to display.
    pub cp: char,
    /// Display columns this codepoint occupies: 0, 1, or 2.
    pub cols: u8,
    /// Terminal effects (standout, underline, bold).
    pub flags: StyleFlags,
    /// Foreground color.
    pub fg: CellColor,
    /// Background color.
    pub bg: CellColor,
}

impl TermCodepoint {
    /// A plain codepoint: default colors, no effects.
    #[inline]
    #[must_use]
    pub const fn new(cp: char, cols: u8) -> Self {
        Self {
            cp,
            cols,
            flags: StyleFlags::empty(),
            fg: CellColor::Default,
            bg: CellColor::Default,
        }
    }

    /// A single blank column (space, width 1). The padding unit for
    /// narrow and zero-width glyph slots.
    pub const BLANK: Self = Self::new(' ', 1);

    /// Set style flags.
    #[inline]
    #[must_use]
    pub const fn with_flags(self, flags: StyleFlags) -> Self {
        Self { flags, ..self }
    }

    /// Set the foreground color.
    #[inline]
    #[must_use]
    pub const fn with_fg(self, fg: CellColor) -> Self {
        Self { fg, ..self }
    }

    /// Set the background color.
    #[inline]
    #[must_use]
    pub const fn with_bg(self, bg: CellColor) -> Self {
        Self { bg, ..self }
    }

    /// Whether this codepoint carries any styling (colors or effects).
    #[inline]
    #[must_use]
    pub fn is_styled(&self) -> bool {
        !self.flags.is_plain() || !self.fg.is_default() || !self.bg.is_default()
    }
}

impl std::fmt::Debug for TermCodepoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TermCodepoint({:?}, {} col)", self.cp, self.cols)?;
        if !self.flags.is_plain() {
            write!(f, ", {:?}", self.flags)?;
        }
        Ok(())
    }
}

// ─── TermLine ────────────────────────────────────────────────────────────────

/// One pre-rendered row: an ordered sequence of [`TermCodepoint`].
///
/// Lines are append-only during construction and read-only afterwards.
/// Width classification is injected as a function so the line type stays
/// independent of the classifier that feeds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermLine {
    codes: Vec<TermCodepoint>,
}

impl TermLine {
    /// An empty line.
    #[must_use]
    pub const fn new() -> Self {
        Self { codes: Vec::new() }
    }

    /// An empty line with room for `cap` codepoints.
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            codes: Vec::with_capacity(cap),
        }
    }

    /// Append one codepoint.
    #[inline]
    pub fn push(&mut self, cp: TermCodepoint) {
        self.codes.push(cp);
    }

    /// Append every char of `text`, classifying each with `get_cols`.
    /// Returns the total display columns appended.
    pub fn push_str(&mut self, text: &str, get_cols: impl Fn(char) -> u8) -> usize {
        let mut cols = 0;
        for ch in text.chars() {
            let w = get_cols(ch);
            self.codes.push(TermCodepoint::new(ch, w));
            cols += usize::from(w);
        }
        cols
    }

    /// The codepoints in order.
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[TermCodepoint] {
        &self.codes
    }

    /// Number of codepoints (not columns).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the line holds no codepoints.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Total display columns of the line.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.codes.iter().map(|c| usize::from(c.cols)).sum()
    }

    /// Remove all codepoints, keeping capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.codes.clear();
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
