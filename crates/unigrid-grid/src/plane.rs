// SPDX-License-Identifier: MIT
//
// Plane cache — one plane of pre-rendered grid rows.
//
// A plane is 0x10000 code points, shown 16 per row: 4096 rows. Building
// a row means classifying 16 widths and formatting a hex header, so the
// whole plane is rebuilt once on `set_plane` and then served from the
// cache; scrolling costs nothing but the blit.
//
// Row layout (every slot exactly 3 display columns):
//
//   0040│ @│ A│ B│ C│ D│ E│ F│ G│ H│ I│ J│ K│ L│ M│ N│ O│Basic Latin
//   ^^^^ 4-hex in-plane offset + separator = 5 columns
//        each slot: pad (2 − width) blanks, glyph, separator
//
// Zero-width marks get two pad blanks and overlay the second; wide
// glyphs get none. The fixed 3-column slot is what lets the renderer
// clip by column count alone. Code points with no printable glyph
// (controls, C1, whitespace, lone surrogates) are substituted by a
// blank before classification so the slot shape never varies.

use unigrid_term::cell::{TermCodepoint, TermLine};

use crate::blocks;
use crate::render::LineSource;
use crate::width::width;

/// Number of Unicode planes.
pub const PLANE_COUNT: u8 = 17;

/// Rows per plane: 0x10000 code points, 16 per row.
pub const ROWS_PER_PLANE: usize = 4096;

/// Code points per row.
pub const COLS_PER_ROW: u32 = 16;

/// Separator glyph between slots.
const SEPARATOR: char = '│';

/// Whether `cp` has no glyph of its own and renders as a blank slot.
///
/// Mirrors the C locale's isspace/iscntrl over ASCII, plus the C1
/// range and anything without a scalar value (surrogates).
fn is_blank_slot(cp: u32) -> bool {
    matches!(cp, 0x00..=0x20 | 0x7F..=0x9F) || char::from_u32(cp).is_none()
}

/// Build one row: hex header, 16 fixed-width slots, block-name tail.
fn build_line(base: u32) -> TermLine {
    // 5 header + 16 × up to 4 codepoints + tail.
    let mut line = TermLine::with_capacity(96);

    let offset = base & 0xFFFF;
    line.push_str(&format!("{offset:04X}"), |_| 1);
    line.push(TermCodepoint::new(SEPARATOR, 1));

    for i in 0..COLS_PER_ROW {
        let cp = base + i;
        let (glyph, w) = if is_blank_slot(cp) {
            (' ', 1)
        } else {
            // Scalar guaranteed: is_blank_slot covers from_u32 failures.
            (char::from_u32(cp).unwrap_or(' '), width(cp))
        };

        for _ in 0..(2 - w) {
            line.push(TermCodepoint::BLANK);
        }
        line.push(TermCodepoint::new(glyph, w));
        line.push(TermCodepoint::new(SEPARATOR, 1));
    }

    let name = blocks::name(base);
    if !name.is_empty() {
        line.push_str(name, |_| 1);
    }

    line
}

/// Pre-rendered rows for the active plane.
///
/// The cache always reflects `plane()` completely — a rebuild replaces
/// every row before any caller can read one, never partially.
pub struct PlaneCache {
    plane: u8,
    lines: Vec<TermLine>,
}

impl PlaneCache {
    /// Build the cache for plane 0.
    #[must_use]
    pub fn new() -> Self {
        let mut cache = Self {
            plane: 0,
            lines: Vec::new(),
        };
        cache.rebuild();
        cache
    }

    /// The currently cached plane.
    #[inline]
    #[must_use]
    pub const fn plane(&self) -> u8 {
        self.plane
    }

    /// Switch to plane `p`, rebuilding all rows. No-op if `p` is
    /// already the active plane.
    ///
    /// `p` must be in `0..17`; out-of-range values are clamped to the
    /// last plane.
    pub fn set_plane(&mut self, p: u8) {
        let p = p.min(PLANE_COUNT - 1);
        if p == self.plane {
            return;
        }
        self.plane = p;
        self.rebuild();
    }

    /// The cached row, or `None` outside `0..4096`.
    #[inline]
    #[must_use]
    pub fn get_line(&self, row: usize) -> Option<&TermLine> {
        self.lines.get(row)
    }

    fn rebuild(&mut self) {
        let plane_base = u32::from(self.plane) << 16;
        self.lines.clear();
        self.lines.reserve(ROWS_PER_PLANE);
        for row in 0..ROWS_PER_PLANE {
            let base = plane_base | ((row as u32) << 4);
            self.lines.push(build_line(base));
        }
    }
}

impl Default for PlaneCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for PlaneCache {
    fn line_at(&self, row: usize) -> Option<&TermLine> {
        self.get_line(row)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line_text(line: &TermLine) -> String {
        line.codes().iter().map(|c| c.cp).collect()
    }

    // ── Blank slots ─────────────────────────────────────────────────────

    #[test]
    fn controls_and_whitespace_are_blank() {
        assert!(is_blank_slot(0x00));
        assert!(is_blank_slot(0x0A));
        assert!(is_blank_slot(0x20));
        assert!(is_blank_slot(0x7F));
        assert!(is_blank_slot(0x9F));
    }

    #[test]
    fn surrogates_are_blank() {
        assert!(is_blank_slot(0xD800));
        assert!(is_blank_slot(0xDFFF));
    }

    #[test]
    fn printable_is_not_blank() {
        assert!(!is_blank_slot(0x41));
        assert!(!is_blank_slot(0xA0));
        assert!(!is_blank_slot(0x4E2D));
    }

    // ── Row layout ──────────────────────────────────────────────────────

    #[test]
    fn ascii_row_renders_expected_text() {
        let line = build_line(0x0040);
        assert_eq!(
            line_text(&line),
            "0040│ @│ A│ B│ C│ D│ E│ F│ G│ H│ I│ J│ K│ L│ M│ N│ O│Basic Latin"
        );
    }

    #[test]
    fn control_row_is_all_blank_slots() {
        let line = build_line(0x0000);
        assert_eq!(
            line_text(&line),
            "0000│  │  │  │  │  │  │  │  │  │  │  │  │  │  │  │  │Basic Latin"
        );
    }

    #[test]
    fn every_slot_is_three_columns() {
        // Sampled rows across very different content: ASCII, combining
        // marks, CJK, emoji, surrogates, unassigned gaps.
        for base in [0x0040_u32, 0x0300, 0x4E20, 0x1F600, 0xD800, 0x11000] {
            let line = build_line(base);
            // Header (5) + 16 slots × 3 + tail (name columns).
            let name_cols = blocks::name(base).chars().count();
            assert_eq!(
                line.columns(),
                5 + 16 * 3 + name_cols,
                "row at U+{base:04X}"
            );
        }
    }

    #[test]
    fn wide_glyph_has_no_pad() {
        let line = build_line(0x4E20);
        let text = line_text(&line);
        // Slots pack glyph directly against the previous separator.
        assert!(text.starts_with("4E20│丠│"));
    }

    #[test]
    fn combining_mark_gets_two_pads() {
        let line = build_line(0x0300);
        let text = line_text(&line);
        // Two pad blanks, then the zero-width mark, then the separator.
        assert!(text.starts_with("0300│  \u{300}│"));
    }

    #[test]
    fn header_shows_in_plane_offset() {
        // Plane 1, row 0: base 0x10000, header still 4 hex digits.
        let line = build_line(0x1_0000);
        assert!(line_text(&line).starts_with("0000│"));
        let line = build_line(0x1_F600);
        assert!(line_text(&line).starts_with("F600│"));
    }

    #[test]
    fn gap_row_has_no_tail() {
        let line = build_line(0x11000);
        let text = line_text(&line);
        assert!(text.ends_with('│'), "unassigned rows end at the last slot");
    }

    // ── Cache behavior ──────────────────────────────────────────────────

    #[test]
    fn new_cache_is_plane_zero_full() {
        let cache = PlaneCache::new();
        assert_eq!(cache.plane(), 0);
        assert!(cache.get_line(0).is_some());
        assert!(cache.get_line(ROWS_PER_PLANE - 1).is_some());
        assert!(cache.get_line(ROWS_PER_PLANE).is_none());
    }

    #[test]
    fn set_plane_same_is_noop() {
        let mut cache = PlaneCache::new();
        let before = cache.get_line(100).unwrap().clone();
        cache.set_plane(0);
        assert_eq!(cache.get_line(100).unwrap(), &before);
    }

    #[test]
    fn set_plane_twice_is_idempotent() {
        let mut once = PlaneCache::new();
        once.set_plane(1);

        let mut twice = PlaneCache::new();
        twice.set_plane(1);
        twice.set_plane(1);

        for row in (0..ROWS_PER_PLANE).step_by(512) {
            assert_eq!(once.get_line(row), twice.get_line(row), "row {row}");
        }
    }

    #[test]
    fn set_plane_rebuilds_content() {
        let mut cache = PlaneCache::new();
        let bmp_row = line_text(cache.get_line(0xF60).unwrap());
        cache.set_plane(1);
        let smp_row = line_text(cache.get_line(0xF60).unwrap());
        assert_eq!(cache.plane(), 1);
        assert_ne!(bmp_row, smp_row);
        // Plane 1 row 0xF60 is the emoticons row.
        assert!(smp_row.ends_with("Emoticons"));
    }

    #[test]
    fn set_plane_clamps_out_of_range() {
        let mut cache = PlaneCache::new();
        cache.set_plane(40);
        assert_eq!(cache.plane(), PLANE_COUNT - 1);
    }

    #[test]
    fn line_source_matches_get_line() {
        let cache = PlaneCache::new();
        let via_trait: &dyn LineSource = &cache;
        assert_eq!(via_trait.line_at(7), cache.get_line(7));
        assert!(via_trait.line_at(ROWS_PER_PLANE).is_none());
    }
}
