// SPDX-License-Identifier: MIT
//
// Width classifier — code point to display columns, total over the
// whole code space.
//
// Priority order matters and is deliberate:
//
//   1. Control and format points render blank, zero columns.
//   2. Combining-mark blocks are zero width (the mark overlays the
//      glyph before it; composition itself is out of scope here).
//   3. Emoji blocks are forced to two columns. The legacy east-asian
//      table calls many of them narrow or ambiguous; real terminals
//      draw them wide, and a grid laid out from the table alone drifts
//      off its separators.
//   4. CJK-family blocks defer to the legacy table (UAX #11, CJK
//      variant) via the `unicode-width` crate.
//   5. Everything else — classified or not — is one column.
//
// Never fails: lone surrogates and unassigned gaps take the default.

use unicode_width::UnicodeWidthChar;

use crate::blocks::{self, BlockClass};

/// Display columns for `cp`: 0, 1, or 2.
#[must_use]
pub fn width(cp: u32) -> u8 {
    if cp < 0x20 || (0x7F..=0x9F).contains(&cp) {
        return 0;
    }

    match blocks::lookup(cp).map(|b| b.class) {
        Some(BlockClass::Combining) => 0,
        Some(BlockClass::Emoji) => 2,
        Some(BlockClass::EastAsian) => east_asian(cp),
        Some(BlockClass::Normal) | None => 1,
    }
}

/// Legacy east-asian width, normalized into {0, 1, 2}.
fn east_asian(cp: u32) -> u8 {
    let Some(ch) = char::from_u32(cp) else {
        // Surrogates; no scalar value, rendered blank by the cache.
        return 1;
    };
    match ch.width_cjk() {
        None => 0,
        Some(w) => u8::try_from(w.min(2)).unwrap_or(2),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Totality ────────────────────────────────────────────────────────

    #[test]
    fn width_is_total_and_bounded() {
        // Every code point, not just scalars: surrogates included.
        for cp in 0..=0x0010_FFFF_u32 {
            let w = width(cp);
            assert!(w <= 2, "U+{cp:04X} -> {w}");
        }
    }

    // ── Rule 1: controls ────────────────────────────────────────────────

    #[test]
    fn controls_are_zero() {
        assert_eq!(width(0x00), 0);
        assert_eq!(width(0x09), 0);
        assert_eq!(width(0x1F), 0);
        assert_eq!(width(0x7F), 0);
        assert_eq!(width(0x80), 0);
        assert_eq!(width(0x9F), 0);
    }

    #[test]
    fn space_and_nbsp_are_not_controls() {
        assert_eq!(width(0x20), 1);
        assert_eq!(width(0xA0), 1);
    }

    // ── Rule 2: combining marks ─────────────────────────────────────────

    #[test]
    fn combining_marks_are_zero() {
        assert_eq!(width(0x0301), 0); // combining acute accent
        assert_eq!(width(0x0361), 0); // combining double inverted breve
        assert_eq!(width(0xFE21), 0); // combining ligature right half
        assert_eq!(width(0xE0100), 0); // variation selector-17
    }

    // ── Rule 3: emoji override ──────────────────────────────────────────

    #[test]
    fn emoji_are_wide() {
        assert_eq!(width(0x1F600), 2); // grinning face
        assert_eq!(width(0x1F680), 2); // rocket
        assert_eq!(width(0x1F32D), 2); // hot dog
        assert_eq!(width(0x1F9F0), 2); // toolbox
        assert_eq!(width(0x1FA70), 2); // ballet shoes
    }

    #[test]
    fn emoji_override_beats_legacy_table() {
        // The legacy table does not call every pictograph wide; the
        // whole block is forced anyway.
        for cp in 0x1F300..=0x1F5FF_u32 {
            assert_eq!(width(cp), 2, "U+{cp:04X}");
        }
    }

    // ── Rule 4: east-asian delegate ─────────────────────────────────────

    #[test]
    fn cjk_ideographs_are_wide() {
        assert_eq!(width(0x4E2D), 2); // 中
        assert_eq!(width(0x3042), 2); // あ
        assert_eq!(width(0x30A2), 2); // ア
        assert_eq!(width(0xAC00), 2); // 가
        assert_eq!(width(0x2_0000), 2); // extension B
    }

    #[test]
    fn halfwidth_forms_are_narrow() {
        assert_eq!(width(0xFF61), 1); // halfwidth ideographic full stop
        assert_eq!(width(0xFF76), 1); // halfwidth katakana ka
    }

    #[test]
    fn fullwidth_forms_are_wide() {
        assert_eq!(width(0xFF01), 2); // fullwidth exclamation mark
        assert_eq!(width(0xFF21), 2); // fullwidth A
    }

    // ── Rule 5/6: default ───────────────────────────────────────────────

    #[test]
    fn ordinary_scripts_are_narrow() {
        assert_eq!(width(0x0041), 1); // A
        assert_eq!(width(0x03B1), 1); // α
        assert_eq!(width(0x0430), 1); // а
        assert_eq!(width(0x2500), 1); // box drawing light horizontal
        assert_eq!(width(0x25A0), 1); // black square
        assert_eq!(width(0xE000), 1); // private use
    }

    #[test]
    fn unassigned_gap_defaults_to_narrow() {
        assert_eq!(width(0x11000), 1);
    }

    #[test]
    fn surrogates_default_to_narrow() {
        assert_eq!(width(0xD800), 1);
        assert_eq!(width(0xDFFF), 1);
    }
}
