// SPDX-License-Identifier: MIT
//
// Unicode block table — sorted, disjoint ranges with a width class.
//
// One static table drives both the block-name tail of every grid row
// and the width classifier's dispatch. Ranges are sorted by first code
// point and never overlap, so lookup is a binary search. Gaps between
// blocks are unassigned code points; `lookup` returns `None` there and
// the classifier falls back to single width.
//
// Classes:
//   Normal    — renders single width.
//   Combining — zero width (marks overlay the preceding glyph).
//   Emoji     — forced double width; legacy east-asian tables
//               under-report these, real terminals draw them wide.
//   EastAsian — width comes from the legacy CJK table (UAX #11).

/// Width class of a block, consumed by [`crate::width`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockClass {
    /// Single-width scripts and symbols.
    Normal,
    /// Zero-width combining marks.
    Combining,
    /// Emoji and pictographs, always double width.
    Emoji,
    /// CJK-family ranges deferred to the east-asian width table.
    EastAsian,
}

/// A named contiguous code-point range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// First code point of the range (inclusive).
    pub first: u32,
    /// Last code point of the range (inclusive).
    pub last: u32,
    /// Block name per the Unicode character database.
    pub name: &'static str,
    /// Width class for the classifier.
    pub class: BlockClass,
}

use BlockClass::{Combining, EastAsian, Emoji, Normal};

/// The block table. Sorted by `first`, ranges disjoint.
#[rustfmt::skip]
pub static BLOCKS: &[Block] = &[
    Block { first: 0x0000, last: 0x007F, name: "Basic Latin", class: Normal },
    Block { first: 0x0080, last: 0x00FF, name: "Latin-1 Supplement", class: Normal },
    Block { first: 0x0100, last: 0x017F, name: "Latin Extended-A", class: Normal },
    Block { first: 0x0180, last: 0x024F, name: "Latin Extended-B", class: Normal },
    Block { first: 0x0250, last: 0x02AF, name: "IPA Extensions", class: Normal },
    Block { first: 0x02B0, last: 0x02FF, name: "Spacing Modifier Letters", class: Normal },
    Block { first: 0x0300, last: 0x036F, name: "Combining Diacritical Marks", class: Combining },
    Block { first: 0x0370, last: 0x03FF, name: "Greek and Coptic", class: Normal },
    Block { first: 0x0400, last: 0x04FF, name: "Cyrillic", class: Normal },
    Block { first: 0x0500, last: 0x052F, name: "Cyrillic Supplement", class: Normal },
    Block { first: 0x0530, last: 0x058F, name: "Armenian", class: Normal },
    Block { first: 0x0590, last: 0x05FF, name: "Hebrew", class: Normal },
    Block { first: 0x0600, last: 0x06FF, name: "Arabic", class: Normal },
    Block { first: 0x0700, last: 0x074F, name: "Syriac", class: Normal },
    Block { first: 0x0750, last: 0x077F, name: "Arabic Supplement", class: Normal },
    Block { first: 0x0780, last: 0x07BF, name: "Thaana", class: Normal },
    Block { first: 0x07C0, last: 0x07FF, name: "NKo", class: Normal },
    Block { first: 0x0800, last: 0x083F, name: "Samaritan", class: Normal },
    Block { first: 0x0840, last: 0x085F, name: "Mandaic", class: Normal },
    Block { first: 0x0860, last: 0x086F, name: "Syriac Supplement", class: Normal },
    Block { first: 0x0870, last: 0x089F, name: "Arabic Extended-B", class: Normal },
    Block { first: 0x08A0, last: 0x08FF, name: "Arabic Extended-A", class: Normal },
    Block { first: 0x0900, last: 0x097F, name: "Devanagari", class: Normal },
    Block { first: 0x0980, last: 0x09FF, name: "Bengali", class: Normal },
    Block { first: 0x0A00, last: 0x0A7F, name: "Gurmukhi", class: Normal },
    Block { first: 0x0A80, last: 0x0AFF, name: "Gujarati", class: Normal },
    Block { first: 0x0B00, last: 0x0B7F, name: "Oriya", class: Normal },
    Block { first: 0x0B80, last: 0x0BFF, name: "Tamil", class: Normal },
    Block { first: 0x0C00, last: 0x0C7F, name: "Telugu", class: Normal },
    Block { first: 0x0C80, last: 0x0CFF, name: "Kannada", class: Normal },
    Block { first: 0x0D00, last: 0x0D7F, name: "Malayalam", class: Normal },
    Block { first: 0x0D80, last: 0x0DFF, name: "Sinhala", class: Normal },
    Block { first: 0x0E00, last: 0x0E7F, name: "Thai", class: Normal },
    Block { first: 0x0E80, last: 0x0EFF, name: "Lao", class: Normal },
    Block { first: 0x0F00, last: 0x0FFF, name: "Tibetan", class: Normal },
    Block { first: 0x1000, last: 0x109F, name: "Myanmar", class: Normal },
    Block { first: 0x10A0, last: 0x10FF, name: "Georgian", class: Normal },
    Block { first: 0x1100, last: 0x11FF, name: "Hangul Jamo", class: EastAsian },
    Block { first: 0x1200, last: 0x137F, name: "Ethiopic", class: Normal },
    Block { first: 0x1380, last: 0x139F, name: "Ethiopic Supplement", class: Normal },
    Block { first: 0x13A0, last: 0x13FF, name: "Cherokee", class: Normal },
    Block { first: 0x1400, last: 0x167F, name: "Unified Canadian Aboriginal Syllabics", class: Normal },
    Block { first: 0x1680, last: 0x169F, name: "Ogham", class: Normal },
    Block { first: 0x16A0, last: 0x16FF, name: "Runic", class: Normal },
    Block { first: 0x1700, last: 0x171F, name: "Tagalog", class: Normal },
    Block { first: 0x1780, last: 0x17FF, name: "Khmer", class: Normal },
    Block { first: 0x1800, last: 0x18AF, name: "Mongolian", class: Normal },
    Block { first: 0x1900, last: 0x194F, name: "Limbu", class: Normal },
    Block { first: 0x1950, last: 0x197F, name: "Tai Le", class: Normal },
    Block { first: 0x1A00, last: 0x1A1F, name: "Buginese", class: Normal },
    Block { first: 0x1AB0, last: 0x1AFF, name: "Combining Diacritical Marks Extended", class: Combining },
    Block { first: 0x1B00, last: 0x1B7F, name: "Balinese", class: Normal },
    Block { first: 0x1B80, last: 0x1BBF, name: "Sundanese", class: Normal },
    Block { first: 0x1D00, last: 0x1D7F, name: "Phonetic Extensions", class: Normal },
    Block { first: 0x1D80, last: 0x1DBF, name: "Phonetic Extensions Supplement", class: Normal },
    Block { first: 0x1DC0, last: 0x1DFF, name: "Combining Diacritical Marks Supplement", class: Combining },
    Block { first: 0x1E00, last: 0x1EFF, name: "Latin Extended Additional", class: Normal },
    Block { first: 0x1F00, last: 0x1FFF, name: "Greek Extended", class: Normal },
    Block { first: 0x2000, last: 0x206F, name: "General Punctuation", class: Normal },
    Block { first: 0x2070, last: 0x209F, name: "Superscripts and Subscripts", class: Normal },
    Block { first: 0x20A0, last: 0x20CF, name: "Currency Symbols", class: Normal },
    Block { first: 0x20D0, last: 0x20FF, name: "Combining Diacritical Marks for Symbols", class: Combining },
    Block { first: 0x2100, last: 0x214F, name: "Letterlike Symbols", class: Normal },
    Block { first: 0x2150, last: 0x218F, name: "Number Forms", class: Normal },
    Block { first: 0x2190, last: 0x21FF, name: "Arrows", class: Normal },
    Block { first: 0x2200, last: 0x22FF, name: "Mathematical Operators", class: Normal },
    Block { first: 0x2300, last: 0x23FF, name: "Miscellaneous Technical", class: Normal },
    Block { first: 0x2400, last: 0x243F, name: "Control Pictures", class: Normal },
    Block { first: 0x2440, last: 0x245F, name: "Optical Character Recognition", class: Normal },
    Block { first: 0x2460, last: 0x24FF, name: "Enclosed Alphanumerics", class: Normal },
    Block { first: 0x2500, last: 0x257F, name: "Box Drawing", class: Normal },
    Block { first: 0x2580, last: 0x259F, name: "Block Elements", class: Normal },
    Block { first: 0x25A0, last: 0x25FF, name: "Geometric Shapes", class: Normal },
    Block { first: 0x2600, last: 0x26FF, name: "Miscellaneous Symbols", class: Normal },
    Block { first: 0x2700, last: 0x27BF, name: "Dingbats", class: Normal },
    Block { first: 0x27C0, last: 0x27EF, name: "Miscellaneous Mathematical Symbols-A", class: Normal },
    Block { first: 0x27F0, last: 0x27FF, name: "Supplemental Arrows-A", class: Normal },
    Block { first: 0x2800, last: 0x28FF, name: "Braille Patterns", class: Normal },
    Block { first: 0x2900, last: 0x297F, name: "Supplemental Arrows-B", class: Normal },
    Block { first: 0x2980, last: 0x29FF, name: "Miscellaneous Mathematical Symbols-B", class: Normal },
    Block { first: 0x2A00, last: 0x2AFF, name: "Supplemental Mathematical Operators", class: Normal },
    Block { first: 0x2B00, last: 0x2BFF, name: "Miscellaneous Symbols and Arrows", class: Normal },
    Block { first: 0x2C00, last: 0x2C5F, name: "Glagolitic", class: Normal },
    Block { first: 0x2C60, last: 0x2C7F, name: "Latin Extended-C", class: Normal },
    Block { first: 0x2C80, last: 0x2CFF, name: "Coptic", class: Normal },
    Block { first: 0x2D00, last: 0x2D2F, name: "Georgian Supplement", class: Normal },
    Block { first: 0x2D30, last: 0x2D7F, name: "Tifinagh", class: Normal },
    Block { first: 0x2D80, last: 0x2DDF, name: "Ethiopic Extended", class: Normal },
    Block { first: 0x2DE0, last: 0x2DFF, name: "Cyrillic Extended-A", class: Combining },
    Block { first: 0x2E00, last: 0x2E7F, name: "Supplemental Punctuation", class: Normal },
    Block { first: 0x2E80, last: 0x2EFF, name: "CJK Radicals Supplement", class: EastAsian },
    Block { first: 0x2F00, last: 0x2FDF, name: "Kangxi Radicals", class: EastAsian },
    Block { first: 0x2FF0, last: 0x2FFF, name: "Ideographic Description Characters", class: EastAsian },
    Block { first: 0x3000, last: 0x303F, name: "CJK Symbols and Punctuation", class: EastAsian },
    Block { first: 0x3040, last: 0x309F, name: "Hiragana", class: EastAsian },
    Block { first: 0x30A0, last: 0x30FF, name: "Katakana", class: EastAsian },
    Block { first: 0x3100, last: 0x312F, name: "Bopomofo", class: EastAsian },
    Block { first: 0x3130, last: 0x318F, name: "Hangul Compatibility Jamo", class: EastAsian },
    Block { first: 0x3190, last: 0x319F, name: "Kanbun", class: EastAsian },
    Block { first: 0x31A0, last: 0x31BF, name: "Bopomofo Extended", class: EastAsian },
    Block { first: 0x31C0, last: 0x31EF, name: "CJK Strokes", class: EastAsian },
    Block { first: 0x31F0, last: 0x31FF, name: "Katakana Phonetic Extensions", class: EastAsian },
    Block { first: 0x3200, last: 0x32FF, name: "Enclosed CJK Letters and Months", class: EastAsian },
    Block { first: 0x3300, last: 0x33FF, name: "CJK Compatibility", class: EastAsian },
    Block { first: 0x3400, last: 0x4DBF, name: "CJK Unified Ideographs Extension A", class: EastAsian },
    Block { first: 0x4DC0, last: 0x4DFF, name: "Yijing Hexagram Symbols", class: Normal },
    Block { first: 0x4E00, last: 0x9FFF, name: "CJK Unified Ideographs", class: EastAsian },
    Block { first: 0xA000, last: 0xA48F, name: "Yi Syllables", class: EastAsian },
    Block { first: 0xA490, last: 0xA4CF, name: "Yi Radicals", class: EastAsian },
    Block { first: 0xA4D0, last: 0xA4FF, name: "Lisu", class: Normal },
    Block { first: 0xA500, last: 0xA63F, name: "Vai", class: Normal },
    Block { first: 0xA640, last: 0xA69F, name: "Cyrillic Extended-B", class: Normal },
    Block { first: 0xA6A0, last: 0xA6FF, name: "Bamum", class: Normal },
    Block { first: 0xA720, last: 0xA7FF, name: "Latin Extended-D", class: Normal },
    Block { first: 0xA800, last: 0xA82F, name: "Syloti Nagri", class: Normal },
    Block { first: 0xA840, last: 0xA87F, name: "Phags-pa", class: Normal },
    Block { first: 0xA880, last: 0xA8DF, name: "Saurashtra", class: Normal },
    Block { first: 0xA8E0, last: 0xA8FF, name: "Devanagari Extended", class: Normal },
    Block { first: 0xA900, last: 0xA92F, name: "Kayah Li", class: Normal },
    Block { first: 0xA930, last: 0xA95F, name: "Rejang", class: Normal },
    Block { first: 0xA960, last: 0xA97F, name: "Hangul Jamo Extended-A", class: EastAsian },
    Block { first: 0xA980, last: 0xA9DF, name: "Javanese", class: Normal },
    Block { first: 0xAA00, last: 0xAA5F, name: "Cham", class: Normal },
    Block { first: 0xAA60, last: 0xAA7F, name: "Myanmar Extended-A", class: Normal },
    Block { first: 0xAA80, last: 0xAADF, name: "Tai Viet", class: Normal },
    Block { first: 0xABC0, last: 0xABFF, name: "Meetei Mayek", class: Normal },
    Block { first: 0xAC00, last: 0xD7AF, name: "Hangul Syllables", class: EastAsian },
    Block { first: 0xD7B0, last: 0xD7FF, name: "Hangul Jamo Extended-B", class: EastAsian },
    Block { first: 0xD800, last: 0xDB7F, name: "High Surrogates", class: Normal },
    Block { first: 0xDB80, last: 0xDBFF, name: "High Private Use Surrogates", class: Normal },
    Block { first: 0xDC00, last: 0xDFFF, name: "Low Surrogates", class: Normal },
    Block { first: 0xE000, last: 0xF8FF, name: "Private Use Area", class: Normal },
    Block { first: 0xF900, last: 0xFAFF, name: "CJK Compatibility Ideographs", class: EastAsian },
    Block { first: 0xFB00, last: 0xFB4F, name: "Alphabetic Presentation Forms", class: Normal },
    Block { first: 0xFB50, last: 0xFDFF, name: "Arabic Presentation Forms-A", class: Normal },
    Block { first: 0xFE00, last: 0xFE0F, name: "Variation Selectors", class: Combining },
    Block { first: 0xFE10, last: 0xFE1F, name: "Vertical Forms", class: EastAsian },
    Block { first: 0xFE20, last: 0xFE2F, name: "Combining Half Marks", class: Combining },
    Block { first: 0xFE30, last: 0xFE4F, name: "CJK Compatibility Forms", class: EastAsian },
    Block { first: 0xFE50, last: 0xFE6F, name: "Small Form Variants", class: Normal },
    Block { first: 0xFE70, last: 0xFEFF, name: "Arabic Presentation Forms-B", class: Normal },
    Block { first: 0xFF00, last: 0xFFEF, name: "Halfwidth and Fullwidth Forms", class: EastAsian },
    Block { first: 0xFFF0, last: 0xFFFF, name: "Specials", class: Normal },
    Block { first: 0x10000, last: 0x1007F, name: "Linear B Syllabary", class: Normal },
    Block { first: 0x10080, last: 0x100FF, name: "Linear B Ideograms", class: Normal },
    Block { first: 0x10100, last: 0x1013F, name: "Aegean Numbers", class: Normal },
    Block { first: 0x10140, last: 0x1018F, name: "Ancient Greek Numbers", class: Normal },
    Block { first: 0x101D0, last: 0x101FF, name: "Phaistos Disc", class: Normal },
    Block { first: 0x10300, last: 0x1032F, name: "Old Italic", class: Normal },
    Block { first: 0x10330, last: 0x1034F, name: "Gothic", class: Normal },
    Block { first: 0x10380, last: 0x1039F, name: "Ugaritic", class: Normal },
    Block { first: 0x103A0, last: 0x103DF, name: "Old Persian", class: Normal },
    Block { first: 0x10400, last: 0x1044F, name: "Deseret", class: Normal },
    Block { first: 0x10450, last: 0x1047F, name: "Shavian", class: Normal },
    Block { first: 0x10480, last: 0x104AF, name: "Osmanya", class: Normal },
    Block { first: 0x10800, last: 0x1083F, name: "Cypriot Syllabary", class: Normal },
    Block { first: 0x10900, last: 0x1091F, name: "Phoenician", class: Normal },
    Block { first: 0x10A00, last: 0x10A5F, name: "Kharoshthi", class: Normal },
    Block { first: 0x12000, last: 0x123FF, name: "Cuneiform", class: Normal },
    Block { first: 0x12400, last: 0x1247F, name: "Cuneiform Numbers and Punctuation", class: Normal },
    Block { first: 0x13000, last: 0x1342F, name: "Egyptian Hieroglyphs", class: Normal },
    Block { first: 0x14400, last: 0x1467F, name: "Anatolian Hieroglyphs", class: Normal },
    Block { first: 0x16800, last: 0x16A3F, name: "Bamum Supplement", class: Normal },
    Block { first: 0x17000, last: 0x187FF, name: "Tangut", class: EastAsian },
    Block { first: 0x18800, last: 0x18AFF, name: "Tangut Components", class: EastAsian },
    Block { first: 0x1B000, last: 0x1B0FF, name: "Kana Supplement", class: EastAsian },
    Block { first: 0x1B100, last: 0x1B12F, name: "Kana Extended-A", class: EastAsian },
    Block { first: 0x1D000, last: 0x1D0FF, name: "Byzantine Musical Symbols", class: Normal },
    Block { first: 0x1D100, last: 0x1D1FF, name: "Musical Symbols", class: Normal },
    Block { first: 0x1D400, last: 0x1D7FF, name: "Mathematical Alphanumeric Symbols", class: Normal },
    Block { first: 0x1F000, last: 0x1F02F, name: "Mahjong Tiles", class: Normal },
    Block { first: 0x1F030, last: 0x1F09F, name: "Domino Tiles", class: Normal },
    Block { first: 0x1F0A0, last: 0x1F0FF, name: "Playing Cards", class: Normal },
    Block { first: 0x1F100, last: 0x1F1FF, name: "Enclosed Alphanumeric Supplement", class: Normal },
    Block { first: 0x1F200, last: 0x1F2FF, name: "Enclosed Ideographic Supplement", class: EastAsian },
    Block { first: 0x1F300, last: 0x1F5FF, name: "Miscellaneous Symbols and Pictographs", class: Emoji },
    Block { first: 0x1F600, last: 0x1F64F, name: "Emoticons", class: Emoji },
    Block { first: 0x1F650, last: 0x1F67F, name: "Ornamental Dingbats", class: Normal },
    Block { first: 0x1F680, last: 0x1F6FF, name: "Transport and Map Symbols", class: Emoji },
    Block { first: 0x1F700, last: 0x1F77F, name: "Alchemical Symbols", class: Normal },
    Block { first: 0x1F780, last: 0x1F7FF, name: "Geometric Shapes Extended", class: Normal },
    Block { first: 0x1F800, last: 0x1F8FF, name: "Supplemental Arrows-C", class: Normal },
    Block { first: 0x1F900, last: 0x1F9FF, name: "Supplemental Symbols and Pictographs", class: Emoji },
    Block { first: 0x1FA00, last: 0x1FA6F, name: "Chess Symbols", class: Normal },
    Block { first: 0x1FA70, last: 0x1FAFF, name: "Symbols and Pictographs Extended-A", class: Emoji },
    Block { first: 0x20000, last: 0x2A6DF, name: "CJK Unified Ideographs Extension B", class: EastAsian },
    Block { first: 0x2A700, last: 0x2B73F, name: "CJK Unified Ideographs Extension C", class: EastAsian },
    Block { first: 0x2B740, last: 0x2B81F, name: "CJK Unified Ideographs Extension D", class: EastAsian },
    Block { first: 0x2B820, last: 0x2CEAF, name: "CJK Unified Ideographs Extension E", class: EastAsian },
    Block { first: 0x2CEB0, last: 0x2EBEF, name: "CJK Unified Ideographs Extension F", class: EastAsian },
    Block { first: 0x2F800, last: 0x2FA1F, name: "CJK Compatibility Ideographs Supplement", class: EastAsian },
    Block { first: 0x30000, last: 0x3134F, name: "CJK Unified Ideographs Extension G", class: EastAsian },
    Block { first: 0xE0000, last: 0xE007F, name: "Tags", class: Normal },
    Block { first: 0xE0100, last: 0xE01EF, name: "Variation Selectors Supplement", class: Combining },
    Block { first: 0xF0000, last: 0xFFFFF, name: "Supplementary Private Use Area-A", class: Normal },
    Block { first: 0x100000, last: 0x10FFFF, name: "Supplementary Private Use Area-B", class: Normal },
];

/// Find the block containing `cp`, if any.
///
/// Binary search over the sorted table; `None` for unassigned gaps.
#[must_use]
pub fn lookup(cp: u32) -> Option<&'static Block> {
    // Index of the first block starting after cp; the candidate is the
    // one before it.
    let idx = BLOCKS.partition_point(|b| b.first <= cp);
    let block = &BLOCKS[idx.checked_sub(1)?];
    (cp <= block.last).then_some(block)
}

/// The block name for `cp`, or the empty string for unassigned gaps.
#[must_use]
pub fn name(cp: u32) -> &'static str {
    lookup(cp).map_or("", |b| b.name)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
