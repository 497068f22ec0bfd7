// SPDX-License-Identifier: MIT
//
// Viewport renderer — blits a window of cached rows to the terminal.
//
// The renderer owns no data: rows come from a [`LineSource`] and bytes
// go out through a `TermDriver`. Per destination row it positions the
// cursor, emits codepoints left to right while they fit, and clears to
// end of line so stale wider content from a previous draw disappears.
// Clipping is pure column arithmetic — a glyph that would cross the
// right edge is dropped, which is why the cache keeps every slot at a
// fixed 3 columns.
//
// The cursor position after a blit is unspecified; callers reposition
// explicitly.

use std::io;

use unigrid_term::cell::TermLine;
use unigrid_term::driver::TermDriver;

/// A position in terminal cells or grid rows, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermPoint {
    pub x: u16,
    pub y: u16,
}

/// A width × height extent in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermSize {
    pub width: u16,
    pub height: u16,
}

/// A row provider. Satisfied by `PlaneCache` or any row-addressable
/// grid; the renderer never assumes a concrete source.
pub trait LineSource {
    /// The row at `row`, or `None` if out of range.
    fn line_at(&self, row: usize) -> Option<&TermLine>;
}

/// Blit `size.height` rows from `source` onto the terminal.
///
/// Source rows start at `src.y` with a left column offset of `src.x`;
/// destination rows start at `(dst.x, dst.y)`. Rows past the end of the
/// source are cleared. Codepoints are emitted until the next one would
/// cross `size.width` columns, then the rest of the terminal line is
/// cleared.
///
/// # Errors
///
/// Propagates driver output failures.
pub fn render_blit(
    driver: &mut dyn TermDriver,
    source: &dyn LineSource,
    src: TermPoint,
    size: TermSize,
    dst: TermPoint,
) -> io::Result<()> {
    for row in 0..size.height {
        driver.cursor_move(dst.x, dst.y + row)?;

        if let Some(line) = source.line_at(usize::from(src.y) + usize::from(row)) {
            blit_line(driver, line, src.x, size.width)?;
        }

        driver.clear_to_eol()?;
    }
    Ok(())
}

/// Emit one line with left-offset skip and right-edge clipping.
fn blit_line(
    driver: &mut dyn TermDriver,
    line: &TermLine,
    skip_cols: u16,
    width: u16,
) -> io::Result<()> {
    let mut skipped: u16 = 0;
    let mut used: u16 = 0;

    for cp in line.codes() {
        let w = u16::from(cp.cols);

        // Consume the left offset first; a glyph straddling the cut is
        // dropped whole.
        if skipped < skip_cols {
            skipped += w.max(1);
            continue;
        }

        if used + w > width {
            break;
        }
        driver.put(cp)?;
        used += w;
    }

    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use unigrid_term::cell::TermCodepoint;

    // ── Recording driver ────────────────────────────────────────────────

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Move(u16, u16),
        Put(char),
        ClearToEol,
    }

    struct Recorder {
        ops: Vec<Op>,
        size: TermSize,
    }

    impl Recorder {
        fn new(width: u16, height: u16) -> Self {
            Self {
                ops: Vec::new(),
                size: TermSize { width, height },
            }
        }

        /// The characters put between the last Move and the next
        /// ClearToEol, per row.
        fn rows(&self) -> Vec<String> {
            let mut rows = Vec::new();
            let mut current = String::new();
            for op in &self.ops {
                match op {
                    Op::Move(..) => current.clear(),
                    Op::Put(ch) => current.push(*ch),
                    Op::ClearToEol => rows.push(std::mem::take(&mut current)),
                }
            }
            rows
        }
    }

    impl TermDriver for Recorder {
        fn clear_screen(&mut self) -> io::Result<()> {
            Ok(())
        }
        fn clear_to_eol(&mut self) -> io::Result<()> {
            self.ops.push(Op::ClearToEol);
            Ok(())
        }
        fn cursor_move(&mut self, x: u16, y: u16) -> io::Result<()> {
            self.ops.push(Op::Move(x, y));
            Ok(())
        }
        fn cursor_visible(&mut self, _visible: bool) -> io::Result<()> {
            Ok(())
        }
        fn standout(&mut self, _on: bool) -> io::Result<()> {
            Ok(())
        }
        fn put(&mut self, cp: &TermCodepoint) -> io::Result<()> {
            self.ops.push(Op::Put(cp.cp));
            Ok(())
        }
        fn put_str(&mut self, s: &str) -> io::Result<()> {
            for ch in s.chars() {
                self.ops.push(Op::Put(ch));
            }
            Ok(())
        }
        fn columns(&self) -> u16 {
            self.size.width
        }
        fn lines(&self) -> u16 {
            self.size.height
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    // ── Line sources ────────────────────────────────────────────────────

    struct VecSource(Vec<TermLine>);

    impl LineSource for VecSource {
        fn line_at(&self, row: usize) -> Option<&TermLine> {
            self.0.get(row)
        }
    }

    fn line(text: &str) -> TermLine {
        let mut l = TermLine::new();
        l.push_str(text, |ch| if ch == '中' { 2 } else { 1 });
        l
    }

    fn source(rows: &[&str]) -> VecSource {
        VecSource(rows.iter().map(|r| line(r)).collect())
    }

    // ── Basic blitting ──────────────────────────────────────────────────

    #[test]
    fn blits_rows_in_order() {
        let src = source(&["alpha", "beta", "gamma"]);
        let mut rec = Recorder::new(80, 24);
        render_blit(
            &mut rec,
            &src,
            TermPoint::default(),
            TermSize { width: 80, height: 3 },
            TermPoint::default(),
        )
        .unwrap();

        assert_eq!(rec.rows(), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn destination_offset_positions_cursor() {
        let src = source(&["one", "two"]);
        let mut rec = Recorder::new(80, 24);
        render_blit(
            &mut rec,
            &src,
            TermPoint::default(),
            TermSize { width: 80, height: 2 },
            TermPoint { x: 3, y: 5 },
        )
        .unwrap();

        assert_eq!(rec.ops[0], Op::Move(3, 5));
        let second_move = rec
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Move(..)))
            .nth(1)
            .unwrap();
        assert_eq!(*second_move, Op::Move(3, 6));
    }

    #[test]
    fn source_row_offset_selects_window() {
        let src = source(&["zero", "one", "two", "three"]);
        let mut rec = Recorder::new(80, 24);
        render_blit(
            &mut rec,
            &src,
            TermPoint { x: 0, y: 2 },
            TermSize { width: 80, height: 2 },
            TermPoint::default(),
        )
        .unwrap();

        assert_eq!(rec.rows(), ["two", "three"]);
    }

    // ── Clipping ────────────────────────────────────────────────────────

    #[test]
    fn clips_at_viewport_width() {
        let src = source(&["abcdefgh"]);
        let mut rec = Recorder::new(5, 24);
        render_blit(
            &mut rec,
            &src,
            TermPoint::default(),
            TermSize { width: 5, height: 1 },
            TermPoint::default(),
        )
        .unwrap();

        assert_eq!(rec.rows(), ["abcde"]);
    }

    #[test]
    fn wide_glyph_never_straddles_right_edge() {
        // "a中" is 3 columns; at width 2 the wide glyph must be dropped.
        let src = source(&["a中b"]);
        let mut rec = Recorder::new(2, 24);
        render_blit(
            &mut rec,
            &src,
            TermPoint::default(),
            TermSize { width: 2, height: 1 },
            TermPoint::default(),
        )
        .unwrap();

        assert_eq!(rec.rows(), ["a"]);
    }

    #[test]
    fn exact_fit_is_emitted() {
        let src = source(&["a中"]);
        let mut rec = Recorder::new(3, 24);
        render_blit(
            &mut rec,
            &src,
            TermPoint::default(),
            TermSize { width: 3, height: 1 },
            TermPoint::default(),
        )
        .unwrap();

        assert_eq!(rec.rows(), ["a中"]);
    }

    #[test]
    fn left_offset_skips_columns() {
        let src = source(&["abcdef"]);
        let mut rec = Recorder::new(80, 24);
        render_blit(
            &mut rec,
            &src,
            TermPoint { x: 2, y: 0 },
            TermSize { width: 80, height: 1 },
            TermPoint::default(),
        )
        .unwrap();

        assert_eq!(rec.rows(), ["cdef"]);
    }

    // ── Rows past the source end ────────────────────────────────────────

    #[test]
    fn missing_rows_are_cleared() {
        let src = source(&["only"]);
        let mut rec = Recorder::new(80, 24);
        render_blit(
            &mut rec,
            &src,
            TermPoint::default(),
            TermSize { width: 80, height: 3 },
            TermPoint::default(),
        )
        .unwrap();

        // Three rows drawn; rows 1 and 2 are empty but still cleared.
        assert_eq!(rec.rows(), ["only", "", ""]);
    }

    #[test]
    fn every_row_ends_with_clear_to_eol() {
        let src = source(&["a", "b"]);
        let mut rec = Recorder::new(80, 24);
        render_blit(
            &mut rec,
            &src,
            TermPoint::default(),
            TermSize { width: 80, height: 2 },
            TermPoint::default(),
        )
        .unwrap();

        let clears = rec
            .ops
            .iter()
            .filter(|op| matches!(op, Op::ClearToEol))
            .count();
        assert_eq!(clears, 2);
    }

    #[test]
    fn zero_height_draws_nothing() {
        let src = source(&["a"]);
        let mut rec = Recorder::new(80, 24);
        render_blit(
            &mut rec,
            &src,
            TermPoint::default(),
            TermSize { width: 80, height: 0 },
            TermPoint::default(),
        )
        .unwrap();

        assert!(rec.ops.is_empty());
    }
}
