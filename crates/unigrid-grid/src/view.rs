// SPDX-License-Identifier: MIT
//
// Unicode view — the key-driven navigation state machine.
//
// One state: {plane, topline, col, row}. One input byte per transition.
// Nothing here can fail: every out-of-range result of a keystroke is
// corrected by clamping, and row overflow at either edge is transferred
// to the scroll position so holding 'j' or 'k' walks the cursor to the
// edge and then scrolls.
//
// Screen layout:
//
//   row 0            header — plane indicator + hex column legend, standout
//   rows 1..=h       body — viewport into the plane cache
//   last row         status — last key, code point under the cursor
//
// The viewport height is the terminal height minus the header and
// status rows. The hardware cursor sits on the slot under the
// navigation cursor: column 5 + col×3, row + 1.

use std::io;

use unigrid_term::driver::{TermDriver, TermProfile};
use unigrid_term::event_loop::{Action, App};
use unigrid_term::terminal::Size;

use crate::plane::{PlaneCache, COLS_PER_ROW, PLANE_COUNT, ROWS_PER_PLANE};
use crate::render::{render_blit, TermPoint, TermSize};

/// Rows reserved outside the body viewport: header + status.
const CHROME_ROWS: i32 = 2;

/// The inspector's navigation state plus its plane cache.
pub struct UnicodeView {
    plane: i32,
    topline: i32,
    col: i32,
    row: i32,
    viewport_height: i32,
    term: Size,
    last_key: Option<u8>,
    profile: TermProfile,
    cache: PlaneCache,
}

impl UnicodeView {
    /// Create the view at plane 0, origin, for a terminal of `size`.
    #[must_use]
    pub fn new(profile: TermProfile, size: Size) -> Self {
        let mut view = Self {
            plane: 0,
            topline: 0,
            col: 0,
            row: 0,
            viewport_height: 1,
            term: size,
            last_key: None,
            profile,
            cache: PlaneCache::new(),
        };
        view.set_size(size);
        view
    }

    /// Adopt a new terminal size and re-clamp the state against it.
    pub fn set_size(&mut self, size: Size) {
        self.term = size;
        self.viewport_height = (i32::from(size.rows) - CHROME_ROWS).max(1);
        self.clamp();
    }

    /// The active plane, `0..17`.
    #[inline]
    #[must_use]
    pub const fn plane(&self) -> i32 {
        self.plane
    }

    /// First visible grid row.
    #[inline]
    #[must_use]
    pub const fn topline(&self) -> i32 {
        self.topline
    }

    /// Cursor column within the row, `0..16`.
    #[inline]
    #[must_use]
    pub const fn col(&self) -> i32 {
        self.col
    }

    /// Cursor row within the viewport.
    #[inline]
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Body height in rows.
    #[inline]
    #[must_use]
    pub const fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    /// The code point under the cursor.
    #[must_use]
    pub fn cursor_codepoint(&self) -> u32 {
        #[allow(clippy::cast_sign_loss)] // Clamped non-negative.
        {
            ((self.plane as u32) << 16)
                | (((self.topline + self.row) as u32) << 4)
                | (self.col as u32)
        }
    }

    /// Terminal cell the hardware cursor should occupy.
    #[must_use]
    pub fn cursor_cell(&self) -> (u16, u16) {
        #[allow(clippy::cast_sign_loss)] // Clamped non-negative.
        {
            (5 + (self.col as u16) * 3, (self.row as u16) + 1)
        }
    }

    /// Apply one key's effect, then restore every invariant.
    fn apply_key(&mut self, key: u8) {
        let h = self.viewport_height;
        match key {
            b'h' => self.col -= 1,
            b'l' => self.col += 1,
            b'j' => self.row += 1,
            b'k' => self.row -= 1,
            b'J' => self.topline += 1,
            b'K' => self.topline -= 1,
            b' ' => self.topline += h,
            b'b' => self.topline -= h,
            b'g' => self.topline = 0,
            b'G' => self.topline = ROWS_PER_PLANE as i32 - h,
            b',' => self.plane -= 1,
            b'.' => self.plane += 1,
            _ => {}
        }
        self.clamp();
    }

    /// Restore all invariants after a key effect or resize.
    ///
    /// Order matters: row deficit/excess transfers to topline first
    /// (scroll, don't pin the cursor), then each field is clamped to
    /// its range, then a final correction keeps `topline + row` inside
    /// the plane even after page jumps or shrinking resizes.
    fn clamp(&mut self) {
        let h = self.viewport_height;
        let rows = ROWS_PER_PLANE as i32;

        if self.row < 0 {
            self.topline += self.row;
            self.row = 0;
        }
        if self.row > h - 1 {
            self.topline += self.row - (h - 1);
            self.row = h - 1;
        }

        self.plane = self.plane.clamp(0, i32::from(PLANE_COUNT) - 1);
        self.col = self.col.clamp(0, COLS_PER_ROW as i32 - 1);
        self.topline = self.topline.clamp(0, (rows - h).max(0));
        self.row = self.row.clamp(0, h - 1);

        if self.topline + self.row > rows - 1 {
            self.row = rows - 1 - self.topline;
        }

        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        self.cache.set_plane(self.plane as u8);
    }

    // ── Drawing ─────────────────────────────────────────────────────

    /// Header text: plane indicator plus the hex column legend, one
    /// 3-column group per slot so digits sit over their glyphs.
    fn header_text(&self) -> String {
        let mut s = format!(" P{:02}│", self.plane);
        for i in 0..COLS_PER_ROW {
            s.push_str(&format!(" {i:X}│"));
        }
        s
    }

    /// Status text: last key and the code point under the cursor.
    fn status_text(&self) -> String {
        let key = self.last_key.map_or_else(String::new, |k| {
            let shown = match k {
                b' ' => "SP".to_string(),
                0x21..=0x7E => char::from(k).to_string(),
                _ => format!("0x{k:02X}"),
            };
            format!("key: {shown}  ")
        });
        let cp = self.cursor_codepoint();
        format!("{key}U+{cp:04X}  TERM={}", self.profile.name)
    }

    fn draw_header(&self, driver: &mut dyn TermDriver) -> io::Result<()> {
        driver.cursor_move(0, 0)?;
        driver.standout(true)?;
        driver.put_str(&clip(&self.header_text(), driver.columns()))?;
        driver.standout(false)?;
        driver.clear_to_eol()
    }

    fn draw_status(&self, driver: &mut dyn TermDriver) -> io::Result<()> {
        driver.cursor_move(0, self.term.rows.saturating_sub(1))?;
        driver.put_str(&clip(&self.status_text(), driver.columns()))?;
        driver.clear_to_eol()
    }

    fn draw_body(&self, driver: &mut dyn TermDriver) -> io::Result<()> {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let (topline, height) = (self.topline as u16, self.viewport_height as u16);
        let width = driver.columns();
        render_blit(
            driver,
            &self.cache,
            TermPoint { x: 0, y: topline },
            TermSize { width, height },
            TermPoint { x: 0, y: 1 },
        )
    }
}

/// Truncate single-width text to at most `cols` columns.
fn clip(s: &str, cols: u16) -> String {
    s.chars().take(usize::from(cols)).collect()
}

impl App for UnicodeView {
    fn on_byte(&mut self, byte: u8) -> Action {
        match byte {
            b'q' | 0x1B => Action::Quit,
            b'h' | b'l' | b'j' | b'k' | b'J' | b'K' | b' ' | b'b' | b'g' | b'G' | b',' | b'.' => {
                self.last_key = Some(byte);
                self.apply_key(byte);
                Action::Redraw
            }
            _ => Action::Continue,
        }
    }

    fn on_resize(&mut self, size: Size) {
        self.set_size(size);
    }

    fn draw(&mut self, driver: &mut dyn TermDriver) -> io::Result<()> {
        driver.cursor_visible(false)?;
        self.draw_header(driver)?;
        self.draw_body(driver)?;
        self.draw_status(driver)?;

        let (x, y) = self.cursor_cell();
        driver.cursor_move(x, y)?;
        driver.cursor_visible(true)?;
        driver.flush()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
