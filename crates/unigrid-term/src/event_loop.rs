// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Event loop — the heartbeat of the inspector.
//
// Stdin bytes flow in from the background reader, the application
// handles them one at a time, and the loop redraws through the driver
// whenever something changed. One loop. One heartbeat.
//
// # The Hybrid Model
//
// The loop blocks on the stdin channel with a 50ms timeout. This gives
// two behaviors in one:
//
//   1. **Instant response**: When the user presses a key, the byte
//      arrives on the channel immediately. No polling latency.
//
//   2. **Zero CPU idle**: When nothing happens, `recv_timeout` blocks
//      the thread and the OS schedules us out. The timeout only exists
//      so the resize flag gets checked while idle.
//
// # SIGWINCH Handling
//
// Terminal resize is detected via a SIGWINCH handler that sets an
// `AtomicBool`. The loop checks this flag each iteration and triggers
// a full redraw with the new dimensions. Maximum latency from resize
// to redraw: one loop iteration.

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crate::driver::{AnsiDriver, TermDriver};
use crate::reader::StdinReader;
use crate::terminal::{Size, Terminal};

// ─── SIGWINCH ────────────────────────────────────────────────────────────────

/// Global flag set by the SIGWINCH handler. Checked each loop iteration.
static SIGWINCH_RECEIVED: AtomicBool = AtomicBool::new(false);

/// Install a signal handler for SIGWINCH (terminal resize).
///
/// The handler simply sets the [`SIGWINCH_RECEIVED`] flag. This is
/// async-signal-safe: writing to an atomic is one of the few operations
/// permitted inside signal handlers.
#[cfg(unix)]
fn install_sigwinch_handler() {
    unsafe {
        let mut sa: libc::sigaction = std::mem::zeroed();
        sa.sa_sigaction = sigwinch_handler as *const () as usize;
        sa.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&raw mut sa.sa_mask);
        libc::sigaction(libc::SIGWINCH, &raw const sa, std::ptr::null_mut());
    }
}

#[cfg(unix)]
extern "C" fn sigwinch_handler(_sig: libc::c_int) {
    SIGWINCH_RECEIVED.store(true, Ordering::Relaxed);
}

#[cfg(not(unix))]
fn install_sigwinch_handler() {
    // No-op on non-unix platforms.
}

// ─── App Trait ───────────────────────────────────────────────────────────────

/// What the application tells the event loop to do after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing visible changed; skip the redraw.
    Continue,
    /// State changed; redraw the screen.
    Redraw,
    /// Exit the event loop cleanly.
    Quit,
}

/// Application interface for the event loop.
///
/// The loop calls [`on_byte`](App::on_byte) for each input byte,
/// [`on_resize`](App::on_resize) when the terminal size changes, and
/// [`draw`](App::draw) whenever a redraw is due. The first frame is
/// always drawn.
pub trait App {
    /// Handle one raw input byte.
    ///
    /// Return [`Action::Redraw`] if the screen needs repainting,
    /// [`Action::Quit`] to exit the event loop.
    fn on_byte(&mut self, byte: u8) -> Action;

    /// Handle terminal resize. A full redraw follows automatically.
    fn on_resize(&mut self, _size: Size) {}

    /// Draw the current state through the driver.
    ///
    /// # Errors
    ///
    /// Propagates terminal output failures.
    fn draw(&mut self, driver: &mut dyn TermDriver) -> io::Result<()>;
}

// ─── EventLoop ───────────────────────────────────────────────────────────────

/// Timeout for the channel `recv_timeout` call. Only bounds the latency
/// of resize detection while idle; input bypasses it entirely.
const IDLE_TIMEOUT: Duration = Duration::from_millis(50);

/// The terminal event loop.
///
/// Owns the terminal, driver, and stdin reader. Call [`run`](Self::run)
/// to enter the loop — it returns when the application signals
/// [`Action::Quit`], restoring the terminal on the way out.
pub struct EventLoop {
    terminal: Terminal,
    driver: AnsiDriver<Stdout>,
}

impl EventLoop {
    /// Create a new event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn new() -> io::Result<Self> {
        let terminal = Terminal::new()?;
        let driver = AnsiDriver::new(io::stdout(), terminal.size());
        Ok(Self { terminal, driver })
    }

    /// The current terminal size.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        self.terminal.size()
    }

    /// Run the event loop until the application returns [`Action::Quit`].
    ///
    /// This method:
    /// 1. Enters raw mode with the cursor hidden
    /// 2. Installs the SIGWINCH handler
    /// 3. Spawns the background stdin reader
    /// 4. Draws the first frame, then loops on input
    /// 5. Restores the terminal on exit (even on error)
    ///
    /// # Errors
    ///
    /// Returns an error if terminal enter/leave or drawing fails.
    pub fn run(&mut self, app: &mut impl App) -> io::Result<()> {
        self.terminal.enter()?;
        install_sigwinch_handler();

        let (mut reader, rx) = StdinReader::spawn();

        let result = self.run_inner(app, &rx);

        // Always clean up, even if the loop errored.
        reader.stop();
        self.terminal.leave()?;

        result
    }

    /// The inner loop, separated so cleanup runs regardless of outcome.
    fn run_inner(&mut self, app: &mut impl App, rx: &Receiver<u8>) -> io::Result<()> {
        let mut dirty = true; // First frame always renders.

        loop {
            if dirty {
                app.draw(&mut self.driver)?;
                self.driver.flush()?;
                dirty = false;
            }

            // ── Receive one input byte ───────────────────────────
            match rx.recv_timeout(IDLE_TIMEOUT) {
                Ok(byte) => match app.on_byte(byte) {
                    Action::Quit => return Ok(()),
                    Action::Redraw => dirty = true,
                    Action::Continue => {}
                },
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                    // Reader thread died (stdin EOF) — exit gracefully.
                    return Ok(());
                }
            }

            // ── Check for terminal resize ────────────────────────
            if SIGWINCH_RECEIVED.swap(false, Ordering::Relaxed) {
                let new_size = self.terminal.refresh_size();
                self.driver.set_size(new_size);
                app.on_resize(new_size);
                dirty = true;
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Action ──────────────────────────────────────────────────

    #[test]
    fn action_equality() {
        assert_eq!(Action::Continue, Action::Continue);
        assert_eq!(Action::Quit, Action::Quit);
        assert_ne!(Action::Continue, Action::Redraw);
        assert_ne!(Action::Redraw, Action::Quit);
    }

    #[test]
    fn action_debug() {
        assert_eq!(format!("{:?}", Action::Redraw), "Redraw");
    }

    // ── EventLoop construction ─────────────────────────────────

    #[test]
    fn event_loop_new_succeeds() {
        let event_loop = EventLoop::new().unwrap();
        let size = event_loop.size();
        assert!(size.cols > 0);
        assert!(size.rows > 0);
    }

    // ── SIGWINCH flag ──────────────────────────────────────────

    #[test]
    fn sigwinch_flag_swap() {
        SIGWINCH_RECEIVED.store(true, Ordering::Relaxed);
        let was = SIGWINCH_RECEIVED.swap(false, Ordering::Relaxed);
        assert!(was);
        assert!(!SIGWINCH_RECEIVED.load(Ordering::Relaxed));
    }

    // ── App trait defaults ─────────────────────────────────────

    struct MinimalApp {
        bytes: Vec<u8>,
    }

    impl App for MinimalApp {
        fn on_byte(&mut self, byte: u8) -> Action {
            self.bytes.push(byte);
            if byte == b'q' {
                Action::Quit
            } else {
                Action::Redraw
            }
        }

        fn draw(&mut self, _driver: &mut dyn TermDriver) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn app_default_on_resize_is_noop() {
        let mut app = MinimalApp { bytes: Vec::new() };
        app.on_resize(Size { cols: 100, rows: 50 }); // Must not panic.
    }

    #[test]
    fn app_receives_bytes_in_order() {
        let mut app = MinimalApp { bytes: Vec::new() };
        assert_eq!(app.on_byte(b'j'), Action::Redraw);
        assert_eq!(app.on_byte(b'q'), Action::Quit);
        assert_eq!(app.bytes, b"jq");
    }
}
