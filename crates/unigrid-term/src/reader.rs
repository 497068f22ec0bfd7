// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Background stdin reader — collects raw bytes from the terminal.
//
// A dedicated thread reads stdin in blocking mode and sends bytes
// through a standard channel. The main thread receives them and
// dispatches one byte at a time — the inspector's keymap is entirely
// single-byte, so no escape sequence parsing is needed.
//
// Why a dedicated thread? Because `read()` on stdin blocks, and the
// event loop must stay responsive to SIGWINCH resize redraws. A
// background reader lets the main loop use `recv_timeout()` on the
// channel and check the resize flag between keys.
//
// Shutdown: the reader thread uses `poll()` with a short timeout on
// stdin's file descriptor, checking an `AtomicBool` stop flag between
// polls. This lets us shut down cleanly without leaving the thread
// stuck in a blocking `read()`.

#[cfg(unix)]
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Read buffer size. Keystrokes arrive one byte at a time in practice,
/// but a paste can deliver many at once; 4 KB covers both.
const READ_BUF_SIZE: usize = 4096;

/// How often the reader thread checks the stop flag (milliseconds).
///
/// The thread polls stdin with this timeout, then checks if it should
/// stop. 50ms means shutdown latency is at most 50ms — imperceptible.
const POLL_TIMEOUT_MS: i32 = 50;

/// Background stdin reader thread.
///
/// Spawns a thread that reads raw bytes from stdin and sends them
/// through a channel, one byte per message. The thread runs until
/// [`stop`](Self::stop) is called (or the `StdinReader` is dropped).
pub struct StdinReader {
    /// The reader thread handle. `None` after `stop()` joins it.
    handle: Option<JoinHandle<()>>,
    /// Shared flag to signal the thread to exit.
    stop: Arc<AtomicBool>,
}

impl StdinReader {
    /// Spawn the background reader thread.
    ///
    /// Returns the reader handle and a channel receiver for input bytes.
    /// The channel closes when the reader is stopped or stdin hits EOF.
    ///
    /// # Panics
    ///
    /// Panics if the OS cannot spawn a new thread (extremely rare).
    #[must_use]
    pub fn spawn() -> (Self, Receiver<u8>) {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("stdin-reader".into())
            .spawn(move || {
                Self::reader_loop(&tx, &stop_flag);
            })
            .expect("failed to spawn stdin reader thread");

        (
            Self {
                handle: Some(handle),
                stop,
            },
            rx,
        )
    }

    /// Signal the reader thread to stop and wait for it to exit.
    ///
    /// Idempotent: calling `stop()` after the thread has already
    /// exited is a no-op.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// The reader thread's main loop.
    ///
    /// Polls stdin with a short timeout, reads available bytes, and
    /// sends them through the channel one at a time. Exits when the
    /// stop flag is set, stdin reaches EOF, or the channel is
    /// disconnected.
    #[cfg(unix)]
    fn reader_loop(tx: &mpsc::Sender<u8>, stop: &AtomicBool) {
        use std::os::unix::io::AsRawFd;

        let stdin_fd = io::stdin().as_raw_fd();
        let mut buf = [0u8; READ_BUF_SIZE];

        loop {
            if stop.load(Ordering::Relaxed) {
                break;
            }

            // Poll stdin for readability with a timeout.
            let ready = unsafe {
                let mut pfd = libc::pollfd {
                    fd: stdin_fd,
                    events: libc::POLLIN,
                    revents: 0,
                };
                libc::poll(&raw mut pfd, 1, POLL_TIMEOUT_MS)
            };

            // Timeout or error: loop back to check stop flag.
            if ready <= 0 {
                continue;
            }

            // Data available — read it.
            let n = unsafe { libc::read(stdin_fd, buf.as_mut_ptr().cast(), buf.len()) };

            if n <= 0 {
                // EOF or error — exit the thread.
                break;
            }

            #[allow(clippy::cast_sign_loss)] // n > 0 guaranteed above.
            for &byte in &buf[..n as usize] {
                if tx.send(byte).is_err() {
                    // Receiver dropped — nobody's listening.
                    return;
                }
            }
        }
    }

    /// Non-unix fallback using blocking reads with no poll.
    ///
    /// Less graceful shutdown (thread blocks in read), but functional.
    #[cfg(not(unix))]
    fn reader_loop(tx: &mpsc::Sender<u8>, stop: &AtomicBool) {
        use std::io::Read;

        let stdin = std::io::stdin();
        let mut buf = [0u8; READ_BUF_SIZE];

        loop {
            if stop.load(Ordering::Relaxed) {
                break;
            }

            match stdin.lock().read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    for &byte in &buf[..n] {
                        if tx.send(byte).is_err() {
                            return;
                        }
                    }
                }
            }
        }
    }
}

impl Drop for StdinReader {
    fn drop(&mut self) {
        self.stop();
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn read_buf_size_reasonable() {
        assert!(READ_BUF_SIZE >= 1024);
        assert!(READ_BUF_SIZE <= 65536);
    }

    #[test]
    fn poll_timeout_reasonable() {
        assert!(POLL_TIMEOUT_MS >= 10);
        assert!(POLL_TIMEOUT_MS <= 500);
    }

    #[test]
    fn spawn_and_stop() {
        // Spawn reader — it won't read anything useful in tests (stdin
        // is not a terminal), but it must not panic or hang.
        let (mut reader, _rx) = StdinReader::spawn();
        reader.stop();
    }

    #[test]
    fn stop_is_idempotent() {
        let (mut reader, _rx) = StdinReader::spawn();
        reader.stop();
        reader.stop(); // Second call must not panic.
    }

    #[test]
    fn drop_stops_reader() {
        let (reader, _rx) = StdinReader::spawn();
        drop(reader); // Must not hang.
    }

    #[test]
    fn channel_closes_on_stop() {
        let (mut reader, rx) = StdinReader::spawn();
        reader.stop();

        // After stop, the channel should be closed — recv should fail.
        // Drain any bytes that arrived before stop.
        while rx.try_recv().is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }
}
