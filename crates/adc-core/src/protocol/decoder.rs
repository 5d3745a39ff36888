//! Streaming line reassembly.
//!
//! TCP is a *stream* protocol: a single `read()` call may return half a line,
//! or several lines glued together.  [`LineDecoder`] buffers incoming bytes
//! and hands back complete `\n`-terminated lines one at a time, so callers
//! never have to care where the chunk boundaries fell.
//!
//! # Bounded buffering
//!
//! A well-formed line is at most a couple of dozen bytes, so the decoder
//! never holds more than [`MAX_LINE_LEN`] bytes of an unterminated line.  A
//! peer that keeps sending without a newline gets one
//! [`FrameError::LineTooLong`] and the rest of that line is discarded up to
//! and including its eventual newline.  Each byte is scanned for `\n` once.

use tracing::trace;

use crate::protocol::line::FrameError;

/// Longest line, newline included, the decoder will hold or return.
pub const MAX_LINE_LEN: usize = 4096;

/// Accumulates byte chunks and yields complete lines.
///
/// # Examples
///
/// ```rust
/// use adc_core::LineDecoder;
///
/// let mut decoder = LineDecoder::new();
/// decoder.push(b"ADC: 1\nADC: ");
/// assert_eq!(decoder.next_line(), Some(Ok(b"ADC: 1\n".to_vec())));
/// assert_eq!(decoder.next_line(), None);
///
/// decoder.push(b"2\n");
/// assert_eq!(decoder.next_line(), Some(Ok(b"ADC: 2\n".to_vec())));
/// ```
#[derive(Debug)]
pub struct LineDecoder {
    buf: Vec<u8>,
    /// Prefix of `buf` already known to hold no newline.
    scanned: usize,
    max_line_len: usize,
    /// Set after an overflow until the over-long line's newline arrives.
    discarding: bool,
}

impl Default for LineDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineDecoder {
    /// Creates an empty decoder capped at [`MAX_LINE_LEN`].
    pub fn new() -> Self {
        Self::with_max_line_len(MAX_LINE_LEN)
    }

    /// Creates an empty decoder with a custom line cap (minimum 1 byte).
    pub fn with_max_line_len(max_line_len: usize) -> Self {
        Self {
            buf: Vec::with_capacity(1024),
            scanned: 0,
            max_line_len: max_line_len.max(1),
            discarding: false,
        }
    }

    /// Appends a chunk of received bytes.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Removes and returns the next complete line, including its `\n`.
    ///
    /// Returns `None` when no complete line is buffered yet, and
    /// `Some(Err(FrameError::LineTooLong { .. }))` once per line that
    /// exceeds the cap.
    pub fn next_line(&mut self) -> Option<Result<Vec<u8>, FrameError>> {
        loop {
            let Some(pos) = self.buf[self.scanned..].iter().position(|&b| b == b'\n') else {
                return self.hold_partial();
            };

            let end = self.scanned + pos + 1;
            self.scanned = 0;
            let line: Vec<u8> = self.buf.drain(..end).collect();

            if self.discarding {
                self.discarding = false;
                trace!("discarded {} trailing bytes of an over-long line", line.len());
                continue;
            }
            if line.len() > self.max_line_len {
                return Some(Err(FrameError::LineTooLong {
                    limit: self.max_line_len,
                    dropped: line.len(),
                }));
            }

            trace!("decoded line of {} bytes", line.len());
            return Some(Ok(line));
        }
    }

    /// Called when the buffer holds no newline.
    fn hold_partial(&mut self) -> Option<Result<Vec<u8>, FrameError>> {
        if self.discarding {
            self.buf.clear();
            self.scanned = 0;
            return None;
        }
        if self.buf.len() > self.max_line_len {
            let dropped = self.buf.len();
            self.buf.clear();
            self.scanned = 0;
            self.discarding = true;
            return Some(Err(FrameError::LineTooLong {
                limit: self.max_line_len,
                dropped,
            }));
        }
        self.scanned = self.buf.len();
        None
    }

    /// Number of bytes buffered but not yet returned as a line.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// Consumes the decoder and returns the unterminated tail, if any.
    ///
    /// Called once the peer has closed the stream; a non-empty tail means
    /// the final line was cut short.  The remainder of a line already
    /// reported as too long is not returned.
    pub fn finish(self) -> Option<Vec<u8>> {
        if self.buf.is_empty() || self.discarding {
            None
        } else {
            Some(self.buf)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
