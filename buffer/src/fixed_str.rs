//! Fixed-length string element for line-oriented queues.

use core::fmt;
use core::str;

use crate::ring_buffer::RingBuffer;

/// A fixed-length, NUL-terminated string value.
///
/// `FixedStr<S>` wraps an inline `[u8; S]` array holding at most `S - 1`
/// payload bytes followed by a NUL terminator, so it can be used as the
/// element type of a [`RingBuffer`] without any allocation. Input longer
/// than `S - 1` bytes is truncated silently, on a char boundary so the
/// stored payload is always valid UTF-8.
///
/// It has no identity beyond its bytes; equality and copy are by value.
///
/// # Example
///
/// ```
/// use embq_buffer::FixedStr;
///
/// let line = FixedStr::<8>::from_str_lossy("overflowing line");
/// assert_eq!(line.as_str(), "overflo");
/// assert_eq!(line.len(), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FixedStr<const S: usize> {
    bytes: [u8; S],
}

impl<const S: usize> FixedStr<S> {
    /// Creates an empty string.
    pub const fn new() -> Self {
        const {
            assert!(S > 0, "string capacity must be greater than 0");
        }
        Self { bytes: [0; S] }
    }

    /// Creates a string from `text`, truncating to at most `S - 1` bytes.
    ///
    /// Truncation is silent and lands on the largest char boundary that
    /// fits, so multi-byte characters are dropped whole. The terminator is
    /// always present.
    pub fn from_str_lossy(text: &str) -> Self {
        const {
            assert!(S > 0, "string capacity must be greater than 0");
        }
        let mut bytes = [0u8; S];

        let mut len = text.len().min(S - 1);
        while len > 0 && !text.is_char_boundary(len) {
            len -= 1;
        }
        bytes[..len].copy_from_slice(&text.as_bytes()[..len]);

        Self { bytes }
    }

    /// Returns the payload length in bytes, excluding the terminator.
    pub fn len(&self) -> usize {
        self.bytes.iter().position(|&b| b == 0).unwrap_or(S - 1)
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes[0] == 0
    }

    /// Returns the payload as a string slice.
    pub fn as_str(&self) -> &str {
        str::from_utf8(&self.bytes[..self.len()]).unwrap_or("")
    }

    /// Returns the payload bytes, excluding the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Copies the payload into `out` and NUL-terminates it, truncating
    /// again to `out.len() - 1` bytes when `out` is smaller than the
    /// payload. Returns the number of payload bytes copied.
    ///
    /// An empty `out` is left untouched and 0 is returned.
    pub fn copy_to(&self, out: &mut [u8]) -> usize {
        if out.is_empty() {
            return 0;
        }

        let n = self.len().min(out.len() - 1);
        out[..n].copy_from_slice(&self.bytes[..n]);
        out[n] = 0;

        n
    }
}

impl<const S: usize> Default for FixedStr<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const S: usize> fmt::Display for FixedStr<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const S: usize> fmt::Debug for FixedStr<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedStr").field(&self.as_str()).finish()
    }
}

/// String helpers for line queues.
impl<const S: usize, const N: usize> RingBuffer<FixedStr<S>, N> {
    /// Builds a [`FixedStr`] from `text` (truncating to `S - 1` bytes) and
    /// pushes it with the overwrite policy.
    ///
    /// # Example
    ///
    /// ```
    /// use embq_buffer::{FixedStr, RingBuffer};
    ///
    /// let mut lines = RingBuffer::<FixedStr<16>, 4>::new();
    /// lines.push_str("boot ok");
    ///
    /// let mut out = [0u8; 16];
    /// assert!(lines.pull_str(&mut out));
    /// assert_eq!(&out[..7], b"boot ok");
    /// assert_eq!(out[7], 0);
    /// ```
    pub fn push_str(&mut self, text: &str) {
        self.push(FixedStr::from_str_lossy(text));
    }

    /// Pulls the oldest line into `out`, truncating to `out.len() - 1`
    /// bytes and NUL-terminating.
    ///
    /// Returns `false` without dequeuing anything when the queue is empty
    /// or `out` has no room for the terminator; `out` is left untouched in
    /// both cases.
    pub fn pull_str(&mut self, out: &mut [u8]) -> bool {
        if out.is_empty() {
            return false;
        }

        match self.pull() {
            Ok(line) => {
                line.copy_to(out);
                true
            }
            Err(_) => false,
        }
    }
}
