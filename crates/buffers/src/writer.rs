//! Append-only byte writer with a flush watermark.

/// An auto-growing byte buffer writer.
///
/// Output accumulates until [`Writer::flush`] hands it over and the buffer
/// starts collecting the next document.
///
/// # Example
///
/// ```
/// use map_pack_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(b'[');
/// writer.ascii("42");
/// writer.u8(b']');
/// assert_eq!(writer.flush(), b"[42]");
/// ```
pub struct Writer {
    buf: Vec<u8>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    pub fn new() -> Self {
        Self::with_capacity(4 * 1024)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn u8(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes a byte slice verbatim.
    #[inline]
    pub fn buf(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes string text verbatim (digits, literals, pre-escaped content).
    #[inline]
    pub fn ascii(&mut self, text: &str) {
        self.buf.extend_from_slice(text.as_bytes());
    }

    /// Discards everything written since the last flush.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Returns the accumulated bytes and leaves the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}
