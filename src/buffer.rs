//! Append-only packet buffer.
//!
//! Uses `bytes::BytesMut` as backing storage. The only mutating operation is
//! [`PacketBuffer::reserve`], which appends `n` zeroed bytes and hands back a
//! mutable view of them for the caller to fill.
//!
//! # Example
//!
//! ```
//! use sew::buffer::PacketBuffer;
//!
//! let mut buffer = PacketBuffer::new();
//! buffer.reserve(2).copy_from_slice(&[0x81, 0x00]);
//! buffer.reserve(2);
//!
//! assert_eq!(buffer.as_bytes(), &[0x81, 0x00, 0x00, 0x00]);
//! ```

use bytes::{Bytes, BytesMut};

/// Largest length the buffer may reach.
pub const MAX_LEN: usize = isize::MAX as usize;

/// Default initial capacity; enough for a full Ethernet frame.
const DEFAULT_CAPACITY: usize = 1536;

/// Growable byte buffer that only ever gets longer.
///
/// A slice returned by `reserve` borrows the buffer mutably, so it cannot
/// outlive the next growth.
#[derive(Debug, Clone)]
pub struct PacketBuffer {
    buffer: BytesMut,
}

impl PacketBuffer {
    /// Create an empty buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty buffer with custom capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    /// Append `n` zero bytes and return them for writing.
    ///
    /// All previously appended bytes are preserved. `reserve(0)` is a no-op
    /// returning an empty slice.
    ///
    /// # Panics
    ///
    /// Panics if the new length would exceed [`MAX_LEN`]. Aborts the process
    /// if the allocation cannot be satisfied.
    pub fn reserve(&mut self, n: usize) -> &mut [u8] {
        let start = self.buffer.len();
        if n > 0 {
            let end = start
                .checked_add(n)
                .filter(|&end| end <= MAX_LEN)
                .unwrap_or_else(|| panic!("packet buffer length overflow: {start} + {n}"));
            tracing::trace!(from = start, grow = n, "growing packet buffer");
            self.buffer.resize(end, 0);
        }
        &mut self.buffer[start..]
    }

    /// Append a byte slice verbatim.
    pub fn extend(&mut self, data: &[u8]) {
        self.reserve(data.len()).copy_from_slice(data);
    }

    /// Get the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// View the composed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the buffer, returning its contents (zero-copy freeze).
    pub fn freeze(self) -> Bytes {
        self.buffer.freeze()
    }
}

impl Default for PacketBuffer {
    fn default() -> Self {
        Self::new()
    }
}
