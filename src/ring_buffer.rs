use crate::config::BufferConfig;
use crate::error::Error;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a write does once the buffer has no free space left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FullPolicy {
    /// Bytes that do not fit are refused; the caller sees a short or failed write.
    #[default]
    RejectWrite,
    /// Oldest unread bytes are discarded to make room. Not implemented.
    OverwriteOldest,
}

impl fmt::Display for FullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FullPolicy::RejectWrite => write!(f, "reject-write"),
            FullPolicy::OverwriteOldest => write!(f, "overwrite-oldest"),
        }
    }
}

/// Fixed-capacity circular buffer for bytes.
///
/// Data is written at the producer offset and read from the consumer offset,
/// both wrapping at the end of storage. `len` is the only thing that tells a
/// full buffer apart from an empty one, since in both cases the two offsets
/// are equal.
///
/// Transfers never block and may be short: `write` and `read` move as many
/// bytes as fit and report the count, or return `None` when nothing moved.
pub struct RingBuffer {
    buffer: Box<[u8]>,
    producer: usize,
    consumer: usize,
    len: usize,
    policy: FullPolicy,
}

impl RingBuffer {
    /// Creates an empty buffer that rejects writes once full.
    ///
    /// # Panics
    /// Panics if `capacity == 0`.
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, FullPolicy::RejectWrite)
    }

    /// Creates an empty buffer with an explicit full-buffer policy.
    ///
    /// # Panics
    /// Panics if `capacity == 0` or if `policy` is [`FullPolicy::OverwriteOldest`],
    /// which is not implemented.
    pub fn with_policy(capacity: usize, policy: FullPolicy) -> Self {
        assert!(capacity > 0, "RingBuffer capacity must be > 0");
        assert!(
            policy == FullPolicy::RejectWrite,
            "RingBuffer policy '{}' is not implemented",
            policy
        );
        debug!("Creating ring buffer with capacity {} bytes, policy {}", capacity, policy);

        Self {
            buffer: vec![0; capacity].into_boxed_slice(),
            producer: 0,
            consumer: 0,
            len: 0,
            policy,
        }
    }

    /// Builds a buffer from a validated configuration.
    ///
    /// Unlike [`RingBuffer::with_policy`], bad values are reported as an
    /// [`Error`] since they come from runtime data.
    pub fn from_config(cfg: &BufferConfig) -> Result<Self, Error> {
        cfg.validate()?;
        Ok(Self::with_policy(cfg.capacity, cfg.policy))
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn policy(&self) -> FullPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn available_space(&self) -> usize {
        self.capacity() - self.len
    }

    /// Copies as much of `src` as fits into the buffer.
    ///
    /// Returns the number of bytes written, which may be less than
    /// `src.len()`. Returns `None` without touching the buffer if it is full
    /// or `src` is empty.
    pub fn write(&mut self, src: &[u8]) -> Option<usize> {
        let count = src.len().min(self.available_space());
        if count == 0 {
            trace!(
                "Write of {} bytes rejected, {}/{} bytes in use",
                src.len(),
                self.len,
                self.capacity()
            );
            return None;
        }

        let start = self.producer;
        let (first, second) = self.split(start, count);
        self.buffer[start..start + first].copy_from_slice(&src[..first]);
        // Wrapped remainder goes to the head of storage
        self.buffer[..second].copy_from_slice(&src[first..count]);

        self.producer = self.wrap_add(start, count);
        self.len += count;
        trace!("Wrote {} of {} bytes, {} now buffered", count, src.len(), self.len);

        Some(count)
    }

    /// Moves up to `dst.len()` of the oldest bytes into `dst`.
    ///
    /// Returns the number of bytes read, or `None` without touching the
    /// buffer if it is empty or `dst` is empty.
    pub fn read(&mut self, dst: &mut [u8]) -> Option<usize> {
        let Some(count) = self.peek(dst) else {
            trace!("Read of {} bytes rejected, {} bytes buffered", dst.len(), self.len);
            return None;
        };

        self.consume(count);
        trace!("Read {} of {} bytes, {} left", count, dst.len(), self.len);

        Some(count)
    }

    /// Same as [`RingBuffer::read`] but leaves the bytes in the buffer.
    pub fn peek(&self, dst: &mut [u8]) -> Option<usize> {
        let count = dst.len().min(self.len);
        if count == 0 {
            return None;
        }

        let start = self.consumer;
        let (first, second) = self.split(start, count);
        dst[..first].copy_from_slice(&self.buffer[start..start + first]);
        dst[first..count].copy_from_slice(&self.buffer[..second]);

        Some(count)
    }

    /// Drops up to `count` unread bytes without copying them out.
    pub fn skip(&mut self, count: usize) -> usize {
        let count = count.min(self.len);
        if count > 0 {
            self.consume(count);
            trace!("Skipped {} bytes, {} left", count, self.len);
        }
        count
    }

    /// Returns the unread bytes in order as two slices.
    ///
    /// The second slice is empty unless the occupied region wraps past the
    /// end of storage.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let start = self.consumer;
        let (first, second) = self.split(start, self.len);
        (&self.buffer[start..start + first], &self.buffer[..second])
    }

    /// Read up to `count` bytes from the buffer into a new `Vec`
    pub fn read_vec(&mut self, count: usize) -> Vec<u8> {
        let mut result = vec![0; count.min(self.len)];
        let read = self.read(&mut result).unwrap_or(0);
        result.truncate(read);
        result
    }

    /// Add as many bytes as fit, returning how many were added
    pub fn extend(&mut self, data: &[u8]) -> usize {
        self.write(data).unwrap_or(0)
    }

    /// Forgets all buffered bytes. Storage is not zeroed.
    pub fn clear(&mut self) {
        debug!("Clearing ring buffer, dropping {} bytes", self.len);
        self.producer = 0;
        self.consumer = 0;
        self.len = 0;
    }

    fn consume(&mut self, count: usize) {
        debug_assert!(count <= self.len);
        self.consumer = self.wrap_add(self.consumer, count);
        self.len -= count;
    }

    /// Advances `index` by `count` slots, wrapping at the end of storage.
    fn wrap_add(&self, index: usize, count: usize) -> usize {
        debug_assert!(index < self.capacity() && count <= self.capacity());
        let next = index + count;
        if next >= self.capacity() {
            next - self.capacity()
        } else {
            next
        }
    }

    /// Splits a run of `count` bytes starting at `start` into the part that
    /// fits before the end of storage and the part that wraps to index 0.
    fn split(&self, start: usize, count: usize) -> (usize, usize) {
        let until_end = self.capacity() - start;
        if count <= until_end {
            (count, 0)
        } else {
            (until_end, count - until_end)
        }
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("producer", &self.producer)
            .field("consumer", &self.consumer)
            .field("len", &self.len)
            .field("policy", &self.policy)
            .finish()
    }
}
