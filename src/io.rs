//! `std::io` adapters so a `RingBuffer` can sit between readers and writers.
//!
//! Neither side blocks. A full buffer accepts `Ok(0)` bytes, so `write_all`
//! fails with `ErrorKind::WriteZero`. An empty buffer reads `Ok(0)`, which
//! callers see as end of stream.

use crate::ring_buffer::RingBuffer;
use std::io;

impl io::Write for RingBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(RingBuffer::write(self, buf).unwrap_or(0))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for RingBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(RingBuffer::read(self, buf).unwrap_or(0))
    }
}
