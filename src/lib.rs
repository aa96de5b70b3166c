//! Fixed-capacity circular byte buffer for single-threaded producer/consumer
//! streaming.
//!
//! ```
//! use byte_ring::RingBuffer;
//!
//! let mut buf = RingBuffer::new(3);
//! assert_eq!(buf.write(&[1, 2, 3, 4]), Some(3));
//!
//! let mut out = [0u8; 2];
//! assert_eq!(buf.read(&mut out), Some(2));
//! assert_eq!(out, [1, 2]);
//! assert_eq!(buf.len(), 1);
//! ```

pub mod config;
pub mod error;
mod io;
pub mod ring_buffer;

pub use config::{load_config, BufferConfig};
pub use error::Error;
pub use ring_buffer::{FullPolicy, RingBuffer};
