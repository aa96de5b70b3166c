// src/error.rs

use crate::ring_buffer::FullPolicy;
use thiserror::Error;

/// Errors raised while turning configuration into a `RingBuffer`.
///
/// Transfers never produce these: a full or empty buffer is reported by
/// `write`/`read` returning `None`.
#[derive(Debug, Error)]
pub enum Error {
    /// The config path does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Ring buffer capacity must be greater than zero")]
    ZeroCapacity,
    /// A full-buffer policy that has no implementation yet.
    #[error("Full-buffer policy '{0}' is not supported")]
    UnsupportedPolicy(FullPolicy),
}
