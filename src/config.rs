use crate::error::Error;
use crate::ring_buffer::FullPolicy;
use log::{error, info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Largest capacity loaded without a warning.
const LARGE_CAPACITY: usize = 64 * 1024 * 1024;

#[derive(Debug, Deserialize)]
struct ConfigFile {
    buffer: BufferConfig,
}

/// Settings for a single `RingBuffer`, read from the `[buffer]` table.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    pub capacity: usize,
    #[serde(default)]
    pub policy: FullPolicy,
}

impl BufferConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            policy: FullPolicy::default(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        if self.policy != FullPolicy::RejectWrite {
            return Err(Error::UnsupportedPolicy(self.policy));
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let file: ConfigFile = toml::from_str(content)?;
        let cfg = file.buffer;

        if let Err(e) = cfg.validate() {
            error!("Invalid ring buffer config: {}", e);
            return Err(e);
        }
        if cfg.capacity > LARGE_CAPACITY {
            warn!(
                "Ring buffer capacity {} bytes is large - storage is allocated up front",
                cfg.capacity
            );
        }

        Ok(cfg)
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<BufferConfig, Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::ConfigNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let cfg = BufferConfig::from_toml_str(&content)?;

    info!("Config loaded from: {}", path.display());
    info!("Ring buffer capacity {} bytes, policy {}", cfg.capacity, cfg.policy);

    Ok(cfg)
}
