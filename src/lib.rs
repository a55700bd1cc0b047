//! vhsfix - restoration filters for captured analog VHS video
//!
//! vhsfix provides single-pass video filters for cleaning up artifacts
//! introduced by degraded analog sync during VHS playback and capture.
//!
//! # Architecture
//!
//! - `filter`: filter trait, sequential chain, and the filters themselves
//! - `frame`: uncompressed video frame representation
//! - `util`: buffers, pixel formats, timestamps
//!
//! Filters are one-frame-in/one-frame-out and hold no mutable state
//! across calls beyond their immutable configuration, so independent
//! instances can run on separate pipeline branches without coordination.

pub mod error;
pub mod filter;
pub mod frame;
pub mod util;

pub use error::{Error, Result};
pub use filter::{DejitterFilter, Filter, FilterChain, ReferenceMode};
pub use frame::VideoFrame;

/// vhsfix version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the vhsfix library
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            debug: false,
        }
    }
}

/// Initialize the vhsfix library with the given configuration
///
/// Sets up logging; hosts that install their own tracing subscriber can
/// skip this entirely.
pub fn init(config: Config) -> Result<()> {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(level)
            .try_init()
            .map_err(|e| Error::Init(format!("Failed to initialize logging: {}", e)))?;
    }

    Ok(())
}
