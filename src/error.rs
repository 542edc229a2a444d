//! Error types
//!
//! Only configuration can fail. Stepping an algorithm is total over a valid
//! sequence; misuse of the engine (an index out of range, ticking the driver
//! without an active run) is a bug and panics instead of returning an error.

use thiserror::Error;

/// Invalid startup configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("list size {size} is outside {min}..={max}")]
    SizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("minimum value {min} is greater than maximum value {max}")]
    InvertedBounds { min: i32, max: i32 },

    #[error("tick interval must be at least 1 ms")]
    ZeroTick,

    #[error("unknown algorithm '{0}' (expected bubble, insertion, selection, merge, quick, shaker or heap)")]
    UnknownAlgorithm(String),
}
