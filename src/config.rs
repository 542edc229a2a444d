//! Runtime configuration

use crate::engine::{Algorithm, Direction};
use crate::error::ConfigError;
use crate::sequence::{MAX_SIZE, MIN_SIZE};
use std::time::Duration;

/// Default number of values in a generated list
pub const DEFAULT_SIZE: usize = 50;

/// Default value range of a generated list
pub const DEFAULT_MIN_VALUE: i32 = 0;
pub const DEFAULT_MAX_VALUE: i32 = 100;

/// Roughly 60 ticks per second
pub const DEFAULT_TICK: Duration = Duration::from_millis(16);

/// Bounds for the speed controls
pub const MIN_TICK: Duration = Duration::from_millis(1);
pub const MAX_TICK: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Length of randomly generated lists
    pub size: usize,
    pub min_value: i32,
    pub max_value: i32,
    /// Time between two steps while a run is active
    pub tick: Duration,
    /// Seed for list generation; `None` draws one from the OS
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
    pub direction: Direction,
    /// Fixed starting list, used instead of the first random one
    pub values: Option<Vec<i32>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: DEFAULT_SIZE,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            tick: DEFAULT_TICK,
            seed: None,
            algorithm: Algorithm::default(),
            direction: Direction::default(),
            values: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::SizeOutOfRange {
                size: self.size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }
        if self.min_value > self.max_value {
            return Err(ConfigError::InvertedBounds {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.tick.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}

/// Halve the tick interval, not going below [`MIN_TICK`]
pub fn faster(tick: Duration) -> Duration {
    (tick / 2).max(MIN_TICK)
}

/// Double the tick interval, not going above [`MAX_TICK`]
pub fn slower(tick: Duration) -> Duration {
    (tick * 2).min(MAX_TICK)
}
