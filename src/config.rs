use crate::LifeError;
use std::{
    num::{NonZeroU32, NonZeroU64},
    time::Duration,
};

pub const DEFAULT_EDGE_LENGTH: u32 = 10;
pub const DEFAULT_STEP_DELAY_MS: u64 = 500;

const DEFAULT_EDGE: NonZeroU32 = match NonZeroU32::new(DEFAULT_EDGE_LENGTH) {
    Some(edge) => edge,
    None => panic!("default edge length is zero"),
};
const DEFAULT_DELAY: NonZeroU64 = match NonZeroU64::new(DEFAULT_STEP_DELAY_MS) {
    Some(ms) => ms,
    None => panic!("default step delay is zero"),
};

/// Pause between two animated generations, in whole milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct StepDelay(NonZeroU64);

impl StepDelay {
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidConfiguration`] if `ms` is zero.
    pub fn from_millis(ms: u64) -> Result<Self, LifeError> {
        NonZeroU64::new(ms)
            .map(Self)
            .ok_or(LifeError::InvalidConfiguration {
                field: "step delay",
                value: ms,
            })
    }

    pub fn as_millis(self) -> u64 {
        self.0.get()
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0.get())
    }
}

impl Default for StepDelay {
    fn default() -> Self {
        Self(DEFAULT_DELAY)
    }
}

/// Options fixed when the simulation is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    edge_length: NonZeroU32,
    initial_step_delay: StepDelay,
}

impl Config {
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidConfiguration`] if either value is zero.
    /// Values are never clamped.
    pub fn new(edge_length: u32, initial_step_delay_ms: u64) -> Result<Self, LifeError> {
        let edge_length = NonZeroU32::new(edge_length).ok_or(LifeError::InvalidConfiguration {
            field: "edge length",
            value: edge_length as u64,
        })?;
        Ok(Self {
            edge_length,
            initial_step_delay: StepDelay::from_millis(initial_step_delay_ms)?,
        })
    }

    /// Side of one cell in pixels.
    pub fn edge_length(&self) -> NonZeroU32 {
        self.edge_length
    }

    pub fn initial_step_delay(&self) -> StepDelay {
        self.initial_step_delay
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            edge_length: DEFAULT_EDGE,
            initial_step_delay: StepDelay::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.edge_length().get(), DEFAULT_EDGE_LENGTH);
        assert_eq!(config.initial_step_delay().as_millis(), 500);
        assert_eq!(Config::new(10, 500), Ok(config));
    }

    #[test]
    fn test_rejects_zero() {
        assert_eq!(
            Config::new(0, 500),
            Err(LifeError::InvalidConfiguration {
                field: "edge length",
                value: 0
            })
        );
        assert_eq!(
            Config::new(10, 0),
            Err(LifeError::InvalidConfiguration {
                field: "step delay",
                value: 0
            })
        );
    }

    #[test]
    fn test_step_delay_duration() {
        let delay = StepDelay::from_millis(125).unwrap();
        assert_eq!(delay.as_duration(), Duration::from_millis(125));
    }
}
