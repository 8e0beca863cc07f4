// crates/domain/src/config.rs
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use vidshelf_shared_kernel::{ConfigError, ConfigResult};

use crate::range::duration::from_minutes;

/// Upper ends of the search page sliders.
///
/// A slider pushed all the way to its maximum means "no upper bound", so
/// these values decide which slider positions decode to open ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    /// Largest size the size slider shows, in MiB.
    pub size_maximum: u64,
    pub duration_maximum_minutes: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            size_maximum: 4096,
            duration_maximum_minutes: 120.0,
        }
    }
}

impl SliderConfig {
    pub fn duration_maximum(&self) -> TimeDelta {
        from_minutes(self.duration_maximum_minutes)
    }

    /// # Errors
    /// Returns an error if the JSON is malformed or a maximum is not positive.
    pub fn from_json_str(input: &str) -> ConfigResult<Self> {
        serde_json::from_str::<Self>(input)?.validated()
    }

    /// # Errors
    /// Returns an error if the YAML is malformed or a maximum is not positive.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(input: &str) -> ConfigResult<Self> {
        serde_yaml::from_str::<Self>(input)?.validated()
    }

    fn validated(self) -> ConfigResult<Self> {
        if self.size_maximum == 0 {
            return Err(ConfigError::Invalid {
                field: "size_maximum".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if !(self.duration_maximum_minutes.is_finite() && self.duration_maximum_minutes > 0.0) {
            return Err(ConfigError::Invalid {
                field: "duration_maximum_minutes".to_string(),
                reason: "must be a positive number".to_string(),
            });
        }
        Ok(self)
    }
}
