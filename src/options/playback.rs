use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SpinaError;
use crate::playback::ticker::{validate_rate, DEFAULT_STEPS_PER_SECOND};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
/// Playback rate and host loop cadence.
pub struct PlaybackOptions {
    /// Trajectory steps advanced per second of wall-clock time.
    #[schemars(title = "Steps per Second", range(min = 1.0, max = 240.0), extend("step" = 1.0))]
    pub steps_per_second: f64,
    /// How often the headless host loop calls `advance`, in Hz.
    #[schemars(skip)]
    pub host_frame_rate: u32,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            steps_per_second: DEFAULT_STEPS_PER_SECOND,
            host_frame_rate: 60,
        }
    }
}

impl PlaybackOptions {
    /// Check the rate the same way the ticker will.
    pub fn validate(&self) -> Result<(), SpinaError> {
        validate_rate(self.steps_per_second)?;
        if self.host_frame_rate == 0 {
            return Err(SpinaError::OptionsParse(
                "playback.host_frame_rate must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}
