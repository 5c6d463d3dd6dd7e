use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SpinaError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Velocity Histogram", inline)]
#[serde(default)]
/// Velocity histogram binning.
pub struct HistogramOptions {
    /// Lower edge of the first bin.
    #[schemars(skip)]
    pub bin_start: f32,
    /// Upper edge of the last bin.
    #[schemars(title = "Max Speed", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub bin_end: f32,
    /// Width of each bin.
    #[schemars(title = "Bin Width", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub bin_size: f32,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            bin_start: 0.0,
            bin_end: 3.0,
            bin_size: 0.1,
        }
    }
}

impl HistogramOptions {
    /// Number of bins covering `[bin_start, bin_end)`.
    pub fn num_bins(&self) -> usize {
        ((self.bin_end - self.bin_start) / self.bin_size).round() as usize
    }

    pub(crate) fn validate(&self) -> Result<(), SpinaError> {
        if self.bin_size > 0.0 && self.bin_end > self.bin_start {
            Ok(())
        } else {
            Err(SpinaError::OptionsParse(format!(
                "histogram bins [{}, {}) of width {} are empty",
                self.bin_start, self.bin_end, self.bin_size
            )))
        }
    }
}
