//! Particle speed distribution for the current step.

use super::RenderSink;
use crate::options::HistogramOptions;
use crate::trajectory::Trajectory;

/// Fixed-bin speed histogram normalized to probabilities.
#[derive(Debug, Clone)]
pub struct VelocityHistogram {
    options: HistogramOptions,
    probabilities: Vec<f32>,
    x_range: (f32, f32),
}

impl VelocityHistogram {
    /// Histogram with the given binning.
    pub fn new(options: HistogramOptions) -> Self {
        let probabilities = vec![0.0; options.num_bins()];
        Self {
            options,
            probabilities,
            x_range: (0.0, 1.0),
        }
    }

    /// Probability of each bin at the last rendered step.
    pub fn probabilities(&self) -> &[f32] {
        &self.probabilities
    }

    /// Lower edge of bin `index`.
    pub fn bin_start(&self, index: usize) -> f32 {
        self.options.bin_start + index as f32 * self.options.bin_size
    }

    /// Speed axis extent, `[0, max speed]` once data is loaded.
    pub fn x_range(&self) -> (f32, f32) {
        self.x_range
    }

    fn bin_of(&self, speed: f32) -> Option<usize> {
        if speed < self.options.bin_start {
            return None;
        }
        let index =
            ((speed - self.options.bin_start) / self.options.bin_size) as usize;
        (index < self.probabilities.len()).then_some(index)
    }
}

impl Default for VelocityHistogram {
    fn default() -> Self {
        Self::new(HistogramOptions::default())
    }
}

impl RenderSink for VelocityHistogram {
    fn name(&self) -> &'static str {
        "velocity_histogram"
    }

    fn update_data(&mut self, trajectory: &Trajectory) {
        self.x_range = (0.0, trajectory.max_speed());
        self.probabilities.fill(0.0);
    }

    fn render(&mut self, trajectory: &Trajectory, step_no: usize) {
        self.probabilities.fill(0.0);
        let Some(frame) = trajectory.get(step_no) else {
            return;
        };
        let n = frame.num_particles();
        if n == 0 {
            return;
        }
        let weight = 1.0 / n as f32;
        for speed in frame.speeds() {
            if let Some(bin) = self.bin_of(speed) {
                self.probabilities[bin] += weight;
            }
        }
    }
}
