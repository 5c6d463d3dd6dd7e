//! Energy line chart: kinetic, potential and total energy per step, plus a
//! vertical marker at the current step.

use super::RenderSink;
use crate::trajectory::Trajectory;

/// Vertical line marking the current step on the energy chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepIndicator {
    /// Step the line sits on.
    pub x: usize,
    /// Bottom of the line.
    pub y_min: f64,
    /// Top of the line.
    pub y_max: f64,
}

impl Default for StepIndicator {
    fn default() -> Self {
        Self {
            x: 0,
            y_min: -1.0,
            y_max: 1.0,
        }
    }
}

/// Energy series for the whole trajectory.
#[derive(Debug, Clone, Default)]
pub struct EnergyChart {
    kinetic: Vec<f64>,
    potential: Vec<f64>,
    total: Vec<f64>,
    indicator: StepIndicator,
}

impl EnergyChart {
    /// Empty chart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Kinetic energy per step.
    pub fn kinetic(&self) -> &[f64] {
        &self.kinetic
    }

    /// Potential energy per step.
    pub fn potential(&self) -> &[f64] {
        &self.potential
    }

    /// Total energy per step.
    pub fn total(&self) -> &[f64] {
        &self.total
    }

    /// Current-step marker.
    pub fn indicator(&self) -> StepIndicator {
        self.indicator
    }
}

impl RenderSink for EnergyChart {
    fn name(&self) -> &'static str {
        "energy"
    }

    fn update_data(&mut self, trajectory: &Trajectory) {
        let frames = trajectory.frames();
        self.kinetic = frames.iter().map(|f| f.kinetic).collect();
        self.potential = frames.iter().map(|f| f.potential).collect();
        self.total = frames.iter().map(|f| f.total).collect();

        // Marker spans from the deepest potential to the highest kinetic.
        let y_min = self.potential.iter().copied().fold(f64::INFINITY, f64::min);
        let y_max = self.kinetic.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        self.indicator = if frames.is_empty() {
            StepIndicator::default()
        } else {
            StepIndicator { x: 0, y_min, y_max }
        };
    }

    fn render(&mut self, _trajectory: &Trajectory, step_no: usize) {
        self.indicator.x = step_no;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::test_util::{frame, trajectory};

    #[test]
    fn collects_series_and_marker_extent() {
        let energies = [(0.5, -2.0), (0.9, -2.4), (0.7, -2.2)];
        let frames = energies
            .iter()
            .map(|&(kin, pot)| {
                let mut f = frame(&[], &[]);
                f.kinetic = kin;
                f.potential = pot;
                f.total = kin + pot;
                f
            })
            .collect();
        let traj = trajectory(frames);

        let mut chart = EnergyChart::new();
        chart.update_data(&traj);
        assert_eq!(chart.kinetic(), &[0.5, 0.9, 0.7]);
        assert_eq!(chart.potential(), &[-2.0, -2.4, -2.2]);
        assert_eq!(chart.total()[1], 0.9 - 2.4);
        assert_eq!(chart.indicator().y_min, -2.4);
        assert_eq!(chart.indicator().y_max, 0.9);

        chart.render(&traj, 2);
        assert_eq!(chart.indicator().x, 2);
    }

    #[test]
    fn reload_with_empty_trajectory_clears() {
        let mut chart = EnergyChart::new();
        chart.update_data(&trajectory(vec![frame(&[], &[])]));
        chart.update_data(&trajectory(Vec::new()));
        assert!(chart.kinetic().is_empty());
        assert_eq!(chart.indicator(), StepIndicator::default());
    }
}
