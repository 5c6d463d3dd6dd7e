//! Loaded simulation results.
//!
//! A [`Trajectory`] is the ordered, immutable list of recorded steps that the
//! playback controller walks through. The controller only ever asks for its
//! length and for a frame by index; the views read the frames themselves.

mod loader;

use glam::Vec3;
pub use loader::load_file;

/// One recorded simulation step.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Particle positions. 2D trajectories have `z = 0`.
    pub positions: Vec<Vec3>,
    /// Particle velocities.
    pub velocities: Vec<Vec3>,
    /// Particle accelerations.
    pub accelerations: Vec<Vec3>,
    /// Kinetic energy of the system.
    pub kinetic: f64,
    /// Potential energy of the system.
    pub potential: f64,
    /// Total energy of the system.
    pub total: f64,
    /// Temperature, when the simulator recorded one.
    pub temperature: Option<f64>,
}

impl Frame {
    /// Number of particles in this frame.
    pub fn num_particles(&self) -> usize {
        self.positions.len()
    }

    /// Velocity magnitude of every particle.
    pub fn speeds(&self) -> impl Iterator<Item = f32> + '_ {
        self.velocities.iter().map(|v| v.length())
    }
}

/// Ordered sequence of frames sharing a particle count and dimensionality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    frames: Vec<Frame>,
    dimensions: usize,
}

impl Trajectory {
    /// Wrap already-validated frames.
    pub(crate) fn from_frames(frames: Vec<Frame>, dimensions: usize) -> Self {
        Self { frames, dimensions }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the trajectory has no steps.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `step`, if in range.
    pub fn get(&self, step: usize) -> Option<&Frame> {
        self.frames.get(step)
    }

    /// All frames in step order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Spatial dimensionality (2 or 3), 0 for an empty trajectory.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Particles per frame, 0 for an empty trajectory.
    pub fn num_particles(&self) -> usize {
        self.frames.first().map_or(0, Frame::num_particles)
    }

    /// Largest particle speed over every step.
    pub fn max_speed(&self) -> f32 {
        self.frames
            .iter()
            .flat_map(Frame::speeds)
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(vels: &[Vec3]) -> Frame {
        Frame {
            positions: vec![Vec3::ZERO; vels.len()],
            velocities: vels.to_vec(),
            accelerations: vec![Vec3::ZERO; vels.len()],
            kinetic: 0.0,
            potential: 0.0,
            total: 0.0,
            temperature: None,
        }
    }

    #[test]
    fn max_speed_spans_all_frames() {
        let traj = Trajectory::from_frames(
            vec![
                frame(&[Vec3::new(0.3, 0.4, 0.0), Vec3::X]),
                frame(&[Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO]),
            ],
            2,
        );
        assert_eq!(traj.len(), 2);
        assert_eq!(traj.num_particles(), 2);
        assert_eq!(traj.max_speed(), 2.0);
        let speeds: Vec<f32> = traj.frames()[0].speeds().collect();
        assert!((speeds[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn empty_trajectory_reports_zeroes() {
        let traj = Trajectory::default();
        assert!(traj.is_empty());
        assert_eq!(traj.num_particles(), 0);
        assert_eq!(traj.dimensions(), 0);
        assert_eq!(traj.max_speed(), 0.0);
        assert!(traj.get(0).is_none());
    }
}
