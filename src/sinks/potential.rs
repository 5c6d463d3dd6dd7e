//! Lennard-Jones potential felt by a test particle, sampled on a grid over
//! the simulation box.
//!
//! Every other particle contributes `4ε((σ/r)^12 − (σ/r)^6)` to a sample.
//! Samples are clamped to `[-1, 1]` and mapped to a blue (attractive) / red
//! (repulsive) ramp, with a yellow hard-sphere disc drawn over each particle.
//! Only the first two coordinates are used, so 3D trajectories show their
//! projection onto the xy plane.

use glam::{Vec2, Vec3};

use super::RenderSink;
use crate::options::PotentialOptions;
use crate::trajectory::Trajectory;

const SPHERE_COLOR: Vec3 = Vec3::new(1.0, 1.0, 0.0);

/// Potential field grid for the current step.
#[derive(Debug, Clone, Default)]
pub struct PotentialField {
    options: PotentialOptions,
    test_particle: usize,
    positions: Vec<Vec2>,
    values: Vec<f32>,
    colors: Vec<Vec3>,
}

impl PotentialField {
    /// Field with the given sampling.
    pub fn new(options: PotentialOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Samples along each grid edge.
    pub fn resolution(&self) -> usize {
        self.options.resolution
    }

    /// Index of the particle whose view of the field is drawn.
    pub fn test_particle(&self) -> usize {
        self.test_particle
    }

    /// Clamped potential at grid cell `(ix, iy)`, row 0 at the bottom.
    pub fn value(&self, ix: usize, iy: usize) -> Option<f32> {
        self.index(ix, iy).map(|i| self.values[i])
    }

    /// RGB color at grid cell `(ix, iy)`, channels in `[0, 1]`.
    pub fn color(&self, ix: usize, iy: usize) -> Option<Vec3> {
        self.index(ix, iy).map(|i| self.colors[i])
    }

    /// Clamped potential for every cell, row-major from the bottom row.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Unclamped potential the test particle would feel at `point`.
    pub fn potential_at(&self, point: Vec2) -> f32 {
        self.positions
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != self.test_particle)
            .map(|(_, p)| self.lennard_jones(point.distance(*p)))
            .sum()
    }

    fn lennard_jones(&self, r: f32) -> f32 {
        if r <= f32::EPSILON {
            return f32::INFINITY;
        }
        let s6 = (self.options.sigma / r).powi(6);
        4.0 * self.options.epsilon * (s6 * s6 - s6)
    }

    fn index(&self, ix: usize, iy: usize) -> Option<usize> {
        let n = self.options.resolution;
        (ix < n && iy < n && !self.values.is_empty()).then(|| iy * n + ix)
    }

    fn cell_center(&self, ix: usize, iy: usize) -> Vec2 {
        let cell = self.options.box_size / self.options.resolution as f32;
        Vec2::new((ix as f32 + 0.5) * cell, (iy as f32 + 0.5) * cell)
    }

    fn shade(&self, point: Vec2, value: f32) -> Vec3 {
        let mut color = if value < 0.0 {
            Vec3::new(1.0 + value, 1.0 + value, 1.0)
        } else {
            Vec3::new(1.0, 1.0 - value, 1.0 - value)
        };
        let radius = self.options.particle_radius;
        let soft = self.options.edge_softness;
        for p in &self.positions {
            let r = point.distance(*p);
            let t = 1.0 - smoothstep(radius - soft, radius + soft, r);
            color = color.lerp(SPHERE_COLOR, t);
        }
        color
    }
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

impl RenderSink for PotentialField {
    fn name(&self) -> &'static str {
        "potential"
    }

    fn update_data(&mut self, trajectory: &Trajectory) {
        self.test_particle = trajectory.num_particles() / 2;
        let cells = self.options.resolution * self.options.resolution;
        self.values = vec![0.0; cells];
        self.colors = vec![Vec3::ONE; cells];
        self.positions.clear();
    }

    fn render(&mut self, trajectory: &Trajectory, step_no: usize) {
        let Some(frame) = trajectory.get(step_no) else {
            return;
        };
        self.positions.clear();
        self.positions
            .extend(frame.positions.iter().map(|p| p.truncate()));

        let n = self.options.resolution;
        self.values.resize(n * n, 0.0);
        self.colors.resize(n * n, Vec3::ONE);
        for iy in 0..n {
            for ix in 0..n {
                let point = self.cell_center(ix, iy);
                let value = self.potential_at(point).clamp(-1.0, 1.0);
                self.values[iy * n + ix] = value;
                self.colors[iy * n + ix] = self.shade(point, value);
            }
        }
    }
}
