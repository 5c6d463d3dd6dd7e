//! Flat particle scene: one colored disc per particle with an acceleration
//! arrow, projected onto a square canvas with a bottom-left origin.

use glam::Vec2;

use super::RenderSink;
use crate::options::SceneOptions;
use crate::trajectory::Trajectory;

/// One particle as a drawing layer should paint it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSprite {
    /// Disc center in canvas pixels (y grows downwards).
    pub center: Vec2,
    /// Disc radius in pixels.
    pub radius: f32,
    /// Fill color; green encodes speed.
    pub color: [u8; 3],
    /// End point of the acceleration arrow starting at `center`.
    pub arrow_tip: Vec2,
}

/// Canvas projection of the current step.
#[derive(Debug, Clone, Default)]
pub struct ParticleScene {
    options: SceneOptions,
    sprites: Vec<ParticleSprite>,
}

impl ParticleScene {
    /// Scene with the given projection.
    pub fn new(options: SceneOptions) -> Self {
        Self {
            options,
            sprites: Vec::new(),
        }
    }

    /// Sprites for the last rendered step, in particle order.
    pub fn sprites(&self) -> &[ParticleSprite] {
        &self.sprites
    }

    /// Pixels per world unit.
    pub fn scale(&self) -> f32 {
        self.options.size / self.options.box_size
    }

    fn speed_color(&self, speed: f32) -> [u8; 3] {
        let green = (speed / self.options.speed_color_scale * 255.0)
            .clamp(0.0, 255.0) as u8;
        [200, green, 100]
    }
}

impl RenderSink for ParticleScene {
    fn name(&self) -> &'static str {
        "scene"
    }

    fn render(&mut self, trajectory: &Trajectory, step_no: usize) {
        self.sprites.clear();
        let Some(frame) = trajectory.get(step_no) else {
            return;
        };
        let scale = self.scale();
        let radius = scale / 8.0;
        let size = self.options.size;

        for ((pos, vel), acc) in frame
            .positions
            .iter()
            .zip(&frame.velocities)
            .zip(&frame.accelerations)
        {
            let center = Vec2::new(pos.x * scale, size - pos.y * scale);
            self.sprites.push(ParticleSprite {
                center,
                radius,
                color: self.speed_color(vel.length()),
                arrow_tip: center + Vec2::new(acc.x, -acc.y),
            });
        }
    }
}
