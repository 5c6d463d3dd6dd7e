use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Potential Field", inline)]
#[serde(default)]
/// Potential field sampling and Lennard-Jones parameters.
pub struct PotentialOptions {
    /// Samples along each edge of the field grid.
    #[schemars(title = "Resolution", range(min = 8, max = 512), extend("step" = 8))]
    pub resolution: usize,
    /// Edge length of the sampled region in world units.
    #[schemars(skip)]
    pub box_size: f32,
    /// Lennard-Jones well depth.
    #[schemars(title = "Epsilon", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub epsilon: f32,
    /// Lennard-Jones zero-crossing distance.
    #[schemars(title = "Sigma", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub sigma: f32,
    /// Hard-sphere radius drawn over each particle.
    #[schemars(title = "Particle Radius", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub particle_radius: f32,
    /// Half-width of the sphere edge blend.
    #[schemars(skip)]
    pub edge_softness: f32,
}

impl Default for PotentialOptions {
    fn default() -> Self {
        Self {
            resolution: 64,
            box_size: 10.0,
            epsilon: 1.0,
            sigma: 1.0,
            particle_radius: 0.1,
            edge_softness: 0.005,
        }
    }
}
