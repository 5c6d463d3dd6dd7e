use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Particle scene projection and coloring.
pub struct SceneOptions {
    /// Canvas edge length in pixels.
    #[schemars(title = "Canvas Size", range(min = 100.0, max = 1200.0), extend("step" = 10.0))]
    pub size: f32,
    /// Edge length of the simulation box in world units.
    #[schemars(skip)]
    pub box_size: f32,
    /// Speed that maps to a fully saturated green channel.
    #[schemars(title = "Speed Color Scale", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub speed_color_scale: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            size: 300.0,
            box_size: 10.0,
            speed_color_scale: 1.5,
        }
    }
}
