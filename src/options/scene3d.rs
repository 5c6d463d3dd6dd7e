use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "3D Scene", inline)]
#[serde(default)]
/// Sphere scene camera and sphere styling for 3D trajectories.
pub struct Scene3dOptions {
    /// Canvas edge length in pixels.
    #[schemars(title = "Canvas Size", range(min = 100.0, max = 1200.0), extend("step" = 10.0))]
    pub size: f32,
    /// Sphere radius in world units.
    #[schemars(title = "Sphere Radius", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub sphere_radius: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Point the camera orbits and looks at.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Camera distance from `target` along +z.
    #[schemars(skip)]
    pub camera_distance: f32,
    /// Linear RGB fill shared by all spheres.
    #[schemars(skip)]
    pub sphere_color: [f32; 3],
}

impl Default for Scene3dOptions {
    fn default() -> Self {
        Self {
            size: 300.0,
            sphere_radius: 0.2,
            fovy: 70.0,
            target: [5.0, 5.0, 5.0],
            camera_distance: 15.0,
            sphere_color: [0.333, 0.533, 0.867],
        }
    }
}
