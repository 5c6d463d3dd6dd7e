//! Sphere scene for 3D trajectories: one sphere per particle at its full
//! position, seen through a perspective camera parked in front of the box.

use glam::{Mat4, Vec2, Vec3};

use super::RenderSink;
use crate::options::Scene3dOptions;
use crate::trajectory::Trajectory;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCamera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl SceneCamera {
    /// Square-viewport camera `distance` units along +z from `target`.
    pub fn looking_at(target: Vec3, distance: f32, fovy: f32) -> Self {
        Self {
            eye: target + Vec3::Z * distance,
            target,
            up: Vec3::Y,
            aspect: 1.0,
            fovy,
            znear: 1.0,
            zfar: 1000.0,
        }
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }
}

/// One particle as a drawing layer should place it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center in world units.
    pub center: Vec3,
    /// Radius in world units.
    pub radius: f32,
}

/// World-space spheres of the current step plus the camera that views them.
#[derive(Debug, Clone)]
pub struct SphereScene {
    options: Scene3dOptions,
    camera: SceneCamera,
    view_proj: Mat4,
    spheres: Vec<Sphere>,
}

impl Default for SphereScene {
    fn default() -> Self {
        Self::new(Scene3dOptions::default())
    }
}

impl SphereScene {
    /// Scene with the camera described by `options`.
    pub fn new(options: Scene3dOptions) -> Self {
        let camera = SceneCamera::looking_at(
            Vec3::from(options.target),
            options.camera_distance,
            options.fovy,
        );
        Self {
            view_proj: camera.build_matrix(),
            camera,
            options,
            spheres: Vec::new(),
        }
    }

    /// Spheres for the last rendered step, in particle order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Camera the scene is viewed through.
    pub fn camera(&self) -> &SceneCamera {
        &self.camera
    }

    /// Combined view-projection matrix of the scene camera.
    pub fn view_projection(&self) -> Mat4 {
        self.view_proj
    }

    /// Linear RGB fill shared by all spheres.
    pub fn sphere_color(&self) -> [f32; 3] {
        self.options.sphere_color
    }

    /// Canvas pixel (y grows downwards) under which `point` appears, or
    /// `None` when it lies behind the camera.
    pub fn project(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.view_proj * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let size = self.options.size;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * size,
            (1.0 - ndc.y) * 0.5 * size,
        ))
    }
}

impl RenderSink for SphereScene {
    fn name(&self) -> &'static str {
        "scene3d"
    }

    fn render(&mut self, trajectory: &Trajectory, step_no: usize) {
        self.spheres.clear();
        let Some(frame) = trajectory.get(step_no) else {
            return;
        };
        let radius = self.options.sphere_radius;
        self.spheres.extend(
            frame
                .positions
                .iter()
                .map(|&center| Sphere { center, radius }),
        );
    }
}
