//! Views driven by the playback cursor.
//!
//! Every view implements [`RenderSink`]: it is handed the whole trajectory
//! once per load and then asked to render individual steps. The views here
//! compute what a drawing layer needs (chart series, histogram bins, sprite
//! positions, sphere placements, field colors) and keep it for that layer to
//! read.
//!
//! The controller owns its sinks as boxed trait objects. To keep reading a
//! view after registering it, wrap it in `Rc<RefCell<_>>` and register a
//! clone; the blanket impl below forwards to the shared view.

pub mod energy;
pub mod histogram;
pub mod potential;
pub mod scene;
pub mod scene3d;

use std::cell::RefCell;
use std::rc::Rc;

pub use energy::EnergyChart;
pub use histogram::VelocityHistogram;
pub use potential::PotentialField;
pub use scene::{ParticleScene, ParticleSprite};
pub use scene3d::{SceneCamera, Sphere, SphereScene};

use crate::trajectory::Trajectory;

/// A view that redraws for a given trajectory step.
pub trait RenderSink {
    /// Short identifier for logging.
    fn name(&self) -> &'static str;

    /// Called once after every trajectory load, before the first render.
    fn update_data(&mut self, _trajectory: &Trajectory) {}

    /// Redraw for `step_no`. Only called with a valid index into
    /// `trajectory`.
    fn render(&mut self, trajectory: &Trajectory, step_no: usize);
}

impl<T: RenderSink> RenderSink for Rc<RefCell<T>> {
    fn name(&self) -> &'static str {
        self.borrow().name()
    }

    fn update_data(&mut self, trajectory: &Trajectory) {
        self.borrow_mut().update_data(trajectory);
    }

    fn render(&mut self, trajectory: &Trajectory, step_no: usize) {
        self.borrow_mut().render(trajectory, step_no);
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use glam::Vec3;

    use crate::trajectory::{Frame, Trajectory};

    /// Frame with the given positions/velocities and unit accelerations.
    pub(crate) fn frame(positions: &[Vec3], velocities: &[Vec3]) -> Frame {
        Frame {
            positions: positions.to_vec(),
            velocities: velocities.to_vec(),
            accelerations: vec![Vec3::new(1.0, 2.0, 0.0); positions.len()],
            kinetic: 0.0,
            potential: 0.0,
            total: 0.0,
            temperature: None,
        }
    }

    pub(crate) fn trajectory(frames: Vec<Frame>) -> Trajectory {
        Trajectory::from_frames(frames, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::{ManualClock, PlaybackController, Ticker};

    #[test]
    fn shared_views_stay_readable_after_registration() {
        let chart = Rc::new(RefCell::new(EnergyChart::new()));
        let mut controller = PlaybackController::with_ticker(
            Ticker::with_clock(ManualClock::new(), 30.0).unwrap(),
        );
        controller.add_sink(Box::new(Rc::clone(&chart)));

        let mut frames = Vec::new();
        for i in 0..4 {
            let mut f = test_util::frame(&[], &[]);
            f.kinetic = f64::from(i);
            frames.push(f);
        }
        controller.load_trajectory(test_util::trajectory(frames));
        controller.scrub_to(3);

        assert_eq!(controller.sinks()[0].name(), "energy");
        assert_eq!(chart.borrow().kinetic(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(chart.borrow().indicator().x, 3);
    }
}
