//! Command-line player for spina trajectories.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use spina::options::Options;
use spina::playback::PlaybackController;
use spina::sinks::{
    EnergyChart, ParticleScene, PotentialField, SphereScene, VelocityHistogram,
};
use spina::trajectory;
use spina::SpinaError;

/// Plays one lap of the trajectory from a fixed-cadence loop standing in for
/// a display refresh callback.
fn run(trajectory_path: &Path, options: &Options) -> Result<(), SpinaError> {
    let trajectory = trajectory::load_file(trajectory_path)?;
    if trajectory.is_empty() {
        log::warn!("nothing to play: trajectory has no steps");
        return Ok(());
    }

    let energy = Rc::new(RefCell::new(EnergyChart::new()));
    let histogram = Rc::new(RefCell::new(VelocityHistogram::new(
        options.histogram.clone(),
    )));

    let mut controller = PlaybackController::from_options(&options.playback)?;
    controller.add_sink(Box::new(Rc::clone(&energy)));
    controller.add_sink(Box::new(Rc::clone(&histogram)));
    controller.add_sink(Box::new(ParticleScene::new(options.scene.clone())));
    controller.add_sink(Box::new(PotentialField::new(
        options.potential.clone(),
    )));
    if trajectory.dimensions() == 3 {
        controller.add_sink(Box::new(SphereScene::new(
            options.scene3d.clone(),
        )));
    }

    let lap = trajectory.len() as u64;
    controller.load_trajectory(trajectory);
    controller.play();

    let frame_rate = options.playback.host_frame_rate;
    let frame = Duration::from_secs_f64(1.0 / f64::from(frame_rate));
    let mut frames = 0_u64;
    while controller.steps_played() < lap {
        controller.advance();
        frames += 1;
        if frames % u64::from(frame_rate) == 0 {
            let step = controller.step_no();
            let total = energy.borrow().total().get(step).copied();
            let peak = histogram
                .borrow()
                .probabilities()
                .iter()
                .copied()
                .fold(0.0, f32::max);
            log::info!(
                "step {step}/{}: total energy {total:?}, histogram peak {peak:.2}",
                controller.num_steps(),
            );
        }
        std::thread::sleep(frame);
    }

    controller.pause();
    log::info!("finished one lap in {frames} frames");
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(trajectory_path) = args.next() else {
        log::error!("Usage: spina <trajectory.json> [options.toml]");
        std::process::exit(1);
    };

    let options = match args.next() {
        Some(path) => Options::load(Path::new(&path)),
        None => Ok(Options::default()),
    };

    let result =
        options.and_then(|options| run(Path::new(&trajectory_path), &options));
    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
