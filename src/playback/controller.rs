//! Play/pause state machine and step cursor.

use super::clock::{Clock, MonotonicClock};
use super::ticker::Ticker;
use crate::error::SpinaError;
use crate::options::PlaybackOptions;
use crate::sinks::RenderSink;
use crate::trajectory::{Frame, Trajectory};

/// Snapshot of the controller's cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    /// Whether `advance` moves the cursor.
    pub is_playing: bool,
    /// Current step, `< num_steps` whenever `num_steps > 0`.
    pub step_no: usize,
    /// Steps in the loaded trajectory.
    pub num_steps: usize,
}

/// Callback mirroring the cursor into a slider or label.
type StepCallback = Box<dyn FnMut(usize)>;

/// Drives the step cursor and the render fan-out.
pub struct PlaybackController<C: Clock = MonotonicClock> {
    ticker: Ticker<C>,
    state: PlaybackState,
    trajectory: Trajectory,
    sinks: Vec<Box<dyn RenderSink>>,
    on_step_changed: Option<StepCallback>,
    steps_played: u64,
}

impl PlaybackController<MonotonicClock> {
    /// Controller on the wall clock at the default rate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ticker(Ticker::default())
    }

    /// Controller on the wall clock at the configured rate.
    pub fn from_options(options: &PlaybackOptions) -> Result<Self, SpinaError> {
        Ok(Self::with_ticker(Ticker::new(options.steps_per_second)?))
    }
}

impl Default for PlaybackController<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PlaybackController<C> {
    /// Controller driven by `ticker`, with nothing loaded.
    pub fn with_ticker(ticker: Ticker<C>) -> Self {
        Self {
            ticker,
            state: PlaybackState::default(),
            trajectory: Trajectory::default(),
            sinks: Vec::new(),
            on_step_changed: None,
            steps_played: 0,
        }
    }

    /// Register a view. It catches up immediately if data is already loaded.
    pub fn add_sink(&mut self, mut sink: Box<dyn RenderSink>) {
        if !self.trajectory.is_empty() {
            sink.update_data(&self.trajectory);
            sink.render(&self.trajectory, self.state.step_no);
        }
        self.sinks.push(sink);
    }

    /// Install the UI-sync callback, replacing any previous one.
    pub fn on_step_changed(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_step_changed = Some(Box::new(callback));
    }

    /// Replace the loaded trajectory and rewind to step 0, paused.
    pub fn load_trajectory(&mut self, trajectory: Trajectory) {
        self.trajectory = trajectory;
        self.state = PlaybackState {
            is_playing: false,
            step_no: 0,
            num_steps: self.trajectory.len(),
        };
        self.steps_played = 0;
        self.ticker.reset();

        log::info!(
            "Trajectory loaded: {} steps, {} particles, ~{:.1}s at {} steps/s",
            self.state.num_steps,
            self.trajectory.num_particles(),
            self.state.num_steps as f64 / self.ticker.steps_per_second(),
            self.ticker.steps_per_second(),
        );

        for sink in &mut self.sinks {
            sink.update_data(&self.trajectory);
        }
        if self.state.num_steps > 0 {
            self.render();
        }
    }

    /// Start playing. No-op when already playing.
    pub fn play(&mut self) {
        if self.state.is_playing {
            return;
        }
        self.state.is_playing = true;
        log::info!(
            "Trajectory playing (step {}/{})",
            self.state.step_no,
            self.state.num_steps
        );
    }

    /// Stop playing and forget ticker timing so resuming starts clean.
    pub fn pause(&mut self) {
        if self.state.is_playing {
            log::info!(
                "Trajectory paused (step {}/{})",
                self.state.step_no,
                self.state.num_steps
            );
        }
        self.state.is_playing = false;
        self.ticker.reset();
    }

    /// Toggle between playing and paused states.
    pub fn toggle(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Jump to `step`, clamped into the trajectory. Renders even while
    /// paused. No-op with nothing loaded.
    pub fn scrub_to(&mut self, step: i64) {
        let Some(last) = self.state.num_steps.checked_sub(1) else {
            return;
        };
        let step_no = usize::try_from(step.max(0)).map_or(last, |s| s.min(last));
        self.state.step_no = step_no;
        log::debug!("scrubbed to step {step_no}");
        self.render();
    }

    /// Called once per host frame. Moves the cursor by the ticker's elapsed
    /// steps, wrapping at the end, then syncs the UI and renders.
    pub fn advance(&mut self) {
        if !self.state.is_playing || self.state.num_steps == 0 {
            return;
        }
        let n = self.state.num_steps;
        let elapsed = self.ticker.tick();
        self.steps_played =
            self.steps_played.saturating_add(elapsed as u64);
        self.state.step_no = (self.state.step_no + elapsed % n) % n;

        if let Some(callback) = self.on_step_changed.as_mut() {
            callback(self.state.step_no);
        }
        self.render();
    }

    /// Change the playback rate. Takes effect on the next tick.
    pub fn set_steps_per_second(
        &mut self,
        steps_per_second: f64,
    ) -> Result<(), SpinaError> {
        self.ticker.set_steps_per_second(steps_per_second)?;
        log::debug!("playback rate set to {steps_per_second} steps/s");
        Ok(())
    }

    fn render(&mut self) {
        for sink in &mut self.sinks {
            sink.render(&self.trajectory, self.state.step_no);
        }
    }

    /// Cursor snapshot.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current step.
    pub fn step_no(&self) -> usize {
        self.state.step_no
    }

    /// Steps in the loaded trajectory.
    pub fn num_steps(&self) -> usize {
        self.state.num_steps
    }

    /// Whether `advance` moves the cursor.
    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Steps `advance` has moved through since the last load, counting whole
    /// laps that leave the cursor where it was. Scrubbing does not count.
    pub fn steps_played(&self) -> u64 {
        self.steps_played
    }

    /// The loaded trajectory (empty before the first load).
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Frame under the cursor.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.trajectory.get(self.state.step_no)
    }

    /// The step ticker.
    pub fn ticker(&self) -> &Ticker<C> {
        &self.ticker
    }

    /// Registered views, in registration order.
    pub fn sinks(&self) -> &[Box<dyn RenderSink>] {
        &self.sinks
    }
}
