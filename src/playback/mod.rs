//! Trajectory playback: the step ticker and the controller that owns the
//! step cursor.
//!
//! The host calls [`PlaybackController::advance`] once per display frame.
//! While playing, the controller asks its [`Ticker`] how many whole steps the
//! elapsed time is worth, moves the cursor, and fans the new step out to every
//! registered [`RenderSink`](crate::sinks::RenderSink).

pub mod clock;
pub mod controller;
pub mod ticker;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use controller::{PlaybackController, PlaybackState};
pub use ticker::{Ticker, DEFAULT_STEPS_PER_SECOND};
