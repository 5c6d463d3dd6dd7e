// -- Lint policy ---------------------------------------------------------
// Crate-wide lints, mirrored by the workspace lint table in Cargo.toml.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Step and sample math converts between f64 time and usize indices
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

//! Playback core and headless views for molecular dynamics trajectories.
//!
//! Spina replays pre-computed simulation results: a JSON trajectory of
//! per-step particle positions, velocities, accelerations and energies. A
//! frame-rate independent ticker turns wall-clock time into whole steps, and a
//! playback controller keeps every view in step with one shared cursor.
//!
//! # Key entry points
//!
//! - [`playback::PlaybackController`] - play/pause/scrub state and the render
//!   fan-out
//! - [`playback::Ticker`] - elapsed time to whole steps at a target rate
//! - [`trajectory::Trajectory`] - the loaded steps, see
//!   [`trajectory::load_file`]
//! - [`sinks`] - energy chart, velocity histogram, particle scene, 3D sphere
//!   scene and potential field views
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Host loop
//!
//! The controller does not schedule itself. The host calls
//! [`playback::PlaybackController::advance`] once per display frame and routes
//! user input to `play`, `pause`, `scrub_to` and `set_steps_per_second`.

pub mod error;
pub mod options;
pub mod playback;
pub mod sinks;
pub mod trajectory;

pub use error::SpinaError;
