//! JSON trajectory loading.
//!
//! The simulator writes one object per step:
//!
//! ```json
//! [{"pos": [[x, y], ...], "vel": [...], "acc": [...],
//!   "kin": 0.5, "pot": -1.2, "ene": -0.7, "tem": 0.25}, ...]
//! ```
//!
//! Only the basic shape is checked: consistent particle counts and a
//! dimensionality of 2 or 3 across every vector of every step.

use std::io::Read;
use std::path::Path;

use glam::Vec3;
use serde::Deserialize;

use super::{Frame, Trajectory};
use crate::error::SpinaError;

#[derive(Debug, Deserialize)]
struct RawFrame {
    pos: Vec<Vec<f32>>,
    vel: Vec<Vec<f32>>,
    acc: Vec<Vec<f32>>,
    kin: f64,
    pot: f64,
    ene: f64,
    #[serde(default)]
    tem: Option<f64>,
}

/// Read and parse a trajectory file.
pub fn load_file(path: &Path) -> Result<Trajectory, SpinaError> {
    let file = std::fs::File::open(path)?;
    let trajectory = Trajectory::from_reader(std::io::BufReader::new(file))
        .inspect_err(|e| log::warn!("rejected {}: {e}", path.display()))?;
    log::info!(
        "Loaded {}: {} steps, {} particles, {}D",
        path.display(),
        trajectory.len(),
        trajectory.num_particles(),
        trajectory.dimensions(),
    );
    Ok(trajectory)
}

impl Trajectory {
    /// Parse a trajectory from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, SpinaError> {
        let raw: Vec<RawFrame> = serde_json::from_str(json)?;
        build(raw)
    }

    /// Parse a trajectory from a JSON stream.
    pub fn from_reader(reader: impl Read) -> Result<Self, SpinaError> {
        let raw: Vec<RawFrame> = serde_json::from_reader(reader)?;
        build(raw)
    }
}

fn build(raw: Vec<RawFrame>) -> Result<Trajectory, SpinaError> {
    let Some(first) = raw.first() else {
        return Ok(Trajectory::default());
    };
    let num_particles = first.pos.len();
    let dimensions = first.pos.first().map_or(2, Vec::len);
    if !(2..=3).contains(&dimensions) {
        return Err(SpinaError::TrajectoryShape(format!(
            "expected 2 or 3 dimensions, found {dimensions}"
        )));
    }

    let frames = raw
        .into_iter()
        .enumerate()
        .map(|(step, frame)| {
            let shape = Shape {
                step,
                num_particles,
                dimensions,
            };
            Ok(Frame {
                positions: shape.vectors("pos", frame.pos)?,
                velocities: shape.vectors("vel", frame.vel)?,
                accelerations: shape.vectors("acc", frame.acc)?,
                kinetic: frame.kin,
                potential: frame.pot,
                total: frame.ene,
                temperature: frame.tem,
            })
        })
        .collect::<Result<Vec<_>, SpinaError>>()?;

    Ok(Trajectory::from_frames(frames, dimensions))
}

/// Expected layout of every per-particle array.
struct Shape {
    step: usize,
    num_particles: usize,
    dimensions: usize,
}

impl Shape {
    fn vectors(
        &self,
        field: &str,
        values: Vec<Vec<f32>>,
    ) -> Result<Vec<Vec3>, SpinaError> {
        if values.len() != self.num_particles {
            return Err(SpinaError::TrajectoryShape(format!(
                "step {}: `{field}` has {} particles, expected {}",
                self.step,
                values.len(),
                self.num_particles
            )));
        }
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| match v[..] {
                [x, y] if self.dimensions == 2 => Ok(Vec3::new(x, y, 0.0)),
                [x, y, z] if self.dimensions == 3 => Ok(Vec3::new(x, y, z)),
                _ => Err(SpinaError::TrajectoryShape(format!(
                    "step {}: `{field}[{i}]` has {} components, expected {}",
                    self.step,
                    v.len(),
                    self.dimensions
                ))),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_STEPS: &str = r#"[
        {"pos": [[1.0, 2.0], [3.0, 4.0]], "vel": [[0.1, 0.0], [0.0, 0.2]],
         "acc": [[0.0, 0.0], [1.0, -1.0]], "kin": 0.5, "pot": -1.5,
         "ene": -1.0, "tem": 0.25},
        {"pos": [[1.1, 2.0], [3.0, 4.2]], "vel": [[0.1, 0.0], [0.0, 0.2]],
         "acc": [[0.0, 0.0], [1.0, -1.0]], "kin": 0.6, "pot": -1.6,
         "ene": -1.0}
    ]"#;

    #[test]
    fn parses_simulator_output() {
        let traj = Trajectory::from_json_str(TWO_STEPS).unwrap();
        assert_eq!(traj.len(), 2);
        assert_eq!(traj.dimensions(), 2);
        assert_eq!(traj.num_particles(), 2);

        let first = traj.get(0).unwrap();
        assert_eq!(first.positions[1], Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(first.accelerations[1], Vec3::new(1.0, -1.0, 0.0));
        assert_eq!(first.temperature, Some(0.25));
        assert_eq!(traj.get(1).unwrap().temperature, None);
        assert_eq!(traj.get(1).unwrap().kinetic, 0.6);
    }

    #[test]
    fn parses_three_dimensions() {
        let json = r#"[{"pos": [[1, 2, 3]], "vel": [[0, 0, 1]],
            "acc": [[0, 0, 0]], "kin": 0, "pot": 0, "ene": 0}]"#;
        let traj = Trajectory::from_reader(json.as_bytes()).unwrap();
        assert_eq!(traj.dimensions(), 3);
        assert_eq!(traj.get(0).unwrap().positions[0], Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn empty_array_is_an_empty_trajectory() {
        let traj = Trajectory::from_json_str("[]").unwrap();
        assert!(traj.is_empty());
    }

    #[test]
    fn rejects_particle_count_mismatch() {
        let json = r#"[
            {"pos": [[0, 0], [1, 1]], "vel": [[0, 0], [0, 0]],
             "acc": [[0, 0], [0, 0]], "kin": 0, "pot": 0, "ene": 0},
            {"pos": [[0, 0]], "vel": [[0, 0]],
             "acc": [[0, 0]], "kin": 0, "pot": 0, "ene": 0}
        ]"#;
        let err = Trajectory::from_json_str(json).unwrap_err();
        assert!(matches!(err, SpinaError::TrajectoryShape(_)), "{err}");
        assert!(err.to_string().contains("step 1"));
    }

    #[test]
    fn rejects_mixed_dimensions() {
        let json = r#"[{"pos": [[0, 0]], "vel": [[0, 0, 0]],
            "acc": [[0, 0]], "kin": 0, "pot": 0, "ene": 0}]"#;
        let err = Trajectory::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("`vel[0]`"), "{err}");
    }

    #[test]
    fn rejects_four_dimensions() {
        let json = r#"[{"pos": [[0, 0, 0, 0]], "vel": [[0, 0, 0, 0]],
            "acc": [[0, 0, 0, 0]], "kin": 0, "pot": 0, "ene": 0}]"#;
        assert!(matches!(
            Trajectory::from_json_str(json),
            Err(SpinaError::TrajectoryShape(_))
        ));
    }

    #[test]
    fn missing_fields_are_parse_errors() {
        let json = r#"[{"pos": [[0, 0]], "vel": [[0, 0]]}]"#;
        assert!(matches!(
            Trajectory::from_json_str(json),
            Err(SpinaError::TrajectoryParse(_))
        ));
        assert!(matches!(
            Trajectory::from_json_str("{not json"),
            Err(SpinaError::TrajectoryParse(_))
        ));
    }

    #[test]
    fn load_file_reports_missing_files() {
        let err = load_file(Path::new("/nonexistent/spina/result.json"))
            .unwrap_err();
        assert!(matches!(err, SpinaError::Io(_)));
    }
}
