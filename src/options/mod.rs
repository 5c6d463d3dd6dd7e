//! Playback and view options with TOML preset support.
//!
//! All tweakable settings (playback rate, flat and 3D scene projection,
//! histogram bins, potential field sampling) are consolidated here. Options serialize to/from
//! TOML so a viewer can keep presets on disk.

mod histogram;
mod playback;
mod potential;
mod scene;
mod scene3d;

use std::path::Path;

pub use histogram::HistogramOptions;
pub use playback::PlaybackOptions;
pub use potential::PotentialOptions;
use schemars::JsonSchema;
pub use scene::SceneOptions;
pub use scene3d::Scene3dOptions;
use serde::{Deserialize, Serialize};

use crate::error::SpinaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[playback]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Playback rate and host loop cadence.
    pub playback: PlaybackOptions,
    /// Particle scene projection and coloring.
    pub scene: SceneOptions,
    /// Sphere scene camera for 3D trajectories.
    pub scene3d: Scene3dOptions,
    /// Velocity histogram binning.
    pub histogram: HistogramOptions,
    /// Potential field sampling and Lennard-Jones parameters.
    pub potential: PotentialOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SpinaError> {
        let content = std::fs::read_to_string(path).map_err(SpinaError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| SpinaError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SpinaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SpinaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SpinaError::Io)?;
        }
        std::fs::write(path, content).map_err(SpinaError::Io)
    }

    /// Reject values no view can work with.
    pub fn validate(&self) -> Result<(), SpinaError> {
        self.playback.validate()?;
        self.histogram.validate()?;
        if self.potential.resolution == 0 {
            return Err(SpinaError::OptionsParse(
                "potential.resolution must be at least 1".to_owned(),
            ));
        }
        if self.scene.box_size <= 0.0 || self.potential.box_size <= 0.0 {
            return Err(SpinaError::OptionsParse(
                "box_size must be positive".to_owned(),
            ));
        }
        let scene3d = &self.scene3d;
        if scene3d.sphere_radius <= 0.0 || scene3d.camera_distance <= 0.0 {
            return Err(SpinaError::OptionsParse(
                "scene3d sphere_radius and camera_distance must be positive"
                    .to_owned(),
            ));
        }
        if !(scene3d.fovy > 0.0 && scene3d.fovy < 180.0) {
            return Err(SpinaError::OptionsParse(format!(
                "scene3d.fovy must be between 0 and 180 degrees, got {}",
                scene3d.fovy
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[playback]
steps_per_second = 12.5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.playback.steps_per_second, 12.5);
        // Everything else should be default
        assert_eq!(opts.playback.host_frame_rate, 60);
        assert_eq!(opts.histogram.bin_size, 0.1);
        assert_eq!(opts.scene.size, 300.0);
    }

    #[test]
    fn validate_rejects_zero_rate() {
        let mut opts = Options::default();
        assert!(opts.validate().is_ok());
        opts.playback.steps_per_second = 0.0;
        assert!(matches!(opts.validate(), Err(SpinaError::InvalidRate(_))));
    }

    #[test]
    fn validate_rejects_degenerate_views() {
        let mut opts = Options::default();
        opts.potential.resolution = 0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.histogram.bin_size = 0.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.scene.box_size = -1.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.scene3d.fovy = 180.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.scene3d.sphere_radius = 0.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!(
            "spina-options-{}",
            std::process::id()
        ));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.playback.steps_per_second = 45.0;
        opts.potential.resolution = 32;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_rejects_bad_toml() {
        let dir = std::env::temp_dir().join(format!(
            "spina-options-bad-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[playback\nsteps_per_second = ").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(SpinaError::OptionsParse(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("playback"));
        assert!(props.contains_key("scene"));
        assert!(props.contains_key("histogram"));
        assert!(props.contains_key("potential"));
        assert!(props.contains_key("scene3d"));

        // Exposed fields are present, skipped ones are absent
        let playback = &props["playback"]["properties"];
        assert!(playback.get("steps_per_second").is_some());
        assert!(playback.get("host_frame_rate").is_none());
        let histogram = &props["histogram"]["properties"];
        assert!(histogram.get("bin_size").is_some());
        assert!(histogram.get("bin_start").is_none());
        let scene3d = &props["scene3d"]["properties"];
        assert!(scene3d.get("sphere_radius").is_some());
        assert!(scene3d.get("target").is_none());
    }
}
