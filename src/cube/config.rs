//! Tunable values of the toy, loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::utils::constants::camera_3d_constants::{CAMERA_3D_DISTANCE, CAMERA_3D_ORBIT_SENSITIVITY};
use crate::utils::constants::color_constants::HIGHLIGHT_STRENGTH;
use crate::utils::constants::cube_constants::{
    AUTO_ROTATION_SPEED, FACE_TOLERANCE, ROTATION_DURATION_MS,
};
use crate::utils::constants::input_constants::CLICK_THRESHOLD_NDC;

/// Defaults shipped with the binary.
pub const EMBEDDED_CONFIG: &str = include_str!("../../assets/cube.toml");

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "CUBE_CONFIG";

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_CONFIG_PATH: &str = "cube.toml";

/// Error produced when loading a [`CubeConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for this config
    #[error("{0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub rotation_duration_ms: u64,
    pub face_tolerance: f32,
    pub click_threshold: f32,
    pub auto_rotation_speed: f32,
    pub highlight_strength: f32,
    pub camera_distance: f32,
    pub orbit_sensitivity: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            rotation_duration_ms: ROTATION_DURATION_MS,
            face_tolerance: FACE_TOLERANCE,
            click_threshold: CLICK_THRESHOLD_NDC,
            auto_rotation_speed: AUTO_ROTATION_SPEED,
            highlight_strength: HIGHLIGHT_STRENGTH,
            camera_distance: CAMERA_3D_DISTANCE,
            orbit_sensitivity: CAMERA_3D_ORBIT_SENSITIVITY,
        }
    }
}

impl CubeConfig {
    pub fn rotation_duration(&self) -> Duration {
        Duration::from_millis(self.rotation_duration_ms)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: CubeConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rotation_duration_ms == 0 {
            return Err(ConfigError::Invalid("rotation_duration_ms must be positive"));
        }
        if !(self.face_tolerance > 0.0 && self.face_tolerance < 0.5) {
            return Err(ConfigError::Invalid("face_tolerance must be in (0, 0.5)"));
        }
        if !(self.click_threshold > 0.0) {
            return Err(ConfigError::Invalid("click_threshold must be positive"));
        }
        if !(self.camera_distance > 0.0) {
            return Err(ConfigError::Invalid("camera_distance must be positive"));
        }
        Ok(())
    }

    /// Embedded defaults, overridden on native targets by `$CUBE_CONFIG` or
    /// `./cube.toml` when present. Falls back to defaults on any error.
    pub fn load_or_default() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(config) = Self::load_override() {
            return config;
        }

        Self::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            log::warn!("embedded config rejected, using defaults: {e}");
            Self::default()
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_override() -> Option<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        if !path.exists() {
            return None;
        }

        match Self::load(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                log::warn!("ignoring {}: {e}", path.display());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = CubeConfig::from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config, CubeConfig::default());
        assert_eq!(config.rotation_duration(), Duration::from_millis(200));
    }

    #[test]
    fn missing_keys_fall_back() {
        let config = CubeConfig::from_toml_str("rotation_duration_ms = 350").unwrap();
        assert_eq!(config.rotation_duration_ms, 350);
        assert_eq!(config.face_tolerance, FACE_TOLERANCE);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            CubeConfig::from_toml_str("rotation_duration_ms = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CubeConfig::from_toml_str("face_tolerance = 0.7"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            CubeConfig::from_toml_str("rotation_duration_ms = \"fast\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = CubeConfig::load(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
