//! Engine defaults configuration.
//!
//! Provides the default parameters a shell seeds new sessions with, plus
//! file handling and validation. Supports JSON and TOML formats stored in
//! the platform config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wafergrid_core::MeasurementSystem;
use wafergrid_map::{GridKind, HexOrientation, WaferSpec};

use crate::error::{SettingsError, SettingsResult};

/// Default wafer/grid parameters for new sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapDefaults {
    /// Wafer diameter (mm)
    pub diameter: f64,
    /// Grid spacing (mm)
    pub pitch: f64,
    /// Lattice arrangement
    pub grid: GridKind,
    /// Interleave convention for hexagonal grids
    pub hex_orientation: HexOrientation,
    /// Keep-out margin from the wafer edge (mm)
    pub edge_exclusion: f64,
}

impl Default for MapDefaults {
    fn default() -> Self {
        Self {
            diameter: 80.0,
            pitch: 2.0,
            grid: GridKind::Rectangular,
            hex_orientation: HexOrientation::PointyTop,
            edge_exclusion: 1.0,
        }
    }
}

impl MapDefaults {
    /// Builds the wafer specification for a fresh session.
    pub fn to_spec(&self) -> WaferSpec {
        WaferSpec::new(self.diameter, self.pitch, self.grid)
            .with_hex_orientation(self.hex_orientation)
            .with_edge_exclusion(self.edge_exclusion)
    }
}

/// Timing defaults for measurement estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingDefaults {
    /// Measurement time per point (s)
    pub measurement_time_s: f64,
    /// Move/settle overhead per point (s)
    pub move_time_s: f64,
}

impl Default for TimingDefaults {
    fn default() -> Self {
        Self {
            measurement_time_s: 10.0,
            move_time_s: 1.0,
        }
    }
}

/// Export defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportDefaults {
    /// Write excluded points into the payload
    pub include_excluded: bool,
    /// Decimal places per coordinate
    pub decimal_places: usize,
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            include_excluded: false,
            decimal_places: 6,
        }
    }
}

/// Complete engine configuration.
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Display unit system
    #[serde(default)]
    pub measurement_system: MeasurementSystem,
    /// Map defaults for new sessions
    pub map: MapDefaults,
    /// Timing defaults
    pub timing: TimingDefaults,
    /// Export defaults
    pub export: ExportDefaults,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location (`<config dir>/wafergrid/config.toml`).
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(base.join("wafergrid").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("Failed to read config file: {}", e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| SettingsError::LoadError(format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| SettingsError::LoadError(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(SettingsError::LoadError(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(format!("Failed to serialize config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(SettingsError::SaveError(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Loads from `path` when present, falling back to defaults otherwise.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.map
            .to_spec()
            .validate()
            .map_err(|e| SettingsError::InvalidSetting {
                key: "map".to_string(),
                reason: e.to_string(),
            })?;

        if !self.timing.measurement_time_s.is_finite() || self.timing.measurement_time_s <= 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "timing.measurement_time_s".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if !self.timing.move_time_s.is_finite() || self.timing.move_time_s < 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "timing.move_time_s".to_string(),
                reason: "must not be negative".to_string(),
            });
        }

        if self.export.decimal_places == 0 || self.export.decimal_places > 12 {
            return Err(SettingsError::InvalidSetting {
                key: "export.decimal_places".to_string(),
                reason: "must be between 1 and 12".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.map.diameter, 80.0);
        assert_eq!(config.map.pitch, 2.0);
        assert_eq!(config.timing.measurement_time_s, 10.0);
        assert!(!config.export.include_excluded);
    }

    #[test]
    fn test_map_defaults_to_spec() {
        let spec = MapDefaults::default().to_spec();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.edge_exclusion, 1.0);
        assert_eq!(spec.grid, GridKind::Rectangular);
    }

    #[test]
    fn test_validation_catches_bad_values() {
        let mut config = Config::new();
        config.map.pitch = -2.0;
        assert!(matches!(
            config.validate().unwrap_err(),
            SettingsError::InvalidSetting { .. }
        ));

        let mut config = Config::new();
        config.timing.measurement_time_s = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.export.decimal_places = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::new();
        config.map.grid = GridKind::Hexagonal;
        config.map.pitch = 1.5;
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.map, config.map);
        assert_eq!(loaded.timing, config.timing);
        assert_eq!(loaded.export, config.export);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        Config::new().save_to_file(&path).unwrap();
        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.map, MapDefaults::default());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        assert!(Config::new().save_to_file(&path).is_err());
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml"));
        assert_eq!(config.map, MapDefaults::default());
    }
}
