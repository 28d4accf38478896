//! # WaferGrid Settings
//!
//! Engine defaults for new sessions and their persistence. Settings are
//! organized into logical sections:
//! - Map defaults (wafer diameter, pitch, grid kind, edge exclusion)
//! - Timing defaults (per-point measurement and move overhead)
//! - Export defaults (excluded rows, precision)
//!
//! Stored as JSON or TOML in the platform config directory.

pub mod config;
pub mod error;

pub use config::{Config, ExportDefaults, MapDefaults, TimingDefaults};
pub use error::{SettingsError, SettingsResult};
