//! # WaferGrid
//!
//! A measurement-grid planning engine for circular wafers:
//! - Rectangular and hexagonal (close-packed) lattices anchored at the wafer center
//! - User-defined exclusion zones (circles, rotated rectangles) in wafer coordinates
//! - Edge-exclusion margins and measurement-time estimates
//! - Coordinate export as a flat tabular payload for download
//!
//! ## Architecture
//!
//! WaferGrid is organized as a workspace with multiple crates:
//!
//! 1. **wafergrid-core** - Wafer-plane points, error taxonomy, unit conversion
//! 2. **wafergrid-map** - Specifications, exclusion shapes, grid generation,
//!    classification, sessions, and recipe files
//! 3. **wafergrid-export** - Tabular coordinate export
//! 4. **wafergrid-settings** - Engine defaults and their persistence
//!
//! The engine holds no UI state: a surrounding shell parses widget values
//! into `WaferSpec` and `ExclusionShape` inputs, threads a `MapSession` per
//! user, and renders the returned `GridResult`. Every computation is a pure
//! function of its inputs and is recomputed from scratch on change.

#![allow(dead_code)]

pub use wafergrid_map as map;

pub use wafergrid_core::{
    format_length, get_unit_label, parse_length, rotate_point, MeasurementSystem, Point,
    ShapeError, SpecificationError, WaferGridError, WaferGridResult,
};

pub use wafergrid_map::{
    classify, ClassifiedPoint, ExclusionCircle, ExclusionRect, ExclusionShape, GridGenerator,
    GridKind, GridResult, HexOrientation, MapRecipe, MapSession, RecipeMetadata, ShapeKind,
    TimeEstimate, WaferSpec,
};

pub use wafergrid_export::{export_csv, CoordinateExporter, ExportOptions};

pub use wafergrid_settings::{
    Config, ExportDefaults, MapDefaults, SettingsError, SettingsResult, TimingDefaults,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
