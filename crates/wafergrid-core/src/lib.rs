//! # WaferGrid Core
//!
//! Core types and utilities shared by the WaferGrid crates:
//! wafer-plane points, the error taxonomy, and measurement-unit
//! conversion helpers.

pub mod error;
pub mod point;
pub mod units;

pub use error::{
    ShapeError, ShapeResult, SpecificationError, SpecificationResult, WaferGridError,
    WaferGridResult,
};
pub use point::{rotate_point, Point};
pub use units::{format_length, get_unit_label, parse_length, MeasurementSystem};
