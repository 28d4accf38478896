//! Error types for wafer-map operations.
//!
//! This module provides structured error types for specification and shape
//! validation plus the export-time failure mode. All error types use
//! `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Errors that can occur during wafer-map operations.
#[derive(Error, Debug)]
pub enum WaferGridError {
    /// The wafer specification is invalid.
    #[error("Invalid wafer specification: {0}")]
    InvalidSpecification(#[from] SpecificationError),

    /// An exclusion shape is invalid.
    #[error("Invalid exclusion shape: {0}")]
    InvalidShape(#[from] ShapeError),

    /// An export was attempted with zero rows to write.
    #[error("Nothing to export: {0}")]
    EmptyResult(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Errors related to wafer specification validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecificationError {
    /// The wafer diameter is zero or negative.
    #[error("Wafer diameter must be positive, got {value}")]
    NonPositiveDiameter { value: f64 },

    /// The grid pitch is zero or negative.
    #[error("Grid pitch must be positive, got {value}")]
    NonPositivePitch { value: f64 },

    /// The grid pitch does not fit on the wafer.
    #[error("Grid pitch {pitch} exceeds wafer diameter {diameter}")]
    PitchExceedsDiameter { pitch: f64, diameter: f64 },

    /// The edge-exclusion margin leaves no usable wafer area.
    #[error("Edge exclusion {value} must lie in 0..{radius} (the wafer radius)")]
    EdgeExclusionOutOfRange { value: f64, radius: f64 },

    /// A specification field is NaN or infinite.
    #[error("Value for '{name}' is not finite: {value}")]
    NotFinite { name: &'static str, value: f64 },
}

/// Errors related to exclusion-shape validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A circle radius is zero or negative.
    #[error("Circle radius must be positive, got {value}")]
    NonPositiveRadius { value: f64 },

    /// A rectangle width or height is zero or negative.
    #[error("Rectangle {name} must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: f64 },

    /// A shape field is NaN or infinite.
    #[error("Value for '{name}' is not finite: {value}")]
    NotFinite { name: &'static str, value: f64 },
}

/// Result type alias for wafer-map operations.
pub type WaferGridResult<T> = Result<T, WaferGridError>;

/// Result type alias for specification validation.
pub type SpecificationResult<T> = Result<T, SpecificationError>;

/// Result type alias for shape validation.
pub type ShapeResult<T> = Result<T, ShapeError>;
