//! # WaferGrid Export
//!
//! Serializes classified wafer maps to the flat tabular payload offered for
//! download: one header line, then `index,x,y,included` per point. UTF-8,
//! `.` decimal separator, newline-terminated rows.

pub mod coordinates;

pub use coordinates::{export_csv, CoordinateExporter, ExportOptions};
