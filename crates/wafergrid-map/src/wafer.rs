//! Wafer and lattice parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wafergrid_core::{SpecificationError, SpecificationResult};

/// Lattice arrangement of measurement points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridKind {
    Rectangular,
    Hexagonal,
}

impl GridKind {
    /// Returns the display name of the grid kind.
    pub fn name(&self) -> &'static str {
        match self {
            GridKind::Rectangular => "Rectangular",
            GridKind::Hexagonal => "Hexagonal",
        }
    }
}

impl Default for GridKind {
    fn default() -> Self {
        Self::Rectangular
    }
}

impl fmt::Display for GridKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GridKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rectangular" | "rect" => Ok(Self::Rectangular),
            "hexagonal" | "hex" => Ok(Self::Hexagonal),
            _ => Err(format!("Unknown grid kind: {}", s)),
        }
    }
}

/// Interleave convention for hexagonal grids.
///
/// Pointy-top shifts every other row by half a pitch in x; flat-top shifts
/// every other column by half a pitch in y. Both use (√3/2)·pitch spacing
/// between the interleaved lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexOrientation {
    PointyTop,
    FlatTop,
}

impl HexOrientation {
    pub fn name(&self) -> &'static str {
        match self {
            HexOrientation::PointyTop => "Pointy-top",
            HexOrientation::FlatTop => "Flat-top",
        }
    }
}

impl Default for HexOrientation {
    fn default() -> Self {
        Self::PointyTop
    }
}

impl fmt::Display for HexOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parameters describing the wafer and the measurement lattice laid over it.
///
/// All lengths are millimeters. The lattice is anchored at the wafer center,
/// so (0, 0) is always a candidate node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaferSpec {
    /// Wafer diameter (mm)
    pub diameter: f64,
    /// Spacing between adjacent lattice points (mm)
    pub pitch: f64,
    /// Lattice arrangement
    pub grid: GridKind,
    /// Interleave convention for hexagonal grids
    #[serde(default)]
    pub hex_orientation: HexOrientation,
    /// Keep-out margin from the wafer edge (mm)
    #[serde(default)]
    pub edge_exclusion: f64,
}

impl WaferSpec {
    pub fn new(diameter: f64, pitch: f64, grid: GridKind) -> Self {
        Self {
            diameter,
            pitch,
            grid,
            hex_orientation: HexOrientation::default(),
            edge_exclusion: 0.0,
        }
    }

    pub fn with_edge_exclusion(mut self, edge_exclusion: f64) -> Self {
        self.edge_exclusion = edge_exclusion;
        self
    }

    pub fn with_hex_orientation(mut self, hex_orientation: HexOrientation) -> Self {
        self.hex_orientation = hex_orientation;
        self
    }

    /// Wafer radius (mm).
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Radius actually available for points once the edge margin is applied.
    pub fn usable_radius(&self) -> f64 {
        self.radius() - self.edge_exclusion
    }

    /// Checks the invariants: positive finite diameter and pitch, pitch no
    /// larger than the diameter, edge exclusion inside the wafer radius.
    pub fn validate(&self) -> SpecificationResult<()> {
        for (name, value) in [
            ("diameter", self.diameter),
            ("pitch", self.pitch),
            ("edge_exclusion", self.edge_exclusion),
        ] {
            if !value.is_finite() {
                return Err(SpecificationError::NotFinite { name, value });
            }
        }
        if self.diameter <= 0.0 {
            return Err(SpecificationError::NonPositiveDiameter {
                value: self.diameter,
            });
        }
        if self.pitch <= 0.0 {
            return Err(SpecificationError::NonPositivePitch { value: self.pitch });
        }
        if self.pitch > self.diameter {
            return Err(SpecificationError::PitchExceedsDiameter {
                pitch: self.pitch,
                diameter: self.diameter,
            });
        }
        if self.edge_exclusion < 0.0 || self.edge_exclusion >= self.radius() {
            return Err(SpecificationError::EdgeExclusionOutOfRange {
                value: self.edge_exclusion,
                radius: self.radius(),
            });
        }
        Ok(())
    }
}

impl Default for WaferSpec {
    fn default() -> Self {
        Self::new(80.0, 2.0, GridKind::Rectangular)
    }
}
