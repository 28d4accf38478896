//! # WaferGrid Map
//!
//! The wafer measurement-grid engine: lattice generation over a circular
//! wafer, exclusion-zone classification, and the per-session state that
//! drives both.
//!
//! ## Pipeline
//!
//! The engine is a sequence of pure transformations, recomputed from scratch
//! on every parameter or shape change:
//!
//! ```text
//! WaferSpec ──► GridGenerator ──► candidate points
//!                                       │
//! ExclusionShape set ──► classify ──────┴──► GridResult
//! ```
//!
//! Nothing here touches pixels, widgets, or process-global state. The
//! surrounding shell converts drawn regions into wafer-coordinate
//! [`ExclusionShape`] values before calling in, and renders the returned
//! [`GridResult`] however it likes. Multi-user deployments thread one
//! [`MapSession`] per user.

pub mod filter;
pub mod grid;
pub mod recipe;
pub mod result;
pub mod session;
pub mod shapes;
pub mod wafer;

pub use filter::{classify, ClassifiedPoint};
pub use grid::GridGenerator;
pub use recipe::{MapRecipe, RecipeMetadata};
pub use result::GridResult;
pub use session::{MapSession, TimeEstimate};
pub use shapes::{ExclusionCircle, ExclusionRect, ExclusionShape, ShapeKind};
pub use wafer::{GridKind, HexOrientation, WaferSpec};
