//! Save/load for wafer-map recipes.
//!
//! A recipe captures everything needed to rebuild a session's map: the
//! wafer specification and the exclusion zones, with document metadata.
//! Stored as JSON with tolerant loading so older files keep working.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wafergrid_core::WaferGridResult;

use crate::session::MapSession;
use crate::shapes::ExclusionShape;
use crate::wafer::WaferSpec;

/// Recipe file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete recipe file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapRecipe {
    pub version: String,
    pub metadata: RecipeMetadata,
    pub spec: WaferSpec,
    #[serde(default)]
    pub shapes: Vec<ExclusionShape>,
}

/// Recipe metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl MapRecipe {
    pub fn new(name: impl Into<String>, spec: WaferSpec, shapes: Vec<ExclusionShape>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: RecipeMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            spec,
            shapes,
        }
    }

    /// Snapshots a session into a recipe.
    pub fn from_session(name: impl Into<String>, session: &MapSession) -> Self {
        Self::new(name, *session.spec(), session.shapes().to_vec())
    }

    /// Rebuilds a session from this recipe.
    ///
    /// Spec and shapes are re-validated since recipe files arrive from
    /// outside the engine.
    pub fn into_session(self) -> WaferGridResult<MapSession> {
        let mut session = MapSession::new(self.spec)?;
        for shape in self.shapes {
            session.add_shape(shape)?;
        }
        Ok(session)
    }

    /// Marks the recipe as modified now.
    pub fn touch(&mut self) {
        self.metadata.modified = Utc::now();
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize recipe")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write recipe file: {}", path.display()))?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe file: {}", path.display()))?;
        let recipe: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid recipe file: {}", path.display()))?;
        Ok(recipe)
    }
}
