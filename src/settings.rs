//! Runtime configuration, read from JSON.
//!
//! Every field has a default, so a file only needs the values it changes:
//!
//! ```rust
//! # use finite_relations::settings::Settings;
//! let s = Settings::from_json_str(r#"{ "timeline": { "fade_ms": 500 } }"#).unwrap();
//! assert_eq!(s.timeline.fade_ms, 500);
//! assert_eq!(s.timeline.bridge_ms, 2000);
//! assert_eq!(s.composition.domain.size(), 5);
//! ```
use crate::error::{RelationError, Result};
use crate::generate::{MatrixGenerator, RelationGenerator};
use crate::practice::PracticeConfig;
use crate::timeline::TimelineConfig;

use std::path::Path;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub representations: RelationGenerator,
    pub composition: RelationGenerator,
    pub matrix_composition: RelationGenerator,
    pub boolean_products: MatrixGenerator,
    pub practice: PracticeConfig,
    pub timeline: TimelineConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            representations: RelationGenerator::representations(),
            composition: RelationGenerator::composition(),
            matrix_composition: RelationGenerator::matrix_composition(),
            boolean_products: MatrixGenerator::boolean_products(),
            practice: PracticeConfig::default(),
            timeline: TimelineConfig::default(),
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| RelationError::settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| RelationError::settings(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.representations.validate()?;
        self.composition.validate()?;
        self.matrix_composition.validate()?;
        self.boolean_products.validate()?;
        self.practice.validate()?;
        self.timeline.validate()
    }
}
