use super::definition::GraphSpec;
use crate::backend::BackendKind;
use crate::error::SpecError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One backend id or a list of them, as written in a spec file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackendSelection {
    One(BackendKind),
    Many(Vec<BackendKind>),
}

impl BackendSelection {
    /// The selected backends without duplicates, in the order written.
    pub fn kinds(&self) -> Vec<BackendKind> {
        let mut kinds = match self {
            BackendSelection::One(kind) => vec![*kind],
            BackendSelection::Many(kinds) => kinds.clone(),
        };
        let mut seen = Vec::with_capacity(kinds.len());
        kinds.retain(|kind| {
            if seen.contains(kind) {
                false
            } else {
                seen.push(*kind);
                true
            }
        });
        kinds
    }
}

/// The persisted form of a generation request, read from a `.spec` JSON file.
///
/// ```json
/// { "width": [1, 10], "height": [15, 20], "density": 0.8,
///   "seed": 8022432027272689264, "projectType": "swinject" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecDocument {
    #[serde(flatten)]
    pub graph: GraphSpec,
    #[serde(
        default,
        alias = "projectType",
        skip_serializing_if = "Option::is_none"
    )]
    pub backends: Option<BackendSelection>,
}

impl SpecDocument {
    /// Parses and validates a spec document.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let document: Self =
            serde_json::from_str(json).map_err(|e| SpecError::Parse(e.to_string()))?;
        document.graph.validate()?;
        Ok(document)
    }

    /// Loads a spec document from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| SpecError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// The backends this document asks for; every backend when it names none.
    pub fn selected_backends(&self) -> Vec<BackendKind> {
        self.backends
            .as_ref()
            .map(BackendSelection::kinds)
            .unwrap_or_else(|| BackendKind::ALL.to_vec())
    }
}
