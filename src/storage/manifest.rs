//! dbt `manifest.json` reader
//!
//! Only model nodes are kept; tests, seeds and sources are ignored.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use super::file_io::read_json_optional;
use crate::error::PlacesResult;
use crate::models::{ColumnDoc, ModelDocEntry};

#[derive(Debug, Default, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    nodes: BTreeMap<String, ManifestNode>,
}

#[derive(Debug, Deserialize)]
struct ManifestNode {
    #[serde(default)]
    resource_type: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    columns: BTreeMap<String, ManifestColumn>,
}

/// dbt writes column objects; hand-written manifests often use plain strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestColumn {
    Text(String),
    Detailed {
        #[serde(default)]
        description: Option<String>,
    },
}

impl ManifestColumn {
    fn into_description(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Detailed { description } => description.unwrap_or_default(),
        }
    }
}

impl ManifestNode {
    fn into_doc_entry(self, key: &str) -> ModelDocEntry {
        let name = if self.name.is_empty() {
            key.rsplit('.').next().unwrap_or(key).to_string()
        } else {
            self.name
        };

        ModelDocEntry {
            name,
            description: self.description.unwrap_or_default(),
            columns: self
                .columns
                .into_iter()
                .map(|(name, column)| ColumnDoc {
                    name,
                    description: column.into_description(),
                })
                .collect(),
        }
    }
}

/// Read model documentation, returning `None` when the file is absent
pub fn read_model_docs(path: &Path) -> PlacesResult<Option<Vec<ModelDocEntry>>> {
    let file: Option<ManifestFile> = read_json_optional(path).inspect_err(|e| {
        warn!(path = %path.display(), error = %e, "manifest could not be parsed");
    })?;

    let Some(file) = file else {
        info!(path = %path.display(), "manifest not found");
        return Ok(None);
    };

    let mut models: Vec<ModelDocEntry> = file
        .nodes
        .into_iter()
        .filter(|(_, node)| node.resource_type == "model")
        .map(|(key, node)| node.into_doc_entry(&key))
        .collect();
    models.sort_by(|a, b| a.name.cmp(&b.name));

    info!(path = %path.display(), models = models.len(), "loaded manifest");
    Ok(Some(models))
}

/// Load model documentation; a missing file yields an empty list
pub fn load_model_docs(path: &Path) -> PlacesResult<Vec<ModelDocEntry>> {
    Ok(read_model_docs(path)?.unwrap_or_default())
}
