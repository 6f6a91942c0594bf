//! Panel status for bundles backed by optional metadata files

use serde::{Deserialize, Serialize};

use crate::storage::MetadataState;

/// Whether a panel's source file could be used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PanelStatus {
    /// Source file was loaded
    Ready,
    /// Source file does not exist; the panel is empty
    Missing { path: String },
    /// Source file exists but could not be parsed; the panel is empty
    Malformed { path: String, message: String },
}

impl PanelStatus {
    /// Status matching a session's metadata state
    pub fn from_state<T>(state: &MetadataState<T>) -> Self {
        match state {
            MetadataState::Loaded(_) => Self::Ready,
            MetadataState::Missing { path } => Self::Missing {
                path: path.display().to_string(),
            },
            MetadataState::Malformed { path, message } => Self::Malformed {
                path: path.display().to_string(),
                message: message.clone(),
            },
        }
    }

    /// Check if the panel has data to show
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// User-facing warning, or `None` when the panel is ready
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Ready => None,
            Self::Missing { path } => Some(format!("Warning: {} not found", path)),
            Self::Malformed { path, message } => {
                Some(format!("Warning: could not parse {}: {}", path, message))
            }
        }
    }
}
