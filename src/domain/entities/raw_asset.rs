//! RawAsset entity - one exported design-tool element

use serde::{Deserialize, Serialize};

/// A named vector graphic as delivered by the fetch collaborator
///
/// Raw assets are immutable: every transformation produces new values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAsset {
    name: String,
    #[serde(default, alias = "originalName")]
    original_name: String,
    #[serde(alias = "svg")]
    content: String,
    #[serde(default, alias = "remoteId", alias = "nodeId")]
    remote_id: String,
}

impl RawAsset {
    /// Create an asset whose original name equals its name
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            original_name: name.clone(),
            name,
            content: content.into(),
            remote_id: String::new(),
        }
    }

    pub fn with_original_name(mut self, original_name: impl Into<String>) -> Self {
        self.original_name = original_name.into();
        self
    }

    pub fn with_remote_id(mut self, remote_id: impl Into<String>) -> Self {
        self.remote_id = remote_id.into();
        self
    }

    /// Name fed to the name transformer
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name as it appears in the design tool; used for filters and error attribution
    pub fn original_name(&self) -> &str {
        if self.original_name.is_empty() {
            &self.name
        } else {
            &self.original_name
        }
    }

    /// Raw graphic markup
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn remote_id(&self) -> &str {
        &self.remote_id
    }
}
