//! JSON Manifest Repository
//!
//! Loads raw assets from the manifest written by the fetch step, either from
//! a file or from stdin (`-`).

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::RawAsset;
use crate::domain::ports::AssetRepository;
use crate::error::{IconsyncError, IconsyncResult};

/// Accepted manifest layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum Manifest {
    List(Vec<RawAsset>),
    Wrapped { assets: Vec<RawAsset> },
}

impl Manifest {
    fn into_assets(self) -> Vec<RawAsset> {
        match self {
            Manifest::List(assets) | Manifest::Wrapped { assets } => assets,
        }
    }
}

/// Asset repository backed by a JSON manifest
pub struct JsonManifestRepository {
    source: PathBuf,
}

impl JsonManifestRepository {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Whether this repository reads stdin
    pub fn is_stdin(&self) -> bool {
        self.source == Path::new("-")
    }

    /// Decode manifest text
    pub fn parse(&self, json: &str) -> IconsyncResult<Vec<RawAsset>> {
        serde_json::from_str::<Manifest>(json)
            .map(Manifest::into_assets)
            .map_err(|e| IconsyncError::InvalidManifest {
                file: self.source.clone(),
                message: e.to_string(),
            })
    }
}

impl AssetRepository for JsonManifestRepository {
    fn load_all(&self) -> IconsyncResult<Vec<RawAsset>> {
        let json = if self.is_stdin() {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(&self.source)?
        };
        let assets = self.parse(&json)?;
        tracing::debug!(count = assets.len(), source = %self.source.display(), "loaded manifest");
        Ok(assets)
    }
}
