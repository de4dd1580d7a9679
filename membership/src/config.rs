//! TOML configuration for membership proving.
//!
//! ```toml
//! tree_depth = 8
//!
//! [artifacts]
//! local = "./circuits"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{MembershipError, Result};
use crate::merkle::{tree_capacity, DEFAULT_TREE_DEPTH};

/// Bucket the published circuit artifacts are served from.
pub const DEFAULT_ARTIFACT_BASE_URL: &str = "https://storage.googleapis.com/jubmoji-circuits/";

/// Where the circuit's wasm, proving key and verification key live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactSource {
    /// A directory on the local filesystem.
    Local(PathBuf),
    /// A base URL the artifact file names are appended to.
    Remote(String),
}

impl Default for ArtifactSource {
    fn default() -> Self {
        ArtifactSource::Remote(DEFAULT_ARTIFACT_BASE_URL.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipConfig {
    /// Must match the depth the circuit was compiled with.
    #[serde(default = "default_tree_depth")]
    pub tree_depth: usize,
    #[serde(default)]
    pub artifacts: ArtifactSource,
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self {
            tree_depth: DEFAULT_TREE_DEPTH,
            artifacts: ArtifactSource::default(),
        }
    }
}

fn default_tree_depth() -> usize {
    DEFAULT_TREE_DEPTH
}

impl MembershipConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: MembershipConfig =
            toml::from_str(s).map_err(|e| MembershipError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| MembershipError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        tree_capacity(self.tree_depth)?;
        if let ArtifactSource::Remote(base) = &self.artifacts {
            if base.is_empty() {
                return Err(MembershipError::Config(
                    "remote artifact base URL is empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
