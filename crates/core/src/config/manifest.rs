use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Name of the manifest written by the build step
pub const MANIFEST_FILE_NAME: &str = "oryx-manifest.toml";

/// Metadata left behind by a previous build of the app
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildManifest {
    /// Archive holding the app's `node_modules`, relative to the source root
    #[serde(default)]
    pub compressed_node_modules_file: Option<String>,
}

impl BuildManifest {
    pub fn with_compressed_node_modules(file: impl Into<String>) -> Self {
        Self {
            compressed_node_modules_file: Some(file.into()),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| Error::ManifestError(format!("Failed to parse manifest: {e}")))
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load the manifest from `dir`, or an empty manifest when there is none
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE_NAME);
        if !path.is_file() {
            debug!("No build manifest at {:?}", path);
            return Ok(Self::default());
        }
        debug!("Loading build manifest from {:?}", path);
        Self::load_from_file(&path)
    }

    pub fn compressed_node_modules(&self) -> Option<&str> {
        self.compressed_node_modules_file
            .as_deref()
            .filter(|file| !file.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_manifest_ignores_unknown_keys() -> Result<()> {
        let manifest = BuildManifest::from_toml_str(
            "nodeVersion=\"18.17.0\"\ncompressedNodeModulesFile=\"node_modules.tar.gz\"\n",
        )?;
        assert_eq!(manifest.compressed_node_modules(), Some("node_modules.tar.gz"));
        Ok(())
    }

    #[test]
    fn test_missing_manifest_is_empty() -> Result<()> {
        let temp = TempDir::new()?;
        let manifest = BuildManifest::load_from_dir(temp.path())?;
        assert_eq!(manifest, BuildManifest::default());
        Ok(())
    }

    #[test]
    fn test_invalid_manifest_is_an_error() -> Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join(MANIFEST_FILE_NAME), "compressedNodeModulesFile = [")?;
        let result = BuildManifest::load_from_dir(temp.path());
        assert!(matches!(result, Err(Error::ManifestError(_))));
        Ok(())
    }
}
