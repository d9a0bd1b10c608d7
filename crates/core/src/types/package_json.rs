use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::interfaces::FileProbe;

pub const PACKAGE_JSON_FILE_NAME: &str = "package.json";

/// The parts of `package.json` that matter for startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageDescriptor {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub scripts: Option<PackageScripts>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageScripts {
    #[serde(default)]
    pub start: Option<String>,
}

/// A parsed `package.json` together with where it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedPackage {
    pub descriptor: PackageDescriptor,
    pub path: PathBuf,
}

impl PackageDescriptor {
    pub fn parse(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }

    pub fn start_script(&self) -> Option<&str> {
        self.scripts
            .as_ref()
            .and_then(|scripts| scripts.start.as_deref())
            .filter(|start| !start.is_empty())
    }

    pub fn main_file(&self) -> Option<&str> {
        self.main.as_deref().filter(|main| !main.is_empty())
    }
}

impl LocatedPackage {
    /// Locate and parse the `package.json` used for this resolution.
    ///
    /// A user-supplied path is only used when it ends in `package.json`; any
    /// other user-supplied path means no manifest is consulted. Without a user
    /// path the manifest at the source root is used. Missing or malformed
    /// files yield `None`.
    pub fn locate(
        probe: &dyn FileProbe,
        source_path: &Path,
        user_path: Option<&Path>,
    ) -> Option<Self> {
        let path = match user_path {
            Some(user_path) if user_path.to_string_lossy().ends_with(PACKAGE_JSON_FILE_NAME) => {
                debug!("Using user-provided path for package.json: {:?}", user_path);
                user_path.to_path_buf()
            }
            Some(_) => return None,
            None => source_path.join(PACKAGE_JSON_FILE_NAME),
        };

        if !probe.is_file(&path) {
            debug!("No package.json at {:?}", path);
            return None;
        }

        let contents = match probe.read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("Could not read {:?}: {}", path, e);
                return None;
            }
        };

        match PackageDescriptor::parse(&contents) {
            Ok(descriptor) => Some(Self { descriptor, path }),
            Err(e) => {
                debug!("Ignoring malformed package.json at {:?}: {}", path, e);
                None
            }
        }
    }

    /// Directory containing the manifest
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn is_at_root(&self, source_path: &Path) -> bool {
        crate::utils::paths::clean(self.dir()) == crate::utils::paths::clean(source_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::DefaultFileProbe;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_unknown_fields_are_ignored() -> serde_json::Result<()> {
        let descriptor = PackageDescriptor::parse(
            r#"{"name": "app", "main": "server.js", "scripts": {"start": "node server.js", "test": "jest"}}"#,
        )?;
        assert_eq!(descriptor.main_file(), Some("server.js"));
        assert_eq!(descriptor.start_script(), Some("node server.js"));
        Ok(())
    }

    #[test]
    fn test_empty_start_counts_as_missing() -> serde_json::Result<()> {
        let descriptor = PackageDescriptor::parse(r#"{"scripts": {"start": ""}}"#)?;
        assert_eq!(descriptor.start_script(), None);
        Ok(())
    }

    #[test]
    fn test_locate_root_manifest() -> std::io::Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join("package.json"), r#"{"main": "a.js"}"#)?;

        let located = LocatedPackage::locate(&DefaultFileProbe, temp.path(), None)
            .expect("manifest should be found");
        assert!(located.is_at_root(temp.path()));
        assert_eq!(located.descriptor.main_file(), Some("a.js"));
        Ok(())
    }

    #[test]
    fn test_malformed_manifest_is_a_miss() -> std::io::Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join("package.json"), "{ not json")?;

        assert!(LocatedPackage::locate(&DefaultFileProbe, temp.path(), None).is_none());
        Ok(())
    }

    #[test]
    fn test_user_path_not_naming_manifest_skips_root() -> std::io::Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join("package.json"), r#"{"main": "a.js"}"#)?;
        let user_path = temp.path().join("server.js");

        assert!(LocatedPackage::locate(&DefaultFileProbe, temp.path(), Some(user_path.as_path())).is_none());
        Ok(())
    }
}
