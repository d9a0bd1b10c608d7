use crate::error::{Error, Result};

/// Where compressed `node_modules` are unpacked
pub const NODE_MODULES_TARGET_DIR: &str = "/node_modules";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    TarGz,
}

impl ArchiveKind {
    /// Archive kind from the file name suffix
    pub fn from_file_name(file: &str) -> Result<Self> {
        if file.ends_with(".zip") {
            Ok(ArchiveKind::Zip)
        } else if file.ends_with(".tar.gz") {
            Ok(ArchiveKind::TarGz)
        } else {
            Err(Error::UnsupportedArchive {
                file: file.to_string(),
            })
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ArchiveKind::Zip => "zip-based",
            ArchiveKind::TarGz => "tar.gz based",
        }
    }

    fn extraction_command(&self, file: &str, target: &str) -> String {
        match self {
            ArchiveKind::Zip => format!("unzip -q {file} -d {target}"),
            ArchiveKind::TarGz => format!("tar -xzf {file} -C {target}"),
        }
    }
}

/// Statements unpacking `archive` into [`NODE_MODULES_TARGET_DIR`] and linking it in.
///
/// The target is wiped and recreated before extraction, and the local
/// `node_modules` is only swapped for the symlink once extraction is done.
pub fn extraction_statements(archive: &str) -> Result<Vec<String>> {
    let kind = ArchiveKind::from_file_name(archive)?;
    let target = NODE_MODULES_TARGET_DIR;

    Ok(vec![
        format!("echo Found {} node_modules.", kind.description()),
        format!(
            "extractionCommand=\"{}\"",
            kind.extraction_command(archive, target)
        ),
        "echo \"Removing existing modules directory from root...\"".to_string(),
        format!("rm -fr {target}"),
        format!("mkdir -p {target}"),
        "echo Extracting modules...".to_string(),
        "$extractionCommand".to_string(),
        // Some older node versions do not look in /node_modules on their own.
        format!("export NODE_PATH=\"{target}\":$NODE_PATH"),
        // npm puts ./node_modules/.bin on PATH, which no longer holds the binaries.
        format!("export PATH={target}/.bin:$PATH"),
        "if [ -d node_modules ] || [ -L node_modules ]; then".to_string(),
        "    mv -f node_modules _del_node_modules || true".to_string(),
        "fi".to_string(),
        String::new(),
        format!("if [ -d {target} ]; then"),
        format!("    ln -s {target} ./node_modules"),
        "fi".to_string(),
        String::new(),
        "echo \"Done.\"".to_string(),
    ])
}
