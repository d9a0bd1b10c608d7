use crate::interfaces::FileProbe;
use std::path::Path;
use tracing::debug;

pub const YARN_LOCK_FILE_NAME: &str = "yarn.lock";

/// Front-end used to run the `start` script of `package.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    /// Yarn when its lockfile sits at the source root, npm otherwise
    pub fn detect(probe: &dyn FileProbe, source_path: &Path) -> Self {
        if probe.exists(&source_path.join(YARN_LOCK_FILE_NAME)) {
            debug!("Found {} at the source root", YARN_LOCK_FILE_NAME);
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    /// Command running the `start` script.
    ///
    /// `package_dir` is set when `package.json` is not at the source root.
    /// When debugging through npm its own PATH prepending is turned off,
    /// since it would put the real `node` ahead of the wrapper.
    pub fn start_command(&self, package_dir: Option<&str>, debugging: bool) -> String {
        match self {
            PackageManager::Yarn => match package_dir {
                Some(dir) => format!("yarn --cwd={dir} run start"),
                None => "yarn run start".to_string(),
            },
            PackageManager::Npm => {
                let mut command = match package_dir {
                    Some(dir) => format!("npm --prefix={dir} start"),
                    None => "npm start".to_string(),
                };
                if debugging {
                    command.push_str(" --scripts-prepend-node-path false");
                }
                command
            }
        }
    }
}
