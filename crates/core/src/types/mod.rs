pub mod outcome;
pub mod package_json;
pub mod request;

use serde::Serialize;
use std::fmt;

/// Which resolution strategy produced the startup command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CommandSource {
    /// The user command, used verbatim because it is not a file
    User,
    PackageJsonStart,
    PackageJsonMain,
    ProcessJson,
    ConfigJs,
    ConfigYaml,
    UserJsFilePath,
    /// The user command names a file that is not a recognized config type
    UserScript,
    CandidateFile,
    DefaultApp,
}

impl CommandSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandSource::User => "User",
            CommandSource::PackageJsonStart => "PackageJsonStart",
            CommandSource::PackageJsonMain => "PackageJsonMain",
            CommandSource::ProcessJson => "ProcessJson",
            CommandSource::ConfigJs => "ConfigJs",
            CommandSource::ConfigYaml => "ConfigYaml",
            CommandSource::UserJsFilePath => "UserJsFilePath",
            CommandSource::UserScript => "UserScript",
            CommandSource::CandidateFile => "CandidateFile",
            CommandSource::DefaultApp => "DefaultApp",
        }
    }
}

impl fmt::Display for CommandSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Re-export commonly used types
pub use outcome::{ResolutionOutcome, ResolvedCommand};
pub use package_json::PackageDescriptor;
pub use request::{DebugOptions, ResolutionRequest};
