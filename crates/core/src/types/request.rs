use crate::config::{BuildManifest, TelemetrySettings};
use crate::utils::paths;
use std::path::{Path, PathBuf};

/// Remote debugging switches passed to `node`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugOptions {
    pub remote_debugging: bool,
    pub break_before_start: bool,
    /// Use `--debug` instead of `--inspect` (node < 7.7)
    pub use_legacy_debugger: bool,
    pub port: Option<String>,
}

impl DebugOptions {
    /// Breaking before start implies debugging even without `remote_debugging`
    pub fn is_debugging(&self) -> bool {
        self.remote_debugging || self.break_before_start
    }
}

/// Everything one resolution needs to know about the app and the user's wishes
#[derive(Debug, Clone, Default)]
pub struct ResolutionRequest {
    pub source_path: PathBuf,
    pub user_startup_command: Option<String>,
    pub default_app_path: Option<String>,
    pub bind_port: Option<String>,
    pub use_pm2: bool,
    pub skip_node_modules_extraction: bool,
    pub debug: DebugOptions,
    pub manifest: BuildManifest,
    pub telemetry: TelemetrySettings,
}

impl ResolutionRequest {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            ..Default::default()
        }
    }

    pub fn with_user_command(mut self, command: impl Into<String>) -> Self {
        self.user_startup_command = Some(command.into());
        self
    }

    pub fn with_default_app(mut self, path: impl Into<String>) -> Self {
        self.default_app_path = Some(path.into());
        self
    }

    pub fn with_bind_port(mut self, port: impl Into<String>) -> Self {
        self.bind_port = Some(port.into());
        self
    }

    pub fn with_pm2(mut self, use_pm2: bool) -> Self {
        self.use_pm2 = use_pm2;
        self
    }

    pub fn with_debug(mut self, debug: DebugOptions) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_manifest(mut self, manifest: BuildManifest) -> Self {
        self.manifest = manifest;
        self
    }

    pub fn with_telemetry(mut self, telemetry: TelemetrySettings) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn skip_node_modules_extraction(mut self, skip: bool) -> Self {
        self.skip_node_modules_extraction = skip;
        self
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// The user command with surrounding whitespace removed, if any is left
    pub fn trimmed_user_command(&self) -> Option<&str> {
        self.user_startup_command
            .as_deref()
            .map(str::trim)
            .filter(|command| !command.is_empty())
    }

    /// Full path of the user command when it is read as a path under the source tree.
    ///
    /// An absolute command is rooted at the source path rather than replacing it.
    pub fn user_command_full_path(&self) -> Option<PathBuf> {
        self.trimmed_user_command()
            .map(|command| paths::join_under(&self.source_path, Path::new(command)))
    }
}
