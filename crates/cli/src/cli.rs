use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use node_startup_core::{BuildManifest, DebugOptions, ResolutionRequest, TelemetrySettings};
use std::path::PathBuf;

use crate::commands::{analyze_command, generate_command};

/// Default app served when the source tree has nothing to start
pub const DEFAULT_APP_PATH: &str = "/opt/startup/default-static-site.js";

#[derive(Parser, Debug)]
#[command(name = "node-startup")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Runner {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the startup script for a Node.js app
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        resolution: ResolutionArgs,

        /// Where to write the script
        #[arg(short, long, default_value = "run.sh")]
        output: PathBuf,

        /// Print the script instead of writing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Show which startup command would be used and why
    #[command(visible_alias = "a")]
    Analyze {
        #[command(flatten)]
        resolution: ResolutionArgs,

        /// Show verbose JSON output
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Flags describing the app and how it should start
#[derive(Args, Debug, Clone)]
pub struct ResolutionArgs {
    /// Source directory of the app
    #[arg(long, default_value = ".")]
    pub app_path: PathBuf,

    /// Command or file to start the app with
    #[arg(long)]
    pub user_startup_command: Option<String>,

    /// Entry file used when nothing else is found
    #[arg(long, default_value = DEFAULT_APP_PATH)]
    pub default_app: String,

    /// Port the app should listen on (exported as PORT)
    #[arg(long)]
    pub bind_port: Option<String>,

    /// Run entry files through pm2
    #[arg(long)]
    pub use_pm2: bool,

    /// Enable remote debugging
    #[arg(long)]
    pub remote_debug: bool,

    /// Enable remote debugging and break before user code starts
    #[arg(long)]
    pub remote_debug_brk: bool,

    /// Port the debugger listens on
    #[arg(long)]
    pub remote_debug_port: Option<String>,

    /// Use --debug instead of --inspect (node < 7.7)
    #[arg(long)]
    pub use_legacy_debugger: bool,

    /// Do not extract compressed node_modules named in the build manifest
    #[arg(long)]
    pub skip_node_modules_extraction: bool,

    /// Directory holding the build manifest (defaults to the app path)
    #[arg(long)]
    pub manifest_dir: Option<PathBuf>,
}

impl ResolutionArgs {
    /// Build the resolution request, reading the manifest from disk
    pub fn to_request(&self, telemetry: TelemetrySettings) -> Result<ResolutionRequest> {
        let manifest_dir = self.manifest_dir.as_ref().unwrap_or(&self.app_path);
        let manifest = BuildManifest::load_from_dir(manifest_dir)?;

        let mut request = ResolutionRequest::new(&self.app_path)
            .with_default_app(self.default_app.clone())
            .with_pm2(self.use_pm2)
            .with_debug(DebugOptions {
                remote_debugging: self.remote_debug,
                break_before_start: self.remote_debug_brk,
                use_legacy_debugger: self.use_legacy_debugger,
                port: self.remote_debug_port.clone(),
            })
            .with_manifest(manifest)
            .with_telemetry(telemetry)
            .skip_node_modules_extraction(self.skip_node_modules_extraction);

        if let Some(command) = &self.user_startup_command {
            request = request.with_user_command(command.clone());
        }
        if let Some(port) = &self.bind_port {
            request = request.with_bind_port(port.clone());
        }
        Ok(request)
    }
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let telemetry = TelemetrySettings::from_env();
        match self {
            Commands::Generate {
                resolution,
                output,
                dry_run,
            } => generate_command(&resolution.to_request(telemetry)?, &output, dry_run),
            Commands::Analyze {
                resolution,
                verbose,
            } => analyze_command(&resolution.to_request(telemetry)?, verbose),
        }
    }
}
