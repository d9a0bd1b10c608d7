use super::{
    ScriptBuilder,
    app_insights::{ensure_loader_file, node_options_statement},
    extraction_statements,
};
use crate::{
    error::Result,
    interfaces::FileProbe,
    types::{ResolutionOutcome, ResolutionRequest},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Port exported when none is configured
pub const DEFAULT_BIND_PORT: &str = "8080";

/// Assembles the startup script around a resolved command
pub struct ScriptEmitter {
    probe: Arc<dyn FileProbe>,
}

impl ScriptEmitter {
    pub fn new(probe: Arc<dyn FileProbe>) -> Self {
        Self { probe }
    }

    /// Everything that comes before the command: directory, search paths,
    /// port and the node_modules extraction block.
    ///
    /// Fails on an unsupported node_modules archive.
    pub fn preamble(&self, request: &ResolutionRequest) -> Result<ScriptBuilder> {
        let mut script = ScriptBuilder::new()
            .shebang()
            .blank()
            .comment("Enter the source directory to make sure the script runs where the user expects")
            .line(format!("cd \"{}\"", request.source_path().display()))
            .blank()
            .export("NODE_PATH", "$(npm root --quiet -g):$NODE_PATH")
            .export_with_default("PORT", request.bind_port.as_deref(), DEFAULT_BIND_PORT)
            .blank();

        if request.skip_node_modules_extraction {
            debug!("Skipping node_modules extraction");
        } else if let Some(archive) = request.manifest.compressed_node_modules() {
            script = script.lines(extraction_statements(archive)?);
        }

        Ok(script)
    }

    /// Telemetry setup, the strategy's setup statements and the command itself
    pub fn finish(
        &self,
        script: ScriptBuilder,
        request: &ResolutionRequest,
        outcome: &ResolutionOutcome,
    ) -> ScriptBuilder {
        let mut script = script;

        if request.telemetry.should_configure() {
            debug!("Application Insights environment found, preloading the loader");
            match ensure_loader_file(self.probe.as_ref(), request.source_path()) {
                Ok(_) => script = script.line(node_options_statement()),
                Err(e) => warn!("Could not create the App Insights loader: {}", e),
            }
        }

        script.line(outcome.resolved.to_shell_lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{BuildManifest, TelemetrySettings},
        error::Error,
        services::DefaultFileProbe,
        types::{CommandSource, ResolvedCommand},
    };
    use tempfile::TempDir;

    fn emitter() -> ScriptEmitter {
        ScriptEmitter::new(Arc::new(DefaultFileProbe))
    }

    fn outcome(command: &str) -> ResolutionOutcome {
        ResolutionOutcome {
            resolved: ResolvedCommand::new(CommandSource::CandidateFile, command),
            strategy: "candidate-file".to_string(),
        }
    }

    #[test]
    fn test_minimal_script() -> Result<()> {
        let request = ResolutionRequest::new("/home/site/wwwroot").with_bind_port("3000");
        let emitter = emitter();
        let script = emitter
            .finish(emitter.preamble(&request)?, &request, &outcome("node server.js"))
            .build();

        assert_eq!(
            script,
            "#!/bin/sh\n\
             \n\
             # Enter the source directory to make sure the script runs where the user expects\n\
             cd \"/home/site/wwwroot\"\n\
             \n\
             export NODE_PATH=$(npm root --quiet -g):$NODE_PATH\n\
             export PORT=3000\n\
             \n\
             node server.js\n"
        );
        Ok(())
    }

    #[test]
    fn test_skip_extraction_ignores_bad_archive() -> Result<()> {
        let request = ResolutionRequest::new("/app")
            .with_manifest(BuildManifest::with_compressed_node_modules("modules.tar"))
            .skip_node_modules_extraction(true);
        let script = emitter().preamble(&request)?.build();
        assert!(!script.contains("extractionCommand"));
        Ok(())
    }

    #[test]
    fn test_unsupported_archive_aborts() {
        let request = ResolutionRequest::new("/app")
            .with_manifest(BuildManifest::with_compressed_node_modules("modules.tar"));
        let result = emitter().preamble(&request);
        assert!(matches!(result, Err(Error::UnsupportedArchive { .. })));
    }

    #[test]
    fn test_telemetry_preloads_loader_before_command() -> Result<()> {
        let temp = TempDir::new()?;
        let request = ResolutionRequest::new(temp.path()).with_telemetry(TelemetrySettings {
            instrumentation_key: Some("key".to_string()),
            agent_extension_version: Some("~3".to_string()),
        });
        let emitter = emitter();
        let script = emitter
            .finish(emitter.preamble(&request)?, &request, &outcome("node app.js"))
            .build();

        assert!(script.ends_with(
            "export NODE_OPTIONS=\"--require ./oryx-appinsightsloader.js $NODE_OPTIONS\"\nnode app.js\n"
        ));
        assert!(temp.path().join(super::super::APP_INSIGHTS_LOADER_FILE_NAME).is_file());
        Ok(())
    }

    #[test]
    fn test_pre_commands_precede_command() -> Result<()> {
        let request = ResolutionRequest::new("/app");
        let outcome = ResolutionOutcome {
            resolved: ResolvedCommand::new(CommandSource::PackageJsonStart, "npm start")
                .with_pre_commands(vec!["export A=1".to_string()]),
            strategy: "package-json-start".to_string(),
        };
        let emitter = emitter();
        let script = emitter.finish(emitter.preamble(&request)?, &request, &outcome).build();
        assert!(script.ends_with("export A=1\nnpm start\n"));
        Ok(())
    }
}
