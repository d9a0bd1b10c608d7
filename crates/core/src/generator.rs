//! Startup script generation for Node.js apps

use crate::{
    error::{Error, Result},
    interfaces::FileProbe,
    resolver::StartupCommandResolver,
    script::ScriptEmitter,
    services::DefaultFileProbe,
    types::{ResolutionOutcome, ResolutionRequest},
};
use std::sync::Arc;
use tracing::{debug, info};

/// A generated script and how its command was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript {
    pub script: String,
    pub outcome: ResolutionOutcome,
}

pub struct NodeStartupScriptGenerator {
    resolver: StartupCommandResolver,
    emitter: ScriptEmitter,
    probe: Arc<dyn FileProbe>,
}

impl Default for NodeStartupScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeStartupScriptGenerator {
    pub fn new() -> Self {
        Self::with_probe(Arc::new(DefaultFileProbe::new()))
    }

    pub fn with_probe(probe: Arc<dyn FileProbe>) -> Self {
        Self {
            resolver: StartupCommandResolver::with_probe(probe.clone()),
            emitter: ScriptEmitter::new(probe.clone()),
            probe,
        }
    }

    /// Resolve the startup command without emitting a script
    pub fn analyze(&self, request: &ResolutionRequest) -> Result<ResolutionOutcome> {
        self.ensure_source_exists(request)?;
        self.resolver.resolve(request)
    }

    /// Build the startup script for `request`
    pub fn generate(&self, request: &ResolutionRequest) -> Result<GeneratedScript> {
        info!("Generating script for source at '{}'", request.source_path().display());
        self.ensure_source_exists(request)?;

        let preamble = self.emitter.preamble(request)?;
        let outcome = self.resolver.resolve(request)?;
        let script = self.emitter.finish(preamble, request, &outcome).build();

        info!(
            command_source = %outcome.source(),
            strategy = %outcome.strategy,
            "Finalizing script"
        );
        debug!("Run script content:\n{}", script);

        Ok(GeneratedScript { script, outcome })
    }

    fn ensure_source_exists(&self, request: &ResolutionRequest) -> Result<()> {
        if self.probe.exists(request.source_path()) {
            Ok(())
        } else {
            Err(Error::SourceNotFound(request.source_path().to_path_buf()))
        }
    }
}
