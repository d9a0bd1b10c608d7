//! Ordered startup command strategies
//!
//! Each strategy looks at the app from one angle (package.json, a pm2
//! config, a conventional entry file, ...) and either produces a command
//! or passes. The chain runs them in a fixed order and the first command
//! wins.

mod entry_file;
mod package_json;
mod process_config;
mod user_script;

pub use entry_file::{CandidateFileStrategy, DefaultAppStrategy, UserJsFileStrategy};
pub use package_json::{PackageJsonMainStrategy, PackageJsonStartStrategy};
pub use process_config::{ConfigJsStrategy, ConfigYamlStrategy, ProcessJsonStrategy};
pub use user_script::UserScriptStrategy;

use crate::{
    command::NodeCommandBuilder,
    error::Result,
    interfaces::FileProbe,
    types::{
        CommandSource, ResolutionRequest, ResolvedCommand, package_json::LocatedPackage,
    },
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Everything a strategy may look at during one resolution
pub struct ResolutionContext<'a> {
    pub request: &'a ResolutionRequest,
    pub probe: &'a dyn FileProbe,
    /// The user command read as a path under the source root
    pub user_path: Option<PathBuf>,
    /// The `package.json` for this resolution, read once up front
    pub package: Option<LocatedPackage>,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(request: &'a ResolutionRequest, probe: &'a dyn FileProbe) -> Self {
        let user_path = request.user_command_full_path();
        let package =
            LocatedPackage::locate(probe, request.source_path(), user_path.as_deref());
        Self {
            request,
            probe,
            user_path,
            package,
        }
    }

    pub fn source_path(&self) -> &Path {
        self.request.source_path()
    }

    pub fn node(&self) -> NodeCommandBuilder<'a> {
        NodeCommandBuilder::new(&self.request.debug, self.request.use_pm2)
    }

    /// Find a config file either by what the user pointed at or by its default name.
    ///
    /// A user path is only considered when it ends in `suffix`; the default name
    /// is only looked up when the user gave no path at all.
    pub fn find_config_file(&self, suffix: &str, default_name: Option<&str>) -> Option<PathBuf> {
        let candidate = match (&self.user_path, default_name) {
            (Some(user_path), _) => user_path
                .to_string_lossy()
                .ends_with(suffix)
                .then(|| user_path.clone()),
            (None, Some(name)) => Some(self.source_path().join(name)),
            (None, None) => None,
        }?;

        if self.probe.exists(&candidate) {
            Some(candidate)
        } else {
            None
        }
    }
}

/// One way of finding the startup command
pub trait StartupStrategy: Send + Sync {
    /// Get the name of this strategy
    fn name(&self) -> &'static str;

    /// Tag reported when this strategy wins
    fn source(&self) -> CommandSource;

    /// Produce a command, or `None` to let the next strategy try
    fn attempt(&self, context: &ResolutionContext<'_>) -> Result<Option<ResolvedCommand>>;
}

/// Strategies in the order they are consulted
#[derive(Clone)]
pub struct StrategyChain {
    strategies: Vec<Arc<dyn StartupStrategy>>,
}

impl std::fmt::Debug for StrategyChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyChain")
            .field("strategies", &self.names())
            .finish()
    }
}

impl Default for StrategyChain {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyChain {
    /// The standard chain for Node.js apps
    pub fn new() -> Self {
        Self::from_strategies(vec![
            Arc::new(PackageJsonStartStrategy),
            Arc::new(PackageJsonMainStrategy),
            Arc::new(ProcessJsonStrategy),
            Arc::new(ConfigJsStrategy),
            Arc::new(ConfigYamlStrategy),
            Arc::new(UserJsFileStrategy),
            Arc::new(UserScriptStrategy),
            Arc::new(CandidateFileStrategy::new()),
            Arc::new(DefaultAppStrategy),
        ])
    }

    pub fn from_strategies(strategies: Vec<Arc<dyn StartupStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Run the strategies in order; the first non-empty command wins
    pub fn resolve(
        &self,
        context: &ResolutionContext<'_>,
    ) -> Result<Option<(&'static str, ResolvedCommand)>> {
        for strategy in &self.strategies {
            match strategy.attempt(context)? {
                Some(resolved) if !resolved.command.trim().is_empty() => {
                    debug!("Strategy '{}' matched", strategy.name());
                    return Ok(Some((strategy.name(), resolved)));
                }
                _ => debug!("Strategy '{}' found nothing", strategy.name()),
            }
        }
        Ok(None)
    }
}
