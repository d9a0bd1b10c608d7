//! Startup command resolution
//!
//! A user command that is not a file in the source tree is taken as-is.
//! Everything else goes through the [`StrategyChain`].

use crate::{
    command::prepare_user_command,
    error::{Error, Result},
    interfaces::FileProbe,
    services::DefaultFileProbe,
    strategy::{ResolutionContext, StrategyChain},
    types::{CommandSource, ResolutionOutcome, ResolutionRequest, ResolvedCommand},
    utils::paths,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Strategy name reported when the user command is used verbatim
pub const USER_COMMAND_STRATEGY: &str = "user-command";

pub struct StartupCommandResolver {
    chain: StrategyChain,
    probe: Arc<dyn FileProbe>,
}

impl Default for StartupCommandResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl StartupCommandResolver {
    pub fn new() -> Self {
        Self::with_probe(Arc::new(DefaultFileProbe::new()))
    }

    pub fn with_probe(probe: Arc<dyn FileProbe>) -> Self {
        Self {
            chain: StrategyChain::new(),
            probe,
        }
    }

    pub fn probe(&self) -> &dyn FileProbe {
        self.probe.as_ref()
    }

    /// Pick the startup command for `request`
    pub fn resolve(&self, request: &ResolutionRequest) -> Result<ResolutionOutcome> {
        if let Some(outcome) = self.resolve_literal_user_command(request) {
            return Ok(outcome);
        }

        debug!("No literal user command, consulting {:?}", self.chain);
        let context = ResolutionContext::new(request, self.probe());
        match self.chain.resolve(&context)? {
            Some((strategy, resolved)) => Ok(ResolutionOutcome {
                resolved,
                strategy: strategy.to_string(),
            }),
            None => Err(Error::NoStartupCommand),
        }
    }

    /// A user command that does not name a file is a shell command and wins outright
    fn resolve_literal_user_command(&self, request: &ResolutionRequest) -> Option<ResolutionOutcome> {
        let user_command = request.trimmed_user_command()?;
        let full_path = request.user_command_full_path()?;
        if self.probe.exists(&full_path) && paths::is_within(request.source_path(), &full_path) {
            debug!("User command names the file {:?}", full_path);
            return None;
        }

        info!("User-supplied startup command: '{}'", user_command);
        let command = prepare_user_command(self.probe(), user_command, request.source_path());
        Some(ResolutionOutcome {
            resolved: ResolvedCommand::new(CommandSource::User, command),
            strategy: USER_COMMAND_STRATEGY.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_literal_command_bypasses_package_json() -> Result<()> {
        let temp = TempDir::new()?;
        fs::write(
            temp.path().join("package.json"),
            r#"{"scripts": {"start": "node index.js"}}"#,
        )?;
        let request = ResolutionRequest::new(temp.path()).with_user_command("npm run serve -- --port 80");

        let outcome = StartupCommandResolver::new().resolve(&request)?;
        assert_eq!(outcome.source(), CommandSource::User);
        assert_eq!(outcome.command(), "npm run serve -- --port 80");
        assert_eq!(outcome.strategy, USER_COMMAND_STRATEGY);
        Ok(())
    }

    #[test]
    fn test_nothing_found_is_an_error() -> Result<()> {
        let temp = TempDir::new()?;
        let result = StartupCommandResolver::new().resolve(&ResolutionRequest::new(temp.path()));
        assert!(matches!(result, Err(Error::NoStartupCommand)));
        Ok(())
    }

    #[test]
    fn test_existing_user_file_goes_through_chain() -> Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join("server.js"), "")?;
        let request = ResolutionRequest::new(temp.path()).with_user_command("server.js");

        let outcome = StartupCommandResolver::new().resolve(&request)?;
        assert_eq!(outcome.source(), CommandSource::UserJsFilePath);
        assert_eq!(outcome.command(), "node server.js");
        Ok(())
    }
}
