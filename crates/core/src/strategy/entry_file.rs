use super::{ResolutionContext, StartupStrategy};
use crate::{
    error::Result,
    types::{CommandSource, ResolvedCommand},
    utils::paths,
};
use tracing::{info, warn};

/// Conventional entry files, in probing order
pub const CANDIDATE_FILES: [&str; 5] = ["bin/www", "server.js", "app.js", "index.js", "hostingstart.js"];

/// The user pointed at a `.js` file: run it directly
pub struct UserJsFileStrategy;

impl StartupStrategy for UserJsFileStrategy {
    fn name(&self) -> &'static str {
        "user-js-file"
    }

    fn source(&self) -> CommandSource {
        CommandSource::UserJsFilePath
    }

    fn attempt(&self, context: &ResolutionContext<'_>) -> Result<Option<ResolvedCommand>> {
        let Some(user_path) = &context.user_path else {
            return Ok(None);
        };
        if !user_path.to_string_lossy().ends_with(".js") {
            return Ok(None);
        }

        let entry_file = paths::sub_path(context.source_path(), user_path);
        Ok(Some(ResolvedCommand::new(
            self.source(),
            context.node().for_entry_file(&paths::to_shell_path(&entry_file)),
        )))
    }
}

/// First conventional entry file present at the source root
pub struct CandidateFileStrategy {
    candidates: Vec<String>,
}

impl CandidateFileStrategy {
    pub fn new() -> Self {
        Self::with_candidates(CANDIDATE_FILES.iter().map(|c| c.to_string()).collect())
    }

    pub fn with_candidates(candidates: Vec<String>) -> Self {
        Self { candidates }
    }
}

impl Default for CandidateFileStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl StartupStrategy for CandidateFileStrategy {
    fn name(&self) -> &'static str {
        "candidate-file"
    }

    fn source(&self) -> CommandSource {
        CommandSource::CandidateFile
    }

    fn attempt(&self, context: &ResolutionContext<'_>) -> Result<Option<ResolvedCommand>> {
        let found = self
            .candidates
            .iter()
            .find(|file| context.probe.exists(&context.source_path().join(file.as_str())));

        Ok(found.map(|file| {
            info!("Found startup candidate '{}'", file);
            ResolvedCommand::new(self.source(), context.node().for_entry_file(file))
        }))
    }
}

/// Last resort: the app shipped with the runtime image
pub struct DefaultAppStrategy;

impl StartupStrategy for DefaultAppStrategy {
    fn name(&self) -> &'static str {
        "default-app"
    }

    fn source(&self) -> CommandSource {
        CommandSource::DefaultApp
    }

    fn attempt(&self, context: &ResolutionContext<'_>) -> Result<Option<ResolvedCommand>> {
        let Some(default_app) = context
            .request
            .default_app_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
        else {
            return Ok(None);
        };

        warn!("Resorting to default startup command");
        Ok(Some(ResolvedCommand::new(
            self.source(),
            context.node().for_entry_file(default_app),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{services::DefaultFileProbe, types::ResolutionRequest};
    use std::fs;
    use tempfile::TempDir;

    fn attempt(
        strategy: &dyn StartupStrategy,
        request: &ResolutionRequest,
    ) -> Result<Option<ResolvedCommand>> {
        let context = ResolutionContext::new(request, &DefaultFileProbe);
        strategy.attempt(&context)
    }

    #[test]
    fn test_user_js_file_is_relative_to_source() -> Result<()> {
        let temp = TempDir::new()?;
        fs::create_dir(temp.path().join("src"))?;
        fs::write(temp.path().join("src/main.js"), "")?;
        let request = ResolutionRequest::new(temp.path()).with_user_command("src/main.js");

        let resolved = attempt(&UserJsFileStrategy, &request)?.expect("js file should resolve");
        assert_eq!(resolved.command, "node src/main.js");
        Ok(())
    }

    #[test]
    fn test_candidates_probe_in_order() -> Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join("index.js"), "")?;
        fs::write(temp.path().join("app.js"), "")?;

        let resolved = attempt(&CandidateFileStrategy::new(), &ResolutionRequest::new(temp.path()))?
            .expect("candidate should resolve");
        assert_eq!(resolved.command, "node app.js");
        Ok(())
    }

    #[test]
    fn test_bin_www_comes_first() -> Result<()> {
        let temp = TempDir::new()?;
        fs::create_dir(temp.path().join("bin"))?;
        fs::write(temp.path().join("bin/www"), "")?;
        fs::write(temp.path().join("server.js"), "")?;

        let resolved = attempt(&CandidateFileStrategy::new(), &ResolutionRequest::new(temp.path()))?
            .expect("candidate should resolve");
        assert_eq!(resolved.command, "node bin/www");
        Ok(())
    }

    #[test]
    fn test_default_app() -> Result<()> {
        let temp = TempDir::new()?;
        let request =
            ResolutionRequest::new(temp.path()).with_default_app("/opt/startup/default-static-site.js");

        let resolved = attempt(&DefaultAppStrategy, &request)?.expect("default should resolve");
        assert_eq!(resolved.command, "node /opt/startup/default-static-site.js");
        assert!(attempt(&DefaultAppStrategy, &ResolutionRequest::new(temp.path()))?.is_none());
        Ok(())
    }
}
