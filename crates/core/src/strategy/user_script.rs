use super::{ResolutionContext, StartupStrategy};
use crate::{
    command::prepare_user_command,
    error::Result,
    types::{CommandSource, ResolvedCommand},
};
use tracing::info;

/// The user named a file that no other strategy recognized: run it as a script
pub struct UserScriptStrategy;

impl StartupStrategy for UserScriptStrategy {
    fn name(&self) -> &'static str {
        "user-script"
    }

    fn source(&self) -> CommandSource {
        CommandSource::UserScript
    }

    fn attempt(&self, context: &ResolutionContext<'_>) -> Result<Option<ResolvedCommand>> {
        if context.user_path.is_none() {
            return Ok(None);
        }
        let Some(user_command) = context.request.trimmed_user_command() else {
            return Ok(None);
        };

        info!("Running user-supplied script '{}'", user_command);
        let command = prepare_user_command(context.probe, user_command, context.source_path());
        Ok(Some(ResolvedCommand::new(self.source(), command)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{services::DefaultFileProbe, types::ResolutionRequest};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_runs_existing_script() -> Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join("entry.sh"), "exit 222")?;
        let request = ResolutionRequest::new(temp.path()).with_user_command("entry.sh");
        let context = ResolutionContext::new(&request, &DefaultFileProbe);

        let resolved = UserScriptStrategy.attempt(&context)?.expect("script should resolve");
        assert_eq!(resolved.command, "./entry.sh");
        assert_eq!(resolved.source, CommandSource::UserScript);
        Ok(())
    }

    #[test]
    fn test_passes_without_user_command() -> Result<()> {
        let temp = TempDir::new()?;
        let request = ResolutionRequest::new(temp.path());
        let context = ResolutionContext::new(&request, &DefaultFileProbe);
        assert!(UserScriptStrategy.attempt(&context)?.is_none());
        Ok(())
    }
}
