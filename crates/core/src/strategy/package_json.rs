use super::{ResolutionContext, StartupStrategy};
use crate::{
    command::PackageManager,
    error::Result,
    types::{CommandSource, ResolvedCommand},
    utils::paths,
};
use std::path::Path;
use tracing::debug;

/// Runs the `start` script through npm or yarn
pub struct PackageJsonStartStrategy;

impl StartupStrategy for PackageJsonStartStrategy {
    fn name(&self) -> &'static str {
        "package-json-start"
    }

    fn source(&self) -> CommandSource {
        CommandSource::PackageJsonStart
    }

    fn attempt(&self, context: &ResolutionContext<'_>) -> Result<Option<ResolvedCommand>> {
        let Some(package) = &context.package else {
            return Ok(None);
        };
        if package.descriptor.start_script().is_none() {
            debug!("scripts.start not found in package.json");
            return Ok(None);
        }

        let node = context.node();
        let debugging = node.is_debugging();
        // npm and yarn call node indirectly, so the flag can only get in
        // through the wrapper on PATH.
        let pre_commands = if debugging {
            node.wrapper_pre_commands()
        } else {
            Vec::new()
        };

        let package_dir = if package.is_at_root(context.source_path()) {
            None
        } else {
            Some(paths::to_shell_path(package.dir()))
        };

        let manager = PackageManager::detect(context.probe, context.source_path());
        let command = manager.start_command(package_dir.as_deref(), debugging);

        Ok(Some(
            ResolvedCommand::new(self.source(), command).with_pre_commands(pre_commands),
        ))
    }
}

/// Runs the file named by `main`
pub struct PackageJsonMainStrategy;

impl StartupStrategy for PackageJsonMainStrategy {
    fn name(&self) -> &'static str {
        "package-json-main"
    }

    fn source(&self) -> CommandSource {
        CommandSource::PackageJsonMain
    }

    fn attempt(&self, context: &ResolutionContext<'_>) -> Result<Option<ResolvedCommand>> {
        let Some(package) = &context.package else {
            return Ok(None);
        };
        let Some(main) = package.descriptor.main_file() else {
            return Ok(None);
        };

        debug!("Using startup command from package.json main field");
        // `main` is relative to package.json, the script runs from the source root.
        let entry_file = if package.is_at_root(context.source_path()) {
            main.to_string()
        } else {
            let sub_path = paths::sub_path(context.source_path(), package.dir());
            paths::to_shell_path(&paths::clean(&sub_path.join(Path::new(main))))
        };

        Ok(Some(ResolvedCommand::new(
            self.source(),
            context.node().for_entry_file(&entry_file),
        )))
    }
}
