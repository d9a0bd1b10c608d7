use super::{ResolutionContext, StartupStrategy};
use crate::{
    command::pm2_start_command,
    error::Result,
    types::{CommandSource, ResolvedCommand},
    utils::paths,
};

pub const PROCESS_JSON_FILE_NAME: &str = "process.json";
pub const ECOSYSTEM_CONFIG_FILE_NAME: &str = "ecosystem.config.js";

/// pm2 process descriptor: `process.json` or a user-supplied `.json` path
pub struct ProcessJsonStrategy;

impl StartupStrategy for ProcessJsonStrategy {
    fn name(&self) -> &'static str {
        "process-json"
    }

    fn source(&self) -> CommandSource {
        CommandSource::ProcessJson
    }

    fn attempt(&self, context: &ResolutionContext<'_>) -> Result<Option<ResolvedCommand>> {
        let Some(config) = context.find_config_file(".json", Some(PROCESS_JSON_FILE_NAME)) else {
            return Ok(None);
        };

        let node = context.node();
        let pre_commands = if node.is_debugging() {
            node.wrapper_pre_commands()
        } else {
            Vec::new()
        };
        let command = pm2_start_command(Some(&paths::to_shell_path(&config)));
        Ok(Some(
            ResolvedCommand::new(self.source(), command).with_pre_commands(pre_commands),
        ))
    }
}

/// pm2 ecosystem file: `ecosystem.config.js` or a user-supplied `.config.js` path
pub struct ConfigJsStrategy;

impl StartupStrategy for ConfigJsStrategy {
    fn name(&self) -> &'static str {
        "config-js"
    }

    fn source(&self) -> CommandSource {
        CommandSource::ConfigJs
    }

    fn attempt(&self, context: &ResolutionContext<'_>) -> Result<Option<ResolvedCommand>> {
        Ok(context
            .find_config_file(".config.js", Some(ECOSYSTEM_CONFIG_FILE_NAME))
            .map(|config| {
                ResolvedCommand::new(
                    self.source(),
                    pm2_start_command(Some(&paths::to_shell_path(&config))),
                )
            }))
    }
}

/// pm2 YAML config. There is no default name, so only a user-supplied
/// `.yml` or `.yaml` path can match.
pub struct ConfigYamlStrategy;

impl StartupStrategy for ConfigYamlStrategy {
    fn name(&self) -> &'static str {
        "config-yaml"
    }

    fn source(&self) -> CommandSource {
        CommandSource::ConfigYaml
    }

    fn attempt(&self, context: &ResolutionContext<'_>) -> Result<Option<ResolvedCommand>> {
        let config = context
            .find_config_file(".yml", None)
            .or_else(|| context.find_config_file(".yaml", None));

        Ok(config.map(|config| {
            ResolvedCommand::new(
                self.source(),
                pm2_start_command(Some(&paths::to_shell_path(&config))),
            )
        }))
    }
}
