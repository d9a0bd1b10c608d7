use serde::Serialize;

use super::CommandSource;
use crate::error::Result;

/// A command produced by one strategy, with the statements that must run before it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCommand {
    pub source: CommandSource,
    /// Setup statements such as the debug wrapper exports
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pre_commands: Vec<String>,
    pub command: String,
}

impl ResolvedCommand {
    pub fn new(source: CommandSource, command: impl Into<String>) -> Self {
        Self {
            source,
            pre_commands: Vec::new(),
            command: command.into(),
        }
    }

    pub fn with_pre_commands(mut self, pre_commands: Vec<String>) -> Self {
        self.pre_commands = pre_commands;
        self
    }

    /// The command as it reads in the script, setup statements included
    pub fn to_shell_lines(&self) -> String {
        let mut lines = String::new();
        for statement in &self.pre_commands {
            lines.push_str(statement);
            lines.push('\n');
        }
        lines.push_str(&self.command);
        lines
    }
}

/// Result of one full resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionOutcome {
    pub resolved: ResolvedCommand,
    /// Name of the strategy that matched
    pub strategy: String,
}

impl ResolutionOutcome {
    pub fn source(&self) -> CommandSource {
        self.resolved.source
    }

    pub fn command(&self) -> &str {
        &self.resolved.command
    }

    /// Pretty-printed JSON report of this outcome
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
