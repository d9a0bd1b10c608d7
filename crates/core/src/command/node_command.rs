use super::{INSPECT_PARAM_VARIABLE_NAME, LOCAL_IP, NODE_WRAPPER_PATH, pm2_start_command};
use crate::types::DebugOptions;

/// Builds `node` invocations honoring the debug and pm2 switches
#[derive(Debug, Clone, Copy)]
pub struct NodeCommandBuilder<'a> {
    debug: &'a DebugOptions,
    use_pm2: bool,
}

impl<'a> NodeCommandBuilder<'a> {
    pub fn new(debug: &'a DebugOptions, use_pm2: bool) -> Self {
        Self { debug, use_pm2 }
    }

    pub fn is_debugging(&self) -> bool {
        self.debug.is_debugging()
    }

    /// Command running an entry file directly.
    ///
    /// Debugging wins over pm2: the debugger has to attach to `node` itself.
    pub fn for_entry_file(&self, entry_file: &str) -> String {
        let prefix = if self.is_debugging() {
            format!("node {}", self.debug_flag())
        } else if self.use_pm2 {
            pm2_start_command(None)
        } else {
            "node".to_string()
        };
        format!("{prefix} {entry_file}")
    }

    /// Statements putting the node wrapper first on PATH, so indirect
    /// `node` calls made by npm, yarn or pm2 pick up the debug flag
    pub fn wrapper_pre_commands(&self) -> Vec<String> {
        vec![
            format!("export PATH={NODE_WRAPPER_PATH}:$PATH"),
            format!(
                "export {INSPECT_PARAM_VARIABLE_NAME}=\"{}\"",
                self.debug_flag()
            ),
        ]
    }

    /// The flag passed to `node` to enable debugging
    pub fn debug_flag(&self) -> String {
        let mut flag = String::from(if self.debug.use_legacy_debugger {
            "--debug"
        } else {
            "--inspect"
        });

        if self.debug.break_before_start {
            flag.push_str("-brk");
        }

        flag.push('=');
        flag.push_str(LOCAL_IP);
        if let Some(port) = self.debug.port.as_deref().filter(|p| !p.is_empty()) {
            flag.push(':');
            flag.push_str(port);
        }
        flag
    }
}
