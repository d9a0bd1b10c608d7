//! Startup script emission

mod app_insights;
mod builder;
mod emitter;
mod node_modules;

pub use app_insights::{APP_INSIGHTS_LOADER_FILE_NAME, LOADER_SCRIPT, ensure_loader_file};
pub use builder::ScriptBuilder;
pub use emitter::{DEFAULT_BIND_PORT, ScriptEmitter};
pub use node_modules::{ArchiveKind, NODE_MODULES_TARGET_DIR, extraction_statements};
