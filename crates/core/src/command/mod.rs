//! Startup command construction

pub mod node_command;
pub mod package_manager;
pub mod process_manager;
pub mod user_command;

// Re-export commonly used types
pub use node_command::NodeCommandBuilder;
pub use package_manager::PackageManager;
pub use process_manager::pm2_start_command;
pub use user_command::prepare_user_command;

/// Bind host used in debug flags
pub const LOCAL_IP: &str = "0.0.0.0";
/// Directory holding the `node` wrapper that injects debug flags
pub const NODE_WRAPPER_PATH: &str = "/opt/node-wrapper/";
/// Variable the node wrapper reads its extra flags from
pub const INSPECT_PARAM_VARIABLE_NAME: &str = "ORYX_NODE_INSPECT_PARAM";
