//! node-startup - Decide how a deployed Node.js app starts
//!
//! This crate provides functionality to:
//! - Pick the startup command for an app source tree through an ordered chain of strategies
//! - Build `node`, pm2, npm and yarn invocations, including remote debugging setup
//! - Emit the POSIX shell script that prepares the environment and runs the command
pub mod command;
pub mod config;
pub mod error;
pub mod generator;
pub mod interfaces;
pub mod resolver;
pub mod script;
pub mod services;
pub mod strategy;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::{BuildManifest, TelemetrySettings};
pub use generator::{GeneratedScript, NodeStartupScriptGenerator};
pub use interfaces::FileProbe;
pub use resolver::StartupCommandResolver;
pub use services::DefaultFileProbe;
pub use strategy::{StartupStrategy, StrategyChain};
