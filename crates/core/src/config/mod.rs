//! Configuration inputs for script generation

mod manifest;
mod telemetry;

// Re-export main types
pub use manifest::{BuildManifest, MANIFEST_FILE_NAME};
pub use telemetry::{
    TelemetrySettings, APP_INSIGHTS_ENABLE_ENV, APP_INSIGHTS_KEY_ENV, TELEMETRY_DISABLED_VALUE,
};
