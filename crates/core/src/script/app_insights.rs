use crate::error::Result;
use crate::interfaces::FileProbe;
use std::path::Path;
use tracing::{debug, info};

/// Loader preloaded through NODE_OPTIONS, relative to the source root
pub const APP_INSIGHTS_LOADER_FILE_NAME: &str = "oryx-appinsightsloader.js";

/// Starts the Application Insights client when its variables are set.
/// Any failure is logged and swallowed so the app still starts.
pub const LOADER_SCRIPT: &str = concat!(
    "// Generated by node-startup\n",
    "try {\n",
    "    var appInsights = require('applicationinsights');\n",
    "    var prefixInternalSdkVersion = function (envelope, contextObjects) {\n",
    "        try {\n",
    "            var sdkVersionKey = appInsights.defaultClient.context.keys.internalSdkVersion;\n",
    "            envelope.tags[sdkVersionKey] = \"ad_\" + envelope.tags[sdkVersionKey];\n",
    "        } catch (e) {}\n",
    "        return true;\n",
    "    };\n",
    "\n",
    "    if (process.env.", "APPINSIGHTS_INSTRUMENTATIONKEY",
    " && process.env.", "ApplicationInsightsAgent_EXTENSION_VERSION", ") {\n",
    "        if (process.env.", "ApplicationInsightsAgent_EXTENSION_VERSION", " !== \"", "disabled", "\") {\n",
    "            appInsights\n",
    "                .setup()\n",
    "                .setSendLiveMetrics(true)\n",
    "                .start();\n",
    "            appInsights.defaultClient.addTelemetryProcessor(prefixInternalSdkVersion);\n",
    "        }\n",
    "    }\n",
    "} catch (e) {\n",
    "    console.log('Application Insights could not be automatically configured for this application');\n",
    "    console.log(e);\n",
    "}\n",
);

/// Write the loader into the source tree unless it is already there.
///
/// Returns whether a file was written.
pub fn ensure_loader_file(probe: &dyn FileProbe, source_path: &Path) -> Result<bool> {
    let loader = source_path.join(APP_INSIGHTS_LOADER_FILE_NAME);
    if probe.exists(&loader) {
        debug!("App Insights loader already present at {:?}", loader);
        return Ok(false);
    }

    info!("Creating App Insights loader at {:?}", loader);
    probe.write_file(&loader, LOADER_SCRIPT)?;
    Ok(true)
}

/// Statement preloading the loader while keeping existing NODE_OPTIONS
pub fn node_options_statement() -> String {
    format!("export NODE_OPTIONS=\"--require ./{APP_INSIGHTS_LOADER_FILE_NAME} $NODE_OPTIONS\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{APP_INSIGHTS_ENABLE_ENV, APP_INSIGHTS_KEY_ENV, TELEMETRY_DISABLED_VALUE};
    use crate::services::DefaultFileProbe;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_loader_checks_the_same_variables() {
        assert!(LOADER_SCRIPT.contains(&format!("process.env.{APP_INSIGHTS_KEY_ENV}")));
        assert!(LOADER_SCRIPT.contains(&format!("process.env.{APP_INSIGHTS_ENABLE_ENV}")));
        assert!(LOADER_SCRIPT.contains(&format!("\"{TELEMETRY_DISABLED_VALUE}\"")));
    }

    #[test]
    fn test_existing_loader_is_kept() -> Result<()> {
        let temp = TempDir::new()?;
        let loader = temp.path().join(APP_INSIGHTS_LOADER_FILE_NAME);
        fs::write(&loader, "// custom")?;

        assert!(!ensure_loader_file(&DefaultFileProbe, temp.path())?);
        assert_eq!(fs::read_to_string(&loader)?, "// custom");
        Ok(())
    }

    #[test]
    fn test_loader_is_written_once() -> Result<()> {
        let temp = TempDir::new()?;
        assert!(ensure_loader_file(&DefaultFileProbe, temp.path())?);
        assert!(!ensure_loader_file(&DefaultFileProbe, temp.path())?);
        assert_eq!(
            fs::read_to_string(temp.path().join(APP_INSIGHTS_LOADER_FILE_NAME))?,
            LOADER_SCRIPT
        );
        Ok(())
    }
}
