/// Environment variable carrying the Application Insights key
pub const APP_INSIGHTS_KEY_ENV: &str = "APPINSIGHTS_INSTRUMENTATIONKEY";
/// Environment variable enabling the Application Insights agent
pub const APP_INSIGHTS_ENABLE_ENV: &str = "ApplicationInsightsAgent_EXTENSION_VERSION";
pub const TELEMETRY_DISABLED_VALUE: &str = "disabled";

/// Snapshot of the telemetry auto-configuration environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetrySettings {
    pub instrumentation_key: Option<String>,
    pub agent_extension_version: Option<String>,
}

impl TelemetrySettings {
    /// Capture the settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            instrumentation_key: lookup(APP_INSIGHTS_KEY_ENV),
            agent_extension_version: lookup(APP_INSIGHTS_ENABLE_ENV),
        }
    }

    /// Both variables set and the agent not explicitly disabled
    pub fn should_configure(&self) -> bool {
        let key = self.instrumentation_key.as_deref().unwrap_or_default();
        let version = self.agent_extension_version.as_deref().unwrap_or_default();
        !key.is_empty() && !version.is_empty() && version != TELEMETRY_DISABLED_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> TelemetrySettings {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TelemetrySettings::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn test_requires_both_variables() {
        assert!(!settings(&[(APP_INSIGHTS_KEY_ENV, "key")]).should_configure());
        assert!(!settings(&[(APP_INSIGHTS_ENABLE_ENV, "~2")]).should_configure());
        assert!(
            settings(&[(APP_INSIGHTS_KEY_ENV, "key"), (APP_INSIGHTS_ENABLE_ENV, "~2")])
                .should_configure()
        );
    }

    #[test]
    fn test_disabled_agent_is_not_configured() {
        let telemetry = settings(&[
            (APP_INSIGHTS_KEY_ENV, "key"),
            (APP_INSIGHTS_ENABLE_ENV, TELEMETRY_DISABLED_VALUE),
        ]);
        assert!(!telemetry.should_configure());
    }
}
