use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub app: AppConfig,
    pub navigation: NavigationConfig,
    pub submission: SubmissionConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NavigationConfig {
    /// Block route changes the current role may not see in its menu
    #[serde(default = "default_true")]
    pub enforce_permissions: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SubmissionConfig {
    /// Simulated latency of an entry-form save
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u32,
}

fn default_true() -> bool {
    true
}

fn default_delay_ms() -> u32 {
    1500
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[app]
title = "هيئة المياه والصرف الصحي"

[navigation]
enforce_permissions = true

[submission]
delay_ms = 1500
"#;

/// Parse configuration text.
///
/// The browser build has no filesystem, so the override (if any) is
/// passed in as text; otherwise the embedded default is used.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<DashboardConfig> {
    match override_toml {
        Some(text) => {
            log::info!("Loading config from override");
            Ok(toml::from_str(text)?)
        }
        None => {
            log::info!("Using default embedded configuration");
            Ok(toml::from_str(DEFAULT_CONFIG)?)
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            app: AppConfig {
                title: String::new(),
            },
            navigation: NavigationConfig {
                enforce_permissions: default_true(),
            },
            submission: SubmissionConfig {
                delay_ms: default_delay_ms(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert!(config.navigation.enforce_permissions);
        assert_eq!(config.submission.delay_ms, 1500);
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_override_with_defaults_for_missing_keys() {
        let config = load_config(Some(
            r#"
            [app]
            title = "test"
            [navigation]
            [submission]
            delay_ms = 10
            "#,
        ))
        .unwrap();
        assert_eq!(config.app.title, "test");
        assert!(config.navigation.enforce_permissions);
        assert_eq!(config.submission.delay_ms, 10);
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        assert!(load_config(Some("[navigation]\nenforce_permissions = \"yes\"")).is_err());
    }
}
