//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{Credentials, MonitorConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the bot token.
pub const TOKEN_ENV: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the recipient chat id.
pub const CHAT_ID_ENV: &str = "CHAT_ID";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<MonitorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<MonitorConfig, ConfigError> {
    let config: MonitorConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

impl Credentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through `lookup`. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingEnv(key))
        };

        Ok(Self {
            token: read(TOKEN_ENV)?,
            chat_id: read(CHAT_ID_ENV)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;

    const SAMPLE: &str = r#"
[listener]
bind_address = "127.0.0.1:8000"

[[groups]]
name = "vps_1"
endpoints = ["https://project.web-ar.studio/health", "http://"]

[[groups]]
name = "vps_2"
endpoints = ["http://example2.com"]

[schedule]
interval_secs = 30

[observability]
log_format = "json"
metrics_enabled = false
"#;

    #[test]
    fn parses_groups_in_file_order() {
        let config = parse_config(SAMPLE).unwrap();
        let names: Vec<_> = config.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["vps_1", "vps_2"]);
        assert_eq!(config.groups[0].endpoints.len(), 2);
        assert_eq!(config.schedule.interval_secs, 30);
        assert!(config.schedule.enabled);
        assert_eq!(config.alerting.failure_threshold, 3);
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }

    #[test]
    fn example_config_is_valid() {
        let config = parse_config(include_str!("../../monitor.example.toml")).unwrap();
        assert_eq!(config.groups[0].name, "vps_1");
        assert_eq!(config.schedule.interval_secs, 60);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = parse_config("[schedule]\ninterval_secs = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e == &[ValidationError::NoGroups]));
        assert_eq!(err.to_string(), "Validation failed: no groups configured");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            parse_config("[[groups]\nname ="),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn credentials_require_both_variables() {
        let creds = Credentials::from_lookup(|key| match key {
            TOKEN_ENV => Some("123:abc".into()),
            CHAT_ID_ENV => Some(" -100200 ".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(creds.token, "123:abc");
        assert_eq!(creds.chat_id, "-100200");
        assert!(!format!("{creds:?}").contains("123:abc"));

        let missing = Credentials::from_lookup(|key| (key == TOKEN_ENV).then(|| "t".into()));
        assert!(matches!(missing, Err(ConfigError::MissingEnv(CHAT_ID_ENV))));

        let blank = Credentials::from_lookup(|_| Some("  ".into()));
        assert!(matches!(blank, Err(ConfigError::MissingEnv(TOKEN_ENV))));
    }
}
