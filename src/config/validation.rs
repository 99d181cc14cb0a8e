//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check group names are present and unique
//! - Validate value ranges (intervals, timeouts and threshold > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MonitorConfig → Result<(), Vec<ValidationError>>
//! - Endpoint URL syntax is not checked; malformed URLs are reported as DOWN

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::MonitorConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no groups configured")]
    NoGroups,
    #[error("group #{index} has an empty name")]
    EmptyGroupName { index: usize },
    #[error("group `{0}` is defined more than once")]
    DuplicateGroup(String),
    #[error("group `{group}` has an empty endpoint at position {index}")]
    EmptyEndpoint { group: String, index: usize },
    #[error("invalid listener bind address `{0}`")]
    InvalidBindAddress(String),
    #[error("`{0}` must be greater than zero")]
    Zero(&'static str),
}

pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.groups.is_empty() {
        errors.push(ValidationError::NoGroups);
    }

    let mut seen = HashSet::new();
    for (index, group) in config.groups.iter().enumerate() {
        if group.name.trim().is_empty() {
            errors.push(ValidationError::EmptyGroupName { index });
            continue;
        }
        if !seen.insert(group.name.as_str()) {
            errors.push(ValidationError::DuplicateGroup(group.name.clone()));
        }
        for (index, endpoint) in group.endpoints.iter().enumerate() {
            if endpoint.trim().is_empty() {
                errors.push(ValidationError::EmptyEndpoint {
                    group: group.name.clone(),
                    index,
                });
            }
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.probe.timeout_secs == 0 {
        errors.push(ValidationError::Zero("probe.timeout_secs"));
    }
    if config.schedule.interval_secs == 0 {
        errors.push(ValidationError::Zero("schedule.interval_secs"));
    }
    if config.alerting.failure_threshold == 0 {
        errors.push(ValidationError::Zero("alerting.failure_threshold"));
    }
    if config.alerting.timeout_secs == 0 {
        errors.push(ValidationError::Zero("alerting.timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::GroupConfig;

    fn group(name: &str, endpoints: &[&str]) -> GroupConfig {
        GroupConfig {
            name: name.into(),
            endpoints: endpoints.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn accepts_minimal_config() {
        let config = MonitorConfig {
            groups: vec![group("vps_1", &["http://a", "http://"])],
            ..Default::default()
        };
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn rejects_empty_registry() {
        let errors = validate_config(&MonitorConfig::default()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::NoGroups]);
    }

    #[test]
    fn reports_every_problem() {
        let mut config = MonitorConfig {
            groups: vec![
                group("vps_1", &["http://a"]),
                group("vps_1", &[" "]),
                group("", &[]),
            ],
            ..Default::default()
        };
        config.alerting.failure_threshold = 0;
        config.listener.bind_address = "not-an-address".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateGroup("vps_1".into())));
        assert!(errors.contains(&ValidationError::EmptyEndpoint {
            group: "vps_1".into(),
            index: 0
        }));
        assert!(errors.contains(&ValidationError::EmptyGroupName { index: 2 }));
        assert!(errors.contains(&ValidationError::Zero("alerting.failure_threshold")));
        assert!(errors.contains(&ValidationError::InvalidBindAddress(
            "not-an-address".into()
        )));
        assert_eq!(errors.len(), 5);
    }
}
