// Configuration validation module

use anyhow::Result;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{default_config_path, load_config, AppConfig};

/// Problems that make a parsed configuration unusable
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("application.tick_rate_ms must be greater than zero")]
    ZeroTickRate,
}

/// Check a parsed configuration. Hard errors are returned; soft problems are logged.
pub fn validate_config(config: &AppConfig) -> std::result::Result<(), ValidationError> {
    if config.application.tick_rate_ms == 0 {
        return Err(ValidationError::ZeroTickRate);
    }

    let tab_count = config.tabs.tabs.len();
    if tab_count == 0 {
        tracing::warn!("configuration defines no tabs; only the empty strip will be shown");
    }
    if let Some(initial) = config.tabs.initial_tab {
        if initial >= tab_count {
            tracing::warn!(initial, tab_count, "tabs.initial_tab is out of range");
        }
    }
    if config.tabs.tabs.iter().all(|tab| tab.disabled) && tab_count > 0 {
        tracing::warn!("every tab is disabled; selection will be frozen");
    }

    Ok(())
}

/// Load and validate configuration, defaulting to the bundled config.yaml
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let path = config_path.unwrap_or_else(default_config_path);
    tracing::info!(path = %path.display(), "loading configuration");

    let config = load_config(&path)?;
    validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn test_zero_tick_rate_is_rejected() {
        let config = parse_config("application: { title: T, tick_rate_ms: 0 }\ntabs: {}").unwrap();
        assert_eq!(validate_config(&config), Err(ValidationError::ZeroTickRate));
    }

    #[test]
    fn test_soft_problems_are_accepted() {
        let config = parse_config(
            "application: { title: T }\ntabs: { initial_tab: 9, tabs: [{ title: A, disabled: true }] }",
        )
        .unwrap();
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_bundled_config_is_valid() {
        assert!(load_and_validate_config(None).is_ok());
    }
}
