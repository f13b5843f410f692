use crate::config::types::{BotsConfig, Config, FetcherConfig, ServerConfig};
use crate::{ConfigError, ConfigResult};
use std::net::SocketAddr;

/// Upper bound on the robots.txt fetch timeout (seconds)
const MAX_TIMEOUT_SECS: u64 = 60;

/// Upper bound on followed redirects
const MAX_REDIRECTS: usize = 20;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_server_config(&config.server)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_bots_config(&config.bots)?;
    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> ConfigResult<()> {
    config.bind_address.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!(
            "bind_address '{}' is not a socket address: {}",
            config.bind_address, e
        ))
    })?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> ConfigResult<()> {
    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.max_redirects > MAX_REDIRECTS {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be <= {}, got {}",
            MAX_REDIRECTS, config.max_redirects
        )));
    }

    validate_user_agent(&config.user_agent)?;

    Ok(())
}

/// Validates the outbound User-Agent header value
fn validate_user_agent(user_agent: &str) -> ConfigResult<()> {
    if user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    // Must be usable as an HTTP header value
    if !user_agent.chars().all(|c| c.is_ascii() && !c.is_ascii_control()) {
        return Err(ConfigError::Validation(format!(
            "user_agent must contain only printable ASCII characters, got '{}'",
            user_agent
        )));
    }

    Ok(())
}

/// Validates the default bot list
fn validate_bots_config(config: &BotsConfig) -> ConfigResult<()> {
    if config.default.is_empty() {
        return Err(ConfigError::Validation(
            "default bot list cannot be empty".to_string(),
        ));
    }

    if let Some(pos) = config.default.iter().position(|b| b.trim().is_empty()) {
        return Err(ConfigError::Validation(format!(
            "default bot list entry {} is blank",
            pos
        )));
    }

    Ok(())
}
