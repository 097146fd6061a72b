use std::{env, net::SocketAddr};

use thiserror::Error;

/// Server settings. Provider credentials arrive later through
/// `provider/configure`.
#[derive(Debug, Clone)]
pub struct Config {
    pub plugin_token: String,
    pub bind_addr: String,
    pub bind_port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PLUGIN_TOKEN is required and must not be empty")]
    MissingPluginToken,
    #[error("BIND_PORT must be a valid u16")]
    InvalidPort,
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let plugin_token = env::var("PLUGIN_TOKEN")
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingPluginToken)?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
        let bind_port = env::var("BIND_PORT")
            .ok()
            .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort))
            .transpose()?
            .unwrap_or(8080);

        let config = Self {
            plugin_token,
            bind_addr,
            bind_port,
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    // The environment is process wide.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn parse_defaults() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        env::set_var("PLUGIN_TOKEN", "abc");
        env::remove_var("BIND_ADDR");
        env::remove_var("BIND_PORT");

        let config = Config::from_env().expect("config should parse");
        assert_eq!(config.plugin_token, "abc");
        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.bind_port, 8080);
    }

    #[test]
    fn missing_token_fails() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        env::set_var("PLUGIN_TOKEN", "   ");

        let err = Config::from_env().expect_err("expected missing token error");
        assert!(matches!(err, ConfigError::MissingPluginToken));
    }

    #[test]
    fn invalid_port_fails() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        env::set_var("PLUGIN_TOKEN", "abc");
        env::set_var("BIND_PORT", "http");

        let err = Config::from_env().expect_err("expected invalid port error");
        assert!(matches!(err, ConfigError::InvalidPort));
        env::remove_var("BIND_PORT");
    }
}
