//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CHAT_SERVER_URL: &str = "http://localhost:3001";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("CHAT_SERVER_URL is set but empty")]
    EmptyServerUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the Socket.IO chat server handed to the browser.
    pub server_url: String,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CHAT_SERVER_URL`: default `http://localhost:3001`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an injectable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let server_url = match lookup("CHAT_SERVER_URL") {
            Some(raw) => {
                let url = raw.trim().trim_end_matches('/');
                if url.is_empty() {
                    return Err(ConfigError::EmptyServerUrl);
                }
                url.to_owned()
            }
            None => DEFAULT_CHAT_SERVER_URL.to_owned(),
        };

        Ok(Self { port, server_url })
    }
}
