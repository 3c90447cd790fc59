//! Host configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = outfit_client::util::config::DEFAULT_BACKEND_URL;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("BACKEND_URL must start with http:// or https://: {0}")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub backend_url: String,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:8000`, trailing `/` trimmed
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` is not a `u16` or `BACKEND_URL`
    /// is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let backend_url = parse_backend_url(std::env::var("BACKEND_URL").ok().as_deref())?;
        Ok(Self { port, backend_url })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Ok(DEFAULT_BACKEND_URL.to_owned());
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidBackendUrl(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
