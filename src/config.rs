use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// How long an origin response stays in the cache.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;
pub const DEFAULT_ORIGIN_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ORIGIN_BASE_URL: &str = "https://analyzerapi-2.onrender.com";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub origin_base_url: String,
    pub origin_timeout: Duration,
    /// `None` runs with the in-process store
    pub redis_url: Option<String>,
    pub cache_ttl: Duration,
    pub bind_addr: SocketAddr,
    pub cors_allow_origin: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| var(name).filter(|v| !v.trim().is_empty());

        let origin_base_url =
            non_empty("ORIGIN_BASE_URL").unwrap_or_else(|| DEFAULT_ORIGIN_BASE_URL.to_string());
        url::Url::parse(&origin_base_url).map_err(|_| ConfigError::Invalid {
            name: "ORIGIN_BASE_URL",
            value: origin_base_url.clone(),
        })?;

        let cache_ttl_secs = parse_secs(
            "CACHE_TTL_SECS",
            non_empty("CACHE_TTL_SECS"),
            DEFAULT_CACHE_TTL_SECS,
        )?;
        let origin_timeout_secs = parse_secs(
            "ORIGIN_TIMEOUT_SECS",
            non_empty("ORIGIN_TIMEOUT_SECS"),
            DEFAULT_ORIGIN_TIMEOUT_SECS,
        )?;

        let bind_raw = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        Ok(Self {
            origin_base_url,
            origin_timeout: Duration::from_secs(origin_timeout_secs),
            redis_url: non_empty("REDIS_URL"),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            bind_addr,
            cors_allow_origin: non_empty("CORS_ALLOW_ORIGIN"),
        })
    }
}

fn parse_secs(name: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => match value.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::Invalid { name, value }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.origin_base_url, DEFAULT_ORIGIN_BASE_URL);
        assert_eq!(config.redis_url, None);
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("CACHE_TTL_SECS", "120"),
            ("REDIS_URL", "redis://cache:6379/0"),
            ("ORIGIN_BASE_URL", "http://localhost:8000"),
            ("BIND_ADDR", "127.0.0.1:8080"),
        ])
        .unwrap();

        assert_eq!(config.cache_ttl, Duration::from_secs(120));
        assert_eq!(config.redis_url.as_deref(), Some("redis://cache:6379/0"));
        assert_eq!(config.origin_base_url, "http://localhost:8000");
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert_eq!(
            config(&[("CACHE_TTL_SECS", "0")]),
            Err(ConfigError::Invalid {
                name: "CACHE_TTL_SECS",
                value: "0".to_string()
            })
        );
        assert!(config(&[("ORIGIN_BASE_URL", "not a url")]).is_err());
        assert!(config(&[("BIND_ADDR", "nowhere")]).is_err());
    }

    #[test]
    fn test_blank_redis_url_means_memory_store() {
        let config = config(&[("REDIS_URL", "  ")]).unwrap();
        assert_eq!(config.redis_url, None);
    }
}
