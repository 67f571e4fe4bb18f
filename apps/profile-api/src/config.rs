use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SESSION_TTL_SECONDS: u64 = 1800;
const DEFAULT_SESSION_CAPACITY: u64 = 10_000;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub session_ttl_seconds: u64,
    pub session_capacity: u64,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = parse(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let session_ttl_seconds = parse(
            &lookup,
            "SESSION_TTL_SECONDS",
            &DEFAULT_SESSION_TTL_SECONDS.to_string(),
        )?;
        let session_capacity = parse(
            &lookup,
            "SESSION_CAPACITY",
            &DEFAULT_SESSION_CAPACITY.to_string(),
        )?;
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        if session_ttl_seconds == 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL_SECONDS",
                value: "0".into(),
                reason: "must be positive".into(),
            });
        }

        Ok(Self {
            bind_addr,
            session_ttl_seconds,
            session_capacity,
            log_level,
        })
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    let parsed = value.trim().parse::<T>();
    match parsed {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.session_ttl_seconds, 1800);
        assert_eq!(config.session_capacity, 10_000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("SESSION_TTL_SECONDS", "60"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.session_ttl_seconds, 60);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_lookup(lookup_from(&[("BIND_ADDR", "nowhere")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));

        let err =
            AppConfig::from_lookup(lookup_from(&[("SESSION_TTL_SECONDS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SESSION_TTL_SECONDS", .. }));
    }
}
