//! Server configuration, populated from environment variables.

use std::net::SocketAddr;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CONTACTBOOK_BIND must be a valid socket address (e.g. 0.0.0.0:3000), got {0:?}")]
    InvalidBind(String),
}

/// Runtime configuration for a contactbook server.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `CONTACTBOOK_BIND` | `0.0.0.0:3000` | TCP socket address to listen on |
/// | `CONTACTBOOK_DB` | (absent = in-memory) | Path to the SQLite database file |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,

    /// Path to the SQLite database file.
    /// `None` means use an in-memory store (data is lost on restart).
    pub db_path: Option<String>,
}

impl ServerConfig {
    /// Default listen address when `CONTACTBOOK_BIND` is unset.
    pub const DEFAULT_BIND: &'static str = "0.0.0.0:3000";

    /// Populate config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Populate config from an arbitrary key lookup, applying defaults where
    /// a key is absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup("CONTACTBOOK_BIND").unwrap_or_else(|| Self::DEFAULT_BIND.into());
        let bind_addr = bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind.clone()))?;

        Ok(Self {
            bind_addr,
            db_path: lookup("CONTACTBOOK_DB").filter(|p| !p.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert!(cfg.db_path.is_none());
    }

    #[test]
    fn explicit_values_are_used() {
        let cfg = config(&[
            ("CONTACTBOOK_BIND", "127.0.0.1:8080"),
            ("CONTACTBOOK_DB", "/tmp/contacts.db"),
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.db_path.as_deref(), Some("/tmp/contacts.db"));
    }

    #[test]
    fn invalid_bind_is_an_error() {
        let err = config(&[("CONTACTBOOK_BIND", "not-an-addr")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBind(_)));
    }
}
