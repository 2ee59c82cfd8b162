use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use beacon_store::{EventStore, InMemoryEventStore, LogEventStore};
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};
use crate::router::HEALTH_PATH;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Path the collection endpoint is mounted on.
    pub collect_path: String,
    pub store: StoreBackend,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            collect_path: "/collect".into(),
            store: StoreBackend::default(),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded server config");
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> ServerResult<()> {
        if !self.collect_path.starts_with('/') {
            return Err(ServerError::Config(format!(
                "collect_path must start with '/': {}",
                self.collect_path
            )));
        }
        if self.collect_path == HEALTH_PATH {
            return Err(ServerError::Config(format!(
                "collect_path clashes with the health endpoint: {HEALTH_PATH}"
            )));
        }
        Ok(())
    }
}

/// Which [`EventStore`] the server hands events to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Keep events in process memory.
    Memory,
    /// Emit events as structured log records.
    #[default]
    Log,
}

impl StoreBackend {
    pub fn build(self) -> Arc<dyn EventStore> {
        match self {
            Self::Memory => Arc::new(InMemoryEventStore::new()),
            Self::Log => Arc::new(LogEventStore::new()),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(Self::Memory),
            "log" => Ok(Self::Log),
            other => Err(ServerError::Config(format!("unknown store backend: {other}"))),
        }
    }
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Log => f.write_str("log"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(c.collect_path, "/collect");
        assert_eq!(c.store, StoreBackend::Log);
        c.validate().unwrap();
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ServerConfig::from_toml_str("store = \"memory\"").unwrap();
        assert_eq!(c.store, StoreBackend::Memory);
        assert_eq!(c.collect_path, "/collect");
    }

    #[test]
    fn full_toml() {
        let c = ServerConfig::from_toml_str(
            r#"
            bind_addr = "0.0.0.0:9000"
            collect_path = "/g/collect"
            store = "log"
            "#,
        )
        .unwrap();
        assert_eq!(c.bind_addr.port(), 9000);
        assert_eq!(c.collect_path, "/g/collect");
    }

    #[test]
    fn rejects_unknown_backend() {
        let err = ServerConfig::from_toml_str("store = \"postgres\"").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn rejects_relative_path() {
        let err = ServerConfig::from_toml_str("collect_path = \"collect\"").unwrap_err();
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn rejects_health_clash() {
        let err = ServerConfig::from_toml_str("collect_path = \"/health\"").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"127.0.0.1:9999\"").unwrap();
        let c = ServerConfig::load(file.path()).unwrap();
        assert_eq!(c.bind_addr.port(), 9999);
    }

    #[test]
    fn load_missing_file() {
        let err = ServerConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }

    #[test]
    fn backend_from_str() {
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!("log".parse::<StoreBackend>().unwrap(), StoreBackend::Log);
        assert!("disk".parse::<StoreBackend>().is_err());
        assert_eq!(StoreBackend::Memory.to_string(), "memory");
    }
}
