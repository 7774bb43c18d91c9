use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use tugas_store::MongoConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub listen_addr: String,
    pub log_level: String,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            cors: CorsConfig::default(),
            telemetry: TelemetryConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// "mongodb" | "memory"
    #[serde(default = "StoreConfig::default_backend")]
    pub backend: String,
    #[serde(default)]
    pub mongo: MongoConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { backend: Self::default_backend(), mongo: MongoConfig::default() }
    }
}

impl StoreConfig {
    fn default_backend() -> String {
        "mongodb".to_string()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allow_any_origin: bool,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allow_any_origin: true, allowed_origins: vec![] }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { json: false }
    }
}

#[derive(Debug, Clone)]
pub struct Args {
    pub config: Option<String>,
}

impl Args {
    pub fn parse() -> Self {
        let mut config: Option<String> = None;
        let mut it = std::env::args().skip(1);
        while let Some(arg) = it.next() {
            if arg.as_str() == "--config" {
                if let Some(v) = it.next() {
                    config = Some(v);
                }
            }
        }
        Self { config }
    }
}

pub fn load_config(path: Option<&str>) -> Result<AppConfig> {
    match path {
        None => Ok(AppConfig::default()),
        Some(p) => {
            let raw = fs::read_to_string(Path::new(p))?;
            let mut cfg: AppConfig =
                serde_json::from_str(&raw).map_err(|e| anyhow!("invalid config json: {e}"))?;
            if cfg.listen_addr.trim().is_empty() {
                cfg.listen_addr = AppConfig::default().listen_addr;
            }
            if cfg.log_level.trim().is_empty() {
                cfg.log_level = AppConfig::default().log_level;
            }
            Ok(cfg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_config_file() {
        let cfg = load_config(None).unwrap();
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
        assert_eq!(cfg.store.backend, "mongodb");
        assert!(cfg.cors.allow_any_origin);
    }

    #[test]
    fn partial_config_fills_store_defaults() {
        let cfg: AppConfig = serde_json::from_str(
            r#"{"listen_addr":"127.0.0.1:9000","log_level":"debug","store":{"backend":"memory"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.store.backend, "memory");
        assert_eq!(cfg.store.mongo.database, "tugas");
        assert_eq!(cfg.store.mongo.collection, "requests");
    }
}
