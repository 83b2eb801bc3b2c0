//! Service configuration loaded from YAML, with environment overrides for
//! secrets.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const SITE_NAME_ENV: &str = "OPENROUTER_SITE_NAME";

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_elevation_url() -> String {
    "https://api.open-elevation.com/api/v1/lookup".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_generation_timeout_secs() -> u64 {
    120
}

fn default_openrouter_url() -> String {
    "https://openrouter.ai/api/v1/chat/completions".to_string()
}

fn default_vision_model() -> String {
    "google/gemini-flash-1.5".to_string()
}

fn default_image_model() -> String {
    "google/gemini-2.5-flash-image".to_string()
}

fn default_site_name() -> String {
    "https://stenaldern.app".to_string()
}

fn default_title() -> String {
    "Stenåldern App".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub elevation: ElevationConfig,
    #[serde(default)]
    pub openrouter: OpenRouterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevationConfig {
    #[serde(default = "default_elevation_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ElevationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ElevationConfig {
    fn default() -> Self {
        Self {
            url: default_elevation_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    #[serde(default = "default_openrouter_url")]
    pub url: String,
    #[serde(default = "default_vision_model")]
    pub vision_model: String,
    #[serde(default = "default_image_model")]
    pub image_model: String,
    #[serde(default = "default_site_name")]
    pub site_name: String,
    #[serde(default = "default_title")]
    pub title: String,
    /// Applies to each vision or image request.
    #[serde(default = "default_generation_timeout_secs")]
    pub timeout_secs: u64,
}

impl OpenRouterConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            url: default_openrouter_url(),
            vision_model: default_vision_model(),
            image_model: default_image_model(),
            site_name: default_site_name(),
            title: default_title(),
            timeout_secs: default_generation_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ServiceConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Failed to parse service configuration")
    }

    /// Environment values win over the file.
    pub fn apply_env_overrides(&mut self) {
        if let Some(site) = non_empty_env(SITE_NAME_ENV) {
            self.openrouter.site_name = site;
        }
    }
}

/// The OpenRouter key is only ever read from the environment.
pub fn openrouter_api_key() -> Option<String> {
    non_empty_env(API_KEY_ENV)
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<ServiceConfig> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: ServiceConfig = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads `file` when given, defaults otherwise.
    pub fn load_or_default(&self, file: Option<&Path>) -> Result<ServiceConfig> {
        match file {
            Some(file) => self.load(file),
            None => {
                let mut config = ServiceConfig::default();
                config.apply_env_overrides();
                Ok(config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ServiceConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.elevation.timeout(), Duration::from_secs(10));
        assert_eq!(config.openrouter.image_model, "google/gemini-2.5-flash-image");
        assert_eq!(config.openrouter.timeout(), Duration::from_secs(120));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = ServiceConfig::from_yaml_str(
            "server:\n  port: 8080\nelevation:\n  url: http://localhost:9000/lookup\n",
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.elevation.url, "http://localhost:9000/lookup");
        assert_eq!(config.elevation.timeout_secs, 10);
    }

    #[test]
    fn loader_reads_relative_to_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("service.yaml"),
            "openrouter:\n  vision_model: test/vision\n  timeout_secs: 30\nlogging:\n  level: debug\n",
        )
        .unwrap();

        let config = ConfigLoader::new(dir.path()).load("service.yaml").unwrap();
        assert_eq!(config.openrouter.vision_model, "test/vision");
        assert_eq!(config.openrouter.timeout_secs, 30);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn loader_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::new(dir.path()).load("absent.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(ServiceConfig::from_yaml_str("server: [1, 2").is_err());
    }
}
