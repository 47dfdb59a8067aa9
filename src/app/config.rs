use super::keymap::KeyConfig;
use crate::domain::models::SearchLimits;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerProfile {
    pub name: String,
    pub url: String,
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    /// Environment variable holding the password, used when `password` is unset.
    #[serde(default)]
    pub password_env: Option<String>,
}

impl ServerProfile {
    pub fn resolve_password(&self) -> Result<String> {
        if let Some(password) = &self.password {
            return Ok(password.clone());
        }
        let var = self
            .password_env
            .as_deref()
            .ok_or_else(|| anyhow!("No password configured for server '{}'", self.name))?;
        std::env::var(var)
            .with_context(|| format!("Password env var {var} not set for server '{}'", self.name))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    #[serde(default)]
    pub default_server: Option<String>,
    #[serde(default)]
    pub servers: Vec<ServerProfile>,
    #[serde(default)]
    pub keys: KeyConfig,
}

fn default_debounce_ms() -> u64 {
    400
}

fn default_result_limit() -> usize {
    SearchLimits::PALETTE_LIMIT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            result_limit: default_result_limit(),
            default_server: None,
            servers: Vec::new(),
            keys: KeyConfig::default(),
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("tonearm");
        path.push("config.toml");
        path
    })
}

impl AppConfig {
    /// Loads `path`, or the default location when `None`. A missing file yields
    /// the defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match get_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            servers = config.servers.len(),
            "config loaded"
        );
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.result_limit == 0 {
            return Err(anyhow!("result_limit must be at least 1"));
        }
        Ok(config)
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub fn limits(&self) -> SearchLimits {
        SearchLimits::uniform(self.result_limit)
    }

    /// The profile named by `override_name`, else `default_server`, else the first one.
    #[must_use]
    pub fn active_profile(&self, override_name: Option<&str>) -> Option<&ServerProfile> {
        match override_name.or(self.default_server.as_deref()) {
            Some(name) => self.servers.iter().find(|s| s.name == name),
            None => self.servers.first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
debounce_ms = 250
result_limit = 6
default_server = "attic"

[[servers]]
name = "home"
url = "http://localhost:4533"
username = "admin"
password = "secret"

[[servers]]
name = "attic"
url = "https://music.example.org"
username = "me"
password_env = "TONEARM_TEST_UNSET_PASSWORD"

[keys]
profile = "default"
[keys.custom]
toggle_palette = "ctrl+p"
"#;

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.debounce(), Duration::from_millis(250));
        assert_eq!(config.limits(), SearchLimits::uniform(6));
        assert_eq!(config.servers.len(), 2);
        assert_eq!(config.active_profile(None).unwrap().name, "attic");
        assert_eq!(config.active_profile(Some("home")).unwrap().name, "home");
        assert!(config.active_profile(Some("nope")).is_none());
        assert_eq!(
            config.keys.custom.as_ref().unwrap().get("toggle_palette").map(String::as_str),
            Some("ctrl+p")
        );
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.debounce(), Duration::from_millis(400));
        assert_eq!(config.limits(), SearchLimits::default());
        assert!(config.active_profile(None).is_none());
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(AppConfig::from_toml("result_limit = 0").is_err());
    }

    #[test]
    fn test_password_resolution() {
        let config = AppConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.servers[0].resolve_password().unwrap(), "secret");
        let err = config.servers[1].resolve_password().unwrap_err();
        assert!(err.to_string().contains("TONEARM_TEST_UNSET_PASSWORD"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.servers[0].url, "http://localhost:4533");

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert_eq!(AppConfig::load(Some(&missing)).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"servers = 3").unwrap();
        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid config"));
    }
}
