/*
[INPUT]:  YAML configuration file and INCREASE_API_KEY
[OUTPUT]: Validated sandbox configuration and a ready client
[POS]:    Configuration layer - CLI setup
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, Result, bail};
use increase_client::{ClientConfig, Environment, IncreaseClient};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_KEY_ENV: &str = "INCREASE_API_KEY";

/// Configuration for the sandbox CLI
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SandboxConfig {
    /// API key; `INCREASE_API_KEY` takes precedence
    #[serde(default)]
    pub api_key: Option<String>,
    /// Deployment to target; simulations only exist in sandbox
    #[serde(default = "default_environment")]
    pub environment: Environment,
    /// Overrides the environment's base URL (mock servers, proxies)
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            environment: default_environment(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_environment() -> Environment {
    Environment::Sandbox
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_retries() -> u32 {
    2
}

impl SandboxConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config file {}", path.display()))?;
        Ok(config)
    }

    /// `<config dir>/increase/sandbox.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("increase").join("sandbox.yaml"))
    }

    /// Explicit path, else the default path when it exists, else defaults.
    /// The API key from the environment is applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|path| path.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        Ok(config.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
    }

    pub fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if let Some(api_key) = api_key.filter(|key| !key.trim().is_empty()) {
            self.api_key = Some(api_key);
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            environment: self.environment,
            timeout: Duration::from_secs(self.timeout_secs),
            max_retries: self.max_retries,
            ..ClientConfig::default()
        }
    }

    /// Build a client; performs no network I/O
    pub fn build_client(&self) -> Result<IncreaseClient> {
        let api_key = match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key,
            _ => bail!("no API key: set `api_key` in the config file or {API_KEY_ENV}"),
        };
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be greater than zero");
        }

        let client = match self.base_url.as_deref() {
            Some(base_url) => {
                IncreaseClient::with_config_and_base_url(api_key, self.client_config(), base_url)
            }
            None => IncreaseClient::with_config(api_key, self.client_config()),
        };
        client.context("build Increase client")
    }

    /// Key with all but the last four characters masked
    pub fn redacted_api_key(&self) -> Option<String> {
        self.api_key.as_deref().map(|key| {
            let len = key.chars().count();
            if len <= 4 {
                return "****".to_string();
            }
            let visible: String = key.chars().skip(len - 4).collect();
            format!("****{visible}")
        })
    }
}
