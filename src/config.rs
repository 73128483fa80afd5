// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::gateway::LetterFailurePolicy;
use crate::provider::http::DEFAULT_BASE_URL;

pub const ENV_CONFIG_PATH: &str = "GUSTIX_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/gustix.toml";

pub const ENV_BASE_URL: &str = "MEALDB_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "GUSTIX_TIMEOUT_MS";
pub const ENV_LETTER_POLICY: &str = "GUSTIX_LETTER_POLICY";
pub const ENV_BIND: &str = "GUSTIX_BIND";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GustixConfig {
    #[serde(default = "default_base_url")]
    pub provider_base_url: String,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Unset means the HTTP client's own defaults apply.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
    #[serde(default)]
    pub letter_failure_policy: LetterFailurePolicy,
    /// Listen address for `gustix-serve` (Shuttle picks its own).
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for GustixConfig {
    fn default() -> Self {
        Self {
            provider_base_url: default_base_url(),
            user_agent: None,
            request_timeout_ms: None,
            letter_failure_policy: LetterFailurePolicy::default(),
            bind: default_bind(),
        }
    }
}

impl GustixConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    /// Load from an explicit TOML file, then apply env overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let mut cfg = parse_toml(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        cfg.apply_env()?;
        Ok(cfg)
    }

    /// Load using env var + fallbacks:
    /// 1) $GUSTIX_CONFIG_PATH (must exist when set)
    /// 2) config/gustix.toml
    /// 3) built-in defaults
    ///
    /// Env overrides are applied last in every case.
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
        }
        let toml_p = PathBuf::from(DEFAULT_CONFIG_PATH);
        if toml_p.exists() {
            return Self::load_from(&toml_p);
        }
        let mut cfg = Self::default();
        cfg.apply_env()?;
        Ok(cfg)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Some(v) = env_nonempty(ENV_BASE_URL) {
            self.provider_base_url = v;
        }
        if let Some(v) = env_nonempty(ENV_TIMEOUT_MS) {
            let ms = v
                .parse::<u64>()
                .with_context(|| format!("{ENV_TIMEOUT_MS} must be milliseconds, got {v:?}"))?;
            self.request_timeout_ms = Some(ms);
        }
        if let Some(v) = env_nonempty(ENV_LETTER_POLICY) {
            self.letter_failure_policy = v.parse()?;
        }
        if let Some(v) = env_nonempty(ENV_BIND) {
            self.bind = v;
        }
        Ok(())
    }
}

fn parse_toml(s: &str) -> Result<GustixConfig> {
    let cfg: GustixConfig = toml::from_str(s)?;
    Ok(cfg)
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
