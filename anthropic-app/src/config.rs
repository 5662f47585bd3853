//! Layered host configuration: TOML file, then environment, then `--set` flags.

use anthropic_llm::{ConfigSource, KEY_API_KEY, KEY_MODEL, KEY_ROLE, KEY_TEMPERATURE};
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const KNOWN_KEYS: [&str; 4] = [KEY_API_KEY, KEY_ROLE, KEY_TEMPERATURE, KEY_MODEL];

const ENV_OVERRIDES: [(&str, &str); 4] = [
    ("ANTHROPIC_API_KEY", KEY_API_KEY),
    ("ANTHROPIC_ROLE", KEY_ROLE),
    ("ANTHROPIC_TEMPERATURE", KEY_TEMPERATURE),
    ("ANTHROPIC_MODEL", KEY_MODEL),
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_key: Option<String>,
    role: Option<String>,
    /// Either `temperature = "0.4"` or `temperature = 0.4`.
    temperature: Option<toml::Value>,
    model: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    values: BTreeMap<String, String>,
}

impl ConfigSource for HostConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl HostConfig {
    /// `path` of `None` reads the default location and tolerates it being absent.
    pub fn load(path: Option<PathBuf>, overrides: &[String]) -> anyhow::Result<Self> {
        let mut cfg = match path {
            Some(path) => Self::from_file(&path)?,
            None => {
                let path = default_config_path();
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    tracing::debug!(path = %path.display(), "no config file, skipping");
                    Self::default()
                }
            }
        };

        cfg.apply_env_overrides(|name| std::env::var(name).ok());
        cfg.apply_overrides(overrides)?;
        Ok(cfg)
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("parse config {}", path.display()))
    }

    fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let file: FileConfig = toml::from_str(contents)?;
        let mut values = BTreeMap::new();
        if let Some(v) = file.api_key {
            values.insert(KEY_API_KEY.to_string(), v);
        }
        if let Some(v) = file.role {
            values.insert(KEY_ROLE.to_string(), v);
        }
        if let Some(v) = file.temperature {
            let v = match v {
                toml::Value::String(s) => s,
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Integer(i) => i.to_string(),
                other => anyhow::bail!("temperature must be a string or number, got {other}"),
            };
            values.insert(KEY_TEMPERATURE.to_string(), v);
        }
        if let Some(v) = file.model {
            values.insert(KEY_MODEL.to_string(), v);
        }
        Ok(Self { values })
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for (var, key) in ENV_OVERRIDES {
            if let Some(v) = lookup(var) {
                if !v.trim().is_empty() {
                    self.values.insert(key.to_string(), v);
                }
            }
        }
    }

    fn apply_overrides(&mut self, overrides: &[String]) -> anyhow::Result<()> {
        for raw in overrides {
            let (key, value) = raw
                .split_once('=')
                .with_context(|| format!("--set expects key=value, got {raw:?}"))?;
            let key = key.trim();
            if !KNOWN_KEYS.contains(&key) {
                anyhow::bail!(
                    "unknown config key {key:?}; expected one of: {}",
                    KNOWN_KEYS.join(", ")
                );
            }
            self.values.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}

pub fn default_config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    Path::new(&home)
        .join(".anthropic-complete")
        .join("config.toml")
}
