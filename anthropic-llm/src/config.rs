//! Resolves host key/value configuration into validated completion settings.

use crate::error::{LlmError, Result};
use crate::models;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

pub const KEY_API_KEY: &str = "api_key";
pub const KEY_ROLE: &str = "role";
pub const KEY_TEMPERATURE: &str = "temperature";
pub const KEY_MODEL: &str = "model";

const DEFAULT_TEMPERATURE: &str = "0.7";

/// Read-only key/value configuration supplied by the host.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

#[derive(Clone, PartialEq)]
pub struct ResolvedConfig {
    api_key: String,
    role: String,
    temperature: f64,
    model: &'static str,
}

impl ResolvedConfig {
    /// Validates in order api_key, role, temperature, model and stops at the first failure.
    pub fn resolve(source: &dyn ConfigSource) -> Result<Self> {
        let api_key = source.get(KEY_API_KEY).unwrap_or_default();
        if api_key.is_empty() {
            tracing::error!(key = KEY_API_KEY, "required config value not set");
            return Err(LlmError::MissingApiKey);
        }

        let role = source.get(KEY_ROLE).unwrap_or_else(|| {
            tracing::info!("role not set");
            String::new()
        });

        let requested_temperature = match source.get(KEY_TEMPERATURE) {
            Some(v) if !v.is_empty() => v,
            _ => {
                tracing::info!(default = DEFAULT_TEMPERATURE, "temperature not set, using default");
                DEFAULT_TEMPERATURE.to_string()
            }
        };
        let temperature = parse_temperature(&requested_temperature)?;

        let requested_model = source.get(KEY_MODEL).unwrap_or_else(|| {
            let default = models::default_model();
            tracing::info!(default, "model not set, using default");
            default.to_string()
        });
        let model = models::resolve_model(&requested_model)?;

        Ok(Self {
            api_key,
            role,
            temperature,
            model,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn model(&self) -> &'static str {
        self.model
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_key", &"<redacted>")
            .field("role", &self.role)
            .field("temperature", &self.temperature)
            .field("model", &self.model)
            .finish()
    }
}

fn parse_temperature(raw: &str) -> Result<f64> {
    let value: f64 = raw.parse().map_err(|e| LlmError::InvalidTemperature {
        value: raw.to_string(),
        reason: format!("must be a float: {e}"),
    })?;
    // NaN fails `contains` as well.
    if !(0.0..=1.0).contains(&value) {
        return Err(LlmError::InvalidTemperature {
            value: raw.to_string(),
            reason: "must be between 0.0 and 1.0".to_string(),
        });
    }
    Ok(value)
}
