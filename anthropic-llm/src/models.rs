//! Fixed catalog of supported Claude models.

use crate::error::{LlmError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Model {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

impl Model {
    fn matches(&self, candidate: &str) -> bool {
        self.name == candidate || self.aliases.iter().any(|alias| *alias == candidate)
    }
}

/// Ordered; the first entry is the default model.
static MODELS: &[Model] = &[
    Model {
        name: "claude-3-opus-20240229",
        aliases: &["opus"],
    },
    Model {
        name: "claude-3-sonnet-20240229",
        // "sonet" is kept for hosts configured against the older catalog.
        aliases: &["sonnet", "sonet"],
    },
    Model {
        name: "claude-3-haiku-20240307",
        aliases: &["haiku"],
    },
];

pub fn models() -> &'static [Model] {
    MODELS
}

pub fn default_model() -> &'static str {
    MODELS[0].name
}

/// Map a model name or alias to its canonical identifier. First match wins.
pub fn resolve_model(candidate: &str) -> Result<&'static str> {
    MODELS
        .iter()
        .find(|m| m.matches(candidate))
        .map(|m| m.name)
        .ok_or_else(|| LlmError::InvalidModel(candidate.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_names_and_aliases_resolve_to_canonical() {
        for model in models() {
            assert_eq!(resolve_model(model.name).expect("canonical resolves"), model.name);
            for alias in model.aliases {
                assert_eq!(resolve_model(alias).expect("alias resolves"), model.name);
            }
        }
    }

    #[test]
    fn unknown_model_is_rejected() {
        for candidate in ["", "gpt-4o", "Opus", "claude-3-opus", " haiku"] {
            let err = resolve_model(candidate).expect_err("unknown model must fail");
            assert!(matches!(err, LlmError::InvalidModel(ref m) if m == candidate));
        }
    }

    #[test]
    fn both_sonnet_spellings_resolve() {
        for alias in ["sonnet", "sonet"] {
            assert_eq!(
                resolve_model(alias).expect("alias resolves"),
                "claude-3-sonnet-20240229"
            );
        }
    }

    #[test]
    fn default_model_is_first_entry() {
        assert_eq!(default_model(), "claude-3-opus-20240229");
    }

    #[test]
    fn catalog_serializes_as_name_and_aliases() {
        let v = serde_json::to_value(models()).expect("catalog serializes");
        assert_eq!(
            v,
            json!([
                {"name": "claude-3-opus-20240229", "aliases": ["opus"]},
                {"name": "claude-3-sonnet-20240229", "aliases": ["sonnet", "sonet"]},
                {"name": "claude-3-haiku-20240307", "aliases": ["haiku"]},
            ])
        );
    }
}
