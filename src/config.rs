//! Runtime configuration
//!
//! Everything comes from the environment. Only the API key is required;
//! its absence aborts startup before any survey runs.

use crate::selector::{SelectorConfig, DEFAULT_API_URL, DEFAULT_MODEL};
use crate::store::DEFAULT_RESULTS_PATH;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const API_URL_VAR: &str = "SURVEY_API_URL";
pub const MODEL_VAR: &str = "SURVEY_MODEL";
pub const RESULTS_PATH_VAR: &str = "SURVEY_RESULTS_PATH";
pub const SEED_VAR: &str = "SURVEY_SEED";

/// Full configuration for a survey process
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    pub selector: SelectorConfig,

    /// Cumulative results file
    pub results_path: PathBuf,

    /// Seed for simulated answers (None = random)
    pub seed: Option<u64>,
}

impl SurveyConfig {
    /// Load from process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(api_key) = non_empty(API_KEY_VAR) else {
            anyhow::bail!(
                "{} not set. The survey requires API access to select questions.",
                API_KEY_VAR
            );
        };

        let seed = non_empty(SEED_VAR)
            .map(|s| s.trim().parse::<u64>())
            .transpose()
            .with_context(|| format!("{} must be an unsigned integer", SEED_VAR))?;

        Ok(Self {
            selector: SelectorConfig {
                api_url: non_empty(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                api_key: api_key.trim().to_string(),
                model: non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                ..Default::default()
            },
            results_path: non_empty(RESULTS_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_PATH)),
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let err = SurveyConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains(API_KEY_VAR));

        assert!(SurveyConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "  ")])).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = SurveyConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "sk-test")])).unwrap();

        assert_eq!(config.selector.api_key, "sk-test");
        assert_eq!(config.selector.api_url, DEFAULT_API_URL);
        assert_eq!(config.selector.model, DEFAULT_MODEL);
        assert_eq!(config.results_path, PathBuf::from(DEFAULT_RESULTS_PATH));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_overrides() {
        let config = SurveyConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "sk-test"),
            (API_URL_VAR, "http://localhost:8080/v1/chat/completions"),
            (MODEL_VAR, "openai/gpt-4o-mini"),
            (RESULTS_PATH_VAR, "/tmp/out.json"),
            (SEED_VAR, "42"),
        ]))
        .unwrap();

        assert_eq!(config.selector.api_url, "http://localhost:8080/v1/chat/completions");
        assert_eq!(config.selector.model, "openai/gpt-4o-mini");
        assert_eq!(config.results_path, PathBuf::from("/tmp/out.json"));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_bad_seed() {
        let result =
            SurveyConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "sk-test"), (SEED_VAR, "abc")]));
        assert!(result.is_err());
    }
}
