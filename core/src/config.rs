//! Generator configuration.
//!
//! Nothing here changes what a seed produces on the success path.
//! Config governs error policy and clamping only.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What the template engine does with a `${token}` that has no resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPolicy {
    /// Fail the generation call with `GenError::UnresolvedToken`.
    #[default]
    Strict,
    /// Leave the placeholder verbatim and log a warning.
    Passthrough,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub token_policy: TokenPolicy,
    /// Upper bound for group adventures. Larger requests are clamped.
    pub max_party_size: u8,
    /// How deep resolver output may nest before expansion fails.
    pub max_template_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            token_policy: TokenPolicy::Strict,
            max_party_size: 6,
            max_template_depth: 8,
        }
    }
}

impl GeneratorConfig {
    /// Load config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.max_party_size >= 2, "max_party_size must be at least 2");
        anyhow::ensure!(self.max_template_depth >= 1, "max_template_depth must be at least 1");
        Ok(())
    }

    /// Config used by the test suites. Identical to `Default` today.
    pub fn default_test() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = GeneratorConfig::from_json(r#"{ "token_policy": "passthrough" }"#).unwrap();
        assert_eq!(cfg.token_policy, TokenPolicy::Passthrough);
        assert_eq!(cfg.max_party_size, 6);
        assert_eq!(cfg.max_template_depth, 8);
    }

    #[test]
    fn rejects_party_size_below_two() {
        assert!(GeneratorConfig::from_json(r#"{ "max_party_size": 1 }"#).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = GeneratorConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read"), "{err}");
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("petforge-cfg-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "max_party_size": 4 }"#).unwrap();
        let cfg = GeneratorConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(cfg.max_party_size, 4);
        assert_eq!(cfg.token_policy, TokenPolicy::Strict);
    }
}
