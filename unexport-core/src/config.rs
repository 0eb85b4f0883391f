//! Configuration loading from unexport.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Main configuration structure for unexport.toml.
///
/// Every field is optional; command-line flags take precedence over the
/// file where both are given.
#[derive(Debug, Deserialize, Default)]
pub struct UnexportConfig {
    /// Module path to analyze.
    pub target: Option<String>,
    /// Whether to load workspace modules as scan sources.
    pub include_workspace: Option<bool>,
    /// Whether to load core/standard modules as scan sources.
    pub include_core: Option<bool>,
    /// Candidate names or patterns to ignore.
    pub ignore: Option<Vec<String>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from unexport.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<UnexportConfig>> {
    let path = root.join("unexport.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid unexport.toml")?;
    Ok(Some(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let cfg: UnexportConfig = toml::from_str(
            r#"
target = "example.com/target"
include_workspace = true
include_core = false
ignore = ["Legacy*"]

[output]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(cfg.target.as_deref(), Some("example.com/target"));
        assert_eq!(cfg.include_core, Some(false));
        assert_eq!(cfg.ignore.as_deref(), Some(&["Legacy*".to_string()][..]));
        assert_eq!(
            cfg.output.and_then(|o| o.format).as_deref(),
            Some("json")
        );
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = std::env::temp_dir().join("unexport_config_missing");
        std::fs::create_dir_all(&dir).unwrap();
        assert!(load_config(&dir).unwrap().is_none());
    }
}
