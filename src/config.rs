use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Directory names skipped wherever they appear in the tree.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".venv", "venv", "__pycache__", ".git"];

/// Extensions (without the leading dot) that qualify a file for inclusion.
pub const INCLUDED_EXTENSIONS: &[&str] = &["ts", "js", "json", "tsx", "py"];

/// Default output file, written to the current working directory.
pub const DEFAULT_OUTPUT: &str = "source_extract.md";

/// Optional YAML config (`c2md.yml` / `c2md.yaml`).
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Additional ignore patterns (substring matches against the path).
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Extensions appended to the built-in allow-list. A leading dot is
    /// tolerated ("md" and ".md" both work).
    #[serde(default)]
    pub extra_extensions: Vec<String>,
}

/// Attempt to load config from c2md.yml or c2md.yaml, returning None if not found.
pub fn load_config_file() -> Result<Option<Config>> {
    for candidate in &["c2md.yml", "c2md.yaml"] {
        if Path::new(candidate).exists() {
            let text = fs::read_to_string(candidate)?;
            let config: Config = serde_yaml::from_str(&text)?;
            eprintln!("Loaded config from {}", candidate);
            return Ok(Some(config));
        }
    }
    Ok(None)
}
