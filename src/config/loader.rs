//! Config file loading

use super::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Section names a config file may nest its settings under.
const SECTION_KEYS: [&str; 2] = ["sms-segments", "segments"];

const CANDIDATES: [&str; 4] =
    ["sms-segments.toml", ".sms-segments.toml", "sms-segments.yml", "sms-segments.yaml"];

pub fn load_config(dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(dir),
    };

    let Some(config_file) = discovered else {
        tracing::debug!("No config file found in {}; using defaults", dir.display());
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    // An explicit config must parse; an auto-discovered one only warns.
    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

/// Parse TOML config, supporting nested [sms-segments] or [segments] sections.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = SECTION_KEYS.iter().find_map(|key| raw.get(*key).cloned()).unwrap_or(raw);

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting nested sms-segments or segments sections.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // An empty document parses as null; treat it as "no settings".
    if raw.is_null() {
        return Ok(Config::default());
    }

    let config_val = SECTION_KEYS.iter().find_map(|key| raw.get(*key).cloned()).unwrap_or(raw);

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| dir.join(candidate)).find(|path| path.exists())
}
