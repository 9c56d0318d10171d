//! Shared CLI utilities.

use anyhow::{Context, Result};
use sms_segments::config::load_config;
use sms_segments::SmsCalculator;
use std::fs;
use std::path::Path;

/// Calculator and send limit resolved from config file and flags.
pub struct Settings {
    pub calculator: SmsCalculator,
    pub max_segments: Option<usize>,
}

/// Resolve settings with precedence CLI > config file > defaults.
pub fn load_settings(config: Option<&Path>, max_segments: Option<usize>) -> Result<Settings> {
    let cwd = std::env::current_dir().context("Failed reading current directory")?;
    let cfg = load_config(&cwd, config)?;
    let calculator = cfg.to_calculator().context("Invalid segment settings")?;
    Ok(Settings { calculator, max_segments: max_segments.or(cfg.max_segments) })
}

/// Read a template from `path`, or from stdin when `path` is `None`.
pub fn read_template(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed reading template: {}", path.display())),
        None => std::io::read_to_string(std::io::stdin()).context("Failed reading stdin"),
    }
}

/// Collapse `\r\n` to `\n` when `enabled`, so a Windows line ending bills once.
pub fn collapse_crlf(text: String, enabled: bool) -> String {
    if enabled && text.contains("\r\n") {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}

/// Error out when `segments` exceeds `limit`.
pub fn check_limit(segments: usize, limit: Option<usize>) -> Result<()> {
    match limit {
        Some(limit) if segments > limit => {
            anyhow::bail!("Message needs {} segments, limit is {}", segments, limit)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_crlf_only_when_enabled() {
        assert_eq!(collapse_crlf("a\r\nb".to_string(), false), "a\r\nb");
        assert_eq!(collapse_crlf("a\r\nb\r\n".to_string(), true), "a\nb\n");
        assert_eq!(collapse_crlf("a\rb".to_string(), true), "a\rb");
    }

    #[test]
    fn check_limit_allows_equal() {
        assert!(check_limit(2, Some(2)).is_ok());
        assert!(check_limit(3, Some(2)).is_err());
        assert!(check_limit(99, None).is_ok());
    }
}
