use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "calendario.toml";

/// Top-level calendario configuration.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CalendarioConfig {
    /// JSON file holding the stored custom events.
    #[serde(default)]
    pub custom_events: Option<PathBuf>,

    /// Number of months shown by `window`.
    #[serde(default = "default_window_months")]
    pub window_months: usize,

    /// Reject impossible custom-event dates instead of rolling them over.
    #[serde(default)]
    pub strict_dates: bool,
}

fn default_window_months() -> usize {
    cal_events::MonthWindow::DEFAULT_LEN
}

impl Default for CalendarioConfig {
    fn default() -> Self {
        Self {
            custom_events: None,
            window_months: default_window_months(),
            strict_dates: false,
        }
    }
}

impl CalendarioConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse TOML config")
    }

    /// Load the config.
    ///
    /// An explicit `path` must exist.  Without one, [`DEFAULT_CONFIG_FILE`]
    /// is read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };
        if !required && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Self::from_toml(&toml_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = CalendarioConfig::from_toml("").unwrap();
        assert_eq!(cfg, CalendarioConfig::default());
        assert_eq!(cfg.window_months, 4);
        assert!(!cfg.strict_dates);
    }

    #[test]
    fn full_document() {
        let cfg = CalendarioConfig::from_toml(
            r#"
            custom_events = "eventos.json"
            window_months = 6
            strict_dates = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.custom_events, Some(PathBuf::from("eventos.json")));
        assert_eq!(cfg.window_months, 6);
        assert!(cfg.strict_dates);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(CalendarioConfig::from_toml("colour = \"red\"").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = Path::new("/definitely/not/here/calendario.toml");
        assert!(CalendarioConfig::load(Some(missing)).is_err());
    }
}
