//! Site configuration.
//!
//! Values live in `site.json` next to `Cargo.toml` and are embedded at
//! compile time. Missing keys fall back to [`SiteConfig::default`].

use std::time::Duration;

use leptos::prelude::*;
use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;

/// Raw `site.json`, baked into the wasm bundle.
pub const SITE_JSON: &str = include_str!("../site.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Text of the logo button in the navbar
    pub brand: String,
    /// Name printed in the footer copyright line
    pub owner: String,
    /// Height of the fixed navbar, subtracted from every scroll target
    pub nav_offset_px: f64,
    /// Scroll offset past which the navbar switches to its elevated style
    pub scroll_threshold_px: f64,
    pub toast_duration_ms: u64,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Arivamudham".into(),
            owner: "Arivamudham Business Solutions".into(),
            nav_offset_px: 80.0,
            scroll_threshold_px: 50.0,
            toast_duration_ms: 5000,
            log_level: "info".into(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration compiled into this build.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_offset("nav_offset_px", self.nav_offset_px)?;
        check_offset("scroll_threshold_px", self.scroll_threshold_px)?;
        if self.toast_duration_ms == 0 {
            return Err(ConfigError::ZeroToastDuration);
        }
        parse_level(&self.log_level)?;
        Ok(())
    }

    /// Max tracing level; `INFO` if `log_level` does not parse.
    pub fn max_level(&self) -> Level {
        parse_level(&self.log_level).unwrap_or(Level::INFO)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

fn check_offset(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidOffset { field, value })
    }
}

fn parse_level(raw: &str) -> Result<Level, ConfigError> {
    raw.trim()
        .parse::<Level>()
        .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))
}

/// Config provided by `App`, or the defaults when rendered outside of it.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_is_valid() {
        let config = SiteConfig::embedded().expect("site.json should parse");
        assert_eq!(config.nav_offset_px, 80.0);
        assert_eq!(config.scroll_threshold_px, 50.0);
        assert_eq!(config.brand, "Arivamudham");
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = SiteConfig::from_json(r#"{ "brand": "AM's Team" }"#).unwrap();
        assert_eq!(
            config,
            SiteConfig {
                brand: "AM's Team".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn rejects_negative_offset() {
        let err = SiteConfig::from_json(r#"{ "nav_offset_px": -10 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidOffset {
                field: "nav_offset_px",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_toast_duration() {
        let err = SiteConfig::from_json(r#"{ "toast_duration_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroToastDuration));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = SiteConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown log level `loud` (expected trace, debug, info, warn or error)"
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SiteConfig::from_json("{ brand: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let config = SiteConfig {
            log_level: "DEBUG".into(),
            ..Default::default()
        };
        assert_eq!(config.max_level(), Level::DEBUG);
    }

    #[test]
    fn toast_duration_in_millis() {
        let config = SiteConfig::default();
        assert_eq!(config.toast_duration(), Duration::from_millis(5000));
    }
}
