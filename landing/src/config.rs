//! Landing page configuration.
//!
//! `landing.toml` is compiled into the binary; there is no filesystem in the
//! browser to read it from at runtime.

use aoclima_carousel::{CarouselError, RotatorTiming};
use serde::Deserialize;
use thiserror::Error;

const EMBEDDED: &str = include_str!("../landing.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse landing config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid landing config: {0}")]
    Invalid(#[from] CarouselError),
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// tracing `EnvFilter` directives for the console logger
    pub log_filter: String,
    /// Card rotator timing
    pub carousel: RotatorTiming,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            carousel: RotatorTiming::default(),
        }
    }
}

impl LandingConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.carousel.validate()?;
        Ok(config)
    }

    /// The copy of `landing.toml` baked in at compile time.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config = LandingConfig::embedded().expect("embedded landing.toml");
        assert_eq!(config.carousel, RotatorTiming::default());
        assert!(config.log_filter.starts_with("info"));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = LandingConfig::from_toml_str("").unwrap();
        assert_eq!(config, LandingConfig::default());

        let config = LandingConfig::from_toml_str("[carousel]\nadvance_every_ms = 8000\n").unwrap();
        assert_eq!(config.carousel.advance_every_ms, 8_000);
        assert_eq!(config.carousel.transition_ms, 500);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn zero_durations_are_rejected() {
        let err = LandingConfig::from_toml_str("[carousel]\ntransition_ms = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(CarouselError::ZeroDuration {
                field: "transition_ms"
            })
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = LandingConfig::from_toml_str("log_filter = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse landing config"));
    }
}
