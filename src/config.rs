use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("Reveal threshold must be between 0 and 1, got {0}")]
    ThresholdOutOfRange(f64),
    #[error("Failed to parse {key}: {value}")]
    ParseError { key: &'static str, value: String },
}

/// Site-wide tunables. Overridable at build time through `PORTFOLIO_*`
/// environment variables, everything else is static content.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub log_level: log::Level,
    pub reveal_threshold: f64,
    pub stagger_ms: u32,
    pub delay_children_ms: u32,
    pub reduced_motion: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: log::Level::Info,
            reveal_threshold: 0.1,
            stagger_ms: 100,
            delay_children_ms: 200,
            reduced_motion: false,
        }
    }
}

impl SiteConfig {
    /// Build a config from a key lookup. Missing keys fall back to defaults,
    /// malformed ones are reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup("PORTFOLIO_LOG_LEVEL") {
            config.log_level = level
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(level.clone()))?;
        }

        if let Some(raw) = lookup("PORTFOLIO_REVEAL_THRESHOLD") {
            let threshold: f64 = raw.trim().parse().map_err(|_| ConfigError::ParseError {
                key: "PORTFOLIO_REVEAL_THRESHOLD",
                value: raw.clone(),
            })?;
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ThresholdOutOfRange(threshold));
            }
            config.reveal_threshold = threshold;
        }

        if let Some(raw) = lookup("PORTFOLIO_STAGGER_MS") {
            config.stagger_ms = raw.trim().parse().map_err(|_| ConfigError::ParseError {
                key: "PORTFOLIO_STAGGER_MS",
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup("PORTFOLIO_REDUCED_MOTION") {
            config.reduced_motion = match raw.trim() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::ParseError {
                        key: "PORTFOLIO_REDUCED_MOTION",
                        value: raw.clone(),
                    })
                }
            };
        }

        Ok(config)
    }

    /// Config from the `PORTFOLIO_*` variables captured at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
                "PORTFOLIO_REVEAL_THRESHOLD" => option_env!("PORTFOLIO_REVEAL_THRESHOLD"),
                "PORTFOLIO_STAGGER_MS" => option_env!("PORTFOLIO_STAGGER_MS"),
                "PORTFOLIO_REDUCED_MOTION" => option_env!("PORTFOLIO_REDUCED_MOTION"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}

thread_local! {
    static SITE: SiteConfig = SiteConfig::from_build_env().unwrap_or_default();
}

/// The active site configuration.
pub fn site() -> SiteConfig {
    SITE.with(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = SiteConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.stagger_ms, 100);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_LOG_LEVEL", "debug"),
            ("PORTFOLIO_REVEAL_THRESHOLD", "0.25"),
            ("PORTFOLIO_STAGGER_MS", "80"),
            ("PORTFOLIO_REDUCED_MOTION", "true"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, log::Level::Debug);
        assert_eq!(config.reveal_threshold, 0.25);
        assert_eq!(config.stagger_ms, 80);
        assert!(config.reduced_motion);
    }

    #[test]
    fn test_threshold_out_of_range_is_rejected() {
        let err = SiteConfig::from_lookup(lookup_from(&[("PORTFOLIO_REVEAL_THRESHOLD", "1.5")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::ThresholdOutOfRange(1.5));
    }

    #[test]
    fn test_malformed_values_are_reported() {
        assert!(matches!(
            SiteConfig::from_lookup(lookup_from(&[("PORTFOLIO_STAGGER_MS", "fast")])),
            Err(ConfigError::ParseError { key: "PORTFOLIO_STAGGER_MS", .. })
        ));
        assert!(matches!(
            SiteConfig::from_lookup(lookup_from(&[("PORTFOLIO_LOG_LEVEL", "loud")])),
            Err(ConfigError::InvalidLogLevel(_))
        ));
        assert!(SiteConfig::from_lookup(lookup_from(&[("PORTFOLIO_REDUCED_MOTION", "maybe")])).is_err());
    }
}
