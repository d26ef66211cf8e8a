use serde::{Deserialize, Serialize};
use thiserror::Error;

const SITE_JSON: &str = include_str!("../assets/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}

/// Site-wide settings, embedded at build time from `assets/site.json`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: Brand,
    pub timing: Timing,
    pub header: Header,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub short_name: String,
    pub tagline: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "Moledecc Leadership Transformational Initiative & Associates".to_string(),
            short_name: "Moledecc Transformational Initiative".to_string(),
            tagline: "Empowering Change, Transforming Leaders.".to_string(),
        }
    }
}

/// Every timer the site runs, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Timing {
    pub hero_slide_ms: u32,
    pub testimonial_ms: u32,
    pub values_ms: u32,
    pub chat_reply_ms: u32,
    pub contact_submit_ms: u32,
    pub counter_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            hero_slide_ms: 7000,
            testimonial_ms: 5000,
            values_ms: 5000,
            chat_reply_ms: 1000,
            contact_submit_ms: 1500,
            counter_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Header {
    pub scroll_threshold_px: f64,
    pub mobile_breakpoint_px: f64,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 10.0,
            mobile_breakpoint_px: 768.0,
        }
    }
}

impl SiteConfig {
    /// Parse the embedded `site.json`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("hero_slide_ms", self.timing.hero_slide_ms),
            ("testimonial_ms", self.timing.testimonial_ms),
            ("values_ms", self.timing.values_ms),
            ("counter_ms", self.timing.counter_ms),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::Invalid(format!("timing.{name} must be non-zero")));
        }
        if self.header.scroll_threshold_px < 0.0 {
            return Err(ConfigError::Invalid(
                "header.scroll_threshold_px must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::load().expect("site.json should parse");
        assert_eq!(config.timing.hero_slide_ms, 7000);
        assert_eq!(config.timing.testimonial_ms, 5000);
        assert_eq!(config.header.scroll_threshold_px, 10.0);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = SiteConfig::from_json(r#"{ "timing": { "chat_reply_ms": 250 } }"#).unwrap();
        assert_eq!(config.timing.chat_reply_ms, 250);
        assert_eq!(config.timing.contact_submit_ms, 1500);
        assert_eq!(config.header, Header::default());
        assert_eq!(config.brand, Brand::default());
    }

    #[test]
    fn zero_period_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "timing": { "values_ms": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("values_ms")));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
