//! Site configuration.
//!
//! Every field has a default, so pages without a `#folioConfig` island (or
//! with a partial one) behave identically to the stock site. Unknown keys are
//! ignored.

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DRAFT_KEY: &str = "portfolio_contact_draft_v1";
pub const DEFAULT_INDEX_PAGE: &str = "index.html";
pub const DEFAULT_CONFIRMATION_PAGE: &str = "contact.html";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Viewport width above which the collapsed menu is never left open.
    pub desktop_breakpoint: f64,
    /// Scroll offset above which the back-to-top control shows.
    pub back_to_top_threshold: f64,
    /// Fraction of a reveal target that must be in view.
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub draft_key: String,
    /// Filename assumed when the path ends with `/`.
    pub index_page: String,
    /// Page the relay redirects to after a send; visiting it drops the draft.
    pub confirmation_page: String,
    /// `EnvFilter` directive for the console logger.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint: 720.0,
            back_to_top_threshold: 350.0,
            reveal_threshold: 0.12,
            reveal_root_margin: "0px 0px -10% 0px".to_owned(),
            draft_key: DEFAULT_DRAFT_KEY.to_owned(),
            index_page: DEFAULT_INDEX_PAGE.to_owned(),
            confirmation_page: DEFAULT_CONFIRMATION_PAGE.to_owned(),
            log_level: "warn".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config island.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(raw)
            .map_err(|err| FolioError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("desktop_breakpoint", self.desktop_breakpoint),
            ("back_to_top_threshold", self.back_to_top_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FolioError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(FolioError::InvalidConfig(format!(
                "reveal_threshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }

        for (name, value) in [
            ("draft_key", &self.draft_key),
            ("index_page", &self.index_page),
            ("confirmation_page", &self.confirmation_page),
        ] {
            if value.trim().is_empty() {
                return Err(FolioError::InvalidConfig(format!("{name} must not be empty")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SiteConfig::from_json("{}").expect("empty config should parse");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.draft_key, "portfolio_contact_draft_v1");
        assert_eq!(config.desktop_breakpoint, 720.0);
        assert_eq!(config.back_to_top_threshold, 350.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{"confirmation_page": "merci.html", "unknown": true}"#,
        )
        .expect("partial config should parse");
        assert_eq!(config.confirmation_page, "merci.html");
        assert_eq!(config.index_page, "index.html");
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = SiteConfig::from_json(r#"{"reveal_threshold": 1.5}"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));
    }

    #[test]
    fn blank_draft_key_is_rejected() {
        let err = SiteConfig::from_json(r#"{"draft_key": "  "}"#).unwrap_err();
        assert!(err.to_string().contains("draft_key"));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(SiteConfig::from_json("not json").is_err());
    }
}
