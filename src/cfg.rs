use envconfig::Envconfig;

use crate::error::NotifyError;

/// Endpoint literal that dumps the payload to stdout instead of posting it.
pub const CONSOLE_ENDPOINT: &str = "console";

// Unset and empty variables are equivalent; required values are checked
// where they are consumed.
#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(from = "TEAMS_WEBHOOK", default = "")]
    pub webhook: String,
    #[envconfig(from = "TEAMS_TITLE", default = "")]
    pub title: String,
    #[envconfig(from = "TEAMS_MESSAGE", default = "")]
    pub message: String,
    #[envconfig(from = "TEAMS_COLOR", default = "")]
    pub color: String,
    #[envconfig(from = "TEAMS_CARD_MODE", default = "")]
    pub card_mode: String,
    #[envconfig(from = "TEAMS_CARD_PATH", default = "")]
    pub card_path: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardMode {
    Text,
    Template,
}

impl Config {
    pub fn validate(&self) -> Result<(), NotifyError> {
        if self.webhook.is_empty() {
            return Err(NotifyError::usage("URL is required"));
        }
        Ok(())
    }

    /// Case-sensitive exact match; empty selector falls back to text mode.
    pub fn card_mode(&self) -> Result<CardMode, NotifyError> {
        match self.card_mode.as_str() {
            "" | "TEXT" => Ok(CardMode::Text),
            "TEMPLATE" => Ok(CardMode::Template),
            other => Err(NotifyError::usage(format!("Unknown mode: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            webhook: CONSOLE_ENDPOINT.to_string(),
            title: String::new(),
            message: "hello".to_string(),
            color: String::new(),
            card_mode: String::new(),
            card_path: String::new(),
        }
    }

    #[test]
    fn missing_webhook_is_a_usage_error() {
        let mut cfg = base_config();
        cfg.webhook = String::new();
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "URL is required");
    }

    #[test]
    fn webhook_present_passes_validation() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn empty_mode_defaults_to_text() {
        assert_eq!(base_config().card_mode().unwrap(), CardMode::Text);
    }

    #[test]
    fn explicit_modes_are_recognised() {
        let mut cfg = base_config();
        cfg.card_mode = "TEXT".to_string();
        assert_eq!(cfg.card_mode().unwrap(), CardMode::Text);
        cfg.card_mode = "TEMPLATE".to_string();
        assert_eq!(cfg.card_mode().unwrap(), CardMode::Template);
    }

    #[test]
    fn mode_match_is_case_sensitive() {
        let mut cfg = base_config();
        cfg.card_mode = "template".to_string();
        let err = cfg.card_mode().unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Unknown mode: template");
    }

    #[test]
    fn unknown_mode_reports_the_value() {
        let mut cfg = base_config();
        cfg.card_mode = "FOO".to_string();
        let err = cfg.card_mode().unwrap_err();
        assert_eq!(err.to_string(), "Unknown mode: FOO");
    }
}
