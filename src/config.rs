//! Runtime settings for the `pocket` binary.
//!
//! Values come from the process environment, after loading a `.env` file from
//! the working directory if one exists.

use std::time::Duration;

use crate::deferred::SQUARE_DELAY;
use crate::error::AppError;

const ENV_SQUARE_DELAY_MS: &str = "POCKET_SQUARE_DELAY_MS";
const ENV_LOG: &str = "POCKET_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Delay used by `pocket square` when `--delay-ms` is not given.
    pub square_delay: Duration,
    /// Tracing filter directive; overrides the `-v` count when set.
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            square_delay: SQUARE_DELAY,
            log_filter: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut settings = Settings::default();

        if let Some(raw) = lookup(ENV_SQUARE_DELAY_MS) {
            let ms: u64 = raw.trim().parse().map_err(|e| {
                AppError::new(2, format!("Invalid {ENV_SQUARE_DELAY_MS} '{raw}': {e}"))
            })?;
            settings.square_delay = Duration::from_millis(ms);
        }

        settings.log_filter = lookup(ENV_LOG)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.square_delay, Duration::from_millis(1000));
    }

    #[test]
    fn reads_delay_and_log_filter() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("POCKET_SQUARE_DELAY_MS", " 5 "),
            ("POCKET_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(settings.square_delay, Duration::from_millis(5));
        assert_eq!(settings.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn blank_log_filter_is_ignored() {
        let settings = Settings::from_lookup(lookup_from(&[("POCKET_LOG", "  ")])).unwrap();
        assert!(settings.log_filter.is_none());
    }

    #[test]
    fn invalid_delay_is_an_input_error() {
        let err = Settings::from_lookup(lookup_from(&[("POCKET_SQUARE_DELAY_MS", "soon")])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("POCKET_SQUARE_DELAY_MS"));
    }
}
