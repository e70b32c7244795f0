//! Start-up configuration read from the environment.

use stockroom_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

/// Interface settings. Read once, before logging is initialized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliConfig {
    pub log_format: LogFormat,
    /// When set, the low-stock menu lists only items at or below this quantity.
    pub low_stock_threshold: Option<i64>,
    /// Variables that were set but could not be parsed, as `(name, value)`.
    ignored: Vec<(&'static str, String)>,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = CliConfig::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(_) => config.ignored.push((LOG_FORMAT_VAR, raw)),
            }
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_VAR) {
            match raw.trim().parse::<i64>() {
                Ok(threshold) => config.low_stock_threshold = Some(threshold),
                Err(_) => config.ignored.push((LOW_STOCK_THRESHOLD_VAR, raw)),
            }
        }

        config
    }

    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = Some(threshold);
        self
    }

    pub fn ignored(&self) -> &[(&'static str, String)] {
        &self.ignored
    }

    /// Log the variables that were ignored. Call after the subscriber is installed.
    pub fn report_ignored(&self) {
        for (var, value) in &self.ignored {
            tracing::warn!(var = *var, value = %value, "ignoring unparseable setting");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = from_pairs(&[]);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.low_stock_threshold, None);
        assert!(config.ignored().is_empty());
    }

    #[test]
    fn reads_both_settings() {
        let config = from_pairs(&[(LOG_FORMAT_VAR, "json"), (LOW_STOCK_THRESHOLD_VAR, " 15 ")]);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.low_stock_threshold, Some(15));
    }

    #[test]
    fn bad_values_fall_back_and_are_remembered() {
        let config = from_pairs(&[(LOG_FORMAT_VAR, "yaml"), (LOW_STOCK_THRESHOLD_VAR, "lots")]);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.low_stock_threshold, None);
        assert_eq!(
            config.ignored(),
            &[
                (LOG_FORMAT_VAR, "yaml".to_string()),
                (LOW_STOCK_THRESHOLD_VAR, "lots".to_string()),
            ]
        );
    }
}
