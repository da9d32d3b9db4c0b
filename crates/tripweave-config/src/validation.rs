// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::TripweaveConfig;

/// Validate a deserialized configuration.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &TripweaveConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let base_url = config.service.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        fail(format!(
            "service.base_url `{base_url}` must start with http:// or https://"
        ));
    }

    for (key, path) in [
        ("service.generate_path", &config.service.generate_path),
        ("service.chat_path", &config.service.chat_path),
    ] {
        if !path.starts_with('/') {
            fail(format!("{key} `{path}` must start with `/`"));
        }
    }

    if config.service.timeout_secs == 0 {
        fail("service.timeout_secs must be greater than zero".to_string());
    }

    if config.currency.target_symbol.trim().is_empty() {
        fail("currency.target_symbol must not be empty".to_string());
    }

    if !is_currency_code(&config.currency.target_code) {
        fail(format!(
            "currency.target_code `{}` must be three uppercase letters",
            config.currency.target_code
        ));
    }

    for code in &config.currency.source_codes {
        if !is_currency_code(code) {
            fail(format!(
                "currency.source_codes entry `{code}` must be three uppercase letters"
            ));
        }
    }

    if config
        .currency
        .source_symbols
        .iter()
        .any(|s| s.trim().is_empty())
    {
        fail("currency.source_symbols must not contain empty entries".to_string());
    }

    if config.planner.default_travelers == 0 {
        fail("planner.default_travelers must be at least 1".to_string());
    }

    if config.chat.error_marker.trim().is_empty() {
        fail("chat.error_marker must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_message(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&TripweaveConfig::default()).is_ok());
    }

    #[test]
    fn base_url_without_scheme_fails() {
        let mut config = TripweaveConfig::default();
        config.service.base_url = "127.0.0.1:5000".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "service.base_url"));
    }

    #[test]
    fn lowercase_currency_code_fails() {
        let mut config = TripweaveConfig::default();
        config.currency.target_code = "inr".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "currency.target_code"));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = TripweaveConfig::default();
        config.service.timeout_secs = 0;
        config.planner.default_travelers = 0;
        config.currency.source_symbols = vec![" ".to_string()];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
