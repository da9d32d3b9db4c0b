// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key fails
//! at startup instead of silently falling back to a default.

use serde::{Deserialize, Serialize};

/// Top-level Tripweave configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TripweaveConfig {
    /// Itinerary and chat service endpoints.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Currency marker rewriting and amount formatting.
    #[serde(default)]
    pub currency: CurrencyConfig,

    /// Planner defaults.
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Follow-up chat settings.
    #[serde(default)]
    pub chat: ChatConfig,

    /// Explore board settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Endpoints of the itinerary and chat services.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Scheme, host and port of the backend, without a trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_generate_path")]
    pub generate_path: String,

    #[serde(default = "default_chat_path")]
    pub chat_path: String,

    /// Per-request timeout. Generation can take a while on the backend.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            generate_path: default_generate_path(),
            chat_path: default_chat_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_generate_path() -> String {
    "/api/generate-itinerary".to_string()
}

fn default_chat_path() -> String {
    "/api/chat".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

/// Digit grouping used when formatting amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// `12,34,567` (lakh/crore grouping).
    #[default]
    Indian,
    /// `1,234,567`.
    Western,
}

/// Currency presentation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CurrencyConfig {
    /// Symbols the service may embed before an amount, e.g. `$`.
    #[serde(default = "default_source_symbols")]
    pub source_symbols: Vec<String>,

    /// Three-letter codes the service may embed as words, e.g. `USD`.
    #[serde(default = "default_source_codes")]
    pub source_codes: Vec<String>,

    #[serde(default = "default_target_symbol")]
    pub target_symbol: String,

    #[serde(default = "default_target_code")]
    pub target_code: String,

    /// Country forwarded to the chat service with the currency.
    #[serde(default = "default_country")]
    pub country: String,

    #[serde(default)]
    pub grouping: Grouping,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            source_symbols: default_source_symbols(),
            source_codes: default_source_codes(),
            target_symbol: default_target_symbol(),
            target_code: default_target_code(),
            country: default_country(),
            grouping: Grouping::default(),
        }
    }
}

fn default_source_symbols() -> Vec<String> {
    vec!["$".to_string()]
}

fn default_source_codes() -> Vec<String> {
    vec!["USD".to_string()]
}

fn default_target_symbol() -> String {
    "₹".to_string()
}

fn default_target_code() -> String {
    "INR".to_string()
}

fn default_country() -> String {
    "India".to_string()
}

/// Planner defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    /// Traveler count used when the form leaves it blank.
    #[serde(default = "default_travelers")]
    pub default_travelers: u32,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_travelers: default_travelers(),
            log_level: default_log_level(),
        }
    }
}

fn default_travelers() -> u32 {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Follow-up chat settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Text shown as the assistant's reply when a chat call fails.
    #[serde(default = "default_error_marker")]
    pub error_marker: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            error_marker: default_error_marker(),
        }
    }
}

fn default_error_marker() -> String {
    "Error fetching response.".to_string()
}

/// Explore board settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Cover image given to pins, which carry no image of their own.
    #[serde(default = "default_cover_image")]
    pub default_cover_image: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_cover_image: default_cover_image(),
        }
    }
}

fn default_cover_image() -> String {
    "https://images.unsplash.com/photo-1488646953014-85cb44e25828?q=80&w=2070&auto=format&fit=crop"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_parses_lowercase() {
        let config: CurrencyConfig = toml::from_str("grouping = \"western\"").unwrap();
        assert_eq!(config.grouping, Grouping::Western);
        assert_eq!(config.target_code, "INR");
    }

    #[test]
    fn unknown_grouping_is_rejected() {
        let result = toml::from_str::<CurrencyConfig>("grouping = \"roman\"");
        assert!(result.is_err());
    }

    #[test]
    fn defaults_target_local_backend() {
        let config = TripweaveConfig::default();
        assert_eq!(config.service.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.service.generate_path, "/api/generate-itinerary");
        assert_eq!(config.service.chat_path, "/api/chat");
        assert_eq!(config.planner.default_travelers, 2);
        assert_eq!(config.chat.error_marker, "Error fetching response.");
    }
}
