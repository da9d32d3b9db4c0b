// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `tripweave check` command implementation.
//!
//! Runs quick diagnostics: configuration, currency rules, and the health of
//! the itinerary, chat and catalog adapters.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use colored::Colorize;
use tripweave_api::{HttpChatService, HttpItineraryService};
use tripweave_config::TripweaveConfig;
use tripweave_core::{HealthStatus, PluginAdapter, TripweaveError};
use tripweave_planner::{BuiltinCatalog, CurrencyNormalizer};

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub duration: Duration,
}

pub async fn run_check(config: &TripweaveConfig) -> Result<(), TripweaveError> {
    let use_color = std::io::stdout().is_terminal();

    let mut results = vec![check_config(config), check_currency(config)];
    match HttpItineraryService::new(config) {
        Ok(service) => results.push(check_adapter("Itinerary service", &service).await),
        Err(e) => results.push(client_failure("Itinerary service", &e)),
    }
    match HttpChatService::new(config) {
        Ok(service) => results.push(check_adapter("Chat service", &service).await),
        Err(e) => results.push(client_failure("Chat service", &e)),
    }
    results.push(check_adapter("Catalog", &BuiltinCatalog).await);

    println!();
    println!("  tripweave check");
    println!("  {}", "-".repeat(50));
    for result in &results {
        println!("{}", format_line(result, use_color));
    }
    println!();

    let issues = results
        .iter()
        .filter(|r| r.status != CheckStatus::Pass)
        .count();
    if issues > 0 {
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }
    println!();

    Ok(())
}

fn format_line(result: &CheckResult, use_color: bool) -> String {
    let duration_ms = result.duration.as_millis();
    let (symbol, message) = match (&result.status, use_color) {
        (CheckStatus::Pass, true) => ("✓".green().to_string(), result.message.clone()),
        (CheckStatus::Warn, true) => (
            "!".yellow().to_string(),
            result.message.yellow().to_string(),
        ),
        (CheckStatus::Fail, true) => ("✗".red().to_string(), result.message.red().to_string()),
        (CheckStatus::Pass, false) => ("[OK]  ".to_string(), result.message.clone()),
        (CheckStatus::Warn, false) => ("[WARN]".to_string(), result.message.clone()),
        (CheckStatus::Fail, false) => ("[FAIL]".to_string(), result.message.clone()),
    };
    format!("    {symbol} {:<20} {message} ({duration_ms}ms)", result.name)
}

/// The loaded configuration has already been validated.
fn check_config(config: &TripweaveConfig) -> CheckResult {
    CheckResult {
        name: "Configuration".to_string(),
        status: CheckStatus::Pass,
        message: format!("valid, backend {}", config.service.base_url),
        duration: Duration::ZERO,
    }
}

fn check_currency(config: &TripweaveConfig) -> CheckResult {
    let start = Instant::now();
    let (status, message) = match CurrencyNormalizer::new(&config.currency) {
        Ok(normalizer) => (
            CheckStatus::Pass,
            format!(
                "{} {} for {}",
                normalizer.target_code(),
                normalizer.format_amount(100_000.0),
                normalizer.country()
            ),
        ),
        Err(e) => (CheckStatus::Fail, e.to_string()),
    };
    CheckResult {
        name: "Currency".to_string(),
        status,
        message,
        duration: start.elapsed(),
    }
}

async fn check_adapter(name: &str, adapter: &dyn PluginAdapter) -> CheckResult {
    let start = Instant::now();
    let (status, message) = match adapter.health_check().await {
        Ok(HealthStatus::Healthy) => (CheckStatus::Pass, format!("{} reachable", adapter.name())),
        Ok(HealthStatus::Degraded(reason)) => (CheckStatus::Warn, reason),
        Ok(HealthStatus::Unhealthy(reason)) => (CheckStatus::Fail, reason),
        Err(e) => (CheckStatus::Fail, e.to_string()),
    };
    CheckResult {
        name: name.to_string(),
        status,
        message,
        duration: start.elapsed(),
    }
}

fn client_failure(name: &str, error: &TripweaveError) -> CheckResult {
    CheckResult {
        name: name.to_string(),
        status: CheckStatus::Fail,
        message: error.to_string(),
        duration: Duration::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_pad_the_name() {
        let result = CheckResult {
            name: "Chat service".into(),
            status: CheckStatus::Warn,
            message: "service returned 503".into(),
            duration: Duration::from_millis(12),
        };
        assert_eq!(
            format_line(&result, false),
            "    [WARN] Chat service         service returned 503 (12ms)"
        );
    }

    #[test]
    fn default_currency_passes() {
        let result = check_currency(&TripweaveConfig::default());
        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.message.starts_with("INR ₹1,00,000"));
    }

    #[tokio::test]
    async fn builtin_catalog_is_healthy() {
        let result = check_adapter("Catalog", &BuiltinCatalog).await;
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.message, "builtin-catalog reachable");
    }

    #[tokio::test]
    async fn unreachable_backend_fails() {
        let mut config = TripweaveConfig::default();
        config.service.base_url = "http://127.0.0.1:9".into();
        config.service.timeout_secs = 2;
        let service = HttpItineraryService::new(&config).unwrap();
        let result = check_adapter("Itinerary service", &service).await;
        assert_eq!(result.status, CheckStatus::Fail);
    }
}
