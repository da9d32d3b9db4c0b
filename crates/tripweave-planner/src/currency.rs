// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Currency marker rewriting and amount formatting.
//!
//! The rewrite grammar is small: a configured source symbol
//! immediately followed by a digit becomes the target symbol, and a configured
//! source code standing alone as a word becomes the target code. Digits are
//! never touched, so no exchange-rate conversion happens here.

use regex::{Captures, NoExpand, Regex};
use tripweave_config::model::{CurrencyConfig, Grouping};
use tripweave_core::TripweaveError;

/// Rewrites currency markers in free text and formats amounts.
#[derive(Debug, Clone)]
pub struct CurrencyNormalizer {
    symbol_marker: Option<Regex>,
    code_marker: Option<Regex>,
    target_symbol: String,
    target_code: String,
    country: String,
    grouping: Grouping,
}

impl CurrencyNormalizer {
    pub fn new(config: &CurrencyConfig) -> Result<Self, TripweaveError> {
        let symbol_marker = alternation(&config.source_symbols)
            .map(|alt| compile(&format!("(?:{alt})(\\d)")))
            .transpose()?;
        let code_marker = alternation(&config.source_codes)
            .map(|alt| compile(&format!(r"\b(?:{alt})\b")))
            .transpose()?;

        Ok(Self {
            symbol_marker,
            code_marker,
            target_symbol: config.target_symbol.clone(),
            target_code: config.target_code.clone(),
            country: config.country.clone(),
            grouping: config.grouping,
        })
    }

    pub fn target_symbol(&self) -> &str {
        &self.target_symbol
    }

    pub fn target_code(&self) -> &str {
        &self.target_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Replaces source currency markers in `text` with the target ones.
    pub fn rewrite(&self, text: &str) -> String {
        let mut out = text.to_string();
        if let Some(re) = &self.symbol_marker {
            let target = self.target_symbol.as_str();
            out = re
                .replace_all(&out, |caps: &Captures<'_>| format!("{target}{}", &caps[1]))
                .into_owned();
        }
        if let Some(re) = &self.code_marker {
            out = re.replace_all(&out, NoExpand(self.target_code.as_str())).into_owned();
        }
        out
    }

    /// Formats `amount` as whole units with the target symbol and digit grouping.
    pub fn format_amount(&self, amount: f64) -> String {
        let rounded = amount.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        let digits = format!("{:.0}", rounded.abs());
        format!("{sign}{}{}", self.target_symbol, group_digits(&digits, self.grouping))
    }
}

fn alternation(markers: &[String]) -> Option<String> {
    let escaped: Vec<String> = markers
        .iter()
        .filter(|m| !m.is_empty())
        .map(|m| regex::escape(m))
        .collect();
    if escaped.is_empty() {
        None
    } else {
        Some(escaped.join("|"))
    }
}

fn compile(pattern: &str) -> Result<Regex, TripweaveError> {
    Regex::new(pattern)
        .map_err(|e| TripweaveError::Config(format!("invalid currency marker pattern: {e}")))
}

/// Inserts thousands separators into a string of ASCII digits.
fn group_digits(digits: &str, grouping: Grouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let size = match grouping {
        Grouping::Indian => 2,
        Grouping::Western => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}
