// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request/response contracts of the itinerary and chat services.
//!
//! Field names follow the services' JSON exactly.

use serde::{Deserialize, Serialize};

use crate::itinerary::Day;

/// Body of a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub city: String,
    pub interests: Vec<String>,
    /// Per-person budget as a plain decimal string.
    pub budget: String,
    pub people: String,
    pub from_date: String,
    pub to_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Currency the budget is expressed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Body of a generation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub itinerary: String,
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Structured days, when the service provides them.
    #[serde(default)]
    pub days: Option<Vec<Day>>,
}

/// Presentation preferences forwarded with each chat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPreferences {
    pub currency: String,
    pub country: String,
}

/// Body of a chat request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Itinerary context the question is about.
    pub itinerary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<ChatPreferences>,
}

/// Body of a chat response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_are_omitted_when_absent() {
        let request = GenerationRequest {
            city: "Paris".into(),
            interests: vec!["food".into()],
            budget: "1200".into(),
            people: "2".into(),
            from_date: "2026-05-01".into(),
            to_date: "2026-05-04".into(),
            comments: None,
            currency: Some("INR".into()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("comments").is_none());
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["from_date"], "2026-05-01");
    }

    #[test]
    fn minimal_generation_response_parses() {
        let response: GenerationResponse =
            serde_json::from_str(r#"{"itinerary":"Day 1: arrive"}"#).unwrap();
        assert_eq!(response.itinerary, "Day 1: arrive");
        assert!(response.weather.is_none());
        assert!(response.days.is_none());
    }

    #[test]
    fn response_without_itinerary_is_rejected() {
        let parsed = serde_json::from_str::<GenerationResponse>(r#"{"weather":"sunny"}"#);
        assert!(parsed.is_err());
    }
}
