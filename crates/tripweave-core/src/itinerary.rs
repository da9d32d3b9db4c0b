// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trip requests and the finalized itinerary they produce.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An inclusive calendar range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting an end date that precedes the start date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whole days between start and end (zero for a same-day trip).
    pub fn span_days(&self) -> u32 {
        (self.end - self.start).num_days().max(0) as u32
    }

    /// Number of nights used for per-day budgeting. Never zero.
    pub fn nights(&self) -> u32 {
        self.span_days().max(1)
    }
}

/// A validated trip request. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub destination: String,
    pub dates: DateRange,
    pub budget_per_person: f64,
    pub travelers: u32,
    /// Comma-split, trimmed, non-empty interests in input order. Duplicates kept.
    pub interests: Vec<String>,
    pub notes: Option<String>,
}

impl TripRequest {
    /// Budget for the whole party.
    pub fn total_budget(&self) -> f64 {
        self.budget_per_person * f64::from(self.travelers)
    }
}

/// One planned activity within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Sortable time of day such as `09:30`. Empty when the service gave none.
    #[serde(default)]
    pub time: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub weather_sensitive: bool,
}

/// One day of the itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    #[serde(rename = "weather", default)]
    pub weather_note: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// The finalized, currency-normalized outcome of a generation attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub destination: String,
    pub dates: DateRange,
    pub travelers: u32,
    pub nights: u32,
    pub total_amount: f64,
    pub daily_amount: f64,
    /// `total_amount` in the target currency presentation.
    pub total_budget: String,
    /// `daily_amount` in the target currency presentation.
    pub daily_budget: String,
    pub weather_summary: String,
    pub summary: String,
    pub raw_itinerary: String,
    /// Ordered by date ascending.
    pub days: Vec<Day>,
}

/// The record handed to a persistence collaborator when saving an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedItinerary {
    pub user_id: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub total_budget: String,
    pub content: String,
}

impl SavedItinerary {
    pub fn from_result(user_id: impl Into<String>, result: &GenerationResult) -> Self {
        Self {
            user_id: user_id.into(),
            destination: result.destination.clone(),
            start_date: result.dates.start(),
            end_date: result.dates.end(),
            travelers: result.travelers,
            total_budget: result.total_budget.clone(),
            content: result.raw_itinerary.clone(),
        }
    }
}
