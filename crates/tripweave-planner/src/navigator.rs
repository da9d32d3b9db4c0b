// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Day-by-day navigation over a finalized itinerary.

use std::sync::Arc;

use tripweave_core::{Day, GenerationResult};

const RAIN_WORDS: [&str; 4] = ["rain", "shower", "storm", "drizzle"];

/// Read-only view of a result with at most one expanded day.
#[derive(Debug, Clone)]
pub struct ItineraryNavigator {
    result: Arc<GenerationResult>,
    expanded: Option<usize>,
}

impl ItineraryNavigator {
    /// Opens on the first day when there is one.
    pub fn new(result: Arc<GenerationResult>) -> Self {
        let expanded = (!result.days.is_empty()).then_some(0);
        Self { result, expanded }
    }

    pub fn result(&self) -> &GenerationResult {
        &self.result
    }

    pub fn days(&self) -> &[Day] {
        &self.result.days
    }

    pub fn day(&self, index: usize) -> Option<&Day> {
        self.result.days.get(index)
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn expanded_day(&self) -> Option<&Day> {
        self.expanded.and_then(|i| self.day(i))
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Expands `index`, or collapses it if it is already expanded.
    ///
    /// Indexes past the last day are ignored.
    pub fn toggle_day(&mut self, index: usize) {
        if index >= self.result.days.len() {
            return;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn activity_count(&self, index: usize) -> Option<usize> {
        self.day(index).map(|d| d.activities.len())
    }

    /// Days whose weather note mentions rain, showers or storms.
    pub fn rainy_days(&self) -> usize {
        self.result
            .days
            .iter()
            .filter(|day| {
                let note = day.weather_note.to_lowercase();
                RAIN_WORDS.iter().any(|w| note.contains(w))
            })
            .count()
    }

    /// Calendar days covered by the trip, counting both ends.
    pub fn trip_length_days(&self) -> u32 {
        self.result.dates.span_days() + 1
    }
}
