// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trip budget arithmetic.
//!
//! Totals are always derived from the request, never taken from the service.

use tripweave_core::TripRequest;

/// Whole-trip and per-night budget figures for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetBreakdown {
    pub nights: u32,
    pub total: f64,
    /// `total / nights`, rounded to whole units.
    pub daily: f64,
}

impl BudgetBreakdown {
    pub fn for_request(request: &TripRequest) -> Self {
        let nights = request.dates.nights();
        let total = request.total_budget();
        Self {
            nights,
            total,
            daily: (total / f64::from(nights)).round(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;
    use tripweave_core::DateRange;

    fn request(per_person: f64, travelers: u32, span_days: i64) -> TripRequest {
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        TripRequest {
            destination: "Goa".into(),
            dates: DateRange::new(start, start + Duration::days(span_days)).unwrap(),
            budget_per_person: per_person,
            travelers,
            interests: vec![],
            notes: None,
        }
    }

    #[test]
    fn total_is_per_person_times_travelers() {
        let b = BudgetBreakdown::for_request(&request(1200.0, 2, 3));
        assert_eq!(b.total, 2400.0);
        assert_eq!(b.nights, 3);
        assert_eq!(b.daily, 800.0);
    }

    #[test]
    fn same_day_trip_counts_one_night() {
        let b = BudgetBreakdown::for_request(&request(500.0, 1, 0));
        assert_eq!(b.nights, 1);
        assert_eq!(b.daily, 500.0);
    }

    #[test]
    fn daily_is_rounded() {
        let b = BudgetBreakdown::for_request(&request(1000.0, 1, 3));
        assert_eq!(b.daily, 333.0);
    }

    proptest! {
        #[test]
        fn daily_times_nights_stays_near_total(
            per_person in 1.0f64..1_000_000.0,
            travelers in 1u32..50,
            span in 0i64..365,
        ) {
            let b = BudgetBreakdown::for_request(&request(per_person, travelers, span));
            prop_assert!(b.nights >= 1);
            let drift = (b.daily * f64::from(b.nights) - b.total).abs();
            // Rounding moves each night by at most half a unit.
            prop_assert!(drift <= 0.5 * f64::from(b.nights) + 1e-6);
        }
    }
}
