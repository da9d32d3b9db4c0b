// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trip form validation and the generation wire payload.

use chrono::NaiveDate;
use tripweave_config::model::PlannerConfig;
use tripweave_core::{DateRange, GenerationRequest, TripRequest, ValidationError};

/// Raw trip form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripForm {
    pub destination: String,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    /// `YYYY-MM-DD`.
    pub end_date: String,
    /// Budget per person.
    pub budget: String,
    /// Blank means the configured default.
    pub travelers: String,
    /// Comma-separated.
    pub interests: String,
    pub notes: String,
}

/// Turns a [`TripForm`] into a validated [`TripRequest`].
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    default_travelers: u32,
}

impl RequestBuilder {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            default_travelers: config.default_travelers.max(1),
        }
    }

    pub fn default_travelers(&self) -> u32 {
        self.default_travelers
    }

    /// Validates `form`.
    ///
    /// Required fields are checked first, in form order (destination, start
    /// date, end date, budget), and only the first missing one is reported.
    /// Parsing and range checks follow.
    pub fn build(&self, form: &TripForm) -> Result<TripRequest, ValidationError> {
        let destination = required("destination", &form.destination)?;
        let start = required("start_date", &form.start_date)?;
        let end = required("end_date", &form.end_date)?;
        let budget = required("budget", &form.budget)?;

        let start = parse_date("start_date", start)?;
        let end = parse_date("end_date", end)?;
        let dates = DateRange::new(start, end)?;

        let budget_per_person = parse_budget(budget)?;
        let travelers = match form.travelers.trim() {
            "" => self.default_travelers,
            raw => parse_travelers(raw)?,
        };

        let notes = form.notes.trim();

        Ok(TripRequest {
            destination: destination.to_string(),
            dates,
            budget_per_person,
            travelers,
            interests: parse_interests(&form.interests),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

/// Splits a comma-separated interest list, dropping blanks.
///
/// Order and duplicates are preserved.
pub fn parse_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Maps a validated request onto the generation service payload.
pub fn to_wire(request: &TripRequest, currency_code: &str) -> GenerationRequest {
    GenerationRequest {
        city: request.destination.clone(),
        interests: request.interests.clone(),
        budget: request.budget_per_person.to_string(),
        people: request.travelers.to_string(),
        from_date: request.dates.start().format("%Y-%m-%d").to_string(),
        to_date: request.dates.end().format("%Y-%m-%d").to_string(),
        comments: request.notes.clone(),
        currency: Some(currency_code.to_string()),
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(trimmed)
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| ValidationError::InvalidValue {
        field,
        reason: format!("expected YYYY-MM-DD, got {raw:?} ({e})"),
    })
}

fn parse_budget(raw: &str) -> Result<f64, ValidationError> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '_').collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidValue {
            field: "budget",
            reason: format!("expected a positive number, got {raw:?}"),
        }),
    }
}

fn parse_travelers(raw: &str) -> Result<u32, ValidationError> {
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ValidationError::InvalidValue {
            field: "travelers",
            reason: format!("expected a positive whole number, got {raw:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> RequestBuilder {
        RequestBuilder::new(&PlannerConfig::default())
    }

    fn paris_form() -> TripForm {
        TripForm {
            destination: "  Paris ".into(),
            start_date: "2026-05-01".into(),
            end_date: "2026-05-04".into(),
            budget: "1200".into(),
            travelers: "2".into(),
            interests: "food, museums,,  , food".into(),
            notes: "  ".into(),
        }
    }

    #[test]
    fn valid_form_builds_request() {
        let request = builder().build(&paris_form()).unwrap();
        assert_eq!(request.destination, "Paris");
        assert_eq!(request.dates.nights(), 3);
        assert_eq!(request.budget_per_person, 1200.0);
        assert_eq!(request.travelers, 2);
        assert_eq!(request.interests, vec!["food", "museums", "food"]);
        assert!(request.notes.is_none());
    }

    #[test]
    fn first_missing_field_in_form_order_is_reported() {
        let form = TripForm {
            destination: " ".into(),
            ..TripForm::default()
        };
        assert_eq!(
            builder().build(&form).unwrap_err(),
            ValidationError::MissingField { field: "destination" }
        );

        let form = TripForm {
            budget: String::new(),
            ..paris_form()
        };
        assert_eq!(
            builder().build(&form).unwrap_err(),
            ValidationError::MissingField { field: "budget" }
        );

        let form = TripForm {
            end_date: String::new(),
            budget: String::new(),
            ..paris_form()
        };
        assert_eq!(
            builder().build(&form).unwrap_err(),
            ValidationError::MissingField { field: "end_date" }
        );
    }

    #[test]
    fn reversed_dates_are_invalid_range() {
        let form = TripForm {
            start_date: "2026-05-10".into(),
            end_date: "2026-05-08".into(),
            ..paris_form()
        };
        assert!(matches!(
            builder().build(&form).unwrap_err(),
            ValidationError::InvalidRange { .. }
        ));
    }

    #[test]
    fn unparseable_values_are_invalid() {
        let bad_date = TripForm {
            start_date: "05/01/2026".into(),
            ..paris_form()
        };
        assert!(matches!(
            builder().build(&bad_date).unwrap_err(),
            ValidationError::InvalidValue { field: "start_date", .. }
        ));

        for budget in ["-5", "0", "abc", "inf"] {
            let form = TripForm {
                budget: budget.into(),
                ..paris_form()
            };
            assert!(
                matches!(
                    builder().build(&form).unwrap_err(),
                    ValidationError::InvalidValue { field: "budget", .. }
                ),
                "budget {budget:?} should be rejected"
            );
        }

        let form = TripForm {
            travelers: "0".into(),
            ..paris_form()
        };
        assert!(matches!(
            builder().build(&form).unwrap_err(),
            ValidationError::InvalidValue { field: "travelers", .. }
        ));
    }

    #[test]
    fn blank_travelers_uses_default() {
        let form = TripForm {
            travelers: String::new(),
            ..paris_form()
        };
        assert_eq!(builder().build(&form).unwrap().travelers, 2);

        let solo = RequestBuilder::new(&PlannerConfig {
            default_travelers: 1,
            ..PlannerConfig::default()
        });
        assert_eq!(solo.build(&form).unwrap().travelers, 1);
    }

    #[test]
    fn budget_accepts_grouping_separators() {
        let form = TripForm {
            budget: "1,20,000".into(),
            ..paris_form()
        };
        assert_eq!(builder().build(&form).unwrap().budget_per_person, 120000.0);
    }

    #[test]
    fn wire_payload_uses_plain_strings() {
        let form = TripForm {
            notes: " vegetarian please ".into(),
            budget: "1250.5".into(),
            ..paris_form()
        };
        let request = builder().build(&form).unwrap();
        let wire = to_wire(&request, "INR");
        assert_eq!(wire.city, "Paris");
        assert_eq!(wire.budget, "1250.5");
        assert_eq!(wire.people, "2");
        assert_eq!(wire.from_date, "2026-05-01");
        assert_eq!(wire.to_date, "2026-05-04");
        assert_eq!(wire.comments.as_deref(), Some("vegetarian please"));
        assert_eq!(wire.currency.as_deref(), Some("INR"));

        let whole = to_wire(&builder().build(&paris_form()).unwrap(), "INR");
        assert_eq!(whole.budget, "1200");
        assert!(whole.comments.is_none());
    }
}
