// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recovering structure from narrative itinerary text.
//!
//! The generation service answers with prose. [`NarrativeParser`] extracts a
//! summary paragraph and, when the service sent no structured days, rebuilds
//! the day list from `Day N` headings and the bullet lines below them.

use chrono::{Days, NaiveDate};
use regex::Regex;
use tripweave_core::{Activity, Day, TripweaveError};

/// Picks the summary shown above an itinerary.
///
/// The service summary wins, then the first paragraph of the itinerary, then
/// a generic line naming the destination.
pub fn summarize(service_summary: Option<&str>, itinerary: &str, destination: &str) -> String {
    if let Some(summary) = service_summary.map(str::trim).filter(|s| !s.is_empty()) {
        return summary.to_string();
    }

    let paragraph = itinerary
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .take_while(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if paragraph.trim().is_empty() {
        format!("Your personalized itinerary for {destination}")
    } else {
        paragraph.trim().to_string()
    }
}

/// Line-oriented parser for `Day N` sections.
#[derive(Debug, Clone)]
pub struct NarrativeParser {
    heading: Regex,
    bullet: Regex,
    time: Regex,
    cost: Regex,
    priced_aside: Regex,
    trailing_price: Regex,
    weather: Regex,
    outdoor: Regex,
}

impl NarrativeParser {
    pub fn new() -> Result<Self, TripweaveError> {
        Ok(Self {
            heading: compile(r"(?i)^[\s#>*_]*day\s+(\d{1,3})\b[*_]*\s*(?:[:.)\-–—]+\s*)?(.*)$")?,
            bullet: compile(r"^\s*[-*•]\s+(.+)$")?,
            time: compile(r"(?i)^(\d{1,2}):(\d{2})\s*(?:([ap])\.?m\b\.?)?\s*(?:[-–:]\s*)?")?,
            cost: compile(r"\p{Sc}\s?\d[\d,]*(?:\.\d+)?")?,
            priced_aside: compile(r"\s*\([^)]*\p{Sc}\s?\d[^)]*\)")?,
            trailing_price: compile(r"\s*[-–—:,]\s*\p{Sc}\s?\d[\d,]*(?:\.\d+)?\s*$")?,
            weather: compile(
                r"(?i)\b(?:sunny|sunshine|rain|rainy|raining|showers?|storms?|stormy|thunder\w*|cloudy|clouds|overcast|snow|snowy|windy|breezy|fog|foggy|drizzle|humid|mild|hot|cold|warm|chilly|weather|forecast)\b|\d+\s?°|\b\d{1,3}\s?[CF]\b",
            )?,
            outdoor: compile(
                r"(?i)\b(?:beach\w*|hik\w*|trek\w*|park|gardens?|walk\w*|tour|cruise|boat\w*|outdoors?|picnic|snorkel\w*|kayak\w*|safari|surf\w*|swim\w*|market|viewpoint|sunset|sunrise)\b",
            )?,
        })
    }

    /// Rebuilds days from `Day N` headings, dating day N as `start + (N - 1)`.
    ///
    /// Text outside a day section, and non-bullet text inside one, is ignored.
    pub fn days(&self, itinerary: &str, start: NaiveDate) -> Vec<Day> {
        let mut days: Vec<Day> = Vec::new();
        let mut open = false;

        for line in itinerary.lines() {
            if let Some(caps) = self.heading.captures(line) {
                let date = caps[1]
                    .parse::<u64>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .and_then(|n| start.checked_add_days(Days::new(n - 1)));
                open = match date {
                    Some(date) => {
                        days.push(Day {
                            date,
                            weather_note: self.weather_note(&caps[2]),
                            activities: Vec::new(),
                        });
                        true
                    }
                    None => false,
                };
                continue;
            }

            if !open {
                continue;
            }
            if let Some(caps) = self.bullet.captures(line) {
                if let Some(day) = days.last_mut() {
                    day.activities.push(self.activity(&caps[1]));
                }
            }
        }

        days
    }

    fn weather_note(&self, heading_rest: &str) -> String {
        let rest = heading_rest
            .trim()
            .trim_matches(|c: char| c == '*' || c == '_' || c == '#')
            .trim();
        if self.weather.is_match(rest) {
            rest.to_string()
        } else {
            String::new()
        }
    }

    fn activity(&self, bullet_text: &str) -> Activity {
        let text = bullet_text.replace("**", "");
        let text = text.trim();

        let (time, rest) = match self.time.captures(text) {
            Some(caps) => match clock_time(&caps[1], &caps[2], caps.get(3).map(|m| m.as_str())) {
                Some(time) => (time, &text[caps[0].len()..]),
                None => (String::new(), text),
            },
            None => (String::new(), text),
        };

        let cost = self
            .cost
            .find(rest)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let without_aside = self.priced_aside.replace_all(rest, "");
        let cleaned = self.trailing_price.replace(&without_aside, "");
        let cleaned = cleaned.trim();

        let (name, location) = match cleaned.split_once(" at ") {
            Some((name, location)) if !name.trim().is_empty() => (
                name.trim(),
                location.trim().trim_end_matches(['.', ',', ';']).trim(),
            ),
            _ => (cleaned, ""),
        };

        Activity {
            time,
            name: name.trim_end_matches(['.', ',', ';']).to_string(),
            location: location.to_string(),
            notes: None,
            cost,
            weather_sensitive: self.outdoor.is_match(text),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, TripweaveError> {
    Regex::new(pattern)
        .map_err(|e| TripweaveError::Internal(format!("narrative pattern failed to compile: {e}")))
}

/// `HH:MM` in 24-hour form, or `None` for an impossible clock reading.
fn clock_time(hour: &str, minute: &str, meridiem: Option<&str>) -> Option<String> {
    let mut hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if minute > 59 {
        return None;
    }
    match meridiem.map(|m| m.to_ascii_lowercase()) {
        Some(m) if m == "p" => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            if hour != 12 {
                hour += 12;
            }
        }
        Some(_) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            if hour == 12 {
                hour = 0;
            }
        }
        None => {
            if hour > 23 {
                return None;
            }
        }
    }
    Some(format!("{hour:02}:{minute:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> NarrativeParser {
        NarrativeParser::new().unwrap()
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
    }

    #[test]
    fn summary_prefers_service_value() {
        assert_eq!(summarize(Some("  Sun and food "), "ignored", "Goa"), "Sun and food");
    }

    #[test]
    fn summary_falls_back_to_first_paragraph() {
        let text = "\nFour days of museums.\nAnd pastries.\n\nDay 1: Arrive";
        assert_eq!(summarize(None, text, "Paris"), "Four days of museums.\nAnd pastries.");
        assert_eq!(summarize(Some(" "), text, "Paris"), "Four days of museums.\nAnd pastries.");
    }

    #[test]
    fn summary_defaults_to_destination_line() {
        assert_eq!(summarize(None, "   \n\n", "Kyoto"), "Your personalized itinerary for Kyoto");
    }

    #[test]
    fn headings_open_dated_days() {
        let text = "Intro line\n\
                    **Day 1: Arrival, sunny and 24C**\n\
                    - 10:00 Check in at Hotel Lumiere\n\
                    ### Day 3 - Museums\n\
                    * 9:30 am Louvre visit ($20)\n\
                    Some prose that is not a bullet\n\
                    • 2:15 PM Seine river cruise - $35\n";
        let days = parser().days(text, start());

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, start());
        assert_eq!(days[0].weather_note, "Arrival, sunny and 24C");
        assert_eq!(days[0].activities.len(), 1);
        assert_eq!(days[0].activities[0].time, "10:00");
        assert_eq!(days[0].activities[0].name, "Check in");
        assert_eq!(days[0].activities[0].location, "Hotel Lumiere");

        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2026, 5, 3).unwrap());
        assert_eq!(days[1].weather_note, "");
        let louvre = &days[1].activities[0];
        assert_eq!(louvre.time, "09:30");
        assert_eq!(louvre.name, "Louvre visit");
        assert_eq!(louvre.cost, "$20");
        let cruise = &days[1].activities[1];
        assert_eq!(cruise.time, "14:15");
        assert_eq!(cruise.name, "Seine river cruise");
        assert_eq!(cruise.cost, "$35");
        assert!(cruise.weather_sensitive);
        assert!(!louvre.weather_sensitive);
    }

    #[test]
    fn bullets_before_any_day_are_ignored() {
        let days = parser().days("- 10:00 Breakfast\nDay 1\n- Dinner", start());
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].activities.len(), 1);
        assert_eq!(days[0].activities[0].name, "Dinner");
        assert_eq!(days[0].activities[0].time, "");
    }

    #[test]
    fn day_zero_closes_the_section() {
        let days = parser().days("Day 1\n- Lunch\nDay 0\n- Lost", start());
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].activities.len(), 1);
    }

    #[test]
    fn impossible_clock_readings_stay_in_the_name() {
        let days = parser().days("Day 1\n- 25:00 Night market", start());
        let activity = &days[0].activities[0];
        assert_eq!(activity.time, "");
        assert_eq!(activity.name, "25:00 Night market");
    }

    #[test]
    fn noon_and_midnight() {
        assert_eq!(clock_time("12", "00", Some("p")).as_deref(), Some("12:00"));
        assert_eq!(clock_time("12", "30", Some("A")).as_deref(), Some("00:30"));
        assert_eq!(clock_time("13", "00", Some("p")), None);
        assert_eq!(clock_time("7", "05", None).as_deref(), Some("07:05"));
    }

    #[test]
    fn text_without_headings_yields_no_days() {
        assert!(parser().days("Just a paragraph about Rome.", start()).is_empty());
    }
}
