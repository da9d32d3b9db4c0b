// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal rendering of itineraries and catalog entries.

use colored::Colorize;
use tripweave_core::{Activity, GenerationResult, LocalPin, RemoteItem};
use tripweave_planner::{CommunityCatalog, CurrencyNormalizer, ItineraryNavigator};

/// Trip header: destination, dates, party size, budgets and weather.
pub fn header(result: &GenerationResult, nav: &ItineraryNavigator) -> Vec<String> {
    let mut lines = vec![
        format!("Trip to {}", result.destination).bold().to_string(),
        format!(
            "{} to {} ({} days, {} nights), {} traveler{}",
            result.dates.start(),
            result.dates.end(),
            nav.trip_length_days(),
            result.nights,
            result.travelers,
            if result.travelers == 1 { "" } else { "s" }
        ),
        format!(
            "budget: {} total, {} per day",
            result.total_budget, result.daily_budget
        ),
    ];
    if !result.weather_summary.trim().is_empty() {
        lines.push(format!("weather: {}", result.weather_summary.trim()));
    }
    let rainy = nav.rainy_days();
    if rainy > 0 {
        lines.push(
            format!(
                "{rainy} day{} with rain in the forecast",
                if rainy == 1 { "" } else { "s" }
            )
            .yellow()
            .to_string(),
        );
    }
    if !result.summary.is_empty() {
        lines.push(String::new());
        lines.push(result.summary.clone());
    }
    lines
}

/// Day list. Only the expanded day shows its activities.
///
/// Falls back to the raw itinerary text when no days could be structured.
pub fn days(nav: &ItineraryNavigator) -> Vec<String> {
    if nav.days().is_empty() {
        return nav.result().raw_itinerary.lines().map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for (index, day) in nav.days().iter().enumerate() {
        let marker = if nav.is_expanded(index) { "v" } else { ">" };
        let count = nav.activity_count(index).unwrap_or(0);
        let mut line = format!(
            "{marker} {} {}  ({count} activit{})",
            format!("Day {}", index + 1).bold(),
            day.date.format("%a %d %b"),
            if count == 1 { "y" } else { "ies" }
        );
        if !day.weather_note.is_empty() {
            line.push_str(&format!("  {}", day.weather_note.dimmed()));
        }
        lines.push(line);

        if nav.is_expanded(index) {
            lines.extend(day.activities.iter().map(activity));
        }
    }
    lines
}

fn activity(activity: &Activity) -> String {
    let mut line = format!("    {:>5}  {}", activity.time, activity.name);
    if !activity.location.is_empty() {
        line.push_str(&format!(" @ {}", activity.location));
    }
    if !activity.cost.is_empty() {
        line.push_str(&format!("  {}", activity.cost.cyan()));
    }
    if activity.weather_sensitive {
        line.push_str(&format!("  {}", "[outdoor]".dimmed()));
    }
    if let Some(notes) = &activity.notes {
        line.push_str(&format!("\n           {}", notes.dimmed()));
    }
    line
}

/// One catalog line with the display like count and a localized budget.
pub fn remote_item(
    item: &RemoteItem,
    catalog: &CommunityCatalog,
    normalizer: &CurrencyNormalizer,
) -> String {
    let heart = if catalog.is_liked(item.id) { "♥" } else { "♡" };
    format!(
        "{:>3}  {}  {} · {} · {}  {heart} {}  {}",
        item.id.0,
        item.title.bold(),
        item.destination,
        item.duration,
        normalizer.rewrite(&item.budget),
        catalog.display_like_count(item),
        format!("by {}", item.author).dimmed()
    )
}

pub fn pin(pin: &LocalPin) -> String {
    let mut line = format!(
        "{}  {}  {}",
        pin.id.to_string().magenta(),
        pin.title.bold(),
        pin.destination
    );
    if let Some(notes) = &pin.notes {
        line.push_str(&format!("  {}", notes.dimmed()));
    }
    line
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tripweave_config::TripweaveConfig;
    use tripweave_planner::{TripForm, TripPlanner};
    use tripweave_test_utils::{MockChatService, MockItineraryService};

    use super::*;

    async fn ready_navigator() -> ItineraryNavigator {
        let planner = TripPlanner::new(
            &TripweaveConfig::default(),
            Arc::new(MockItineraryService::new()),
            Arc::new(MockChatService::new()),
        )
        .unwrap();
        planner
            .plan(&TripForm {
                destination: "Paris".into(),
                start_date: "2026-05-01".into(),
                end_date: "2026-05-04".into(),
                budget: "1200".into(),
                travelers: "2".into(),
                ..TripForm::default()
            })
            .await
            .unwrap();
        planner.navigator().unwrap()
    }

    #[tokio::test]
    async fn header_lists_budgets_and_weather() {
        let nav = ready_navigator().await;
        let lines = header(nav.result(), &nav);
        assert!(lines[1].contains("2026-05-01 to 2026-05-04 (4 days, 3 nights), 2 travelers"));
        assert!(lines[2].contains("₹2,400 total, ₹800 per day"));
        assert!(lines.iter().any(|l| l.contains("Mostly sunny")));
    }

    #[tokio::test]
    async fn only_expanded_day_lists_activities() {
        let mut nav = ready_navigator().await;
        let lines = days(&nav);
        assert_eq!(lines.len(), 2 + 2);
        assert!(lines[1].contains("Check in @ the hotel"));
        assert!(lines[2].contains("Lunch @ a local bistro"));
        assert!(lines[2].contains("₹40"));

        nav.toggle_day(1);
        let lines = days(&nav);
        assert_eq!(lines.len(), 2 + 1);
        assert!(lines[2].contains("Walking tour"));
    }
}
