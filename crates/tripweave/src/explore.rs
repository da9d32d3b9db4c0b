// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `tripweave explore` command implementation.

use colored::Colorize;
use tripweave_config::TripweaveConfig;
use tripweave_core::{RemoteItemId, TripweaveError, ValidationError};
use tripweave_planner::{BuiltinCatalog, CommunityCatalog, CurrencyNormalizer};

use crate::{ExploreArgs, render};

pub async fn run_explore(
    config: &TripweaveConfig,
    args: ExploreArgs,
) -> Result<(), TripweaveError> {
    let normalizer = CurrencyNormalizer::new(&config.currency)?;
    let mut catalog = CommunityCatalog::new(&config.catalog);
    catalog.load(&BuiltinCatalog).await?;

    for line in apply(&mut catalog, &args, &normalizer)? {
        println!("{line}");
    }
    Ok(())
}

/// Applies the pin and like flags, then renders the search results.
pub(crate) fn apply(
    catalog: &mut CommunityCatalog,
    args: &ExploreArgs,
    normalizer: &CurrencyNormalizer,
) -> Result<Vec<String>, TripweaveError> {
    if let (Some(title), Some(destination)) = (&args.pin_title, &args.pin_destination) {
        catalog.create_pin(title, destination, None)?;
    }
    for &id in &args.likes {
        let id = RemoteItemId(id);
        if catalog.remote_item(id).is_none() {
            return Err(ValidationError::InvalidValue {
                field: "like",
                reason: format!("no catalog item with id {}", id.0),
            }
            .into());
        }
        catalog.toggle_like(id);
    }

    let matches = catalog.search(&args.query);
    let mut lines = Vec::new();
    if matches.is_empty() {
        lines.push(format!("no trips match \"{}\"", args.query.trim()).dimmed().to_string());
        return Ok(lines);
    }
    if !matches.pins.is_empty() {
        lines.push("Your pins".bold().underline().to_string());
        lines.extend(matches.pins.iter().map(|pin| render::pin(pin)));
        lines.push(String::new());
    }
    if !matches.remote.is_empty() {
        lines.push("Community trips".bold().underline().to_string());
        lines.extend(
            matches
                .remote
                .iter()
                .map(|item| render::remote_item(item, catalog, normalizer)),
        );
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn loaded() -> (CommunityCatalog, CurrencyNormalizer) {
        let config = TripweaveConfig::default();
        let mut catalog = CommunityCatalog::new(&config.catalog);
        catalog.load(&BuiltinCatalog).await.unwrap();
        (catalog, CurrencyNormalizer::new(&config.currency).unwrap())
    }

    #[tokio::test]
    async fn pins_are_listed_before_community_trips() {
        let (mut catalog, normalizer) = loaded().await;
        let args = ExploreArgs {
            query: "beach".into(),
            pin_title: Some("Beach House".into()),
            pin_destination: Some("Goa".into()),
            likes: Vec::new(),
        };
        let lines = apply(&mut catalog, &args, &normalizer).unwrap();
        assert!(lines[0].contains("Your pins"));
        assert!(lines[1].contains("Beach House"));
        assert!(lines[3].contains("Community trips"));
        assert_eq!(lines.len(), 6);
    }

    #[tokio::test]
    async fn likes_bump_the_displayed_count_and_budgets_are_localized() {
        let (mut catalog, normalizer) = loaded().await;
        let args = ExploreArgs {
            query: "paris".into(),
            likes: vec![1],
            ..ExploreArgs::default()
        };
        let lines = apply(&mut catalog, &args, &normalizer).unwrap();
        assert!(lines[1].contains("♥ 129"));
        assert!(lines[1].contains("₹1200"));
    }

    #[tokio::test]
    async fn unknown_like_id_is_an_error() {
        let (mut catalog, normalizer) = loaded().await;
        let args = ExploreArgs {
            likes: vec![42],
            ..ExploreArgs::default()
        };
        match apply(&mut catalog, &args, &normalizer) {
            Err(TripweaveError::Validation(ValidationError::InvalidValue { field, reason })) => {
                assert_eq!(field, "like");
                assert!(reason.contains("42"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_pin_title_is_rejected() {
        let (mut catalog, normalizer) = loaded().await;
        let args = ExploreArgs {
            pin_title: Some("  ".into()),
            pin_destination: Some("Goa".into()),
            ..ExploreArgs::default()
        };
        match apply(&mut catalog, &args, &normalizer) {
            Err(TripweaveError::Validation(ValidationError::MissingField { field })) => {
                assert_eq!(field, "title")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_result_says_so() {
        let (mut catalog, normalizer) = loaded().await;
        let args = ExploreArgs {
            query: "antarctica".into(),
            ..ExploreArgs::default()
        };
        let lines = apply(&mut catalog, &args, &normalizer).unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("antarctica"));
    }
}
