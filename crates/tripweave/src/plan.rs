// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `tripweave plan` command implementation.
//!
//! Builds the HTTP-backed services, submits the trip form and prints the
//! finalized itinerary. A failed generation can be resubmitted from a prompt.
//! With `--chat` the follow-up shell opens afterwards.

use std::io::IsTerminal;
use std::sync::Arc;

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;
use tripweave_api::{HttpChatService, HttpItineraryService};
use tripweave_config::TripweaveConfig;
use tripweave_core::{TransportError, TripweaveError};
use tripweave_planner::{GenerationState, TripForm, TripPlanner};

use crate::{PlanArgs, render, shell};

pub async fn run_plan(config: &TripweaveConfig, args: PlanArgs) -> Result<(), TripweaveError> {
    let itinerary = Arc::new(HttpItineraryService::new(config)?);
    let chat = Arc::new(HttpChatService::new(config)?);
    let planner = TripPlanner::new(config, itinerary, chat)?;

    println!(
        "{} {} via {}",
        "planning".dimmed(),
        args.destination.trim(),
        config.service.base_url
    );
    planner.plan(&trip_form(&args)).await?;
    loop {
        match report(&planner) {
            Err(TripweaveError::Transport(reason)) => {
                if !offer_retry(&reason)? {
                    return Err(TripweaveError::Transport(reason));
                }
                println!("{} {}", "retrying".dimmed(), args.destination.trim());
                planner.retry().await;
            }
            other => break other?,
        }
    }

    if args.chat {
        shell::run_shell(config, &planner).await?;
    }
    Ok(())
}

pub(crate) fn trip_form(args: &PlanArgs) -> TripForm {
    TripForm {
        destination: args.destination.clone(),
        start_date: args.start_date.clone(),
        end_date: args.end_date.clone(),
        budget: args.budget.clone(),
        travelers: args.travelers.clone(),
        interests: args.interests.clone(),
        notes: args.notes.clone(),
    }
}

/// Asks whether to resubmit after a failed generation.
///
/// Never prompts when stdin is not a terminal.
fn offer_retry(reason: &TransportError) -> Result<bool, TripweaveError> {
    if !std::io::stdin().is_terminal() {
        return Ok(false);
    }
    let mut rl = DefaultEditor::new()
        .map_err(|e| TripweaveError::Internal(format!("failed to initialize readline: {e}")))?;
    eprintln!("{}: {reason}", "generation failed".red());
    match rl.readline("retry? [y/N] ") {
        Ok(answer) => Ok(wants_retry(&answer)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(false),
        Err(e) => Err(TripweaveError::Internal(format!("failed to read answer: {e}"))),
    }
}

fn wants_retry(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Prints the visible state after a submission settles.
fn report(planner: &TripPlanner) -> Result<(), TripweaveError> {
    match planner.generation().state() {
        GenerationState::Ready(result) => {
            let Some(nav) = planner.navigator() else {
                return Err(TripweaveError::NotReady);
            };
            info!(
                destination = %result.destination,
                days = nav.days().len(),
                "itinerary ready"
            );
            println!();
            for line in render::header(&result, &nav) {
                println!("{line}");
            }
            println!();
            for line in render::days(&nav) {
                println!("{line}");
            }
            Ok(())
        }
        GenerationState::Failed { reason, .. } => Err(TripweaveError::Transport(reason)),
        other => Err(TripweaveError::Internal(format!(
            "generation settled in state {other}"
        ))),
    }
}
