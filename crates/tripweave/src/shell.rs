// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Follow-up chat shell for a finalized itinerary.
//!
//! Plain lines are sent as chat messages about the current trip. Slash
//! commands browse the day list or pin the trip for this session.

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tripweave_config::TripweaveConfig;
use tripweave_core::TripweaveError;
use tripweave_planner::{AskOutcome, CommunityCatalog, TripPlanner};

use crate::render;

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command<'a> {
    Quit,
    Days,
    Day(usize),
    Pin,
    Help,
    Unknown(&'a str),
    Ask(&'a str),
    Empty,
}

pub(crate) fn parse_line(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    if !trimmed.starts_with('/') {
        return Command::Ask(trimmed);
    }

    let mut parts = trimmed.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("/quit" | "/exit"), None) => Command::Quit,
        (Some("/days"), None) => Command::Days,
        (Some("/pin"), None) => Command::Pin,
        (Some("/help"), None) => Command::Help,
        // Days are numbered from 1 on screen.
        (Some("/day"), Some(n)) => match n.parse::<usize>() {
            Ok(n) if n > 0 => Command::Day(n - 1),
            _ => Command::Unknown(trimmed),
        },
        _ => Command::Unknown(trimmed),
    }
}

/// Runs the chat REPL until `/quit`, Ctrl-C or EOF.
pub async fn run_shell(
    config: &TripweaveConfig,
    planner: &TripPlanner,
) -> Result<(), TripweaveError> {
    let (Some(session), Some(mut nav)) = (planner.open_chat(), planner.navigator()) else {
        return Err(TripweaveError::NotReady);
    };
    let mut pins = CommunityCatalog::new(&config.catalog);

    let mut rl = DefaultEditor::new()
        .map_err(|e| TripweaveError::Internal(format!("failed to initialize readline: {e}")))?;

    println!();
    println!("{}", "tripweave chat".bold().green());
    println!(
        "Ask about your trip to {}. Type {} for commands, {} to exit.\n",
        nav.result().destination,
        "/help".yellow(),
        "/quit".yellow()
    );

    let prompt = format!("{}> ", "tripweave".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let command = parse_line(&line);
                if !matches!(command, Command::Empty) {
                    let _ = rl.add_history_entry(&line);
                }
                match command {
                    Command::Empty => continue,
                    Command::Quit => break,
                    Command::Help => {
                        println!("  /days     list the days");
                        println!("  /day N    expand or collapse day N");
                        println!("  /pin      pin this trip to the explore board");
                        println!("  /quit     leave the shell");
                    }
                    Command::Days => print_days(&nav),
                    Command::Day(index) => {
                        if nav.day(index).is_none() {
                            eprintln!(
                                "{}: the trip has {} day(s)",
                                "error".red(),
                                nav.days().len()
                            );
                            continue;
                        }
                        nav.toggle_day(index);
                        print_days(&nav);
                    }
                    Command::Pin => match planner.pin_current(&mut pins) {
                        Ok(id) => println!("{} {id}", "pinned".green()),
                        Err(e) => eprintln!("{}: {e}", "error".red()),
                    },
                    Command::Unknown(text) => {
                        eprintln!("{}: unknown command {text}", "error".red());
                    }
                    Command::Ask(text) => match session.ask(text).await {
                        AskOutcome::Answered(reply) => println!("{reply}\n"),
                        AskOutcome::Failed(marker) => eprintln!("{}\n", marker.red()),
                        AskOutcome::Ignored => {}
                    },
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

fn print_days(nav: &tripweave_planner::ItineraryNavigator) {
    for line in render::days(nav) {
        println!("{line}");
    }
}
