//! Seatbook - seat-by-seat preflop range tracker
//!
//! Command line front end over the tracker in `seatbook-core`.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seatbook_core::{compress, range, Error, HandCode, Result, SaveOutcome};

mod cli;
mod render;
mod state;

use cli::{Cli, Command};
use state::AppState;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Pure utility, no state needed
    let command = match cli.command {
        Command::Compress { hands } => {
            println!("{}", compress(&hands).join(" "));
            return Ok(());
        }
        other => other,
    };

    let mut app = AppState::new(cli.config.as_deref(), cli.ephemeral)?;
    tracing::debug!(data_dir = %app.data_dir().display(), "Opened tracker");

    match command {
        Command::Seats => {
            print!("{}", render::seats(app.tracker.store(), app.config.seats()));
        }
        Command::Sit { seat } => {
            let seat = app.check_seat(seat)?;
            report(app.tracker.select_seat(seat));
            println!("Seat {} occupied", seat);
        }
        Command::Leave { seat } => {
            let seat = app.check_seat(seat)?;
            report(app.tracker.vacate_seat(seat));
            println!("Seat {} vacated", seat);
        }
        Command::Register { seat, name, memo } => {
            let seat = app.check_seat(seat)?;
            let outcome = app
                .tracker
                .save_player(seat, &name, memo.as_deref().unwrap_or_default())?;
            report(outcome);
            println!("Saved {} in seat {}", name.trim(), seat);
        }
        Command::Range {
            seat,
            action,
            position,
            hands,
        } => {
            let seat = app.check_seat(seat)?;
            let hands = parse_hands(&hands)?;
            report(app.tracker.record_range(seat, action, position, hands));
            print!("{}", app.tracker.summary(seat));
        }
        Command::Toggle {
            seat,
            action,
            position,
            hands,
        } => {
            let seat = app.check_seat(seat)?;
            let hands = parse_hands(&hands)?;
            report(app.tracker.toggle_hands(seat, action, position, &hands));
            print!("{}", app.tracker.summary(seat));
        }
        Command::Show { seat } => {
            let record = app
                .tracker
                .store()
                .get(seat)
                .ok_or_else(|| Error::NotFound(format!("No player in seat {}", seat)))?;
            print!(
                "{}",
                render::player(seat, record, &app.tracker.summary(seat))
            );
        }
        Command::Players => {
            print!("{}", render::players(&app.tracker.store().named()));
        }
        Command::Copy { from, to } => {
            let to = app.check_seat(to)?;
            report(app.tracker.copy_player(from, to)?);
            println!("Copied seat {} to seat {}", from, to);
        }
        Command::Delete { seat } => {
            report(app.tracker.delete_player(seat));
            println!("Seat {} cleared", seat);
        }
        Command::Chart {
            seat,
            action,
            position,
        } => {
            let selected = match (seat, action) {
                (Some(seat), Some(action)) => app
                    .tracker
                    .store()
                    .get(seat)
                    .and_then(|p| p.range_for(action, position))
                    .map(|entry| entry.hands.clone())
                    .unwrap_or_default(),
                _ => Vec::new(),
            };
            print!("{}", render::chart(&selected));
        }
        Command::Compress { .. } => {}
    }

    Ok(())
}

/// Expand hand codes and run tokens ("AKs-ATs") into a hand list
fn parse_hands(tokens: &[String]) -> Result<Vec<HandCode>> {
    let hands = range::expand_all(tokens)?;
    tracing::debug!(tokens = tokens.len(), hands = hands.len(), "Parsed hands");
    Ok(hands)
}

/// Tell the user when a save did not make it to disk
fn report(outcome: SaveOutcome) {
    if let SaveOutcome::Failed(reason) = outcome {
        eprintln!("warning: change kept for this session but not saved: {}", reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hands_expands_runs() {
        let hands = parse_hands(&["AA".to_string(), "KQs-KTs".to_string()]).unwrap();
        let codes: Vec<String> = hands.iter().map(|h| h.to_string()).collect();
        assert_eq!(codes, vec!["AA", "KQs", "KJs", "KTs"]);
    }

    #[test]
    fn test_parse_hands_rejects_garbage() {
        assert!(parse_hands(&["AKx".to_string()]).is_err());
        assert!(parse_hands(&["QQ-JJ".to_string()]).is_err());
    }
}
