//! Command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use seatbook_core::{Action, Position, Seat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Track opponents' preflop ranges by seat", long_about = None)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep everything in memory for this run
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Show every seat and who sits there")]
    Seats,
    #[command(about = "Take a seat, creating an empty player record")]
    Sit { seat: Seat },
    #[command(about = "Vacate a seat, keeping the player record")]
    Leave { seat: Seat },
    #[command(about = "Name the player in a seat, optionally adding a memo")]
    Register {
        seat: Seat,
        name: String,
        #[arg(long, short)]
        memo: Option<String>,
    },
    #[command(
        about = "Record a range (replaces any earlier one for the same action and position)",
        long_about = "Record a range. HANDS are hand codes (AA, AKs, T9o) or runs such as AKs-ATs. \
                      Passing no hands records an empty range."
    )]
    Range {
        seat: Seat,
        /// OPEN, ip (CALL on IP) or oop (CALL on OOP)
        action: Action,
        #[arg(long, short)]
        position: Option<Position>,
        hands: Vec<String>,
    },
    #[command(about = "Add or remove hands from a recorded range, like clicking chart cells")]
    Toggle {
        seat: Seat,
        action: Action,
        #[arg(long, short)]
        position: Option<Position>,
        #[arg(required = true)]
        hands: Vec<String>,
    },
    #[command(about = "Show a player's ranges and memos")]
    Show { seat: Seat },
    #[command(about = "List registered players")]
    Players,
    #[command(about = "Copy a registered player's name and ranges to another seat")]
    Copy { from: Seat, to: Seat },
    #[command(about = "Delete a player and vacate the seat")]
    Delete { seat: Seat },
    #[command(about = "Print the 13x13 hand chart, marking a recorded range")]
    Chart {
        #[arg(long, requires = "action")]
        seat: Option<Seat>,
        #[arg(long)]
        action: Option<Action>,
        #[arg(long, short)]
        position: Option<Position>,
    },
    #[command(about = "Compress hand codes into range notation")]
    Compress {
        #[arg(required = true)]
        hands: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_range_command() {
        let cli = Cli::try_parse_from([
            "seatbook", "range", "5", "open", "--position", "BTN", "AA", "AKs-AJs",
        ])
        .unwrap();
        match cli.command {
            Command::Range {
                seat,
                action,
                position,
                hands,
            } => {
                assert_eq!(seat, 5);
                assert_eq!(action, Action::Open);
                assert_eq!(position, Some(Position::Button));
                assert_eq!(hands, vec!["AA", "AKs-AJs"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_position() {
        assert!(Cli::try_parse_from(["seatbook", "range", "1", "open", "-p", "MP", "AA"]).is_err());
    }

    #[test]
    fn test_range_without_hands_is_empty() {
        let cli = Cli::try_parse_from(["seatbook", "range", "2", "oop"]).unwrap();
        assert!(matches!(cli.command, Command::Range { hands, .. } if hands.is_empty()));
    }

    #[test]
    fn test_parse_toggle_command() {
        let cli = Cli::try_parse_from(["seatbook", "toggle", "3", "ip", "-p", "CO", "KK"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Toggle { seat: 3, action: Action::CallInPosition, .. }
        ));
        assert!(Cli::try_parse_from(["seatbook", "toggle", "3", "ip"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["seatbook", "players", "--ephemeral"]).unwrap();
        assert!(cli.ephemeral);
        assert!(matches!(cli.command, Command::Players));
    }
}
