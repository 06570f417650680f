//! Preflop actions and table positions used to key range entries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Preflop decision a range was recorded for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "OPEN")]
    Open,
    #[serde(rename = "CALL on IP")]
    CallInPosition,
    #[serde(rename = "CALL on OOP")]
    CallOutOfPosition,
}

impl Action {
    /// Label as stored and displayed
    pub fn label(&self) -> &'static str {
        match self {
            Action::Open => "OPEN",
            Action::CallInPosition => "CALL on IP",
            Action::CallOutOfPosition => "CALL on OOP",
        }
    }

    pub fn all() -> &'static [Action] {
        &[Action::Open, Action::CallInPosition, Action::CallOutOfPosition]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Action {
    type Err = Error;

    /// Accepts the stored label or a short alias (`open`, `ip`, `oop`)
    fn from_str(s: &str) -> Result<Self> {
        if let Some(action) = Action::all().iter().find(|a| a.label() == s) {
            return Ok(*action);
        }
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(Action::Open),
            "ip" | "call-ip" | "call_ip" => Ok(Action::CallInPosition),
            "oop" | "call-oop" | "call_oop" => Ok(Action::CallOutOfPosition),
            _ => Err(Error::UnknownAction(s.to_string())),
        }
    }
}

/// Seating role at a nine-handed table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "UTG")]
    UnderTheGun,
    #[serde(rename = "UTG+1")]
    UnderTheGun1,
    #[serde(rename = "UTG+2")]
    UnderTheGun2,
    #[serde(rename = "HJ")]
    Hijack,
    #[serde(rename = "LJ")]
    Lojack,
    #[serde(rename = "CO")]
    Cutoff,
    #[serde(rename = "BTN")]
    Button,
    #[serde(rename = "SB")]
    SmallBlind,
    #[serde(rename = "BB")]
    BigBlind,
}

impl Position {
    pub fn label(&self) -> &'static str {
        match self {
            Position::UnderTheGun => "UTG",
            Position::UnderTheGun1 => "UTG+1",
            Position::UnderTheGun2 => "UTG+2",
            Position::Hijack => "HJ",
            Position::Lojack => "LJ",
            Position::Cutoff => "CO",
            Position::Button => "BTN",
            Position::SmallBlind => "SB",
            Position::BigBlind => "BB",
        }
    }

    /// All positions in picker order
    pub fn all() -> &'static [Position] {
        &[
            Position::UnderTheGun,
            Position::UnderTheGun1,
            Position::UnderTheGun2,
            Position::Hijack,
            Position::Lojack,
            Position::Cutoff,
            Position::Button,
            Position::SmallBlind,
            Position::BigBlind,
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Position::all()
            .iter()
            .find(|p| p.label().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| Error::UnknownPosition(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_labels() {
        let json = serde_json::to_string(&Action::CallInPosition).unwrap();
        assert_eq!(json, "\"CALL on IP\"");
        let back: Action = serde_json::from_str("\"CALL on OOP\"").unwrap();
        assert_eq!(back, Action::CallOutOfPosition);
    }

    #[test]
    fn test_action_aliases() {
        assert_eq!("OPEN".parse::<Action>().unwrap(), Action::Open);
        assert_eq!("open".parse::<Action>().unwrap(), Action::Open);
        assert_eq!("ip".parse::<Action>().unwrap(), Action::CallInPosition);
        assert_eq!("OOP".parse::<Action>().unwrap(), Action::CallOutOfPosition);
        assert!("limp".parse::<Action>().is_err());
    }

    #[test]
    fn test_position_parse() {
        assert_eq!(Position::all().len(), 9);
        assert_eq!("btn".parse::<Position>().unwrap(), Position::Button);
        assert_eq!("UTG+2".parse::<Position>().unwrap(), Position::UnderTheGun2);
        assert!("MP".parse::<Position>().is_err());
    }
}
