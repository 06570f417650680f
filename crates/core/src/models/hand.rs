//! Hand codes - starting-hand categories such as "AA", "AKs", "T9o"

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Card rank, ordered `Two < Three < ... < King < Ace`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    /// All ranks from Ace down to Two (chart order)
    pub fn descending() -> &'static [Rank] {
        &[
            Rank::Ace,
            Rank::King,
            Rank::Queen,
            Rank::Jack,
            Rank::Ten,
            Rank::Nine,
            Rank::Eight,
            Rank::Seven,
            Rank::Six,
            Rank::Five,
            Rank::Four,
            Rank::Three,
            Rank::Two,
        ]
    }

    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// The rank directly below this one (None for Two)
    pub fn below(self) -> Option<Rank> {
        match self {
            Rank::Two => None,
            other => Rank::descending().get(12 - (other as usize) + 1).copied(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Whether a hand is a pair, suited or offsuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandKind {
    Pair,
    Suited,
    Offsuit,
}

impl HandKind {
    /// Suffix character used in hand codes (pairs carry none)
    pub fn suffix(&self) -> Option<char> {
        match self {
            HandKind::Pair => None,
            HandKind::Suited => Some('s'),
            HandKind::Offsuit => Some('o'),
        }
    }
}

/// A starting-hand category: two ranks plus a suitedness marker
///
/// The higher rank always comes first. Pairs are written without a suffix;
/// a trailing `s` or `o` on a pair (as older range charts produced, e.g.
/// "77s") is accepted on parse and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandCode {
    pub high: Rank,
    pub low: Rank,
    pub kind: HandKind,
}

impl HandCode {
    pub fn pair(rank: Rank) -> Self {
        Self {
            high: rank,
            low: rank,
            kind: HandKind::Pair,
        }
    }

    pub fn suited(high: Rank, low: Rank) -> Self {
        Self {
            high,
            low,
            kind: HandKind::Suited,
        }
    }

    pub fn offsuit(high: Rank, low: Rank) -> Self {
        Self {
            high,
            low,
            kind: HandKind::Offsuit,
        }
    }

    pub fn is_pair(&self) -> bool {
        self.kind == HandKind::Pair
    }

    /// The two rank characters without any suffix ("AK" for "AKs")
    pub fn ranks(&self) -> String {
        format!("{}{}", self.high, self.low)
    }

    /// All 169 hand codes in 13x13 chart order
    ///
    /// Rows and columns run Ace to Two. The diagonal holds pairs, cells
    /// right of it are suited and cells left of it are offsuit.
    pub fn grid() -> Vec<HandCode> {
        let ranks = Rank::descending();
        let mut cells = Vec::with_capacity(ranks.len() * ranks.len());
        for (i, &row) in ranks.iter().enumerate() {
            for (j, &col) in ranks.iter().enumerate() {
                let cell = match i.cmp(&j) {
                    std::cmp::Ordering::Less => HandCode::suited(row, col),
                    std::cmp::Ordering::Equal => HandCode::pair(row),
                    std::cmp::Ordering::Greater => HandCode::offsuit(col, row),
                };
                cells.push(cell);
            }
        }
        cells
    }
}

impl FromStr for HandCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidHand(s.to_string());
        let mut chars = s.chars();
        let high = chars.next().and_then(Rank::from_char).ok_or_else(invalid)?;
        let low = chars.next().and_then(Rank::from_char).ok_or_else(invalid)?;
        let suffix = chars.next();
        if chars.next().is_some() {
            return Err(invalid());
        }

        if high == low {
            return match suffix {
                None | Some('s') | Some('o') => Ok(HandCode::pair(high)),
                Some(_) => Err(invalid()),
            };
        }

        // Canonical codes list the higher rank first
        if high < low {
            return Err(invalid());
        }

        match suffix {
            Some('s') => Ok(HandCode::suited(high, low)),
            Some('o') => Ok(HandCode::offsuit(high, low)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for HandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)?;
        if let Some(suffix) = self.kind.suffix() {
            write!(f, "{}", suffix)?;
        }
        Ok(())
    }
}

impl Serialize for HandCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HandCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
