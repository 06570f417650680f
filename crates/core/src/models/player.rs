//! Player records, range entries and memos

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Action, HandCode, Position};
use crate::range::decode_entries;

/// Seat number at the table. Any integer is a valid key.
pub type Seat = i64;

/// One action + position + hand-set triple recorded for a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEntry {
    pub action: Action,
    pub position: Option<Position>,
    pub hands: Vec<HandCode>,
}

impl RangeEntry {
    /// Create an entry, dropping duplicate hands (first occurrence wins)
    pub fn new(
        action: Action,
        position: Option<Position>,
        hands: impl IntoIterator<Item = HandCode>,
    ) -> Self {
        let mut unique = Vec::new();
        for hand in hands {
            if !unique.contains(&hand) {
                unique.push(hand);
            }
        }
        Self {
            action,
            position,
            hands: unique,
        }
    }

    pub fn key(&self) -> (Action, Option<Position>) {
        (self.action, self.position)
    }

    /// Leniently decode a persisted entry
    ///
    /// Returns None if `action`, `position` or `hands` is missing, if
    /// `hands` is not an array, or if the action/position label is unknown.
    /// Individual hands that are not valid hand-code strings are skipped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let action: Action = serde_json::from_value(obj.get("action")?.clone()).ok()?;
        let position: Option<Position> = match obj.get("position")? {
            Value::Null => None,
            other => Some(serde_json::from_value(other.clone()).ok()?),
        };
        let hands = obj
            .get("hands")?
            .as_array()?
            .iter()
            .filter_map(Value::as_str)
            .filter_map(|s| s.parse::<HandCode>().ok());
        Some(Self::new(action, position, hands))
    }
}

/// Free-text note plus the ranges active when it was written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    pub text: String,
    #[serde(rename = "handRanges", default)]
    pub hand_ranges: Vec<RangeEntry>,
    #[serde(rename = "savedAt", default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Memo {
    pub fn new(text: String, hand_ranges: Vec<RangeEntry>) -> Self {
        Self {
            text,
            hand_ranges,
            saved_at: Some(Utc::now()),
        }
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let text = obj.get("text")?.as_str()?.to_string();
        let hand_ranges = obj.get("handRanges").map(decode_entries).unwrap_or_default();
        let saved_at = obj
            .get("savedAt")
            .and_then(|v| serde_json::from_value(v.clone()).ok());
        Some(Self {
            text,
            hand_ranges,
            saved_at,
        })
    }
}

/// Everything recorded about the player in one seat
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub actions: Vec<RangeEntry>,
    #[serde(default)]
    pub memos: Vec<Memo>,
}

impl PlayerRecord {
    /// A registered player has a non-blank name
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Record a range, replacing any entry with the same action and position
    ///
    /// The new entry goes to the end of the list so the order reflects
    /// when each range was last registered.
    pub fn with_range(mut self, entry: RangeEntry) -> Self {
        self.actions.retain(|e| e.key() != entry.key());
        self.actions.push(entry);
        self
    }

    /// Replace the whole range list (later duplicates of a key win)
    pub fn with_ranges(mut self, entries: Vec<RangeEntry>) -> Self {
        self.actions.clear();
        entries.into_iter().fold(self, |record, entry| record.with_range(entry))
    }

    /// Append a memo carrying a snapshot of the current ranges
    pub fn with_memo(mut self, text: impl Into<String>) -> Self {
        let memo = Memo::new(text.into(), self.actions.clone());
        self.memos.push(memo);
        self
    }

    pub fn range_for(&self, action: Action, position: Option<Position>) -> Option<&RangeEntry> {
        self.actions
            .iter()
            .find(|e| e.action == action && e.position == position)
    }

    pub fn latest_memo(&self) -> Option<&Memo> {
        self.memos.last()
    }

    /// Leniently decode a persisted record; malformed parts fall back to
    /// empty defaults instead of rejecting the record
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let name = obj
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let actions = obj.get("actions").map(decode_entries).unwrap_or_default();
        let memos = obj
            .get("memos")
            .and_then(Value::as_array)
            .map(|memos| memos.iter().filter_map(Memo::from_value).collect())
            .unwrap_or_default();

        let record = Self {
            name,
            actions: Vec::new(),
            memos,
        };
        Some(record.with_ranges(actions))
    }
}
