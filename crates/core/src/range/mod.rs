//! Hand-range utilities
//!
//! Pure functions over range entries: grouping by action and position,
//! splitting hands into pairs/suited/offsuit, summarizing for display, and
//! compressing hand lists into interval notation.

mod compress;
mod summary;

use serde_json::Value;

use crate::models::{Action, HandCode, HandKind, Position, RangeEntry};

pub use compress::{compress, compress_codes, expand, expand_all};
pub use summary::{format_summary, format_summary_value, summarize, GroupSummary, Summary, NO_RANGES};

/// Hands from every entry sharing one action + position key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeGroup {
    pub action: Action,
    pub position: Option<Position>,
    pub hands: Vec<HandCode>,
}

impl RangeGroup {
    /// Heading such as "OPEN BTN" (just the action when no position is set)
    pub fn label(&self) -> String {
        match self.position {
            Some(position) => format!("{} {}", self.action, position),
            None => self.action.to_string(),
        }
    }
}

/// Hand codes split by kind, suffixes stripped ("AKs" -> "AK")
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories {
    pub pairs: Vec<String>,
    pub suited: Vec<String>,
    pub offsuit: Vec<String>,
}

impl Categories {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.suited.is_empty() && self.offsuit.is_empty()
    }

    fn push(&mut self, code: &HandCode) {
        let bucket = match code.kind {
            HandKind::Pair => &mut self.pairs,
            HandKind::Suited => &mut self.suited,
            HandKind::Offsuit => &mut self.offsuit,
        };
        bucket.push(code.ranks());
    }
}

/// Decode a persisted entry list, dropping anything malformed
///
/// Anything other than a JSON array yields no entries.
pub fn decode_entries(value: &Value) -> Vec<RangeEntry> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(RangeEntry::from_value).collect())
        .unwrap_or_default()
}

/// Group entries by (action, position), merging their hands
///
/// Groups keep the order in which each key first appears; hands within a
/// group are deduplicated and keep first-seen order.
pub fn group_by_action_position(entries: &[RangeEntry]) -> Vec<RangeGroup> {
    let mut groups: Vec<RangeGroup> = Vec::new();
    for entry in entries {
        let idx = match groups
            .iter()
            .position(|g| g.action == entry.action && g.position == entry.position)
        {
            Some(idx) => idx,
            None => {
                groups.push(RangeGroup {
                    action: entry.action,
                    position: entry.position,
                    hands: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let hands = &mut groups[idx].hands;
        for hand in &entry.hands {
            if !hands.contains(hand) {
                hands.push(*hand);
            }
        }
    }
    groups
}

/// Split hand-code strings into pairs, suited and offsuit
///
/// Strings that are not valid hand codes are skipped.
pub fn categorize<I, S>(hands: I) -> Categories
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut categories = Categories::default();
    for hand in hands {
        if let Ok(code) = hand.as_ref().parse::<HandCode>() {
            categories.push(&code);
        }
    }
    categories
}

/// Same as [`categorize`] for already parsed codes
pub fn categorize_codes(hands: &[HandCode]) -> Categories {
    let mut categories = Categories::default();
    for code in hands {
        categories.push(code);
    }
    categories
}

/// Add `code` to the selection, or remove it if already selected
pub fn toggle(hands: &[HandCode], code: HandCode) -> Vec<HandCode> {
    if hands.contains(&code) {
        hands.iter().copied().filter(|h| *h != code).collect()
    } else {
        let mut next = hands.to_vec();
        next.push(code);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hands(codes: &[&str]) -> Vec<HandCode> {
        codes.iter().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn test_categorize_basic() {
        let categories = categorize(["AA", "AKs", "AKo"]);
        assert_eq!(categories.pairs, vec!["AA"]);
        assert_eq!(categories.suited, vec!["AK"]);
        assert_eq!(categories.offsuit, vec!["AK"]);
    }

    #[test]
    fn test_categorize_skips_malformed() {
        let categories = categorize(["", "XYZ", "77s", "T9o", "K"]);
        assert_eq!(categories.pairs, vec!["77"]);
        assert!(categories.suited.is_empty());
        assert_eq!(categories.offsuit, vec!["T9"]);
    }

    #[test]
    fn test_group_merges_same_key() {
        let entries = vec![
            RangeEntry::new(Action::Open, Some(Position::Button), hands(&["AA", "KK"])),
            RangeEntry::new(Action::Open, Some(Position::Cutoff), hands(&["QQ"])),
            RangeEntry::new(Action::Open, Some(Position::Button), hands(&["KK", "AKs"])),
        ];
        let groups = group_by_action_position(&entries);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label(), "OPEN BTN");
        assert_eq!(groups[0].hands, hands(&["AA", "KK", "AKs"]));
        assert_eq!(groups[1].label(), "OPEN CO");
    }

    #[test]
    fn test_group_label_without_position() {
        let entries = vec![RangeEntry::new(Action::CallOutOfPosition, None, hands(&["99"]))];
        let groups = group_by_action_position(&entries);
        assert_eq!(groups[0].label(), "CALL on OOP");
    }

    #[test]
    fn test_decode_entries_tolerates_garbage() {
        assert!(decode_entries(&Value::Null).is_empty());
        assert!(decode_entries(&json!({"action": "OPEN"})).is_empty());

        let entries = decode_entries(&json!([
            {"action": "OPEN", "position": "BTN", "hands": ["AA"]},
            null,
            {"action": "OPEN", "position": "BTN", "hands": null},
            {"action": "CALL on IP", "position": "SB"}
        ]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].hands, hands(&["AA"]));
    }

    #[test]
    fn test_toggle() {
        let selected = hands(&["AA", "KK"]);
        let added = toggle(&selected, "QQ".parse().unwrap());
        assert_eq!(added, hands(&["AA", "KK", "QQ"]));
        let removed = toggle(&added, "KK".parse().unwrap());
        assert_eq!(removed, hands(&["AA", "QQ"]));
    }
}
