//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::models::{PlayerRecord, RangeEntry, Seat};

/// Validate that a player record is internally consistent
pub fn assert_player_invariants(seat: Seat, record: &PlayerRecord) {
    // At most one entry per (action, position)
    for (i, entry) in record.actions.iter().enumerate() {
        debug_assert!(
            !record.actions[i + 1..].iter().any(|e| e.key() == entry.key()),
            "Seat {} has duplicate range for {:?}",
            seat,
            entry.key()
        );
        assert_entry_invariants(seat, entry);
    }
}

/// Validate that an entry's hand set has no duplicates
pub fn assert_entry_invariants(seat: Seat, entry: &RangeEntry) {
    for (i, hand) in entry.hands.iter().enumerate() {
        debug_assert!(
            !entry.hands[i + 1..].contains(hand),
            "Seat {} range {:?} lists {} twice",
            seat,
            entry.key(),
            hand
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, Position};

    #[test]
    fn test_valid_record() {
        let record = PlayerRecord::default()
            .with_name("Gus")
            .with_range(RangeEntry::new(
                Action::Open,
                Some(Position::Button),
                vec!["AA".parse().unwrap()],
            ))
            .with_range(RangeEntry::new(Action::Open, None, vec![]));
        assert_player_invariants(1, &record);
    }

    #[test]
    #[should_panic(expected = "duplicate range")]
    fn test_duplicate_key_detected() {
        let entry = RangeEntry::new(Action::Open, Some(Position::Cutoff), vec![]);
        let record = PlayerRecord {
            name: "Hank".into(),
            actions: vec![entry.clone(), entry],
            memos: vec![],
        };
        assert_player_invariants(2, &record);
    }

    #[test]
    #[should_panic(expected = "twice")]
    fn test_duplicate_hand_detected() {
        let aa = "AA".parse().unwrap();
        let entry = RangeEntry {
            action: Action::Open,
            position: None,
            hands: vec![aa, aa],
        };
        assert_entry_invariants(3, &entry);
    }
}
