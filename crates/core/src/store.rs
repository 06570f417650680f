//! In-memory range store
//!
//! Owns every player record, keyed by seat, plus the set of occupied seats.
//! The store never persists anything itself; callers decide when to save.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{PlayerRecord, Seat};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeStore {
    players: BTreeMap<Seat, PlayerRecord>,
    occupied: BTreeSet<Seat>,
}

impl RangeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted parts
    pub fn from_parts(
        players: BTreeMap<Seat, PlayerRecord>,
        occupied: impl IntoIterator<Item = Seat>,
    ) -> Self {
        Self {
            players,
            occupied: occupied.into_iter().collect(),
        }
    }

    /// Ensure a record exists for `seat` (empty name, no ranges, no memos)
    pub fn upsert_default(&mut self, seat: Seat) {
        self.players.entry(seat).or_default();
    }

    /// Apply `transform` to the seat's record, or to an empty record if the
    /// seat has none, and store the result
    pub fn update<F>(&mut self, seat: Seat, transform: F)
    where
        F: FnOnce(PlayerRecord) -> PlayerRecord,
    {
        let current = self.players.remove(&seat).unwrap_or_default();
        self.players.insert(seat, transform(current));
    }

    /// Delete the seat's record and vacate the seat. No-op if absent.
    pub fn remove(&mut self, seat: Seat) -> Option<PlayerRecord> {
        self.occupied.remove(&seat);
        self.players.remove(&seat)
    }

    pub fn get(&self, seat: Seat) -> Option<&PlayerRecord> {
        self.players.get(&seat)
    }

    /// Records with a non-blank name, in seat order
    pub fn named(&self) -> Vec<(Seat, &PlayerRecord)> {
        self.players
            .iter()
            .filter(|(_, record)| record.is_named())
            .map(|(seat, record)| (*seat, record))
            .collect()
    }

    /// All records, including unnamed in-progress registrations
    pub fn players(&self) -> &BTreeMap<Seat, PlayerRecord> {
        &self.players
    }

    pub fn occupy(&mut self, seat: Seat) -> bool {
        self.occupied.insert(seat)
    }

    /// Mark the seat empty; the record (if any) is kept
    pub fn vacate(&mut self, seat: Seat) -> bool {
        self.occupied.remove(&seat)
    }

    pub fn is_occupied(&self, seat: Seat) -> bool {
        self.occupied.contains(&seat)
    }

    pub fn occupied_seats(&self) -> Vec<Seat> {
        self.occupied.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, HandCode, Position, RangeEntry};

    fn hands(codes: &[&str]) -> Vec<HandCode> {
        codes.iter().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn test_upsert_default_is_idempotent() {
        let mut store = RangeStore::new();
        store.upsert_default(2);
        store.update(2, |p| p.with_name("Carol"));
        store.upsert_default(2);

        assert_eq!(store.players().len(), 1);
        assert_eq!(store.get(2).unwrap().name, "Carol");
    }

    #[test]
    fn test_update_missing_seat_uses_default() {
        let mut store = RangeStore::new();
        store.update(3, |p| {
            assert_eq!(p, PlayerRecord::default());
            p.with_name("Dan")
        });
        assert_eq!(store.get(3).unwrap().name, "Dan");
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = RangeStore::new();
        store.update(1, |p| p.with_name("Eve"));
        store.occupy(1);
        let before = store.clone();

        assert!(store.remove(42).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_vacates_seat() {
        let mut store = RangeStore::new();
        store.occupy(4);
        store.upsert_default(4);

        assert!(store.remove(4).is_some());
        assert!(store.get(4).is_none());
        assert!(!store.is_occupied(4));
    }

    #[test]
    fn test_vacate_keeps_record() {
        let mut store = RangeStore::new();
        store.occupy(6);
        store.update(6, |p| p.with_name("Finn"));
        store.vacate(6);

        assert!(!store.is_occupied(6));
        assert_eq!(store.get(6).unwrap().name, "Finn");
    }

    #[test]
    fn test_named_excludes_blank_names() {
        let mut store = RangeStore::new();
        store.update(1, |p| p.with_name("Gina"));
        store.update(2, |p| p.with_name("   "));
        store.upsert_default(3);
        store.update(-7, |p| p.with_name("Hal"));

        let named: Vec<(Seat, &str)> = store
            .named()
            .into_iter()
            .map(|(seat, p)| (seat, p.name.as_str()))
            .collect();
        assert_eq!(named, vec![(-7, "Hal"), (1, "Gina")]);
    }

    #[test]
    fn test_range_resubmit_replaces_entry() {
        let mut store = RangeStore::new();
        store.update(5, |p| {
            p.with_name("Alice").with_range(RangeEntry::new(
                Action::Open,
                Some(Position::Button),
                hands(&["AA", "KK"]),
            ))
        });
        store.update(5, |p| {
            p.with_range(RangeEntry::new(
                Action::Open,
                Some(Position::Button),
                hands(&["AA"]),
            ))
        });

        let record = store.get(5).unwrap();
        assert_eq!(record.actions.len(), 1);
        assert_eq!(record.actions[0].hands, hands(&["AA"]));
    }
}
