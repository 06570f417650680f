//! Tracker session
//!
//! Connects table events (seat clicks, range submissions, player saves and
//! deletions) to the range store, and saves the store after each change.
//! Saves are best effort: a failure is logged and reported back as a
//! [`SaveOutcome`], but the in-memory change always stands.

use std::collections::BTreeMap;

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::invariants::assert_player_invariants;
use crate::models::{Action, HandCode, PlayerRecord, Position, RangeEntry, Seat};
use crate::range::{summarize, toggle, Summary};
use crate::storage::{KeyValueStore, OCCUPIED_SEATS_KEY, PLAYERS_KEY};
use crate::store::RangeStore;

/// Completion signal for a persistence attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed(String),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }

    /// First failure wins
    fn and(self, other: SaveOutcome) -> SaveOutcome {
        match self {
            SaveOutcome::Saved => other,
            failed => failed,
        }
    }
}

/// One tracking session over a persistence backend
pub struct Tracker<S: KeyValueStore> {
    store: RangeStore,
    storage: S,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Restore the last saved state; unreadable data is skipped
    pub fn open(storage: S) -> Self {
        let players = decode_players(&storage.load_or(PLAYERS_KEY, json!({})));
        let occupied = decode_seats(&storage.load_or(OCCUPIED_SEATS_KEY, json!([])));
        info!(
            players = players.len(),
            occupied = occupied.len(),
            "Loaded tracker state"
        );

        Self {
            store: RangeStore::from_parts(players, occupied),
            storage,
        }
    }

    pub fn store(&self) -> &RangeStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Seat click: mark occupied and make sure a record exists
    pub fn select_seat(&mut self, seat: Seat) -> SaveOutcome {
        self.store.occupy(seat);
        self.store.upsert_default(seat);
        self.persist_players().and(self.persist_seats())
    }

    /// Mark a seat empty; its record is kept
    pub fn vacate_seat(&mut self, seat: Seat) -> SaveOutcome {
        self.store.vacate(seat);
        self.persist_seats()
    }

    /// Register a range, replacing any earlier one for the same action and
    /// position
    pub fn record_range(
        &mut self,
        seat: Seat,
        action: Action,
        position: Option<Position>,
        hands: Vec<HandCode>,
    ) -> SaveOutcome {
        let entry = RangeEntry::new(action, position, hands);
        debug!(seat, action = %entry.action, hands = entry.hands.len(), "Recording range");
        self.apply(seat, |p| p.with_range(entry));
        self.persist_players()
    }

    /// Save the player's name and, if given, a memo with the current ranges
    ///
    /// Fails with [`Error::Validation`] when the name is blank.
    pub fn save_player(&mut self, seat: Seat, name: &str, memo: &str) -> Result<SaveOutcome> {
        if name.trim().is_empty() {
            return Err(Error::Validation("Player name must not be empty".into()));
        }

        let memo = memo.trim();
        self.apply(seat, |p| {
            let p = p.with_name(name);
            if memo.is_empty() {
                p
            } else {
                p.with_memo(memo)
            }
        });
        info!(seat, "Saved player");
        Ok(self.persist_players())
    }

    /// Flip each hand in or out of the seat's range for this action and
    /// position, as clicks on the chart would
    pub fn toggle_hands(
        &mut self,
        seat: Seat,
        action: Action,
        position: Option<Position>,
        hands: &[HandCode],
    ) -> SaveOutcome {
        let current = self
            .store
            .get(seat)
            .and_then(|p| p.range_for(action, position))
            .map(|entry| entry.hands.clone())
            .unwrap_or_default();
        let next = hands
            .iter()
            .fold(current, |selected, code| toggle(&selected, *code));
        self.record_range(seat, action, position, next)
    }

    /// Copy a registered player's name and ranges into another seat
    pub fn copy_player(&mut self, from: Seat, to: Seat) -> Result<SaveOutcome> {
        let source = self
            .store
            .get(from)
            .filter(|p| p.is_named())
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("No registered player in seat {}", from)))?;

        self.apply(to, |p| p.with_name(source.name).with_ranges(source.actions));
        Ok(self.persist_players())
    }

    /// Remove the player and vacate the seat
    pub fn delete_player(&mut self, seat: Seat) -> SaveOutcome {
        if self.store.remove(seat).is_some() {
            info!(seat, "Deleted player");
        }
        self.persist_players().and(self.persist_seats())
    }

    /// Structured range summary for the seat (empty if nobody is there)
    pub fn summary(&self, seat: Seat) -> Summary {
        self.store
            .get(seat)
            .map(|p| summarize(&p.actions))
            .unwrap_or_default()
    }

    fn apply<F>(&mut self, seat: Seat, transform: F)
    where
        F: FnOnce(PlayerRecord) -> PlayerRecord,
    {
        self.store.update(seat, transform);
        if let Some(record) = self.store.get(seat) {
            assert_player_invariants(seat, record);
        }
    }

    fn persist_players(&self) -> SaveOutcome {
        match serde_json::to_value(self.store.players()) {
            Ok(value) => self.persist(PLAYERS_KEY, &value),
            Err(e) => self.failed(PLAYERS_KEY, e.into()),
        }
    }

    fn persist_seats(&self) -> SaveOutcome {
        self.persist(OCCUPIED_SEATS_KEY, &json!(self.store.occupied_seats()))
    }

    fn persist(&self, key: &str, value: &Value) -> SaveOutcome {
        match self.storage.save(key, value) {
            Ok(()) => SaveOutcome::Saved,
            Err(e) => self.failed(key, e),
        }
    }

    fn failed(&self, key: &str, error: Error) -> SaveOutcome {
        warn!(key, error = %error, "Failed to save tracker state");
        SaveOutcome::Failed(error.to_string())
    }
}

fn decode_players(value: &Value) -> BTreeMap<Seat, PlayerRecord> {
    let Some(map) = value.as_object() else {
        warn!("Stored players are not an object, ignoring");
        return BTreeMap::new();
    };
    map.iter()
        .filter_map(|(seat, record)| {
            let seat = seat.parse::<Seat>().ok()?;
            Some((seat, PlayerRecord::from_value(record)?))
        })
        .collect()
}

fn decode_seats(value: &Value) -> Vec<Seat> {
    value
        .as_array()
        .map(|seats| seats.iter().filter_map(Value::as_i64).collect())
        .unwrap_or_default()
}
