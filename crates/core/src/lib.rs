//! Seatbook Core Library
//!
//! Hand-range models, range utilities, the seat store, persistence and the
//! tracker session for recording opponents' preflop ranges.

pub mod config;
pub mod error;
pub mod invariants;
pub mod models;
pub mod range;
pub mod storage;
pub mod store;
pub mod tracker;

pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use models::*;
pub use range::{
    categorize, compress, expand, format_summary, group_by_action_position, summarize, Summary,
};
pub use storage::{Database, KeyValueStore, MemoryStore};
pub use store::RangeStore;
pub use tracker::{SaveOutcome, Tracker};
