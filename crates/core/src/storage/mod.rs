//! SQLite storage layer for Seatbook

mod kv;
mod memory;
mod migrations;
mod traits;

use std::path::Path;

use rusqlite::Connection;
use serde_json::Value;
use tracing::instrument;

use crate::error::Result;

pub use kv::KvStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;

/// Key holding the seat -> player record mapping
pub const PLAYERS_KEY: &str = "players";
/// Key holding the list of occupied seats
pub const OCCUPIED_SEATS_KEY: &str = "occupiedSeats";

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)?;
        Ok(())
    }

    /// Get current schema version
    pub fn schema_version(&self) -> u32 {
        migrations::current_version(&self.conn).unwrap_or(0)
    }

    /// Get key-value store
    pub fn kv(&self) -> KvStore<'_> {
        KvStore::new(&self.conn)
    }
}

impl KeyValueStore for Database {
    fn save(&self, key: &str, value: &Value) -> Result<()> {
        self.kv().set(key, value)
    }

    fn load(&self, key: &str) -> Result<Option<Value>> {
        self.kv().get(key)
    }
}
