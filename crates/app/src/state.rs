//! Application state management

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use seatbook_core::{Config, Database, Error, KeyValueStore, MemoryStore, Result, Seat, Tracker};

/// Storage backend chosen at startup
pub type Storage = Box<dyn KeyValueStore>;

/// Main application state
pub struct AppState {
    pub config: Config,
    pub tracker: Tracker<Storage>,
    data_dir: PathBuf,
}

impl AppState {
    /// Load config and open the tracker
    ///
    /// With `ephemeral` set nothing is written to disk.
    pub fn new(config_path: Option<&Path>, ephemeral: bool) -> Result<Self> {
        let data_dir = Self::data_path()?;
        let config = match config_path.map(Path::to_path_buf).or_else(Config::default_path) {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        };

        let storage: Storage = if ephemeral {
            tracing::info!("Using in-memory storage");
            Box::new(MemoryStore::new())
        } else {
            let db_path = config.database_path(&data_dir);
            if let Some(parent) = db_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            Box::new(Database::open(&db_path)?)
        };

        Ok(Self {
            config,
            tracker: Tracker::open(storage),
            data_dir,
        })
    }

    fn data_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "seatbook", "seatbook").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;

        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Reject seats that are not at this table
    pub fn check_seat(&self, seat: Seat) -> Result<Seat> {
        if self.config.seats().contains(&seat) {
            Ok(seat)
        } else {
            Err(Error::Validation(format!(
                "Seat {} is not at this table (1-{})",
                seat, self.config.table_size
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_state(config: Config) -> AppState {
        let storage: Storage = Box::new(MemoryStore::new());
        AppState {
            config,
            tracker: Tracker::open(storage),
            data_dir: PathBuf::from("/tmp/seatbook-test"),
        }
    }

    #[test]
    fn test_check_seat_bounds() {
        let state = test_state(Config::default());
        assert_eq!(state.check_seat(1).unwrap(), 1);
        assert_eq!(state.check_seat(9).unwrap(), 9);
        assert!(matches!(state.check_seat(0), Err(Error::Validation(_))));
        assert!(matches!(state.check_seat(10), Err(Error::Validation(_))));
    }

    #[test]
    fn test_short_table() {
        let state = test_state(Config::from_toml("table_size = 6").unwrap());
        assert!(state.check_seat(6).is_ok());
        assert!(state.check_seat(7).is_err());
    }

    #[test]
    fn test_ephemeral_with_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seatbook.toml");
        std::fs::write(&path, "table_size = 8\n").unwrap();

        // Only fails where no home directory can be resolved
        if let Ok(mut state) = AppState::new(Some(&path), true) {
            assert_eq!(state.config.table_size, 8);
            assert!(state.tracker.select_seat(8).is_saved());
            assert!(state.tracker.store().is_occupied(8));
        }
    }
}
