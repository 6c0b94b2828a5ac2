//! Load-or-reload roster cache.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::info;

use roster_model::Roster;

use crate::csv_table::read_roster_table;
use crate::error::Result;
use crate::schema::resolve_schema;

struct CacheEntry {
    identity: PathBuf,
    roster: Arc<Roster>,
}

/// Memoizes the loaded roster keyed by source path.
///
/// The check-reload-replace sequence runs under one mutex so concurrent
/// callers never observe a half-replaced entry or trigger duplicate reloads;
/// what they share is an immutable `Arc` snapshot.
#[derive(Default)]
pub struct RosterCache {
    entry: Mutex<Option<CacheEntry>>,
}

impl RosterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached roster for `path`, reloading only when nothing is
    /// cached yet or the path differs from the cached identity.
    pub fn load(&self, path: &Path) -> Result<Arc<Roster>> {
        let mut guard = self
            .entry
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if let Some(entry) = guard.as_ref()
            && entry.identity == path
        {
            return Ok(Arc::clone(&entry.roster));
        }

        let roster = Arc::new(load_roster(path)?);
        *guard = Some(CacheEntry {
            identity: path.to_path_buf(),
            roster: Arc::clone(&roster),
        });
        Ok(roster)
    }
}

/// Reads and schema-resolves a roster file, bypassing the cache.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let table = read_roster_table(path)?;
    let schema = resolve_schema(&table)?;
    info!(
        path = %path.display(),
        characters = table.row_count(),
        outfit_columns = schema.outfit_columns.len(),
        "roster loaded"
    );
    Ok(Roster { table, schema })
}
