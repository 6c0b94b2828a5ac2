//! The host-facing picker service.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error};

use roster_ingest::{IngestError, RosterCache};
use roster_model::{CharacterRecord, PickRequest, Roster};

use crate::extract::extract_record;
use crate::filter::filter_rows;
use crate::pick::pick_row;

/// Picks characters from one configured roster file.
///
/// The roster is loaded lazily on first use and memoized; every pick runs
/// load-or-reuse, filter, draw, extract against an immutable snapshot.
pub struct Picker {
    cache: RosterCache,
    source: PathBuf,
}

impl Picker {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            cache: RosterCache::new(),
            source: source.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Loads (or reuses) the roster behind this picker.
    pub fn roster(&self) -> Result<Arc<Roster>, IngestError> {
        self.cache.load(&self.source)
    }

    /// Host cache-invalidation hook: always answers "changed" so the host
    /// re-runs the pick every invocation instead of replaying a prior
    /// output. Output stability across calls is only what the seed
    /// guarantees.
    pub fn is_changed(&self) -> bool {
        true
    }

    /// Fallible pick. A filter miss is an `Ok` outcome carrying the
    /// distinguished no-match record; errors are load/schema failures.
    pub fn try_pick(&self, request: &PickRequest) -> Result<CharacterRecord, IngestError> {
        let roster = self.roster()?;
        let mut rng = StdRng::seed_from_u64(request.seed);

        let candidates = filter_rows(&roster, &request.filter, request.gender);
        let Some(row_index) = pick_row(&mut rng, &candidates) else {
            debug!(
                filter = %request.filter,
                gender = request.gender.as_str(),
                "no row matched the active filters"
            );
            return Ok(CharacterRecord::filter_miss());
        };

        debug!(row_index, seed = request.seed, "row selected");
        Ok(extract_record(&mut rng, &roster, row_index, request.quantity))
    }

    /// The host-facing boundary: never propagates a failure. Internal
    /// errors are logged and degraded into the empty-record shape with the
    /// failure text in the primary field, so the host always receives a
    /// well-formed record.
    pub fn pick(&self, request: &PickRequest) -> CharacterRecord {
        match self.try_pick(request) {
            Ok(record) => record,
            Err(failure) => {
                error!(error = %failure, "character pick failed");
                CharacterRecord::degraded(&format!("character pick failed: {failure}"))
            }
        }
    }
}
