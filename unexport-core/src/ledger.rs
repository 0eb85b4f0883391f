//! Concurrent usage ledger: one independently locked record per candidate.
//!
//! The ledger's shape is fixed at construction - every candidate gets its
//! record before any scanning starts, so the scan phase never allocates
//! and no race can create the same record twice. Mutation during the scan
//! is confined to each record's own lock; once the scan workers have
//! joined, reads need no further synchronization.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::model::{Identifier, Position, Symbol};

/// External references recorded for one candidate identifier.
///
/// Use positions are unique keys; insertion order is irrelevant. Writers
/// for the same candidate serialize through the record's lock, writers
/// for different candidates never contend.
#[derive(Debug)]
pub struct UsageRecord {
    ident: Identifier,
    uses: Mutex<HashMap<Position, Symbol>>,
}

impl UsageRecord {
    fn new(ident: Identifier) -> Self {
        Self {
            ident,
            uses: Mutex::new(HashMap::new()),
        }
    }

    /// The candidate this record tracks.
    pub fn ident(&self) -> &Identifier {
        &self.ident
    }

    /// Record an external reference resolving to this candidate.
    pub fn record(&self, use_position: Position, symbol: Symbol) {
        let mut uses = self.uses.lock().unwrap_or_else(PoisonError::into_inner);
        uses.insert(use_position, symbol);
    }

    /// Whether any external reference was recorded.
    pub fn is_used(&self) -> bool {
        !self
            .uses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Number of distinct use positions recorded.
    pub fn use_count(&self) -> usize {
        self.uses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Snapshot of the recorded uses, sorted by position.
    pub fn uses(&self) -> Vec<(Position, Symbol)> {
        let mut out: Vec<(Position, Symbol)> = self
            .uses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(p, s)| (p.clone(), s.clone()))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }
}

/// Mapping from candidate definition position to its [`UsageRecord`].
///
/// Keyed by position rather than by name: position equality is the join
/// key of the whole analysis, so a foreign local that merely shares a
/// candidate's name can never pollute its record.
#[derive(Debug)]
pub struct UsageLedger {
    records: HashMap<Position, UsageRecord>,
}

impl UsageLedger {
    /// Pre-allocates one empty record per candidate.
    ///
    /// Must run to completion before any scanning begins; the ledger
    /// exposes no way to add or remove records afterwards.
    pub fn new(candidates: Vec<Identifier>) -> Self {
        let records = candidates
            .into_iter()
            .map(|ident| (ident.position.clone(), UsageRecord::new(ident)))
            .collect();
        Self { records }
    }

    /// Record a reference against the candidate defined at `def_position`.
    ///
    /// Returns `true` if the position belongs to a candidate; a position
    /// with no record is not a candidate and the call is a no-op. Safe to
    /// call concurrently for different candidates; calls for the same
    /// candidate are internally serialized.
    pub fn record(&self, def_position: &Position, use_position: Position, symbol: Symbol) -> bool {
        match self.records.get(def_position) {
            Some(record) => {
                record.record(use_position, symbol);
                true
            }
            None => false,
        }
    }

    /// Whether the candidate at `def_position` has any recorded use.
    pub fn is_used(&self, def_position: &Position) -> bool {
        self.records
            .get(def_position)
            .is_some_and(UsageRecord::is_used)
    }

    /// Look up the record of a candidate.
    pub fn get(&self, def_position: &Position) -> Option<&UsageRecord> {
        self.records.get(def_position)
    }

    /// Iterate over all records (no ordering guarantee).
    pub fn records(&self) -> impl Iterator<Item = &UsageRecord> {
        self.records.values()
    }

    /// Number of candidates tracked.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
