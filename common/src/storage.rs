//! Outbound port for snapshot persistence.

use crate::error::Result;
use crate::snapshot::{MacEntry, Snapshot, SnapshotKind, SnapshotMeta};

/// Contract between the validation service and whatever holds the
/// snapshots. The filesystem adapter lives in `macdiff-core`; tests can
/// substitute their own.
///
/// Snapshots are immutable once created: implementations must publish
/// atomically (a reader never observes a half-written snapshot) and
/// refuse to overwrite an existing one.
pub trait SnapshotStore {
    /// Every stored snapshot, sorted by (name, timestamp).
    fn list(&self) -> Result<Vec<SnapshotMeta>>;

    /// Loads one snapshot. `name` is either the bare user label (the
    /// newest capture under that label wins) or a full folder label
    /// when the operator needs a specific one.
    fn get(&self, name: &str) -> Result<Snapshot>;

    /// Persists a new snapshot and returns its metadata.
    fn create(
        &self,
        name: &str,
        kind: SnapshotKind,
        taken_at: &str,
        entries: &[MacEntry],
    ) -> Result<SnapshotMeta>;

    /// Removes a snapshot, returning what was deleted.
    fn delete(&self, name: &str) -> Result<SnapshotMeta>;
}
