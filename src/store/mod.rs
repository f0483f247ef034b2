pub mod disk;
pub mod memory;

use crate::core::RawObservation;
use anyhow::Result;
use async_trait::async_trait;

pub use disk::FileStore;
pub use memory::MemoryStore;

/// Key-value persistence for raw series snapshots, keyed by source id.
///
/// Writes replace the whole snapshot for a key; there is no partial update.
/// The resolver only depends on this trait, so tests can plug an in-memory
/// store instead of touching the filesystem.
#[async_trait]
pub trait SeriesStore: Send + Sync {
    /// Returns the stored snapshot, or `None` when no snapshot exists.
    async fn get(&self, source_id: &str) -> Result<Option<Vec<RawObservation>>>;

    /// Replaces the snapshot for `source_id` with `rows`.
    async fn put(&self, source_id: &str, rows: &[RawObservation]) -> Result<()>;
}
