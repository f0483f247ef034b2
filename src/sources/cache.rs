//! Cache source: serves snapshots previously persisted by the write-through
//! path.

use crate::core::RawObservation;
use crate::error::SourceUnavailable;
use crate::sources::SeriesSource;
use crate::store::SeriesStore;
use async_trait::async_trait;
use std::sync::Arc;

pub struct CacheSource {
    store: Arc<dyn SeriesStore>,
}

impl CacheSource {
    pub fn new(store: Arc<dyn SeriesStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SeriesSource for CacheSource {
    fn name(&self) -> &'static str {
        "cache"
    }

    async fn fetch(&self, source_id: &str) -> Result<Vec<RawObservation>, SourceUnavailable> {
        match self.store.get(source_id).await {
            Ok(Some(rows)) if !rows.is_empty() => Ok(rows),
            Ok(Some(_)) => Err(SourceUnavailable::new(self.name(), "empty snapshot")),
            Ok(None) => Err(SourceUnavailable::new(self.name(), "no snapshot")),
            Err(e) => Err(SourceUnavailable::new(self.name(), format!("{e:#}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_missing_snapshot_is_unavailable() {
        let source = CacheSource::new(Arc::new(MemoryStore::new()));
        let err = source.fetch("id").await.unwrap_err();
        assert_eq!(err.source_name, "cache");
    }

    #[tokio::test]
    async fn test_empty_snapshot_is_unavailable() {
        let store = Arc::new(MemoryStore::new());
        store.put("id", &[]).await.unwrap();
        let source = CacheSource::new(store);
        assert!(source.fetch("id").await.is_err());
    }

    #[tokio::test]
    async fn test_snapshot_served() {
        let store = Arc::new(MemoryStore::new());
        let rows = vec![RawObservation::new("12023", "1.0")];
        store.put("id", &rows).await.unwrap();

        let source = CacheSource::new(store);
        assert_eq!(source.fetch("id").await.unwrap(), rows);
    }
}
