//! In-memory snapshot store, used by tests and ad-hoc hosts.

use crate::core::RawObservation;
use crate::store::SeriesStore;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<HashMap<String, Vec<RawObservation>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeriesStore for MemoryStore {
    async fn get(&self, source_id: &str) -> Result<Option<Vec<RawObservation>>> {
        let inner = self.inner.lock().await;
        let snapshot = inner.get(source_id).cloned();
        if snapshot.is_some() {
            debug!(source_id, "Cache HIT");
        } else {
            debug!(source_id, "Cache MISS");
        }
        Ok(snapshot)
    }

    async fn put(&self, source_id: &str, rows: &[RawObservation]) -> Result<()> {
        let mut inner = self.inner.lock().await;
        debug!(source_id, rows = rows.len(), "Cache PUT");
        inner.insert(source_id.to_string(), rows.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_put() {
        let store = MemoryStore::new();
        assert!(store.get("id").await.unwrap().is_none());

        let rows = vec![RawObservation::new("12023", "1.0")];
        store.put("id", &rows).await.unwrap();
        assert_eq!(store.get("id").await.unwrap().unwrap(), rows);
        assert!(store.get("other").await.unwrap().is_none());
    }
}
