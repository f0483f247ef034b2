//! Flat-file snapshot store.
//!
//! One CSV file per source id, mirroring the upstream payload shape: a
//! header row naming the timestamp column (`indice_tiempo`) and the source
//! id as the value column, then one `token,value` row per observation.

use crate::core::RawObservation;
use crate::store::SeriesStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const TIMESTAMP_COLUMN: &str = "indice_tiempo";

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates, if needed) a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create cache directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn snapshot_path(&self, source_id: &str) -> PathBuf {
        // Source ids are dot/underscore-separated; keep anything filesystem
        // hostile out of the file name.
        let file_name: String = source_id
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            })
            .collect();
        self.dir.join(format!("{file_name}.csv"))
    }
}

#[async_trait]
impl SeriesStore for FileStore {
    async fn get(&self, source_id: &str) -> Result<Option<Vec<RawObservation>>> {
        let path = self.snapshot_path(source_id);
        if !path.exists() {
            debug!(source_id, "Cache MISS (no snapshot file)");
            return Ok(None);
        }
        let rows = read_snapshot(&path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        debug!(source_id, rows = rows.len(), "Cache HIT");
        Ok(Some(rows))
    }

    async fn put(&self, source_id: &str, rows: &[RawObservation]) -> Result<()> {
        let path = self.snapshot_path(source_id);
        // Write to a sibling temp file and rename, so readers never see a
        // half-written snapshot.
        let tmp_path = path.with_extension("csv.tmp");
        write_snapshot(&tmp_path, source_id, rows)
            .with_context(|| format!("Failed to write snapshot: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &path)
            .with_context(|| format!("Failed to replace snapshot: {}", path.display()))?;
        debug!(source_id, rows = rows.len(), "Cache PUT");
        Ok(())
    }
}

fn read_snapshot(path: &Path) -> Result<Vec<RawObservation>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?;
    anyhow::ensure!(
        headers.len() >= 2 && headers.get(0) == Some(TIMESTAMP_COLUMN),
        "Unexpected snapshot header: {headers:?}"
    );

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        anyhow::ensure!(record.len() >= 2, "Truncated snapshot row: {record:?}");
        rows.push(RawObservation::new(&record[0], &record[1]));
    }
    Ok(rows)
}

fn write_snapshot(path: &Path, source_id: &str, rows: &[RawObservation]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([TIMESTAMP_COLUMN, source_id])?;
    for row in rows {
        writer.write_record([row.token.as_str(), row.value.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<RawObservation> {
        vec![
            RawObservation::new("2023-01-01", "100.5"),
            RawObservation::new("2023-02-01", "101.25"),
        ]
    }

    #[tokio::test]
    async fn test_get_missing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        assert!(store.get("143.3_EMAE_0_0_26").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_then_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        let rows = sample_rows();

        store.put("143.3_EMAE_0_0_26", &rows).await.unwrap();
        let read_back = store.get("143.3_EMAE_0_0_26").await.unwrap().unwrap();
        assert_eq!(read_back, rows);
    }

    #[tokio::test]
    async fn test_put_replaces_whole_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.put("id", &sample_rows()).await.unwrap();
        let replacement = vec![RawObservation::new("2024-01-01", "7.0")];
        store.put("id", &replacement).await.unwrap();

        assert_eq!(store.get("id").await.unwrap().unwrap(), replacement);
    }

    #[tokio::test]
    async fn test_snapshot_file_has_source_id_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        store.put("32.1_DOLAR_OFICIAL_0_0_16", &sample_rows()).await.unwrap();

        let contents =
            fs::read_to_string(dir.path().join("32.1_DOLAR_OFICIAL_0_0_16.csv")).unwrap();
        let first_line = contents.lines().next().unwrap();
        assert_eq!(first_line, "indice_tiempo,32.1_DOLAR_OFICIAL_0_0_16");
    }
}
