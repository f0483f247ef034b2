//! Remote source: the series API at apis.datos.gob.ar.
//!
//! Requests monthly-collapsed CSV output for a series id. Timeouts, non-2xx
//! responses and malformed payloads all map to `SourceUnavailable`, so the
//! resolver can move on to the next source in the chain.

use crate::core::RawObservation;
use crate::error::SourceUnavailable;
use crate::sources::SeriesSource;
use crate::store::disk::TIMESTAMP_COLUMN;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://apis.datos.gob.ar";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(25);

pub struct RemoteSource {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteSource {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("macrovista/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn series_url(&self, source_id: &str) -> String {
        format!(
            "{}/series/api/series/?ids={}&format=csv&collapse=month",
            self.base_url, source_id
        )
    }
}

#[async_trait]
impl SeriesSource for RemoteSource {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn fetch(&self, source_id: &str) -> Result<Vec<RawObservation>, SourceUnavailable> {
        let url = self.series_url(source_id);
        debug!(%url, "Requesting series from remote API");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceUnavailable::new(self.name(), format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceUnavailable::new(
                self.name(),
                format!("status {status} for {source_id}"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceUnavailable::new(self.name(), format!("body read failed: {e}")))?;

        let rows = parse_payload(&body)
            .map_err(|reason| SourceUnavailable::new(self.name(), reason))?;
        debug!(source_id, rows = rows.len(), "Fetched series from remote API");
        Ok(rows)
    }
}

/// Parses the two-column CSV payload. The first column must be the
/// `indice_tiempo` timestamp column; the second holds the values.
fn parse_payload(body: &str) -> Result<Vec<RawObservation>, String> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| format!("unreadable payload: {e}"))?;
    if headers.len() < 2 || headers.get(0) != Some(TIMESTAMP_COLUMN) {
        return Err(format!("unexpected payload header: {headers:?}"));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        // A CSV-level error means a truncated or garbled payload; the
        // contract is full table or nothing, so fail the whole fetch.
        let record = record.map_err(|e| format!("malformed payload row: {e}"))?;
        if record.len() < 2 {
            return Err(format!("truncated payload row: {record:?}"));
        }
        rows.push(RawObservation::new(&record[0], &record[1]));
    }

    if rows.is_empty() {
        return Err("payload contained no rows".to_string());
    }
    Ok(rows)
}
