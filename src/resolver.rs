//! Series resolver: walks the source chain for an indicator and hands the
//! winning raw table to the normalizer.

use crate::core::{Indicator, IndicatorSpec, RawObservation, Series};
use crate::error::SeriesError;
use crate::normalize::normalize;
use crate::sources::{CacheSource, EmbeddedSource, RemoteSource, SeriesSource};
use crate::store::SeriesStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Which sources are eligible for a resolution, and in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveMode {
    /// Cache, then remote (persisting the result), then embedded.
    #[default]
    Automatic,
    /// Cache only. Never substitutes embedded data for a missing snapshot.
    LocalOnly,
    /// Embedded data only, skipping cache and network.
    EmbeddedOnly,
}

pub struct Resolver {
    store: Arc<dyn SeriesStore>,
    cache: CacheSource,
    remote: RemoteSource,
    embedded: EmbeddedSource,
}

impl Resolver {
    pub fn new(store: Arc<dyn SeriesStore>, remote: RemoteSource) -> Self {
        Self {
            cache: CacheSource::new(Arc::clone(&store)),
            store,
            remote,
            embedded: EmbeddedSource::new(),
        }
    }

    /// Produces the raw table for `spec`, trying each eligible source in
    /// order. A successful remote fetch is written through to the store so
    /// later resolutions skip the network.
    pub async fn resolve(
        &self,
        spec: &IndicatorSpec,
        mode: ResolveMode,
    ) -> Result<Vec<RawObservation>, SeriesError> {
        let chain: Vec<(&dyn SeriesSource, bool)> = match mode {
            ResolveMode::Automatic => vec![
                (&self.cache, false),
                (&self.remote, true),
                (&self.embedded, false),
            ],
            ResolveMode::LocalOnly => vec![(&self.cache, false)],
            ResolveMode::EmbeddedOnly => vec![(&self.embedded, false)],
        };

        let mut attempts = Vec::with_capacity(chain.len());
        for (source, write_through) in chain {
            match source.fetch(spec.source_id).await {
                Ok(rows) => {
                    debug!(
                        indicator = spec.name,
                        source = source.name(),
                        rows = rows.len(),
                        "Resolved series"
                    );
                    if write_through {
                        // A failed cache write is not worth failing the
                        // resolution; the rows are already in hand.
                        if let Err(e) = self.store.put(spec.source_id, &rows).await {
                            warn!(
                                indicator = spec.name,
                                error = %e,
                                "Failed to persist fetched series to cache"
                            );
                        }
                    }
                    return Ok(rows);
                }
                Err(e) => {
                    debug!(indicator = spec.name, source = e.source_name, reason = %e.reason, "Source unavailable");
                    attempts.push(format!("{}: {}", e.source_name, e.reason));
                }
            }
        }

        Err(SeriesError::NoDataAvailable {
            indicator: spec.name,
            attempts: attempts.join("; "),
        })
    }

    /// Consumer-facing boundary: indicator name in, normalized series out.
    pub async fn series(
        &self,
        indicator_name: &str,
        mode: ResolveMode,
    ) -> Result<Series, SeriesError> {
        let indicator: Indicator = indicator_name.parse()?;
        self.series_for(indicator, mode).await
    }

    pub async fn series_for(
        &self,
        indicator: Indicator,
        mode: ResolveMode,
    ) -> Result<Series, SeriesError> {
        let spec = indicator.spec();
        let raw = self.resolve(spec, mode).await?;
        normalize(&raw, spec)
    }
}
