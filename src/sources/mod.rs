pub mod cache;
pub mod embedded;
pub mod remote;

use crate::core::RawObservation;
use crate::error::SourceUnavailable;
use async_trait::async_trait;

pub use cache::CacheSource;
pub use embedded::EmbeddedSource;
pub use remote::RemoteSource;

/// One origin of raw series rows: the local cache, the remote API, or the
/// compiled-in fallback data.
///
/// `fetch` either delivers the complete table for a source id or reports
/// [`SourceUnavailable`]; it never returns a truncated row set. "Not
/// present here" is an expected outcome, which is why it is a value and not
/// a panic or a catch-all error.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Short name used in logs and in `NoDataAvailable` messages.
    fn name(&self) -> &'static str;

    async fn fetch(&self, source_id: &str) -> Result<Vec<RawObservation>, SourceUnavailable>;
}
