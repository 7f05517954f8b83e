use crate::model::{RawRecord, SearchRequest, SourceError};

/// Seam between the pipeline and the marketplace. Implementations own
/// their request timeout and surface failures as errors instead of partial
/// data.
#[async_trait::async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch(&self, search: &SearchRequest) -> Result<Vec<RawRecord>, SourceError>;
}
