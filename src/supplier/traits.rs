use crate::model::{ItemRecord, SearchQuery, SupplyError};

/// Anything that can turn a search into a list of listings. Failures are
/// reported as errors, never as half-filled records.
pub trait ItemSupplier {
    fn fetch(&self, query: &SearchQuery) -> Result<Vec<ItemRecord>, SupplyError>;
}
