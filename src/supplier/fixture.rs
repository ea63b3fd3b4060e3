use crate::model::{ItemRecord, SearchQuery, SupplyError};
use crate::supplier::traits::ItemSupplier;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads listings from a JSON array on disk. The query is not applied;
/// fixtures are expected to hold the results of one search already.
pub struct FixtureSupplier {
    path: PathBuf,
}

impl FixtureSupplier {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ItemSupplier for FixtureSupplier {
    fn fetch(&self, query: &SearchQuery) -> Result<Vec<ItemRecord>, SupplyError> {
        info!("Reading listings for [{}] from {}", query.describe(), self.path.display());
        let content = fs::read_to_string(&self.path)?;
        let records: Vec<ItemRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }
}
