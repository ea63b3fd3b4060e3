use crate::display::columns::{columns, Field};
use crate::model::{ItemRecord, SearchQuery};
use chrono::{DateTime, Utc};

/// How many of the cheapest listings are shown by default.
pub const DEFAULT_TOP_K: usize = 5;

/// The cheapest entries of a ranking, ready for display.
#[derive(Debug, Clone)]
pub struct Listing {
    pub query: SearchQuery,
    pub items: Vec<ItemRecord>,
    pub columns: &'static [(Field, &'static str)],
    pub generated_at: DateTime<Utc>,
}

/// Keeps the first `k` entries of an already ranked sequence.
pub fn top_k(ranked: Vec<ItemRecord>, query: &SearchQuery, k: usize) -> Listing {
    let mut items = ranked;
    items.truncate(k);
    Listing {
        query: query.clone(),
        items,
        columns: columns(),
        generated_at: Utc::now(),
    }
}
