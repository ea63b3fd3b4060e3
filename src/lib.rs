pub mod config;
pub mod display;
pub mod model;
pub mod normalizer;
pub mod ranking;
pub mod supplier;

pub use model::{ItemRecord, SearchQuery};
pub use ranking::{rank, rank_with_report, Currency};
