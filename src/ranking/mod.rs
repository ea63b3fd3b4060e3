// Ranking module: currency tiers, natural ordering and the ranking pass itself.

pub mod currency;
pub mod engine;
pub mod natural;

pub use currency::Currency;
pub use engine::{rank, rank_with_report, Ranking};
pub use natural::natural_cmp;
