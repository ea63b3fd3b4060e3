// Supplier module: sources of item records behind a common trait.

pub mod fixture;
pub mod http;
pub mod traits;

pub use fixture::FixtureSupplier;
pub use http::HttpSupplier;
pub use traits::ItemSupplier;
