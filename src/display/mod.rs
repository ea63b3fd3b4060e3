// Display module: column labels, top-K listings and the text table.

pub mod columns;
pub mod listing;
pub mod table;

pub use columns::{columns, Field};
pub use listing::{top_k, Listing, DEFAULT_TOP_K};
pub use table::render_table;
