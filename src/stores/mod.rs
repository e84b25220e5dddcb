//! In-memory stores for the catalog documents and the shortlist

mod catalog_store;
mod shortlist_store;

pub use catalog_store::{read_source, CatalogStore};
pub use shortlist_store::ShortlistStore;
