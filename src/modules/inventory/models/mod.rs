pub mod catalog;

pub use catalog::{CatalogEntry, CatalogKind, CatalogRecord, ItemMaster, ItemRecord};
