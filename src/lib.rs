// Vendor catalog: ingest a flat-file catalog of vendor offerings and answer
// "which vendor supplies this whole set of items at the lowest total cost?"
//
// Ingestion runs once (CatalogBuilder), deduplicating repeated listings to
// their cheapest observed price; the resulting Catalog is read-only and
// serves any number of pick_best_vendor queries.

pub mod catalog;
pub mod error;
pub mod matcher;
pub mod record;

// Re-export key types for convenience
pub use catalog::{Catalog, CatalogBuilder, Vendor};
pub use error::CatalogError;
pub use matcher::VendorMatch;
pub use record::{normalize_item, parse_record, MenuRecord};

// Reference dataset shipped with the crate (see samples/)
pub const SAMPLE_CATALOG_PATH: &str = "samples/vendor_catalog.csv";
