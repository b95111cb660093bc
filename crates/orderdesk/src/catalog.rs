//! # Inventory Catalog
//!
//! Read-only product catalog backing the composer's selection fields. The
//! data ships bundled with the binary; the catalog is a collaborator the
//! workflow reads, never writes.

use serde::Deserialize;

/// One selectable product from the bundled inventory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub brand: String,
    pub color: String,
}

/// Returns the bundled inventory as `Vec<CatalogItem>`.
pub fn inventory_data() -> Vec<CatalogItem> {
    let bytes = include_bytes!("./resources/inventory.json");
    serde_json::from_slice(bytes).expect("Failed to parse bundled inventory.json")
}
