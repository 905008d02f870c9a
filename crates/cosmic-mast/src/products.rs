//! Per-observation product listing, filtered to displayable previews

use crate::archive::{cell_text, ArchiveClient, ArchiveError, Row};
use cosmic_core::{ObservationId, Product};

/// Outcome of a product lookup. Failures become an empty listing plus a warning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductLookup {
    pub products: Vec<Product>,
    pub warning: Option<String>,
}

impl ProductLookup {
    pub fn found(products: Vec<Product>) -> Self {
        Self {
            products,
            warning: None,
        }
    }

    /// Log and absorb a failed lookup
    pub fn failed(id: &ObservationId, err: &ArchiveError) -> Self {
        let warning = format!("Could not fetch products for {}: {}", id, err);
        tracing::warn!(obs_id = %id, error = %err, "product lookup failed");
        Self {
            products: Vec::new(),
            warning: Some(warning),
        }
    }
}

pub fn product_from_row(row: &Row) -> Product {
    Product {
        product_type: cell_text(row, "productType"),
        data_uri: cell_text(row, "dataURI"),
    }
}

/// Displayable products for `id`, in archive order
pub fn fetch_preview_products<C: ArchiveClient + ?Sized>(
    client: &C,
    id: &ObservationId,
) -> Result<Vec<Product>, ArchiveError> {
    let rows = client.product_list(id)?;
    let products: Vec<Product> = rows
        .iter()
        .map(product_from_row)
        .filter(Product::is_displayable)
        .collect();
    tracing::debug!(obs_id = %id, rows = rows.len(), previews = products.len(), "product listing");
    Ok(products)
}

/// Uncached lookup that never fails
pub fn list_products<C: ArchiveClient + ?Sized>(client: &C, id: &ObservationId) -> ProductLookup {
    match fetch_preview_products(client, id) {
        Ok(products) => ProductLookup::found(products),
        Err(e) => ProductLookup::failed(id, &e),
    }
}
