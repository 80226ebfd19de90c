//! Cascading brand → model → version options for vehicle selection.
//!
//! Callers depend on the [`VehicleCatalog`] trait; [`StaticCatalog`] answers
//! from literal tables until a real catalog service exists. Unknown keys give
//! an empty list, never an error.

mod stub;

pub use stub::StaticCatalog;

use serde::{Deserialize, Serialize};

/// One entry of a selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogOption {
    pub value: String,
    pub label: String,
}

impl CatalogOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label is its value.
    pub fn same(value: &str) -> Self {
        Self::new(value, value)
    }
}

/// Source of vehicle selection options.
pub trait VehicleCatalog {
    fn brands(&self) -> Vec<CatalogOption>;
    fn models(&self, brand: &str) -> Vec<CatalogOption>;
    fn versions(&self, brand: &str, model: &str) -> Vec<CatalogOption>;
}

/// All known brands, in display order.
pub async fn fetch_brands() -> Vec<CatalogOption> {
    StaticCatalog.brands()
}

/// Models for `brand`; empty for an unknown brand.
pub async fn fetch_models(brand: &str) -> Vec<CatalogOption> {
    StaticCatalog.models(brand)
}

/// Versions (trims) for a brand/model pair.
pub async fn fetch_versions(brand: &str, model: &str) -> Vec<CatalogOption> {
    StaticCatalog.versions(brand, model)
}
