//! Literal brand/model/version tables standing in for a catalog service.

use super::{CatalogOption, VehicleCatalog};

const BRANDS: [&str; 4] = ["KIA MOTORS", "TOYOTA", "HYUNDAI", "CHEVROLET"];

const MODELS_BY_BRAND: [(&str, [&str; 4]); 4] = [
    ("KIA MOTORS", ["MORNING", "RIO", "SPORTAGE", "CERATO"]),
    ("TOYOTA", ["YARIS", "COROLLA", "RAV4", "HILUX"]),
    ("HYUNDAI", ["ACCENT", "ELANTRA", "TUCSON", "SANTA FE"]),
    ("CHEVROLET", ["SPARK", "SAIL", "CAPTIVA", "COLORADO"]),
];

const VERSIONS: [&str; 3] = ["Base", "Mid", "Full"];

/// Catalog answered from the tables above. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

fn options(values: &[&str]) -> Vec<CatalogOption> {
    values.iter().copied().map(CatalogOption::same).collect()
}

impl VehicleCatalog for StaticCatalog {
    fn brands(&self) -> Vec<CatalogOption> {
        options(&BRANDS)
    }

    fn models(&self, brand: &str) -> Vec<CatalogOption> {
        MODELS_BY_BRAND
            .iter()
            .find(|(b, _)| *b == brand)
            .map(|(_, models)| options(models))
            .unwrap_or_default()
    }

    // TODO: key versions by (brand, model) once the catalog service exposes trims.
    fn versions(&self, _brand: &str, _model: &str) -> Vec<CatalogOption> {
        options(&VERSIONS)
    }
}
