//! `partfinder brands|models|versions` – cascading vehicle selectors.

use anyhow::Result;
use partfinder_core::catalog::{self, CatalogOption};

pub async fn run_brands() -> Result<()> {
    print_options(&catalog::fetch_brands().await, "No brands.");
    Ok(())
}

pub async fn run_models(brand: &str) -> Result<()> {
    let models = catalog::fetch_models(brand).await;
    if models.is_empty() {
        tracing::debug!(brand, "no models for brand");
    }
    print_options(&models, &format!("No models for brand {brand:?}."));
    Ok(())
}

pub async fn run_versions(brand: &str, model: &str) -> Result<()> {
    print_options(&catalog::fetch_versions(brand, model).await, "No versions.");
    Ok(())
}

fn print_options(options: &[CatalogOption], empty: &str) {
    if options.is_empty() {
        println!("{empty}");
        return;
    }
    for o in options {
        println!("{}", o.label);
    }
}
