//! `partfinder form-template` / `partfinder form-check <PATH>`.

use anyhow::{Context, Result};
use partfinder_core::form::FormData;
use std::fs;
use std::path::Path;

/// Print an empty submission payload to fill in.
pub fn run_form_template() -> Result<()> {
    println!("{}", FormData::default().to_json_pretty()?);
    Ok(())
}

/// Load a submission payload and print a one-line summary. Shape only; values are not checked.
pub fn run_form_check(path: &Path) -> Result<()> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let form = FormData::from_json(&data).with_context(|| format!("parse {}", path.display()))?;
    println!("{}", summary(&form));
    Ok(())
}

fn summary(form: &FormData) -> String {
    let v = &form.vehicle;
    let p = &form.part;
    format!(
        "{} {} {} {} | {}/{} ({} images) | {} <{}>",
        v.brand,
        v.model,
        v.year,
        v.version,
        p.category,
        p.subcategory,
        p.images.len(),
        form.contact.full_name,
        form.contact.email
    )
}
