//! `partfinder plate <PLATE>` – look up vehicle metadata by plate.

use anyhow::{Context, Result};
use partfinder_core::config::{self, PartfinderConfig};
use partfinder_core::lookup::{PlateClient, VehicleRecord};

pub async fn run_plate(base_url: Option<&str>, plate: &str, json: bool) -> Result<()> {
    let cfg = resolve_config(base_url)?;
    tracing::debug!("lookup config: {:?}", cfg);

    let client = PlateClient::from_config(&cfg);
    let record = client.search(plate).await?;
    tracing::info!(plate, vehicle_id = %record.vehicle_id, "plate resolved");

    if json {
        let out = serde_json::to_string_pretty(&record).context("encode record")?;
        println!("{out}");
    } else {
        print!("{}", render_table(&record));
    }
    Ok(())
}

/// `--base-url` replaces the config file entirely, so it works even when the
/// config dir is missing or unwritable.
fn resolve_config(base_url: Option<&str>) -> Result<PartfinderConfig> {
    match base_url {
        Some(url) => {
            let cfg = PartfinderConfig {
                lookup_base_url: url.to_string(),
                ..PartfinderConfig::default()
            };
            cfg.validate()?;
            Ok(cfg)
        }
        None => Ok(config::load_or_init()?),
    }
}

fn render_table(r: &VehicleRecord) -> String {
    let year = r.year.to_string();
    let rows = [
        ("VEHICLE ID", r.vehicle_id.as_str()),
        ("BRAND", r.brand.as_str()),
        ("MODEL", r.model.as_str()),
        ("ENGINE", r.engine.as_str()),
        ("YEAR", year.as_str()),
        ("TYPE", r.vehicle_type.as_str()),
        ("NOTES", r.notes.as_deref().unwrap_or("-")),
    ];
    rows.iter()
        .map(|(name, value)| format!("{:<12} {}\n", name, value))
        .collect()
}
