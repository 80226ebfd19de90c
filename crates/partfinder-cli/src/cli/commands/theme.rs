//! `partfinder theme` – print the colour palette for the styling build.

use anyhow::Result;
use partfinder_core::theme::Theme;

pub fn run_theme() -> Result<()> {
    println!("{}", Theme::default().to_json_pretty()?);
    Ok(())
}
