use dialogscraper_core::ScraperConfig;
use std::path::Path;

use super::config_path;

pub fn run(explicit: Option<&Path>) -> anyhow::Result<()> {
    let path = config_path(explicit);
    let config = ScraperConfig::load(&path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
