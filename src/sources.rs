use anyhow::{anyhow, Result};

use crate::config::Config;
use crate::connector_builtin::BuiltinSource;
use crate::connector_fs::FileSource;
use crate::connector_http::HttpSource;
use crate::traits::RosterSource;

/// Build the roster source named by `[roster].source`.
pub fn source_from_config(config: &Config) -> Result<Box<dyn RosterSource>> {
    let roster = &config.roster;
    let source: Box<dyn RosterSource> = match roster.source.as_str() {
        "builtin" => Box::new(BuiltinSource),
        "file" => {
            let path = roster
                .path
                .clone()
                .ok_or_else(|| anyhow!("roster.path must be specified when source is 'file'"))?;
            Box::new(FileSource::new(path, config.columns.clone()))
        }
        "http" => {
            let url = roster
                .url
                .clone()
                .ok_or_else(|| anyhow!("roster.url must be specified when source is 'http'"))?;
            Box::new(HttpSource::new(url, roster.timeout_secs, config.columns.clone()))
        }
        other => return Err(anyhow!("Unknown roster source: '{}'", other)),
    };
    Ok(source)
}

pub fn list_sources(config: &Config) -> Result<()> {
    let source = source_from_config(config)?;
    let status = if source.is_healthy() { "OK" } else { "UNAVAILABLE" };

    println!("{:<10} {:<12} LOCATION", "SOURCE", "STATUS");
    println!("{:<10} {:<12} {}", source.name(), status, source.describe());
    println!();
    println!("favorites: {}", config.favorites.path.display());

    Ok(())
}
