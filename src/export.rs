//! Export the normalized roster as JSON.
//!
//! Writes every loaded profile, including derived ids and avatar URLs, so
//! the roster can be inspected or consumed by other tools.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::commands::open_session;
use crate::config::Config;
use crate::models::Profile;

#[derive(Serialize)]
struct ExportData<'a> {
    source: &'a str,
    count: usize,
    profiles: &'a [Profile],
}

pub fn to_json(source: &str, profiles: &[Profile]) -> Result<String> {
    let data = ExportData {
        source,
        count: profiles.len(),
        profiles,
    };
    Ok(serde_json::to_string_pretty(&data)?)
}

/// If `output` is `Some`, writes to that file path. Otherwise writes
/// to stdout for piping.
pub async fn run_export(config: &Config, output: Option<&Path>) -> Result<()> {
    let session = open_session(config).await?;
    let profiles = session.state().roster();
    let json = to_json(&config.roster.source, profiles)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &json)?;
            eprintln!("Exported {} mentors to {}", profiles.len(), path.display());
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
