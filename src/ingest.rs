//! Roster ingestion: raw CSV text → normalized [`Profile`] records.
//!
//! The header row names the columns; names are matched exactly against
//! [`ColumnsConfig`]. Only the name column is required. Every data row must
//! have as many cells as the header, otherwise the whole load fails and
//! nothing is returned.

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};
use url::Url;

use crate::config::ColumnsConfig;
use crate::error::RosterError;
use crate::models::Profile;

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/initials/svg";

/// Column positions resolved from the header row.
struct ColumnLayout {
    name: usize,
    organization: Option<usize>,
    title: Option<usize>,
    fields: Option<usize>,
    description: Option<usize>,
    support_types: Option<usize>,
    region: Option<usize>,
    email: Option<usize>,
    phone: Option<usize>,
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord, columns: &ColumnsConfig) -> Result<Self, RosterError> {
        let find = |wanted: &str| headers.iter().position(|h| h == wanted);

        let name = find(columns.name.as_str()).ok_or_else(|| {
            RosterError::Parse(format!(
                "header row has no '{}' column (found: {})",
                columns.name,
                headers.iter().collect::<Vec<_>>().join(", ")
            ))
        })?;

        Ok(Self {
            name,
            organization: find(columns.organization.as_str()),
            title: find(columns.title.as_str()),
            fields: find(columns.fields.as_str()),
            description: find(columns.description.as_str()),
            support_types: find(columns.support_types.as_str()),
            region: find(columns.region.as_str()),
            email: find(columns.email.as_str()),
            phone: find(columns.phone.as_str()),
        })
    }
}

fn cell<'r>(record: &'r StringRecord, index: Option<usize>) -> &'r str {
    index.and_then(|i| record.get(i)).unwrap_or("")
}

/// Parse roster CSV text into profiles, in row order.
///
/// Rows with an empty name are dropped; ids are dense `1..=N` over the
/// accepted rows.
pub fn parse_roster(raw: &str, columns: &ColumnsConfig) -> Result<Vec<Profile>, RosterError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(raw.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| RosterError::Parse(format!("failed to read header row: {}", e)))?
        .clone();
    let layout = ColumnLayout::resolve(&headers, columns)?;

    let mut profiles = Vec::new();
    let mut skipped = 0usize;

    for (index, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| RosterError::Parse(format!("row {}: {}", index + 1, e)))?;

        let name = cell(&record, Some(layout.name));
        if name.is_empty() {
            debug!(row = index + 1, "skipping row without a name");
            skipped += 1;
            continue;
        }

        let id = profiles.len() as u32 + 1;
        profiles.push(build_profile(
            id,
            name,
            cell(&record, layout.organization),
            cell(&record, layout.title),
            split_list(cell(&record, layout.fields)),
            cell(&record, layout.description),
            split_list(cell(&record, layout.support_types)),
            cell(&record, layout.region),
            cell(&record, layout.email),
            cell(&record, layout.phone),
        ));
    }

    info!(accepted = profiles.len(), skipped, "roster parsed");
    Ok(profiles)
}

/// Construct a profile with its derived avatar. Shared by CSV ingestion and
/// the embedded roster so both normalize identically.
#[allow(clippy::too_many_arguments)]
pub(crate) fn build_profile(
    id: u32,
    name: &str,
    organization: &str,
    title: &str,
    fields: Vec<String>,
    description: &str,
    support_types: Vec<String>,
    region: &str,
    email: &str,
    phone: &str,
) -> Profile {
    Profile {
        id,
        name: name.to_string(),
        organization: organization.to_string(),
        title: title.to_string(),
        fields,
        description: description.to_string(),
        support_types,
        region: region.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        avatar_url: avatar_url(name),
    }
}

/// Split a comma-delimited cell, trimming each piece.
///
/// Empty pieces are kept, so an empty cell yields `[""]`.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|piece| piece.trim().to_string()).collect()
}

/// Identicon URL seeded by the name with whitespace removed.
pub fn avatar_url(name: &str) -> String {
    let seed: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    match Url::parse_with_params(AVATAR_BASE, &[("seed", seed.as_str())]) {
        Ok(url) => url.to_string(),
        // AVATAR_BASE is a constant valid URL
        Err(_) => format!("{}?seed={}", AVATAR_BASE, seed),
    }
}
