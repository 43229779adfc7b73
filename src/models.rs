//! Core data models used throughout the roster browser.

use serde::Serialize;

/// One mentor's directory entry after normalization.
///
/// `id` is assigned by ingestion order (1-based) and is only stable within
/// a single load; the source data carries no external key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub organization: String,
    pub title: String,
    /// Topic tags, in source order.
    pub fields: Vec<String>,
    pub description: String,
    pub support_types: Vec<String>,
    pub region: String,
    pub email: String,
    pub phone: String,
    pub avatar_url: String,
}
