//! # Mentor Roster
//!
//! A directory browser for mentor profiles. A small roster is loaded from
//! the embedded list, a local CSV file or a CSV URL, normalized into
//! [`models::Profile`] records, and searched by free-text keyword. Favorites
//! are bookmarked by id and persisted to a JSON file between sessions.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐   ┌──────────┐   ┌──────────────┐
//! │ Sources          │──▶│  Ingest  │──▶│  AppState    │◀── Actions
//! │ builtin/file/http│   │ CSV→rows │   │ search, tabs │
//! └──────────────────┘   └──────────┘   └──────┬───────┘
//!                                              │ SaveFavorites
//!                                              ▼
//!                                        ┌────────────┐
//!                                        │ JSON store │
//!                                        └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! mentors search AI            # filter the roster
//! mentors show 3               # full profile
//! mentors fav 3                # toggle a favorite
//! mentors favorites            # list favorites
//! mentors browse               # interactive session
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`error`] | Roster load errors |
//! | [`ingest`] | CSV → profile normalization |
//! | [`search`] | Keyword filter |
//! | [`favorites`] | Favorite set and JSON store |
//! | [`traits`] | `RosterSource` extension trait |
//! | [`connector_builtin`] | Embedded roster |
//! | [`connector_fs`] | Local CSV file |
//! | [`connector_http`] | Remote CSV URL |
//! | [`sources`] | Source selection and status |
//! | [`state`] | Screen/tab state transitions |
//! | [`render`] | Text views |
//! | [`browse`] | Interactive session |
//! | [`commands`] | One-shot CLI commands |
//! | [`export`] | JSON export |

pub mod browse;
pub mod commands;
pub mod config;
pub mod connector_builtin;
pub mod connector_fs;
pub mod connector_http;
pub mod error;
pub mod export;
pub mod favorites;
pub mod ingest;
pub mod models;
pub mod render;
pub mod search;
pub mod sources;
pub mod state;
pub mod traits;
