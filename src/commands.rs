//! One-shot CLI commands.
//!
//! Each command opens a session (favorites from disk, roster from the
//! configured source), applies a single action and prints the outcome.
//! A roster that fails to load is logged and treated as empty.

use anyhow::{bail, Result};

use crate::browse::Session;
use crate::config::Config;
use crate::favorites::JsonFileStore;
use crate::render;
use crate::search::POPULAR_TAGS;
use crate::sources::source_from_config;
use crate::state::Action;

/// Open a session with the roster already loaded.
pub async fn open_session(config: &Config) -> Result<Session<JsonFileStore>> {
    let source = source_from_config(config)?;
    let mut session = Session::new(JsonFileStore::new(&config.favorites.path));
    let loaded = source.load().await;
    session.dispatch(Action::RosterLoaded(loaded));
    Ok(session)
}

pub async fn run_search(config: &Config, query: &str) -> Result<()> {
    let mut session = open_session(config).await?;
    session.dispatch(Action::Search(query.to_string()));

    let state = session.state();
    println!("{}", render::result_count(state.results().len()));
    println!();
    print!(
        "{}",
        render::card_list(state.results(), |id| state.is_favorite(id), render::no_results)
    );
    Ok(())
}

pub async fn run_show(config: &Config, id: u32) -> Result<()> {
    let mut session = open_session(config).await?;
    session.dispatch(Action::Open(id));

    let state = session.state();
    match state.selected() {
        Some(profile) => {
            print!("{}", render::detail(profile, state.is_favorite(profile.id)));
            Ok(())
        }
        None => bail!("mentor not found: {}", id),
    }
}

pub async fn run_favorites(config: &Config) -> Result<()> {
    let session = open_session(config).await?;
    let state = session.state();
    print!(
        "{}",
        render::card_list(
            state.favorite_profiles(),
            |id| state.is_favorite(id),
            render::no_favorites
        )
    );
    Ok(())
}

pub async fn run_toggle(config: &Config, id: u32) -> Result<()> {
    let mut session = open_session(config).await?;
    session.dispatch(Action::ToggleFavorite(id));

    let state = session.state();
    let label = state
        .roster()
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "not in current roster".to_string());

    if state.is_favorite(id) {
        println!("added {} ({}) to favorites", id, label);
    } else {
        println!("removed {} ({}) from favorites", id, label);
    }
    Ok(())
}

pub fn run_tags() {
    for tag in POPULAR_TAGS {
        println!("{}", tag);
    }
}
