//! Plain-text views of the browser state.

use std::fmt::Write;

use crate::models::Profile;
use crate::search::POPULAR_TAGS;
use crate::state::{AppState, Screen, Tab};

const CARD_TAGS: usize = 2;

const CONTACT_TIP: &str = "Tip: when contacting a mentor, introduce yourself and your research \
theme briefly and state concrete questions. Organizing your questions beforehand helps.";

fn heart(favorite: bool) -> &'static str {
    if favorite {
        "♥"
    } else {
        "♡"
    }
}

fn visible_tags(profile: &Profile) -> Vec<&str> {
    profile
        .fields
        .iter()
        .map(String::as_str)
        .filter(|t| !t.is_empty())
        .collect()
}

/// One-entry summary: name, affiliation, first two tags.
pub fn card(profile: &Profile, favorite: bool) -> String {
    let tags = visible_tags(profile);
    let mut line = tags
        .iter()
        .take(CARD_TAGS)
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");
    if tags.len() > CARD_TAGS {
        let _ = write!(line, " +{}", tags.len() - CARD_TAGS);
    }

    let mut out = String::new();
    let _ = writeln!(out, "[{}] {} {}", profile.id, profile.name, heart(favorite));
    let _ = writeln!(out, "    {} | {}", profile.organization, profile.title);
    if !line.is_empty() {
        let _ = writeln!(out, "    {}", line);
    }
    out
}

/// Full profile page.
pub fn detail(profile: &Profile, favorite: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Mentor profile {} ---", heart(favorite));
    let _ = writeln!(out, "id:           {}", profile.id);
    let _ = writeln!(out, "name:         {}", profile.name);
    let _ = writeln!(out, "title:        {}", profile.title);
    let _ = writeln!(out, "organization: {}", profile.organization);
    let _ = writeln!(out, "fields:       {}", visible_tags(profile).join(", "));
    let _ = writeln!(out, "avatar:       {}", profile.avatar_url);
    let _ = writeln!(out);

    let _ = writeln!(out, "--- About ---");
    let _ = writeln!(out, "{}", profile.description);
    let _ = writeln!(out);

    let _ = writeln!(out, "--- Support ---");
    for kind in profile.support_types.iter().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "- {}", kind);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "--- Region ---");
    let _ = writeln!(out, "{}", profile.region);
    let _ = writeln!(out);

    let _ = writeln!(out, "--- Contact ---");
    let _ = writeln!(out, "email: {}", profile.email);
    let _ = writeln!(out, "phone: {}", profile.phone);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", CONTACT_TIP);
    out
}

pub fn result_count(n: usize) -> String {
    match n {
        1 => "1 mentor found".to_string(),
        _ => format!("{} mentors found", n),
    }
}

pub fn no_results() -> String {
    "No mentors found\nTry different search terms.\n".to_string()
}

pub fn no_favorites() -> String {
    "No favorites yet\nBookmark mentors you are interested in with `fav <id>`.\n".to_string()
}

pub fn popular_tags() -> String {
    POPULAR_TAGS.join("  ")
}

/// Card list, or the empty state when there is nothing to show.
pub fn card_list<'a>(
    profiles: impl IntoIterator<Item = &'a Profile>,
    is_favorite: impl Fn(u32) -> bool,
    empty: fn() -> String,
) -> String {
    let mut out = String::new();
    for p in profiles {
        out.push_str(&card(p, is_favorite(p.id)));
    }
    if out.is_empty() {
        empty()
    } else {
        out
    }
}

fn tab_bar(state: &AppState) -> String {
    let mark = |active: bool, label: &str| {
        if active {
            format!("[{}]", label)
        } else {
            label.to_string()
        }
    };
    let on_search = state.screen() == Screen::Search;
    format!(
        "{} | {} | {}",
        mark(state.screen() == Screen::Home, "home"),
        mark(on_search && state.tab() == Tab::Search, "search"),
        mark(on_search && state.tab() == Tab::Favorites, "favorites"),
    )
}

fn home(state: &AppState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Mentor List");
    let _ = writeln!(out, "Connect with experts for your inquiry-based learning.");
    let _ = writeln!(out);
    let _ = writeln!(out, "What are you exploring?");
    let _ = writeln!(out, "query: {}", state.query());
    let _ = writeln!(out);
    let _ = writeln!(out, "Popular topics: {}", popular_tags());
    out
}

fn search(state: &AppState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "search: {}", state.query());
    let tabs = match state.tab() {
        Tab::Search => "[search] favorites",
        Tab::Favorites => "search [favorites]",
    };
    let _ = writeln!(out, "{}    {}", result_count(state.results().len()), tabs);
    let _ = writeln!(out);

    let is_fav = |id| state.is_favorite(id);
    let list = match state.tab() {
        Tab::Search => card_list(state.results(), is_fav, no_results),
        Tab::Favorites => card_list(state.favorite_profiles(), is_fav, no_favorites),
    };
    out.push_str(&list);
    out
}

/// Render the whole current screen, tab bar last.
pub fn screen(state: &AppState) -> String {
    let body = if state.is_loading() {
        "Loading roster...\n".to_string()
    } else {
        match state.screen() {
            Screen::Home => home(state),
            Screen::Search => search(state),
            Screen::Detail => match state.selected() {
                Some(p) => detail(p, state.is_favorite(p.id)),
                None => String::new(),
            },
        }
    };
    format!("{}\n{}\n", body, tab_bar(state))
}
