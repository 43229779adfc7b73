//! Browser state as an immutable snapshot.
//!
//! [`AppState::transition`] takes one [`Action`] and returns the next
//! snapshot plus at most one [`Effect`] for the owner to carry out. The
//! state itself never performs I/O; persisting favorites is the owner's job.

use std::sync::Arc;

use tracing::{error, info};

use crate::error::RosterError;
use crate::favorites::FavoriteSet;
use crate::models::Profile;
use crate::search::filter_profiles;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Search,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Search,
    Favorites,
}

#[derive(Debug, Clone)]
pub enum Action {
    GoHome,
    /// Bottom bar "search": search screen, search tab.
    ShowSearchTab,
    /// Bottom bar "favorites": search screen, favorites tab.
    ShowFavoritesTab,
    /// Toggle between tabs without leaving the current screen.
    SwitchTab(Tab),
    /// Edit the query text without running it.
    EditQuery(String),
    /// Set the query and filter immediately.
    Search(String),
    /// Run the current query and show the results.
    Submit,
    /// Search for a popular tag.
    PickTag(String),
    Open(u32),
    Back,
    ToggleFavorite(u32),
    RosterLoaded(Result<Vec<Profile>, RosterError>),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SaveFavorites(FavoriteSet),
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub state: AppState,
    pub effect: Option<Effect>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    screen: Screen,
    tab: Tab,
    query: String,
    roster: Arc<[Profile]>,
    results: Vec<Profile>,
    selected: Option<u32>,
    favorites: FavoriteSet,
    loading: bool,
}

impl AppState {
    /// Initial snapshot: home screen, empty roster, roster load pending.
    pub fn new(favorites: FavoriteSet) -> Self {
        Self {
            screen: Screen::Home,
            tab: Tab::Search,
            query: String::new(),
            roster: Arc::from(Vec::new()),
            results: Vec::new(),
            selected: None,
            favorites,
            loading: true,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn roster(&self) -> &[Profile] {
        &self.roster
    }

    /// Current search results.
    pub fn results(&self) -> &[Profile] {
        &self.results
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(id)
    }

    pub fn selected(&self) -> Option<&Profile> {
        let id = self.selected?;
        self.roster.iter().find(|p| p.id == id)
    }

    /// Favorited profiles in roster order. Ids missing from the roster are
    /// skipped.
    pub fn favorite_profiles(&self) -> Vec<&Profile> {
        self.roster
            .iter()
            .filter(|p| self.favorites.contains(p.id))
            .collect()
    }

    pub fn transition(&self, action: Action) -> Transition {
        let mut next = self.clone();
        let mut effect = None;

        match action {
            Action::GoHome => next.screen = Screen::Home,
            Action::ShowSearchTab => {
                next.screen = Screen::Search;
                next.tab = Tab::Search;
            }
            Action::ShowFavoritesTab => {
                next.screen = Screen::Search;
                next.tab = Tab::Favorites;
            }
            Action::SwitchTab(tab) => next.tab = tab,
            Action::EditQuery(query) => next.query = query,
            Action::Search(query) => {
                next.results = filter_profiles(&next.roster, &query);
                next.query = query;
            }
            Action::Submit => {
                next.results = filter_profiles(&next.roster, &next.query);
                next.screen = Screen::Search;
            }
            Action::PickTag(tag) => {
                next.results = filter_profiles(&next.roster, &tag);
                next.query = tag;
                next.screen = Screen::Search;
            }
            Action::Open(id) => {
                if next.roster.iter().any(|p| p.id == id) {
                    next.selected = Some(id);
                    next.screen = Screen::Detail;
                }
            }
            Action::Back => {
                next.screen = match next.screen {
                    Screen::Detail => Screen::Search,
                    _ => Screen::Home,
                };
            }
            Action::ToggleFavorite(id) => {
                next.favorites = next.favorites.toggle(id);
                effect = Some(Effect::SaveFavorites(next.favorites.clone()));
            }
            Action::RosterLoaded(Ok(profiles)) => {
                info!(count = profiles.len(), "roster loaded");
                next.roster = Arc::from(profiles);
                next.results = filter_profiles(&next.roster, &next.query);
                next.loading = false;
            }
            Action::RosterLoaded(Err(e)) => {
                error!("roster load failed: {}", e);
                next.loading = false;
            }
        }

        Transition {
            state: next,
            effect,
        }
    }
}
