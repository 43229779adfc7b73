//! Interactive browsing session.
//!
//! Reads one command per line, turns it into an [`Action`], advances the
//! state and prints the resulting screen. The session owns the favorite
//! store and performs the save requested by each favorite toggle.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::config::Config;
use crate::favorites::{load_or_empty, FavoriteStore, JsonFileStore};
use crate::render;
use crate::sources::source_from_config;
use crate::state::{Action, AppState, Effect, Tab};

const HELP: &str = "\
commands:
  home                 go to the home screen
  type <query>         edit the query without searching
  go                   search for the current query
  search [query]       search immediately
  tag <tag>            search for a popular tag
  tab search|favorites switch tabs
  favorites            show favorites
  open <id>            show a profile
  back                 previous screen
  fav <id>             toggle a favorite
  help                 this text
  quit                 leave";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Act(ActionSpec),
    Help,
    Quit,
}

/// Actions reachable from the prompt. Kept separate from [`Action`] so
/// roster loads cannot be typed in.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionSpec {
    Home,
    Type(String),
    Go,
    Search(String),
    Tag(String),
    Tab(Tab),
    Favorites,
    Open(u32),
    Back,
    Fav(u32),
}

impl From<ActionSpec> for Action {
    fn from(spec: ActionSpec) -> Self {
        match spec {
            ActionSpec::Home => Action::GoHome,
            ActionSpec::Type(q) => Action::EditQuery(q),
            ActionSpec::Go => Action::Submit,
            ActionSpec::Search(q) => Action::Search(q),
            ActionSpec::Tag(t) => Action::PickTag(t),
            ActionSpec::Tab(tab) => Action::SwitchTab(tab),
            ActionSpec::Favorites => Action::ShowFavoritesTab,
            ActionSpec::Open(id) => Action::Open(id),
            ActionSpec::Back => Action::Back,
            ActionSpec::Fav(id) => Action::ToggleFavorite(id),
        }
    }
}

fn parse_id(arg: &str) -> Result<u32, String> {
    arg.trim()
        .parse::<u32>()
        .map_err(|_| format!("not a mentor id: '{}'", arg.trim()))
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let spec = match word {
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "help" | "?" => return Ok(Command::Help),
        "home" => ActionSpec::Home,
        "type" => ActionSpec::Type(rest.to_string()),
        "go" => ActionSpec::Go,
        "search" => ActionSpec::Search(rest.to_string()),
        "tag" if !rest.is_empty() => ActionSpec::Tag(rest.to_string()),
        "tab" => match rest {
            "search" => ActionSpec::Tab(Tab::Search),
            "favorites" => ActionSpec::Tab(Tab::Favorites),
            _ => return Err("usage: tab search|favorites".to_string()),
        },
        "favorites" => ActionSpec::Favorites,
        "open" => ActionSpec::Open(parse_id(rest)?),
        "back" => ActionSpec::Back,
        "fav" => ActionSpec::Fav(parse_id(rest)?),
        "" => return Err("empty command".to_string()),
        other => return Err(format!("unknown command: '{}' (try `help`)", other)),
    };
    Ok(Command::Act(spec))
}

/// Browser state plus the store its favorites persist to.
pub struct Session<S: FavoriteStore> {
    state: AppState,
    store: S,
}

impl<S: FavoriteStore> Session<S> {
    /// Start a session with favorites read from `store`.
    pub fn new(store: S) -> Self {
        let favorites = load_or_empty(&store);
        Self {
            state: AppState::new(favorites),
            store,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply one action and carry out its effect.
    pub fn dispatch(&mut self, action: Action) {
        let transition = self.state.transition(action);
        self.state = transition.state;
        if let Some(Effect::SaveFavorites(set)) = transition.effect {
            if let Err(e) = self.store.save(&set) {
                tracing::error!("failed to save favorites: {:#}", e);
            }
        }
    }

    /// Command loop. Returns when input ends or `quit` is entered.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        write!(output, "{}", render::screen(&self.state))?;
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(output, "{}", HELP)?,
                Ok(Command::Act(spec)) => {
                    self.dispatch(spec.into());
                    write!(output, "{}", render::screen(&self.state))?;
                }
                Err(msg) => writeln!(output, "{}", msg)?,
            }
            write!(output, "> ")?;
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }
}

/// `mentors browse`: load favorites and roster, then read commands from stdin.
pub async fn run_browse(config: &Config) -> Result<()> {
    let source = source_from_config(config)?;
    let mut session = Session::new(JsonFileStore::new(&config.favorites.path));

    let loaded = source.load().await;
    session.dispatch(Action::RosterLoaded(loaded));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector_builtin::builtin_profiles;
    use crate::favorites::FavoriteSet;
    use crate::state::Screen;
    use std::cell::RefCell;
    use std::io::Cursor;

    #[derive(Default)]
    struct MemoryStore {
        saved: RefCell<Vec<FavoriteSet>>,
        initial: FavoriteSet,
    }

    impl FavoriteStore for &MemoryStore {
        fn load(&self) -> Result<FavoriteSet> {
            Ok(self.initial.clone())
        }

        fn save(&self, set: &FavoriteSet) -> Result<()> {
            self.saved.borrow_mut().push(set.clone());
            Ok(())
        }
    }

    fn loaded_session(store: &MemoryStore) -> Session<&MemoryStore> {
        let mut session = Session::new(store);
        session.dispatch(Action::RosterLoaded(Ok(builtin_profiles())));
        session
    }

    fn run(session: &mut Session<&MemoryStore>, script: &str) -> String {
        let mut out = Vec::new();
        session.run(Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(
            parse_command("  search  AI ethics "),
            Ok(Command::Act(ActionSpec::Search("AI ethics".into())))
        );
        assert_eq!(
            parse_command("search"),
            Ok(Command::Act(ActionSpec::Search(String::new())))
        );
        assert_eq!(parse_command("open 3"), Ok(Command::Act(ActionSpec::Open(3))));
        assert_eq!(
            parse_command("tab favorites"),
            Ok(Command::Act(ActionSpec::Tab(Tab::Favorites)))
        );
        assert!(parse_command("open three").is_err());
        assert!(parse_command("tab elsewhere").is_err());
        assert!(parse_command("tag").is_err());
        assert!(parse_command("dance").is_err());
        assert!(parse_command("").is_err());
    }

    #[test]
    fn test_toggle_saves_after_each_change() {
        let store = MemoryStore::default();
        let mut session = loaded_session(&store);
        session.dispatch(Action::ToggleFavorite(2));
        session.dispatch(Action::ToggleFavorite(4));
        session.dispatch(Action::ToggleFavorite(2));

        let saved = store.saved.borrow();
        assert_eq!(saved.len(), 3);
        assert_eq!(saved[2], [4].into_iter().collect::<FavoriteSet>());
    }

    #[test]
    fn test_navigation_does_not_save() {
        let store = MemoryStore::default();
        let mut session = loaded_session(&store);
        session.dispatch(Action::Search("AI".into()));
        session.dispatch(Action::Open(1));
        session.dispatch(Action::Back);
        assert!(store.saved.borrow().is_empty());
    }

    #[test]
    fn test_session_starts_with_stored_favorites() {
        let store = MemoryStore {
            initial: [3].into_iter().collect(),
            ..Default::default()
        };
        let session = loaded_session(&store);
        assert!(session.state().is_favorite(3));
    }

    #[test]
    fn test_scripted_run() {
        let store = MemoryStore::default();
        let mut session = loaded_session(&store);
        let out = run(&mut session, "tag デザイン\nopen 3\nfav 3\nback\nfavorites\nquit\n");

        assert!(out.contains("1 mentor found"));
        assert!(out.contains("kenta.suzuki@creative-design.com"));
        assert!(out.contains("[3] 鈴木 健太 ♥"));
        assert_eq!(session.state().screen(), Screen::Search);
        assert_eq!(session.state().tab(), Tab::Favorites);
        assert_eq!(store.saved.borrow().len(), 1);
    }

    #[test]
    fn test_unknown_command_keeps_state() {
        let store = MemoryStore::default();
        let mut session = loaded_session(&store);
        let out = run(&mut session, "dance\n");
        assert!(out.contains("unknown command"));
        assert_eq!(session.state().screen(), Screen::Home);
    }

    #[test]
    fn test_type_then_go() {
        let store = MemoryStore::default();
        let mut session = loaded_session(&store);
        run(&mut session, "type 研究\ngo\n");
        assert_eq!(session.state().screen(), Screen::Search);
        assert_eq!(session.state().results().len(), 2);
    }
}
