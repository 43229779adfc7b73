//! Extension trait for roster sources.
//!
//! Every place a roster can come from (the embedded list, a local CSV file,
//! a remote CSV feed) implements [`RosterSource`]. The CLI picks one from
//! the config via [`crate::sources::source_from_config`]; library users can
//! plug in their own.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use mentor_roster::error::RosterError;
//! use mentor_roster::models::Profile;
//! use mentor_roster::traits::RosterSource;
//!
//! pub struct EmptySource;
//!
//! #[async_trait]
//! impl RosterSource for EmptySource {
//!     fn name(&self) -> &str { "empty" }
//!     fn describe(&self) -> String { "always empty".to_string() }
//!
//!     async fn load(&self) -> Result<Vec<Profile>, RosterError> {
//!         Ok(vec![])
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::error::RosterError;
use crate::models::Profile;

/// A place the roster is loaded from.
///
/// `load` is the only point where the application waits on the outside
/// world. It is called once per session and is never retried.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Source kind (`"builtin"`, `"file"`, `"http"`, ...).
    fn name(&self) -> &str;

    /// Human-readable location, shown by `mentors sources`.
    fn describe(&self) -> String;

    /// Whether the source looks usable without loading it.
    fn is_healthy(&self) -> bool {
        true
    }

    /// Produce the full roster, ids assigned `1..=N` in source order.
    async fn load(&self) -> Result<Vec<Profile>, RosterError>;
}
