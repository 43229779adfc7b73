//! Favorite set and its durable storage.
//!
//! The set is keyed by profile id and lives independently of the roster:
//! ids that no longer exist after a reload are kept, not reconciled.
//! Storage is read once at startup and rewritten in full after every change.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Bookmarked profile ids. Serialized as a plain JSON array of integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet(BTreeSet<u32>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new set with `id` removed if present, added otherwise.
    pub fn toggle(&self, id: u32) -> FavoriteSet {
        let mut next = self.0.clone();
        if !next.remove(&id) {
            next.insert(id);
        }
        FavoriteSet(next)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u32> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        FavoriteSet(iter.into_iter().collect())
    }
}

/// Durable home of the favorite set.
pub trait FavoriteStore {
    /// Read the persisted set. An absent store is the empty set.
    fn load(&self) -> Result<FavoriteSet>;

    /// Replace the persisted set with `set`.
    fn save(&self, set: &FavoriteSet) -> Result<()>;
}

/// Favorites kept in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoriteStore for JsonFileStore {
    fn load(&self) -> Result<FavoriteSet> {
        if !self.path.exists() {
            return Ok(FavoriteSet::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read favorites: {}", self.path.display()))?;
        let set: FavoriteSet = serde_json::from_str(&content)
            .with_context(|| format!("Favorites file is not a JSON id list: {}", self.path.display()))?;
        Ok(set)
    }

    fn save(&self, set: &FavoriteSet) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create favorites directory: {}", parent.display())
                })?;
            }
        }

        let json = serde_json::to_string(set)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .with_context(|| format!("Failed to write favorites: {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace favorites: {}", self.path.display()))?;

        tracing::debug!(count = set.len(), path = %self.path.display(), "favorites saved");
        Ok(())
    }
}

/// Load favorites, falling back to the empty set when the store is unreadable.
pub fn load_or_empty(store: &dyn FavoriteStore) -> FavoriteSet {
    match store.load() {
        Ok(set) => set,
        Err(e) => {
            tracing::warn!("ignoring unreadable favorites: {:#}", e);
            FavoriteSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_toggle_adds_then_removes() {
        let empty = FavoriteSet::new();
        let one = empty.toggle(3);
        assert!(one.contains(3));
        assert!(!empty.contains(3));
        assert_eq!(one.toggle(3), empty);
    }

    #[test]
    fn test_double_toggle_restores_set() {
        let set: FavoriteSet = [1, 4, 9].into_iter().collect();
        for id in [1, 2, 9, 100] {
            assert_eq!(set.toggle(id).toggle(id), set);
        }
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let set: FavoriteSet = [4, 1].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1,4]");
        let back: FavoriteSet = serde_json::from_str("[2,2,7]").unwrap();
        assert_eq!(back.iter().collect::<Vec<_>>(), vec![2, 7]);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("favorites.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("nested/dir/favorites.json"));
        let set: FavoriteSet = [2, 3].into_iter().collect();
        store.save(&set).unwrap();
        assert_eq!(store.load().unwrap(), set);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "[2,3]");
    }

    #[test]
    fn test_save_overwrites_whole_set() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("favorites.json"));
        store.save(&[1, 2, 3].into_iter().collect()).unwrap();
        store.save(&[5].into_iter().collect()).unwrap();
        assert_eq!(store.load().unwrap().iter().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("favorites.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(store.load().is_err());
        assert!(load_or_empty(&store).is_empty());
    }
}
