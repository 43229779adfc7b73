//! Free-text roster search.
//!
//! Case-insensitive substring match over name, organization, title and
//! topic tags. Results keep the relative order of the input; there is no
//! ranking.

use crate::models::Profile;

/// Quick-pick keywords offered on the home screen.
pub const POPULAR_TAGS: &[&str] = &["AI", "デザイン", "環境", "医療", "プログラミング", "ビジネス"];

/// Return the profiles matching `query`.
///
/// A blank query returns the whole input unchanged. The input is never
/// modified; matches are cloned into a new vector.
pub fn filter_profiles(profiles: &[Profile], query: &str) -> Vec<Profile> {
    if query.trim().is_empty() {
        return profiles.to_vec();
    }

    let needle = query.to_lowercase();
    profiles
        .iter()
        .filter(|p| matches(p, &needle))
        .cloned()
        .collect()
}

fn matches(profile: &Profile, needle: &str) -> bool {
    profile.name.to_lowercase().contains(needle)
        || profile.organization.to_lowercase().contains(needle)
        || profile.title.to_lowercase().contains(needle)
        || profile
            .fields
            .iter()
            .any(|f| f.to_lowercase().contains(needle))
}
