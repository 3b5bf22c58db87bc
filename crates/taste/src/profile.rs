//! Taste profiles: turning a user's playlists into a genre-interest
//! distribution.
//!
//! ## Algorithm
//! 1. Walk every movie in every playlist the user owns
//! 2. Resolve each movie's genre ids and map them to catalog names;
//!    unknown genres and genre-less movies contribute nothing
//! 3. Weight each contribution by the playlist it was found in
//!    (see [`weight_for`])
//! 4. Convert counts to integer percentages of the weighted total
//!
//! Percentages are rounded independently per genre and are NOT renormalized,
//! so a profile's shares can sum to slightly more or less than 100. The
//! compatibility scorers consume these unnormalized values as-is.

use catalog::{LIKED, User, WATCHED, genres, is_system_name};
use serde::Serialize;
use std::collections::BTreeMap;

/// A user's genre-interest distribution.
///
/// Maps genre name to an integer percentage share in `[0, 100]`. Only genres
/// the user has actually accumulated weight in appear; a user with no
/// genre-bearing movies has an empty profile. Backed by a `BTreeMap` so
/// iteration order is deterministic, which the top-genre tie-breaks rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TasteProfile {
    shares: BTreeMap<String, u32>,
}

impl TasteProfile {
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// The percentage share for a genre, 0 when the genre is absent
    pub fn share(&self, genre: &str) -> u32 {
        self.shares.get(genre).copied().unwrap_or(0)
    }

    /// Iterate over `(genre, share)` pairs in profile order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.shares.iter().map(|(genre, &share)| (genre.as_str(), share))
    }

    /// Genre names in profile order
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.shares.keys().map(String::as_str)
    }

    /// The `n` genres with the highest shares.
    ///
    /// Descending by share; ties keep profile iteration order (the sort is
    /// stable).
    pub fn top_genres(&self, n: usize) -> Vec<&str> {
        let mut entries: Vec<(&str, u32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries.into_iter().map(|(genre, _)| genre).collect()
    }

    #[cfg(test)]
    pub(crate) fn from_shares(shares: &[(&str, u32)]) -> Self {
        Self {
            shares: shares
                .iter()
                .map(|&(genre, share)| (genre.to_string(), share))
                .collect(),
        }
    }
}

/// The weighting multiplier for one movie occurrence in one playlist.
///
/// - 1 for an ordinary playlist
/// - 2 for a movie processed from "Watched" or "Liked"
/// - 3 when the movie additionally sits in the *other* system playlist
///
/// The multiplier applies to every genre the movie carries and to the
/// running total alike, so a triple-counted movie shifts the whole
/// distribution toward its genres.
pub fn weight_for(collection_name: &str, in_other_system_collection: bool) -> u32 {
    if !is_system_name(collection_name) {
        1
    } else if in_other_system_collection {
        3
    } else {
        2
    }
}

/// Build a user's taste profile from their playlists.
///
/// A user with no playlists, or none containing movies with resolvable
/// catalog genres, gets the empty profile.
pub fn build_profile(user: &User) -> TasteProfile {
    let mut counts: BTreeMap<&'static str, u32> = BTreeMap::new();
    let mut total: u32 = 0;

    for playlist in &user.playlists {
        for entry in &playlist.movies {
            let movie = &entry.movie;

            let in_other_system = if playlist.is_watched() {
                user.has_in_playlist(LIKED, movie.id)
            } else if playlist.is_liked() {
                user.has_in_playlist(WATCHED, movie.id)
            } else {
                false
            };
            let weight = weight_for(&playlist.name, in_other_system);

            for genre_id in movie.resolved_genre_ids() {
                if let Some(name) = genres::name_of(genre_id) {
                    *counts.entry(name).or_insert(0) += weight;
                    total += weight;
                }
            }
        }
    }

    if total == 0 {
        return TasteProfile::default();
    }

    let shares = counts
        .into_iter()
        .map(|(genre, count)| {
            let share = (f64::from(count) * 100.0 / f64::from(total)).round() as u32;
            (genre.to_string(), share)
        })
        .collect();

    TasteProfile { shares }
}
