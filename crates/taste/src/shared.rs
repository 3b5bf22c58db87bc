//! Shared-taste recommendations: movies to watch together with a friend.
//!
//! ## Algorithm
//! 1. Build both taste profiles and find the common-strong genres
//!    (both shares >= 10%)
//! 2. No common ground? Target the friend's top 3 genres instead
//! 3. Scan the friend's playlists for unseen movies hitting a target genre
//!    (an empty target set lets every unseen movie through), deduped by id
//!    in first-seen order
//! 4. Still nothing? Fall back to the friend's best-rated unseen movies
//! 5. Sort descending by rating and cap at 6
//!
//! The top-rated fallback only triggers on an empty candidate list — which
//! tier produced the target set does not matter.

use crate::profile::build_profile;
use catalog::{GenreId, Movie, MovieId, User, genres};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Maximum number of shared-taste recommendations returned
pub const SHARED_RECS_LIMIT: usize = 6;

/// Minimum profile share for a genre to count as a strong interest
pub const STRONG_INTEREST_PCT: u32 = 10;

/// Recommend movies from a friend's playlists matching the pair's shared
/// taste.
///
/// Never returns a movie already anywhere in the subject user's own
/// playlists. Output is sorted descending by rating (missing rating sorts
/// as 0) and capped at [`SHARED_RECS_LIMIT`].
#[instrument(skip(user, friend), fields(user_id = %user.id, friend_id = %friend.id))]
pub fn recommend_from_friend(user: &User, friend: &User) -> Vec<Movie> {
    let mine = build_profile(user);
    let theirs = build_profile(friend);

    let mut target_ids: Vec<GenreId> = mine
        .iter()
        .filter(|&(genre, share)| {
            share >= STRONG_INTEREST_PCT && theirs.share(genre) >= STRONG_INTEREST_PCT
        })
        .filter_map(|(genre, _)| genres::id_of(genre))
        .collect();

    if target_ids.is_empty() {
        target_ids = theirs
            .top_genres(3)
            .into_iter()
            .filter_map(genres::id_of)
            .collect();
        debug!(
            targets = target_ids.len(),
            "no common strong genres, using friend's top genres"
        );
    }

    let seen = user.seen_movie_ids();

    let mut picked: Vec<Movie> = Vec::new();
    let mut picked_ids: HashSet<MovieId> = HashSet::new();
    for playlist in &friend.playlists {
        for entry in &playlist.movies {
            let movie = &entry.movie;
            if seen.contains(&movie.id) {
                continue;
            }
            let matches = target_ids.is_empty()
                || movie
                    .resolved_genre_ids()
                    .iter()
                    .any(|id| target_ids.contains(id));
            if matches && picked_ids.insert(movie.id) {
                picked.push(movie.clone());
            }
        }
    }

    if picked.is_empty() {
        // Nothing hit the target genres; hand over whatever of the friend's
        // library the user hasn't seen and let the rating sort pick
        debug!("no genre matches, falling back to friend's top rated");
        picked = friend
            .playlists
            .iter()
            .flat_map(|playlist| playlist.movies.iter())
            .map(|entry| &entry.movie)
            .filter(|movie| !seen.contains(&movie.id))
            .cloned()
            .collect();
    }

    picked.sort_by(|a, b| b.rating_or(0.0).partial_cmp(&a.rating_or(0.0)).unwrap());
    picked.truncate(SHARED_RECS_LIMIT);

    debug!(count = picked.len(), "shared-taste recommendations ready");
    picked
}
