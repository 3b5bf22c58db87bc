//! Personalized recommendations: scanning everyone else's playlists for
//! movies matching the user's own top genres.
//!
//! ## Algorithm
//! 1. Build the user's taste profile and target its top 3 genres
//! 2. Scan every other user's playlists; keep unseen movies hitting a
//!    target genre, first occurrence per movie id wins
//! 3. Score each candidate: rating base (5 when missing) plus up to 3
//!    bonus points per profile genre the movie carries
//! 4. Rank descending by score (stable, so ties keep first-encounter
//!    order) and cap at 8

use crate::profile::{TasteProfile, build_profile};
use catalog::{GenreId, Movie, MovieId, User, genres};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Maximum number of personalized recommendations returned
pub const PERSONAL_RECS_LIMIT: usize = 8;

/// How many of the user's top genres the scan targets
const TOP_GENRE_COUNT: usize = 3;

/// Rating base for movies the catalog has no votes for
const RATING_BASE_FALLBACK: f32 = 5.0;

/// Maximum bonus points one matching genre can contribute
const GENRE_BONUS_POINTS: f64 = 3.0;

/// A recommended movie annotated with its composite score.
///
/// Serializes flat, with the score inline next to the movie fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(rename = "recommendationScore")]
    pub score: f64,
}

/// Composite score for one candidate against a taste profile.
///
/// Rating-derived base (missing or zero rating defaults to 5), plus
/// `share / 100 * 3` for each of the movie's genres present in the
/// profile — so a movie matching k profile genres gains at most 3k bonus
/// points.
pub fn recommendation_score(movie: &Movie, profile: &TasteProfile) -> f64 {
    let mut score = f64::from(movie.rating_or(RATING_BASE_FALLBACK));
    for genre_id in movie.resolved_genre_ids() {
        if let Some(name) = genres::name_of(genre_id) {
            score += f64::from(profile.share(name)) / 100.0 * GENRE_BONUS_POINTS;
        }
    }
    score
}

/// Recommend movies for a user from everyone else's playlists.
///
/// A user whose profile is empty (no genre-bearing movies anywhere) gets no
/// recommendations. Output is capped at [`PERSONAL_RECS_LIMIT`].
#[instrument(skip(user, all_users), fields(user_id = %user.id, pool = all_users.len()))]
pub fn recommend_for_user(user: &User, all_users: &[User]) -> Vec<Recommendation> {
    let profile = build_profile(user);
    let target_ids: Vec<GenreId> = profile
        .top_genres(TOP_GENRE_COUNT)
        .into_iter()
        .filter_map(genres::id_of)
        .collect();

    if target_ids.is_empty() {
        debug!("empty top-genre set, nothing to recommend");
        return Vec::new();
    }

    let seen = user.seen_movie_ids();

    let mut candidates: Vec<Recommendation> = Vec::new();
    let mut picked_ids: HashSet<MovieId> = HashSet::new();
    for other in all_users {
        if other.id == user.id {
            continue;
        }
        for playlist in &other.playlists {
            for entry in &playlist.movies {
                let movie = &entry.movie;
                if seen.contains(&movie.id) {
                    continue;
                }
                let matches = movie
                    .resolved_genre_ids()
                    .iter()
                    .any(|id| target_ids.contains(id));
                if matches && picked_ids.insert(movie.id) {
                    candidates.push(Recommendation {
                        score: recommendation_score(movie, &profile),
                        movie: movie.clone(),
                    });
                }
            }
        }
    }

    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());
    candidates.truncate(PERSONAL_RECS_LIMIT);

    debug!(count = candidates.len(), "personalized recommendations ready");
    candidates
}
