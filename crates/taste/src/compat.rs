//! Compatibility scoring between two users.
//!
//! Two sub-scores feed a blended percentage:
//!
//! - **Movie overlap**: how much of the pair's combined library both of
//!   them have (Jaccard over the two seen-movie sets)
//! - **Genre match**: how similar the two taste profiles are (shared
//!   interest over possible interest, genre by genre)
//!
//! All three entry points are pure functions of the two user records:
//! deterministic, side-effect free, and symmetric in their arguments.

use crate::profile::{TasteProfile, build_profile};
use catalog::User;
use std::collections::BTreeSet;

/// Percentage of the pair's combined movies that both users have.
///
/// The sets cover everything either user has liked or put in any playlist.
/// An empty union scores 0.
pub fn movie_overlap_score(a: &User, b: &User) -> u32 {
    let mine = a.seen_movie_ids();
    let theirs = b.seen_movie_ids();

    let union = mine.union(&theirs).count();
    if union == 0 {
        return 0;
    }
    let shared = mine.intersection(&theirs).count();

    (shared as f64 * 100.0 / union as f64).round() as u32
}

/// Percentage similarity of the two users' taste profiles
pub fn genre_match_score(a: &User, b: &User) -> u32 {
    profile_match_score(&build_profile(a), &build_profile(b))
}

/// Genre-match score over two already-built profiles.
///
/// For every genre either profile mentions, the smaller share is interest
/// the users share and the larger share is the most they could share;
/// the score is the ratio of those sums. Two empty profiles score 0.
pub fn profile_match_score(mine: &TasteProfile, theirs: &TasteProfile) -> u32 {
    let genres: BTreeSet<&str> = mine.genres().chain(theirs.genres()).collect();

    let mut overlap: u32 = 0;
    let mut possible: u32 = 0;
    for genre in genres {
        let my_share = mine.share(genre);
        let their_share = theirs.share(genre);
        overlap += my_share.min(their_share);
        possible += my_share.max(their_share);
    }

    if possible == 0 {
        return 0;
    }
    (f64::from(overlap) * 100.0 / f64::from(possible)).round() as u32
}

/// The blended compatibility percentage: half movie overlap, half genre match
pub fn blend_compatibility(a: &User, b: &User) -> u32 {
    let movie = f64::from(movie_overlap_score(a, b));
    let genre = f64::from(genre_match_score(a, b));
    (movie * 0.5 + genre * 0.5).round() as u32
}
