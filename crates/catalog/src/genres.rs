//! The genre taxonomy: a fixed bidirectional id <-> name table.
//!
//! These are the 18 standard feature-film genres, keyed by the numeric ids
//! the external catalog uses. The table never changes at runtime. Lookups
//! that miss return `None`; callers treat an unmapped genre as silently
//! excluded from scoring, not as an error.

use crate::types::GenreId;

/// Every known genre as an `(id, name)` pair, in taxonomy order
pub const GENRES: &[(GenreId, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

/// Display name for a genre id
pub fn name_of(genre_id: GenreId) -> Option<&'static str> {
    match genre_id {
        28 => Some("Action"),
        12 => Some("Adventure"),
        16 => Some("Animation"),
        35 => Some("Comedy"),
        80 => Some("Crime"),
        99 => Some("Documentary"),
        18 => Some("Drama"),
        10751 => Some("Family"),
        14 => Some("Fantasy"),
        36 => Some("History"),
        27 => Some("Horror"),
        10402 => Some("Music"),
        9648 => Some("Mystery"),
        10749 => Some("Romance"),
        878 => Some("Science Fiction"),
        53 => Some("Thriller"),
        10752 => Some("War"),
        37 => Some("Western"),
        _ => None,
    }
}

/// Genre id for a display name
pub fn id_of(name: &str) -> Option<GenreId> {
    match name {
        "Action" => Some(28),
        "Adventure" => Some(12),
        "Animation" => Some(16),
        "Comedy" => Some(35),
        "Crime" => Some(80),
        "Documentary" => Some(99),
        "Drama" => Some(18),
        "Family" => Some(10751),
        "Fantasy" => Some(14),
        "History" => Some(36),
        "Horror" => Some(27),
        "Music" => Some(10402),
        "Mystery" => Some(9648),
        "Romance" => Some(10749),
        "Science Fiction" => Some(878),
        "Thriller" => Some(53),
        "War" => Some(10752),
        "Western" => Some(37),
        _ => None,
    }
}
