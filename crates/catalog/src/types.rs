//! Core domain types for the movie library.
//!
//! This module defines the records the rest of the system computes over:
//! movies as delivered by the catalog source, the playlists users organize
//! them into, the users themselves, and the friendship edges between them.
//! The scoring crates only ever read these records; mutation happens through
//! the store.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user ids with movie ids

/// Unique identifier for a movie in the external catalog
pub type MovieId = u32;

/// Unique identifier for a genre in the catalog taxonomy
pub type GenreId = u32;

/// Unique identifier for a user (minted by the application as a string)
pub type UserId = String;

/// Unique identifier for a playlist
pub type PlaylistId = String;

// =============================================================================
// System playlist names
// =============================================================================

/// Reserved playlist holding everything the user has watched
pub const WATCHED: &str = "Watched";

/// Reserved playlist holding everything the user has liked
pub const LIKED: &str = "Liked";

/// Whether a playlist name is one of the reserved system playlists
pub fn is_system_name(name: &str) -> bool {
    name == WATCHED || name == LIKED
}

// =============================================================================
// Movie-related Types
// =============================================================================

/// A movie as delivered by the catalog source.
///
/// Genre information arrives in one of two shapes depending on which catalog
/// endpoint produced the record: a flat `genre_ids` list, or embedded
/// `genres` tags carrying both id and name. Either, both, or neither may be
/// present; [`Movie::resolved_genre_ids`] is the one place that difference
/// is normalized away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Flat list of genre ids (search results carry this shape)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<GenreId>>,
    /// Embedded genre tags (detail records carry this shape)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<GenreTag>>,
    /// Average rating on a 0-10 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
}

/// Genre tag embedded in a detail-shaped movie record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreTag {
    pub id: GenreId,
    pub name: String,
}

impl Movie {
    /// Resolve this movie's genre ids, whatever shape the record arrived in.
    ///
    /// The flat `genre_ids` list wins when present (even when empty);
    /// otherwise the embedded tags are mapped to their ids. A movie with
    /// neither contributes nothing to scoring.
    pub fn resolved_genre_ids(&self) -> Vec<GenreId> {
        if let Some(ids) = &self.genre_ids {
            return ids.clone();
        }
        self.genres
            .as_ref()
            .map(|tags| tags.iter().map(|tag| tag.id).collect())
            .unwrap_or_default()
    }

    /// The movie's rating, treating an absent or zero rating as missing.
    ///
    /// A `vote_average` of 0.0 means the catalog has no votes for the movie,
    /// so it falls back to `default` the same way a missing field does.
    pub fn rating_or(&self, default: f32) -> f32 {
        match self.vote_average {
            Some(rating) if rating > 0.0 => rating,
            _ => default,
        }
    }
}

// =============================================================================
// Playlist-related Types
// =============================================================================

/// A movie inside a playlist, stamped with when it was added.
///
/// Serialized flat: the timestamp sits inline next to the movie fields,
/// which is the shape playlist snapshots have always used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(rename = "addedAt", default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
}

impl PlaylistEntry {
    pub fn new(movie: Movie) -> Self {
        Self {
            movie,
            added_at: None,
        }
    }
}

/// An ordered collection of movies owned by exactly one user.
///
/// Playlists named [`WATCHED`] or [`LIKED`] are system playlists: they are
/// created lazily on first use and carry extra weight in taste profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub movies: Vec<PlaylistEntry>,
}

impl Playlist {
    pub fn is_watched(&self) -> bool {
        self.name == WATCHED
    }

    pub fn is_liked(&self) -> bool {
        self.name == LIKED
    }

    /// Whether the playlist contains the given movie
    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.movies.iter().any(|entry| entry.movie.id == movie_id)
    }
}

// =============================================================================
// User-related Types
// =============================================================================

/// A user and everything they have organized.
///
/// Scoring only ever looks at `id` and `playlists`; the profile fields ride
/// along for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
    /// Genres the user explicitly declared as favorites
    #[serde(default)]
    pub favorite_genres: Vec<GenreId>,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

impl User {
    /// Every movie id anywhere in this user's playlists.
    ///
    /// This is the "already seen" set recommenders exclude from their output.
    pub fn seen_movie_ids(&self) -> HashSet<MovieId> {
        self.playlists
            .iter()
            .flat_map(|playlist| playlist.movies.iter().map(|entry| entry.movie.id))
            .collect()
    }

    /// Find a playlist by name
    pub fn playlist_named(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|playlist| playlist.name == name)
    }

    /// Whether the named playlist exists and contains the movie
    pub fn has_in_playlist(&self, name: &str, movie_id: MovieId) -> bool {
        self.playlist_named(name)
            .map(|playlist| playlist.contains(movie_id))
            .unwrap_or(false)
    }
}

// =============================================================================
// Friendship Types
// =============================================================================

/// Lifecycle state of a friendship edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A connection between two users.
///
/// The edge is directed for lifecycle purposes (only the recipient may
/// accept) but undirected once accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friendship {
    pub id: String,
    pub requester_id: UserId,
    pub recipient_id: UserId,
    pub status: FriendStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Friendship {
    /// Whether this edge connects the two given users, in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.requester_id == a && self.recipient_id == b)
            || (self.requester_id == b && self.recipient_id == a)
    }

    /// The other endpoint of the edge, if `user_id` is one of them
    pub fn other_end(&self, user_id: &str) -> Option<&UserId> {
        if self.requester_id == user_id {
            Some(&self.recipient_id)
        } else if self.recipient_id == user_id {
            Some(&self.requester_id)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_with_ids(id: MovieId, genre_ids: Vec<GenreId>) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            genre_ids: Some(genre_ids),
            genres: None,
            vote_average: None,
            release_date: None,
            poster_path: None,
            backdrop_path: None,
        }
    }

    #[test]
    fn resolved_genre_ids_prefers_flat_list() {
        let movie = Movie {
            genres: Some(vec![GenreTag {
                id: 18,
                name: "Drama".to_string(),
            }]),
            ..movie_with_ids(1, vec![28, 12])
        };

        assert_eq!(movie.resolved_genre_ids(), vec![28, 12]);
    }

    #[test]
    fn resolved_genre_ids_falls_back_to_tags() {
        let movie = Movie {
            genre_ids: None,
            genres: Some(vec![
                GenreTag {
                    id: 35,
                    name: "Comedy".to_string(),
                },
                GenreTag {
                    id: 18,
                    name: "Drama".to_string(),
                },
            ]),
            ..movie_with_ids(1, vec![])
        };

        assert_eq!(movie.resolved_genre_ids(), vec![35, 18]);
    }

    #[test]
    fn resolved_genre_ids_empty_when_absent() {
        let movie = Movie {
            genre_ids: None,
            ..movie_with_ids(1, vec![])
        };

        assert!(movie.resolved_genre_ids().is_empty());
    }

    #[test]
    fn rating_treats_zero_as_missing() {
        let mut movie = movie_with_ids(1, vec![]);
        movie.vote_average = Some(0.0);
        assert_eq!(movie.rating_or(5.0), 5.0);

        movie.vote_average = Some(7.2);
        assert_eq!(movie.rating_or(5.0), 7.2);

        movie.vote_average = None;
        assert_eq!(movie.rating_or(0.0), 0.0);
    }

    #[test]
    fn seen_movie_ids_spans_all_playlists() {
        let user = User {
            id: "u1".to_string(),
            username: "ana".to_string(),
            email: String::new(),
            bio: String::new(),
            favorite_genres: vec![],
            playlists: vec![
                Playlist {
                    id: "p1".to_string(),
                    name: WATCHED.to_string(),
                    description: String::new(),
                    is_system: true,
                    created_at: None,
                    movies: vec![PlaylistEntry::new(movie_with_ids(1, vec![28]))],
                },
                Playlist {
                    id: "p2".to_string(),
                    name: "Weekend".to_string(),
                    description: String::new(),
                    is_system: false,
                    created_at: None,
                    movies: vec![
                        PlaylistEntry::new(movie_with_ids(1, vec![28])),
                        PlaylistEntry::new(movie_with_ids(2, vec![35])),
                    ],
                },
            ],
        };

        let seen = user.seen_movie_ids();
        assert_eq!(seen.len(), 2);
        assert!(seen.contains(&1));
        assert!(seen.contains(&2));
        assert!(user.has_in_playlist(WATCHED, 1));
        assert!(!user.has_in_playlist(LIKED, 1));
    }

    #[test]
    fn playlist_entry_round_trips_flat_json() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "genre_ids": [28, 878],
            "vote_average": 8.2,
            "addedAt": "2024-03-01T12:00:00Z"
        }"#;

        let entry: PlaylistEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.movie.id, 603);
        assert_eq!(entry.movie.resolved_genre_ids(), vec![28, 878]);
        assert_eq!(entry.added_at.as_deref(), Some("2024-03-01T12:00:00Z"));
    }

    #[test]
    fn friendship_connects_either_direction() {
        let edge = Friendship {
            id: "f1".to_string(),
            requester_id: "u1".to_string(),
            recipient_id: "u2".to_string(),
            status: FriendStatus::Accepted,
            created_at: None,
        };

        assert!(edge.connects("u1", "u2"));
        assert!(edge.connects("u2", "u1"));
        assert!(!edge.connects("u1", "u3"));
        assert_eq!(edge.other_end("u1").map(String::as_str), Some("u2"));
        assert_eq!(edge.other_end("u3"), None);
    }
}
