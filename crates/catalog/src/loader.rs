//! Loader for library snapshot files.
//!
//! A snapshot is the JSON export of a whole library: every user with their
//! nested playlists, plus the friendship edge list. The engine never fetches
//! or paginates anything itself, so a snapshot (or programmatic inserts) is
//! how records get materialized before any scoring runs.
//!
//! Format:
//!
//! ```json
//! {
//!   "users": [ { "id": "...", "username": "...", "playlists": [...] } ],
//!   "friendships": [ { "id": "...", "requesterId": "...", ... } ]
//! }
//! ```

use crate::error::{CatalogError, Result};
use crate::store::MemoryStore;
use crate::types::{Friendship, User};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk shape of a library snapshot
#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    friendships: Vec<Friendship>,
}

/// Read a snapshot file and build a [`MemoryStore`] from it
pub fn load_snapshot(path: &Path) -> Result<MemoryStore> {
    let contents = fs::read_to_string(path)?;
    parse_snapshot_named(&contents, &path.display().to_string())
}

/// Parse snapshot JSON directly (used by tests and embedded fixtures)
pub fn parse_snapshot(json: &str) -> Result<MemoryStore> {
    parse_snapshot_named(json, "<inline>")
}

fn parse_snapshot_named(json: &str, path: &str) -> Result<MemoryStore> {
    let snapshot: Snapshot =
        serde_json::from_str(json).map_err(|source| CatalogError::Malformed {
            path: path.to_string(),
            source,
        })?;

    let mut store = MemoryStore::new();
    for user in snapshot.users {
        store.insert_user(user)?;
    }
    for friendship in snapshot.friendships {
        store.push_friendship(friendship);
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FriendStatus;

    const FIXTURE: &str = r#"{
        "users": [
            {
                "id": "u1",
                "username": "ana",
                "playlists": [
                    {
                        "id": "p1",
                        "name": "Liked",
                        "isSystem": true,
                        "movies": [
                            {
                                "id": 603,
                                "title": "The Matrix",
                                "genre_ids": [28, 878],
                                "vote_average": 8.2,
                                "addedAt": "2024-03-01T12:00:00Z"
                            }
                        ]
                    }
                ]
            },
            { "id": "u2", "username": "ben" }
        ],
        "friendships": [
            {
                "id": "f1",
                "requesterId": "u1",
                "recipientId": "u2",
                "status": "accepted"
            }
        ]
    }"#;

    #[test]
    fn parses_a_full_snapshot() {
        let store = parse_snapshot(FIXTURE).unwrap();
        assert_eq!(store.counts(), (2, 1, 1));

        let ana = store.get_user("u1").unwrap();
        assert_eq!(ana.username, "ana");
        let liked = ana.playlist_named("Liked").unwrap();
        assert!(liked.is_system);
        assert_eq!(liked.movies[0].movie.title, "The Matrix");

        let edge = &store.friendships()[0];
        assert_eq!(edge.status, FriendStatus::Accepted);
        assert!(edge.connects("u1", "u2"));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let store = parse_snapshot(r#"{}"#).unwrap();
        assert_eq!(store.counts(), (0, 0, 0));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_snapshot("not json").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }

    #[test]
    fn rejects_duplicate_user_ids() {
        let json = r#"{
            "users": [
                { "id": "u1", "username": "ana" },
                { "id": "u1", "username": "imposter" }
            ]
        }"#;
        let err = parse_snapshot(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateUser { .. }));
    }
}
