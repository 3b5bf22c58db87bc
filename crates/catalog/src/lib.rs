//! # Catalog Crate
//!
//! Domain records and storage for the movie library.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Playlist, User, Friendship)
//! - **genres**: The fixed genre taxonomy (id <-> name table)
//! - **store**: The UserRepository seam and the in-memory store
//! - **loader**: Parse library snapshot JSON into a store
//! - **error**: Error types for loading and store writes
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{MemoryStore, load_snapshot};
//! use std::path::Path;
//!
//! // Load a library snapshot
//! let store = load_snapshot(Path::new("library.json"))?;
//!
//! // Query records
//! let user = store.get_user("u1").unwrap();
//! println!("{} owns {} playlists", user.username, user.playlists.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod genres;
pub mod store;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use loader::{load_snapshot, parse_snapshot};
pub use store::{MemoryStore, UserRepository};
pub use types::{
    // Type aliases
    UserId,
    MovieId,
    GenreId,
    PlaylistId,
    // Core types
    Movie,
    GenreTag,
    Playlist,
    PlaylistEntry,
    User,
    Friendship,
    FriendStatus,
    // System playlist names
    WATCHED,
    LIKED,
    is_system_name,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(store.counts(), (0, 0, 0));
        assert!(store.get_user("u1").is_none());
        assert!(store.users().is_empty());
        assert!(store.friendships().is_empty());
    }

    #[test]
    fn test_system_names() {
        assert!(is_system_name(WATCHED));
        assert!(is_system_name(LIKED));
        assert!(!is_system_name("Weekend"));
        assert!(!is_system_name("watched"));
    }
}
