//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or mutating the library
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error while reading a snapshot file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot contents were not valid library JSON
    #[error("Malformed snapshot {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two users in the library share an id
    #[error("Duplicate user id: {id}")]
    DuplicateUser { id: String },

    /// A store operation referenced a user that does not exist
    #[error("Unknown user id: {id}")]
    UnknownUser { id: String },

    /// A user already owns a playlist with this name
    #[error("User {user_id} already has a playlist named {name:?}")]
    DuplicatePlaylist { user_id: String, name: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
