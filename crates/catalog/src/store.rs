//! The user store: an explicit repository seam over plain records.
//!
//! Scoring functions take `&User` records directly and never touch a store;
//! this module is where the surrounding application keeps those records and
//! applies write-backs (creating playlists, adding recommended movies,
//! updating favorite genres). The [`UserRepository`] trait is the seam a
//! different persistence backend would implement; [`MemoryStore`] is the
//! in-process implementation everything here uses.

use crate::error::{CatalogError, Result};
use crate::types::{
    Friendship, GenreId, Movie, MovieId, Playlist, PlaylistEntry, PlaylistId, User, UserId,
    is_system_name,
};
use std::collections::HashMap;

/// Read/write access to user records.
///
/// ## Design Note
/// Reads hand out borrows; the store owns the records. Writers go through
/// `upsert_user` so an implementation backed by real persistence can treat
/// every write as a full-record save.
pub trait UserRepository {
    /// Look up a user by id
    fn user_by_id(&self, id: &str) -> Option<&User>;

    /// Every user in the store, in insertion order
    fn all_users(&self) -> &[User];

    /// Insert or replace a user record
    fn upsert_user(&mut self, user: User);
}

/// In-memory user store with an id index and the friendship edge list.
///
/// Users are kept in insertion order so every scan over the store is
/// deterministic; the `HashMap` index makes id lookups O(1) on top of that.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Vec<User>,
    by_id: HashMap<UserId, usize>,
    friendships: Vec<Friendship>,
    /// Monotonic counter backing `mint_id`
    next_id: u64,
}

impl MemoryStore {
    /// Creates a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user, rejecting a duplicate id
    pub fn insert_user(&mut self, user: User) -> Result<()> {
        if self.by_id.contains_key(&user.id) {
            return Err(CatalogError::DuplicateUser { id: user.id });
        }
        self.by_id.insert(user.id.clone(), self.users.len());
        self.users.push(user);
        Ok(())
    }

    /// Get a user by id
    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.by_id.get(id).map(|&idx| &self.users[idx])
    }

    fn get_user_mut(&mut self, id: &str) -> Result<&mut User> {
        match self.by_id.get(id) {
            Some(&idx) => Ok(&mut self.users[idx]),
            None => Err(CatalogError::UnknownUser { id: id.to_string() }),
        }
    }

    /// Every user, in insertion order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Every friendship edge loaded into the store
    pub fn friendships(&self) -> &[Friendship] {
        &self.friendships
    }

    /// Append a friendship edge (used by the snapshot loader)
    pub fn push_friendship(&mut self, friendship: Friendship) {
        self.friendships.push(friendship);
    }

    /// Mint a store-unique id with the given prefix, e.g. `pl-7`
    pub fn mint_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id)
    }

    /// Create a new, explicitly user-created playlist.
    ///
    /// Rejects a name the user already owns a playlist under; the reserved
    /// system playlists are created lazily by [`MemoryStore::add_to_playlist`]
    /// instead.
    pub fn create_playlist(
        &mut self,
        user_id: &str,
        name: &str,
        description: &str,
    ) -> Result<PlaylistId> {
        let id = self.mint_id("pl");
        let user = self.get_user_mut(user_id)?;
        if user.playlist_named(name).is_some() {
            return Err(CatalogError::DuplicatePlaylist {
                user_id: user_id.to_string(),
                name: name.to_string(),
            });
        }
        user.playlists.push(Playlist {
            id: id.clone(),
            name: name.to_string(),
            description: description.to_string(),
            is_system: is_system_name(name),
            created_at: None,
            movies: Vec::new(),
        });
        Ok(id)
    }

    /// Add a movie to the named playlist, creating the playlist on first use.
    ///
    /// Lazily created playlists are flagged as system playlists when the
    /// name is reserved. Adding a movie already in the playlist is a no-op,
    /// so the same recommendation can be applied twice without duplicating
    /// the entry. `added_at` is a caller-supplied timestamp; the store has
    /// no clock of its own.
    pub fn add_to_playlist(
        &mut self,
        user_id: &str,
        name: &str,
        movie: Movie,
        added_at: Option<String>,
    ) -> Result<()> {
        let id = self.mint_id("pl");
        let user = self.get_user_mut(user_id)?;

        let playlist = match user.playlists.iter_mut().find(|p| p.name == name) {
            Some(playlist) => playlist,
            None => {
                user.playlists.push(Playlist {
                    id,
                    name: name.to_string(),
                    description: format!("Your {} movies", name.to_lowercase()),
                    is_system: is_system_name(name),
                    created_at: added_at.clone(),
                    movies: Vec::new(),
                });
                user.playlists.last_mut().expect("just pushed")
            }
        };

        if !playlist.contains(movie.id) {
            playlist.movies.push(PlaylistEntry { movie, added_at });
        }
        Ok(())
    }

    /// Remove a movie from the named playlist.
    ///
    /// Removing from a playlist that does not exist, or a movie that is not
    /// in it, is a no-op.
    pub fn remove_from_playlist(
        &mut self,
        user_id: &str,
        name: &str,
        movie_id: MovieId,
    ) -> Result<()> {
        let user = self.get_user_mut(user_id)?;
        if let Some(playlist) = user.playlists.iter_mut().find(|p| p.name == name) {
            playlist.movies.retain(|entry| entry.movie.id != movie_id);
        }
        Ok(())
    }

    /// Replace the user's declared favorite genres
    pub fn set_favorite_genres(&mut self, user_id: &str, genres: Vec<GenreId>) -> Result<()> {
        let user = self.get_user_mut(user_id)?;
        user.favorite_genres = genres;
        Ok(())
    }

    /// Get counts for debugging/validation: (users, playlist entries, friendships)
    pub fn counts(&self) -> (usize, usize, usize) {
        let entries = self
            .users
            .iter()
            .flat_map(|u| u.playlists.iter())
            .map(|p| p.movies.len())
            .sum();
        (self.users.len(), entries, self.friendships.len())
    }
}

impl UserRepository for MemoryStore {
    fn user_by_id(&self, id: &str) -> Option<&User> {
        self.get_user(id)
    }

    fn all_users(&self) -> &[User] {
        &self.users
    }

    fn upsert_user(&mut self, user: User) {
        match self.by_id.get(&user.id) {
            Some(&idx) => self.users[idx] = user,
            None => {
                self.by_id.insert(user.id.clone(), self.users.len());
                self.users.push(user);
            }
        }
    }
}
