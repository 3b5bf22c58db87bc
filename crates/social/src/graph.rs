//! The friendship graph: connection lifecycle between users.
//!
//! Edges move through pending -> accepted/rejected. Only the recipient of a
//! request may accept or reject it, and at most one edge exists between any
//! two users regardless of direction. The graph stores ids only — resolving
//! them to user records is the discovery layer's job.

use catalog::{FriendStatus, Friendship, UserId};
use thiserror::Error;

/// Errors for friendship lifecycle operations
#[derive(Error, Debug)]
pub enum SocialError {
    /// An edge between these users already exists (any status)
    #[error("Users {a} and {b} are already connected")]
    AlreadyConnected { a: String, b: String },

    /// No friendship with this id
    #[error("Friendship {id} not found")]
    RequestNotFound { id: String },

    /// Someone other than the request's recipient tried to settle it
    #[error("User {user_id} is not the recipient of friendship {id}")]
    NotRecipient { id: String, user_id: String },

    /// A user cannot befriend themselves
    #[error("User {id} cannot friend themselves")]
    SelfFriendship { id: String },
}

/// The set of friendship edges, with lifecycle operations.
///
/// Ids for new edges are minted by the caller (the store's id counter), so
/// the graph itself stays deterministic and clock-free.
#[derive(Debug, Default)]
pub struct FriendGraph {
    edges: Vec<Friendship>,
}

impl FriendGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from already-loaded edges (e.g. a library snapshot)
    pub fn from_edges(edges: Vec<Friendship>) -> Self {
        Self { edges }
    }

    /// Every edge, in insertion order
    pub fn edges(&self) -> &[Friendship] {
        &self.edges
    }

    /// File a friend request from `requester` to `recipient`.
    ///
    /// Rejects self-friendship and any pre-existing edge between the two,
    /// whichever direction it was filed in.
    pub fn request(
        &mut self,
        id: String,
        requester: &str,
        recipient: &str,
    ) -> Result<&Friendship, SocialError> {
        if requester == recipient {
            return Err(SocialError::SelfFriendship {
                id: requester.to_string(),
            });
        }
        if self.edges.iter().any(|edge| edge.connects(requester, recipient)) {
            return Err(SocialError::AlreadyConnected {
                a: requester.to_string(),
                b: recipient.to_string(),
            });
        }

        self.edges.push(Friendship {
            id,
            requester_id: requester.to_string(),
            recipient_id: recipient.to_string(),
            status: FriendStatus::Pending,
            created_at: None,
        });
        Ok(self.edges.last().expect("just pushed"))
    }

    /// Accept a pending request. Only the recipient may accept.
    pub fn accept(&mut self, friendship_id: &str, recipient: &str) -> Result<(), SocialError> {
        self.settle(friendship_id, recipient, FriendStatus::Accepted)
    }

    /// Reject a pending request. Only the recipient may reject.
    pub fn reject(&mut self, friendship_id: &str, recipient: &str) -> Result<(), SocialError> {
        self.settle(friendship_id, recipient, FriendStatus::Rejected)
    }

    fn settle(
        &mut self,
        friendship_id: &str,
        recipient: &str,
        status: FriendStatus,
    ) -> Result<(), SocialError> {
        let edge = self
            .edges
            .iter_mut()
            .find(|edge| edge.id == friendship_id)
            .ok_or_else(|| SocialError::RequestNotFound {
                id: friendship_id.to_string(),
            })?;
        if edge.recipient_id != recipient {
            return Err(SocialError::NotRecipient {
                id: friendship_id.to_string(),
                user_id: recipient.to_string(),
            });
        }
        edge.status = status;
        Ok(())
    }

    /// Ids of everyone connected to `user_id` by an accepted edge, in edge
    /// order
    pub fn friend_ids_of(&self, user_id: &str) -> Vec<&UserId> {
        self.edges
            .iter()
            .filter(|edge| edge.status == FriendStatus::Accepted)
            .filter_map(|edge| edge.other_end(user_id))
            .collect()
    }

    /// Incoming requests still waiting on `user_id`
    pub fn pending_for(&self, user_id: &str) -> Vec<&Friendship> {
        self.edges
            .iter()
            .filter(|edge| edge.status == FriendStatus::Pending && edge.recipient_id == user_id)
            .collect()
    }
}
