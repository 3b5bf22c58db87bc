//! # Discovery Facade
//!
//! The layer the presentation code talks to. It resolves user ids through
//! the repository, runs the scoring core over the resolved records, and
//! applies the degradation policy:
//!
//! - an unknown *subject* user is a broken calling contract -> error
//! - an unknown counterpart (friend, compared user) degrades to the
//!   zero/empty result instead of failing
//!
//! Scoring itself never sees the repository; everything is resolved here
//! first.

use std::time::Instant;

use anyhow::{Result, anyhow};
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use catalog::{Movie, User, UserRepository};
use taste::{
    Recommendation, TasteProfile, blend_compatibility, build_profile, genre_match_score,
    movie_overlap_score, recommend_for_user, recommend_from_friend,
};

use crate::graph::FriendGraph;

/// Compatibility between two users, with the sub-scores that fed the blend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compatibility {
    pub movie_overlap: u32,
    pub genre_match: u32,
    pub blend: u32,
}

impl Compatibility {
    /// The zero score, used when the counterpart cannot be resolved
    pub fn zero() -> Self {
        Self {
            movie_overlap: 0,
            genre_match: 0,
            blend: 0,
        }
    }
}

/// An accepted friend annotated with their compatibility score
#[derive(Debug, Clone, PartialEq)]
pub struct FriendMatch {
    pub user: User,
    pub compatibility: u32,
}

/// An incoming friend request with its sender resolved
#[derive(Debug, Clone, PartialEq)]
pub struct FriendRequest {
    pub friendship_id: String,
    pub user: User,
}

/// Discovery over a user repository.
///
/// Borrows the repository for the duration of a request; holds no state of
/// its own, so two facades over the same store answer identically.
pub struct Discovery<'a, R: UserRepository> {
    repo: &'a R,
}

impl<'a, R: UserRepository> Discovery<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Resolve the subject user or fail the calling contract
    fn subject(&self, user_id: &str) -> Result<&User> {
        self.repo
            .user_by_id(user_id)
            .ok_or_else(|| anyhow!("User {} not found", user_id))
    }

    /// The subject's taste profile
    #[instrument(skip(self))]
    pub fn taste_profile(&self, user_id: &str) -> Result<TasteProfile> {
        let user = self.subject(user_id)?;
        Ok(build_profile(user))
    }

    /// Compatibility between the subject and another user.
    ///
    /// An unresolvable counterpart scores zero across the board.
    #[instrument(skip(self))]
    pub fn compatibility(&self, user_id: &str, other_id: &str) -> Result<Compatibility> {
        let user = self.subject(user_id)?;
        let Some(other) = self.repo.user_by_id(other_id) else {
            debug!(other_id, "counterpart not found, scoring zero");
            return Ok(Compatibility::zero());
        };

        Ok(Compatibility {
            movie_overlap: movie_overlap_score(user, other),
            genre_match: genre_match_score(user, other),
            blend: blend_compatibility(user, other),
        })
    }

    /// Movies to watch together with one friend.
    ///
    /// An unresolvable friend yields the empty list.
    #[instrument(skip(self))]
    pub fn shared_recommendations(&self, user_id: &str, friend_id: &str) -> Result<Vec<Movie>> {
        let user = self.subject(user_id)?;
        let Some(friend) = self.repo.user_by_id(friend_id) else {
            debug!(friend_id, "friend not found, returning no recommendations");
            return Ok(Vec::new());
        };

        Ok(recommend_from_friend(user, friend))
    }

    /// Personalized recommendations drawn from every other user's playlists
    #[instrument(skip(self))]
    pub fn personalized_recommendations(&self, user_id: &str) -> Result<Vec<Recommendation>> {
        let user = self.subject(user_id)?;

        let start = Instant::now();
        let recs = recommend_for_user(user, self.repo.all_users());
        info!(
            user_id,
            count = recs.len(),
            elapsed = ?start.elapsed(),
            "personalized recommendations computed"
        );
        Ok(recs)
    }

    /// The subject's accepted friends, each annotated with compatibility,
    /// sorted descending by score.
    ///
    /// Edges pointing at users the repository no longer knows are skipped.
    /// Annotation fans out across threads; the parallel map preserves edge
    /// order, so equal scores keep it after the stable sort.
    #[instrument(skip(self, graph))]
    pub fn friend_matches(&self, user_id: &str, graph: &FriendGraph) -> Result<Vec<FriendMatch>> {
        let user = self.subject(user_id)?;

        let friends: Vec<&User> = graph
            .friend_ids_of(user_id)
            .into_iter()
            .filter_map(|id| self.repo.user_by_id(id))
            .collect();

        let mut matches: Vec<FriendMatch> = friends
            .par_iter()
            .map(|&friend| FriendMatch {
                compatibility: blend_compatibility(user, friend),
                user: friend.clone(),
            })
            .collect();
        matches.sort_by(|a, b| b.compatibility.cmp(&a.compatibility));

        debug!(count = matches.len(), "friend matches ready");
        Ok(matches)
    }

    /// Incoming pending requests for the subject, senders resolved.
    ///
    /// Requests from users the repository no longer knows are skipped.
    #[instrument(skip(self, graph))]
    pub fn friend_requests(&self, user_id: &str, graph: &FriendGraph) -> Result<Vec<FriendRequest>> {
        self.subject(user_id)?;

        Ok(graph
            .pending_for(user_id)
            .into_iter()
            .filter_map(|edge| {
                self.repo.user_by_id(&edge.requester_id).map(|sender| FriendRequest {
                    friendship_id: edge.id.clone(),
                    user: sender.clone(),
                })
            })
            .collect())
    }
}
