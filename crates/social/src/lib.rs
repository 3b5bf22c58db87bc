//! # Social Crate
//!
//! Friendships and the discovery facade that ties the store to the scoring
//! core.
//!
//! ## Components
//!
//! - **graph**: the friendship edge list and its lifecycle
//!   (request/accept/reject, recipient-only settlement)
//! - **discovery**: id-resolving wrappers around the scoring entry points,
//!   applying the degradation policy (unknown subject errors, unknown
//!   counterparts score zero/empty)
//!
//! ## Example Usage
//!
//! ```ignore
//! use social::{Discovery, FriendGraph};
//!
//! let graph = FriendGraph::from_edges(store.friendships().to_vec());
//! let discovery = Discovery::new(&store);
//!
//! let compat = discovery.compatibility("u1", "u2")?;
//! println!("blend: {}%", compat.blend);
//!
//! for m in discovery.friend_matches("u1", &graph)? {
//!     println!("{}: {}%", m.user.username, m.compatibility);
//! }
//! ```

pub mod graph;
pub mod discovery;

pub use discovery::{Compatibility, Discovery, FriendMatch, FriendRequest};
pub use graph::{FriendGraph, SocialError};
