//! # Taste Crate
//!
//! The scoring core: taste profiles, compatibility, and recommendations.
//!
//! ## Components
//!
//! ### Profile Builder
//! Turns a user's playlists into a genre-interest distribution:
//! - Movies in "Watched"/"Liked" carry extra weight
//! - Shares are integer percentages per genre
//!
//! ### Compatibility Scorer
//! Blends two sub-scores into a single percentage:
//! - Movie overlap (Jaccard over the two libraries)
//! - Genre match (profile similarity)
//!
//! ### Recommenders
//! - Shared-taste: movies from one friend's playlists matching the pair's
//!   common strong genres, with graceful fallback tiers (cap 6)
//! - Personalized: movies from everyone's playlists matching the user's
//!   top genres, ranked by a composite score (cap 8)
//!
//! ## Example Usage
//!
//! ```ignore
//! use taste::{build_profile, blend_compatibility, recommend_for_user};
//!
//! let profile = build_profile(&user);
//! println!("top genres: {:?}", profile.top_genres(3));
//!
//! let score = blend_compatibility(&user, &friend);
//! let recs = recommend_for_user(&user, store.users());
//! ```
//!
//! Every entry point is a pure function over caller-supplied records: no
//! I/O, no caching, no mutation of inputs. Callers wanting to avoid
//! recomputation memoize externally.

// Public modules
pub mod profile;
pub mod compat;
pub mod shared;
pub mod personalized;

// Re-export commonly used items
pub use compat::{blend_compatibility, genre_match_score, movie_overlap_score};
pub use personalized::{PERSONAL_RECS_LIMIT, Recommendation, recommend_for_user};
pub use profile::{TasteProfile, build_profile, weight_for};
pub use shared::{SHARED_RECS_LIMIT, STRONG_INTEREST_PCT, recommend_from_friend};
