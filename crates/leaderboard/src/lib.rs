//! Data shapes for the team usage leaderboard.
//!
//! A [`LeaderboardResponse`] is an ordered list of [`LeaderboardEntry`] values,
//! one per team member, ranked by a weighted activity score computed from the
//! member's [`MemberMetrics`]. The reporting window is selected with a
//! [`TimeFilter`].
//!
//! All types serialize with the camelCase field names the UI expects.

pub mod errors;
pub mod models;
pub mod sorting;

pub use errors::{LeaderboardError, Result};
pub use models::{LeaderboardEntry, LeaderboardResponse, MemberMetrics, Period, Role, TimeFilter};
pub use sorting::{SortConfig, SortDirection, SortField, rank_by_activity, sort_entries};
