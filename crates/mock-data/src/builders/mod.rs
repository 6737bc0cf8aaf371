//! Builders for assembling complete leaderboard responses.

pub mod response;

pub use response::{LeaderboardBuilder, generate_leaderboard, generate_leaderboard_seeded};
