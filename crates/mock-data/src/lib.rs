//! Synthetic data generation for the team leaderboard.
//!
//! This crate fabricates a roster of team members, randomized usage metrics
//! for each member, and a ranked [`LeaderboardResponse`]. It stands in for a
//! real usage backend while the UI is developed.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mock_data::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(12345);
//! let response = LeaderboardBuilder::new().build(TimeFilter::ThirtyDays, &mut rng);
//! assert_eq!(response.entries[0].rank, 1);
//! ```

pub mod builders;
pub mod config;
pub mod generators;

pub use builders::{generate_leaderboard, generate_leaderboard_seeded};

// Re-export core types from the leaderboard crate
pub use leaderboard::{
    LeaderboardEntry, LeaderboardError, LeaderboardResponse, MemberMetrics, Period, Role,
    TimeFilter,
};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{
        LeaderboardBuilder, generate_leaderboard, generate_leaderboard_seeded,
    };
    pub use crate::config::{BaseValues, LeaderboardConfig, MetricsGenConfig};
    pub use crate::generators::{MetricsGenerator, RosterGenerator, RosterMember};
    pub use crate::{LeaderboardEntry, LeaderboardResponse, MemberMetrics, Role, TimeFilter};
}
