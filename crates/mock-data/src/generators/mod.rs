//! Entity generators for leaderboard data.
//!
//! - [`RosterGenerator`]: Select the team members that appear on a leaderboard
//! - [`MetricsGenerator`]: Fabricate usage counters for one member

pub mod metrics;
pub mod roster;

pub use metrics::MetricsGenerator;
pub use roster::{RosterGenerator, RosterMember, TEAM_NAMES};
