//! Fluent builder for ranked leaderboard responses.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use time::OffsetDateTime;

use crate::config::{LeaderboardConfig, MetricsGenConfig};
use crate::generators::{MetricsGenerator, RosterGenerator};
use leaderboard::{
    LeaderboardEntry, LeaderboardResponse, Period, Result, TimeFilter, rank_by_activity,
};

/// Builder for synthetic leaderboards.
///
/// # Example
///
/// ```rust,ignore
/// let response = LeaderboardBuilder::new()
///     .with_config(LeaderboardConfig {
///         roster_size: (5, 5),
///         ..Default::default()
///     })?
///     .build(TimeFilter::NinetyDays, &mut rng);
/// ```
pub struct LeaderboardBuilder {
    roster: RosterGenerator,
    metrics: MetricsGenerator,
    member_multiplier: Uniform<f64>,
}

impl LeaderboardBuilder {
    /// Creates a builder with the default roster and metrics configuration.
    pub fn new() -> Self {
        let config = LeaderboardConfig::default();
        Self {
            roster: RosterGenerator::from_valid_config(&config),
            metrics: MetricsGenerator::new(),
            member_multiplier: multiplier_distribution(&config),
        }
    }

    /// Replaces the roster configuration.
    pub fn with_config(mut self, config: LeaderboardConfig) -> Result<Self> {
        config.validate()?;
        self.roster = RosterGenerator::from_valid_config(&config);
        self.member_multiplier = multiplier_distribution(&config);
        Ok(self)
    }

    /// Replaces the metrics configuration.
    pub fn with_metrics_config(mut self, config: MetricsGenConfig) -> Result<Self> {
        self.metrics = MetricsGenerator::with_config(config)?;
        Ok(self)
    }

    /// Builds a leaderboard whose period ends now.
    pub fn build(&self, time_filter: TimeFilter, rng: &mut impl Rng) -> LeaderboardResponse {
        self.build_at(time_filter, OffsetDateTime::now_utc(), rng)
    }

    /// Builds a leaderboard whose period ends at `now`.
    pub fn build_at(
        &self,
        time_filter: TimeFilter,
        now: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> LeaderboardResponse {
        let mut entries: Vec<LeaderboardEntry> = self
            .roster
            .generate(rng)
            .into_iter()
            .map(|member| {
                let multiplier = self.member_multiplier.sample(rng);
                let metrics = self.metrics.generate(time_filter, multiplier, rng);
                LeaderboardEntry::new(member.name, member.email, member.role, metrics)
            })
            .collect();

        rank_by_activity(&mut entries);

        tracing::debug!(
            time_filter = %time_filter,
            members = entries.len(),
            top_score = entries.first().map(|e| e.activity_score),
            "Generated leaderboard"
        );

        LeaderboardResponse::new(entries, Period::ending_at(now, time_filter))
    }
}

impl Default for LeaderboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn multiplier_distribution(config: &LeaderboardConfig) -> Uniform<f64> {
    let (low, high) = config.member_multiplier;
    Uniform::new(low, high)
}

/// Generates a leaderboard with default settings and thread-local randomness.
pub fn generate_leaderboard(time_filter: TimeFilter) -> LeaderboardResponse {
    LeaderboardBuilder::new().build(time_filter, &mut rand::thread_rng())
}

/// Generates a leaderboard whose metrics are fully determined by `seed`.
///
/// Only the period bounds depend on the current time.
pub fn generate_leaderboard_seeded(time_filter: TimeFilter, seed: u64) -> LeaderboardResponse {
    LeaderboardBuilder::new().build(time_filter, &mut StdRng::seed_from_u64(seed))
}
