//! Per-member usage metrics generation.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::config::MetricsGenConfig;
use leaderboard::{MemberMetrics, Result, TimeFilter};

/// Generates randomized usage counters for one team member.
///
/// Every base counter is `floor(base * window * member * variance)` with an
/// independent variance draw. Subset counters (accepted lines, accepts,
/// accepted tabs) are drawn as a fraction below 1 of their parent, so they
/// never exceed it.
pub struct MetricsGenerator {
    config: MetricsGenConfig,
    variance: Uniform<f64>,
    lines_deleted: Uniform<f64>,
    accepted_lines_added: Uniform<f64>,
    accepted_lines_deleted: Uniform<f64>,
    accepts: Uniform<f64>,
    tabs_accepted: Uniform<f64>,
}

impl MetricsGenerator {
    /// Creates a new metrics generator with default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(MetricsGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: MetricsGenConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: MetricsGenConfig) -> Self {
        let uniform = |(low, high): (f64, f64)| Uniform::<f64>::new(low, high);
        Self {
            variance: uniform(config.variance_range),
            lines_deleted: uniform(config.lines_deleted_fraction),
            accepted_lines_added: uniform(config.accepted_lines_added_fraction),
            accepted_lines_deleted: uniform(config.accepted_lines_deleted_fraction),
            accepts: uniform(config.accepts_fraction),
            tabs_accepted: uniform(config.tabs_accepted_fraction),
            config,
        }
    }

    pub fn config(&self) -> &MetricsGenConfig {
        &self.config
    }

    /// Generates one metrics bundle.
    ///
    /// `member_multiplier` scales the member's overall activity level on top of
    /// the time window's own multiplier. Negative or non-finite values are
    /// treated as zero.
    pub fn generate(
        &self,
        time_filter: TimeFilter,
        member_multiplier: f64,
        rng: &mut impl Rng,
    ) -> MemberMetrics {
        let member_multiplier = if member_multiplier.is_finite() {
            member_multiplier.max(0.0)
        } else {
            0.0
        };
        let multiplier = time_filter.multiplier() * member_multiplier;
        let base = &self.config.base_values;

        let total_lines_added = self.scaled(base.lines_added, multiplier, rng);
        let total_lines_deleted = fraction_of(total_lines_added, &self.lines_deleted, rng);
        let accepted_lines_added = fraction_of(total_lines_added, &self.accepted_lines_added, rng);
        let accepted_lines_deleted =
            fraction_of(total_lines_deleted, &self.accepted_lines_deleted, rng);

        let total_applies = self.scaled(base.applies, multiplier, rng);
        let total_accepts = fraction_of(total_applies, &self.accepts, rng);
        let total_rejects = total_applies.saturating_sub(total_accepts);

        let total_tabs_shown = self.scaled(base.tabs_shown, multiplier, rng);
        let total_tabs_accepted = fraction_of(total_tabs_shown, &self.tabs_accepted, rng);

        MemberMetrics {
            total_lines_added,
            total_lines_deleted,
            accepted_lines_added,
            accepted_lines_deleted,
            total_applies,
            total_accepts,
            total_rejects,
            total_tabs_shown,
            total_tabs_accepted,
            composer_requests: self.scaled(base.composer_requests, multiplier, rng),
            chat_requests: self.scaled(base.chat_requests, multiplier, rng),
            agent_requests: self.scaled(base.agent_requests, multiplier, rng),
            cmdk_usages: self.scaled(base.cmdk_usages, multiplier, rng),
            bugbot_usages: self.scaled(base.bugbot_usages, multiplier, rng),
            subscription_included_reqs: self.scaled(
                base.subscription_included_reqs,
                multiplier,
                rng,
            ),
            api_key_reqs: self.scaled(base.api_key_reqs, multiplier, rng),
            usage_based_reqs: self.scaled(base.usage_based_reqs, multiplier, rng),
        }
    }

    fn scaled(&self, base: f64, multiplier: f64, rng: &mut impl Rng) -> u64 {
        to_count(base * multiplier * self.variance.sample(rng))
    }
}

impl Default for MetricsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn fraction_of(parent: u64, fraction: &Uniform<f64>, rng: &mut impl Rng) -> u64 {
    to_count(parent as f64 * fraction.sample(rng)).min(parent)
}

// Float to u64 casts saturate, and NaN becomes 0.
fn to_count(value: f64) -> u64 {
    value.floor() as u64
}
