//! Configuration types for leaderboard generation.

use serde::{Deserialize, Serialize};

use crate::generators::roster::TEAM_NAMES;
use leaderboard::{LeaderboardError, Result};

/// Per-counter magnitudes for a 7-day window at a member multiplier of 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseValues {
    pub lines_added: f64,
    pub applies: f64,
    pub tabs_shown: f64,
    pub composer_requests: f64,
    pub chat_requests: f64,
    pub agent_requests: f64,
    pub cmdk_usages: f64,
    pub bugbot_usages: f64,
    pub subscription_included_reqs: f64,
    pub api_key_reqs: f64,
    pub usage_based_reqs: f64,
}

impl Default for BaseValues {
    fn default() -> Self {
        Self {
            lines_added: 500.0,
            applies: 50.0,
            tabs_shown: 200.0,
            composer_requests: 30.0,
            chat_requests: 80.0,
            agent_requests: 10.0,
            cmdk_usages: 40.0,
            bugbot_usages: 5.0,
            subscription_included_reqs: 150.0,
            api_key_reqs: 20.0,
            usage_based_reqs: 10.0,
        }
    }
}

/// Configuration for metrics generation.
///
/// All ranges are half-open `[min, max)`. Fraction ranges derive a subset
/// counter from its parent and must stay within `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsGenConfig {
    pub base_values: BaseValues,
    /// Random scale applied independently to every base counter.
    pub variance_range: (f64, f64),
    /// Lines deleted as a fraction of lines added.
    pub lines_deleted_fraction: (f64, f64),
    pub accepted_lines_added_fraction: (f64, f64),
    pub accepted_lines_deleted_fraction: (f64, f64),
    /// Accepted suggestions as a fraction of applies; the rest are rejects.
    pub accepts_fraction: (f64, f64),
    pub tabs_accepted_fraction: (f64, f64),
}

impl Default for MetricsGenConfig {
    fn default() -> Self {
        Self {
            base_values: BaseValues::default(),
            variance_range: (0.7, 1.3),
            lines_deleted_fraction: (0.4, 0.7),
            accepted_lines_added_fraction: (0.65, 0.85),
            accepted_lines_deleted_fraction: (0.7, 0.9),
            accepts_fraction: (0.75, 0.9),
            tabs_accepted_fraction: (0.8, 0.95),
        }
    }
}

impl MetricsGenConfig {
    pub fn validate(&self) -> Result<()> {
        check_range("variance_range", self.variance_range, f64::MAX)?;
        check_range("lines_deleted_fraction", self.lines_deleted_fraction, f64::MAX)?;
        for (name, range) in [
            ("accepted_lines_added_fraction", self.accepted_lines_added_fraction),
            ("accepted_lines_deleted_fraction", self.accepted_lines_deleted_fraction),
            ("accepts_fraction", self.accepts_fraction),
            ("tabs_accepted_fraction", self.tabs_accepted_fraction),
        ] {
            check_range(name, range, 1.0)?;
        }

        let b = &self.base_values;
        let all_base = [
            b.lines_added,
            b.applies,
            b.tabs_shown,
            b.composer_requests,
            b.chat_requests,
            b.agent_requests,
            b.cmdk_usages,
            b.bugbot_usages,
            b.subscription_included_reqs,
            b.api_key_reqs,
            b.usage_based_reqs,
        ];
        if all_base.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(LeaderboardError::InvalidConfig(
                "base values must be finite and non-negative".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration for leaderboard construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    /// Inclusive range of roster sizes.
    pub roster_size: (usize, usize),
    /// Half-open range of per-member activity multipliers.
    pub member_multiplier: (f64, f64),
    /// Domain appended to generated member emails.
    pub email_domain: String,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            roster_size: (12, 14),
            member_multiplier: (0.3, 2.0),
            email_domain: "company.com".to_string(),
        }
    }
}

impl LeaderboardConfig {
    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.roster_size;
        if min == 0 || min > max {
            return Err(LeaderboardError::InvalidConfig(format!(
                "roster_size must be a non-empty range starting at 1 or more, got {min}..={max}"
            )));
        }
        if max > TEAM_NAMES.len() {
            return Err(LeaderboardError::InvalidConfig(format!(
                "roster_size {max} exceeds the {} available names",
                TEAM_NAMES.len()
            )));
        }

        let (low, _) = self.member_multiplier;
        check_range("member_multiplier", self.member_multiplier, f64::MAX)?;
        if low <= 0.0 {
            return Err(LeaderboardError::InvalidConfig(
                "member_multiplier must be positive".to_string(),
            ));
        }

        if self.email_domain.trim().is_empty() || self.email_domain.contains('@') {
            return Err(LeaderboardError::InvalidConfig(format!(
                "invalid email domain '{}'",
                self.email_domain
            )));
        }

        Ok(())
    }
}

fn check_range(name: &str, (low, high): (f64, f64), ceiling: f64) -> Result<()> {
    if !(low.is_finite() && high.is_finite()) || low < 0.0 || low >= high || high > ceiling {
        return Err(LeaderboardError::InvalidConfig(format!(
            "{name} must satisfy 0 <= min < max <= {ceiling}, got ({low}, {high})"
        )));
    }
    Ok(())
}
