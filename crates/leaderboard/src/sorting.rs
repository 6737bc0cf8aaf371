//! Ranking and display ordering of leaderboard entries.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LeaderboardError;
use crate::models::LeaderboardEntry;

/// Column a leaderboard can be ordered by.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Rank,
    ActivityScore,
    TotalLinesAdded,
    TotalAccepts,
    TotalApplies,
    ChatRequests,
    ComposerRequests,
    Name,
}

impl FromStr for SortField {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rank" => Ok(SortField::Rank),
            "activityScore" => Ok(SortField::ActivityScore),
            "totalLinesAdded" => Ok(SortField::TotalLinesAdded),
            "totalAccepts" => Ok(SortField::TotalAccepts),
            "totalApplies" => Ok(SortField::TotalApplies),
            "chatRequests" => Ok(SortField::ChatRequests),
            "composerRequests" => Ok(SortField::ComposerRequests),
            "name" => Ok(SortField::Name),
            other => Err(LeaderboardError::InvalidSortField(other.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(LeaderboardError::InvalidSortDirection(other.to_string())),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

fn compare(a: &LeaderboardEntry, b: &LeaderboardEntry, field: SortField) -> Ordering {
    match field {
        SortField::Rank => a.rank.cmp(&b.rank),
        SortField::ActivityScore => a.activity_score.total_cmp(&b.activity_score),
        SortField::TotalLinesAdded => a
            .metrics
            .total_lines_added
            .cmp(&b.metrics.total_lines_added),
        SortField::TotalAccepts => a.metrics.total_accepts.cmp(&b.metrics.total_accepts),
        SortField::TotalApplies => a.metrics.total_applies.cmp(&b.metrics.total_applies),
        SortField::ChatRequests => a.metrics.chat_requests.cmp(&b.metrics.chat_requests),
        SortField::ComposerRequests => a
            .metrics
            .composer_requests
            .cmp(&b.metrics.composer_requests),
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
}

/// Reorders entries for display. Stable, and never touches `rank`.
pub fn sort_entries(entries: &mut [LeaderboardEntry], config: SortConfig) {
    entries.sort_by(|a, b| {
        let ordering = compare(a, b, config.field);
        match config.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Sorts by activity score, highest first, and assigns 1-based ranks.
///
/// Ties keep their input order.
pub fn rank_by_activity(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| b.activity_score.total_cmp(&a.activity_score));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index as u32 + 1;
    }
}
