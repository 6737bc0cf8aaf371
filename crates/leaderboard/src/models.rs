//! Leaderboard data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::errors::LeaderboardError;
use crate::sorting::{SortConfig, sort_entries};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Reporting window for a leaderboard.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFilter {
    #[default]
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
    /// All-time. The reported period is capped at the last 365 days.
    #[serde(rename = "all")]
    All,
}

impl TimeFilter {
    pub const ALL: [TimeFilter; 4] = [
        TimeFilter::SevenDays,
        TimeFilter::ThirtyDays,
        TimeFilter::NinetyDays,
        TimeFilter::All,
    ];

    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFilter::SevenDays => "7d",
            TimeFilter::ThirtyDays => "30d",
            TimeFilter::NinetyDays => "90d",
            TimeFilter::All => "all",
        }
    }

    /// Scale applied to every generated counter, relative to a 7-day window.
    pub fn multiplier(&self) -> f64 {
        match self {
            TimeFilter::SevenDays => 1.0,
            TimeFilter::ThirtyDays => 4.2,
            TimeFilter::NinetyDays => 12.5,
            TimeFilter::All => 50.0,
        }
    }

    /// Number of days covered by the reported period.
    pub fn lookback_days(&self) -> i64 {
        match self {
            TimeFilter::SevenDays => 7,
            TimeFilter::ThirtyDays => 30,
            TimeFilter::NinetyDays => 90,
            TimeFilter::All => 365,
        }
    }

    pub fn lookback(&self) -> Duration {
        Duration::days(self.lookback_days())
    }

    pub fn lookback_millis(&self) -> i64 {
        self.lookback_days() * MILLIS_PER_DAY
    }

    /// Parses a filter, falling back to the 7-day window for unknown values.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|e| {
            tracing::warn!("{e}, using {}", TimeFilter::default());
            TimeFilter::default()
        })
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFilter {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "7d" => Ok(TimeFilter::SevenDays),
            "30d" => Ok(TimeFilter::ThirtyDays),
            "90d" => Ok(TimeFilter::NinetyDays),
            "all" => Ok(TimeFilter::All),
            other => Err(LeaderboardError::InvalidTimeFilter(other.to_string())),
        }
    }
}

/// Team role of a leaderboard member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Member => "member",
        }
    }
}

/// Usage counters for one member over the reporting window.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberMetrics {
    // Code edits
    pub total_lines_added: u64,
    pub total_lines_deleted: u64,
    pub accepted_lines_added: u64,
    pub accepted_lines_deleted: u64,

    // Suggestions
    pub total_applies: u64,
    pub total_accepts: u64,
    pub total_rejects: u64,
    pub total_tabs_shown: u64,
    pub total_tabs_accepted: u64,

    // Feature usage
    pub composer_requests: u64,
    pub chat_requests: u64,
    pub agent_requests: u64,
    pub cmdk_usages: u64,
    pub bugbot_usages: u64,

    // Request quota
    pub subscription_included_reqs: u64,
    pub api_key_reqs: u64,
    pub usage_based_reqs: u64,
}

impl MemberMetrics {
    /// Weighted activity score used for ranking.
    pub fn activity_score(&self) -> f64 {
        self.total_accepts as f64 * 2.0
            + self.total_applies as f64 * 1.5
            + self.chat_requests as f64 * 1.2
            + self.composer_requests as f64 * 1.5
            + self.agent_requests as f64 * 2.0
            + self.accepted_lines_added as f64 * 0.1
            + self.cmdk_usages as f64 * 0.5
    }

    /// Fraction of applied suggestions that were accepted.
    pub fn acceptance_rate(&self) -> f64 {
        ratio(self.total_accepts, self.total_applies)
    }

    /// Fraction of shown tab completions that were accepted.
    pub fn tab_acceptance_rate(&self) -> f64 {
        ratio(self.total_tabs_accepted, self.total_tabs_shown)
    }

    /// Total requests across all quota buckets.
    pub fn total_requests(&self) -> u64 {
        self.subscription_included_reqs + self.api_key_reqs + self.usage_based_reqs
    }

    /// Returns true if no subset counter exceeds its parent total.
    pub fn is_consistent(&self) -> bool {
        self.accepted_lines_added <= self.total_lines_added
            && self.accepted_lines_deleted <= self.total_lines_deleted
            && self.total_tabs_accepted <= self.total_tabs_shown
            && self.total_accepts.checked_add(self.total_rejects) == Some(self.total_applies)
    }
}

fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// One ranked row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position; 0 until ranks are assigned.
    pub rank: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub metrics: MemberMetrics,
    pub activity_score: f64,
}

impl LeaderboardEntry {
    /// Creates an unranked entry, scoring the metrics.
    pub fn new(name: String, email: String, role: Role, metrics: MemberMetrics) -> Self {
        let activity_score = metrics.activity_score();
        Self {
            rank: 0,
            name,
            email,
            role,
            metrics,
            activity_score,
        }
    }
}

/// Reporting window bounds in Unix epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub start_date: i64,
    pub end_date: i64,
}

impl Period {
    /// Builds the window for `filter` that ends at `end`.
    pub fn ending_at(end: OffsetDateTime, filter: TimeFilter) -> Self {
        let end_date = end.unix_timestamp_nanos().div_euclid(1_000_000) as i64;
        Self {
            start_date: end_date - filter.lookback_millis(),
            end_date,
        }
    }

    pub fn span_millis(&self) -> i64 {
        self.end_date - self.start_date
    }

    pub fn span(&self) -> Duration {
        Duration::milliseconds(self.span_millis())
    }
}

/// A complete leaderboard for one reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
    pub period: Period,
    pub total_members: usize,
}

impl LeaderboardResponse {
    pub fn new(entries: Vec<LeaderboardEntry>, period: Period) -> Self {
        let total_members = entries.len();
        Self {
            entries,
            period,
            total_members,
        }
    }

    /// Returns a copy with entries reordered for display. Ranks are unchanged.
    pub fn sorted_by(&self, config: SortConfig) -> Self {
        let mut sorted = self.clone();
        sort_entries(&mut sorted.entries, config);
        sorted
    }

    pub fn owner(&self) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.role == Role::Owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_metrics() -> MemberMetrics {
        MemberMetrics {
            total_lines_added: 500,
            total_lines_deleted: 250,
            accepted_lines_added: 400,
            accepted_lines_deleted: 200,
            total_applies: 50,
            total_accepts: 40,
            total_rejects: 10,
            total_tabs_shown: 200,
            total_tabs_accepted: 170,
            composer_requests: 30,
            chat_requests: 80,
            agent_requests: 10,
            cmdk_usages: 40,
            bugbot_usages: 5,
            subscription_included_reqs: 150,
            api_key_reqs: 20,
            usage_based_reqs: 10,
        }
    }

    #[test]
    fn test_time_filter_parse() {
        assert_eq!("7d".parse::<TimeFilter>().unwrap(), TimeFilter::SevenDays);
        assert_eq!("30d".parse::<TimeFilter>().unwrap(), TimeFilter::ThirtyDays);
        assert_eq!("90d".parse::<TimeFilter>().unwrap(), TimeFilter::NinetyDays);
        assert_eq!("all".parse::<TimeFilter>().unwrap(), TimeFilter::All);

        let err = "14d".parse::<TimeFilter>().unwrap_err();
        assert_eq!(err, LeaderboardError::InvalidTimeFilter("14d".to_string()));
    }

    #[test]
    fn test_time_filter_parse_or_default() {
        assert_eq!(TimeFilter::parse_or_default("90d"), TimeFilter::NinetyDays);
        assert_eq!(TimeFilter::parse_or_default("forever"), TimeFilter::SevenDays);
        assert_eq!(TimeFilter::parse_or_default(""), TimeFilter::SevenDays);
    }

    #[test]
    fn test_time_filter_lookups() {
        assert_eq!(TimeFilter::default(), TimeFilter::SevenDays);
        assert_eq!(TimeFilter::ThirtyDays.multiplier(), 4.2);
        assert_eq!(TimeFilter::All.multiplier(), 50.0);
        assert_eq!(TimeFilter::All.lookback_days(), 365);
        assert_eq!(TimeFilter::ThirtyDays.lookback_millis(), 30 * 24 * 3600 * 1000);
        assert_eq!(TimeFilter::NinetyDays.lookback(), Duration::days(90));
    }

    #[test]
    fn test_time_filter_serde_names() {
        for filter in TimeFilter::ALL {
            let json = serde_json::to_string(&filter).unwrap();
            assert_eq!(json, format!("\"{}\"", filter.as_str()));
            let back: TimeFilter = serde_json::from_str(&json).unwrap();
            assert_eq!(back, filter);
        }
    }

    #[test]
    fn test_activity_score() {
        let metrics = sample_metrics();
        // 40*2 + 50*1.5 + 80*1.2 + 30*1.5 + 10*2 + 400*0.1 + 40*0.5
        let expected = 80.0 + 75.0 + 96.0 + 45.0 + 20.0 + 40.0 + 20.0;
        assert!((metrics.activity_score() - expected).abs() < 1e-9);
        assert_eq!(MemberMetrics::default().activity_score(), 0.0);
    }

    #[test]
    fn test_metrics_rates_and_consistency() {
        let metrics = sample_metrics();
        assert!((metrics.acceptance_rate() - 0.8).abs() < 1e-9);
        assert!((metrics.tab_acceptance_rate() - 0.85).abs() < 1e-9);
        assert_eq!(metrics.total_requests(), 180);
        assert!(metrics.is_consistent());

        let empty = MemberMetrics::default();
        assert_eq!(empty.acceptance_rate(), 0.0);
        assert!(empty.is_consistent());

        let broken = MemberMetrics {
            total_rejects: 11,
            ..sample_metrics()
        };
        assert!(!broken.is_consistent());
    }

    #[test]
    fn test_metrics_wire_names() {
        let value = serde_json::to_value(sample_metrics()).unwrap();
        assert_eq!(value["totalLinesAdded"], 500);
        assert_eq!(value["cmdkUsages"], 40);
        assert_eq!(value["subscriptionIncludedReqs"], 150);
        assert_eq!(value["apiKeyReqs"], 20);
        assert_eq!(value.as_object().unwrap().len(), 17);
    }

    #[test]
    fn test_entry_new_is_unranked() {
        let entry = LeaderboardEntry::new(
            "Alex Chen".to_string(),
            "alex.chen@company.com".to_string(),
            Role::Owner,
            sample_metrics(),
        );
        assert_eq!(entry.rank, 0);
        assert_eq!(entry.activity_score, sample_metrics().activity_score());

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["role"], Role::Owner.as_str());
        assert_eq!(
            serde_json::to_value(Role::Member).unwrap(),
            Role::Member.as_str()
        );
        assert!(value.get("activityScore").is_some());
    }

    #[test]
    fn test_period_ending_at() {
        let end = datetime!(2024-03-01 12:00 UTC);
        let period = Period::ending_at(end, TimeFilter::ThirtyDays);

        assert_eq!(period.end_date, end.unix_timestamp() * 1000);
        assert_eq!(period.span_millis(), 30 * 24 * 3600 * 1000);
        assert_eq!(period.span(), Duration::days(30));

        let all = Period::ending_at(end, TimeFilter::All);
        assert_eq!(all.span(), Duration::days(365));
    }

    #[test]
    fn test_period_rounds_down_before_epoch() {
        let end = datetime!(1969-12-31 23:59:59.9995 UTC);
        let period = Period::ending_at(end, TimeFilter::SevenDays);

        assert_eq!(period.end_date, -1);
        assert_eq!(period.start_date, -1 - 7 * 24 * 3600 * 1000);
    }

    #[test]
    fn test_response_counts_members() {
        let entries = vec![
            LeaderboardEntry::new("A".into(), "a@x".into(), Role::Owner, sample_metrics()),
            LeaderboardEntry::new("B".into(), "b@x".into(), Role::Member, sample_metrics()),
        ];
        let period = Period::ending_at(datetime!(2024-01-01 0:00 UTC), TimeFilter::SevenDays);
        let response = LeaderboardResponse::new(entries, period);

        assert_eq!(response.total_members, 2);
        assert_eq!(response.owner().map(|e| e.name.as_str()), Some("A"));

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["totalMembers"], 2);
        assert!(value["period"].get("startDate").is_some());
    }
}
