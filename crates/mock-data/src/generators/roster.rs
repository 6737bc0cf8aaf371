//! Team roster selection.

use rand::Rng;

use crate::config::LeaderboardConfig;
use leaderboard::{Result, Role};

/// Fixed, ordered list of team member names. Rosters always take a prefix.
pub const TEAM_NAMES: &[&str] = &[
    "Alex Chen",
    "Sam Rodriguez",
    "Jordan Kim",
    "Morgan Taylor",
    "Casey Williams",
    "Riley Martinez",
    "Avery Johnson",
    "Quinn Brown",
    "Sage Davis",
    "River Anderson",
    "Phoenix Wilson",
    "Blake Thompson",
    "Skylar Garcia",
    "Rowan Miller",
    "Emery Moore",
];

/// A team member selected for a leaderboard, before metrics are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterMember {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Selects leaderboard rosters from [`TEAM_NAMES`].
pub struct RosterGenerator {
    roster_size: (usize, usize),
    email_domain: String,
}

impl RosterGenerator {
    /// Creates a new roster generator with default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(&LeaderboardConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: &LeaderboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    pub(crate) fn from_valid_config(config: &LeaderboardConfig) -> Self {
        Self {
            roster_size: config.roster_size,
            email_domain: config.email_domain.clone(),
        }
    }

    /// Draws a roster size and returns that many members in list order.
    pub fn generate(&self, rng: &mut impl Rng) -> Vec<RosterMember> {
        let (min, max) = self.roster_size;
        let count = rng.gen_range(min..=max);
        self.first(count)
    }

    /// Returns the first `count` members. The first is always the owner.
    pub fn first(&self, count: usize) -> Vec<RosterMember> {
        TEAM_NAMES
            .iter()
            .take(count)
            .enumerate()
            .map(|(index, &name)| RosterMember {
                name: name.to_string(),
                email: self.generate_email(name),
                role: if index == 0 { Role::Owner } else { Role::Member },
            })
            .collect()
    }

    /// Generates an email from a name. Whitespace runs become a single `.`.
    fn generate_email(&self, name: &str) -> String {
        let normalized = name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".");

        format!("{normalized}@{}", self.email_domain)
    }
}

impl Default for RosterGenerator {
    fn default() -> Self {
        Self::new()
    }
}
