//! Prints one synthetic leaderboard as JSON.
//!
//! Run with:
//! ```
//! LEADERBOARD_TIME_FILTER=30d LEADERBOARD_SEED=12345 cargo run -p mock-data --bin generate-leaderboard
//! ```
//!
//! Environment:
//! - `LEADERBOARD_TIME_FILTER`: `7d`, `30d`, `90d` or `all` (default `7d`)
//! - `LEADERBOARD_SEED`: makes the metrics reproducible
//! - `LEADERBOARD_CONFIG`: path to a JSON [`LeaderboardConfig`]
//! - `LEADERBOARD_SORT_FIELD` / `LEADERBOARD_SORT_DIRECTION`: display order

use anyhow::Context;
use leaderboard::{SortConfig, SortDirection, SortField};
use mock_data::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let time_filter = std::env::var("LEADERBOARD_TIME_FILTER")
        .map(|value| TimeFilter::parse_or_default(&value))
        .unwrap_or_default();

    let mut builder = LeaderboardBuilder::new();
    if let Ok(path) = std::env::var("LEADERBOARD_CONFIG") {
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {path}"))?;
        let config: LeaderboardConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {path}"))?;
        builder = builder.with_config(config)?;
        tracing::info!("Loaded config from {path}");
    }

    let mut rng = match std::env::var("LEADERBOARD_SEED") {
        Ok(seed) => {
            let seed: u64 = seed
                .parse()
                .with_context(|| format!("Invalid LEADERBOARD_SEED '{seed}'"))?;
            StdRng::seed_from_u64(seed)
        }
        Err(_) => StdRng::from_entropy(),
    };

    let mut response = builder.build(time_filter, &mut rng);

    if let Ok(field) = std::env::var("LEADERBOARD_SORT_FIELD") {
        let direction = match std::env::var("LEADERBOARD_SORT_DIRECTION") {
            Ok(direction) => direction.parse::<SortDirection>()?,
            Err(_) => SortDirection::default(),
        };
        let config = SortConfig::new(field.parse::<SortField>()?, direction);
        response = response.sorted_by(config);
    }

    tracing::info!("Leaderboard generated!");
    tracing::info!("  Time filter: {time_filter}");
    tracing::info!("  Members: {}", response.total_members);
    if let Some(leader) = response.entries.iter().find(|e| e.rank == 1) {
        tracing::info!("  Leader: {} ({:.1})", leader.name, leader.activity_score);
    }

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
