pub mod matchup;
pub mod shotmap;
pub mod shotzone;
pub mod stats;
pub mod zones;

use crate::cache::{fetch_match_shots_cached, fetch_player_shots_cached};
use crate::config::Config;
use crate::data_provider::ShotDataProvider;
use crate::labels::current_season;
use crate::shot::{normalize, normalize_match, NormalizedMatch, ShotRecord};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

/// Resolve an optional season argument, defaulting to the season in progress
pub fn resolve_season(season: Option<i32>) -> i32 {
    season.unwrap_or_else(current_season)
}

/// Fetch and normalize a player's shots for a season
pub async fn load_player_shots(
    client: &dyn ShotDataProvider,
    config: &Config,
    player: &str,
    season: i32,
) -> Result<Vec<ShotRecord>> {
    let raws = fetch_player_shots_cached(client, player, season)
        .await
        .with_context(|| format!("Failed to fetch shots for {}", player))?;
    let shots = normalize(&raws, config.invalid_records)
        .with_context(|| format!("Invalid shot data for {}", player))?;
    info!("Loaded {} shots for {} ({})", shots.len(), player, season);
    Ok(shots)
}

/// Fetch and normalize both sides of a fixture
pub async fn load_match_shots(
    client: &dyn ShotDataProvider,
    config: &Config,
    home: &str,
    away: &str,
    season: i32,
) -> Result<NormalizedMatch> {
    let raw = fetch_match_shots_cached(client, home, away, season)
        .await
        .with_context(|| format!("Failed to fetch shots for {} - {}", home, away))?;
    let data = normalize_match(&raw, config.invalid_records)
        .with_context(|| format!("Invalid shot data for {} - {}", home, away))?;
    info!(
        "Loaded {} home and {} away shots for {} - {} ({})",
        data.home.len(),
        data.away.len(),
        home,
        away,
        season
    );
    Ok(data)
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_provider::MockProvider;

    #[test]
    fn test_resolve_season_prefers_argument() {
        assert_eq!(resolve_season(Some(2019)), 2019);
        assert_eq!(resolve_season(None), current_season());
    }

    #[tokio::test]
    async fn test_load_player_shots_normalizes() {
        let client = MockProvider::new();
        let shots = load_player_shots(&client, &Config::default(), "Bukayo Saka", 2021)
            .await
            .unwrap();
        assert!(!shots.is_empty());
        assert!(shots.iter().all(|s| (0.0..=100.0).contains(&s.x)));
    }

    #[tokio::test]
    async fn test_load_match_shots_normalizes_both_sides() {
        let client = MockProvider::new();
        let data = load_match_shots(&client, &Config::default(), "Fulham", "Brentford", 2021)
            .await
            .unwrap();
        assert_eq!(data.home_team.as_deref(), Some("Fulham"));
        assert_eq!(data.away_team.as_deref(), Some("Brentford"));
        assert_eq!(data.away.len(), 4);
    }
}
