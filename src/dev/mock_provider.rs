/// Mock shot data provider for development and testing
use crate::data_provider::ShotDataProvider;
use crate::error::ProviderError;
use crate::shot::{MatchShots, RawShot};
use async_trait::async_trait;
use tracing::info;

use crate::fixtures;

/// Mock provider that returns fixture data instead of reading dumps
pub struct MockProvider;

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        info!("Creating MockProvider for development mode");
        Self
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShotDataProvider for MockProvider {
    async fn player_shots(&self, player: &str, season: i32) -> Result<Vec<RawShot>, ProviderError> {
        info!("MockProvider: Returning mock shots for {} in {}", player, season);
        Ok(fixtures::create_player_shots(player, season))
    }

    async fn match_shots(&self, home: &str, away: &str, season: i32) -> Result<MatchShots, ProviderError> {
        info!(
            "MockProvider: Returning mock match shots for {} - {} in {}",
            home, away, season
        );
        Ok(fixtures::create_match_shots(home, away))
    }
}
