/// Trait for providing shot data, abstracting over on-disk dumps and mock implementations
use crate::error::ProviderError;
use crate::labels::slug;
use crate::shot::{MatchShots, RawShot};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Trait for shot data providers, implemented by FileProvider and MockProvider
#[async_trait]
pub trait ShotDataProvider: Send + Sync {
    /// Every shot a player took in a league season
    async fn player_shots(&self, player: &str, season: i32) -> Result<Vec<RawShot>, ProviderError>;

    /// Both sides' shots for a fixture in a season
    async fn match_shots(&self, home: &str, away: &str, season: i32) -> Result<MatchShots, ProviderError>;
}

/// Reads JSON dumps of provider responses from a directory
///
/// Files are named `{player}_{season}_understat.json` and
/// `{home}_{away}_{season}_understat.json`, names slugged.
pub struct FileProvider {
    data_dir: PathBuf,
}

impl FileProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn player_path(&self, player: &str, season: i32) -> PathBuf {
        self.data_dir
            .join(format!("{}_{}_understat.json", slug(player), season))
    }

    pub fn match_path(&self, home: &str, away: &str, season: i32) -> PathBuf {
        self.data_dir
            .join(format!("{}_{}_{}_understat.json", slug(home), slug(away), season))
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path, what: String) -> Result<T, ProviderError> {
    let display_path = path.display().to_string();
    debug!("Reading shot data from {}", display_path);

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ProviderError::NotFound(format!("{} ({})", what, display_path)));
        }
        Err(source) => return Err(ProviderError::Io { path: display_path, source }),
    };

    serde_json::from_str(&content).map_err(|source| ProviderError::Parse { path: display_path, source })
}

#[async_trait]
impl ShotDataProvider for FileProvider {
    async fn player_shots(&self, player: &str, season: i32) -> Result<Vec<RawShot>, ProviderError> {
        let path = self.player_path(player, season);
        read_json(&path, format!("{} in {}", player, season)).await
    }

    async fn match_shots(&self, home: &str, away: &str, season: i32) -> Result<MatchShots, ProviderError> {
        let path = self.match_path(home, away, season);
        read_json(&path, format!("{} - {} in {}", home, away, season)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("shotzone-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_file_names_are_slugged() {
        let provider = FileProvider::new("/data");
        assert_eq!(
            provider.player_path("Mohamed Salah", 2024),
            PathBuf::from("/data/mohamed_salah_2024_understat.json")
        );
        assert_eq!(
            provider.match_path("West Ham", "Liverpool", 2024),
            PathBuf::from("/data/west_ham_liverpool_2024_understat.json")
        );
    }

    #[tokio::test]
    async fn test_reads_player_dump() {
        let dir = temp_dir("player");
        let shots = vec![RawShot::new("0.9", "0.5", "0.3", "Goal")];
        std::fs::write(
            dir.join("diogo_jota_2024_understat.json"),
            serde_json::to_string(&shots).unwrap(),
        )
        .unwrap();

        let provider = FileProvider::new(&dir);
        let loaded = provider.player_shots("Diogo Jota", 2024).await.unwrap();
        assert_eq!(loaded, shots);
    }

    #[tokio::test]
    async fn test_reads_match_dump() {
        let dir = temp_dir("match");
        std::fs::write(
            dir.join("west_ham_liverpool_2024_understat.json"),
            r#"{"h": [{"X": "0.8", "Y": "0.5", "xG": "0.1", "result": "SavedShot"}], "a": []}"#,
        )
        .unwrap();

        let provider = FileProvider::new(&dir);
        let data = provider.match_shots("West Ham", "Liverpool", 2024).await.unwrap();
        assert_eq!(data.home.len(), 1);
        assert!(data.away.is_empty());
    }

    #[tokio::test]
    async fn test_missing_dump_is_not_found() {
        let provider = FileProvider::new(temp_dir("missing"));
        let err = provider.player_shots("Nobody", 1999).await.unwrap_err();
        assert!(matches!(err, ProviderError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_malformed_dump_is_parse_error() {
        let dir = temp_dir("malformed");
        std::fs::write(dir.join("broken_2024_understat.json"), "{not json").unwrap();
        let provider = FileProvider::new(&dir);
        let err = provider.player_shots("Broken", 2024).await.unwrap_err();
        assert!(matches!(err, ProviderError::Parse { .. }));
    }
}
