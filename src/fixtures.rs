/// Fixture shot data for testing and development
///
/// This module provides deterministic shot data that can be used for:
/// 1. Unit and integration tests - ensuring tests have predictable data
/// 2. Development mock mode - running the CLI without any data dumps
/// 3. Benchmarks - providing consistent data for performance testing
use crate::shot::{MatchShots, RawShot};

/// Shot locations (fractions of the pitch), xG and outcome for a forward's season
const PLAYER_SEASON: [(&str, &str, &str, &str); 12] = [
    ("0.885", "0.5", "0.76", "Goal"),
    ("0.935", "0.45", "0.42", "Goal"),
    ("0.8", "0.62", "0.08", "SavedShot"),
    ("0.76", "0.3", "0.04", "MissedShots"),
    ("0.9", "0.58", "0.21", "Goal"),
    ("0.72", "0.5", "0.03", "BlockedShot"),
    ("0.96", "0.52", "0.55", "SavedShot"),
    ("0.87", "0.68", "0.11", "ShotOnPost"),
    ("0.83", "0.4", "0.09", "MissedShots"),
    ("0.68", "0.2", "0.02", "MissedShots"),
    ("0.91", "0.35", "0.15", "SavedShot"),
    ("0.99", "0.5", "0.62", "Goal"),
];

/// Create a player's season of shots
pub fn create_player_shots(player: &str, season: i32) -> Vec<RawShot> {
    PLAYER_SEASON
        .iter()
        .enumerate()
        .map(|(i, (x, y, xg, result))| {
            let mut shot = RawShot::new(*x, *y, *xg, result);
            shot.minute = Some(((i * 7 + 5) as f64).into());
            shot.player = Some(player.to_string());
            shot.situation = Some("OpenPlay".to_string());
            shot.shot_type = Some(if i % 3 == 0 { "Head" } else { "LeftFoot" }.to_string());
            shot.date = Some(format!("{}-10-{:02} 15:00:00", season, i + 1));
            shot
        })
        .collect()
}

/// Create both sides' shots for a fixture
pub fn create_match_shots(home: &str, away: &str) -> MatchShots {
    let side = |h_a: &str, rows: &[(&str, &str, &str, &str)]| -> Vec<RawShot> {
        rows.iter()
            .map(|(x, y, xg, result)| {
                let mut shot = RawShot::new(*x, *y, *xg, result);
                shot.h_a = Some(h_a.to_string());
                shot.h_team = Some(home.to_string());
                shot.a_team = Some(away.to_string());
                shot
            })
            .collect()
    };

    MatchShots {
        home: side(
            "h",
            &[
                ("0.82", "0.44", "0.07", "MissedShots"),
                ("0.91", "0.55", "0.33", "Goal"),
                ("0.74", "0.61", "0.03", "BlockedShot"),
            ],
        ),
        away: side(
            "a",
            &[
                ("0.89", "0.48", "0.28", "Goal"),
                ("0.95", "0.51", "0.47", "Goal"),
                ("0.79", "0.27", "0.05", "SavedShot"),
                ("0.86", "0.66", "0.12", "MissedShots"),
            ],
        ),
        ..Default::default()
    }
}
