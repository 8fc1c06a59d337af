use crate::error::ShotError;
use crate::shot::ShotRecord;
use serde::Serialize;

/// Real-world pitch length used to convert normalized distances to meters
pub const DEFAULT_PITCH_LENGTH_METERS: f64 = 105.0;

/// Aggregate figures over a set of shots
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotStats {
    pub total_shots: usize,
    pub total_goals: usize,
    #[serde(rename = "total_xG")]
    pub total_xg: f64,
    #[serde(rename = "xG_per_shot")]
    pub xg_per_shot: f64,
    /// Mean x coordinate, in normalized pitch units
    pub average_distance_units: f64,
    /// Mean distance from the goal line, in meters
    pub average_distance_meters: f64,
}

/// Compute shot statistics with the default 105 m pitch
pub fn calculate(shots: &[ShotRecord]) -> Result<ShotStats, ShotError> {
    calculate_with_pitch_length(shots, DEFAULT_PITCH_LENGTH_METERS)
}

/// Compute shot statistics, converting distances with `pitch_length_m`
pub fn calculate_with_pitch_length(shots: &[ShotRecord], pitch_length_m: f64) -> Result<ShotStats, ShotError> {
    if shots.is_empty() {
        return Err(ShotError::EmptyDataset);
    }

    let total_shots = shots.len();
    let total_goals = shots.iter().filter(|s| s.is_goal()).count();
    let total_xg: f64 = shots.iter().map(|s| s.xg).sum();
    let mean_x = shots.iter().map(|s| s.x).sum::<f64>() / total_shots as f64;
    let mean_meters = shots.iter().map(|s| s.x * pitch_length_m / 100.0).sum::<f64>() / total_shots as f64;

    Ok(ShotStats {
        total_shots,
        total_goals,
        total_xg,
        xg_per_shot: total_xg / total_shots as f64,
        average_distance_units: mean_x,
        average_distance_meters: pitch_length_m - mean_meters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shot::ShotResult;

    fn sample_shots() -> Vec<ShotRecord> {
        let xgs = [0.1, 0.2, 0.05, 0.3, 0.15, 0.6, 0.25, 0.4, 0.12, 0.08];
        xgs.iter()
            .enumerate()
            .map(|(i, xg)| {
                let result = if i % 3 == 0 && i < 9 { ShotResult::Goal } else { ShotResult::MissedShots };
                ShotRecord::new(80.0 + i as f64, 50.0, *xg, result)
            })
            .collect()
    }

    #[test]
    fn test_ten_shot_summary() {
        let stats = calculate(&sample_shots()).unwrap();
        assert_eq!(stats.total_shots, 10);
        assert_eq!(stats.total_goals, 3);
        assert!((stats.total_xg - 2.25).abs() < 1e-9);
        assert!((stats.xg_per_shot - 0.225).abs() < 1e-9);
    }

    #[test]
    fn test_xg_per_shot_is_total_over_count() {
        let stats = calculate(&sample_shots()).unwrap();
        assert!((stats.xg_per_shot - stats.total_xg / stats.total_shots as f64).abs() < 1e-9);
    }

    #[test]
    fn test_average_distance() {
        let shots = vec![
            ShotRecord::new(90.0, 50.0, 0.1, ShotResult::Goal),
            ShotRecord::new(80.0, 50.0, 0.1, ShotResult::SavedShot),
        ];
        let stats = calculate(&shots).unwrap();
        assert!((stats.average_distance_units - 85.0).abs() < 1e-9);
        // 105 - 85% of 105
        assert!((stats.average_distance_meters - 15.75).abs() < 1e-9);
    }

    #[test]
    fn test_custom_pitch_length() {
        let shots = vec![ShotRecord::new(90.0, 50.0, 0.1, ShotResult::Goal)];
        let stats = calculate_with_pitch_length(&shots, 100.0).unwrap();
        assert!((stats.average_distance_meters - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_is_error() {
        assert_eq!(calculate(&[]), Err(ShotError::EmptyDataset));
    }

    #[test]
    fn test_own_goal_is_not_counted_as_goal() {
        let shots = vec![
            ShotRecord::new(99.0, 50.0, 0.0, ShotResult::OwnGoal),
            ShotRecord::new(90.0, 50.0, 0.3, ShotResult::Goal),
        ];
        assert_eq!(calculate(&shots).unwrap().total_goals, 1);
    }
}
