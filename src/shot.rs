//! Raw provider shot records and their normalized form.
//!
//! The provider reports pitch locations as fractions of the pitch (0.0–1.0),
//! sometimes as numbers and sometimes as numeric strings. Everything
//! downstream works in the 0–100 coordinate system of the rendering surface.

use crate::error::ShotError;
use phf::phf_map;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use tracing::{debug, warn};

/// Factor applied to provider fractions to reach rendering coordinates
pub const COORDINATE_SCALE: f64 = 100.0;

/// A numeric field as the provider sends it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    fn to_f64(&self) -> Result<f64, String> {
        let value = match self {
            RawNumber::Number(n) => *n,
            RawNumber::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("is not numeric ('{}')", s))?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(format!("is not finite ({})", value))
        }
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

/// One shot as returned by the data provider, before validation
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawShot {
    #[serde(rename = "X")]
    pub x: Option<RawNumber>,
    #[serde(rename = "Y")]
    pub y: Option<RawNumber>,
    #[serde(rename = "xG")]
    pub xg: Option<RawNumber>,
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation: Option<String>,
    #[serde(rename = "shotType", default, skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl RawShot {
    /// Build a raw shot with just the required fields
    pub fn new(x: impl Into<RawNumber>, y: impl Into<RawNumber>, xg: impl Into<RawNumber>, result: &str) -> Self {
        RawShot {
            x: Some(x.into()),
            y: Some(y.into()),
            xg: Some(xg.into()),
            result: Some(result.to_string()),
            ..Default::default()
        }
    }
}

/// Both sides of a match as the provider groups them
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MatchShots {
    #[serde(rename = "h", default)]
    pub home: Vec<RawShot>,
    #[serde(rename = "a", default)]
    pub away: Vec<RawShot>,
    /// Final score as the provider reports it, own goals included
    #[serde(rename = "h_goals", default, skip_serializing_if = "Option::is_none")]
    pub home_goals: Option<RawNumber>,
    #[serde(rename = "a_goals", default, skip_serializing_if = "Option::is_none")]
    pub away_goals: Option<RawNumber>,
}

/// Outcome of a shot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShotResult {
    Goal,
    MissedShots,
    SavedShot,
    BlockedShot,
    ShotOnPost,
    OwnGoal,
    Other(String),
}

static RESULT_CODES: phf::Map<&'static str, ShotResult> = phf_map! {
    "Goal" => ShotResult::Goal,
    "MissedShots" => ShotResult::MissedShots,
    "SavedShot" => ShotResult::SavedShot,
    "BlockedShot" => ShotResult::BlockedShot,
    "ShotOnPost" => ShotResult::ShotOnPost,
    "OwnGoal" => ShotResult::OwnGoal,
};

impl ShotResult {
    /// Map a provider result code; unknown codes are kept verbatim
    pub fn from_code(code: &str) -> Self {
        RESULT_CODES
            .get(code)
            .cloned()
            .unwrap_or_else(|| ShotResult::Other(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ShotResult::Goal => "Goal",
            ShotResult::MissedShots => "MissedShots",
            ShotResult::SavedShot => "SavedShot",
            ShotResult::BlockedShot => "BlockedShot",
            ShotResult::ShotOnPost => "ShotOnPost",
            ShotResult::OwnGoal => "OwnGoal",
            ShotResult::Other(code) => code,
        }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, ShotResult::Goal)
    }

    /// Whether the record changed the score for the side it is listed under
    pub fn scores(&self) -> bool {
        matches!(self, ShotResult::Goal | ShotResult::OwnGoal)
    }
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ShotResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Optional descriptive fields carried along from the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShotMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A validated shot in rendering coordinates (0–100 on both axes)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotRecord {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "xG")]
    pub xg: f64,
    pub result: ShotResult,
    #[serde(flatten)]
    pub meta: ShotMeta,
}

impl ShotRecord {
    /// Build a record that is already in rendering coordinates
    pub fn new(x: f64, y: f64, xg: f64, result: ShotResult) -> Self {
        ShotRecord {
            x,
            y,
            xg,
            result,
            meta: ShotMeta::default(),
        }
    }

    pub fn is_goal(&self) -> bool {
        self.result.is_goal()
    }
}

/// What to do with a record that fails validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidRecordPolicy {
    /// Stop at the first invalid record
    #[default]
    Abort,
    /// Drop invalid records and keep going
    Skip,
}

fn required_number(index: usize, field: &'static str, value: &Option<RawNumber>) -> Result<f64, ShotError> {
    let raw = value.as_ref().ok_or_else(|| ShotError::Validation {
        index,
        field,
        reason: "is missing".to_string(),
    })?;
    raw.to_f64()
        .map_err(|reason| ShotError::Validation { index, field, reason })
}

fn scaled(index: usize, field: &'static str, value: f64) -> Result<f64, ShotError> {
    let scaled = value * COORDINATE_SCALE;
    if scaled.is_finite() {
        Ok(scaled)
    } else {
        Err(ShotError::Validation {
            index,
            field,
            reason: format!("overflows when scaled ({})", value),
        })
    }
}

/// Validate a single raw record and scale it to rendering coordinates
pub fn normalize_one(index: usize, raw: &RawShot) -> Result<ShotRecord, ShotError> {
    let x = required_number(index, "X", &raw.x)?;
    let y = required_number(index, "Y", &raw.y)?;
    let xg = required_number(index, "xG", &raw.xg)?;
    let result = raw.result.as_deref().ok_or_else(|| ShotError::Validation {
        index,
        field: "result",
        reason: "is missing".to_string(),
    })?;

    let minute = raw
        .minute
        .as_ref()
        .and_then(|m| m.to_f64().ok())
        .filter(|m| *m >= 0.0)
        .map(|m| m as u32);

    let x = scaled(index, "X", x)?;
    let y = scaled(index, "Y", y)?;

    Ok(ShotRecord {
        x,
        y,
        xg,
        result: ShotResult::from_code(result),
        meta: ShotMeta {
            minute,
            player: raw.player.clone(),
            situation: raw.situation.clone(),
            shot_type: raw.shot_type.clone(),
            side: raw.h_a.clone(),
            home_team: raw.h_team.clone(),
            away_team: raw.a_team.clone(),
            date: raw.date.clone(),
        },
    })
}

/// Normalize a batch of raw records according to `policy`
pub fn normalize(raws: &[RawShot], policy: InvalidRecordPolicy) -> Result<Vec<ShotRecord>, ShotError> {
    let mut shots = Vec::with_capacity(raws.len());
    for (index, raw) in raws.iter().enumerate() {
        match normalize_one(index, raw) {
            Ok(shot) => shots.push(shot),
            Err(e) => match policy {
                InvalidRecordPolicy::Abort => return Err(e),
                InvalidRecordPolicy::Skip => warn!("Skipping shot record: {}", e),
            },
        }
    }
    debug!("Normalized {} of {} shot records", shots.len(), raws.len());
    Ok(shots)
}

/// Normalized shots for both sides of a match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMatch {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    /// Provider-reported score, when the payload carries one
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
    pub home: Vec<ShotRecord>,
    pub away: Vec<ShotRecord>,
}

/// Normalize both sides of a match; team names come from the first home record
pub fn normalize_match(data: &MatchShots, policy: InvalidRecordPolicy) -> Result<NormalizedMatch, ShotError> {
    let home = normalize(&data.home, policy)?;
    let away = normalize(&data.away, policy)?;
    let first = data.home.first().or_else(|| data.away.first());

    let goals = |value: &Option<RawNumber>| {
        value
            .as_ref()
            .and_then(|g| g.to_f64().ok())
            .filter(|g| *g >= 0.0)
            .map(|g| g as u32)
    };

    Ok(NormalizedMatch {
        home_team: first.and_then(|s| s.h_team.clone()),
        away_team: first.and_then(|s| s.a_team.clone()),
        home_goals: goals(&data.home_goals),
        away_goals: goals(&data.away_goals),
        home,
        away,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scales_string_coordinates() {
        let raw = RawShot::new("0.885", "0.5", "0.76", "Goal");
        let shots = normalize(&[raw], InvalidRecordPolicy::Abort).unwrap();
        assert_eq!(shots.len(), 1);
        assert!((shots[0].x - 88.5).abs() < 1e-9);
        assert!((shots[0].y - 50.0).abs() < 1e-9);
        assert!((shots[0].xg - 0.76).abs() < 1e-9);
        assert_eq!(shots[0].result, ShotResult::Goal);
    }

    #[test]
    fn test_normalize_accepts_numbers() {
        let raw = RawShot::new(0.9, 0.4, 0.1, "SavedShot");
        let shots = normalize(&[raw], InvalidRecordPolicy::Abort).unwrap();
        assert!((shots[0].x - 90.0).abs() < 1e-9);
        assert!((shots[0].y - 40.0).abs() < 1e-9);
        assert_eq!(shots[0].result, ShotResult::SavedShot);
    }

    #[test]
    fn test_normalized_coordinates_stay_in_range() {
        let raws: Vec<RawShot> = (0..=20)
            .map(|i| {
                let f = i as f64 / 20.0;
                RawShot::new(f, 1.0 - f, 0.05, "MissedShots")
            })
            .collect();
        let shots = normalize(&raws, InvalidRecordPolicy::Abort).unwrap();
        for shot in shots {
            assert!((0.0..=100.0).contains(&shot.x));
            assert!((0.0..=100.0).contains(&shot.y));
        }
    }

    #[test]
    fn test_missing_field_is_validation_error() {
        let mut raw = RawShot::new(0.9, 0.5, 0.1, "Goal");
        raw.xg = None;
        let err = normalize(&[raw], InvalidRecordPolicy::Abort).unwrap_err();
        assert_eq!(
            err,
            ShotError::Validation {
                index: 0,
                field: "xG",
                reason: "is missing".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_field_is_validation_error() {
        let raws = vec![
            RawShot::new(0.9, 0.5, 0.1, "Goal"),
            RawShot::new("far post", 0.5, 0.1, "Goal"),
        ];
        match normalize(&raws, InvalidRecordPolicy::Abort) {
            Err(ShotError::Validation { index, field, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "X");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_result_is_validation_error() {
        let mut raw = RawShot::new(0.9, 0.5, 0.1, "Goal");
        raw.result = None;
        assert!(matches!(
            normalize(&[raw], InvalidRecordPolicy::Abort),
            Err(ShotError::Validation { field: "result", .. })
        ));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let raw = RawShot::new("NaN", 0.5, 0.1, "Goal");
        assert!(normalize(&[raw], InvalidRecordPolicy::Abort).is_err());
    }

    #[test]
    fn test_value_overflowing_when_scaled_rejected() {
        let raw = RawShot::new("1e307", 0.5, 0.1, "Goal");
        let err = normalize(&[raw], InvalidRecordPolicy::Abort).unwrap_err();
        assert!(matches!(err, ShotError::Validation { field: "X", .. }));

        let raws = vec![RawShot::new(0.9, "-1e308", 0.1, "Goal"), RawShot::new(0.8, 0.4, 0.2, "Goal")];
        let shots = normalize(&raws, InvalidRecordPolicy::Skip).unwrap();
        assert_eq!(shots.len(), 1);
        assert!(shots[0].x.is_finite());
    }

    #[test]
    fn test_normalize_match_reads_provider_score() {
        let json = r#"{"h": [{"X": "0.9", "Y": "0.5", "xG": "0.3", "result": "Goal"}],
                       "a": [], "h_goals": "2", "a_goals": 1}"#;
        let data: MatchShots = serde_json::from_str(json).unwrap();
        let normalized = normalize_match(&data, InvalidRecordPolicy::Abort).unwrap();
        assert_eq!(normalized.home_goals, Some(2));
        assert_eq!(normalized.away_goals, Some(1));

        let without: MatchShots = serde_json::from_str(r#"{"h": [], "a": []}"#).unwrap();
        let normalized = normalize_match(&without, InvalidRecordPolicy::Abort).unwrap();
        assert_eq!(normalized.home_goals, None);
    }

    #[test]
    fn test_skip_policy_drops_invalid_records() {
        let mut broken = RawShot::new(0.9, 0.5, 0.1, "Goal");
        broken.y = None;
        let raws = vec![
            RawShot::new(0.9, 0.5, 0.1, "Goal"),
            broken,
            RawShot::new(0.8, 0.3, 0.05, "BlockedShot"),
        ];
        let shots = normalize(&raws, InvalidRecordPolicy::Skip).unwrap();
        assert_eq!(shots.len(), 2);
        assert_eq!(shots[1].result, ShotResult::BlockedShot);
    }

    #[test]
    fn test_result_codes() {
        assert_eq!(ShotResult::from_code("Goal"), ShotResult::Goal);
        assert_eq!(ShotResult::from_code("ShotOnPost"), ShotResult::ShotOnPost);
        assert_eq!(
            ShotResult::from_code("Deflected"),
            ShotResult::Other("Deflected".to_string())
        );
        assert_eq!(ShotResult::from_code("Deflected").as_str(), "Deflected");
        assert!(!ShotResult::OwnGoal.is_goal());
        assert!(ShotResult::OwnGoal.scores());
        assert!(!ShotResult::ShotOnPost.scores());
    }

    #[test]
    fn test_deserialize_provider_json() {
        let json = r#"[
            {"id": "1", "minute": "23", "result": "Goal", "X": "0.9", "Y": "0.52",
             "xG": "0.45", "player": "Mohamed Salah", "h_a": "h", "situation": "OpenPlay",
             "shotType": "LeftFoot", "h_team": "Liverpool", "a_team": "Chelsea"}
        ]"#;
        let raws: Vec<RawShot> = serde_json::from_str(json).unwrap();
        let shots = normalize(&raws, InvalidRecordPolicy::Abort).unwrap();
        assert_eq!(shots[0].meta.minute, Some(23));
        assert_eq!(shots[0].meta.player.as_deref(), Some("Mohamed Salah"));
        assert_eq!(shots[0].meta.shot_type.as_deref(), Some("LeftFoot"));
        assert_eq!(shots[0].meta.side.as_deref(), Some("h"));
    }

    #[test]
    fn test_normalize_match_takes_team_names_from_home_side() {
        let mut home_shot = RawShot::new(0.9, 0.5, 0.2, "Goal");
        home_shot.h_team = Some("West Ham".to_string());
        home_shot.a_team = Some("Liverpool".to_string());
        let data = MatchShots {
            home: vec![home_shot],
            away: vec![RawShot::new(0.8, 0.4, 0.1, "SavedShot")],
            ..Default::default()
        };
        let normalized = normalize_match(&data, InvalidRecordPolicy::Abort).unwrap();
        assert_eq!(normalized.home_team.as_deref(), Some("West Ham"));
        assert_eq!(normalized.away_team.as_deref(), Some("Liverpool"));
        assert_eq!(normalized.home.len(), 1);
        assert_eq!(normalized.away.len(), 1);
    }
}
