//! Drawing instructions for shotmaps.
//!
//! A shotmap scatters every shot on the pitch with a marker sized by xG and
//! filled by outcome. Player shotmaps use the attacking half on a vertical
//! pitch; match shotmaps use the full horizontal pitch with the home side
//! mirrored so each team attacks its own goal.

use crate::config::{Rgb, StyleConfig};
use crate::formatting::format_xg;
use crate::pitch::PitchDimensions;
use crate::shot::{NormalizedMatch, ShotRecord};
use crate::stats::ShotStats;
use serde::Serialize;

/// Marker area per unit of xG
pub const MARKER_SCALE: f64 = 300.0;

/// Legend text at either end of the marker-size scale
pub const LEGEND_LOW: &str = "Low Quality Chance";
pub const LEGEND_HIGH: &str = "High Quality Chance";

/// Legend text for the two marker fills
pub const LEGEND_GOAL: &str = "Goal";
pub const LEGEND_NO_GOAL: &str = "No Goal";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub fill: Rgb,
    pub goal: bool,
}

/// A headline figure printed under the pitch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCell {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotmapPlan {
    pub markers: Vec<Marker>,
    /// Mean shot x, drawn as a line from the goal
    pub average_distance_units: f64,
    pub average_distance_label: String,
    pub cells: Vec<StatCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchShotmapPlan {
    pub home_team: String,
    pub away_team: String,
    pub markers: Vec<Marker>,
    pub home_cells: Vec<StatCell>,
    pub away_cells: Vec<StatCell>,
}

fn marker(shot: &ShotRecord, x: f64, style: &StyleConfig) -> Marker {
    let goal = shot.is_goal();
    Marker {
        x,
        y: shot.y,
        size: MARKER_SCALE * shot.xg,
        fill: if goal { style.accent } else { style.background },
        goal,
    }
}

/// Shots / Goals / xG / xG per shot
pub fn stat_cells(stats: &ShotStats) -> Vec<StatCell> {
    vec![
        StatCell { label: "Shots", value: stats.total_shots.to_string() },
        StatCell { label: "Goals", value: stats.total_goals.to_string() },
        StatCell { label: "xG", value: format_xg(stats.total_xg) },
        StatCell { label: "xG/Shot", value: format_xg(stats.xg_per_shot) },
    ]
}

/// Same cells without the goal count, used side by side for a match
fn match_cells(stats: &ShotStats) -> Vec<StatCell> {
    stat_cells(stats).into_iter().filter(|c| c.label != "Goals").collect()
}

/// Plan a single player's shotmap
pub fn plan(shots: &[ShotRecord], stats: &ShotStats, style: &StyleConfig) -> ShotmapPlan {
    ShotmapPlan {
        markers: shots.iter().map(|s| marker(s, s.x, style)).collect(),
        average_distance_units: stats.average_distance_units,
        average_distance_label: format!("Average Distance\n{:.1} meters", stats.average_distance_meters),
        cells: stat_cells(stats),
    }
}

/// Plan a two-team shotmap; home shots are mirrored along the pitch length
pub fn plan_match(
    data: &NormalizedMatch,
    home_stats: &ShotStats,
    away_stats: &ShotStats,
    dims: &PitchDimensions,
    style: &StyleConfig,
) -> MatchShotmapPlan {
    let home = data.home.iter().map(|s| marker(s, dims.length - s.x, style));
    let away = data.away.iter().map(|s| marker(s, s.x, style));

    MatchShotmapPlan {
        home_team: data.home_team.clone().unwrap_or_else(|| "Home".to_string()),
        away_team: data.away_team.clone().unwrap_or_else(|| "Away".to_string()),
        markers: home.chain(away).collect(),
        home_cells: match_cells(home_stats),
        away_cells: match_cells(away_stats),
    }
}
