use crate::commands::stats::format_stat_cells;
use crate::commands::{load_match_shots, print_json, resolve_season};
use crate::config::Config;
use crate::data_provider::ShotDataProvider;
use crate::formatting::{format_header, BoxChars};
use crate::labels::{match_shotmap_file_name, season_label};
use crate::pitch::PitchDimensions;
use crate::shot::{NormalizedMatch, ShotRecord};
use crate::shotmap::{plan_match, MatchShotmapPlan};
use crate::stats::calculate_with_pitch_length;
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MatchFigure {
    pub title: String,
    pub subtitle: String,
    pub output_file: String,
    pub plan: MatchShotmapPlan,
}

/// Final score, preferring the provider's totals over counting scoring records
fn goals(data: &NormalizedMatch) -> (u32, u32) {
    let count = |shots: &[ShotRecord]| shots.iter().filter(|s| s.result.scores()).count() as u32;
    (
        data.home_goals.unwrap_or_else(|| count(&data.home)),
        data.away_goals.unwrap_or_else(|| count(&data.away)),
    )
}

pub fn build_figure(
    home: &str,
    away: &str,
    season: i32,
    data: &NormalizedMatch,
    config: &Config,
) -> Result<MatchFigure> {
    let home_stats = calculate_with_pitch_length(&data.home, config.pitch_length_meters)
        .with_context(|| format!("No shots recorded for {}", home))?;
    let away_stats = calculate_with_pitch_length(&data.away, config.pitch_length_meters)
        .with_context(|| format!("No shots recorded for {}", away))?;
    let (home_goals, away_goals) = goals(data);

    Ok(MatchFigure {
        title: format!("{} {} - {} {}", home, home_goals, away_goals, away),
        subtitle: format!("All shots in {} - {} fixture in {}", home, away, season_label(season)),
        output_file: match_shotmap_file_name(home, away, season),
        plan: plan_match(data, &home_stats, &away_stats, &PitchDimensions::opta(), &config.style),
    })
}

pub fn format_figure(figure: &MatchFigure, box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push_str(&format_header(&figure.title, true, box_chars));
    output.push_str(&format!("{}\n\n", figure.subtitle));
    output.push_str(&format_header(&figure.plan.home_team, false, box_chars));
    output.push_str(&format_stat_cells(&figure.plan.home_cells));
    output.push('\n');
    output.push_str(&format_header(&figure.plan.away_team, false, box_chars));
    output.push_str(&format_stat_cells(&figure.plan.away_cells));
    output.push_str(&format!("\nRender target: {}\n", figure.output_file));
    output
}

pub async fn run(
    client: &dyn ShotDataProvider,
    config: &Config,
    home: &str,
    away: &str,
    season: Option<i32>,
    json: bool,
) -> Result<()> {
    let season = resolve_season(season);
    let data = load_match_shots(client, config, home, away, season).await?;
    let figure = build_figure(home, away, season, &data, config)?;

    if json {
        return print_json(&figure);
    }

    print!("{}", format_figure(&figure, &config.box_chars()));
    Ok(())
}
