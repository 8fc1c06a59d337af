use crate::commands::stats::format_stat_cells;
use crate::commands::{load_player_shots, print_json, resolve_season};
use crate::config::Config;
use crate::data_provider::ShotDataProvider;
use crate::formatting::{format_header, format_xg, BoxChars};
use crate::labels::{season_label, shotmap_file_name};
use crate::layout_constants::{COORD_COL_WIDTH, MINUTE_COL_WIDTH, RESULT_COL_WIDTH, XG_COL_WIDTH};
use crate::shot::ShotRecord;
use crate::shotmap::{plan, ShotmapPlan, LEGEND_GOAL, LEGEND_HIGH, LEGEND_LOW, LEGEND_NO_GOAL};
use crate::stats::calculate_with_pitch_length;
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ShotmapFigure {
    pub title: String,
    pub subtitle: String,
    pub output_file: String,
    pub legend: [&'static str; 4],
    pub plan: ShotmapPlan,
}

/// Format one row per shot, in the order the provider listed them
pub fn format_shot_list(shots: &[ShotRecord], box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:>min_width$} {:>coord_width$} {:>coord_width$} {:>xg_width$}  {:<result_width$}\n",
        "Min",
        "X",
        "Y",
        "xG",
        "Result",
        min_width = MINUTE_COL_WIDTH,
        coord_width = COORD_COL_WIDTH,
        xg_width = XG_COL_WIDTH,
        result_width = RESULT_COL_WIDTH
    ));
    output.push_str(&format!(
        "{}\n",
        box_chars
            .horizontal
            .repeat(MINUTE_COL_WIDTH + 2 * COORD_COL_WIDTH + XG_COL_WIDTH + RESULT_COL_WIDTH + 5)
    ));

    for shot in shots {
        let minute = shot.meta.minute.map(|m| m.to_string()).unwrap_or_else(|| "-".to_string());
        let marker = if shot.is_goal() { format!(" {}", box_chars.bullet) } else { String::new() };
        output.push_str(&format!(
            "{:>min_width$} {:>coord_width$.1} {:>coord_width$.1} {:>xg_width$}  {:<result_width$}{}\n",
            minute,
            shot.x,
            shot.y,
            format_xg(shot.xg),
            shot.result.as_str(),
            marker,
            min_width = MINUTE_COL_WIDTH,
            coord_width = COORD_COL_WIDTH,
            xg_width = XG_COL_WIDTH,
            result_width = RESULT_COL_WIDTH
        ));
    }
    output
}

pub fn build_figure(player: &str, season: i32, shots: &[ShotRecord], config: &Config) -> Result<ShotmapFigure> {
    let stats = calculate_with_pitch_length(shots, config.pitch_length_meters)
        .with_context(|| format!("No shots recorded for {} in {}", player, season_label(season)))?;

    Ok(ShotmapFigure {
        title: player.to_string(),
        subtitle: format!("All shots in Premier League in {}", season_label(season)),
        output_file: shotmap_file_name(player, season),
        legend: [LEGEND_LOW, LEGEND_HIGH, LEGEND_GOAL, LEGEND_NO_GOAL],
        plan: plan(shots, &stats, &config.style),
    })
}

pub async fn run(
    client: &dyn ShotDataProvider,
    config: &Config,
    player: &str,
    season: Option<i32>,
    json: bool,
) -> Result<()> {
    let season = resolve_season(season);
    let shots = load_player_shots(client, config, player, season).await?;
    let figure = build_figure(player, season, &shots, config)?;

    if json {
        return print_json(&figure);
    }

    let box_chars = config.box_chars();
    print!("{}", format_header(&figure.title, true, &box_chars));
    println!("{}\n", figure.subtitle);
    print!("{}", format_shot_list(&shots, &box_chars));
    println!();
    print!("{}", format_stat_cells(&figure.plan.cells));
    println!("\n{}", figure.plan.average_distance_label.replace('\n', ": "));
    println!("\nLegend: {}", figure.legend.join(" / "));
    println!("Render target: {}", figure.output_file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shot::ShotResult;

    fn shots() -> Vec<ShotRecord> {
        let mut goal = ShotRecord::new(88.5, 50.0, 0.76, ShotResult::Goal);
        goal.meta.minute = Some(23);
        vec![goal, ShotRecord::new(72.0, 30.0, 0.04, ShotResult::MissedShots)]
    }

    #[test]
    fn test_shot_list_marks_goals() {
        let output = format_shot_list(&shots(), &BoxChars::ascii());
        let rows: Vec<&str> = output.lines().skip(2).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("  23"));
        assert!(rows[0].contains("88.5"));
        assert!(rows[0].ends_with(" *"));
        assert!(rows[1].starts_with("   -"));
        assert!(!rows[1].ends_with(" *"));
    }

    #[test]
    fn test_build_figure() {
        let figure = build_figure("Mohamed Salah", 2024, &shots(), &Config::default()).unwrap();
        assert_eq!(figure.subtitle, "All shots in Premier League in 2024/25");
        assert_eq!(figure.output_file, "mohamed_salah_2024_shotmap.png");
        assert_eq!(figure.plan.markers.len(), 2);
        assert_eq!(figure.legend, [LEGEND_LOW, LEGEND_HIGH, LEGEND_GOAL, LEGEND_NO_GOAL]);
    }

    #[test]
    fn test_build_figure_without_shots_fails() {
        assert!(build_figure("Nobody", 2024, &[], &Config::default()).is_err());
    }
}
