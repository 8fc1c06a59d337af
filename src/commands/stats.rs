use crate::commands::{load_player_shots, print_json, resolve_season};
use crate::config::Config;
use crate::data_provider::ShotDataProvider;
use crate::formatting::{format_header, BoxChars};
use crate::labels::season_label;
use crate::layout_constants::STAT_CELL_WIDTH;
use crate::shotmap::{stat_cells, StatCell};
use crate::stats::{calculate_with_pitch_length, ShotStats};
use anyhow::{Context, Result};

/// Format headline cells as a label row over a value row
pub fn format_stat_cells(cells: &[StatCell]) -> String {
    let mut labels = String::new();
    let mut values = String::new();
    for cell in cells {
        labels.push_str(&format!("{:>width$}", cell.label, width = STAT_CELL_WIDTH));
        values.push_str(&format!("{:>width$}", cell.value, width = STAT_CELL_WIDTH));
    }
    format!("{}\n{}\n", labels, values)
}

pub fn format_stats(player: &str, season: i32, stats: &ShotStats, box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push_str(&format_header(
        &format!("{} - {}", player, season_label(season)),
        true,
        box_chars,
    ));
    output.push('\n');
    output.push_str(&format_stat_cells(&stat_cells(stats)));
    output.push('\n');
    output.push_str(&format!(
        "Average distance: {:.1} units ({:.1} meters from goal)\n",
        stats.average_distance_units, stats.average_distance_meters
    ));
    output
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
    let stats = calculate_with_pitch_length(&shots, config.pitch_length_meters)
        .with_context(|| format!("No shots recorded for {} in {}", player, season_label(season)))?;

    if json {
        return print_json(&stats);
    }

    print!("{}", format_stats(player, season, &stats, &config.box_chars()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> ShotStats {
        ShotStats {
            total_shots: 10,
            total_goals: 3,
            total_xg: 2.25,
            xg_per_shot: 0.225,
            average_distance_units: 88.0,
            average_distance_meters: 12.6,
        }
    }

    #[test]
    fn test_format_stat_cells_aligns_columns() {
        let output = format_stat_cells(&stat_cells(&stats()));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "    Shots    Goals       xG  xG/Shot");
        assert_eq!(lines[1], "       10        3     2.25     0.23");
    }

    #[test]
    fn test_format_stats() {
        let output = format_stats("Mohamed Salah", 2024, &stats(), &BoxChars::ascii());
        assert!(output.starts_with("Mohamed Salah - 2024/25\n=======================\n"));
        assert!(output.contains("Average distance: 88.0 units (12.6 meters from goal)"));
    }
}
