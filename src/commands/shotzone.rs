use crate::aggregate::{aggregate, Orientation, ZoneFill, ZoneReport};
use crate::commands::stats::format_stat_cells;
use crate::commands::{load_player_shots, print_json, resolve_season};
use crate::config::Config;
use crate::data_provider::ShotDataProvider;
use crate::formatting::{format_header, format_xg, BoxChars};
use crate::labels::{season_label, shotzone_file_name};
use crate::layout_constants::{
    PERCENT_COL_WIDTH, SHOTS_COL_WIDTH, XG_COL_WIDTH, ZONE_NAME_COL_WIDTH, ZONE_TABLE_WIDTH,
};
use crate::pitch::PitchDimensions;
use crate::shot::ShotRecord;
use crate::shotmap::stat_cells;
use crate::stats::{calculate_with_pitch_length, ShotStats};
use crate::zones::{default_zones, Segment};
use anyhow::{Context, Result};
use serde::Serialize;

/// Everything the renderer needs to draw a shotzone figure
#[derive(Debug, Serialize)]
pub struct ShotzoneFigure {
    pub title: String,
    pub subtitle: String,
    pub output_file: String,
    pub stats: ShotStats,
    pub report: ZoneReport,
    /// Fill rectangles in screen axes; swapped from pitch axes on a vertical pitch
    pub fills: Vec<ZoneFill>,
    /// Divider lines in pitch axes (x along the length, y across the width),
    /// like the zones themselves and shotmap markers. Not swapped for orientation.
    pub borders: Vec<Segment>,
}

pub fn subtitle(season: i32) -> String {
    format!("All shots in the Premier League in {} season", season_label(season))
}

/// Build the figure description from already-normalized shots
pub fn build_figure(
    player: &str,
    season: i32,
    shots: &[ShotRecord],
    orientation: Orientation,
    config: &Config,
) -> Result<ShotzoneFigure> {
    let stats = calculate_with_pitch_length(shots, config.pitch_length_meters)
        .with_context(|| format!("No shots recorded for {} in {}", player, season_label(season)))?;
    let report = aggregate(shots, default_zones(&PitchDimensions::opta()), orientation)?;
    let fills = report.fill_plan(&config.style);
    let borders = report.zones.iter().flat_map(|z| z.border_segments()).collect();

    Ok(ShotzoneFigure {
        title: player.to_string(),
        subtitle: subtitle(season),
        output_file: shotzone_file_name(player, season),
        stats,
        report,
        fills,
        borders,
    })
}

pub fn format_zone_table(report: &ZoneReport, box_chars: &BoxChars) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<name_width$} {:>shots_width$} {:>pct_width$} {:>xg_width$}\n",
        "Zone",
        "Shots",
        "%",
        "xG",
        name_width = ZONE_NAME_COL_WIDTH,
        shots_width = SHOTS_COL_WIDTH,
        pct_width = PERCENT_COL_WIDTH,
        xg_width = XG_COL_WIDTH
    ));
    output.push_str(&format!("{}\n", box_chars.horizontal.repeat(ZONE_TABLE_WIDTH)));

    for zone in report.ranked() {
        output.push_str(&format!(
            "{:<name_width$} {:>shots_width$} {:>pct_width$.2} {:>xg_width$}\n",
            zone.name,
            zone.stats.shots,
            zone.stats.percentage,
            format_xg(zone.stats.xg),
            name_width = ZONE_NAME_COL_WIDTH,
            shots_width = SHOTS_COL_WIDTH,
            pct_width = PERCENT_COL_WIDTH,
            xg_width = XG_COL_WIDTH
        ));
    }

    if report.unclassified > 0 {
        output.push_str(&format!("\nOutside all zones: {}\n", report.unclassified));
    }
    output
}

pub fn format_figure(figure: &ShotzoneFigure, box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push_str(&format_header(&figure.title, true, box_chars));
    output.push_str(&format!("{}\n\n", figure.subtitle));
    output.push_str(&format_zone_table(&figure.report, box_chars));
    output.push('\n');
    output.push_str(&format_stat_cells(&stat_cells(&figure.stats)));
    output.push_str(&format!("\nRender target: {}\n", figure.output_file));
    output
}

pub async fn run(
    client: &dyn ShotDataProvider,
    config: &Config,
    player: &str,
    season: Option<i32>,
    orientation: Orientation,
    json: bool,
) -> Result<()> {
    let season = resolve_season(season);
    let shots = load_player_shots(client, config, player, season).await?;
    let figure = build_figure(player, season, &shots, orientation, config)?;

    if json {
        return print_json(&figure);
    }

    print!("{}", format_figure(&figure, &config.box_chars()));
    Ok(())
}
