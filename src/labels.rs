//! Titles and file names shared by the commands.

use chrono::{Datelike, NaiveDate};

/// Month in which a new league season is considered to have started
const SEASON_START_MONTH: u32 = 8;

/// Label a season by its starting year, e.g. 2024 -> "2024/25"
pub fn season_label(year: i32) -> String {
    format!("{}/{:02}", year, (year + 1).rem_euclid(100))
}

/// Starting year of the season that `date` falls in
pub fn season_for_date(date: NaiveDate) -> i32 {
    if date.month() >= SEASON_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    }
}

/// Starting year of the season in progress today
pub fn current_season() -> i32 {
    season_for_date(chrono::Local::now().date_naive())
}

/// Lowercase a name and replace spaces with underscores
pub fn slug(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Image file the renderer should write a player's shotzone to
pub fn shotzone_file_name(player: &str, season: i32) -> String {
    format!("{}_{}_shotzone.png", slug(player), season)
}

/// Image file the renderer should write a player's shotmap to
pub fn shotmap_file_name(player: &str, season: i32) -> String {
    format!("{}_{}_shotmap.png", slug(player), season)
}

/// Image file the renderer should write a match shotmap to
pub fn match_shotmap_file_name(home: &str, away: &str, season: i32) -> String {
    format!("{}_{}_{}_shotmap.png", slug(home), slug(away), season)
}
