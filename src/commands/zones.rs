use crate::config::Config;
use crate::formatting::{format_header, BoxChars};
use crate::layout_constants::{COORD_COL_WIDTH, ZONE_NAME_COL_WIDTH};
use crate::pitch::PitchDimensions;
use crate::zones::{default_zones, validate_tiling, Edge, Zone};
use anyhow::{Context, Result};

fn edge_letter(edge: Edge) -> char {
    match edge {
        Edge::Top => 'T',
        Edge::Bottom => 'B',
        Edge::Left => 'L',
        Edge::Right => 'R',
    }
}

pub fn format_zone_layout(zones: &[Zone], box_chars: &BoxChars) -> String {
    let mut output = String::new();
    let sep = &box_chars.vertical;

    output.push_str(&format!(
        "{:<name_width$} {sep} {:>w$} {:>w$} {:>w$} {:>w$} {sep} Borders\n",
        "Zone",
        "X",
        "Y",
        "Width",
        "Height",
        name_width = ZONE_NAME_COL_WIDTH,
        w = COORD_COL_WIDTH,
        sep = sep
    ));
    output.push_str(&format!(
        "{}\n",
        box_chars.horizontal.repeat(ZONE_NAME_COL_WIDTH + 4 * (COORD_COL_WIDTH + 1) + 13)
    ));

    for zone in zones {
        let borders: String = zone.borders.iter().map(|e| edge_letter(*e)).collect();
        output.push_str(&format!(
            "{:<name_width$} {sep} {:>w$.1} {:>w$.1} {:>w$.1} {:>w$.1} {sep} {}\n",
            zone.name,
            zone.x(),
            zone.y(),
            zone.width(),
            zone.height(),
            borders,
            name_width = ZONE_NAME_COL_WIDTH,
            w = COORD_COL_WIDTH,
            sep = sep
        ));
    }
    output
}

pub fn run(config: &Config, json: bool) -> Result<()> {
    let dims = PitchDimensions::opta();
    let zones = default_zones(&dims);
    validate_tiling(&zones, &dims).context("Zone layout does not tile the pitch")?;

    if json {
        return super::print_json(&zones);
    }

    let box_chars = config.box_chars();
    print!("{}", format_header(&format!("{} zones", zones.len()), true, &box_chars));
    print!("{}", format_zone_layout(&zones, &box_chars));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_layout_lists_every_zone() {
        let zones = default_zones(&PitchDimensions::opta());
        let output = format_zone_layout(&zones, &BoxChars::ascii());
        assert_eq!(output.lines().count(), zones.len() + 2);
    }

    #[test]
    fn test_zone_layout_row() {
        let zones = default_zones(&PitchDimensions::opta());
        let six_yard = zones.iter().find(|z| z.name == "far-box/six-yard").unwrap();
        let output = format_zone_layout(std::slice::from_ref(six_yard), &BoxChars::ascii());
        let row = output.lines().nth(2).unwrap();
        assert!(row.starts_with("far-box/six-yard"));
        assert!(row.contains("   94.2    36.8     5.8    26.4"));
    }
}
