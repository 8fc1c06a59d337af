//! Classification of shots into zones and per-zone aggregation.

use crate::config::{Rgb, StyleConfig};
use crate::error::ShotError;
use crate::shot::ShotRecord;
use crate::zones::Zone;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the pitch is laid out on the rendering surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Goals at top and bottom; shot x is tested against zone x
    #[default]
    Vertical,
    /// Goals left and right; shot coordinates are swapped before testing
    Horizontal,
}

impl Orientation {
    /// Shot coordinates expressed in zone axes
    pub fn to_zone_axes(self, x: f64, y: f64) -> (f64, f64) {
        match self {
            Orientation::Vertical => (x, y),
            Orientation::Horizontal => (y, x),
        }
    }
}

/// Zones with populated stats, plus what fell outside all of them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneReport {
    pub orientation: Orientation,
    pub total_shots: usize,
    pub unclassified: usize,
    pub zones: Vec<Zone>,
}

/// Index of the first zone containing the point, in list order
pub fn classify(zones: &[Zone], x: f64, y: f64, orientation: Orientation) -> Option<usize> {
    let (zx, zy) = orientation.to_zone_axes(x, y);
    zones.iter().position(|zone| zone.contains(zx, zy))
}

/// Assign each shot to its first matching zone and fill in zone stats
///
/// Percentages are relative to every shot passed in, including any that
/// land outside the zones.
pub fn aggregate(shots: &[ShotRecord], mut zones: Vec<Zone>, orientation: Orientation) -> Result<ZoneReport, ShotError> {
    if shots.is_empty() {
        return Err(ShotError::EmptyDataset);
    }

    for zone in zones.iter_mut() {
        zone.reset_stats();
    }

    let mut unclassified = 0;
    for shot in shots {
        match classify(&zones, shot.x, shot.y, orientation) {
            Some(index) => {
                let stats = &mut zones[index].stats;
                stats.shots += 1;
                stats.xg += shot.xg;
            }
            None => unclassified += 1,
        }
    }

    let total_shots = shots.len();
    for zone in zones.iter_mut() {
        zone.stats.percentage = zone.stats.shots as f64 * 100.0 / total_shots as f64;
    }

    if unclassified > 0 {
        debug!("{} of {} shots fell outside every zone", unclassified, total_shots);
    }

    Ok(ZoneReport {
        orientation,
        total_shots,
        unclassified,
        zones,
    })
}

/// A zone rectangle ready to be filled and labelled
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneFill {
    pub zone: String,
    /// Rectangle origin and size in screen axes
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
    pub label: String,
}

impl ZoneReport {
    pub fn classified_shots(&self) -> usize {
        self.zones.iter().map(|z| z.stats.shots).sum()
    }

    /// Zones with at least one shot, busiest first
    pub fn ranked(&self) -> Vec<&Zone> {
        let mut ranked: Vec<&Zone> = self.zones.iter().filter(|z| z.stats.shots > 0).collect();
        ranked.sort_by(|a, b| b.stats.shots.cmp(&a.stats.shots));
        ranked
    }

    /// Fill rectangles for every zone that has shots; empty zones get none
    pub fn fill_plan(&self, style: &StyleConfig) -> Vec<ZoneFill> {
        let ranked = self.ranked();
        let count = ranked.len();
        ranked
            .into_iter()
            .enumerate()
            .map(|(rank, zone)| {
                let (x, y, width, height) = match self.orientation {
                    Orientation::Vertical => (zone.y(), zone.x(), zone.height(), zone.width()),
                    Orientation::Horizontal => (zone.x(), zone.y(), zone.width(), zone.height()),
                };
                ZoneFill {
                    zone: zone.name.clone(),
                    x,
                    y,
                    width,
                    height,
                    color: style.ramp_color((rank + 1) as f64 / count as f64),
                    label: format!("{:.2}%\n{:.2}xG", zone.stats.percentage, zone.stats.xg),
                }
            })
            .collect()
    }
}
