//! Fixed partition of the pitch into named rectangular shot zones.
//!
//! Zones are described as a table over a shared set of edge coordinates, so
//! neighbouring zones have bit-identical boundaries. Each zone covers
//! `[x, x_end) x [y, y_end)`; an edge that lies on the pitch boundary is
//! closed so that shots on the goal line or touchline still classify.

use crate::error::ZoneLayoutError;
use crate::pitch::PitchDimensions;
use serde::{Serialize, Serializer};

/// Overlap below this is treated as a shared edge
const TILING_EPSILON: f64 = 1e-6;

/// Number of middle column groups between the two penalty areas
pub const MIDDLE_COLUMNS: usize = 6;

/// A side of a zone rectangle that carries a divider line when drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Accumulated shot figures for one zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ZoneStats {
    pub shots: usize,
    #[serde(rename = "xG")]
    pub xg: f64,
    pub percentage: f64,
}

/// A straight divider line in pitch coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub name: String,
    x: f64,
    y: f64,
    x_end: f64,
    y_end: f64,
    closed_x: bool,
    closed_y: bool,
    pub borders: Vec<Edge>,
    pub stats: ZoneStats,
}

/// Renderer-facing shape of a zone: origin plus size, with the far edges kept
#[derive(Serialize)]
struct ZoneJson<'a> {
    name: &'a str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    x_end: f64,
    y_end: f64,
    borders: &'a [Edge],
    stats: &'a ZoneStats,
}

impl Serialize for Zone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ZoneJson {
            name: &self.name,
            x: self.x,
            y: self.y,
            width: self.width(),
            height: self.height(),
            x_end: self.x_end,
            y_end: self.y_end,
            borders: &self.borders,
            stats: &self.stats,
        }
        .serialize(serializer)
    }
}

impl Zone {
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn x_end(&self) -> f64 {
        self.x_end
    }

    pub fn y_end(&self) -> f64 {
        self.y_end
    }

    pub fn width(&self) -> f64 {
        self.x_end - self.x
    }

    pub fn height(&self) -> f64 {
        self.y_end - self.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x + self.x_end) / 2.0, (self.y + self.y_end) / 2.0)
    }

    /// Whether the point lies inside this zone, in zone axes
    pub fn contains(&self, px: f64, py: f64) -> bool {
        within(px, self.x, self.x_end, self.closed_x) && within(py, self.y, self.y_end, self.closed_y)
    }

    /// Divider lines for this zone's border edges
    pub fn border_segments(&self) -> Vec<Segment> {
        self.borders
            .iter()
            .map(|edge| match edge {
                Edge::Top => Segment {
                    from: (self.x, self.y_end),
                    to: (self.x_end, self.y_end),
                },
                Edge::Bottom => Segment {
                    from: (self.x, self.y),
                    to: (self.x_end, self.y),
                },
                Edge::Left => Segment {
                    from: (self.x, self.y),
                    to: (self.x, self.y_end),
                },
                Edge::Right => Segment {
                    from: (self.x_end, self.y),
                    to: (self.x_end, self.y_end),
                },
            })
            .collect()
    }

    pub fn reset_stats(&mut self) {
        self.stats = ZoneStats::default();
    }
}

fn within(p: f64, start: f64, end: f64, closed: bool) -> bool {
    start <= p && (p < end || (closed && p <= end))
}

/// Edge coordinates along the pitch length, goal line to goal line
fn length_edges(dims: &PitchDimensions) -> Vec<f64> {
    let column = dims.side_length() / 3.0;
    let mut edges = vec![0.0, dims.six_yard_length, dims.penalty_area_length];
    edges.extend((1..MIDDLE_COLUMNS).map(|i| dims.penalty_area_length + i as f64 * column));
    edges.extend([dims.penalty_area_right(), dims.six_yard_right(), dims.length]);
    edges
}

/// Edge coordinates across the pitch width, touchline to touchline
fn width_edges(dims: &PitchDimensions) -> [f64; 6] {
    [
        0.0,
        dims.penalty_area_bottom(),
        dims.six_yard_bottom(),
        dims.six_yard_top(),
        dims.penalty_area_top(),
        dims.width,
    ]
}

// Length edge indices
const GOAL_LINE: usize = 0;
const SIX_YARD_LINE: usize = 1;
const BOX_LINE: usize = 2;
const FAR_BOX_LINE: usize = 2 + MIDDLE_COLUMNS;
const FAR_SIX_YARD_LINE: usize = FAR_BOX_LINE + 1;
const FAR_GOAL_LINE: usize = FAR_BOX_LINE + 2;

/// One row of a zone table: name, length edge span, width edge span, borders
struct ZoneSpec {
    name: &'static str,
    x: (usize, usize),
    y: (usize, usize),
    borders: &'static [Edge],
}

const NEAR_BOX: [ZoneSpec; 6] = [
    ZoneSpec { name: "wide-low", x: (GOAL_LINE, BOX_LINE), y: (0, 1), borders: &[Edge::Right] },
    ZoneSpec { name: "box-side-low", x: (GOAL_LINE, BOX_LINE), y: (1, 2), borders: &[] },
    ZoneSpec { name: "six-yard", x: (GOAL_LINE, SIX_YARD_LINE), y: (2, 3), borders: &[] },
    ZoneSpec { name: "central-box", x: (SIX_YARD_LINE, BOX_LINE), y: (2, 3), borders: &[Edge::Top, Edge::Bottom] },
    ZoneSpec { name: "box-side-high", x: (GOAL_LINE, BOX_LINE), y: (3, 4), borders: &[] },
    ZoneSpec { name: "wide-high", x: (GOAL_LINE, BOX_LINE), y: (4, 5), borders: &[Edge::Right] },
];

const FAR_BOX: [ZoneSpec; 6] = [
    ZoneSpec { name: "wide-low", x: (FAR_BOX_LINE, FAR_GOAL_LINE), y: (0, 1), borders: &[Edge::Left] },
    ZoneSpec { name: "box-side-low", x: (FAR_BOX_LINE, FAR_GOAL_LINE), y: (1, 2), borders: &[] },
    ZoneSpec { name: "six-yard", x: (FAR_SIX_YARD_LINE, FAR_GOAL_LINE), y: (2, 3), borders: &[] },
    ZoneSpec { name: "central-box", x: (FAR_BOX_LINE, FAR_SIX_YARD_LINE), y: (2, 3), borders: &[Edge::Top, Edge::Bottom] },
    ZoneSpec { name: "box-side-high", x: (FAR_BOX_LINE, FAR_GOAL_LINE), y: (3, 4), borders: &[] },
    ZoneSpec { name: "wide-high", x: (FAR_BOX_LINE, FAR_GOAL_LINE), y: (4, 5), borders: &[Edge::Left] },
];

/// Width strips of a middle column, low touchline first
const MIDDLE_STRIPS: [(&str, (usize, usize)); 5] = [
    ("wide-low", (0, 1)),
    ("channel-low", (1, 2)),
    ("central", (2, 3)),
    ("channel-high", (3, 4)),
    ("wide-high", (4, 5)),
];

fn middle_borders(column: usize, strip: usize) -> &'static [Edge] {
    // Columns 2 and 5 end at the halfway line and the far box, which are
    // already pitch markings.
    let closes_third = column == 2 || column == 5;
    let is_last_strip = strip == MIDDLE_STRIPS.len() - 1;
    match (closes_third, is_last_strip) {
        (false, false) => &[Edge::Top, Edge::Right],
        (false, true) => &[Edge::Right],
        (true, false) => &[Edge::Top],
        (true, true) => &[],
    }
}

fn build(name: String, spec_x: (usize, usize), spec_y: (usize, usize), borders: &[Edge], xs: &[f64], ys: &[f64]) -> Zone {
    Zone {
        name,
        x: xs[spec_x.0],
        y: ys[spec_y.0],
        x_end: xs[spec_x.1],
        y_end: ys[spec_y.1],
        closed_x: spec_x.1 == xs.len() - 1,
        closed_y: spec_y.1 == ys.len() - 1,
        borders: borders.to_vec(),
        stats: ZoneStats::default(),
    }
}

/// Build the default 42-zone layout for `dims`, near goal first
pub fn default_zones(dims: &PitchDimensions) -> Vec<Zone> {
    let xs = length_edges(dims);
    let ys = width_edges(dims);

    let mut zones = Vec::with_capacity(NEAR_BOX.len() + MIDDLE_COLUMNS * MIDDLE_STRIPS.len() + FAR_BOX.len());

    for spec in &NEAR_BOX {
        zones.push(build(format!("near-box/{}", spec.name), spec.x, spec.y, spec.borders, &xs, &ys));
    }

    for column in 0..MIDDLE_COLUMNS {
        let x = (BOX_LINE + column, BOX_LINE + column + 1);
        for (strip, (name, y)) in MIDDLE_STRIPS.iter().enumerate() {
            let name = format!("band-{}/{}", column + 1, name);
            zones.push(build(name, x, *y, middle_borders(column, strip), &xs, &ys));
        }
    }

    for spec in &FAR_BOX {
        zones.push(build(format!("far-box/{}", spec.name), spec.x, spec.y, spec.borders, &xs, &ys));
    }

    zones
}

/// Check that `zones` cover the pitch exactly once
pub fn validate_tiling(zones: &[Zone], dims: &PitchDimensions) -> Result<(), ZoneLayoutError> {
    for zone in zones {
        if zone.x < -TILING_EPSILON
            || zone.y < -TILING_EPSILON
            || zone.x_end > dims.length + TILING_EPSILON
            || zone.y_end > dims.width + TILING_EPSILON
        {
            return Err(ZoneLayoutError::OutOfBounds { zone: zone.name.clone() });
        }
    }

    for (i, a) in zones.iter().enumerate() {
        for b in &zones[i + 1..] {
            let overlap_x = a.x_end.min(b.x_end) - a.x.max(b.x);
            let overlap_y = a.y_end.min(b.y_end) - a.y.max(b.y);
            if overlap_x > TILING_EPSILON && overlap_y > TILING_EPSILON {
                return Err(ZoneLayoutError::Overlap {
                    first: a.name.clone(),
                    second: b.name.clone(),
                });
            }
        }
    }

    let covered: f64 = zones.iter().map(Zone::area).sum();
    if (covered - dims.area()).abs() > TILING_EPSILON {
        return Err(ZoneLayoutError::Coverage {
            covered,
            expected: dims.area(),
        });
    }

    Ok(())
}
