//! Pitch dimension constants in the normalized (Opta-style) 100 x 100 layout.
//!
//! The x axis runs along the pitch length, goal line to goal line. The y
//! axis runs across the width, touchline to touchline.

use serde::Serialize;

/// Pitch markings that zone boundaries are derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PitchDimensions {
    pub length: f64,
    pub width: f64,
    pub penalty_area_length: f64,
    pub penalty_area_width: f64,
    pub six_yard_length: f64,
    pub six_yard_width: f64,
    /// Real-world length in meters, for distance conversions
    pub length_meters: f64,
}

impl Default for PitchDimensions {
    fn default() -> Self {
        Self::opta()
    }
}

impl PitchDimensions {
    /// Opta layout: 100 x 100 units over a 105 m pitch
    pub const fn opta() -> Self {
        PitchDimensions {
            length: 100.0,
            width: 100.0,
            penalty_area_length: 17.0,
            penalty_area_width: 57.8,
            six_yard_length: 5.8,
            six_yard_width: 26.4,
            length_meters: 105.0,
        }
    }

    /// Width of the strip between the touchline and the penalty area
    pub fn side_width(&self) -> f64 {
        (self.width - self.penalty_area_width) / 2.0
    }

    /// Distance between the penalty area line and the halfway line
    pub fn side_length(&self) -> f64 {
        self.length / 2.0 - self.penalty_area_length
    }

    /// Width between the penalty-area edge and the six-yard box edge
    pub fn penalty_area_side_width(&self) -> f64 {
        (self.penalty_area_width - self.six_yard_width) / 2.0
    }

    /// Depth between the six-yard line and the penalty-area line
    pub fn penalty_area_side_length(&self) -> f64 {
        self.penalty_area_length - self.six_yard_length
    }

    pub fn six_yard_bottom(&self) -> f64 {
        (self.width - self.six_yard_width) / 2.0
    }

    pub fn six_yard_top(&self) -> f64 {
        self.width - self.six_yard_bottom()
    }

    pub fn penalty_area_bottom(&self) -> f64 {
        self.side_width()
    }

    pub fn penalty_area_top(&self) -> f64 {
        self.width - self.side_width()
    }

    /// x of the far penalty-area line
    pub fn penalty_area_right(&self) -> f64 {
        self.length - self.penalty_area_length
    }

    /// x of the far six-yard line
    pub fn six_yard_right(&self) -> f64 {
        self.length - self.six_yard_length
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}
