//! Shared layout constants used by the CLI tables.
//!
//! This module centralizes common column widths to keep the command
//! outputs aligned with each other.

/// Width of the zone name column
pub const ZONE_NAME_COL_WIDTH: usize = 24;

/// Width of the shot count column
pub const SHOTS_COL_WIDTH: usize = 6;

/// Width of percentage columns
pub const PERCENT_COL_WIDTH: usize = 8;

/// Width of xG columns
pub const XG_COL_WIDTH: usize = 7;

/// Width of coordinate columns
pub const COORD_COL_WIDTH: usize = 7;

/// Width of the shot result column
pub const RESULT_COL_WIDTH: usize = 12;

/// Width of the minute column
pub const MINUTE_COL_WIDTH: usize = 4;

/// Width of a headline stat cell
pub const STAT_CELL_WIDTH: usize = 9;

/// Width of zone table rows
pub const ZONE_TABLE_WIDTH: usize =
    ZONE_NAME_COL_WIDTH + SHOTS_COL_WIDTH + PERCENT_COL_WIDTH + XG_COL_WIDTH + 3;
