//! Static spatial taxonomy of the play area.
//!
//! The 768 x 504 play area is split into named columns and rows, with narrow
//! landmark strips centered inside some columns. Physics uses the same
//! constants for bounds, narration uses the tags to name locations.
//!
//! Ranges are closed and shared edges resolve to the later entry in each
//! table. Landmarks override the column they sit in.

use crate::simulation::states::NVec2;

pub const WIDTH: f64 = 768.0;
pub const HEIGHT: f64 = 504.0;

/// Width of a landmark strip, centered on its x location
pub const LANDMARK_WIDTH: f64 = 20.0;

pub mod x_locations {
    pub const AT_LEFT_EDGE: f64 = 67.0;
    pub const AT_NEAR_SWEATER: f64 = 393.0;
    pub const AT_CENTER_PLAY_AREA: f64 = 507.0;
    pub const AT_NEAR_WALL: f64 = 596.0;
    pub const AT_WALL: f64 = 621.0;
    pub const AT_NEAR_RIGHT_EDGE: f64 = 676.0;
    pub const AT_RIGHT_EDGE: f64 = 701.0;
}

pub mod y_locations {
    pub const AT_TOP: f64 = 111.0;
    pub const AT_CENTER_PLAY_AREA: f64 = 249.0;
    pub const AT_BOTTOM: f64 = 393.0;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    LeftArm,
    LeftSideOfSweater,
    RightSideOfSweater,
    RightArm,
    LeftPlayArea,
    CenterPlayArea,
    RightPlayArea,
    RightEdge,
    Wall, // RightEdge while the wall is visible
}

impl Column {
    pub fn on_sweater(self) -> bool {
        matches!(
            self,
            Column::LeftArm | Column::LeftSideOfSweater | Column::RightSideOfSweater | Column::RightArm
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    Upper,
    Center,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    AtLeftEdge,
    AtNearSweater,
    AtCenterPlayArea,
    AtNearWall,
    AtWall,
    AtNearRightEdge,
    AtRightEdge,
}

impl Landmark {
    pub fn x(self) -> f64 {
        match self {
            Landmark::AtLeftEdge => x_locations::AT_LEFT_EDGE,
            Landmark::AtNearSweater => x_locations::AT_NEAR_SWEATER,
            Landmark::AtCenterPlayArea => x_locations::AT_CENTER_PLAY_AREA,
            Landmark::AtNearWall => x_locations::AT_NEAR_WALL,
            Landmark::AtWall => x_locations::AT_WALL,
            Landmark::AtNearRightEdge => x_locations::AT_NEAR_RIGHT_EDGE,
            Landmark::AtRightEdge => x_locations::AT_RIGHT_EDGE,
        }
    }
}

/// Full lookup result for a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayAreaRegion {
    pub column: Column,
    pub row: Row,
    pub landmark: Option<Landmark>,
}

const COLUMN_RANGES: [(Column, f64, f64); 8] = [
    (Column::LeftArm, f64::NEG_INFINITY, 138.0),
    (Column::LeftSideOfSweater, 138.0, 203.0),
    (Column::RightSideOfSweater, 203.0, 270.0),
    (Column::RightArm, 270.0, 335.0),
    (Column::LeftPlayArea, 335.0, 467.0),
    (Column::CenterPlayArea, 467.0, 544.0),
    (Column::RightPlayArea, 544.0, 676.0),
    (Column::RightEdge, 676.0, f64::INFINITY),
];

const ROW_RANGES: [(Row, f64, f64); 3] = [
    (Row::Upper, f64::NEG_INFINITY, 172.0),
    (Row::Center, 172.0, 326.0),
    (Row::Lower, 326.0, f64::INFINITY),
];

const LANDMARKS: [Landmark; 7] = [
    Landmark::AtLeftEdge,
    Landmark::AtNearSweater,
    Landmark::AtCenterPlayArea,
    Landmark::AtNearWall,
    Landmark::AtWall,
    Landmark::AtNearRightEdge,
    Landmark::AtRightEdge,
];

fn in_range(v: f64, min: f64, max: f64) -> bool {
    v >= min && v <= max
}

/// Column of `location`, ignoring landmarks
///
/// Panics if no column matches, which only happens for a NaN coordinate
pub fn column(location: NVec2, wall_visible: bool) -> Column {
    let mut found = None;
    for (col, min, max) in COLUMN_RANGES {
        if in_range(location.x, min, max) {
            found = Some(col);
        }
    }
    let col = found.unwrap_or_else(|| panic!("no play area column for x = {}", location.x));
    if wall_visible && col == Column::RightEdge {
        Column::Wall
    } else {
        col
    }
}

/// Row of `location`
///
/// Panics if no row matches, which only happens for a NaN coordinate
pub fn row(location: NVec2) -> Row {
    let mut found = None;
    for (r, min, max) in ROW_RANGES {
        if in_range(location.y, min, max) {
            found = Some(r);
        }
    }
    found.unwrap_or_else(|| panic!("no play area row for y = {}", location.y))
}

/// Landmark strip containing `location`, if any
pub fn landmark(location: NVec2) -> Option<Landmark> {
    let half = LANDMARK_WIDTH / 2.0;
    let mut found = None;
    for lm in LANDMARKS {
        if in_range(location.x, lm.x() - half, lm.x() + half) {
            found = Some(lm);
        }
    }
    found
}

pub fn in_landmark_column(location: NVec2) -> bool {
    landmark(location).is_some()
}

pub fn locate(location: NVec2, wall_visible: bool) -> PlayAreaRegion {
    PlayAreaRegion {
        column: column(location, wall_visible),
        row: row(location),
        landmark: landmark(location),
    }
}
