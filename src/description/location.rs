//! Where a balloon is, in words.
//!
//! Location phrases come from the play area column and row of the balloon
//! center. While touching the wall the wall row is named instead, and in the
//! open play area a landmark strip may override the column phrase.

use crate::description::strings::{self, fill_in};
use crate::simulation::model::BaseModel;
use crate::simulation::play_area::{self, Column, Landmark, Row};
use crate::simulation::states::{BalloonId, Direction, NVec2};

pub fn location_phrase(column: Column, row: Row) -> &'static str {
    use Column::*;
    use Row::*;
    match (column, row) {
        (LeftArm, Upper) => "left shoulder of sweater",
        (LeftArm, Center) => "left arm of sweater",
        (LeftArm, Lower) => "lower-left arm of sweater",
        (LeftSideOfSweater, Upper) => "upper-left side of sweater",
        (LeftSideOfSweater, Center) => "left side of sweater",
        (LeftSideOfSweater, Lower) => "lower-left side of sweater",
        (RightSideOfSweater, Upper) => "upper-right side of sweater",
        (RightSideOfSweater, Center) => "right side of sweater",
        (RightSideOfSweater, Lower) => "lower-right side of sweater",
        (RightArm, Upper) => "right shoulder of sweater",
        (RightArm, Center) => "right arm of sweater",
        (RightArm, Lower) => "lower-right arm of sweater",
        (LeftPlayArea, Upper) => "upper-left side of Play Area",
        (LeftPlayArea, Center) => "left side of Play Area",
        (LeftPlayArea, Lower) => "lower-left side of Play Area",
        (CenterPlayArea, Upper) => "upper-center of Play Area",
        (CenterPlayArea, Center) => "center of Play Area",
        (CenterPlayArea, Lower) => "lower-center of Play Area",
        (RightPlayArea, Upper) => "upper-right side of Play Area",
        (RightPlayArea, Center) => "right side of Play Area",
        (RightPlayArea, Lower) => "lower-right side of Play Area",
        (Wall, Upper) => strings::LOCATION_UPPER_WALL,
        (Wall, Center) => strings::LOCATION_WALL,
        (Wall, Lower) => strings::LOCATION_LOWER_WALL,
        (RightEdge, Upper) => "upper-right edge of Play Area",
        (RightEdge, Center) => "right edge of Play Area",
        (RightEdge, Lower) => "lower-right edge of Play Area",
    }
}

/// Wall section level with `y`
pub fn wall_location(y: f64) -> &'static str {
    location_phrase(Column::Wall, play_area::row(NVec2::new(0.0, y)))
}

/// Phrase for a landmark strip, `None` where the column phrase reads better
pub fn landmark_phrase(landmark: Landmark, row: Row, wall_visible: bool) -> Option<&'static str> {
    match landmark {
        Landmark::AtNearSweater => Some(strings::NEAR_SWEATER),
        Landmark::AtCenterPlayArea if row == Row::Center => Some(strings::AT_CENTER_OF_PLAY_AREA),
        Landmark::AtNearWall if wall_visible => Some(strings::NEAR_WALL),
        Landmark::AtWall if wall_visible => Some(strings::VERY_CLOSE_TO_WALL),
        Landmark::AtNearRightEdge if !wall_visible => Some(strings::VERY_CLOSE_TO_RIGHT_EDGE),
        Landmark::AtRightEdge if !wall_visible => Some(strings::AT_RIGHT_EDGE),
        _ => None,
    }
}

pub fn direction_phrase(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => strings::UP,
        Direction::Down => strings::DOWN,
        Direction::Left => strings::LEFT,
        Direction::Right => strings::RIGHT,
        Direction::UpLeft => strings::UP_AND_TO_THE_LEFT,
        Direction::UpRight => strings::UP_AND_TO_THE_RIGHT,
        Direction::DownLeft => strings::DOWN_AND_TO_THE_LEFT,
        Direction::DownRight => strings::DOWN_AND_TO_THE_RIGHT,
    }
}

/// Eight-way compass direction of `delta` in 45 degree sectors
pub fn compass(delta: NVec2) -> Option<Direction> {
    if delta.norm() < 1e-9 {
        return None;
    }
    // y grows downward, flip so that up is positive
    let angle = (-delta.y).atan2(delta.x).to_degrees();
    let sector = ((angle + 360.0 + 22.5) % 360.0 / 45.0).floor() as u32;
    Some(match sector {
        0 => Direction::Right,
        1 => Direction::UpRight,
        2 => Direction::Up,
        3 => Direction::UpLeft,
        4 => Direction::Left,
        5 => Direction::DownLeft,
        6 => Direction::Down,
        _ => Direction::DownRight,
    })
}

/// "Sticking to", "On" or "At"
pub fn attractive_state(model: &BaseModel, id: BalloonId) -> &'static str {
    let b = model.balloon(id);
    if model.on_sweater(id) {
        if !b.dragged && b.charge != 0 {
            strings::STICKING_TO
        } else {
            strings::ON
        }
    } else {
        strings::AT
    }
}

/// Column and row phrase for the balloon, the wall section while touching it
pub fn location_description(model: &BaseModel, id: BalloonId) -> &'static str {
    let center = model.balloon(id).center();
    if model.touching_wall(id) {
        wall_location(center.y)
    } else {
        let region = play_area::locate(center, model.wall.visible);
        location_phrase(region.column, region.row)
    }
}

/// State and location without the adjacency suffix,
/// e.g. "Sticking to upper-left side of sweater" or "Near sweater"
pub fn state_and_location(model: &BaseModel, id: BalloonId) -> String {
    let center = model.balloon(id).center();
    if !model.on_sweater(id) && !model.touching_wall(id) {
        let region = play_area::locate(center, model.wall.visible);
        if let Some(lm) = region.landmark {
            if let Some(phrase) = landmark_phrase(lm, region.row, model.wall.visible) {
                return phrase.to_string();
            }
        }
    }
    fill_in(
        strings::ATTRACTIVE_STATE_AND_LOCATION,
        &[("state", attractive_state(model, id)), ("location", location_description(model, id))],
    )
}

/// State and location, naming the other balloon when they are adjacent
pub fn attractive_state_and_location(model: &BaseModel, id: BalloonId, other_label: &str) -> String {
    let base = state_and_location(model, id);
    if model.balloons_adjacent() {
        fill_in(strings::NEXT_TO, &[("location", &base), ("balloon", other_label)])
    } else {
        base
    }
}

/// Edge the balloon was clamped against, if any
pub fn boundary_phrase(model: &BaseModel, id: BalloonId) -> Option<&'static str> {
    let b = model.balloon(id);
    if !b.out_of_bounds {
        return None;
    }
    let eps = 1e-6;
    if b.position.y <= eps {
        Some(strings::AT_TOP)
    } else if b.position.y + b.height >= model.params.height - eps {
        Some(strings::AT_BOTTOM)
    } else if b.position.x <= eps {
        Some(strings::AT_LEFT_EDGE)
    } else if !model.wall.visible && b.position.x + b.width >= model.params.width - eps {
        Some(strings::AT_RIGHT_EDGE)
    } else {
        None
    }
}

/// Direction from the balloon to the closest sweater charge it has not taken
pub fn more_charges_direction(model: &BaseModel, id: BalloonId) -> Option<Direction> {
    let center = model.balloon(id).center();
    let i = model.sweater.nearest_unmoved(center, f64::INFINITY)?;
    compass(model.sweater.charges[i].position - center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_sectors() {
        assert_eq!(compass(NVec2::new(1.0, 0.0)), Some(Direction::Right));
        assert_eq!(compass(NVec2::new(-1.0, -1.0)), Some(Direction::UpLeft));
        assert_eq!(compass(NVec2::new(0.1, 5.0)), Some(Direction::Down));
        assert_eq!(compass(NVec2::zeros()), None);
    }
}
