//! Core state types for the balloon simulation.
//!
//! Defines the plain data the model steps every frame:
//! - `Balloon` and its `BalloonId` (index into the model's balloon pair)
//! - `PointCharge` lattice entries owned by the sweater and the wall
//! - `Direction` of travel and the `ShowCharges` view mode
//!
//! Derived predicates that need more than one object (on sweater, touching
//! wall, adjacency) live on `BaseModel`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Identifies one of the two balloons. The pair lives in a two-element array
/// owned by the model, so the sibling is just the other index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalloonId {
    Yellow,
    Green,
}

impl BalloonId {
    pub const ALL: [BalloonId; 2] = [BalloonId::Yellow, BalloonId::Green];

    pub fn index(self) -> usize {
        match self {
            BalloonId::Yellow => 0,
            BalloonId::Green => 1,
        }
    }

    pub fn other(self) -> BalloonId {
        match self {
            BalloonId::Yellow => BalloonId::Green,
            BalloonId::Green => BalloonId::Yellow,
        }
    }
}

/// Eight-way direction of travel, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Direction of a movement delta, `None` for a zero delta
    pub fn from_delta(delta: NVec2) -> Option<Direction> {
        let eps = 1e-9;
        let dx = if delta.x > eps { 1 } else if delta.x < -eps { -1 } else { 0 };
        let dy = if delta.y > eps { 1 } else if delta.y < -eps { -1 } else { 0 };
        match (dx, dy) {
            (0, 0) => None,
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, -1) => Some(Direction::UpLeft),
            (1, -1) => Some(Direction::UpRight),
            (-1, 1) => Some(Direction::DownLeft),
            _ => Some(Direction::DownRight),
        }
    }

    pub fn is_leftward(self) -> bool {
        matches!(self, Direction::Left | Direction::UpLeft | Direction::DownLeft)
    }

    pub fn is_rightward(self) -> bool {
        matches!(self, Direction::Right | Direction::UpRight | Direction::DownRight)
    }
}

/// Which charges the view shows; narration follows the same mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowCharges {
    #[default]
    All,
    None,
    Diff,
}

/// A discrete charge carrier on a fixed lattice site
#[derive(Debug, Clone)]
pub struct PointCharge {
    pub position: NVec2, // lattice site (center)
    pub moved: bool, // transferred to a balloon (sweater charges only)
    pub displacement: NVec2, // induced offset from the lattice site (wall minus charges only)
}

impl PointCharge {
    pub fn new(position: NVec2) -> Self {
        Self {
            position,
            moved: false,
            displacement: NVec2::zeros(),
        }
    }

    /// Current location including any induced displacement
    pub fn location(&self) -> NVec2 {
        self.position + self.displacement
    }

    pub fn reset(&mut self) {
        self.moved = false;
        self.displacement = NVec2::zeros();
    }
}

#[derive(Debug, Clone)]
pub struct Balloon {
    pub id: BalloonId,
    pub position: NVec2, // top-left corner
    pub velocity: NVec2, // free-motion velocity
    pub drag_velocity: NVec2, // velocity while dragged, from the last step's displacement
    pub charge: i32, // always <= 0
    pub visible: bool,
    pub dragged: bool,
    pub direction: Option<Direction>, // last direction of travel
    pub out_of_bounds: bool, // last position update was clamped
    pub width: f64,
    pub height: f64,
    pub last_step_position: NVec2, // position at the end of the previous step
    pub initial_position: NVec2,
    pub initial_visible: bool,
}

impl Balloon {
    pub fn new(id: BalloonId, position: NVec2, width: f64, height: f64, visible: bool) -> Self {
        Self {
            id,
            position,
            velocity: NVec2::zeros(),
            drag_velocity: NVec2::zeros(),
            charge: 0,
            visible,
            dragged: false,
            direction: None,
            out_of_bounds: false,
            width,
            height,
            last_step_position: position,
            initial_position: position,
            initial_visible: visible,
        }
    }

    pub fn center(&self) -> NVec2 {
        self.position + NVec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn reset(&mut self) {
        self.position = self.initial_position;
        self.last_step_position = self.initial_position;
        self.velocity = NVec2::zeros();
        self.drag_velocity = NVec2::zeros();
        self.charge = 0;
        self.visible = self.initial_visible;
        self.dragged = false;
        self.direction = None;
        self.out_of_bounds = false;
    }
}
