//! Prioritised rule tables choosing one alert per changed dimension.
//!
//! Each table is scanned in order and the first rule whose predicate holds
//! decides the outcome; a matching rule may stay silent.

/// Facts about the current step that rule predicates read
#[derive(Debug, Clone, Copy, Default)]
pub struct StepContext {
    pub dragged: bool,
    pub on_sweater: bool,
    pub touching_wall: bool,
    pub was_touching_wall: bool,
    pub in_landmark: bool,
    pub show_all_charges: bool,
}

impl StepContext {
    pub fn touching_wall_changed(&self) -> bool {
        self.touching_wall != self.was_touching_wall
    }
}

/// Alert templates a rule can select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    StateAndLocationWithLabel,
    MovementStops,
    KeyboardMovement,
    LandmarkDrag,
    WallRub,
    WallRubWithPairs,
}

pub struct Rule {
    pub applies: fn(&StepContext) -> bool,
    pub alert: Option<Alert>, // None = matched, say nothing
}

/// Outcome of the first matching rule, `None` when no rule matches or the
/// matching rule is silent
pub fn first_match(rules: &[Rule], ctx: &StepContext) -> Option<Alert> {
    rules.iter().find(|r| (r.applies)(ctx)).and_then(|r| r.alert)
}

fn dragged_on_sweater_or_wall(c: &StepContext) -> bool {
    c.dragged && (c.on_sweater || c.touching_wall)
}

fn dragged(c: &StepContext) -> bool {
    c.dragged
}

fn on_sweater(c: &StepContext) -> bool {
    c.on_sweater
}

fn wall_contact_unchanged(c: &StepContext) -> bool {
    !c.touching_wall_changed()
}

fn in_open_play_area(c: &StepContext) -> bool {
    !c.in_landmark && !c.on_sweater && !c.touching_wall
}

fn in_landmark(c: &StepContext) -> bool {
    c.in_landmark
}

fn rubbing_wall(c: &StepContext) -> bool {
    c.touching_wall && c.was_touching_wall
}

fn dragged_with_all_charges(c: &StepContext) -> bool {
    c.dragged && c.show_all_charges
}

fn always(_: &StepContext) -> bool {
    true
}

/// Velocity dropped to zero
pub const VELOCITY_STOP_RULES: &[Rule] = &[
    Rule { applies: dragged_on_sweater_or_wall, alert: Some(Alert::StateAndLocationWithLabel) },
    Rule { applies: dragged, alert: None },
    Rule { applies: on_sweater, alert: Some(Alert::StateAndLocationWithLabel) },
    // arriving at the wall is told by the wall-touch rules
    Rule { applies: wall_contact_unchanged, alert: Some(Alert::MovementStops) },
];

/// Drag velocity dropped to zero while dragged
pub const DRAG_STOP_RULES: &[Rule] = &[
    Rule { applies: in_open_play_area, alert: Some(Alert::KeyboardMovement) },
    Rule { applies: in_landmark, alert: Some(Alert::LandmarkDrag) },
    Rule { applies: rubbing_wall, alert: Some(Alert::WallRub) },
];

/// Balloon just touched the wall
pub const WALL_TOUCH_RULES: &[Rule] = &[
    Rule { applies: dragged_with_all_charges, alert: Some(Alert::WallRubWithPairs) },
    Rule { applies: always, alert: Some(Alert::MovementStops) },
];
