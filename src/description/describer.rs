//! Per-balloon narration state machine.
//!
//! Each step samples a [`DescribedState`], diffs it against the last one and
//! walks the changed dimensions in a fixed order:
//!
//! 1. velocity stop
//! 2. drag velocity stop, then the induced charge trend
//! 3. direction
//! 4. visibility
//! 5. wall touch
//! 6. grab / release
//! 7. wall visibility
//! 8. independent movement after release
//! 9. charge pickup (on/off sweater, pickup, throttled no-pickup)
//!
//! Every dimension enqueues at most one utterance per step. Timers advance by
//! the step's `dt`, never by wall-clock time.

use crate::description::charge::{
    combined_relative_charge, has_relative_charge, net_and_relative_charge, relative_charge_with_label,
    InducedChargeTracker,
};
use crate::description::location::{
    attractive_state_and_location, boundary_phrase, direction_phrase, more_charges_direction,
};
use crate::description::objects::{
    induced_charge_description, sweater_net_charge, sweater_no_more_charges, sweater_relative_charge,
    wall_charge_description, wall_rub_description,
};
use crate::description::queue::{Announcer, Utterance};
use crate::description::ranges::{charge_bucket, velocity_phrase, ChargeBucket};
use crate::description::rules::{first_match, Alert, StepContext, DRAG_STOP_RULES, VELOCITY_STOP_RULES, WALL_TOUCH_RULES};
use crate::description::snapshot::DescribedState;
use crate::description::strings::{self, capitalize, fill_in};
use crate::simulation::model::BaseModel;
use crate::simulation::play_area;
use crate::simulation::states::{BalloonId, NVec2, ShowCharges};

/// Throttling intervals, in seconds of simulated time
#[derive(Debug, Clone)]
pub struct NarrationTiming {
    pub description_refresh_rate: f64, // rubbing and pickup re-announcement
    pub release_description_delay: f64, // wait before describing a release
    pub release_description_refresh_rate: f64, // continued drift re-announcement
}

impl Default for NarrationTiming {
    fn default() -> Self {
        Self {
            description_refresh_rate: 2.0,
            release_description_delay: 0.025,
            release_description_refresh_rate: 5.0,
        }
    }
}

pub fn balloon_label(id: BalloonId) -> &'static str {
    match id {
        BalloonId::Yellow => strings::YELLOW_BALLOON,
        BalloonId::Green => strings::GREEN_BALLOON,
    }
}

fn movement_type(id: BalloonId) -> &'static str {
    match id {
        BalloonId::Yellow => "yellow-movement",
        BalloonId::Green => "green-movement",
    }
}

fn direction_type(id: BalloonId) -> &'static str {
    match id {
        BalloonId::Yellow => "yellow-direction",
        BalloonId::Green => "green-direction",
    }
}

fn induced_change_type(id: BalloonId) -> &'static str {
    match id {
        BalloonId::Yellow => "yellow-induced-charge-change",
        BalloonId::Green => "green-induced-charge-change",
    }
}

#[derive(Debug, Clone)]
pub struct BalloonDescriber {
    id: BalloonId,
    label: &'static str,
    other_label: &'static str,
    timing: NarrationTiming,
    described: DescribedState,
    induced: InducedChargeTracker,
    alert_first_pickup: bool, // next pickup is the first since entering or leaving the sweater
    alert_next_pickup: bool, // refresh interval passed, next pickup may be told
    described_bucket: Option<ChargeBucket>, // bucket of the last pickup alert
    same_bucket_pickups: u32,
    old_drag_center: NVec2, // center when the current drag motion began
    charge_on_start_drag: i32,
    charge_on_end_drag: i32,
    time_since_position_alert: f64,
    rub_alert_dirty: bool,
    describe_direction: bool,
    initial_movement_described: bool,
    time_since_release_alert: f64,
    grab_hint_given: bool,
}

impl BalloonDescriber {
    pub fn new(model: &BaseModel, id: BalloonId, timing: NarrationTiming) -> Self {
        let described = DescribedState::sample(model, id);
        let mut induced = InducedChargeTracker::default();
        induced.reset(model, id);
        Self {
            id,
            label: balloon_label(id),
            other_label: balloon_label(id.other()),
            timing,
            old_drag_center: described.center,
            charge_on_start_drag: described.charge,
            charge_on_end_drag: described.charge,
            described,
            induced,
            alert_first_pickup: false,
            alert_next_pickup: false,
            described_bucket: None,
            same_bucket_pickups: 0,
            time_since_position_alert: 0.0,
            rub_alert_dirty: false,
            describe_direction: false,
            initial_movement_described: true,
            time_since_release_alert: 0.0,
            grab_hint_given: false,
        }
    }

    /// Forget every counter and flag, resampling from a freshly reset model
    pub fn reset(&mut self, model: &BaseModel) {
        *self = Self::new(model, self.id, self.timing.clone());
    }

    pub fn id(&self) -> BalloonId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn described(&self) -> &DescribedState {
        &self.described
    }

    /// Narrate whatever changed since the previous step
    pub fn step<A: Announcer>(&mut self, model: &BaseModel, dt: f64, out: &mut A) {
        let next = DescribedState::sample(model, self.id);
        let changes = self.described.diff(&next);
        let prev = self.described.clone();
        let refresh = self.timing.description_refresh_rate;

        self.time_since_position_alert += dt;
        self.time_since_release_alert += dt;

        let ctx = StepContext {
            dragged: next.dragged,
            on_sweater: next.on_sweater,
            touching_wall: next.touching_wall,
            was_touching_wall: prev.touching_wall,
            in_landmark: play_area::in_landmark_column(next.center),
            show_all_charges: model.show_charges == ShowCharges::All,
        };

        // velocity stop
        if changes.velocity && next.velocity == NVec2::zeros() {
            if let Some(alert) = first_match(VELOCITY_STOP_RULES, &ctx) {
                out.enqueue(Utterance::new(self.render(model, alert)));
            }
        }

        // drag velocity
        if changes.drag_velocity {
            if prev.drag_velocity == NVec2::zeros() {
                self.charge_on_start_drag = prev.charge;
                self.old_drag_center = prev.center;
            } else if next.drag_velocity == NVec2::zeros() && next.dragged {
                self.time_since_position_alert = refresh;
                if let Some(alert) = first_match(DRAG_STOP_RULES, &ctx) {
                    out.enqueue(Utterance::with_type(self.render(model, alert), movement_type(self.id)));
                }
                if self.describe_induced_charge_change(model) {
                    let text = if next.center.x == self.old_drag_center.x {
                        Some(self.induced.describe_without_amount(model, self.id, self.label))
                    } else {
                        self.induced.describe_change(model, self.id, self.label)
                    };
                    if let Some(text) = text {
                        let text = fill_in(strings::SINGLE_STATEMENT, &[("statement", &text)]);
                        out.enqueue(Utterance::with_type(text, induced_change_type(self.id)));
                    }
                }
                self.charge_on_end_drag = next.charge;
                self.rub_alert_dirty = true;
            }
        }

        // direction
        if changes.direction && self.describe_direction {
            if let Some(direction) = next.direction {
                let text = capitalize(direction_phrase(direction));
                let text = fill_in(strings::SINGLE_STATEMENT, &[("statement", &text)]);
                out.enqueue(Utterance::with_type(text, direction_type(self.id)));
            }
        }

        // visibility
        if changes.visible {
            out.enqueue(Utterance::new(self.visibility_changed_alert(model)));
            // describe the balloon's first movement once it is back
            self.initial_movement_described = false;
            self.time_since_release_alert = 0.0;
        }

        // wall touch
        if changes.touching_wall {
            self.induced.reset(model, self.id);
            if next.touching_wall {
                if let Some(alert) = first_match(WALL_TOUCH_RULES, &ctx) {
                    out.enqueue(Utterance::new(self.render(model, alert)));
                }
            }
        }

        // grab and release
        if changes.dragged {
            self.induced.reset(model, self.id);
            if next.dragged {
                out.enqueue(Utterance::new(self.grabbed_alert(model)));
                self.describe_direction = true;
                self.initial_movement_described = true;
            } else {
                out.enqueue(Utterance::new(self.released_alert(model)));
                self.describe_direction = false;
                self.initial_movement_described = false;
                self.time_since_release_alert = 0.0;
            }
        }

        // wall visibility
        if changes.wall_visible {
            self.induced.reset(model, self.id);
            // taking the wall away from under a balloon lets it go
            if !next.wall_visible && prev.touching_wall && !next.dragged {
                self.initial_movement_described = false;
                self.time_since_release_alert = 0.0;
            }
        }
        if changes.inducing_charge {
            self.induced.reset(model, self.id);
        }

        // independent movement
        if next.visible && !next.dragged {
            if !self.initial_movement_described {
                if self.time_since_release_alert > self.timing.release_description_delay {
                    self.initial_movement_described = true;
                    self.time_since_release_alert = 0.0;
                    out.enqueue(Utterance::with_type(self.initial_release_description(model), movement_type(self.id)));
                }
            } else if next.velocity != NVec2::zeros()
                && self.time_since_release_alert > self.timing.release_description_refresh_rate
            {
                self.time_since_release_alert = 0.0;
                if let Some(text) = self.continuous_release_description(model) {
                    out.enqueue(Utterance::with_type(text, movement_type(self.id)));
                }
            }
        }

        // charge pickup
        if changes.on_sweater {
            self.alert_first_pickup = true;
            if next.dragged {
                let text = if next.on_sweater { strings::ON_SWEATER } else { strings::OFF_SWEATER };
                out.enqueue(Utterance::new(fill_in(strings::SINGLE_STATEMENT, &[("statement", text)])));
            }
        }
        if changes.charge && next.charge != 0 {
            if next.charge.abs() == model.max_charge() {
                out.enqueue(Utterance::new(self.last_charge_picked_up(model)));
            } else if self.alert_first_pickup || self.alert_next_pickup {
                let first = self.alert_first_pickup;
                out.enqueue(Utterance::new(self.charge_pickup_description(model, first)));
            }
            self.alert_first_pickup = false;
            self.alert_next_pickup = false;
        }
        if self.time_since_position_alert > refresh {
            if self.charge_on_start_drag == self.charge_on_end_drag
                && self.rub_alert_dirty
                && next.dragged
                && next.on_sweater
            {
                out.enqueue(Utterance::new(self.no_charge_pickup_alert(model)));
            }
            self.alert_next_pickup = true;
            self.time_since_position_alert = 0.0;
            self.rub_alert_dirty = false;
        }

        self.described = next;
    }

    fn describe_induced_charge_change(&self, model: &BaseModel) -> bool {
        !model.touching_wall(self.id)
            && model.wall.visible
            && model.show_charges == ShowCharges::All
            && model.inducing_charge(self.id)
    }

    fn location(&self, model: &BaseModel) -> String {
        attractive_state_and_location(model, self.id, self.other_label)
    }

    fn render(&self, model: &BaseModel, alert: Alert) -> String {
        match alert {
            Alert::StateAndLocationWithLabel => self.state_and_location_with_label(model),
            Alert::MovementStops => self.movement_stops_description(model),
            Alert::KeyboardMovement => {
                let text = match boundary_phrase(model, self.id) {
                    Some(edge) => edge.to_string(),
                    None => self.location(model),
                };
                fill_in(strings::SINGLE_STATEMENT, &[("statement", &text)])
            }
            Alert::LandmarkDrag => fill_in(strings::SINGLE_STATEMENT, &[("statement", &self.location(model))]),
            Alert::WallRub => wall_rub_description(model, self.id, self.label, self.other_label),
            Alert::WallRubWithPairs => {
                let rub = wall_rub_description(model, self.id, self.label, self.other_label);
                if model.show_charges == ShowCharges::All {
                    format!("{} {}.", rub, strings::WALL_HAS_MANY_CHARGES)
                } else {
                    rub
                }
            }
        }
    }

    /// "Yellow Balloon. Sticking to right arm of sweater."
    pub fn state_and_location_with_label(&self, model: &BaseModel) -> String {
        let text = fill_in(strings::LABELED_STATEMENT, &[("label", self.label), ("statement", &self.location(model))]);
        fill_in(strings::SINGLE_STATEMENT, &[("statement", &text)])
    }

    pub fn movement_stops_description(&self, model: &BaseModel) -> String {
        let stops = self.state_and_location_with_label(model);
        if model.touching_wall(self.id) && model.show_charges == ShowCharges::All && model.inducing_charge(self.id) {
            let induced = induced_charge_description(model, self.id, self.label);
            fill_in(
                strings::TWO_STATEMENTS,
                &[("first", &stops), ("second", &fill_in(strings::SINGLE_STATEMENT, &[("statement", &induced)]))],
            )
        } else {
            stops
        }
    }

    /// Whole description of the balloon, read when the user asks for it
    pub fn balloon_description(&self, model: &BaseModel) -> String {
        let location = self.location(model);
        let charge = model.balloon(self.id).charge;
        match model.show_charges {
            ShowCharges::None => fill_in(strings::SINGLE_STATEMENT, &[("statement", &location)]),
            mode => format!("{}. {}.", location, net_and_relative_charge(charge, mode)),
        }
    }

    /// "Grabbed. At center of Play Area. Has no more negative charges than positive charges."
    /// The keyboard hint follows only on the first grab since reset
    pub fn grabbed_alert(&mut self, model: &BaseModel) -> String {
        let mut parts = vec![format!("{}. {}.", strings::GRABBED, self.location(model))];
        let mode = model.show_charges;
        if mode != ShowCharges::None {
            let charge = if model.balloons_adjacent() {
                combined_relative_charge(model, self.id, self.label, self.other_label)
            } else {
                has_relative_charge(model.balloon(self.id).charge, mode)
            };
            parts.push(format!("{}.", charge));

            if model.on_sweater(self.id) {
                parts.push(format!("{}.", sweater_relative_charge(model)));
            } else if model.touching_wall(self.id) || model.inducing_charge(self.id) {
                parts.push(format!("{}.", wall_charge_description(model, self.id, self.label, self.other_label)));
            }
        }
        if !self.grab_hint_given {
            parts.push(strings::INTERACTION_HINT.to_string());
            self.grab_hint_given = true;
        }
        parts.join(" ")
    }

    /// "Green Balloon added to Play Area." with the location appended when the
    /// balloon comes back somewhere other than where it started
    pub fn visibility_changed_alert(&self, model: &BaseModel) -> String {
        let b = model.balloon(self.id);
        let text = if !b.visible {
            fill_in(strings::REMOVED_FROM_PLAY_AREA, &[("balloon", self.label)])
        } else if b.position == b.initial_position {
            fill_in(strings::ADDED_TO_PLAY_AREA, &[("balloon", self.label)])
        } else {
            fill_in(strings::ADDED_WITH_LOCATION, &[("balloon", self.label), ("location", &self.location(model))])
        };
        fill_in(strings::SINGLE_STATEMENT, &[("statement", &text)])
    }

    pub fn released_alert(&self, model: &BaseModel) -> String {
        format!("{}. {}.", strings::RELEASED, self.location(model))
    }

    /// First description after release: where the balloon heads, or that it stays put
    pub fn initial_release_description(&self, model: &BaseModel) -> String {
        let b = model.balloon(self.id);
        if b.velocity == NVec2::zeros() {
            return strings::NO_CHANGE_IN_POSITION_OR_CHARGE.to_string();
        }
        let to_object = match b.direction {
            Some(d) if d.is_leftward() => strings::TOWARDS_SWEATER,
            Some(d) if d.is_rightward() && model.wall.visible => strings::TO_WALL,
            Some(d) => direction_phrase(d),
            None => strings::NO_CHANGE_IN_POSITION,
        };
        let text = fill_in(strings::MOVES, &[("velocity", velocity_phrase(b.charge)), ("toObject", to_object)]);
        fill_in(strings::SINGLE_STATEMENT, &[("statement", &text)])
    }

    pub fn continuous_release_description(&self, model: &BaseModel) -> Option<String> {
        let direction = model.balloon(self.id).direction?;
        let text = fill_in(strings::MOVING, &[("direction", direction_phrase(direction))]);
        Some(fill_in(strings::SINGLE_STATEMENT, &[("statement", &text)]))
    }

    /// Pickup narration with charge-bucket hysteresis:
    /// the first pickup, then a relative charge alert on entering a bucket,
    /// then two alternating short phrasings inside the same bucket
    pub fn charge_pickup_description(&mut self, model: &BaseModel, first: bool) -> String {
        let mode = model.show_charges;
        let charge = model.balloon(self.id).charge;
        let bucket = charge_bucket(charge);
        if mode == ShowCharges::None {
            return fill_in(strings::SINGLE_STATEMENT, &[("statement", &self.location(model))]);
        }

        let same_increase = |s: String| -> String {
            if mode == ShowCharges::Diff {
                format!("{} {}.", s, strings::SAME_INCREASE_ON_SWEATER)
            } else {
                s
            }
        };

        if first {
            self.described_bucket = Some(bucket);
            self.same_bucket_pickups = 0;
            let text = fill_in(strings::PICKS_UP_CHARGES, &[("balloon", self.label)]);
            return same_increase(fill_in(strings::SINGLE_STATEMENT, &[("statement", &text)]));
        }

        if self.described_bucket != Some(bucket) {
            self.described_bucket = Some(bucket);
            self.same_bucket_pickups = 0;
            return format!(
                "{}. {}.",
                relative_charge_with_label(self.label, charge, mode),
                sweater_relative_charge(model)
            );
        }

        self.same_bucket_pickups += 1;
        let text = if self.same_bucket_pickups % 2 == 1 {
            fill_in(strings::PICKS_UP_MORE_CHARGES, &[("balloon", self.label)])
        } else {
            strings::AGAIN_MORE_CHARGES.to_string()
        };
        same_increase(fill_in(strings::SINGLE_STATEMENT, &[("statement", &text)]))
    }

    /// Told whenever the sweater gives up its last charge
    pub fn last_charge_picked_up(&self, model: &BaseModel) -> String {
        let mode = model.show_charges;
        if mode == ShowCharges::None {
            return fill_in(strings::SINGLE_STATEMENT, &[("statement", &self.location(model))]);
        }
        format!(
            "{}. {}.",
            sweater_no_more_charges(mode),
            relative_charge_with_label(self.label, model.balloon(self.id).charge, mode)
        )
    }

    /// Rubbing without gaining charge
    pub fn no_charge_pickup_alert(&self, model: &BaseModel) -> String {
        let location = self.location(model);
        let mode = model.show_charges;
        let no_change = match mode {
            ShowCharges::Diff => strings::NO_CHANGE_IN_NET_CHARGE,
            _ => strings::NO_CHANGE_IN_CHARGES,
        };
        if mode == ShowCharges::None {
            return fill_in(strings::SINGLE_STATEMENT, &[("statement", &location)]);
        }

        if model.sweater.remaining() == 0 {
            return match mode {
                ShowCharges::Diff => format!("{}. {}. {}", no_change, location, strings::RELEASE_HINT),
                _ => format!(
                    "{}. {}. {}. {}. {}",
                    no_change,
                    location,
                    sweater_net_charge(model),
                    fill_in(strings::BALLOON_NET_CHARGE, &[("balloon", self.label), ("charge", strings::NEGATIVE)]),
                    strings::RELEASE_HINT
                ),
            };
        }

        let template = match mode {
            ShowCharges::Diff => strings::MORE_HIDDEN_PAIRS_OF_CHARGES,
            _ => strings::MORE_PAIRS_OF_CHARGES,
        };
        match more_charges_direction(model, self.id) {
            Some(direction) => format!(
                "{}. {}. {}.",
                no_change,
                location,
                fill_in(template, &[("direction", direction_phrase(direction))])
            ),
            None => format!("{}. {}.", no_change, location),
        }
    }
}
