//! Charge phrasing for balloons and the induced-charge trend.

use crate::description::location::wall_location;
use crate::description::ranges::charge_bucket;
use crate::description::strings::{self, fill_in};
use crate::simulation::model::BaseModel;
use crate::simulation::states::{BalloonId, ShowCharges};

pub fn net_charge_phrase(charge: i32) -> &'static str {
    if charge == 0 {
        strings::ZERO
    } else {
        strings::NEGATIVE
    }
}

/// Relative charge in the current view, e.g. "a few more negative charges
/// than positive charges" or "showing a few negative charges"
pub fn relative_charge(charge: i32, mode: ShowCharges) -> String {
    let amount = charge_bucket(charge).phrase();
    match mode {
        ShowCharges::All => fill_in(strings::BALLOON_RELATIVE_CHARGE_ALL, &[("amount", amount)]),
        ShowCharges::Diff if charge == 0 => strings::SHOWING_NO_CHARGES.to_string(),
        ShowCharges::Diff => fill_in(strings::BALLOON_SHOWING_CHARGES, &[("amount", amount)]),
        ShowCharges::None => {
            debug_assert!(false, "no relative charge phrase with charges hidden");
            String::new()
        }
    }
}

/// What follows "has": the relative charge, led by the net charge in diff view
pub fn charge_clause(charge: i32, mode: ShowCharges) -> String {
    match mode {
        ShowCharges::Diff => format!("{} net charge, {}", net_charge_phrase(charge), relative_charge(charge, mode)),
        _ => relative_charge(charge, mode),
    }
}

/// "Has no more negative charges than positive charges"
pub fn has_relative_charge(charge: i32, mode: ShowCharges) -> String {
    fill_in(strings::HAS_RELATIVE_CHARGE, &[("relativeCharge", &charge_clause(charge, mode))])
}

/// "Yellow Balloon has several more negative charges than positive charges"
pub fn relative_charge_with_label(label: &str, charge: i32, mode: ShowCharges) -> String {
    fill_in(strings::BALLOON_HAS_RELATIVE_CHARGE, &[("balloon", label), ("relativeCharge", &charge_clause(charge, mode))])
}

/// Net and relative charge for the balloon description
pub fn net_and_relative_charge(charge: i32, mode: ShowCharges) -> String {
    match mode {
        ShowCharges::All => fill_in(
            strings::NET_CHARGE_AND_RELATIVE,
            &[
                ("netCharge", &fill_in(strings::NET_CHARGE, &[("charge", net_charge_phrase(charge))])),
                ("relativeCharge", &relative_charge(charge, mode)),
            ],
        ),
        _ => has_relative_charge(charge, mode),
    }
}

/// Charge of both balloons; one sentence when they fall in the same bucket
pub fn combined_relative_charge(model: &BaseModel, id: BalloonId, label: &str, other_label: &str) -> String {
    let mode = model.show_charges;
    let charge = model.balloon(id).charge;
    let other_charge = model.balloon(id.other()).charge;
    if charge_bucket(charge) == charge_bucket(other_charge) {
        fill_in(
            strings::BALLOON_HAS_RELATIVE_CHARGE,
            &[("balloon", strings::EACH_BALLOON), ("relativeCharge", &charge_clause(charge, mode))],
        )
    } else {
        format!(
            "{}. {}",
            relative_charge_with_label(label, charge, mode),
            relative_charge_with_label(other_label, other_charge, mode)
        )
    }
}

/// Tracks the force on the closest wall charge between descriptions so the
/// induced change can be phrased as a trend
#[derive(Debug, Clone, Default)]
pub struct InducedChargeTracker {
    previous_force: f64,
    previous_trend: Option<bool>, // true = growing
}

impl InducedChargeTracker {
    pub fn reset(&mut self, model: &BaseModel, id: BalloonId) {
        self.previous_force = model.force_to_closest_wall_charge(id).norm();
        self.previous_trend = None;
    }

    /// Change in induced charge since the last description or reset.
    /// `None` when the force has not changed
    pub fn describe_change(&mut self, model: &BaseModel, id: BalloonId, label: &str) -> Option<String> {
        let force = model.force_to_closest_wall_charge(id).norm();
        let delta = force - self.previous_force;
        if delta == 0.0 {
            return None;
        }
        let growing = delta > 0.0;
        let template = match (growing, self.previous_trend) {
            (true, Some(true)) => strings::INDUCED_MOVE_A_LITTLE_MORE,
            (true, _) => strings::INDUCED_BEGIN_TO_MOVE,
            (false, Some(false)) => strings::INDUCED_RETURN_A_LITTLE_MORE,
            (false, _) => strings::INDUCED_BEGIN_TO_RETURN,
        };
        self.previous_force = force;
        self.previous_trend = Some(growing);

        let location = wall_location(model.balloon(id).center().y);
        Some(fill_in(template, &[("location", location), ("balloon", label)]))
    }

    /// Change when the balloon only moved vertically, so no trend applies
    pub fn describe_without_amount(&mut self, model: &BaseModel, id: BalloonId, label: &str) -> String {
        self.previous_force = model.force_to_closest_wall_charge(id).norm();
        let location = wall_location(model.balloon(id).center().y);
        fill_in(strings::INDUCED_CHARGE_NO_AMOUNT, &[("location", location), ("balloon", label)])
    }
}
