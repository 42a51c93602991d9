//! Phrases about the wall and the sweater as seen from a balloon.

use crate::description::charge::relative_charge_with_label;
use crate::description::location::{attractive_state_and_location, wall_location};
use crate::description::ranges::{charge_bucket, induced_amount};
use crate::description::strings::{self, fill_in};
use crate::simulation::model::BaseModel;
use crate::simulation::states::{BalloonId, ShowCharges};

/// Induced charge in the wall next to one balloon, without a final period
pub fn induced_charge_description(model: &BaseModel, id: BalloonId, label: &str) -> String {
    let b = model.balloon(id);
    let location = wall_location(b.center().y);
    if model.inducing_charge(id) {
        let moves = fill_in(
            strings::INDUCED_CHARGE,
            &[("location", location), ("balloon", label), ("amount", induced_amount(b.charge))],
        );
        format!("{}. {}", moves, strings::POSITIVE_CHARGES_DO_NOT_MOVE)
    } else {
        fill_in(strings::WALL_NO_CHANGE_IN_CHARGES, &[("location", location)])
    }
}

/// Induced charge from both balloons at once, amount from their summed charge
pub fn combined_induced_charge_description(model: &BaseModel, id: BalloonId) -> String {
    let location = wall_location(model.balloon(id).center().y);
    let total = model.balloons.iter().map(|b| b.charge).sum::<i32>();
    let moves = fill_in(
        strings::INDUCED_CHARGE,
        &[("location", location), ("balloon", strings::BALLOONS), ("amount", induced_amount(total))],
    );
    format!("{}. {}", moves, strings::POSITIVE_CHARGES_DO_NOT_MOVE)
}

/// Induced charge naming both balloons when both induce
pub fn induced_for_pair(model: &BaseModel, id: BalloonId, label: &str) -> String {
    if model.both_visible() && model.inducing_charge(id) && model.inducing_charge(id.other()) {
        combined_induced_charge_description(model, id)
    } else {
        induced_charge_description(model, id, label)
    }
}

/// Charge in the wall for the current view, without a final period.
/// Empty with charges hidden
pub fn wall_charge_description(model: &BaseModel, id: BalloonId, label: &str, other_label: &str) -> String {
    match model.show_charges {
        ShowCharges::All => {
            let induced = if model.inducing_charge(id) {
                induced_for_pair(model, id, label)
            } else if model.inducing_charge(id.other()) {
                induced_charge_description(model, id.other(), other_label)
            } else {
                induced_charge_description(model, id, label)
            };
            format!("{}. {}", induced, strings::WALL_HAS_MANY_CHARGES)
        }
        ShowCharges::Diff => strings::WALL_SHOWING_NO_CHARGES.to_string(),
        ShowCharges::None => String::new(),
    }
}

/// "At upper wall. No transfer of charge. In upper wall, no change in charges."
pub fn wall_rub_description(model: &BaseModel, id: BalloonId, label: &str, other_label: &str) -> String {
    let location = attractive_state_and_location(model, id, other_label);
    match model.show_charges {
        ShowCharges::All => format!(
            "{}. {}. {}.",
            location,
            strings::NO_TRANSFER_OF_CHARGE,
            induced_for_pair(model, id, label)
        ),
        ShowCharges::Diff => format!(
            "{}. {}. {}.",
            location,
            relative_charge_with_label(label, model.balloon(id).charge, ShowCharges::Diff),
            strings::WALL_SHOWING_NO_CHARGES
        ),
        ShowCharges::None => format!("{}.", location),
    }
}

/// Sweater charge for the current view, without a final period
pub fn sweater_relative_charge(model: &BaseModel) -> String {
    let charge = model.sweater.charge();
    let amount = charge_bucket(charge).phrase();
    match model.show_charges {
        ShowCharges::All if charge == 0 => strings::SWEATER_NO_NET_CHARGE_ALL.to_string(),
        ShowCharges::All => fill_in(strings::SWEATER_RELATIVE_CHARGE_ALL, &[("amount", amount)]),
        ShowCharges::Diff if charge == 0 => strings::SWEATER_SHOWING_NO_CHARGES.to_string(),
        ShowCharges::Diff => fill_in(strings::SWEATER_SHOWING_CHARGES, &[("amount", amount)]),
        ShowCharges::None => String::new(),
    }
}

/// The sweater has given away everything it had
pub fn sweater_no_more_charges(mode: ShowCharges) -> &'static str {
    match mode {
        ShowCharges::Diff => strings::SWEATER_SHOWING_ALL_POSITIVE,
        _ => strings::SWEATER_NO_MORE_CHARGES,
    }
}

/// "Sweater has positive net charge"
pub fn sweater_net_charge(model: &BaseModel) -> String {
    let phrase = if model.sweater.charge() > 0 { strings::POSITIVE } else { strings::ZERO };
    fill_in(strings::SWEATER_NET_CHARGE, &[("charge", phrase)])
}

