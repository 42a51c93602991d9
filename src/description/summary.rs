//! Scene summary read when the user first arrives or asks for an overview.

use crate::description::charge::relative_charge_with_label;
use crate::description::describer::balloon_label;
use crate::description::location::state_and_location;
use crate::description::objects::{induced_for_pair, sweater_relative_charge};
use crate::description::strings::{self, fill_in};
use crate::simulation::model::BaseModel;
use crate::simulation::states::{BalloonId, ShowCharges};

fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Sentences describing the room, its charges and where each balloon is
pub struct SceneSummary;

impl SceneSummary {
    pub fn room_objects(model: &BaseModel) -> String {
        let balloons = if model.both_visible() {
            strings::TWO_BALLOONS
        } else {
            strings::ONE_BALLOON
        };
        let template = if model.wall.visible {
            strings::ROOM_OBJECTS_WITH_WALL
        } else {
            strings::ROOM_OBJECTS_NO_WALL
        };
        fill_in(strings::SINGLE_STATEMENT, &[("statement", &fill_in(template, &[("balloons", balloons)]))])
    }

    /// `None` while charges are hidden
    pub fn charges(model: &BaseModel) -> Option<String> {
        if model.show_charges == ShowCharges::None {
            return None;
        }
        let neutral = model.sweater.charge() == 0 && model.balloons.iter().all(|b| b.charge == 0);
        if neutral && model.show_charges == ShowCharges::All {
            return Some(format!("{}.", strings::ALL_NEUTRAL));
        }
        let mut parts = vec![format!("{}.", sweater_relative_charge(model))];
        for id in BalloonId::ALL {
            let b = model.balloon(id);
            if b.visible {
                parts.push(format!("{}.", relative_charge_with_label(balloon_label(id), b.charge, model.show_charges)));
            }
        }
        Some(parts.join(" "))
    }

    /// "Yellow Balloon, at center of Play Area." plus induced charge when any
    pub fn balloon(model: &BaseModel, id: BalloonId) -> Option<String> {
        if !model.balloon(id).visible {
            return None;
        }
        let label = balloon_label(id);
        let location = decapitalize(&state_and_location(model, id));
        let mut text = fill_in(strings::SINGLE_STATEMENT, &[(
            "statement",
            &fill_in(strings::BALLOON_SUMMARY, &[("balloon", label), ("location", &location)]),
        )]);
        if model.show_charges == ShowCharges::All && model.inducing_charge(id) {
            text = format!("{} {}.", text, induced_for_pair(model, id, label));
        }
        Some(text)
    }

    pub fn describe(model: &BaseModel) -> Vec<String> {
        let mut lines = vec![Self::room_objects(model)];
        lines.extend(Self::charges(model));
        for id in BalloonId::ALL {
            lines.extend(Self::balloon(model, id));
        }
        lines
    }
}
