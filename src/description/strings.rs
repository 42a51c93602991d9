//! Narration template catalog.
//!
//! Templates carry `{{name}}` placeholders filled by [`fill_in`]. Text is
//! English only; the catalog is the single place phrases live.

/// Replace every `{{key}}` in `template` with its value. Unknown
/// placeholders are left in place so a missing value is visible in output.
pub fn fill_in(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{{{key}}}}}"), value);
    }
    out
}

/// Upper-case the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// labels
pub const YELLOW_BALLOON: &str = "Yellow Balloon";
pub const GREEN_BALLOON: &str = "Green Balloon";
pub const BALLOONS: &str = "balloons";

// sentence glue
pub const SINGLE_STATEMENT: &str = "{{statement}}.";
pub const TWO_STATEMENTS: &str = "{{first}} {{second}}";
pub const LABELED_STATEMENT: &str = "{{label}}. {{statement}}";

// location
pub const ATTRACTIVE_STATE_AND_LOCATION: &str = "{{state}} {{location}}";
pub const NEXT_TO: &str = "{{location}}, next to {{balloon}}";
pub const STICKING_TO: &str = "Sticking to";
pub const ON: &str = "On";
pub const AT: &str = "At";
pub const LOCATION_WALL: &str = "wall";
pub const LOCATION_UPPER_WALL: &str = "upper wall";
pub const LOCATION_LOWER_WALL: &str = "lower wall";

pub const NEAR_SWEATER: &str = "Near sweater";
pub const NEAR_WALL: &str = "Near wall";
pub const VERY_CLOSE_TO_WALL: &str = "Very close to wall";
pub const AT_CENTER_OF_PLAY_AREA: &str = "At center of Play Area";
pub const VERY_CLOSE_TO_RIGHT_EDGE: &str = "Very close to right edge";
pub const AT_RIGHT_EDGE: &str = "At right edge";
pub const AT_LEFT_EDGE: &str = "At left edge";
pub const AT_TOP: &str = "At top";
pub const AT_BOTTOM: &str = "At bottom";
pub const ON_SWEATER: &str = "On Sweater";
pub const OFF_SWEATER: &str = "Off sweater";

// directions
pub const UP: &str = "up";
pub const DOWN: &str = "down";
pub const LEFT: &str = "left";
pub const RIGHT: &str = "right";
pub const UP_AND_TO_THE_LEFT: &str = "up and to the left";
pub const UP_AND_TO_THE_RIGHT: &str = "up and to the right";
pub const DOWN_AND_TO_THE_LEFT: &str = "down and to the left";
pub const DOWN_AND_TO_THE_RIGHT: &str = "down and to the right";

// charge amounts
pub const NO: &str = "no";
pub const A_FEW: &str = "a few";
pub const SEVERAL: &str = "several";
pub const MANY: &str = "many";
pub const ZERO: &str = "zero";
pub const NEGATIVE: &str = "negative";
pub const POSITIVE: &str = "positive";

// charge
pub const NET_CHARGE: &str = "Has {{charge}} net charge";
pub const BALLOON_NET_CHARGE: &str = "{{balloon}} has {{charge}} net charge";
pub const BALLOON_RELATIVE_CHARGE_ALL: &str = "{{amount}} more negative charges than positive charges";
pub const BALLOON_SHOWING_CHARGES: &str = "showing {{amount}} negative charges";
pub const SHOWING_NO_CHARGES: &str = "showing no charges";
pub const HAS_RELATIVE_CHARGE: &str = "Has {{relativeCharge}}";
pub const BALLOON_HAS_RELATIVE_CHARGE: &str = "{{balloon}} has {{relativeCharge}}";
pub const NET_CHARGE_AND_RELATIVE: &str = "{{netCharge}}, {{relativeCharge}}";
pub const EACH_BALLOON: &str = "Each balloon";

// sweater
pub const SWEATER_RELATIVE_CHARGE_ALL: &str = "Sweater has {{amount}} more positive charges than negative charges";
pub const SWEATER_NO_NET_CHARGE_ALL: &str = "Sweater has zero net charge, many pairs of negative and positive charges";
pub const SWEATER_SHOWING_CHARGES: &str = "Sweater has positive net charge, showing {{amount}} positive charges";
pub const SWEATER_SHOWING_NO_CHARGES: &str = "Sweater has zero net charge, showing no charges";
pub const SWEATER_NO_MORE_CHARGES: &str = "Sweater has no more negative charges, only positive charges";
pub const SWEATER_SHOWING_ALL_POSITIVE: &str = "Sweater has positive net charge, showing all positive charges";
pub const SWEATER_NET_CHARGE: &str = "Sweater has {{charge}} net charge";

// wall
pub const WALL_HAS_MANY_CHARGES: &str = "Wall has many pairs of negative and positive charges";
pub const WALL_SHOWING_NO_CHARGES: &str = "Wall has zero net charge, showing no charges";
pub const WALL_NO_CHANGE_IN_CHARGES: &str = "In {{location}}, no change in charges";
pub const INDUCED_CHARGE: &str = "Negative charges in {{location}} move away from {{balloon}} {{amount}}";
pub const INDUCED_CHARGE_NO_AMOUNT: &str = "Negative charges in {{location}} move away from {{balloon}}";
pub const POSITIVE_CHARGES_DO_NOT_MOVE: &str = "Positive charges do not move";
pub const A_LITTLE_BIT: &str = "a little bit";
pub const A_LOT: &str = "a lot";
pub const QUITE_A_LOT: &str = "quite a lot";

// induced charge change
pub const INDUCED_BEGIN_TO_MOVE: &str = "Negative charges in {{location}} begin to move away from {{balloon}}";
pub const INDUCED_MOVE_A_LITTLE_MORE: &str = "Negative charges in {{location}} move away a little more from {{balloon}}";
pub const INDUCED_BEGIN_TO_RETURN: &str = "Negative charges in {{location}} begin to return";
pub const INDUCED_RETURN_A_LITTLE_MORE: &str = "Negative charges in {{location}} return a little more";

// charge pickup
pub const PICKS_UP_CHARGES: &str = "{{balloon}} picks up negative charges from sweater";
pub const PICKS_UP_MORE_CHARGES: &str = "{{balloon}} picks up more negative charges";
pub const AGAIN_MORE_CHARGES: &str = "Again, more negative charges";
pub const SAME_INCREASE_ON_SWEATER: &str = "Same increase of positive charges on sweater";
pub const NO_CHANGE_IN_CHARGES: &str = "No change in charges";
pub const NO_CHANGE_IN_NET_CHARGE: &str = "No change in net charge";
pub const MORE_PAIRS_OF_CHARGES: &str = "More pairs of charges {{direction}}";
pub const MORE_HIDDEN_PAIRS_OF_CHARGES: &str = "More hidden pairs of charges {{direction}}";
pub const RELEASE_HINT: &str = "Press Space to release.";

// wall rub
pub const NO_TRANSFER_OF_CHARGE: &str = "No transfer of charge";

// grab and release
pub const GRABBED: &str = "Grabbed";
pub const RELEASED: &str = "Released";
pub const INTERACTION_HINT: &str = "Press W, A, S, or D key to move balloon. Space to release.";

// movement
pub const MOVES: &str = "Moves {{velocity}} {{toObject}}";
pub const MOVING: &str = "Moving {{direction}}";
pub const TOWARDS_SWEATER: &str = "towards sweater";
pub const TO_WALL: &str = "to wall";
pub const VERY_SLOWLY: &str = "very slowly";
pub const SLOWLY: &str = "slowly";
pub const QUICKLY: &str = "quickly";
pub const VERY_QUICKLY: &str = "very quickly";
pub const NO_CHANGE_IN_POSITION: &str = "No change in position";
pub const NO_CHANGE_IN_POSITION_OR_CHARGE: &str = "No change in position. No change in charge.";

// visibility
pub const ADDED_TO_PLAY_AREA: &str = "{{balloon}} added to Play Area";
pub const ADDED_WITH_LOCATION: &str = "{{balloon}} added to Play Area. {{location}}";
pub const REMOVED_FROM_PLAY_AREA: &str = "{{balloon}} removed from Play Area";

// scene summary
pub const ROOM_OBJECTS_WITH_WALL: &str = "Currently, room has a sweater, a wall, and {{balloons}}";
pub const ROOM_OBJECTS_NO_WALL: &str = "Currently, room has a sweater and {{balloons}}";
pub const ONE_BALLOON: &str = "a yellow balloon";
pub const TWO_BALLOONS: &str = "two balloons, yellow and green";
pub const BALLOON_SUMMARY: &str = "{{balloon}}, {{location}}";
pub const ALL_NEUTRAL: &str = "All objects have zero net charge";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_in_replaces_every_placeholder() {
        let s = fill_in(INDUCED_CHARGE, &[("location", "upper wall"), ("balloon", "Yellow Balloon"), ("amount", "a lot")]);
        assert_eq!(s, "Negative charges in upper wall move away from Yellow Balloon a lot");
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("up and to the left"), "Up and to the left");
        assert_eq!(capitalize(""), "");
    }
}
