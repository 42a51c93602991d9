//! Qualitative buckets over charge magnitude.
//!
//! Each table is ascending and gap-free; the last bucket is open-ended so
//! every magnitude falls in exactly one bucket.

use crate::description::strings;

/// Bucket of a balloon (or sweater) charge magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChargeBucket {
    No,
    AFew,
    Several,
    Many,
}

impl ChargeBucket {
    pub fn phrase(self) -> &'static str {
        match self {
            ChargeBucket::No => strings::NO,
            ChargeBucket::AFew => strings::A_FEW,
            ChargeBucket::Several => strings::SEVERAL,
            ChargeBucket::Many => strings::MANY,
        }
    }
}

const CHARGE_BUCKETS: [(u32, u32, ChargeBucket); 4] = [
    (0, 0, ChargeBucket::No),
    (1, 14, ChargeBucket::AFew),
    (15, 39, ChargeBucket::Several),
    (40, u32::MAX, ChargeBucket::Many),
];

const VELOCITY_PHRASES: [(u32, u32, &str); 5] = [
    (0, 0, strings::VERY_SLOWLY),
    (1, 14, strings::VERY_SLOWLY),
    (15, 29, strings::SLOWLY),
    (30, 44, strings::QUICKLY),
    (45, u32::MAX, strings::VERY_QUICKLY),
];

const INDUCED_AMOUNTS: [(u32, u32, &str); 3] = [
    (0, 19, strings::A_LITTLE_BIT),
    (20, 29, strings::A_LOT),
    (30, u32::MAX, strings::QUITE_A_LOT),
];

fn lookup<T: Copy>(table: &[(u32, u32, T)], magnitude: u32) -> T {
    let mut found = None;
    for &(min, max, value) in table {
        if magnitude >= min && magnitude <= max {
            found = Some(value);
        }
    }
    // tables start at zero and end at u32::MAX
    found.unwrap_or(table[table.len() - 1].2)
}

pub fn charge_bucket(charge: i32) -> ChargeBucket {
    lookup(&CHARGE_BUCKETS, charge.unsigned_abs())
}

/// How fast a released balloon drifts, keyed by its charge
pub fn velocity_phrase(charge: i32) -> &'static str {
    lookup(&VELOCITY_PHRASES, charge.unsigned_abs())
}

/// How far wall charges move, keyed by the inducing charge magnitude
pub fn induced_amount(charge: i32) -> &'static str {
    lookup(&INDUCED_AMOUNTS, charge.unsigned_abs())
}
