//! The sweater and its lattice of transferable charges.

use tracing::debug;

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, PointCharge};

#[derive(Debug, Clone)]
pub struct Sweater {
    pub origin: NVec2, // top-left
    pub width: f64,
    pub height: f64,
    pub charges: Vec<PointCharge>, // flat lattice, never shrinks
}

impl Sweater {
    /// Staggered lattice, alternate rows shifted by a quarter column
    pub fn new(p: &Parameters) -> Self {
        let col_spacing = p.sweater_width / p.sweater_columns as f64;
        let row_spacing = (p.sweater_height - 40.0) / p.sweater_rows as f64;
        let mut charges = Vec::with_capacity(p.sweater_columns * p.sweater_rows);
        for row in 0..p.sweater_rows {
            let shift = if row % 2 == 1 { col_spacing / 4.0 } else { 0.0 };
            for col in 0..p.sweater_columns {
                let x = p.sweater_origin.x + col_spacing * (col as f64 + 0.2) + shift;
                let y = p.sweater_origin.y + 20.0 + row_spacing * row as f64;
                charges.push(PointCharge::new(NVec2::new(x, y)));
            }
        }
        Self {
            origin: p.sweater_origin,
            width: p.sweater_width,
            height: p.sweater_height,
            charges,
        }
    }

    pub fn center(&self) -> NVec2 {
        self.origin + NVec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn right(&self) -> f64 {
        self.origin.x + self.width
    }

    pub fn contains(&self, point: NVec2) -> bool {
        point.x >= self.origin.x
            && point.x <= self.right()
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.height
    }

    /// Net charge, one positive unit per charge given away
    pub fn charge(&self) -> i32 {
        self.charges.iter().filter(|c| c.moved).count() as i32
    }

    pub fn capacity(&self) -> i32 {
        self.charges.len() as i32
    }

    pub fn remaining(&self) -> i32 {
        self.capacity() - self.charge()
    }

    /// Nearest charge not yet moved within `radius` of `point`
    pub fn nearest_unmoved(&self, point: NVec2, radius: f64) -> Option<usize> {
        self.charges
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.moved)
            .map(|(i, c)| (i, (c.position - point).norm()))
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Mark the nearest unmoved charge within `radius` as moved.
    /// Returns false once nothing is in reach, including an exhausted sweater
    pub fn take_nearest(&mut self, point: NVec2, radius: f64) -> bool {
        match self.nearest_unmoved(point, radius) {
            Some(i) => {
                self.charges[i].moved = true;
                debug!(index = i, remaining = self.remaining(), "sweater charge moved");
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        for c in self.charges.iter_mut() {
            c.reset();
        }
    }
}
