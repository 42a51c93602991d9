//! The wall: a neutral dielectric with fixed plus charges and minus
//! charges that are pushed away by nearby charged balloons.

use tracing::debug;

use crate::simulation::forces::coulomb_force;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Balloon, NVec2, PointCharge};

#[derive(Debug, Clone)]
pub struct Wall {
    pub x: f64, // left face
    pub width: f64,
    pub height: f64,
    pub visible: bool,
    pub plus_charges: Vec<PointCharge>, // never move
    pub minus_charges: Vec<PointCharge>, // displaced by induction
}

impl Wall {
    /// Lattice of `wall_columns` x `wall_rows` pairs. Even columns start half
    /// a row down, odd columns at the top edge; minus charges sit one charge
    /// radius off their plus partner.
    pub fn new(p: &Parameters) -> Self {
        let x = p.wall_x();
        let dx = (70.0 / p.wall_columns as f64 + 2.0).round();
        let dy = p.height / p.wall_rows as f64;
        let mut plus_charges = Vec::with_capacity(p.wall_columns * p.wall_rows);
        let mut minus_charges = Vec::with_capacity(p.wall_columns * p.wall_rows);
        for i in 0..p.wall_columns {
            let y0 = if i % 2 == 0 { dy / 2.0 } else { 1.0 };
            for k in 0..p.wall_rows {
                let site = NVec2::new(i as f64 * dx + x + 1.0, k as f64 * dy + y0);
                plus_charges.push(PointCharge::new(site));
                minus_charges.push(PointCharge::new(site + NVec2::new(-p.charge_radius, p.charge_radius)));
            }
        }
        Self {
            x,
            width: p.wall_width,
            height: p.height,
            visible: true,
            plus_charges,
            minus_charges,
        }
    }

    /// Index of the plus charge closest to `point`
    pub fn closest_charge(&self, point: NVec2) -> usize {
        self.plus_charges
            .iter()
            .enumerate()
            .map(|(i, c)| (i, (c.position - point).norm_squared()))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Recompute every minus charge's displacement from the visible balloons.
    /// Contributions sum, so the result is continuous in balloon position and
    /// returns to zero once no balloon carries charge.
    pub fn update_induced(&mut self, balloons: &[Balloon; 2], p: &Parameters) {
        let max = p.max_induced_displacement;
        for c in self.minus_charges.iter_mut() {
            let mut dv = NVec2::zeros();
            if self.visible {
                for b in balloons.iter().filter(|b| b.visible && b.charge != 0) {
                    let kqq = p.induced_k * b.charge.unsigned_abs() as f64;
                    dv += coulomb_force(c.position, b.center(), kqq, p.induced_power, p.eps2);
                }
            }
            let n = dv.norm();
            if n > max {
                dv *= max / n;
            }
            c.displacement = dv;
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            debug!(visible, "wall visibility changed");
        }
        self.visible = visible;
    }

    pub fn reset(&mut self) {
        self.visible = true;
        for c in self.minus_charges.iter_mut() {
            c.reset();
        }
    }
}
