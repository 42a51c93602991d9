//! Top-level model owning the balloon pair, the sweater and the wall.
//!
//! `BaseModel::step` advances one frame:
//! - dragged balloons get their drag velocity and may pick up a sweater charge
//! - free balloons are integrated under the active `ForceSet`
//! - wall minus charges are displaced by the charged balloons
//!
//! All cross-object predicates (on sweater, touching wall, inducing charge,
//! adjacency) are answered here so the narration layer only reads.

use tracing::{debug, info};

use crate::simulation::forces::{coulomb_force, ForceSet};
use crate::simulation::integrator::verlet_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Balloon, BalloonId, Direction, NVec2, ShowCharges};
use crate::simulation::sweater::Sweater;
use crate::simulation::wall::Wall;

/// Charge transfer state of one balloon for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferState {
    NotOnSweater,
    OnSweaterNoPickup,
    OnSweaterPickingUp,
}

#[derive(Debug, Clone)]
pub struct BaseModel {
    pub params: Parameters,
    pub balloons: [Balloon; 2], // indexed by BalloonId::index
    pub sweater: Sweater,
    pub wall: Wall,
    pub show_charges: ShowCharges,
    pub t: f64, // time
}

impl BaseModel {
    pub fn new(params: Parameters) -> Self {
        let (w, h) = (params.balloon_width, params.balloon_height);
        let balloons = [
            Balloon::new(BalloonId::Yellow, params.yellow_start, w, h, true),
            Balloon::new(BalloonId::Green, params.green_start, w, h, false),
        ];
        Self {
            sweater: Sweater::new(&params),
            wall: Wall::new(&params),
            balloons,
            show_charges: ShowCharges::All,
            t: 0.0,
            params,
        }
    }

    pub fn balloon(&self, id: BalloonId) -> &Balloon {
        &self.balloons[id.index()]
    }

    pub fn balloon_mut(&mut self, id: BalloonId) -> &mut Balloon {
        &mut self.balloons[id.index()]
    }

    /// Right edge of the play area, the wall face while the wall is visible
    pub fn right_bound(&self) -> f64 {
        if self.wall.visible {
            self.params.wall_x()
        } else {
            self.params.width
        }
    }

    /// Clamp a top-left `position` for an object of `width` x `height` into
    /// the play area. Returns the clamped position and whether it was clamped
    pub fn check_balloon_restrictions(&self, position: NVec2, width: f64, height: f64) -> (NVec2, bool) {
        let mut p = position;
        let mut out_of_bounds = false;
        let right = self.right_bound();
        if p.x + width > right {
            p.x = right - width;
            out_of_bounds = true;
        }
        if p.y < 0.0 {
            p.y = 0.0;
            out_of_bounds = true;
        }
        if p.y + height > self.params.height {
            p.y = self.params.height - height;
            out_of_bounds = true;
        }
        if p.x < 0.0 {
            p.x = 0.0;
            out_of_bounds = true;
        }
        (p, out_of_bounds)
    }

    pub fn on_sweater(&self, id: BalloonId) -> bool {
        let b = self.balloon(id);
        b.visible && self.sweater.contains(b.center())
    }

    pub fn touching_wall(&self, id: BalloonId) -> bool {
        let b = self.balloon(id);
        self.wall.visible && b.visible && b.position.x + b.width >= self.wall.x - 1e-6
    }

    pub fn both_visible(&self) -> bool {
        self.balloons.iter().all(|b| b.visible)
    }

    /// Centers closer than one balloon width, both visible
    pub fn balloons_adjacent(&self) -> bool {
        let [a, b] = &self.balloons;
        self.both_visible() && (a.center() - b.center()).norm() < self.params.balloon_width
    }

    pub fn max_charge(&self) -> i32 {
        self.params.max_charge()
    }

    /// Repulsion the balloon exerts on the closest wall plus charge
    pub fn force_to_closest_wall_charge(&self, id: BalloonId) -> NVec2 {
        let b = self.balloon(id);
        let site = self.wall.plus_charges[self.wall.closest_charge(b.center())].position;
        let kqq = self.params.induced_k * b.charge.unsigned_abs() as f64;
        coulomb_force(site, b.center(), kqq, self.params.induced_power, self.params.eps2)
    }

    pub fn inducing_charge(&self, id: BalloonId) -> bool {
        let b = self.balloon(id);
        if !self.wall.visible || !b.visible || b.charge == 0 {
            return false;
        }
        self.force_to_closest_wall_charge(id).norm() >= self.params.inducing_threshold
    }

    pub fn transfer_state(&self, id: BalloonId) -> TransferState {
        let b = self.balloon(id);
        if !self.on_sweater(id) {
            TransferState::NotOnSweater
        } else if b.dragged && b.drag_velocity != NVec2::zeros() && b.charge.abs() < self.max_charge() {
            TransferState::OnSweaterPickingUp
        } else {
            TransferState::OnSweaterNoPickup
        }
    }

    pub fn grab(&mut self, id: BalloonId) {
        let b = self.balloon_mut(id);
        b.dragged = true;
        b.velocity = NVec2::zeros();
    }

    pub fn release(&mut self, id: BalloonId) {
        let b = self.balloon_mut(id);
        b.dragged = false;
        b.drag_velocity = NVec2::zeros();
    }

    /// Move a dragged balloon so its center follows the pointer, clamped to
    /// the play area. The drag velocity is taken at the next step
    pub fn drag_to(&mut self, id: BalloonId, center: NVec2) {
        let b = self.balloon(id);
        let (w, h) = (b.width, b.height);
        let start = b.position;
        let target = center - NVec2::new(w / 2.0, h / 2.0);
        let (position, out_of_bounds) = self.check_balloon_restrictions(target, w, h);
        let b = self.balloon_mut(id);
        b.position = position;
        b.out_of_bounds = out_of_bounds;
        if let Some(direction) = Direction::from_delta(position - start) {
            b.direction = Some(direction);
        }
    }

    pub fn set_wall_visible(&mut self, visible: bool) {
        self.wall.set_visible(visible);
        for i in 0..2 {
            let b = &self.balloons[i];
            let (position, _) = self.check_balloon_restrictions(b.position, b.width, b.height);
            self.balloons[i].position = position;
        }
        let balloons = &self.balloons;
        self.wall.update_induced(balloons, &self.params);
    }

    pub fn set_balloon_visible(&mut self, id: BalloonId, visible: bool) {
        let b = self.balloon_mut(id);
        b.visible = visible;
        if !visible {
            b.dragged = false;
            b.velocity = NVec2::zeros();
            b.drag_velocity = NVec2::zeros();
        }
    }

    /// Advance one frame of `dt` seconds
    pub fn step(&mut self, dt: f64, forces: &ForceSet) {
        if dt <= 0.0 {
            return;
        }
        let radius = self.params.pickup_radius;
        let max_charge = self.max_charge();

        for i in 0..2 {
            let id = self.balloons[i].id;
            if !self.balloons[i].visible || !self.balloons[i].dragged {
                continue;
            }
            let b = &mut self.balloons[i];
            b.drag_velocity = (b.position - b.last_step_position) / dt;

            if self.transfer_state(id) == TransferState::OnSweaterPickingUp {
                let center = self.balloons[i].center();
                if self.sweater.take_nearest(center, radius) {
                    let b = &mut self.balloons[i];
                    b.charge -= 1;
                    debug!(balloon = ?id, charge = b.charge, "charge transferred");
                }
            }
            debug_assert!(self.balloons[i].charge.abs() <= max_charge);
        }

        verlet_integrator(self, forces, dt);

        for b in self.balloons.iter_mut() {
            if !b.dragged {
                b.drag_velocity = NVec2::zeros();
            }
            b.last_step_position = b.position;
        }
        let balloons = &self.balloons;
        self.wall.update_induced(balloons, &self.params);
        self.t += dt;
    }

    pub fn reset(&mut self) {
        for b in self.balloons.iter_mut() {
            b.reset();
        }
        self.sweater.reset();
        self.wall.reset();
        self.show_charges = ShowCharges::All;
        self.t = 0.0;
        info!("model reset");
    }
}
