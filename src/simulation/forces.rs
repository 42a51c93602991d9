//! Force contributors for the balloon motion model
//!
//! Defines the softened inverse-power Coulomb law and the force terms
//! acting on free balloons: sweater attraction, wall attraction and
//! balloon-balloon repulsion

use crate::simulation::model::BaseModel;
use crate::simulation::states::NVec2;

/// Force on a charge at `p1` from a charge at `p2`
/// - `kqq` is the coupling times both charges, positive repels
/// - magnitude falls off as `(|r|^2 + eps2)^(power / 2)`, so it stays
///   finite and continuous as the charges approach
pub fn coulomb_force(p1: NVec2, p2: NVec2, kqq: f64, power: f64, eps2: f64) -> NVec2 {
    let r = p1 - p2;
    let r2 = r.dot(&r);
    if r2 == 0.0 {
        return NVec2::zeros();
    }
    let d2 = r2 + eps2;
    let magnitude = kqq / d2.powf(0.5 * power);
    r * (magnitude / r2.sqrt())
}

/// Collection of force terms acting on the balloon pair
/// Each term implements [`ForceTerm`] and their contributions are summed
/// into a single force per balloon, then clamped to `max_force`
pub struct ForceSet {
    terms: Vec<Box<dyn ForceTerm + Send + Sync>>,
    max_force: f64,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new(max_force: f64) -> Self {
        Self {
            terms: Vec::new(),
            max_force,
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceTerm + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces for both balloons in `model`
    /// - `out[i]` is indexed by `BalloonId::index`
    pub fn accumulate_forces(&self, model: &BaseModel, out: &mut [NVec2; 2]) {
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(model, out);
        }
        for f in out.iter_mut() {
            let n = f.norm();
            if n > self.max_force {
                *f *= self.max_force / n;
            }
        }
    }
}

/// Trait for force sources operating on [`BaseModel`]
/// Implementations add their contribution into `out[i]` for each balloon
pub trait ForceTerm {
    fn force(&self, model: &BaseModel, out: &mut [NVec2; 2]);
}

/// Pull of the charged sweater on an oppositely charged balloon
/// Fades to zero over `ramp` as the balloon center reaches the sweater edge,
/// where the balloon sticks instead
pub struct SweaterAttraction {
    pub k: f64,
    pub power: f64,
    pub eps2: f64,
    pub ramp: f64,
}

impl ForceTerm for SweaterAttraction {
    fn force(&self, model: &BaseModel, out: &mut [NVec2; 2]) {
        let sweater = &model.sweater;
        let q_sweater = sweater.charge() as f64;
        if q_sweater == 0.0 {
            return;
        }
        for b in model.balloons.iter() {
            if !b.visible || b.charge == 0 {
                continue;
            }
            let center = b.center();
            // kqq < 0 pulls toward the sweater
            let kqq = self.k * q_sweater * b.charge as f64;
            let f = coulomb_force(center, sweater.center(), kqq, self.power, self.eps2);
            let gap = center.x - sweater.right();
            let fade = (gap / self.ramp).clamp(0.0, 1.0);
            out[b.id.index()] += fade * f;
        }
    }
}

/// Pull of a visible wall on a charged balloon, by the gap to the wall face
pub struct WallAttraction {
    pub k: f64,
    pub power: f64,
    pub eps2: f64,
}

impl ForceTerm for WallAttraction {
    fn force(&self, model: &BaseModel, out: &mut [NVec2; 2]) {
        if !model.wall.visible {
            return;
        }
        for b in model.balloons.iter() {
            if !b.visible || b.charge == 0 {
                continue;
            }
            let gap = (model.wall.x - (b.position.x + b.width)).max(0.0);
            let magnitude = self.k * b.charge.unsigned_abs() as f64 / (gap * gap + self.eps2).powf(0.5 * self.power);
            out[b.id.index()].x += magnitude;
        }
    }
}

/// Repulsion between two charged balloons
/// A dragged balloon is held by the user and takes no force
pub struct BalloonRepulsion {
    pub k: f64,
    pub power: f64,
    pub eps2: f64,
}

impl ForceTerm for BalloonRepulsion {
    fn force(&self, model: &BaseModel, out: &mut [NVec2; 2]) {
        let [a, b] = &model.balloons;
        if !a.visible || !b.visible || a.charge == 0 || b.charge == 0 {
            return;
        }
        let kqq = self.k * (a.charge * b.charge) as f64;
        let f = coulomb_force(a.center(), b.center(), kqq, self.power, self.eps2);
        // equal and opposite
        if !a.dragged {
            out[a.id.index()] += f;
        }
        if !b.dragged {
            out[b.id.index()] -= f;
        }
    }
}
