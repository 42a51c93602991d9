//! Fixed-step time integration of free balloons
//!
//! Velocity-Verlet driven by `ForceSet`; balloons have unit mass so forces
//! are accelerations. Dragged and hidden balloons are left alone.

use super::forces::ForceSet;
use super::model::BaseModel;
use super::states::{Balloon, Direction, NVec2};

fn is_free(b: &Balloon) -> bool {
    b.visible && !b.dragged
}

/// Charged balloons resting on the sweater stay there until dragged off
fn sticks(model: &BaseModel, i: usize) -> bool {
    let b = &model.balloons[i];
    b.charge != 0 && model.sweater.contains(b.center())
}

/// Drop velocity components that push into a bound the balloon rests on
fn zero_into_bounds(b: &mut Balloon, right_bound: f64, height: f64) {
    let eps = 1e-9;
    if b.position.x <= eps && b.velocity.x < 0.0 {
        b.velocity.x = 0.0;
    }
    if b.position.x + b.width >= right_bound - eps && b.velocity.x > 0.0 {
        b.velocity.x = 0.0;
    }
    if b.position.y <= eps && b.velocity.y < 0.0 {
        b.velocity.y = 0.0;
    }
    if b.position.y + b.height >= height - eps && b.velocity.y > 0.0 {
        b.velocity.y = 0.0;
    }
}

/// Advance free balloons by `dt` using velocity-Verlet
/// Two force evaluations per step; positions are clamped to the play area
/// after the drift and charged balloons resting on the sweater stick to it
pub fn verlet_integrator(model: &mut BaseModel, forces: &ForceSet, dt: f64) {
    let half_dt = 0.5 * dt;
    let right_bound = model.right_bound();
    let height = model.params.height;
    let stuck = [sticks(model, 0), sticks(model, 1)];

    // f_n at the current positions
    let mut f_old = [NVec2::zeros(); 2];
    forces.accumulate_forces(model, &mut f_old);

    // Kick: v_n+1/2 = v_n + (1/2 * dt) * f_n
    for (i, (b, f)) in model.balloons.iter_mut().zip(f_old.iter()).enumerate() {
        if is_free(b) && !stuck[i] {
            b.velocity += half_dt * *f;
        }
    }

    // Drift: x_n+1 = x_n + dt v_n+1/2, then clamp
    for i in 0..2 {
        if !is_free(&model.balloons[i]) || stuck[i] {
            continue;
        }
        let (w, h) = (model.balloons[i].width, model.balloons[i].height);
        let start = model.balloons[i].position;
        let proposed = start + dt * model.balloons[i].velocity;
        let (position, out_of_bounds) = model.check_balloon_restrictions(proposed, w, h);

        let b = &mut model.balloons[i];
        b.position = position;
        b.out_of_bounds = out_of_bounds;
        zero_into_bounds(b, right_bound, height);
        if let Some(direction) = Direction::from_delta(position - start) {
            b.direction = Some(direction);
        }
    }

    // f_n+1 at the new positions
    let mut f_new = [NVec2::zeros(); 2];
    forces.accumulate_forces(model, &mut f_new);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * f_n+1
    for i in 0..2 {
        if !is_free(&model.balloons[i]) {
            continue;
        }
        let sticks_now = sticks(model, i);
        let b = &mut model.balloons[i];
        if sticks_now {
            b.velocity = NVec2::zeros();
        } else {
            b.velocity += half_dt * f_new[i];
            zero_into_bounds(b, right_bound, height);
        }
    }
}
