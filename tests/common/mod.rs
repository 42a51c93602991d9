#![allow(dead_code)]

use basesim::{BalloonId, Engine, NVec2, NarrationTiming, Parameters, Scenario};

/// Scenario with default parameters; `narrate = false` for physics-only runs
pub fn scenario(narrate: bool) -> Scenario {
    let engine = Engine {
        narrate,
        ..Engine::default()
    };
    Scenario::new(engine, Parameters::default(), NarrationTiming::default())
}

/// One frame, returning whatever was narrated during it
pub fn step(s: &mut Scenario) -> Vec<String> {
    s.step(s.engine.frame_dt);
    s.drain_utterances().into_iter().map(|u| u.text).collect()
}

/// Largest center the balloon can reach on each axis, smallest first
fn reachable(s: &Scenario, id: BalloonId) -> (NVec2, NVec2) {
    let b = s.model.balloon(id);
    let (hw, hh) = (b.width / 2.0, b.height / 2.0);
    (
        NVec2::new(hw, hh),
        NVec2::new(s.model.right_bound() - hw, s.model.params.height - hh),
    )
}

/// Drag a grabbed balloon onto the closest sweater charge it has not taken,
/// then hold still for two frames so the drag counts as stopped.
/// Returns the narration of all three frames
pub fn rub_once(s: &mut Scenario, id: BalloonId) -> Vec<String> {
    let center = s.model.balloon(id).center();
    let (lo, hi) = reachable(s, id);
    let mut target = match s.model.sweater.nearest_unmoved(center, f64::INFINITY) {
        Some(i) => s.model.sweater.charges[i].position,
        None => NVec2::new(180.0, 250.0),
    };
    target.x = target.x.clamp(lo.x, hi.x);
    target.y = target.y.clamp(lo.y, hi.y);
    if (target - center).norm() < 1e-9 {
        target.x += 2.0;
    }

    s.drag_to(id, target);
    let mut said = step(s);
    said.extend(step(s));
    said.extend(step(s));
    said
}

/// Grab `id` and rub until it carries `charge` (negative), collecting narration
pub fn rub_to(s: &mut Scenario, id: BalloonId, charge: i32) -> Vec<String> {
    s.grab(id);
    let mut said = step(s);
    for _ in 0..200 {
        if s.model.balloon(id).charge <= charge || s.model.sweater.remaining() == 0 {
            break;
        }
        said.extend(rub_once(s, id));
    }
    said
}
