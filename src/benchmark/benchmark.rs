use std::time::Instant;

use crate::description::describer::NarrationTiming;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BalloonId, NVec2};

/// Helper to build a two-balloon scenario with both balloons charged and released
fn make_scenario(narrate: bool) -> Scenario {
    let engine = Engine {
        narrate,
        ..Engine::default()
    };
    let mut scenario = Scenario::new(engine, Parameters::default(), NarrationTiming::default());
    scenario.set_balloon_visible(BalloonId::Green, true);

    // rub both balloons across the sweater
    for id in BalloonId::ALL {
        scenario.grab(id);
        for i in 0..40 {
            let i_f = i as f64;
            let center = NVec2::new(180.0 + (i_f * 0.9).sin() * 120.0, 250.0 + (i_f * 0.4).cos() * 120.0);
            scenario.drag_to(id, center);
            scenario.step(scenario.engine.frame_dt);
        }
        scenario.drag_to(id, NVec2::new(500.0, 250.0));
        scenario.step(scenario.engine.frame_dt);
        scenario.release(id);
    }
    scenario.queue.clear();
    scenario
}

/// Time frames of stepping, physics only and with narration
pub fn bench_step() {
    // Different run lengths to test
    let frame_counts = [600, 1200, 2400, 4800];

    for frames in frame_counts {
        let mut physics = make_scenario(false);
        let mut narrated = make_scenario(true);
        let dt = physics.engine.frame_dt;

        // Warm up
        physics.step(dt);
        narrated.step(dt);

        let t0 = Instant::now();
        for _ in 0..frames {
            physics.step(dt);
        }
        let physics_per_frame = t0.elapsed().as_secs_f64() / frames as f64;

        let t1 = Instant::now();
        let mut spoken = 0;
        for _ in 0..frames {
            narrated.step(dt);
            spoken += narrated.drain_utterances().len();
        }
        let narrated_per_frame = t1.elapsed().as_secs_f64() / frames as f64;

        println!(
            "frames = {frames:5}, physics = {:10.3e} s/frame, narrated = {:10.3e} s/frame, utterances = {spoken}",
            physics_per_frame, narrated_per_frame
        );
    }
}
