mod common;

use basesim::simulation::play_area::{self, Column, Row};
use basesim::{
    build_forces, coulomb_force, BalloonId, BalloonRepulsion, BaseModel, Direction, Engine, ForceSet, NVec2, Parameters,
    Scenario, ScenarioConfig, SweaterAttraction, TransferState, WallAttraction,
};

use common::{rub_once, rub_to, scenario, step};

/// Model with both balloons visible and charged, placed apart along x
pub fn two_charged_balloons(q: i32) -> BaseModel {
    let mut model = BaseModel::new(Parameters::default());
    for (id, x) in [(BalloonId::Yellow, 250.0), (BalloonId::Green, 450.0)] {
        let b = model.balloon_mut(id);
        b.visible = true;
        b.charge = q;
        b.position = NVec2::new(x, 120.0);
    }
    model
}

/// Scenario built from a YAML snippet
pub fn from_yaml(yaml: &str) -> Scenario {
    let cfg = ScenarioConfig::from_yaml_str(yaml).expect("valid scenario");
    Scenario::build_scenario(cfg).expect("scenario builds")
}

// ==================================================================================
// Force tests
// ==================================================================================

#[test]
fn coulomb_zero_at_zero_separation() {
    let p = NVec2::new(10.0, 10.0);
    assert_eq!(coulomb_force(p, p, 1.0e6, 2.0, 100.0), NVec2::zeros());
}

#[test]
fn coulomb_inverse_square_without_softening() {
    let origin = NVec2::zeros();
    let f_r = coulomb_force(NVec2::new(10.0, 0.0), origin, 1.0, 2.0, 0.0);
    let f_2r = coulomb_force(NVec2::new(20.0, 0.0), origin, 1.0, 2.0, 0.0);

    let ratio = f_r.norm() / f_2r.norm();
    assert!((ratio - 4.0).abs() < 1e-9, "Expected 4x, got {}", ratio);
    // positive kqq repels
    assert!(f_r.x > 0.0);
}

#[test]
fn coulomb_softening_bounds_close_approach() {
    let kqq = 1.0e6;
    let eps2 = 100.0;
    let f = coulomb_force(NVec2::new(1e-6, 0.0), NVec2::zeros(), kqq, 2.0, eps2);
    assert!(f.norm() <= kqq / eps2 + 1e-9, "Softening failed: {}", f.norm());
}

#[test]
fn repulsion_newton_third_law() {
    let model = two_charged_balloons(-10);
    let forces = ForceSet::new(f64::INFINITY).with(BalloonRepulsion {
        k: 8000.0,
        power: 2.0,
        eps2: 100.0,
    });

    let mut out = [NVec2::zeros(); 2];
    forces.accumulate_forces(&model, &mut out);

    let net = out[0] + out[1];
    assert!(net.norm() < 1e-9, "Net force not zero: {:?}", net);
    // yellow is left of green and pushed further left
    assert!(out[0].x < 0.0);
}

#[test]
fn dragged_balloon_takes_no_repulsion() {
    let mut model = two_charged_balloons(-10);
    model.grab(BalloonId::Yellow);
    let forces = ForceSet::new(f64::INFINITY).with(BalloonRepulsion {
        k: 8000.0,
        power: 2.0,
        eps2: 100.0,
    });

    let mut out = [NVec2::zeros(); 2];
    forces.accumulate_forces(&model, &mut out);

    assert_eq!(out[0], NVec2::zeros());
    assert!(out[1].x > 0.0);
}

#[test]
fn net_force_is_clamped() {
    let mut model = two_charged_balloons(-50);
    model.balloon_mut(BalloonId::Green).position = NVec2::new(260.0, 120.0);
    let forces = ForceSet::new(5.0).with(BalloonRepulsion {
        k: 8000.0,
        power: 2.0,
        eps2: 100.0,
    });

    let mut out = [NVec2::zeros(); 2];
    forces.accumulate_forces(&model, &mut out);

    for f in out {
        assert!(f.norm() <= 5.0 + 1e-9, "Force not clamped: {}", f.norm());
    }
}

#[test]
fn falloff_exponents_come_from_parameters() {
    let s = from_yaml("parameters:\n  sweater_power: 3.0\n  balloon_power: 3.0\n");
    assert_eq!(s.model.params.sweater_power, 3.0);
    assert_eq!(s.model.params.balloon_power, 3.0);

    let model = two_charged_balloons(-10);
    let mut steep = Parameters::default();
    steep.balloon_power = 3.0;

    let mut square = [NVec2::zeros(); 2];
    let mut cube = [NVec2::zeros(); 2];
    build_forces(&Parameters::default()).accumulate_forces(&model, &mut square);
    build_forces(&steep).accumulate_forces(&model, &mut cube);

    // 200 px apart, a steeper falloff pushes much less
    assert!(square[0].x < 0.0 && cube[0].x < 0.0);
    assert!(cube[0].norm() < square[0].norm() / 10.0, "{:?} vs {:?}", cube[0], square[0]);
}

#[test]
fn sweater_attraction_fades_at_sweater_edge() {
    let mut model = BaseModel::new(Parameters::default());
    let center = model.sweater.center();
    for _ in 0..10 {
        assert!(model.sweater.take_nearest(center, f64::INFINITY));
    }
    model.balloon_mut(BalloonId::Yellow).charge = -10;
    let forces = ForceSet::new(f64::INFINITY).with(SweaterAttraction {
        k: 8000.0,
        power: 2.0,
        eps2: 100.0,
        ramp: 40.0,
    });
    let half_width = model.balloon(BalloonId::Yellow).width / 2.0;

    // center on the sweater's right edge
    model.balloon_mut(BalloonId::Yellow).position.x = model.sweater.right() - half_width;
    let mut out = [NVec2::zeros(); 2];
    forces.accumulate_forces(&model, &mut out);
    assert_eq!(out[0], NVec2::zeros());

    // well clear of the ramp
    model.balloon_mut(BalloonId::Yellow).position.x = model.sweater.right() + 100.0 - half_width;
    forces.accumulate_forces(&model, &mut out);
    assert!(out[0].x < 0.0, "Sweater should pull left, got {:?}", out[0]);
}

#[test]
fn wall_attraction_only_while_wall_visible() {
    let mut model = BaseModel::new(Parameters::default());
    model.balloon_mut(BalloonId::Yellow).charge = -10;
    let forces = ForceSet::new(f64::INFINITY).with(WallAttraction {
        k: 250.0,
        power: 2.0,
        eps2: 100.0,
    });

    let mut out = [NVec2::zeros(); 2];
    forces.accumulate_forces(&model, &mut out);
    assert!(out[0].x > 0.0);

    model.set_wall_visible(false);
    forces.accumulate_forces(&model, &mut out);
    assert_eq!(out[0], NVec2::zeros());
}

// ==================================================================================
// Charge transfer tests
// ==================================================================================

#[test]
fn rubbing_conserves_charge() {
    let mut s = scenario(false);
    s.grab(BalloonId::Yellow);
    step(&mut s);

    let mut last_sweater = 0;
    for _ in 0..80 {
        rub_once(&mut s, BalloonId::Yellow);
        let sweater = s.model.sweater.charge();
        let balloons: i32 = s.model.balloons.iter().map(|b| b.charge).sum();

        assert_eq!(sweater + balloons, 0, "Charge not conserved");
        assert!(sweater >= last_sweater, "Sweater charge decreased");
        assert!(s.model.balloon(BalloonId::Yellow).charge >= -s.model.max_charge());
        last_sweater = sweater;
    }
    assert_eq!(s.model.sweater.remaining(), 0);
    assert_eq!(s.model.balloon(BalloonId::Yellow).charge, -57);
}

#[test]
fn pickup_needs_drag_motion() {
    let mut s = scenario(false);
    s.grab(BalloonId::Yellow);
    s.drag_to(BalloonId::Yellow, NVec2::new(180.0, 250.0));
    step(&mut s);
    assert_eq!(s.model.balloon(BalloonId::Yellow).charge, -1);
    assert_eq!(s.model.transfer_state(BalloonId::Yellow), TransferState::OnSweaterPickingUp);

    // holding still picks up nothing
    for _ in 0..10 {
        step(&mut s);
    }
    assert_eq!(s.model.balloon(BalloonId::Yellow).charge, -1);
    assert_eq!(s.model.transfer_state(BalloonId::Yellow), TransferState::OnSweaterNoPickup);
}

#[test]
fn at_most_one_charge_per_step() {
    let mut s = scenario(false);
    s.grab(BalloonId::Yellow);
    for i in 0..10 {
        let x = if i % 2 == 0 { 170.0 } else { 190.0 };
        s.drag_to(BalloonId::Yellow, NVec2::new(x, 250.0));
        let before = s.model.balloon(BalloonId::Yellow).charge;
        step(&mut s);
        let after = s.model.balloon(BalloonId::Yellow).charge;
        assert!(before - after <= 1, "Picked up {} charges in one step", before - after);
    }
}

#[test]
fn pickup_limited_to_radius() {
    let mut params = Parameters::default();
    params.pickup_radius = 1.0;
    let mut s = Scenario::new(Engine::default(), params, Default::default());

    s.grab(BalloonId::Yellow);
    s.drag_to(BalloonId::Yellow, NVec2::new(200.0, 300.0));
    step(&mut s);

    assert_eq!(s.model.balloon(BalloonId::Yellow).charge, 0);
    assert_eq!(s.model.transfer_state(BalloonId::Yellow), TransferState::OnSweaterPickingUp);
}

#[test]
fn free_balloon_on_sweater_does_not_pick_up() {
    let mut s = from_yaml(
        r#"
balloons:
  - id: yellow
    center: [180.0, 250.0]
"#,
    );
    for _ in 0..60 {
        step(&mut s);
    }
    assert_eq!(s.model.balloon(BalloonId::Yellow).charge, 0);
    assert_eq!(s.model.transfer_state(BalloonId::Yellow), TransferState::OnSweaterNoPickup);
}

#[test]
fn transfer_state_off_sweater() {
    let model = BaseModel::new(Parameters::default());
    assert_eq!(model.transfer_state(BalloonId::Yellow), TransferState::NotOnSweater);
}

// ==================================================================================
// Motion tests
// ==================================================================================

#[test]
fn neutral_balloon_stays_put() {
    let mut s = scenario(false);
    let start = s.model.balloon(BalloonId::Yellow).position;
    for _ in 0..120 {
        step(&mut s);
    }
    assert_eq!(s.model.balloon(BalloonId::Yellow).position, start);
}

#[test]
fn charged_balloon_drifts_to_sweater_and_sticks() {
    let mut s = from_yaml(
        r#"
engine:
  narrate: false
balloons:
  - id: yellow
    center: [450.0, 250.0]
    charge: -20
"#,
    );
    let start_x = s.model.balloon(BalloonId::Yellow).center().x;
    for _ in 0..600 {
        step(&mut s);
    }
    let b = s.model.balloon(BalloonId::Yellow);

    assert!(b.center().x < start_x);
    assert!(s.model.on_sweater(BalloonId::Yellow), "Balloon did not reach the sweater");
    assert_eq!(b.velocity, NVec2::zeros());
    assert_eq!(b.charge, -20);
}

#[test]
fn drag_is_clamped_to_play_area() {
    let mut s = scenario(false);
    s.grab(BalloonId::Yellow);

    s.drag_to(BalloonId::Yellow, NVec2::new(-100.0, -100.0));
    let b = s.model.balloon(BalloonId::Yellow);
    assert_eq!(b.position, NVec2::zeros());
    assert!(b.out_of_bounds);

    s.drag_to(BalloonId::Yellow, NVec2::new(900.0, 250.0));
    let b = s.model.balloon(BalloonId::Yellow);
    assert!((b.position.x + b.width - s.model.params.wall_x()).abs() < 1e-9);
    assert!(b.out_of_bounds);
    assert!(s.model.touching_wall(BalloonId::Yellow));

    s.drag_to(BalloonId::Yellow, NVec2::new(400.0, 250.0));
    assert!(!s.model.balloon(BalloonId::Yellow).out_of_bounds);
    assert_eq!(s.model.balloon(BalloonId::Yellow).direction, Some(Direction::Left));
}

#[test]
fn showing_wall_pushes_balloon_out() {
    let mut s = scenario(false);
    s.set_wall_visible(false);
    s.grab(BalloonId::Yellow);
    s.drag_to(BalloonId::Yellow, NVec2::new(900.0, 250.0));
    let b = s.model.balloon(BalloonId::Yellow);
    assert!((b.position.x + b.width - s.model.params.width).abs() < 1e-9);
    assert!(!s.model.touching_wall(BalloonId::Yellow));

    s.set_wall_visible(true);
    let b = s.model.balloon(BalloonId::Yellow);
    assert!(b.position.x + b.width <= s.model.params.wall_x() + 1e-9);
}

#[test]
fn step_with_zero_dt_changes_nothing() {
    let mut s = scenario(false);
    s.grab(BalloonId::Yellow);
    s.drag_to(BalloonId::Yellow, NVec2::new(180.0, 250.0));
    s.step(0.0);

    assert_eq!(s.model.t, 0.0);
    assert_eq!(s.model.balloon(BalloonId::Yellow).charge, 0);
}

#[test]
fn host_delta_is_clamped() {
    let engine = Engine::default();
    assert_eq!(engine.clamp_dt(1.0), engine.max_dt);
    assert_eq!(engine.clamp_dt(-1.0), 0.0);
    assert_eq!(engine.clamp_dt(0.01), 0.01);
}

// ==================================================================================
// Wall induction tests
// ==================================================================================

#[test]
fn induced_displacement_is_bounded_and_resets() {
    let mut s = from_yaml(
        r#"
engine:
  narrate: false
balloons:
  - id: yellow
    center: [600.0, 250.0]
    charge: -30
"#,
    );
    let max = s.model.params.max_induced_displacement;
    let largest = s
        .model
        .wall
        .minus_charges
        .iter()
        .map(|c| c.displacement.norm())
        .fold(0.0, f64::max);
    assert!(largest > 0.0);
    assert!(largest <= max + 1e-9);
    assert!(s.model.inducing_charge(BalloonId::Yellow));

    // plus charges never move
    assert!(s.model.wall.plus_charges.iter().all(|c| c.displacement == NVec2::zeros()));

    s.set_wall_visible(false);
    assert!(!s.model.inducing_charge(BalloonId::Yellow));
    assert!(s.model.wall.minus_charges.iter().all(|c| c.displacement == NVec2::zeros()));

    s.set_wall_visible(true);
    s.reset();
    assert!(s.model.wall.minus_charges.iter().all(|c| c.displacement == NVec2::zeros()));
}

#[test]
fn induced_displacement_is_continuous() {
    let mut model = BaseModel::new(Parameters::default());
    model.balloon_mut(BalloonId::Yellow).charge = -40;
    let site = model.wall.closest_charge(NVec2::new(model.wall.x, 250.0));

    let mut last: Option<NVec2> = None;
    let mut x = 300.0;
    while x <= 621.0 {
        let b = model.balloon_mut(BalloonId::Yellow);
        b.position = NVec2::new(x - b.width / 2.0, 250.0 - b.height / 2.0);
        model.wall.update_induced(&model.balloons, &model.params);

        let d = model.wall.minus_charges[site].displacement;
        if let Some(prev) = last {
            assert!((d - prev).norm() < 1.0, "Jump in displacement at x = {}", x);
        }
        last = Some(d);
        x += 0.5;
    }
}

#[test]
fn uncharged_balloon_does_not_induce() {
    let mut s = scenario(false);
    s.grab(BalloonId::Yellow);
    s.drag_to(BalloonId::Yellow, NVec2::new(621.0, 250.0));
    step(&mut s);
    assert!(s.model.touching_wall(BalloonId::Yellow));
    assert!(!s.model.inducing_charge(BalloonId::Yellow));
}

// ==================================================================================
// Play area tests
// ==================================================================================

#[test]
fn every_location_has_one_region() {
    let mut x = 0.0;
    while x <= 768.0 {
        let mut y = 0.0;
        while y <= 504.0 {
            let p = NVec2::new(x, y);
            let region = play_area::locate(p, true);
            assert_eq!(region, play_area::locate(p, true));
            assert_ne!(region.column, Column::RightEdge);
            y += 3.5;
        }
        x += 0.5;
    }
}

#[test]
fn rows_split_the_height() {
    assert_eq!(play_area::row(NVec2::new(0.0, 0.0)), Row::Upper);
    assert_eq!(play_area::row(NVec2::new(0.0, 250.0)), Row::Center);
    assert_eq!(play_area::row(NVec2::new(0.0, 504.0)), Row::Lower);
}

#[test]
fn sweater_columns_are_on_sweater() {
    assert!(play_area::column(NVec2::new(100.0, 0.0), true).on_sweater());
    assert!(!play_area::column(NVec2::new(400.0, 0.0), true).on_sweater());
}

// ==================================================================================
// Model tests
// ==================================================================================

#[test]
fn adjacency_needs_both_visible_and_close() {
    let mut model = two_charged_balloons(0);
    model.balloon_mut(BalloonId::Green).position = NVec2::new(350.0, 120.0);
    assert!(model.balloons_adjacent());

    model.balloon_mut(BalloonId::Green).position = NVec2::new(450.0, 120.0);
    assert!(!model.balloons_adjacent());

    model.balloon_mut(BalloonId::Green).position = NVec2::new(350.0, 120.0);
    model.set_balloon_visible(BalloonId::Green, false);
    assert!(!model.balloons_adjacent());
}

#[test]
fn reset_restores_initial_state() {
    let mut s = scenario(false);
    rub_to(&mut s, BalloonId::Yellow, -10);
    s.release(BalloonId::Yellow);
    s.set_wall_visible(false);
    s.set_balloon_visible(BalloonId::Green, true);
    for _ in 0..30 {
        step(&mut s);
    }

    s.reset();
    let fresh = BaseModel::new(Parameters::default());
    for id in BalloonId::ALL {
        let b = s.model.balloon(id);
        let f = fresh.balloon(id);
        assert_eq!(b.position, f.position);
        assert_eq!(b.charge, 0);
        assert_eq!(b.visible, f.visible);
        assert!(!b.dragged);
    }
    assert_eq!(s.model.sweater.charge(), 0);
    assert!(s.model.wall.visible);
    assert_eq!(s.model.t, 0.0);
    assert!(s.queue.is_empty());
}
