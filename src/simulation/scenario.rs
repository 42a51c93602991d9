//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - model state (`BaseModel` with both balloons, sweater and wall)
//! - active force set (`ForceSet`)
//! - one `BalloonDescriber` per balloon and the `UtteranceQueue` they feed
//! - the scripted actions for headless runs
//!
//! A host drives it with `step(dt)` and the interaction calls, then drains
//! the queue for narration.

use tracing::info;

use crate::configuration::config::{ActionConfig, ScenarioConfig};
use crate::description::describer::{BalloonDescriber, NarrationTiming};
use crate::description::queue::{Utterance, UtteranceQueue};
use crate::description::summary::SceneSummary;
use crate::error::SimError;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{BalloonRepulsion, ForceSet, SweaterAttraction, WallAttraction};
use crate::simulation::model::BaseModel;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BalloonId, NVec2, ShowCharges};

/// Sweater attraction, wall attraction and balloon repulsion
pub fn build_forces(p: &Parameters) -> ForceSet {
    ForceSet::new(p.max_force)
        .with(SweaterAttraction {
            k: p.sweater_k,
            power: p.sweater_power,
            eps2: p.eps2,
            ramp: p.sweater_ramp,
        })
        .with(WallAttraction {
            k: p.wall_k,
            power: p.wall_power,
            eps2: p.eps2,
        })
        .with(BalloonRepulsion {
            k: p.balloon_k,
            power: p.balloon_power,
            eps2: p.eps2,
        })
}

/// A running simulation: model, forces, narration and script
pub struct Scenario {
    pub engine: Engine,
    pub model: BaseModel,
    pub forces: ForceSet,
    pub describers: [BalloonDescriber; 2],
    pub queue: UtteranceQueue,
    pub script: Vec<ActionConfig>,
}

impl Scenario {
    pub fn new(engine: Engine, parameters: Parameters, timing: NarrationTiming) -> Self {
        let forces = build_forces(&parameters);
        let model = BaseModel::new(parameters);
        let describers = [
            BalloonDescriber::new(&model, BalloonId::Yellow, timing.clone()),
            BalloonDescriber::new(&model, BalloonId::Green, timing),
        ];
        Self {
            engine,
            model,
            forces,
            describers,
            queue: UtteranceQueue::new(),
            script: Vec::new(),
        }
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters: defaults with any overrides from ParametersConfig
        let mut parameters = Parameters::default();
        let p_cfg = &cfg.parameters;
        let overrides = [
            (&mut parameters.pickup_radius, p_cfg.pickup_radius),
            (&mut parameters.sweater_k, p_cfg.sweater_k),
            (&mut parameters.wall_k, p_cfg.wall_k),
            (&mut parameters.balloon_k, p_cfg.balloon_k),
            (&mut parameters.induced_k, p_cfg.induced_k),
            (&mut parameters.induced_power, p_cfg.induced_power),
            (&mut parameters.wall_power, p_cfg.wall_power),
            (&mut parameters.sweater_power, p_cfg.sweater_power),
            (&mut parameters.balloon_power, p_cfg.balloon_power),
            (&mut parameters.max_force, p_cfg.max_force),
            (&mut parameters.max_induced_displacement, p_cfg.max_induced_displacement),
            (&mut parameters.inducing_threshold, p_cfg.inducing_threshold),
            (&mut parameters.eps2, p_cfg.eps2),
        ];
        for (field, value) in overrides {
            if let Some(v) = value {
                *field = v;
            }
        }
        cfg.validate_with_capacity(parameters.max_charge())?;

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            frame_dt: cfg.engine.frame_dt,
            max_dt: cfg.engine.max_dt,
            narrate: cfg.engine.narrate,
        };

        let timing = NarrationTiming {
            description_refresh_rate: cfg.narration.description_refresh_rate,
            release_description_delay: cfg.narration.release_description_delay,
            release_description_refresh_rate: cfg.narration.release_description_refresh_rate,
        };

        let mut scenario = Self::new(engine, parameters, timing.clone());
        let model = &mut scenario.model;
        model.set_wall_visible(cfg.world.wall_visible);
        model.show_charges = cfg.world.show_charges.into();

        // Balloons: starting center, visibility and charge taken from the sweater
        for bc in &cfg.balloons {
            let id: BalloonId = bc.id.into();
            if let Some(c) = &bc.center {
                let b = model.balloon(id);
                let target = NVec2::new(c[0], c[1]) - NVec2::new(b.width / 2.0, b.height / 2.0);
                let (position, _) = model.check_balloon_restrictions(target, b.width, b.height);
                let b = model.balloon_mut(id);
                b.position = position;
                b.last_step_position = position;
                b.initial_position = position;
            }
            if let Some(visible) = bc.visible {
                let b = model.balloon_mut(id);
                b.visible = visible;
                b.initial_visible = visible;
            }
            for _ in 0..bc.charge.unsigned_abs() {
                let center = model.sweater.center();
                if model.sweater.take_nearest(center, f64::INFINITY) {
                    model.balloon_mut(id).charge -= 1;
                }
            }
        }
        let balloons = &model.balloons;
        model.wall.update_induced(balloons, &model.params);

        // Describers start from the configured state, not the defaults
        scenario.describers = [
            BalloonDescriber::new(&scenario.model, BalloonId::Yellow, timing.clone()),
            BalloonDescriber::new(&scenario.model, BalloonId::Green, timing),
        ];
        scenario.script = cfg.script;

        info!(
            wall_visible = scenario.model.wall.visible,
            actions = scenario.script.len(),
            "scenario built"
        );
        Ok(scenario)
    }

    /// Advance one host frame, then let each describer narrate it
    pub fn step(&mut self, dt: f64) {
        let dt = self.engine.clamp_dt(dt);
        self.model.step(dt, &self.forces);
        if self.engine.narrate {
            for d in self.describers.iter_mut() {
                d.step(&self.model, dt, &mut self.queue);
            }
        }
    }

    pub fn grab(&mut self, id: BalloonId) {
        self.model.grab(id);
    }

    pub fn release(&mut self, id: BalloonId) {
        self.model.release(id);
    }

    pub fn drag_to(&mut self, id: BalloonId, center: NVec2) {
        self.model.drag_to(id, center);
    }

    pub fn set_wall_visible(&mut self, visible: bool) {
        self.model.set_wall_visible(visible);
    }

    pub fn set_show_charges(&mut self, mode: ShowCharges) {
        self.model.show_charges = mode;
    }

    pub fn set_balloon_visible(&mut self, id: BalloonId, visible: bool) {
        self.model.set_balloon_visible(id, visible);
    }

    /// Reset model, narration state and pending narration together
    pub fn reset(&mut self) {
        self.model.reset();
        for d in self.describers.iter_mut() {
            d.reset(&self.model);
        }
        self.queue.clear();
        info!("scenario reset");
    }

    pub fn drain_utterances(&mut self) -> Vec<Utterance> {
        self.queue.drain()
    }

    pub fn describer(&self, id: BalloonId) -> &BalloonDescriber {
        &self.describers[id.index()]
    }

    pub fn balloon_description(&self, id: BalloonId) -> String {
        self.describer(id).balloon_description(&self.model)
    }

    pub fn scene_summary(&self) -> Vec<String> {
        SceneSummary::describe(&self.model)
    }

    /// Step `frames` fixed frames, collecting narration with its time stamp
    fn run_frames(&mut self, frames: usize, transcript: &mut Vec<(f64, String)>) {
        for _ in 0..frames {
            self.step(self.engine.frame_dt);
            let t = self.model.t;
            transcript.extend(self.queue.drain().into_iter().map(|u| (t, u.text)));
        }
    }

    /// Play the scripted actions, one frame after each instantaneous action
    pub fn run_script(&mut self) -> Vec<(f64, String)> {
        let mut transcript = Vec::new();
        let script = self.script.clone();
        for action in script {
            match action {
                ActionConfig::Grab { balloon } => {
                    self.grab(balloon.into());
                    self.run_frames(1, &mut transcript);
                }
                ActionConfig::Release { balloon } => {
                    self.release(balloon.into());
                    self.run_frames(1, &mut transcript);
                }
                ActionConfig::Drag { balloon, to, frames } => {
                    let id: BalloonId = balloon.into();
                    let start = self.model.balloon(id).center();
                    let target = NVec2::new(to[0], to[1]);
                    let frames = frames.max(1);
                    for i in 1..=frames {
                        let f = i as f64 / frames as f64;
                        self.drag_to(id, start + (target - start) * f);
                        self.run_frames(1, &mut transcript);
                    }
                }
                ActionConfig::Wait { seconds } => {
                    let frames = (seconds / self.engine.frame_dt).ceil() as usize;
                    self.run_frames(frames, &mut transcript);
                }
                ActionConfig::SetWallVisible { visible } => {
                    self.set_wall_visible(visible);
                    self.run_frames(1, &mut transcript);
                }
                ActionConfig::SetShowCharges { mode } => {
                    self.set_show_charges(mode.into());
                    self.run_frames(1, &mut transcript);
                }
                ActionConfig::SetBalloonVisible { balloon, visible } => {
                    self.set_balloon_visible(balloon.into(), visible);
                    self.run_frames(1, &mut transcript);
                }
                ActionConfig::Reset => {
                    self.reset();
                    self.run_frames(1, &mut transcript);
                }
            }
        }
        transcript
    }
}
