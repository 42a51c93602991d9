//! Configuration types for loading balloon scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – frame timing and the narration switch
//! - [`ParametersConfig`] – force constants and thresholds, each optional
//! - [`NarrationConfig`]  – throttling intervals for narration
//! - [`WorldConfig`]      – wall visibility and charge view at start
//! - [`BalloonConfig`]    – starting center, charge and visibility per balloon
//! - [`ActionConfig`]     – a scripted user action for headless runs
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section may be omitted and falls back to the simulation defaults.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   frame_dt: 0.0166667     # fixed frame delta for scripts
//!   max_dt: 0.1             # host deltas above this are clamped
//!
//! parameters:
//!   pickup_radius: 80.0     # reach of a rubbing balloon
//!
//! world:
//!   wall_visible: true
//!   show_charges: all       # all | none | diff
//!
//! balloons:
//!   - id: green
//!     visible: true
//!     center: [300.0, 250.0]
//!
//! script:
//!   - action: grab
//!     balloon: yellow
//!   - action: drag
//!     balloon: yellow
//!     to: [250.0, 150.0]
//!     frames: 30
//!   - action: wait
//!     seconds: 2.0
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::states::{BalloonId, ShowCharges};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BalloonIdConfig {
    Yellow,
    Green,
}

impl From<BalloonIdConfig> for BalloonId {
    fn from(id: BalloonIdConfig) -> Self {
        match id {
            BalloonIdConfig::Yellow => BalloonId::Yellow,
            BalloonIdConfig::Green => BalloonId::Green,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShowChargesConfig {
    #[default]
    All,
    None,
    Diff,
}

impl From<ShowChargesConfig> for ShowCharges {
    fn from(mode: ShowChargesConfig) -> Self {
        match mode {
            ShowChargesConfig::All => ShowCharges::All,
            ShowChargesConfig::None => ShowCharges::None,
            ShowChargesConfig::Diff => ShowCharges::Diff,
        }
    }
}

/// Frame timing for the engine
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub frame_dt: f64, // seconds per scripted frame
    pub max_dt: f64, // clamp on host frame deltas
    pub narrate: bool, // false skips the describers
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_dt: 1.0 / 60.0,
            max_dt: 0.1,
            narrate: true,
        }
    }
}

/// Overrides for the physical parameters; unset fields keep their defaults
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ParametersConfig {
    pub pickup_radius: Option<f64>, // reach of a rubbing balloon
    pub sweater_k: Option<f64>, // balloon-sweater coupling
    pub wall_k: Option<f64>, // balloon-wall coupling
    pub balloon_k: Option<f64>, // balloon-balloon coupling
    pub induced_k: Option<f64>, // balloon-wall charge coupling
    pub induced_power: Option<f64>, // falloff exponent for induction
    pub wall_power: Option<f64>, // falloff exponent for wall attraction
    pub sweater_power: Option<f64>, // falloff exponent for sweater attraction
    pub balloon_power: Option<f64>, // falloff exponent for balloon repulsion
    pub max_force: Option<f64>, // clamp on net force
    pub max_induced_displacement: Option<f64>, // clamp on wall charge offset
    pub inducing_threshold: Option<f64>, // force that counts as inducing
    pub eps2: Option<f64>, // softening
}

/// Narration throttling, seconds of simulated time
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct NarrationConfig {
    pub description_refresh_rate: f64,
    pub release_description_delay: f64,
    pub release_description_refresh_rate: f64,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            description_refresh_rate: 2.0,
            release_description_delay: 0.025,
            release_description_refresh_rate: 5.0,
        }
    }
}

/// Room state at start
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub wall_visible: bool,
    pub show_charges: ShowChargesConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            wall_visible: true,
            show_charges: ShowChargesConfig::All,
        }
    }
}

/// Starting state for one balloon
#[derive(Deserialize, Debug, Clone)]
pub struct BalloonConfig {
    pub id: BalloonIdConfig,
    pub center: Option<Vec<f64>>, // [x, y] of the balloon center
    #[serde(default)]
    pub charge: i32, // taken from the sweater at start, <= 0
    pub visible: Option<bool>,
}

/// One scripted user action, tagged by `action`
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionConfig {
    Grab { balloon: BalloonIdConfig },
    Release { balloon: BalloonIdConfig },
    Drag {
        balloon: BalloonIdConfig,
        to: Vec<f64>, // target center
        #[serde(default = "one_frame")]
        frames: usize, // frames to get there
    },
    Wait { seconds: f64 },
    SetWallVisible { visible: bool },
    SetShowCharges { mode: ShowChargesConfig },
    SetBalloonVisible { balloon: BalloonIdConfig, visible: bool },
    Reset,
}

fn one_frame() -> usize {
    1
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub narration: NarrationConfig,
    pub world: WorldConfig,
    pub balloons: Vec<BalloonConfig>,
    pub script: Vec<ActionConfig>,
}

fn check_point(what: &str, v: &[f64]) -> Result<(), SimError> {
    if v.len() != 2 || v.iter().any(|c| !c.is_finite()) {
        return Err(SimError::InvalidScenario(format!("{what} must be two finite numbers, got {v:?}")));
    }
    Ok(())
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, SimError> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the model cannot represent. `capacity` is the sweater's
    /// charge count, which bounds the starting charge of both balloons together
    pub fn validate_with_capacity(&self, capacity: i32) -> Result<(), SimError> {
        if self.engine.frame_dt <= 0.0 || self.engine.max_dt <= 0.0 {
            return Err(SimError::InvalidScenario("frame_dt and max_dt must be positive".into()));
        }
        let mut total: u64 = 0;
        for b in &self.balloons {
            if b.charge > 0 {
                return Err(SimError::InvalidScenario(format!("{:?} balloon charge must be <= 0, got {}", b.id, b.charge)));
            }
            total += u64::from(b.charge.unsigned_abs());
            if let Some(center) = &b.center {
                check_point("balloon center", center)?;
            }
        }
        if total > u64::from(capacity.unsigned_abs()) {
            return Err(SimError::InvalidScenario(format!(
                "balloons start with {total} charges but the sweater only has {capacity}"
            )));
        }
        for action in &self.script {
            match action {
                ActionConfig::Drag { to, .. } => check_point("drag target", to)?,
                ActionConfig::Wait { seconds } if *seconds < 0.0 => {
                    return Err(SimError::InvalidScenario(format!("wait must not be negative, got {seconds}")));
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let capacity = crate::simulation::params::Parameters::default().max_charge();
        self.validate_with_capacity(capacity)
    }
}

/// Read and validate a scenario file
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, SimError> {
    let file = File::open(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    cfg.validate()?;
    Ok(cfg)
}
