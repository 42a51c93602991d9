pub mod simulation;
pub mod description;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Balloon, BalloonId, Direction, NVec2, PointCharge, ShowCharges};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::{coulomb_force, BalloonRepulsion, ForceSet, ForceTerm, SweaterAttraction, WallAttraction};
pub use simulation::integrator::verlet_integrator;
pub use simulation::model::{BaseModel, TransferState};
pub use simulation::scenario::{build_forces, Scenario};

pub use description::describer::{BalloonDescriber, NarrationTiming};
pub use description::queue::{Announcer, Utterance, UtteranceQueue};
pub use description::summary::SceneSummary;

pub use configuration::config::{
    load_scenario, ActionConfig, BalloonConfig, EngineConfig, NarrationConfig, ParametersConfig, ScenarioConfig,
    WorldConfig,
};

pub use error::SimError;

pub use benchmark::benchmark::bench_step;
