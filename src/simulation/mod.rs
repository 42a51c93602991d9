pub mod states;
pub mod params;
pub mod engine;
pub mod play_area;
pub mod forces;
pub mod integrator;
pub mod sweater;
pub mod wall;
pub mod model;
pub mod scenario;
