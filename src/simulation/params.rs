//! Physical and geometric parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - play area, wall, sweater and balloon geometry,
//! - sweater and wall charge lattice sizes,
//! - force constants, falloff exponents and softening (`eps2`),
//! - the charge pickup radius and the induction thresholds

use crate::simulation::states::NVec2;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub width: f64, // play area width
    pub height: f64, // play area height
    pub wall_width: f64, // wall width, shrinks the right bound when visible
    pub balloon_width: f64,
    pub balloon_height: f64,
    pub yellow_start: NVec2, // top-left of the yellow balloon
    pub green_start: NVec2, // top-left of the green balloon
    pub sweater_origin: NVec2, // top-left of the sweater
    pub sweater_width: f64,
    pub sweater_height: f64,
    pub sweater_columns: usize, // charge lattice columns on the sweater
    pub sweater_rows: usize, // charge lattice rows on the sweater
    pub wall_columns: usize, // charge lattice columns in the wall
    pub wall_rows: usize, // charge lattice rows in the wall
    pub charge_radius: f64, // point charge radius
    pub pickup_radius: f64, // max distance from balloon center to a sweater charge it can pick up
    pub sweater_k: f64, // balloon-sweater coupling
    pub wall_k: f64, // balloon-wall coupling
    pub balloon_k: f64, // balloon-balloon coupling
    pub induced_k: f64, // balloon-wall charge coupling for induction
    pub induced_power: f64, // falloff exponent for induction
    pub wall_power: f64, // falloff exponent for wall attraction
    pub sweater_power: f64, // falloff exponent for sweater attraction
    pub balloon_power: f64, // falloff exponent for balloon repulsion
    pub sweater_ramp: f64, // distance over which sweater attraction fades at the sweater edge
    pub max_force: f64, // clamp on the net force per balloon
    pub max_induced_displacement: f64, // clamp on wall charge displacement
    pub inducing_threshold: f64, // force on the closest wall charge that counts as inducing
    pub eps2: f64, // softening
}

impl Parameters {
    /// Capacity of the sweater, also the largest balloon charge magnitude
    pub fn max_charge(&self) -> i32 {
        (self.sweater_columns * self.sweater_rows) as i32
    }

    /// x of the wall's left face
    pub fn wall_x(&self) -> f64 {
        self.width - self.wall_width
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            width: 768.0,
            height: 504.0,
            wall_width: 80.0,
            balloon_width: 134.0,
            balloon_height: 222.0,
            yellow_start: NVec2::new(440.0, 100.0),
            green_start: NVec2::new(380.0, 130.0),
            sweater_origin: NVec2::new(25.0, 20.0),
            sweater_width: 310.0,
            sweater_height: 464.0,
            sweater_columns: 3,
            sweater_rows: 19,
            wall_columns: 3,
            wall_rows: 18,
            charge_radius: 8.0,
            pickup_radius: 80.0,
            sweater_k: 8000.0,
            wall_k: 250.0,
            balloon_k: 8000.0,
            induced_k: 20000.0,
            induced_power: 2.7,
            wall_power: 2.0,
            sweater_power: 2.0,
            balloon_power: 2.0,
            sweater_ramp: 40.0,
            max_force: 100.0,
            max_induced_displacement: 12.0,
            inducing_threshold: 0.2,
            eps2: 100.0,
        }
    }
}
