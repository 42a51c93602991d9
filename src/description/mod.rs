pub mod strings;
pub mod ranges;
pub mod location;
pub mod charge;
pub mod objects;
pub mod snapshot;
pub mod rules;
pub mod queue;
pub mod describer;
pub mod summary;
