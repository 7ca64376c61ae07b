//! Core data structures for the schoolsim simulation.
//!
//! This crate holds the plain, serializable entity and parameter types that
//! the simulation engine in `schoolsim_core` operates on. No simulation
//! logic lives here.

pub mod data;

pub use data::actor::{Actor, ChangeAttitude, OpportunityChoice, ReintegrationOutcome, Role};
pub use data::coefficients::DynamicsCoefficients;
pub use data::environment::{EnvironmentConstraints, ExternalWorld};
