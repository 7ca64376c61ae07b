//! # Schoolsim Core
//!
//! The core simulation engine for schoolsim - a discrete-time stochastic
//! model of an organization's health under external selection pressure.
//!
//! This crate contains the deterministic simulation logic, including:
//! - The ecosystem state vector and its yearly tick pipeline
//! - Actor lifecycle resolution (burnout, exits, reintegration)
//! - The probabilistic "future hope" outcome model for students
//! - Stakeholder utility scoring over a closed index set
//! - Append-only per-year history for reporting consumers
//!
//! ## Architecture
//!
//! - **Data / logic split**: plain types live in `schoolsim_data`; all
//!   behavior is attached here
//! - **Explicit tick pipeline**: the yearly update is an ordered table of
//!   named sub-updates with documented read/write sets
//! - **Deterministic simulation**: one seeded RNG stream for reproducible
//!   runs
//!
//! ## Example
//!
//! ```
//! use schoolsim_core::config::SimConfig;
//! use schoolsim_core::sim::Simulation;
//!
//! let mut config = SimConfig::demo();
//! config.run.seed = Some(42);
//! let mut sim = Simulation::from_config(&config).unwrap();
//! sim.run(5);
//! sim.resolve_outcomes().unwrap();
//! assert_eq!(sim.ecosystem.years_simulated, 5);
//! assert_eq!(sim.history.len(), 5);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// The organization's mutable state vector and actor registry
pub mod ecosystem;
/// The yearly tick pipeline and its numerical contract
pub mod engine;
/// Error types (configuration, degenerate actor state)
pub mod error;
/// Append-only per-year snapshot log
pub mod history;
/// Logging setup for consumers
pub mod logging;
/// Reintegration and future-hope outcome resolution
pub mod outcome;
/// The single seeded randomness source
pub mod rng;
/// Scenario construction: staff specs and student cohorts
pub mod scenario;
/// The simulation run loop
pub mod sim;
/// Stakeholder utility scoring
pub mod utility;
/// Selection logic for the external world
pub mod world;

pub use config::SimConfig;
pub use ecosystem::EcosystemState;
pub use engine::{DynamicsEngine, TICKS};
pub use error::{Result, SimError};
pub use history::{HistoryLog, YearSnapshot};
pub use logging::init_logging;
pub use outcome::student_future_hope_probability;
pub use rng::RandomVariationSource;
pub use schoolsim_data::{
    Actor, ChangeAttitude, DynamicsCoefficients, EnvironmentConstraints, ExternalWorld,
    OpportunityChoice, ReintegrationOutcome, Role,
};
pub use sim::Simulation;
pub use utility::{default_utilities, StakeholderUtility, StateIndex};
pub use world::SelectionLogic;
