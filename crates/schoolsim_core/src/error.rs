//! Error types for the schoolsim core.
//!
//! Configuration problems are rejected before any tick runs; querying a
//! reintegration outcome for an actor who never left is a precondition
//! violation, not a default-producing query.

use thiserror::Error;

/// Main error type for schoolsim_core operations.
#[derive(Error, Debug)]
pub enum SimError {
    /// Invalid constructor or scenario arguments.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reintegration queried for an actor still inside the ecosystem.
    #[error("actor {name:?} has not left the ecosystem; no reintegration outcome exists")]
    NotDeparted { name: String },
}

/// Result type alias for schoolsim_core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
