//! Plain data types shared across the schoolsim crates.

pub mod actor;
pub mod coefficients;
pub mod environment;
