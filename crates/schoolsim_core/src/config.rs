//! Configuration management for simulation parameters.
//!
//! Strongly-typed structures that map to a TOML config file. Validation
//! rejects bad parameters before a single tick runs.
//!
//! ## Example config
//!
//! ```toml
//! [run]
//! years = 10
//! seed = 42
//! randomness = 0.05
//! trend_damping = 0.65
//!
//! [constraints]
//! budget_pressure = 0.6
//! regulation_rigidity = 0.5
//! demographic_pressure = 0.4
//!
//! [world]
//! selection_pressure = 0.8
//! ai_shift_speed = 0.9
//! ```

use crate::scenario::ScenarioConfig;
use schoolsim_data::{DynamicsCoefficients, EnvironmentConstraints, ExternalWorld};
use serde::{Deserialize, Serialize};

/// Run-level knobs: horizon, seed, and the two numerical-contract dials.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RunConfig {
    pub ecosystem_name: String,
    pub years: u32,
    /// Omitted seed means a non-deterministic run.
    pub seed: Option<u64>,
    /// Noise amplitude on every blended index update.
    pub randomness: f64,
    /// Blend factor applied to every raw yearly delta.
    pub trend_damping: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ecosystem_name: "ProtectedSchool".into(),
            years: 5,
            seed: None,
            randomness: 0.05,
            trend_damping: 0.65,
        }
    }
}

/// Complete simulation configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SimConfig {
    pub run: RunConfig,
    pub constraints: EnvironmentConstraints,
    pub world: ExternalWorld,
    pub dynamics: DynamicsCoefficients,
    pub scenario: ScenarioConfig,
}

impl SimConfig {
    /// The demo setup: demo scenario against a harsh external world and a
    /// squeezed budget.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            run: RunConfig::default(),
            constraints: EnvironmentConstraints {
                budget_pressure: 0.6,
                regulation_rigidity: 0.5,
                demographic_pressure: 0.4,
            },
            world: ExternalWorld {
                selection_pressure: 0.8,
                ai_shift_speed: 0.9,
            },
            dynamics: DynamicsCoefficients::default(),
            scenario: ScenarioConfig::demo(),
        }
    }

    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if everything is valid, or `Err` describing the
    /// first failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.run.randomness),
            "Randomness must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.run.trend_damping),
            "Trend damping must be in [0.0, 1.0]"
        );

        for (name, v) in [
            ("Budget pressure", self.constraints.budget_pressure),
            ("Regulation rigidity", self.constraints.regulation_rigidity),
            ("Demographic pressure", self.constraints.demographic_pressure),
            ("Selection pressure", self.world.selection_pressure),
            ("AI shift speed", self.world.ai_shift_speed),
        ] {
            anyhow::ensure!((0.0..=1.0).contains(&v), "{name} must be in [0.0, 1.0]");
        }

        anyhow::ensure!(
            self.dynamics.as_slice().iter().all(|w| w.is_finite()),
            "Dynamics coefficients must be finite"
        );

        self.scenario.validate()
    }

    /// Loads and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable digest of everything that shapes the dynamics, for tagging
    /// runs and spotting accidental parameter drift between them.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        for part in [
            serde_json::to_string(&self.constraints),
            serde_json::to_string(&self.world),
            serde_json::to_string(&self.dynamics),
            serde_json::to_string(&self.scenario),
        ]
        .into_iter()
        .flatten()
        {
            hasher.update(part.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}
