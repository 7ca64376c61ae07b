//! The simulation run: one owner for the state, the world, the variation
//! source, and the history.
//!
//! The run loop is strictly sequential. The engine is the sole mutator of
//! the ecosystem within a step, and every step finishes before the next
//! begins; the core performs no I/O.

use crate::config::SimConfig;
use crate::ecosystem::EcosystemState;
use crate::engine::DynamicsEngine;
use crate::error::{Result, SimError};
use crate::history::{HistoryLog, YearSnapshot};
use crate::outcome;
use crate::rng::RandomVariationSource;
use schoolsim_data::ExternalWorld;

pub struct Simulation {
    pub ecosystem: EcosystemState,
    pub world: ExternalWorld,
    pub history: HistoryLog,
    rng: RandomVariationSource,
}

impl Simulation {
    /// Validates the config, builds the actor registry, and wires the run
    /// together. Configuration problems surface here, before any tick.
    pub fn from_config(config: &SimConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| SimError::config(e.to_string()))?;

        let mut rng = RandomVariationSource::from_seed(config.run.seed);
        let mut ecosystem = EcosystemState::new(
            config.run.ecosystem_name.clone(),
            config.constraints,
            config.dynamics,
        );
        ecosystem.randomness = config.run.randomness;
        ecosystem.trend_damping = config.run.trend_damping;
        for actor in config.scenario.build(&mut rng) {
            ecosystem.add_actor(actor);
        }

        Ok(Self {
            ecosystem,
            world: config.world,
            history: HistoryLog::new(),
            rng,
        })
    }

    /// Wires a run from already-built parts. Useful for callers that
    /// construct the state directly.
    #[must_use]
    pub fn new(
        ecosystem: EcosystemState,
        world: ExternalWorld,
        rng: RandomVariationSource,
    ) -> Self {
        Self {
            ecosystem,
            world,
            history: HistoryLog::new(),
            rng,
        }
    }

    /// Simulates `years` more years, recording one snapshot per year.
    /// `years = 0` is a legal no-op: nothing recorded, nothing mutated.
    pub fn run(&mut self, years: u32) {
        for _ in 0..years {
            DynamicsEngine::step(&mut self.ecosystem, &mut self.rng);
            let snapshot = YearSnapshot::capture(&self.ecosystem, &self.world);
            tracing::info!(
                year = snapshot.year,
                burnout = snapshot.burnout_index,
                student_exit = snapshot.student_exit_rate,
                efficiency_true = snapshot.efficiency_index_true,
                staff_left = snapshot.staff_left,
                "Simulated year"
            );
            self.history.record(snapshot);
        }
    }

    /// Resolves reintegration for departed staff and future-hope labels for
    /// students. Safe to call again: both resolutions are one-shot with
    /// caching.
    pub fn resolve_outcomes(&mut self) -> Result<()> {
        outcome::resolve_reintegration(&mut self.ecosystem, &self.world, &mut self.rng)?;
        outcome::resolve_future_hope(&mut self.ecosystem, &self.world, &mut self.rng);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_years_leaves_everything_untouched() {
        let config = SimConfig::demo();
        let mut sim = Simulation::from_config(&config).unwrap();
        let before = sim.ecosystem.clone();
        sim.run(0);
        assert!(sim.history.is_empty());
        assert_eq!(sim.ecosystem, before);
    }

    #[test]
    fn test_run_records_one_snapshot_per_year() {
        let mut config = SimConfig::demo();
        config.run.seed = Some(42);
        let mut sim = Simulation::from_config(&config).unwrap();
        sim.run(5);
        assert_eq!(sim.history.len(), 5);
        assert_eq!(sim.ecosystem.years_simulated, 5);
        let years: Vec<u32> = sim.history.records().iter().map(|s| s.year).collect();
        assert_eq!(years, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_invalid_config_fails_before_any_tick() {
        let mut config = SimConfig::demo();
        config.run.randomness = 2.0;
        let err = Simulation::from_config(&config);
        assert!(matches!(err, Err(SimError::Config(_))));
    }

    #[test]
    fn test_resolve_outcomes_is_repeatable() {
        let mut config = SimConfig::demo();
        config.run.seed = Some(1);
        let mut sim = Simulation::from_config(&config).unwrap();
        sim.run(10);
        sim.resolve_outcomes().unwrap();
        let labels: Vec<_> = sim
            .ecosystem
            .actors
            .iter()
            .map(|a| (a.future_hope_label, a.reintegration_outcome))
            .collect();
        sim.resolve_outcomes().unwrap();
        let again: Vec<_> = sim
            .ecosystem
            .actors
            .iter()
            .map(|a| (a.future_hope_label, a.reintegration_outcome))
            .collect();
        assert_eq!(labels, again);
    }
}
