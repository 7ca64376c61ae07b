//! The organization's state vector.
//!
//! `EcosystemState` holds every scalar index of the simulated organization
//! plus the actor registry, the macro constraints, and the dynamics
//! coefficients it was built with. All normalized indices stay in [0, 1]
//! after every tick; `external_spend` and `systemic_opportunity_cost` are
//! unbounded non-negative accumulators.

use schoolsim_data::{Actor, DynamicsCoefficients, EnvironmentConstraints};
use serde::{Deserialize, Serialize};

/// A protected ecosystem where legacy actors can survive longer than they
/// would in the external world, while the ecosystem itself quietly degrades.
///
/// Mutated exactly once per simulated year by the tick pipeline in
/// [`crate::engine`]; read-only for the outcome and reporting layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcosystemState {
    pub name: String,
    pub constraints: EnvironmentConstraints,
    pub coefficients: DynamicsCoefficients,
    pub actors: Vec<Actor>,

    // Core health
    pub infrastructure_health: f64,
    pub dx_clarity: f64,
    pub burnout_index: f64,
    pub student_exit_rate: f64,
    pub recruitment_difficulty: f64,

    // Portal / DB / process shape
    pub portal_maturity: f64,
    pub database_foundation: f64,
    pub process_fragmentation_index: f64,
    /// High = tasks are highly person-dependent; proxy execution is hard.
    pub task_personalization_index: f64,

    // External-system reliance
    pub external_system_dependency: f64,
    /// Relative spend on external systems; unbounded, non-negative.
    pub external_spend: f64,
    pub learning_cost_index: f64,
    pub system_complexity: f64,
    pub workload_index: f64,

    // Education assets & competitiveness
    pub educational_asset_index: f64,
    pub central_repository_level: f64,
    pub student_learning_efficiency: f64,
    pub competitor_gap_index: f64,

    // Innovative infra & local LLM
    pub innovation_potential_index: f64,
    pub local_llm_infra_level: f64,
    pub ai_service_quality_index: f64,
    pub ai_accessibility_index: f64,

    // Productivity & efficiency
    pub productivity_index: f64,
    pub efficiency_index_true: f64,
    pub efficiency_index_recognized: f64,

    // Governance
    pub suppression_level: f64,
    pub leadership_trust_battery: f64,
    pub info_transparency: f64,
    pub pm_capability: f64,
    pub grand_design_clarity: f64,

    // Change dynamics bookkeeping
    /// Unbounded, non-negative: cost the organization forces on everyone.
    pub systemic_opportunity_cost: f64,
    pub change_seeds_planted: u32,
    pub change_seeds_suppressed: u32,

    pub years_simulated: u32,
    /// Noise amplitude applied on every blended index update.
    pub randomness: f64,
    /// Blend factor: how much of each raw yearly delta is actually applied.
    pub trend_damping: f64,
}

impl EcosystemState {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        constraints: EnvironmentConstraints,
        coefficients: DynamicsCoefficients,
    ) -> Self {
        Self {
            name: name.into(),
            constraints,
            coefficients,
            actors: Vec::new(),

            infrastructure_health: 0.4,
            dx_clarity: 0.1,
            burnout_index: 0.0,
            student_exit_rate: 0.0,
            recruitment_difficulty: 0.3,

            portal_maturity: 0.1,
            database_foundation: 0.1,
            process_fragmentation_index: 0.7,
            task_personalization_index: 0.85,

            external_system_dependency: 0.0,
            external_spend: 0.0,
            learning_cost_index: 0.0,
            system_complexity: 0.3,
            workload_index: 0.5,

            educational_asset_index: 0.1,
            central_repository_level: 0.0,
            student_learning_efficiency: 0.4,
            competitor_gap_index: 0.1,

            innovation_potential_index: 0.0,
            local_llm_infra_level: 0.0,
            ai_service_quality_index: 0.0,
            ai_accessibility_index: 0.0,

            productivity_index: 0.7,
            efficiency_index_true: 0.4,
            efficiency_index_recognized: 0.1,

            suppression_level: 0.8,
            leadership_trust_battery: 0.4,
            info_transparency: 0.3,
            pm_capability: 0.2,
            grand_design_clarity: 0.1,

            systemic_opportunity_cost: 0.0,
            change_seeds_planted: 0,
            change_seeds_suppressed: 0,

            years_simulated: 0,
            randomness: 0.05,
            trend_damping: 0.65,
        }
    }

    pub fn add_actor(&mut self, actor: Actor) {
        self.actors.push(actor);
    }

    pub fn staff(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(|a| a.is_staff())
    }

    pub fn students(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(|a| a.is_student())
    }

    /// Pulls every bounded index back into its declared range. Out-of-range
    /// inputs are a recoverable normalization, not an error.
    pub fn normalize(&mut self) {
        for v in [
            &mut self.infrastructure_health,
            &mut self.dx_clarity,
            &mut self.burnout_index,
            &mut self.student_exit_rate,
            &mut self.recruitment_difficulty,
            &mut self.portal_maturity,
            &mut self.database_foundation,
            &mut self.process_fragmentation_index,
            &mut self.task_personalization_index,
            &mut self.external_system_dependency,
            &mut self.learning_cost_index,
            &mut self.system_complexity,
            &mut self.workload_index,
            &mut self.educational_asset_index,
            &mut self.central_repository_level,
            &mut self.student_learning_efficiency,
            &mut self.competitor_gap_index,
            &mut self.innovation_potential_index,
            &mut self.local_llm_infra_level,
            &mut self.ai_service_quality_index,
            &mut self.ai_accessibility_index,
            &mut self.productivity_index,
            &mut self.efficiency_index_true,
            &mut self.efficiency_index_recognized,
            &mut self.suppression_level,
            &mut self.leadership_trust_battery,
            &mut self.info_transparency,
            &mut self.pm_capability,
            &mut self.grand_design_clarity,
        ] {
            *v = v.clamp(0.0, 1.0);
        }
        self.external_spend = self.external_spend.max(0.0);
        self.systemic_opportunity_cost = self.systemic_opportunity_cost.max(0.0);
        for a in &mut self.actors {
            a.adaptability = a.adaptability.clamp(0.0, 1.0);
            a.opportunity_cost = a.opportunity_cost.max(0.0);
        }
    }

    /// Every bounded index currently within its declared range?
    #[must_use]
    pub fn in_range(&self) -> bool {
        self.bounded_indices()
            .iter()
            .all(|&v| (0.0..=1.0).contains(&v))
            && self.external_spend >= 0.0
            && self.systemic_opportunity_cost >= 0.0
    }

    /// The bounded indices as a flat list, in declaration order.
    #[must_use]
    pub fn bounded_indices(&self) -> [f64; 29] {
        [
            self.infrastructure_health,
            self.dx_clarity,
            self.burnout_index,
            self.student_exit_rate,
            self.recruitment_difficulty,
            self.portal_maturity,
            self.database_foundation,
            self.process_fragmentation_index,
            self.task_personalization_index,
            self.external_system_dependency,
            self.learning_cost_index,
            self.system_complexity,
            self.workload_index,
            self.educational_asset_index,
            self.central_repository_level,
            self.student_learning_efficiency,
            self.competitor_gap_index,
            self.innovation_potential_index,
            self.local_llm_infra_level,
            self.ai_service_quality_index,
            self.ai_accessibility_index,
            self.productivity_index,
            self.efficiency_index_true,
            self.efficiency_index_recognized,
            self.suppression_level,
            self.leadership_trust_battery,
            self.info_transparency,
            self.pm_capability,
            self.grand_design_clarity,
        ]
    }
}

impl Default for EcosystemState {
    fn default() -> Self {
        Self::new(
            "Ecosystem",
            EnvironmentConstraints::default(),
            DynamicsCoefficients::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_in_range() {
        let eco = EcosystemState::default();
        assert!(eco.in_range());
        assert_eq!(eco.years_simulated, 0);
    }

    #[test]
    fn test_normalize_recovers_out_of_range_inputs() {
        let mut eco = EcosystemState::default();
        eco.burnout_index = 1.7;
        eco.dx_clarity = -0.3;
        eco.external_spend = -2.0;
        eco.normalize();
        assert_eq!(eco.burnout_index, 1.0);
        assert_eq!(eco.dx_clarity, 0.0);
        assert_eq!(eco.external_spend, 0.0);
        assert!(eco.in_range());
    }
}
