//! Per-year snapshot log.
//!
//! The recorder is append-only and in-memory; persisting or rendering the
//! log is the consumer's business, never the core's.

use crate::ecosystem::EcosystemState;
use crate::outcome;
use schoolsim_data::ExternalWorld;
use serde::{Deserialize, Serialize};

/// Flat record of every scalar index at the end of one simulated year, plus
/// the derived aggregates reporting wants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSnapshot {
    pub year: u32,

    pub infrastructure_health: f64,
    pub dx_clarity: f64,
    pub burnout_index: f64,
    pub student_exit_rate: f64,
    pub recruitment_difficulty: f64,
    pub portal_maturity: f64,
    pub database_foundation: f64,
    pub process_fragmentation_index: f64,
    pub task_personalization_index: f64,
    pub external_system_dependency: f64,
    pub external_spend: f64,
    pub learning_cost_index: f64,
    pub system_complexity: f64,
    pub workload_index: f64,
    pub educational_asset_index: f64,
    pub central_repository_level: f64,
    pub student_learning_efficiency: f64,
    pub competitor_gap_index: f64,
    pub innovation_potential_index: f64,
    pub local_llm_infra_level: f64,
    pub ai_service_quality_index: f64,
    pub ai_accessibility_index: f64,
    pub productivity_index: f64,
    pub efficiency_index_true: f64,
    pub efficiency_index_recognized: f64,
    pub suppression_level: f64,
    pub leadership_trust_battery: f64,
    pub info_transparency: f64,
    pub pm_capability: f64,
    pub grand_design_clarity: f64,
    pub systemic_opportunity_cost: f64,
    pub change_seeds_planted: u32,
    pub change_seeds_suppressed: u32,

    // Derived aggregates
    pub expected_future_hope: f64,
    pub staff_total: usize,
    pub staff_active: usize,
    pub staff_burned_out: usize,
    pub staff_left: usize,
    pub students_total: usize,
    pub students_active: usize,
    pub students_left: usize,
}

impl YearSnapshot {
    #[must_use]
    pub fn capture(eco: &EcosystemState, world: &ExternalWorld) -> Self {
        let staff_total = eco.staff().count();
        let staff_active = eco.staff().filter(|a| a.is_active()).count();
        let staff_burned_out = eco.staff().filter(|a| a.burned_out).count();
        let students_total = eco.students().count();
        let students_active = eco.students().filter(|a| a.is_active()).count();

        Self {
            year: eco.years_simulated,

            infrastructure_health: eco.infrastructure_health,
            dx_clarity: eco.dx_clarity,
            burnout_index: eco.burnout_index,
            student_exit_rate: eco.student_exit_rate,
            recruitment_difficulty: eco.recruitment_difficulty,
            portal_maturity: eco.portal_maturity,
            database_foundation: eco.database_foundation,
            process_fragmentation_index: eco.process_fragmentation_index,
            task_personalization_index: eco.task_personalization_index,
            external_system_dependency: eco.external_system_dependency,
            external_spend: eco.external_spend,
            learning_cost_index: eco.learning_cost_index,
            system_complexity: eco.system_complexity,
            workload_index: eco.workload_index,
            educational_asset_index: eco.educational_asset_index,
            central_repository_level: eco.central_repository_level,
            student_learning_efficiency: eco.student_learning_efficiency,
            competitor_gap_index: eco.competitor_gap_index,
            innovation_potential_index: eco.innovation_potential_index,
            local_llm_infra_level: eco.local_llm_infra_level,
            ai_service_quality_index: eco.ai_service_quality_index,
            ai_accessibility_index: eco.ai_accessibility_index,
            productivity_index: eco.productivity_index,
            efficiency_index_true: eco.efficiency_index_true,
            efficiency_index_recognized: eco.efficiency_index_recognized,
            suppression_level: eco.suppression_level,
            leadership_trust_battery: eco.leadership_trust_battery,
            info_transparency: eco.info_transparency,
            pm_capability: eco.pm_capability,
            grand_design_clarity: eco.grand_design_clarity,
            systemic_opportunity_cost: eco.systemic_opportunity_cost,
            change_seeds_planted: eco.change_seeds_planted,
            change_seeds_suppressed: eco.change_seeds_suppressed,

            expected_future_hope: outcome::expected_future_hope(eco, world),
            staff_total,
            staff_active,
            staff_burned_out,
            staff_left: staff_total - staff_active,
            students_total,
            students_active,
            students_left: students_total - students_active,
        }
    }
}

/// Append-only per-year log. Records are never mutated retroactively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    records: Vec<YearSnapshot>,
}

impl HistoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, snapshot: YearSnapshot) {
        self.records.push(snapshot);
    }

    #[must_use]
    pub fn records(&self) -> &[YearSnapshot] {
        &self.records
    }

    #[must_use]
    pub fn latest(&self) -> Option<&YearSnapshot> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolsim_data::{Actor, ChangeAttitude, Role};
    use uuid::Uuid;

    #[test]
    fn test_capture_counts_lifecycle_flags() {
        let mut eco = EcosystemState::default();
        let world = ExternalWorld::default();
        let mut t = Actor {
            id: Uuid::from_u128(1),
            name: "T1".into(),
            role: Role::Teacher,
            os_version: "OS".into(),
            adaptability: 0.5,
            protected: true,
            change_attitude: ChangeAttitude::Neutral,
            burned_out: true,
            has_left: false,
            reintegration_outcome: None,
            opportunity_cost: 0.0,
            choice: Default::default(),
            future_hope_probability: 0.0,
            future_hope_label: None,
        };
        eco.add_actor(t.clone());
        t.id = Uuid::from_u128(2);
        t.name = "T2".into();
        t.has_left = true;
        eco.add_actor(t.clone());
        t.id = Uuid::from_u128(3);
        t.name = "S1".into();
        t.role = Role::Student;
        t.burned_out = false;
        t.has_left = false;
        eco.add_actor(t);

        let snap = YearSnapshot::capture(&eco, &world);
        assert_eq!(snap.staff_total, 2);
        assert_eq!(snap.staff_active, 1);
        assert_eq!(snap.staff_burned_out, 2);
        assert_eq!(snap.staff_left, 1);
        assert_eq!(snap.students_total, 1);
        assert_eq!(snap.students_active, 1);
        assert!(snap.expected_future_hope > 0.0);
    }

    #[test]
    fn test_log_is_append_only_in_order() {
        let eco = EcosystemState::default();
        let world = ExternalWorld::default();
        let mut log = HistoryLog::new();
        assert!(log.is_empty());
        for _ in 0..3 {
            log.record(YearSnapshot::capture(&eco, &world));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.latest().map(|s| s.year), Some(0));
    }
}
