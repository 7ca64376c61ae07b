//! Stakeholder utilities: the explicit "value" layer.
//!
//! Different stakeholders weigh the same underlying state differently. A
//! utility is a linear score over a closed set of named indices; unknown
//! names are rejected when the utility is built, never silently scored as
//! zero.

use crate::ecosystem::EcosystemState;
use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};

/// The closed set of scorable ecosystem indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateIndex {
    InfrastructureHealth,
    DxClarity,
    BurnoutIndex,
    StudentExitRate,
    RecruitmentDifficulty,
    PortalMaturity,
    DatabaseFoundation,
    ProcessFragmentationIndex,
    TaskPersonalizationIndex,
    ExternalSystemDependency,
    ExternalSpend,
    LearningCostIndex,
    SystemComplexity,
    WorkloadIndex,
    EducationalAssetIndex,
    CentralRepositoryLevel,
    StudentLearningEfficiency,
    CompetitorGapIndex,
    InnovationPotentialIndex,
    LocalLlmInfraLevel,
    AiServiceQualityIndex,
    AiAccessibilityIndex,
    ProductivityIndex,
    EfficiencyIndexTrue,
    EfficiencyIndexRecognized,
    SuppressionLevel,
    LeadershipTrustBattery,
    InfoTransparency,
    PmCapability,
    GrandDesignClarity,
    SystemicOpportunityCost,
}

impl StateIndex {
    /// Reads the named index off the state. Total over the enum.
    #[must_use]
    pub fn value(self, eco: &EcosystemState) -> f64 {
        match self {
            Self::InfrastructureHealth => eco.infrastructure_health,
            Self::DxClarity => eco.dx_clarity,
            Self::BurnoutIndex => eco.burnout_index,
            Self::StudentExitRate => eco.student_exit_rate,
            Self::RecruitmentDifficulty => eco.recruitment_difficulty,
            Self::PortalMaturity => eco.portal_maturity,
            Self::DatabaseFoundation => eco.database_foundation,
            Self::ProcessFragmentationIndex => eco.process_fragmentation_index,
            Self::TaskPersonalizationIndex => eco.task_personalization_index,
            Self::ExternalSystemDependency => eco.external_system_dependency,
            Self::ExternalSpend => eco.external_spend,
            Self::LearningCostIndex => eco.learning_cost_index,
            Self::SystemComplexity => eco.system_complexity,
            Self::WorkloadIndex => eco.workload_index,
            Self::EducationalAssetIndex => eco.educational_asset_index,
            Self::CentralRepositoryLevel => eco.central_repository_level,
            Self::StudentLearningEfficiency => eco.student_learning_efficiency,
            Self::CompetitorGapIndex => eco.competitor_gap_index,
            Self::InnovationPotentialIndex => eco.innovation_potential_index,
            Self::LocalLlmInfraLevel => eco.local_llm_infra_level,
            Self::AiServiceQualityIndex => eco.ai_service_quality_index,
            Self::AiAccessibilityIndex => eco.ai_accessibility_index,
            Self::ProductivityIndex => eco.productivity_index,
            Self::EfficiencyIndexTrue => eco.efficiency_index_true,
            Self::EfficiencyIndexRecognized => eco.efficiency_index_recognized,
            Self::SuppressionLevel => eco.suppression_level,
            Self::LeadershipTrustBattery => eco.leadership_trust_battery,
            Self::InfoTransparency => eco.info_transparency,
            Self::PmCapability => eco.pm_capability,
            Self::GrandDesignClarity => eco.grand_design_clarity,
            Self::SystemicOpportunityCost => eco.systemic_opportunity_cost,
        }
    }

    /// Resolves a snake_case index name, rejecting unknown ones.
    pub fn from_name(name: &str) -> Result<Self> {
        serde_json::from_value(serde_json::Value::String(name.to_string()))
            .map_err(|_| SimError::config(format!("unknown state index {name:?}")))
    }
}

/// A named linear utility over ecosystem indices. Pure observer: scoring
/// never mutates the state, and any number of utilities can be evaluated
/// against the same state without interference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeholderUtility {
    pub name: String,
    weights: Vec<(StateIndex, f64)>,
}

impl StakeholderUtility {
    #[must_use]
    pub fn new(name: impl Into<String>, weights: Vec<(StateIndex, f64)>) -> Self {
        Self {
            name: name.into(),
            weights,
        }
    }

    /// Builds a utility from string-keyed weights, failing on any unknown
    /// index name.
    pub fn from_named_weights(name: impl Into<String>, pairs: &[(&str, f64)]) -> Result<Self> {
        let mut weights = Vec::with_capacity(pairs.len());
        for (key, w) in pairs {
            weights.push((StateIndex::from_name(key)?, *w));
        }
        Ok(Self::new(name, weights))
    }

    #[must_use]
    pub fn weights(&self) -> &[(StateIndex, f64)] {
        &self.weights
    }

    /// Dot product of the weights against the state.
    #[must_use]
    pub fn score(&self, eco: &EcosystemState) -> f64 {
        self.weights
            .iter()
            .map(|(idx, w)| w * idx.value(eco))
            .sum()
    }

    /// How working here feels to the staff.
    #[must_use]
    pub fn teacher_perspective() -> Self {
        Self::new(
            "TeacherPerspective",
            vec![
                (StateIndex::BurnoutIndex, -0.7),
                (StateIndex::WorkloadIndex, -0.5),
                (StateIndex::StudentLearningEfficiency, 0.3),
                (StateIndex::LeadershipTrustBattery, 0.4),
                (StateIndex::RecruitmentDifficulty, -0.3),
            ],
        )
    }

    /// What leadership tends to look at: apparent efficiency and cost.
    #[must_use]
    pub fn management_kpi_perspective() -> Self {
        Self::new(
            "ManagementKPIPerspective",
            vec![
                (StateIndex::EfficiencyIndexRecognized, 0.6),
                (StateIndex::ExternalSpend, -0.3),
                (StateIndex::CompetitorGapIndex, -0.4),
                (StateIndex::StudentExitRate, -0.4),
            ],
        )
    }

    /// The learning experience as students and parents meet it.
    #[must_use]
    pub fn student_parent_perspective() -> Self {
        Self::new(
            "StudentParentPerspective",
            vec![
                (StateIndex::StudentLearningEfficiency, 0.6),
                (StateIndex::AiAccessibilityIndex, 0.4),
                (StateIndex::AiServiceQualityIndex, 0.4),
                (StateIndex::BurnoutIndex, -0.3),
                (StateIndex::StudentExitRate, -0.5),
            ],
        )
    }
}

/// The stock set of example stakeholder utilities.
#[must_use]
pub fn default_utilities() -> Vec<StakeholderUtility> {
    vec![
        StakeholderUtility::teacher_perspective(),
        StakeholderUtility::management_kpi_perspective(),
        StakeholderUtility::student_parent_perspective(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_a_plain_dot_product() {
        let mut eco = EcosystemState::default();
        eco.burnout_index = 0.5;
        eco.workload_index = 0.2;
        let u = StakeholderUtility::new(
            "U",
            vec![
                (StateIndex::BurnoutIndex, -1.0),
                (StateIndex::WorkloadIndex, 2.0),
            ],
        );
        assert!((u.score(&eco) - (-0.5 + 0.4)).abs() < 1e-12);
    }

    #[test]
    fn test_scoring_does_not_mutate_state() {
        let eco = EcosystemState::default();
        let before = eco.clone();
        for u in default_utilities() {
            let _ = u.score(&eco);
        }
        assert_eq!(eco, before);
    }

    #[test]
    fn test_unknown_index_name_is_rejected_at_construction() {
        let err = StakeholderUtility::from_named_weights("U", &[("burnout_idnex", -0.7)]);
        assert!(err.is_err());
    }

    #[test]
    fn test_known_names_resolve() {
        let u = StakeholderUtility::from_named_weights(
            "U",
            &[("burnout_index", -0.7), ("external_spend", -0.3)],
        )
        .unwrap();
        assert_eq!(u.weights().len(), 2);
        assert_eq!(u.weights()[0].0, StateIndex::BurnoutIndex);
    }
}
