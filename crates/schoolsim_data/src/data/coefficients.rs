use serde::{Deserialize, Serialize};

/// Coupling weights for the yearly dynamics: how strongly each structural
/// factor feeds burnout, productivity, and efficiency.
///
/// These are free parameters, not fitted constants. They are factored out so
/// different parameter sets can reuse the same structural dynamics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicsCoefficients {
    // Burnout drivers
    pub infra_to_burnout: f64,
    pub dxclarity_to_burnout: f64,
    pub workload_to_burnout: f64,
    pub complexity_to_burnout: f64,
    pub trustlack_to_burnout: f64,
    pub personalization_to_burnout: f64,
    pub fragmentation_to_burnout: f64,

    // Burnout relief
    pub llm_relief_to_burnout: f64,
    pub ai_service_relief_to_burnout: f64,

    // Productivity drivers (negative contributions)
    pub external_system_to_productivity: f64,
    pub complexity_to_productivity: f64,
    pub workload_to_productivity: f64,
    pub infra_bad_to_productivity: f64,
    pub fragmentation_to_productivity: f64,
    pub personalization_to_productivity: f64,

    // Productivity gains
    pub llm_to_productivity: f64,
    pub ai_access_to_productivity: f64,

    // Base efficiency components
    pub base_eff_infra_weight: f64,
    pub base_eff_dxclarity_weight: f64,
    pub base_eff_pm_weight: f64,
    pub base_eff_trust_weight: f64,
    pub base_eff_assets_weight: f64,
    /// Added when suppression is low.
    pub suppression_bonus_to_eff: f64,
    pub llm_to_efficiency: f64,
    pub db_to_efficiency: f64,
    pub portal_to_efficiency: f64,
    pub personalization_to_efficiency: f64,
}

impl Default for DynamicsCoefficients {
    fn default() -> Self {
        Self {
            infra_to_burnout: 0.1,
            dxclarity_to_burnout: 0.1,
            workload_to_burnout: 0.05,
            complexity_to_burnout: 0.05,
            trustlack_to_burnout: 0.05,
            personalization_to_burnout: 0.05,
            fragmentation_to_burnout: 0.05,

            llm_relief_to_burnout: 0.04,
            ai_service_relief_to_burnout: 0.03,

            external_system_to_productivity: 0.03,
            complexity_to_productivity: 0.04,
            workload_to_productivity: 0.02,
            infra_bad_to_productivity: 0.02,
            fragmentation_to_productivity: 0.03,
            personalization_to_productivity: 0.03,

            llm_to_productivity: 0.05,
            ai_access_to_productivity: 0.03,

            base_eff_infra_weight: 0.3,
            base_eff_dxclarity_weight: 0.2,
            base_eff_pm_weight: 0.1,
            base_eff_trust_weight: 0.1,
            base_eff_assets_weight: 0.1,
            suppression_bonus_to_eff: 0.1,
            llm_to_efficiency: 0.1,
            db_to_efficiency: 0.05,
            portal_to_efficiency: 0.05,
            personalization_to_efficiency: 0.05,
        }
    }
}

impl DynamicsCoefficients {
    /// All weights as a flat list, for finiteness validation.
    #[must_use]
    pub fn as_slice(&self) -> [f64; 27] {
        [
            self.infra_to_burnout,
            self.dxclarity_to_burnout,
            self.workload_to_burnout,
            self.complexity_to_burnout,
            self.trustlack_to_burnout,
            self.personalization_to_burnout,
            self.fragmentation_to_burnout,
            self.llm_relief_to_burnout,
            self.ai_service_relief_to_burnout,
            self.external_system_to_productivity,
            self.complexity_to_productivity,
            self.workload_to_productivity,
            self.infra_bad_to_productivity,
            self.fragmentation_to_productivity,
            self.personalization_to_productivity,
            self.llm_to_productivity,
            self.ai_access_to_productivity,
            self.base_eff_infra_weight,
            self.base_eff_dxclarity_weight,
            self.base_eff_pm_weight,
            self.base_eff_trust_weight,
            self.base_eff_assets_weight,
            self.suppression_bonus_to_eff,
            self.llm_to_efficiency,
            self.db_to_efficiency,
            self.portal_to_efficiency,
            self.personalization_to_efficiency,
        ]
    }
}
