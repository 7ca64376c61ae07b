//! Scenario construction: turning declarative staff and cohort specs into
//! the actor registry.
//!
//! Validation fails fast, before any tick runs. Sampling goes through the
//! run's single [`RandomVariationSource`] so a seeded scenario rebuilds
//! identically.

use crate::rng::RandomVariationSource;
use anyhow::{ensure, Result};
use schoolsim_data::{Actor, ChangeAttitude, OpportunityChoice, Role};
use serde::{Deserialize, Serialize};

const PROBABILITY_SUM_TOLERANCE: f64 = 1e-9;
const MAX_COHORT_SIZE: u32 = 10_000;

/// One named staff member (teacher or admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffSpec {
    pub name: String,
    pub role: Role,
    pub os_version: String,
    pub adaptability: f64,
    pub protected: bool,
    pub change_attitude: ChangeAttitude,
}

/// A batch of students drawn from an adaptability distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentCohort {
    pub count: u32,
    pub name_prefix: String,
    pub os_version: String,
    pub adaptability_mean: f64,
    pub adaptability_std_dev: f64,
    /// Samples are clamped into [adaptability_min, adaptability_max].
    pub adaptability_min: f64,
    pub adaptability_max: f64,
    pub protected: bool,
    /// Attitude probabilities; must sum to 1.0.
    pub support_probability: f64,
    pub neutral_probability: f64,
    pub resist_probability: f64,
}

/// The full deterministic scenario table consumed once at build time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub staff: Vec<StaffSpec>,
    pub cohorts: Vec<StudentCohort>,
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.staff.is_empty() || !self.cohorts.is_empty(),
            "Scenario must declare at least one staff member or cohort"
        );
        for spec in &self.staff {
            ensure!(!spec.name.is_empty(), "Staff name must not be empty");
            ensure!(
                spec.role.is_staff(),
                "Staff spec {:?} must use a staff role",
                spec.name
            );
            ensure!(
                (0.0..=1.0).contains(&spec.adaptability),
                "Staff adaptability must be in [0.0, 1.0]"
            );
        }
        for cohort in &self.cohorts {
            ensure!(cohort.count > 0, "Cohort count must be positive");
            ensure!(
                cohort.count <= MAX_COHORT_SIZE,
                "Cohort too large (max {MAX_COHORT_SIZE})"
            );
            ensure!(
                (0.0..=1.0).contains(&cohort.adaptability_mean),
                "Cohort adaptability mean must be in [0.0, 1.0]"
            );
            ensure!(
                cohort.adaptability_std_dev >= 0.0,
                "Cohort adaptability std dev must be non-negative"
            );
            ensure!(
                (0.0..=1.0).contains(&cohort.adaptability_min)
                    && (0.0..=1.0).contains(&cohort.adaptability_max)
                    && cohort.adaptability_min <= cohort.adaptability_max,
                "Cohort adaptability clamp range must be an interval inside [0.0, 1.0]"
            );
            for p in [
                cohort.support_probability,
                cohort.neutral_probability,
                cohort.resist_probability,
            ] {
                ensure!(
                    (0.0..=1.0).contains(&p),
                    "Attitude probabilities must be in [0.0, 1.0]"
                );
            }
            let total = cohort.support_probability
                + cohort.neutral_probability
                + cohort.resist_probability;
            ensure!(
                (total - 1.0).abs() <= PROBABILITY_SUM_TOLERANCE,
                "Attitude probabilities must sum to 1.0 (got {total})"
            );
        }
        Ok(())
    }

    /// Builds the actor registry. Callers validate first; building is
    /// infallible given a valid scenario.
    pub fn build(&self, rng: &mut RandomVariationSource) -> Vec<Actor> {
        let total = self.staff.len()
            + self.cohorts.iter().map(|c| c.count as usize).sum::<usize>();
        let mut actors = Vec::with_capacity(total);

        for spec in &self.staff {
            actors.push(Actor {
                id: rng.actor_id(),
                name: spec.name.clone(),
                role: spec.role,
                os_version: spec.os_version.clone(),
                adaptability: spec.adaptability.clamp(0.0, 1.0),
                protected: spec.protected,
                change_attitude: spec.change_attitude,
                burned_out: false,
                has_left: false,
                reintegration_outcome: None,
                opportunity_cost: 0.0,
                choice: OpportunityChoice::Undetermined,
                future_hope_probability: 0.0,
                future_hope_label: None,
            });
        }

        for cohort in &self.cohorts {
            for i in 0..cohort.count {
                let adaptability = rng
                    .gauss(cohort.adaptability_mean, cohort.adaptability_std_dev)
                    .clamp(cohort.adaptability_min, cohort.adaptability_max);
                let r = rng.uniform();
                let change_attitude = if r < cohort.support_probability {
                    ChangeAttitude::Support
                } else if r < cohort.support_probability + cohort.neutral_probability {
                    ChangeAttitude::Neutral
                } else {
                    ChangeAttitude::Resist
                };
                actors.push(Actor {
                    id: rng.actor_id(),
                    name: format!("{}{}", cohort.name_prefix, i + 1),
                    role: Role::Student,
                    os_version: cohort.os_version.clone(),
                    adaptability,
                    protected: cohort.protected,
                    change_attitude,
                    burned_out: false,
                    has_left: false,
                    reintegration_outcome: None,
                    opportunity_cost: 0.0,
                    choice: OpportunityChoice::Undetermined,
                    future_hope_probability: 0.0,
                    future_hope_label: None,
                });
            }
        }

        actors
    }

    /// The stock demo scenario: a handful of legacy staff, a few high-adapt
    /// teachers, and a hundred-student cohort.
    #[must_use]
    pub fn demo() -> Self {
        let staff = vec![
            StaffSpec {
                name: "LegacyDXChief".into(),
                role: Role::Admin,
                os_version: "LegacyOS-1995".into(),
                adaptability: 0.3,
                protected: true,
                change_attitude: ChangeAttitude::Neutral,
            },
            StaffSpec {
                name: "LegacyTeacherA".into(),
                role: Role::Teacher,
                os_version: "LegacyOS-2000".into(),
                adaptability: 0.4,
                protected: true,
                change_attitude: ChangeAttitude::Support,
            },
            StaffSpec {
                name: "LegacyTeacherB".into(),
                role: Role::Teacher,
                os_version: "LegacyOS-2005".into(),
                adaptability: 0.35,
                protected: true,
                change_attitude: ChangeAttitude::Resist,
            },
            StaffSpec {
                name: "HighAdaptTeacher1".into(),
                role: Role::Teacher,
                os_version: "HighAdaptOS-2025 (LLM-aware)".into(),
                adaptability: 0.9,
                protected: false,
                change_attitude: ChangeAttitude::Support,
            },
            StaffSpec {
                name: "HighAdaptTeacher2".into(),
                role: Role::Teacher,
                os_version: "HighAdaptOS-2022".into(),
                adaptability: 0.8,
                protected: false,
                change_attitude: ChangeAttitude::Support,
            },
            StaffSpec {
                name: "HighAdaptTeacher3".into(),
                role: Role::Teacher,
                os_version: "HighAdaptOS-2020".into(),
                adaptability: 0.75,
                protected: true,
                change_attitude: ChangeAttitude::Neutral,
            },
        ];
        let cohorts = vec![StudentCohort {
            count: 100,
            name_prefix: "Student".into(),
            os_version: "StudentOS-1.0".into(),
            adaptability_mean: 0.5,
            adaptability_std_dev: 0.15,
            adaptability_min: 0.1,
            adaptability_max: 0.9,
            protected: true,
            support_probability: 0.15,
            neutral_probability: 0.70,
            resist_probability: 0.15,
        }];
        Self { staff, cohorts }
    }
}
