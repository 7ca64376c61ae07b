use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a person inside the ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Teacher,
    Admin,
    Student,
}

impl Role {
    #[must_use]
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Teacher | Role::Admin)
    }
}

/// Stance toward organizational change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAttitude {
    Support,
    #[default]
    Neutral,
    Resist,
}

/// What a burned-out actor decided to do about their position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityChoice {
    #[default]
    Undetermined,
    StayInside,
    LeaveOutside,
}

/// How an actor who left the ecosystem fared outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReintegrationOutcome {
    Rebooted,
    Casualty,
}

/// One person in the ecosystem: staff or student.
///
/// Actors are created once at scenario build time and only ever flagged
/// afterwards, never removed. `reintegration_outcome` is `Some` only for
/// actors with `has_left` set; `future_hope_label`, once `Some`, is never
/// re-rolled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    /// Display-only label (e.g. "LegacyOS-1995"). Has no effect on dynamics.
    pub os_version: String,
    /// Base adaptability in [0, 1].
    pub adaptability: f64,
    /// Whether the actor is sheltered from external selection pressure.
    pub protected: bool,
    pub change_attitude: ChangeAttitude,

    pub burned_out: bool,
    pub has_left: bool,
    pub reintegration_outcome: Option<ReintegrationOutcome>,

    /// Abstract cost the actor pays for staying in a poor fit; accumulates.
    pub opportunity_cost: f64,
    pub choice: OpportunityChoice,

    /// Students only: last computed future-hope probability.
    pub future_hope_probability: f64,
    /// Students only: resolved at most once per run.
    pub future_hope_label: Option<bool>,
}

impl Actor {
    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }

    #[must_use]
    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }

    /// An actor still inside the ecosystem.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.has_left
    }
}
