use serde::{Deserialize, Serialize};

/// Macro constraints the organization operates under. Immutable per run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConstraints {
    /// 0-1, high = little money available.
    pub budget_pressure: f64,
    /// 0-1, high = reforms are hard to push through.
    pub regulation_rigidity: f64,
    /// 0-1, high = shrinking student pool.
    pub demographic_pressure: f64,
}

impl Default for EnvironmentConstraints {
    fn default() -> Self {
        Self {
            budget_pressure: 0.5,
            regulation_rigidity: 0.5,
            demographic_pressure: 0.5,
        }
    }
}

/// The outside environment where AI, DX, and macro change create real
/// selection pressure. Immutable per run; shared by reference with the
/// outcome layer, never owned by the ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExternalWorld {
    /// 0-1, high = harsh selection.
    pub selection_pressure: f64,
    /// 0-1, speed of the ongoing paradigm shift.
    pub ai_shift_speed: f64,
}

impl Default for ExternalWorld {
    fn default() -> Self {
        Self {
            selection_pressure: 0.8,
            ai_shift_speed: 0.9,
        }
    }
}
