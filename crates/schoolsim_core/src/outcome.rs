//! Post-hoc outcome resolution: reintegration of leavers and the
//! probabilistic "future hope" model for students.
//!
//! Everything here reads the ecosystem's indices; the only mutations are
//! the resolved flags written back onto actors.

use crate::ecosystem::EcosystemState;
use crate::error::Result;
use crate::rng::RandomVariationSource;
use crate::world::SelectionLogic;
use schoolsim_data::{Actor, ExternalWorld};

/// Logit offset at a fully hostile environment (env_score = 0).
const BASELINE_LOGIT: f64 = -2.5;
/// Logit gained across the full environment range.
const ENV_LOGIT_SPAN: f64 = 3.0;
/// Weight of the adaptability-vs-threshold delta; ±0.2 of delta matters.
const DELTA_LOGIT_WEIGHT: f64 = 5.0;
/// Keeps the probability strictly inside (0, 1): even harsh environments
/// leave a sliver of hope, and favorable ones guarantee nothing.
const PROBABILITY_MARGIN: f64 = 1e-9;

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Aggregate environment score in [0, 1]: how hospitable the ecosystem is
/// to a student's long-term trajectory.
#[must_use]
pub fn environment_score(eco: &EcosystemState) -> f64 {
    let components = [
        1.0 - eco.suppression_level,
        eco.dx_clarity,
        eco.student_learning_efficiency,
        eco.ai_accessibility_index,
    ];
    let mean = components.iter().sum::<f64>() / components.len() as f64;
    mean.clamp(0.0, 1.0)
}

fn hope_probability(env_score: f64, world: &ExternalWorld, student: &Actor) -> f64 {
    let delta = world.effective_adaptability(student) - world.required_threshold();
    let logit = BASELINE_LOGIT + ENV_LOGIT_SPAN * env_score + DELTA_LOGIT_WEIGHT * delta;
    sigmoid(logit).clamp(PROBABILITY_MARGIN, 1.0 - PROBABILITY_MARGIN)
}

/// Probability that a student becomes "future hope": strictly in (0, 1).
#[must_use]
pub fn student_future_hope_probability(
    eco: &EcosystemState,
    world: &ExternalWorld,
    student: &Actor,
) -> f64 {
    hope_probability(environment_score(eco), world, student)
}

/// Stores the current probability on every student and resolves the label
/// for any student not yet labeled. Labels are one-shot: a `Some` label is
/// never overwritten, so calling this again only refreshes probabilities.
pub fn resolve_future_hope(
    eco: &mut EcosystemState,
    world: &ExternalWorld,
    rng: &mut RandomVariationSource,
) {
    let env_score = environment_score(eco);
    for a in eco.actors.iter_mut().filter(|a| a.is_student()) {
        let p = hope_probability(env_score, world, a);
        a.future_hope_probability = p;
        if a.future_hope_label.is_none() {
            a.future_hope_label = Some(rng.uniform() < p);
        }
    }
}

/// Resolves the outside outcome for every departed staff member, skipping
/// the already-resolved. Students who exit are covered by the future-hope
/// model instead.
pub fn resolve_reintegration(
    eco: &mut EcosystemState,
    world: &ExternalWorld,
    rng: &mut RandomVariationSource,
) -> Result<()> {
    for a in eco
        .actors
        .iter_mut()
        .filter(|a| a.is_staff() && a.has_left)
    {
        world.reintegration_outcome(a, rng)?;
    }
    Ok(())
}

/// Expected future-hope count: the sum of probabilities over students still
/// inside the ecosystem.
#[must_use]
pub fn expected_future_hope(eco: &EcosystemState, world: &ExternalWorld) -> f64 {
    let env_score = environment_score(eco);
    eco.actors
        .iter()
        .filter(|a| a.is_student() && a.is_active())
        .map(|a| hope_probability(env_score, world, a))
        .sum()
}
