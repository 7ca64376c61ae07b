//! The yearly update procedure.
//!
//! `DynamicsEngine::step` advances an [`EcosystemState`] by exactly one
//! simulated year by running the [`TICKS`] pipeline in declared order. The
//! order is a dependency chain: later ticks deliberately read values earlier
//! ticks already updated this year, so it is part of the contract, not an
//! implementation detail.
//!
//! Every scalar sub-update follows the same numerical rule:
//!
//! ```text
//! new = clamp(old + trend_damping * raw_delta + noise(randomness))
//! ```
//!
//! The damping blend models institutional inertia; the noise term keeps any
//! single trajectory from being fate.

use crate::ecosystem::EcosystemState;
use crate::rng::RandomVariationSource;
use schoolsim_data::{Actor, ChangeAttitude, OpportunityChoice};

/// Staff whose accumulated opportunity cost passes this leave anyway.
const OPPORTUNITY_COST_LEAVE_THRESHOLD: f64 = 2.0;
/// Burned-out staff above this adaptability choose the outside directly.
const CONFIDENT_LEAVER_ADAPTABILITY: f64 = 0.6;

/// One named sub-update of the yearly step, with a documented read/write set.
#[derive(Clone, Copy)]
pub struct Tick {
    pub name: &'static str,
    pub run: fn(&mut EcosystemState, &mut RandomVariationSource),
}

/// The ordered tick pipeline. Reordering entries changes the model.
pub const TICKS: [Tick; 13] = [
    Tick { name: "infrastructure", run: tick_infrastructure },
    Tick { name: "dx_clarity", run: tick_dx_clarity },
    Tick { name: "strategy", run: tick_strategy },
    Tick { name: "portal_db", run: tick_portal_db },
    Tick { name: "pm_design", run: tick_pm_design },
    Tick { name: "change_dynamics", run: tick_change_dynamics },
    Tick { name: "education_assets", run: tick_education_assets },
    Tick { name: "innovation", run: tick_innovation },
    Tick { name: "external_systems", run: tick_external_systems },
    Tick { name: "trust_transparency", run: tick_trust_transparency },
    Tick { name: "burnout", run: tick_burnout },
    Tick { name: "students", run: tick_students },
    Tick { name: "productivity_efficiency", run: tick_productivity_efficiency },
];

/// Advances the ecosystem year by year. Stateless; all mutable state lives
/// in the ecosystem and the variation source.
pub struct DynamicsEngine;

impl DynamicsEngine {
    /// Simulate one year. Out-of-range inputs are normalized first rather
    /// than propagated; the step itself never fails.
    pub fn step(eco: &mut EcosystemState, rng: &mut RandomVariationSource) {
        eco.normalize();
        eco.years_simulated += 1;
        for tick in &TICKS {
            (tick.run)(eco, rng);
        }
    }
}

/// Applies the damping+noise blend to a [0, 1] index.
fn nudge(
    value: &mut f64,
    raw_delta: f64,
    damping: f64,
    rng: &mut RandomVariationSource,
    amplitude: f64,
) {
    *value = (*value + damping * raw_delta + rng.noise(amplitude)).clamp(0.0, 1.0);
}

/// Same blend for unbounded non-negative accumulators.
fn nudge_floor(
    value: &mut f64,
    raw_delta: f64,
    damping: f64,
    rng: &mut RandomVariationSource,
    amplitude: f64,
) {
    *value = (*value + damping * raw_delta + rng.noise(amplitude)).max(0.0);
}

/// Reads: budget_pressure, database_foundation, portal_maturity.
/// Writes: infrastructure_health.
///
/// Infrastructure decays by default; a solid database and portal can hold it
/// up, but only to the extent the budget leaves headroom for upkeep.
fn tick_infrastructure(eco: &mut EcosystemState, rng: &mut RandomVariationSource) {
    let damping = eco.trend_damping;
    let amp = eco.randomness;
    let headroom = 1.0 - eco.constraints.budget_pressure;
    let support = 0.5 * (eco.database_foundation + eco.portal_maturity);
    let raw = 0.08 * support * headroom - 0.03;
    nudge(&mut eco.infrastructure_health, raw, damping, rng, amp);
}

/// Reads: pm_capability, grand_design_clarity, regulation_rigidity.
/// Writes: dx_clarity.
///
/// Clarity converges toward what the PM layer can actually articulate,
/// slowed by regulatory rigidity, with a small baseline decay.
fn tick_dx_clarity(eco: &mut EcosystemState, rng: &mut RandomVariationSource) {
    let damping = eco.trend_damping;
    let amp = eco.randomness;
    let target = 0.5
        * (eco.pm_capability + eco.grand_design_clarity)
        * (1.0 - 0.4 * eco.constraints.regulation_rigidity);
    let raw = 0.35 * (target - eco.dx_clarity) - 0.02;
    nudge(&mut eco.dx_clarity, raw, damping, rng, amp);
}

/// Reads: budget_pressure, regulation_rigidity, suppression_level.
/// Writes: grand_design_clarity, pm_capability.
///
/// Strategic capability grows only inside the window both constraints leave
/// open, and suppression eats into even that.
fn tick_strategy(eco: &mut EcosystemState, rng: &mut RandomVariationSource) {
    let damping = eco.trend_damping;
    let amp = eco.randomness;
    let gate = (1.0 - 0.5 * eco.constraints.budget_pressure)
        * (1.0 - 0.5 * eco.constraints.regulation_rigidity);
    let drag = eco.suppression_level;
    let raw_design = 0.05 * gate * (1.0 - drag) - 0.02 * drag;
    let raw_pm = 0.04 * gate * (1.0 - drag) - 0.015 * drag;
    nudge(&mut eco.grand_design_clarity, raw_design, damping, rng, amp);
    nudge(&mut eco.pm_capability, raw_pm, damping, rng, amp);
}

/// Reads: budget_pressure, educational_asset_index.
/// Writes: portal_maturity, database_foundation.
///
/// Investment headroom drives both; existing educational assets make every
/// invested unit go further.
fn tick_portal_db(eco: &mut EcosystemState, rng: &mut RandomVariationSource) {
    let damping = eco.trend_damping;
    let amp = eco.randomness;
    let headroom = 1.0 - eco.constraints.budget_pressure;
    let invest = 0.06 * headroom * (0.4 + 0.6 * eco.educational_asset_index);
    nudge(&mut eco.portal_maturity, invest - 0.01, damping, rng, amp);
    nudge(&mut eco.database_foundation, invest - 0.01, damping, rng, amp);
}

/// Reads: info_transparency.
/// Writes: pm_capability, grand_design_clarity.
///
/// Transparent organizations refine their PM practice; opaque ones let it
/// rot. Runs after the strategy tick on purpose: it refines this year's
/// values.
fn tick_pm_design(eco: &mut EcosystemState, rng: &mut RandomVariationSource) {
    let damping = eco.trend_damping;
    let amp = eco.randomness;
    let t = eco.info_transparency;
    nudge(&mut eco.pm_capability, 0.05 * t - 0.02 * (1.0 - t), damping, rng, amp);
    nudge(
        &mut eco.grand_design_clarity,
        0.04 * t - 0.02 * (1.0 - t),
        damping,
        rng,
        amp,
    );
}

/// Reads: actors (attitude, protection, lifecycle), suppression_level.
/// Writes: suppression_level, process_fragmentation_index,
/// change_seeds_planted, change_seeds_suppressed, systemic_opportunity_cost,
/// student adaptability (erosion under heavy suppression).
///
/// Active staff who support change plant "change seeds". Under heavy
/// suppression the seeds are crushed, the crushing machinery consolidates,
/// and everyone pays for it; under light suppression the seeds loosen the
/// organization's grip on itself.
fn tick_change_dynamics(eco: &mut EcosystemState, rng: &mut RandomVariationSource) {
    let damping = eco.trend_damping;
    let amp = eco.randomness;

    fn is_seed(a: &Actor) -> bool {
        a.is_staff()
            && a.is_active()
            && !a.burned_out
            && a.change_attitude == ChangeAttitude::Support
    }
    let seeds = eco.actors.iter().filter(|a| is_seed(a)).count() as u32;
    // Unprotected supporters push harder; they feel the outside pressure.
    let push: f64 = eco
        .actors
        .iter()
        .filter(|a| is_seed(a))
        .map(|a| a.adaptability * if a.protected { 0.8 } else { 1.2 })
        .sum();

    if seeds == 0 {
        // Nobody pushes back; the status quo hardens a little.
        nudge(&mut eco.suppression_level, 0.01, damping, rng, amp);
        nudge(&mut eco.process_fragmentation_index, 0.01, damping, rng, amp);
        return;
    }

    eco.change_seeds_planted += seeds;
    let s = eco.suppression_level;

    if s > 0.5 {
        eco.change_seeds_suppressed += seeds;
        nudge_floor(
            &mut eco.systemic_opportunity_cost,
            0.4 * s * f64::from(seeds),
            damping,
            rng,
            amp,
        );
        nudge(&mut eco.suppression_level, 0.02 * s, damping, rng, amp);
        nudge(&mut eco.process_fragmentation_index, 0.03 * s, damping, rng, amp);
        // Watching seeds get crushed erodes student adaptability.
        for a in eco
            .actors
            .iter_mut()
            .filter(|a| a.is_student() && a.is_active())
        {
            a.adaptability = (a.adaptability - 0.01 * s).max(0.0);
        }
    } else {
        let openness = 1.0 - s;
        let loosen = (0.03 + 0.02 * push.min(3.0)) * openness;
        nudge(&mut eco.suppression_level, -loosen, damping, rng, amp);
        nudge(
            &mut eco.process_fragmentation_index,
            -0.04 * openness,
            damping,
            rng,
            amp,
        );
    }
}

/// Reads: regulation_rigidity, portal_maturity, local_llm_infra_level,
/// educational_asset_index.
/// Writes: educational_asset_index, central_repository_level,
/// competitor_gap_index.
fn tick_education_assets(eco: &mut EcosystemState, rng: &mut RandomVariationSource) {
    let damping = eco.trend_damping;
    let amp = eco.randomness;
    let gate = eco.portal_maturity * (1.0 - 0.5 * eco.constraints.regulation_rigidity);
    let raw_assets = 0.06 * gate + 0.02 * eco.local_llm_infra_level - 0.01;
    let raw_repo = 0.06 * gate - 0.01;
    let raw_gap =
        0.05 * (0.4 - eco.educational_asset_index) - 0.02 * eco.local_llm_infra_level;
    nudge(&mut eco.educational_asset_index, raw_assets, damping, rng, amp);
    nudge(&mut eco.central_repository_level, raw_repo, damping, rng, amp);
    nudge(&mut eco.competitor_gap_index, raw_gap, damping, rng, amp);
}

/// Reads: infrastructure_health, central_repository_level, dx_clarity,
/// leadership_trust_battery, budget_pressure.
/// Writes: innovation_potential_index, local_llm_infra_level,
/// ai_service_quality_index, ai_accessibility_index.
///
/// AI benefits are conditionally unlocked, never unconditional: all four
/// structural gates must hold or the whole layer decays.
fn tick_innovation(eco: &mut EcosystemState, rng: &mut RandomVariationSource) {
    let damping = eco.trend_damping;
    let amp = eco.randomness;
    let ready = eco.infrastructure_health >= 0.5
        && eco.central_repository_level >= 0.5
        && eco.dx_clarity >= 0.6
        && eco.leadership_trust_battery >= 0.5;

    if ready {
        let budget_factor = 1.0 - 0.5 * eco.constraints.budget_pressure;
        nudge(
            &mut eco.innovation_potential_index,
            0.05 * budget_factor,
            damping,
            rng,
            amp,
        );
        nudge(
            &mut eco.local_llm_infra_level,
            0.04 * eco.innovation_potential_index * budget_factor,
            damping,
            rng,
            amp,
        );
        nudge(
            &mut eco.ai_service_quality_index,
            0.05 * eco.local_llm_infra_level,
            damping,
            rng,
            amp,
        );
        nudge(
            &mut eco.ai_accessibility_index,
            0.04 * eco.local_llm_infra_level,
            damping,
            rng,
            amp,
        );
    } else {
        nudge(&mut eco.innovation_potential_index, -0.02, damping, rng, amp);
        nudge(&mut eco.local_llm_infra_level, -0.01, damping, rng, amp);
        nudge(&mut eco.ai_service_quality_index, -0.01, damping, rng, amp);
        nudge(&mut eco.ai_accessibility_index, -0.01, damping, rng, amp);
    }
}

/// Reads: demographic_pressure, process_fragmentation_index,
/// infrastructure_health, dx_clarity, suppression_level.
/// Writes: external_system_dependency, external_spend, system_complexity,
/// workload_index, learning_cost_index.
///
/// Weak internal foundations push the organization toward buying its way
/// out, which costs money, raises complexity and workload, and adds a
/// learning tax on everyone.
fn tick_external_systems(eco: &mut EcosystemState, rng: &mut RandomVariationSource) {
    let damping = eco.trend_damping;
    let amp = eco.randomness;
    let strain = eco.constraints.demographic_pressure;

    let mut d_dependency = 0.0;
    let mut d_spend = 0.0;
    let mut d_complexity = 0.0;
    let mut d_workload = 0.0;
    let mut d_learning = 0.0;

    if eco.infrastructure_health < 0.6 && eco.dx_clarity < 0.3 {
        d_dependency += 0.05 + 0.02 * strain;
        d_spend += 0.10 + 0.05 * eco.external_system_dependency;
        d_complexity += 0.04 + 0.02 * eco.process_fragmentation_index;
        d_workload += 0.03;
        d_learning += 0.05;
    }
    if eco.suppression_level < 0.4 && eco.dx_clarity > 0.5 {
        d_dependency -= 0.03;
        d_complexity -= 0.03;
        d_workload -= 0.02;
        d_learning -= 0.02;
    }

    nudge(&mut eco.external_system_dependency, d_dependency, damping, rng, amp);
    nudge_floor(&mut eco.external_spend, d_spend, damping, rng, amp);
    nudge(&mut eco.system_complexity, d_complexity, damping, rng, amp);
    nudge(&mut eco.workload_index, d_workload, damping, rng, amp);
    nudge(&mut eco.learning_cost_index, d_learning, damping, rng, amp);
}

/// Reads: suppression_level, info_transparency, dx_clarity, pm_capability,
/// grand_design_clarity, portal_maturity.
/// Writes: leadership_trust_battery, info_transparency.
///
/// Suppression drains the trust battery; it only recharges when the whole
/// governance stack is visibly working.
fn tick_trust_transparency(eco: &mut EcosystemState, rng: &mut RandomVariationSource) {
    let damping = eco.trend_damping;
    let amp = eco.randomness;
    let s = eco.suppression_level;

    let mut d_trust = 0.0;
    if s > 0.6 || eco.info_transparency < 0.4 || eco.dx_clarity < 0.3 {
        d_trust -= 0.03;
    }
    if s < 0.4
        && eco.info_transparency > 0.6
        && eco.pm_capability > 0.5
        && eco.grand_design_clarity > 0.5
        && eco.portal_maturity > 0.5
    {
        d_trust += 0.05;
    }
    let d_transparency = if s > 0.6 {
        -0.02
    } else if s < 0.4 {
        0.02
    } else {
        0.0
    };

    nudge(&mut eco.leadership_trust_battery, d_trust, damping, rng, amp);
    nudge(&mut eco.info_transparency, d_transparency, damping, rng, amp);
}

/// Reads: coefficients, infrastructure_health, dx_clarity, workload_index,
/// process_fragmentation_index, system_complexity, leadership_trust_battery,
/// task_personalization_index, local_llm_infra_level,
/// ai_service_quality_index, demographic_pressure.
/// Writes: burnout_index, recruitment_difficulty, staff actor flags
/// (burned_out, has_left, choice, opportunity_cost).
fn tick_burnout(eco: &mut EcosystemState, rng: &mut RandomVariationSource) {
    let damping = eco.trend_damping;
    let amp = eco.randomness;
    let c = eco.coefficients;

    let mut raw = 0.0;
    raw += c.infra_to_burnout * (1.0 - eco.infrastructure_health);
    raw += c.dxclarity_to_burnout * (1.0 - eco.dx_clarity);
    raw += c.workload_to_burnout * eco.workload_index;
    raw += c.fragmentation_to_burnout * eco.process_fragmentation_index;
    raw += c.complexity_to_burnout * eco.system_complexity;
    raw += c.trustlack_to_burnout * (1.0 - eco.leadership_trust_battery);
    raw += c.personalization_to_burnout * eco.task_personalization_index;
    // Relief from good AI infra.
    raw -= c.llm_relief_to_burnout * eco.local_llm_infra_level;
    raw -= c.ai_service_relief_to_burnout * eco.ai_service_quality_index;
    nudge(&mut eco.burnout_index, raw, damping, rng, amp);

    let recruit_target = 0.3
        + 0.2 * eco.burnout_index
        + 0.2 * eco.system_complexity
        + 0.2 * (1.0 - eco.leadership_trust_battery)
        + 0.1 * eco.constraints.demographic_pressure;
    let d_recruit = recruit_target.clamp(0.0, 1.0) - eco.recruitment_difficulty;
    nudge(&mut eco.recruitment_difficulty, d_recruit, damping, rng, amp);

    // Per-actor resolution. High adapters crack first in a dysfunctional
    // organization: their threshold is lower because they see what they are
    // losing. Protection shelters, a little.
    let burnout_level = eco.burnout_index;
    let suppression = eco.suppression_level;
    for a in eco
        .actors
        .iter_mut()
        .filter(|a| a.is_staff() && a.is_active())
    {
        let mut threshold = 1.0 - a.adaptability;
        if a.protected {
            threshold += 0.1;
        }
        if !a.burned_out && burnout_level > threshold {
            a.burned_out = true;
            if a.adaptability > CONFIDENT_LEAVER_ADAPTABILITY {
                a.has_left = true;
                a.choice = OpportunityChoice::LeaveOutside;
                a.opportunity_cost += 1.0;
            } else {
                a.choice = OpportunityChoice::StayInside;
                a.opportunity_cost += 0.7;
            }
        } else if a.burned_out {
            // Staying in a poor fit keeps charging the meter.
            a.opportunity_cost += 0.25 * suppression;
            if a.opportunity_cost > OPPORTUNITY_COST_LEAVE_THRESHOLD {
                a.has_left = true;
                a.choice = OpportunityChoice::LeaveOutside;
            }
        }
    }
}

/// Reads: ai_accessibility_index, ai_service_quality_index,
/// local_llm_infra_level, suppression_level, burnout_index,
/// infrastructure_health, leadership_trust_battery, competitor_gap_index,
/// demographic_pressure, student_learning_efficiency.
/// Writes: student_learning_efficiency, student_exit_rate, student actor
/// exits (probabilistic).
fn tick_students(eco: &mut EcosystemState, rng: &mut RandomVariationSource) {
    let damping = eco.trend_damping;
    let amp = eco.randomness;

    let d_learning = 0.05 * eco.ai_accessibility_index + 0.03 * eco.local_llm_infra_level
        - 0.04 * eco.suppression_level
        - 0.02 * eco.burnout_index;
    nudge(&mut eco.student_learning_efficiency, d_learning, damping, rng, amp);

    let pressure = 0.2 * (1.0 - eco.infrastructure_health)
        + 0.2 * eco.burnout_index
        + 0.15 * eco.competitor_gap_index
        + 0.2 * (0.5 - eco.student_learning_efficiency).max(0.0)
        + 0.1 * (1.0 - eco.leadership_trust_battery)
        + 0.1 * eco.constraints.demographic_pressure
        + 0.1 * eco.suppression_level
        - 0.1 * eco.ai_accessibility_index
        - 0.1 * eco.ai_service_quality_index;
    let d_exit = pressure.clamp(0.0, 1.0) - eco.student_exit_rate;
    nudge(&mut eco.student_exit_rate, d_exit, damping, rng, amp);

    // Individual exits: the rate is the base hazard; adaptable students hold
    // on longer, protected ones are half-shielded.
    let exit_rate = eco.student_exit_rate;
    for a in eco
        .actors
        .iter_mut()
        .filter(|a| a.is_student() && a.is_active())
    {
        let mut p = exit_rate * (1.0 - 0.5 * a.adaptability);
        if a.protected {
            p *= 0.5;
        }
        if rng.uniform() < p {
            a.has_left = true;
            a.choice = OpportunityChoice::LeaveOutside;
            a.opportunity_cost += 0.5;
        }
    }
}

/// Reads: coefficients and the structural indices named below.
/// Writes: productivity_index, efficiency_index_true,
/// efficiency_index_recognized.
///
/// Recognized efficiency is the distorted view: under suppression it skews
/// toward the systems leadership bought, diverging from the true number.
fn tick_productivity_efficiency(eco: &mut EcosystemState, rng: &mut RandomVariationSource) {
    let damping = eco.trend_damping;
    let amp = eco.randomness;
    let c = eco.coefficients;

    let mut d_prod = 0.0;
    d_prod -= c.external_system_to_productivity * eco.external_system_dependency;
    d_prod -= c.complexity_to_productivity * eco.system_complexity;
    d_prod -= c.workload_to_productivity * eco.workload_index;
    d_prod -= c.infra_bad_to_productivity * (1.0 - eco.infrastructure_health);
    d_prod -= c.fragmentation_to_productivity * eco.process_fragmentation_index;
    d_prod -= c.personalization_to_productivity * eco.task_personalization_index;
    d_prod += c.llm_to_productivity * eco.local_llm_infra_level;
    d_prod += c.ai_access_to_productivity * eco.ai_accessibility_index;
    nudge(&mut eco.productivity_index, d_prod, damping, rng, amp);

    let mut target = 0.1;
    target += c.base_eff_infra_weight * eco.infrastructure_health;
    target += c.base_eff_dxclarity_weight * eco.dx_clarity;
    target += c.base_eff_pm_weight * eco.pm_capability;
    target += c.base_eff_trust_weight * eco.leadership_trust_battery;
    target += c.base_eff_assets_weight * eco.educational_asset_index;
    if eco.suppression_level < 0.4 {
        target += c.suppression_bonus_to_eff;
    }
    target += c.llm_to_efficiency * eco.local_llm_infra_level;
    target += c.db_to_efficiency * eco.database_foundation;
    target += c.portal_to_efficiency * eco.portal_maturity;
    target -= c.personalization_to_efficiency * eco.task_personalization_index;
    let d_true = target.clamp(0.0, 1.0) - eco.efficiency_index_true;
    nudge(&mut eco.efficiency_index_true, d_true, damping, rng, amp);

    let bias = eco.suppression_level
        * (0.25 * eco.external_system_dependency + 0.2 * eco.system_complexity);
    let d_recognized =
        (eco.efficiency_index_true + bias).clamp(0.0, 1.0) - eco.efficiency_index_recognized;
    nudge(&mut eco.efficiency_index_recognized, d_recognized, damping, rng, amp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolsim_data::{Actor, ChangeAttitude, Role};
    use uuid::Uuid;

    fn staff(adaptability: f64, attitude: ChangeAttitude) -> Actor {
        Actor {
            id: Uuid::from_u128(1),
            name: "T".into(),
            role: Role::Teacher,
            os_version: "TestOS".into(),
            adaptability,
            protected: false,
            change_attitude: attitude,
            burned_out: false,
            has_left: false,
            reintegration_outcome: None,
            opportunity_cost: 0.0,
            choice: Default::default(),
            future_hope_probability: 0.0,
            future_hope_label: None,
        }
    }

    #[test]
    fn test_pipeline_order_is_the_declared_contract() {
        let names: Vec<&str> = TICKS.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            [
                "infrastructure",
                "dx_clarity",
                "strategy",
                "portal_db",
                "pm_design",
                "change_dynamics",
                "education_assets",
                "innovation",
                "external_systems",
                "trust_transparency",
                "burnout",
                "students",
                "productivity_efficiency",
            ]
        );
    }

    #[test]
    fn test_step_increments_year_and_stays_in_range() {
        let mut eco = EcosystemState::default();
        let mut rng = RandomVariationSource::seeded(1);
        for year in 1..=50 {
            DynamicsEngine::step(&mut eco, &mut rng);
            assert_eq!(eco.years_simulated, year);
            assert!(eco.in_range(), "out of range after year {year}");
        }
    }

    #[test]
    fn test_step_normalizes_bad_inputs_instead_of_propagating() {
        let mut eco = EcosystemState::default();
        eco.burnout_index = 3.0;
        eco.suppression_level = -1.0;
        let mut rng = RandomVariationSource::seeded(2);
        DynamicsEngine::step(&mut eco, &mut rng);
        assert!(eco.in_range());
    }

    #[test]
    fn test_high_adapter_burns_out_and_leaves() {
        let mut eco = EcosystemState::default();
        eco.randomness = 0.0;
        eco.burnout_index = 0.9;
        eco.actors.push(staff(0.9, ChangeAttitude::Support));
        let mut rng = RandomVariationSource::seeded(3);
        tick_burnout(&mut eco, &mut rng);
        let a = &eco.actors[0];
        assert!(a.burned_out);
        assert!(a.has_left);
        assert_eq!(a.choice, OpportunityChoice::LeaveOutside);
    }

    #[test]
    fn test_low_adapter_stays_then_opportunity_cost_forces_exit() {
        let mut eco = EcosystemState::default();
        eco.randomness = 0.0;
        eco.burnout_index = 0.95;
        eco.suppression_level = 1.0;
        eco.actors.push(staff(0.4, ChangeAttitude::Neutral));
        let mut rng = RandomVariationSource::seeded(4);
        tick_burnout(&mut eco, &mut rng);
        assert!(eco.actors[0].burned_out);
        assert!(!eco.actors[0].has_left);
        assert_eq!(eco.actors[0].choice, OpportunityChoice::StayInside);
        for _ in 0..8 {
            eco.burnout_index = 0.95;
            tick_burnout(&mut eco, &mut rng);
        }
        assert!(eco.actors[0].has_left, "accumulated cost should force the exit");
    }

    #[test]
    fn test_suppressed_seeds_are_counted_and_erode_students() {
        let mut eco = EcosystemState::default();
        eco.randomness = 0.0;
        eco.suppression_level = 0.9;
        eco.actors.push(staff(0.9, ChangeAttitude::Support));
        let mut student = staff(0.5, ChangeAttitude::Neutral);
        student.role = Role::Student;
        let before = student.adaptability;
        eco.actors.push(student);
        let mut rng = RandomVariationSource::seeded(5);
        tick_change_dynamics(&mut eco, &mut rng);
        assert_eq!(eco.change_seeds_planted, 1);
        assert_eq!(eco.change_seeds_suppressed, 1);
        assert!(eco.systemic_opportunity_cost > 0.0);
        assert!(eco.actors[1].adaptability < before);
    }

    #[test]
    fn test_open_organization_lets_seeds_loosen_suppression() {
        let mut eco = EcosystemState::default();
        eco.randomness = 0.0;
        eco.suppression_level = 0.3;
        eco.actors.push(staff(0.9, ChangeAttitude::Support));
        let before = eco.suppression_level;
        let mut rng = RandomVariationSource::seeded(6);
        tick_change_dynamics(&mut eco, &mut rng);
        assert!(eco.suppression_level < before);
        assert_eq!(eco.change_seeds_suppressed, 0);
    }

    #[test]
    fn test_innovation_locked_without_structural_preconditions() {
        let mut eco = EcosystemState::default();
        eco.randomness = 0.0;
        eco.local_llm_infra_level = 0.5;
        let mut rng = RandomVariationSource::seeded(7);
        tick_innovation(&mut eco, &mut rng);
        assert!(eco.local_llm_infra_level < 0.5, "decays when gates are closed");

        let mut ready = EcosystemState::default();
        ready.randomness = 0.0;
        ready.infrastructure_health = 0.8;
        ready.central_repository_level = 0.7;
        ready.dx_clarity = 0.7;
        ready.leadership_trust_battery = 0.6;
        ready.innovation_potential_index = 0.5;
        let before = ready.innovation_potential_index;
        tick_innovation(&mut ready, &mut rng);
        assert!(ready.innovation_potential_index > before);
    }

    #[test]
    fn test_recognized_efficiency_diverges_under_suppression() {
        let mut eco = EcosystemState::default();
        eco.randomness = 0.0;
        eco.trend_damping = 1.0;
        eco.suppression_level = 1.0;
        eco.external_system_dependency = 1.0;
        eco.system_complexity = 1.0;
        let mut rng = RandomVariationSource::seeded(8);
        for _ in 0..30 {
            tick_productivity_efficiency(&mut eco, &mut rng);
        }
        assert!(
            eco.efficiency_index_recognized > eco.efficiency_index_true + 0.1,
            "recognized {} should sit well above true {}",
            eco.efficiency_index_recognized,
            eco.efficiency_index_true
        );
    }
}
