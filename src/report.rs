//! Text reports over final and historical simulation state.
//!
//! Pure formatting: everything here reads the core's state and writes
//! strings. Nothing in this module feeds back into the simulation.

use schoolsim_core::{
    EcosystemState, ExternalWorld, ReintegrationOutcome, Role, SelectionLogic, Simulation,
};

fn line(label: &str, value: impl std::fmt::Display) -> String {
    format!("{label:<29}: {value}")
}

fn fline(label: &str, value: f64) -> String {
    format!("{label:<29}: {value:.2}")
}

pub fn summary(eco: &EcosystemState) -> String {
    let teachers: Vec<_> = eco.actors.iter().filter(|a| a.role == Role::Teacher).collect();
    let active = teachers.iter().filter(|a| a.is_active()).count();
    let burned = teachers.iter().filter(|a| a.burned_out).count();
    let left = teachers.len() - active;
    let rebooted = teachers
        .iter()
        .filter(|a| a.reintegration_outcome == Some(ReintegrationOutcome::Rebooted))
        .count();
    let casualties = teachers
        .iter()
        .filter(|a| a.reintegration_outcome == Some(ReintegrationOutcome::Casualty))
        .count();

    let mut lines = vec![
        format!(
            "=== {} Ecosystem after {} year(s) ===",
            eco.name, eco.years_simulated
        ),
        fline("Infrastructure health", eco.infrastructure_health),
        fline("DX clarity (roadmap)", eco.dx_clarity),
        fline("Staff burnout index", eco.burnout_index),
        fline("Student exit rate (est.)", eco.student_exit_rate),
        fline("Recruitment difficulty", eco.recruitment_difficulty),
        String::new(),
        fline("Portal maturity (nav DX)", eco.portal_maturity),
        fline("Database foundation", eco.database_foundation),
        fline("Process fragmentation index", eco.process_fragmentation_index),
        fline("Task personalization index", eco.task_personalization_index),
        String::new(),
        fline("External system dependency", eco.external_system_dependency),
        fline("External spend (relative)", eco.external_spend),
        fline("Learning cost index", eco.learning_cost_index),
        fline("System complexity", eco.system_complexity),
        fline("Workload index", eco.workload_index),
        String::new(),
        fline("Educational asset index", eco.educational_asset_index),
        fline("Central repository level", eco.central_repository_level),
        fline("Student learning efficiency", eco.student_learning_efficiency),
        fline("Competitor gap index", eco.competitor_gap_index),
        String::new(),
        fline("Innovation potential index", eco.innovation_potential_index),
        fline("Local LLM infra level", eco.local_llm_infra_level),
        fline("AI service quality index", eco.ai_service_quality_index),
        fline("AI accessibility index", eco.ai_accessibility_index),
        String::new(),
        fline("Productivity index (real)", eco.productivity_index),
        fline("Efficiency (true)", eco.efficiency_index_true),
        fline("Efficiency (recognized KPI)", eco.efficiency_index_recognized),
        String::new(),
        fline("PM capability", eco.pm_capability),
        fline("Grand design clarity", eco.grand_design_clarity),
        fline("Leadership trust battery", eco.leadership_trust_battery),
        fline("Info transparency", eco.info_transparency),
        String::new(),
        fline("Suppression level (0-1)", eco.suppression_level),
        line("Change seeds planted", eco.change_seeds_planted),
        line("Change seeds suppressed", eco.change_seeds_suppressed),
        fline("Systemic opportunity cost", eco.systemic_opportunity_cost),
        String::new(),
        line("Teachers total", teachers.len()),
        line("Teachers active", active),
        line("Teachers burned out", burned),
        line("Teachers who left", left),
        line("Teachers rebooted outside", rebooted),
        line("Teacher casualties", casualties),
    ];
    lines.push(String::new());
    lines.push("Sample actors snapshot:".into());
    for a in eco.actors.iter().take(5) {
        let status = if a.reintegration_outcome == Some(ReintegrationOutcome::Casualty) {
            "casualty"
        } else if a.reintegration_outcome == Some(ReintegrationOutcome::Rebooted) {
            "rebooted"
        } else if a.has_left {
            "left"
        } else if a.burned_out {
            "burned_out"
        } else {
            "in_system"
        };
        lines.push(format!(
            "  - <{:?}:{} os={} adapt={:.2} oc={:.2} {}>",
            a.role, a.name, a.os_version, a.adaptability, a.opportunity_cost, status
        ));
    }
    lines.join("\n")
}

pub fn world_comparison(eco: &EcosystemState, world: &ExternalWorld) -> String {
    let mut lines = vec!["=== External World Survival Check (Staff) ===".to_string()];
    for actor in eco.staff() {
        let tag = if world.evaluate_actor(actor) {
            "SURVIVES_OUTSIDE"
        } else {
            "ONLY_SAFE_INSIDE"
        };
        lines.push(format!(
            "{:<20} ({:<30}) -> {tag}",
            actor.name, actor.os_version
        ));
    }
    lines.join("\n")
}

pub fn reintegration_report(eco: &EcosystemState) -> String {
    let mut lines = vec!["=== Reintegration Outcomes (Teachers/Admins) ===".to_string()];
    for actor in eco.staff().filter(|a| a.has_left) {
        let tag = match actor.reintegration_outcome {
            Some(ReintegrationOutcome::Rebooted) => "REBOOTED_OUTSIDE (found new path)",
            Some(ReintegrationOutcome::Casualty) => "CASUALTY_OF_SYSTEM (could not reintegrate)",
            None => "UNRESOLVED",
        };
        lines.push(format!(
            "{:<20} ({:<30}) [choice={:?}, oc={:.2}] -> {tag}",
            actor.name, actor.os_version, actor.choice, actor.opportunity_cost
        ));
    }

    lines.push(String::new());
    lines.push("=== Future Trajectories (Students) ===".to_string());
    let students: Vec<_> = eco.students().collect();
    let mut hopeful = 0usize;
    for actor in &students {
        let is_hope = actor.future_hope_label.unwrap_or(false);
        if is_hope {
            hopeful += 1;
        }
        let tag = if is_hope {
            "FUTURE_HOPE (can likely thrive)"
        } else {
            "AT_RISK (needs better support / ecosystem)"
        };
        lines.push(format!(
            "{:<12} adapt={:.2} p_future={:.2} -> {tag}",
            actor.name, actor.adaptability, actor.future_hope_probability
        ));
    }
    let total = students.len();
    let ratio = if total > 0 {
        hopeful as f64 / total as f64
    } else {
        0.0
    };
    lines.push(String::new());
    lines.push(format!("Future hope count : {hopeful} / {total} students"));
    lines.push(format!(
        "Future hope ratio : {ratio:.3} (~{:.1}%)",
        ratio * 100.0
    ));
    lines.join("\n")
}

pub fn stakeholder_scores(sim: &Simulation) -> String {
    let mut lines = vec!["=== Stakeholder Utility Scores ===".to_string()];
    for utility in schoolsim_core::default_utilities() {
        lines.push(format!(
            "{:<25}: {:.3}",
            utility.name,
            utility.score(&sim.ecosystem)
        ));
    }
    lines.join("\n")
}
