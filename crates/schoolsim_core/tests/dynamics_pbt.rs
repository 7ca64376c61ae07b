use proptest::prelude::*;
use schoolsim_core::{
    Actor, ChangeAttitude, DynamicsEngine, EcosystemState, ExternalWorld, RandomVariationSource,
    Role, SelectionLogic,
};
use uuid::Uuid;

fn make_actor(index: u128, role: Role, adaptability: f64, attitude: ChangeAttitude) -> Actor {
    Actor {
        id: Uuid::from_u128(index),
        name: format!("A{index}"),
        role,
        os_version: "AnyOS".into(),
        adaptability,
        protected: index % 2 == 0,
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

prop_compose! {
    fn arb_start_state()(
        values in prop::collection::vec(0.0f64..=1.0, 29),
        randomness in 0.0f64..=0.2,
        trend_damping in 0.0f64..=1.0,
        budget in 0.0f64..=1.0,
        regulation in 0.0f64..=1.0,
        demographic in 0.0f64..=1.0,
    ) -> EcosystemState {
        let mut eco = EcosystemState::default();
        eco.constraints.budget_pressure = budget;
        eco.constraints.regulation_rigidity = regulation;
        eco.constraints.demographic_pressure = demographic;
        let v = &values;
        eco.infrastructure_health = v[0];
        eco.dx_clarity = v[1];
        eco.burnout_index = v[2];
        eco.student_exit_rate = v[3];
        eco.recruitment_difficulty = v[4];
        eco.portal_maturity = v[5];
        eco.database_foundation = v[6];
        eco.process_fragmentation_index = v[7];
        eco.task_personalization_index = v[8];
        eco.external_system_dependency = v[9];
        eco.learning_cost_index = v[10];
        eco.system_complexity = v[11];
        eco.workload_index = v[12];
        eco.educational_asset_index = v[13];
        eco.central_repository_level = v[14];
        eco.student_learning_efficiency = v[15];
        eco.competitor_gap_index = v[16];
        eco.innovation_potential_index = v[17];
        eco.local_llm_infra_level = v[18];
        eco.ai_service_quality_index = v[19];
        eco.ai_accessibility_index = v[20];
        eco.productivity_index = v[21];
        eco.efficiency_index_true = v[22];
        eco.efficiency_index_recognized = v[23];
        eco.suppression_level = v[24];
        eco.leadership_trust_battery = v[25];
        eco.info_transparency = v[26];
        eco.pm_capability = v[27];
        eco.grand_design_clarity = v[28];
        eco.randomness = randomness;
        eco.trend_damping = trend_damping;
        eco
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Property: every normalized index stays in [0, 1] after step(), for
    // any start state, any seed, any number of steps.
    #[test]
    fn test_indices_stay_in_range(
        mut eco in arb_start_state(),
        seed in any::<u64>(),
        years in 1u32..20,
    ) {
        eco.actors.push(make_actor(1, Role::Teacher, 0.9, ChangeAttitude::Support));
        eco.actors.push(make_actor(2, Role::Admin, 0.3, ChangeAttitude::Resist));
        for i in 0..12u128 {
            let adapt = 0.1 + 0.07 * i as f64;
            eco.actors.push(make_actor(10 + i, Role::Student, adapt, ChangeAttitude::Neutral));
        }

        let mut rng = RandomVariationSource::seeded(seed);
        for year in 1..=years {
            DynamicsEngine::step(&mut eco, &mut rng);
            prop_assert!(eco.in_range(), "index left its range in year {}", year);
            for a in &eco.actors {
                prop_assert!((0.0..=1.0).contains(&a.adaptability));
                prop_assert!(a.opportunity_cost >= 0.0);
                prop_assert!(a.reintegration_outcome.is_none() || a.has_left);
            }
        }
    }

    // Property: required_threshold is non-decreasing in both inputs.
    #[test]
    fn test_required_threshold_monotonic(
        selection in 0.0f64..=1.0,
        ai_speed in 0.0f64..=1.0,
        bump in 0.0f64..=0.5,
    ) {
        let base = ExternalWorld { selection_pressure: selection, ai_shift_speed: ai_speed };
        let harder = ExternalWorld {
            selection_pressure: (selection + bump).min(1.0),
            ai_shift_speed: ai_speed,
        };
        let faster = ExternalWorld {
            selection_pressure: selection,
            ai_shift_speed: (ai_speed + bump).min(1.0),
        };
        prop_assert!(harder.required_threshold() >= base.required_threshold());
        prop_assert!(faster.required_threshold() >= base.required_threshold());
    }

    // Property: future-hope probability is strictly inside (0, 1) for any
    // student and any ecosystem.
    #[test]
    fn test_future_hope_strictly_bounded(
        eco in arb_start_state(),
        adaptability in 0.0f64..=1.0,
        selection in 0.0f64..=1.0,
        ai_speed in 0.0f64..=1.0,
        attitude_pick in 0u8..3,
    ) {
        let attitude = match attitude_pick {
            0 => ChangeAttitude::Support,
            1 => ChangeAttitude::Neutral,
            _ => ChangeAttitude::Resist,
        };
        let world = ExternalWorld { selection_pressure: selection, ai_shift_speed: ai_speed };
        let student = make_actor(1, Role::Student, adaptability, attitude);
        let p = schoolsim_core::student_future_hope_probability(&eco, &world, &student);
        prop_assert!(p > 0.0 && p < 1.0, "probability {} escaped (0, 1)", p);
    }
}
