//! Selection logic for the external world.
//!
//! The data type lives in `schoolsim_data`; the behavior is attached here
//! through the [`SelectionLogic`] trait, keeping the survival rules next to
//! the rest of the simulation logic.

use crate::error::{Result, SimError};
use crate::rng::RandomVariationSource;
use schoolsim_data::{Actor, ChangeAttitude, ExternalWorld, ReintegrationOutcome};

/// Extra handicap applied to burned-out leavers before the outside check.
const BURNOUT_REINTEGRATION_PENALTY: f64 = 0.2;
/// Small random wiggle on reintegration, to avoid fatalism.
const REINTEGRATION_WIGGLE: f64 = 0.1;
/// Modest effect of change attitude on effective adaptability.
const ATTITUDE_SHIFT: f64 = 0.05;
/// Long shelter dulls the edge: protected actors test slightly lower outside.
const SHELTER_DISCOUNT: f64 = 0.05;

pub trait SelectionLogic {
    /// Minimum effective adaptability needed to survive outside. Monotonic
    /// non-decreasing in both selection pressure and AI shift speed; may
    /// exceed 1.0 when both run hot.
    fn required_threshold(&self) -> f64;

    /// An actor's adaptability as the outside world would measure it.
    /// `os_version` is a label, not a capability; it plays no part here.
    fn effective_adaptability(&self, actor: &Actor) -> f64;

    /// Whether the actor can likely survive in the external world, ignoring
    /// burnout. Pure; mutates nothing.
    fn evaluate_actor(&self, actor: &Actor) -> bool;

    /// Resolve whether a departed actor reboots outside or becomes a
    /// casualty. One-shot with caching: an already-resolved actor returns
    /// the stored outcome without a new draw. Calling this for an actor who
    /// never left is a precondition violation.
    fn reintegration_outcome(
        &self,
        actor: &mut Actor,
        rng: &mut RandomVariationSource,
    ) -> Result<ReintegrationOutcome>;
}

impl SelectionLogic for ExternalWorld {
    fn required_threshold(&self) -> f64 {
        self.selection_pressure + 0.1 * self.ai_shift_speed
    }

    fn effective_adaptability(&self, actor: &Actor) -> f64 {
        let mut base = actor.adaptability;
        match actor.change_attitude {
            ChangeAttitude::Support => base += ATTITUDE_SHIFT,
            ChangeAttitude::Resist => base -= ATTITUDE_SHIFT,
            ChangeAttitude::Neutral => {}
        }
        if actor.protected {
            base -= SHELTER_DISCOUNT;
        }
        base
    }

    fn evaluate_actor(&self, actor: &Actor) -> bool {
        self.effective_adaptability(actor) >= self.required_threshold()
    }

    fn reintegration_outcome(
        &self,
        actor: &mut Actor,
        rng: &mut RandomVariationSource,
    ) -> Result<ReintegrationOutcome> {
        if !actor.has_left {
            return Err(SimError::NotDeparted {
                name: actor.name.clone(),
            });
        }
        if let Some(outcome) = actor.reintegration_outcome {
            return Ok(outcome);
        }

        let mut score = self.effective_adaptability(actor);
        if actor.burned_out {
            score -= BURNOUT_REINTEGRATION_PENALTY;
        }
        score += rng.noise(REINTEGRATION_WIGGLE);

        let outcome = if score >= self.required_threshold() {
            ReintegrationOutcome::Rebooted
        } else {
            ReintegrationOutcome::Casualty
        };
        actor.reintegration_outcome = Some(outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolsim_data::Role;
    use uuid::Uuid;

    fn actor(adaptability: f64) -> Actor {
        Actor {
            id: Uuid::from_u128(9),
            name: "A".into(),
            role: Role::Teacher,
            os_version: "AnyOS".into(),
            adaptability,
            protected: false,
            change_attitude: ChangeAttitude::Neutral,
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
    fn test_threshold_monotonic_in_both_inputs() {
        let base = ExternalWorld {
            selection_pressure: 0.5,
            ai_shift_speed: 0.5,
        };
        let harder = ExternalWorld {
            selection_pressure: 0.6,
            ai_shift_speed: 0.5,
        };
        let faster = ExternalWorld {
            selection_pressure: 0.5,
            ai_shift_speed: 0.9,
        };
        assert!(harder.required_threshold() >= base.required_threshold());
        assert!(faster.required_threshold() >= base.required_threshold());
    }

    #[test]
    fn test_os_version_has_no_effect() {
        let world = ExternalWorld::default();
        let mut a = actor(0.7);
        let before = world.effective_adaptability(&a);
        a.os_version = "LegacyOS-1985".into();
        assert_eq!(world.effective_adaptability(&a), before);
    }

    #[test]
    fn test_evaluate_is_pure_threshold_comparison() {
        let world = ExternalWorld {
            selection_pressure: 0.5,
            ai_shift_speed: 0.0,
        };
        assert!(world.evaluate_actor(&actor(0.6)));
        assert!(!world.evaluate_actor(&actor(0.4)));
    }

    #[test]
    fn test_reintegration_requires_departure() {
        let world = ExternalWorld::default();
        let mut a = actor(0.9);
        let mut rng = RandomVariationSource::seeded(1);
        let err = world.reintegration_outcome(&mut a, &mut rng);
        assert!(matches!(err, Err(SimError::NotDeparted { .. })));
        assert!(a.reintegration_outcome.is_none());
    }

    #[test]
    fn test_reintegration_is_cached_after_first_resolution() {
        let world = ExternalWorld {
            selection_pressure: 0.2,
            ai_shift_speed: 0.1,
        };
        let mut a = actor(0.9);
        a.has_left = true;
        let mut rng = RandomVariationSource::seeded(2);
        let first = world.reintegration_outcome(&mut a, &mut rng).unwrap();
        for _ in 0..10 {
            let again = world.reintegration_outcome(&mut a, &mut rng).unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_outcomes_follow_effective_adaptability() {
        // Margins wider than the wiggle, so outcomes are forced regardless
        // of the draw.
        let world = ExternalWorld {
            selection_pressure: 0.15,
            ai_shift_speed: 0.0,
        };
        let mut rng = RandomVariationSource::seeded(3);
        let mut strong = actor(0.9);
        strong.has_left = true;
        assert_eq!(
            world.reintegration_outcome(&mut strong, &mut rng).unwrap(),
            ReintegrationOutcome::Rebooted
        );
        let mut burned = actor(0.2);
        burned.has_left = true;
        burned.burned_out = true;
        assert_eq!(
            world.reintegration_outcome(&mut burned, &mut rng).unwrap(),
            ReintegrationOutcome::Casualty
        );
    }
}
