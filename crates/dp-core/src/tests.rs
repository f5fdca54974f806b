//! Unit tests for dp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ResourceId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(4);
        assert_eq!(id.index(), 4);
        assert_eq!(AgentId::try_from(4usize).unwrap(), id);
        assert_eq!(usize::from(ResourceId(3)), 3);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(ResourceId(0).to_string(), "ResourceId(0)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_display() {
        assert_eq!(Tick(10).to_string(), "T10");
        assert_eq!(Tick::ZERO, Tick::default());
    }

    #[test]
    fn clock_first_processed_tick_is_one() {
        let mut clock = SimClock::new();
        assert_eq!(clock.elapsed(), 0);
        assert_eq!(clock.advance(), Tick(1));
        assert_eq!(clock.advance(), Tick(2));
        assert_eq!(clock.elapsed(), 2);
    }
}

#[cfg(test)]
mod config {
    use crate::{AgentId, DpError, Probabilities, RecoveryPolicy, SimConfig};

    #[test]
    fn defaults_describe_classic_table() {
        let c = SimConfig::default();
        assert_eq!(c.agent_count, 5);
        assert_eq!(c.erratic_agent, Some(AgentId(2)));
        assert_eq!(c.total_ticks, 1_000);
        assert_eq!(c.recovery_policy().unwrap(), RecoveryPolicy::Delayed { delay: 16 });
    }

    #[test]
    fn both_policies_rejected() {
        let mut c = SimConfig::default();
        c.random_drop = true;
        c.delayed_recovery = true;
        assert!(matches!(c.validate(), Err(DpError::Config(_))));
    }

    #[test]
    fn neither_policy_rejected() {
        let mut c = SimConfig::default();
        c.random_drop = false;
        c.delayed_recovery = false;
        assert!(matches!(c.validate(), Err(DpError::Config(_))));
    }

    #[test]
    fn builders_select_exactly_one_policy() {
        let c = SimConfig::default().with_random_drop();
        assert_eq!(c.validate().unwrap(), RecoveryPolicy::RandomDrop);
        let c = c.with_delayed_recovery(3);
        assert_eq!(c.validate().unwrap(), RecoveryPolicy::Delayed { delay: 3 });
    }

    #[test]
    fn empty_table_rejected() {
        let c = SimConfig { agent_count: 0, erratic_agent: None, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn erratic_seat_out_of_range_rejected() {
        let c = SimConfig { agent_count: 2, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn non_finite_probability_rejected() {
        let c = SimConfig {
            probabilities: Probabilities { base_eat: f64::NAN, ..Probabilities::default() },
            ..SimConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn probabilities_decay_linearly_without_clamping() {
        let p = Probabilities::default();
        assert!((p.think(0) - 0.8).abs() < 1e-12);
        assert!((p.think(10) - 0.6).abs() < 1e-12);
        assert!(p.think(100) < 0.0);
        assert!((p.eat(5) - 0.65).abs() < 1e-12);
        assert!((p.drop(3) - 0.05).abs() < 1e-12);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, RandomSource, ScriptedRng, SimRng};

    fn ids(n: u32) -> Vec<AgentId> {
        (0..n).map(AgentId).collect()
    }

    #[test]
    fn sim_rng_is_deterministic() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.next_unit().to_bits(), b.next_unit().to_bits());
            assert_eq!(a.next_index(5), b.next_index(5));
        }
    }

    #[test]
    fn sim_rng_draws_in_range() {
        let mut r = SimRng::new(1);
        for _ in 0..1_000 {
            let u = r.next_unit();
            assert!((0.0..1.0).contains(&u));
            assert!(r.next_index(3) < 3);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut r = SimRng::new(99);
        let mut order = ids(8);
        r.shuffle(&mut order);
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, ids(8));
    }

    #[test]
    fn scripted_replays_then_falls_back() {
        let mut r = ScriptedRng::constant(0.5).with_units([0.1, 0.2]).with_indices([4]);
        assert_eq!(r.next_unit(), 0.1);
        assert_eq!(r.next_unit(), 0.2);
        assert_eq!(r.next_unit(), 0.5);
        assert_eq!(r.next_index(5), 4);
        assert_eq!(r.next_index(5), 0);

        let mut r = ScriptedRng::constant(0.0).with_fallback_index(7);
        assert_eq!(r.next_index(5), 2);
    }

    #[test]
    fn scripted_keeps_order_unless_shuffled() {
        let mut r = ScriptedRng::constant(0.0);
        let mut order = ids(4);
        r.shuffle(&mut order);
        assert_eq!(order, ids(4));

        // Fisher-Yates with every draw 0: i=3↔0, i=2↔0, i=1↔0.
        let mut r = ScriptedRng::constant(0.0).shuffled();
        r.shuffle(&mut order);
        assert_eq!(order, vec![AgentId(1), AgentId(2), AgentId(3), AgentId(0)]);
    }
}
