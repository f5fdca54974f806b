//! Unit tests for agent transitions.

use dp_core::{AgentId, Probabilities, ResourceId, ScriptedRng};
use dp_table::ResourcePool;

use crate::{Agent, AgentEvent, AgentState, Behavior, Rules, Step, step};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rules(random_drop: bool) -> Rules {
    Rules { probabilities: Probabilities::default(), random_drop }
}

fn normal(id: u32) -> Agent {
    Agent::new(AgentId(id), Behavior::Normal)
}

/// Unit draws of 0.99 exceed every default "stay" probability.
fn hungry() -> ScriptedRng {
    ScriptedRng::constant(0.99)
}

/// Unit draws of 0.0 fall below every positive "stay" probability.
fn content() -> ScriptedRng {
    ScriptedRng::constant(0.0)
}

#[cfg(test)]
mod agent_tests {
    use super::*;

    #[test]
    fn new_agent_thinks_with_zero_dwell() {
        let a = normal(0);
        assert_eq!(a.state(), AgentState::Thinking);
        assert_eq!(a.dwell(), 0);
        assert!(!a.is_erratic());
    }

    #[test]
    fn apply_resets_or_increments_dwell() {
        let mut a = normal(0);
        a.apply(&Step::stay(AgentState::Thinking));
        a.apply(&Step::stay(AgentState::Thinking));
        assert_eq!(a.dwell(), 2);
        a.apply(&Step::enter(AgentState::WaitingForFirst));
        assert_eq!(a.state(), AgentState::WaitingForFirst);
        assert_eq!(a.dwell(), 0);
    }

    #[test]
    fn dwell_saturates_instead_of_wrapping() {
        let mut a = normal(0);
        a.place(AgentState::WaitingForFirst, u32::MAX - 1);
        a.apply(&Step::stay(AgentState::WaitingForFirst));
        a.apply(&Step::stay(AgentState::WaitingForFirst));
        assert_eq!(a.dwell(), u32::MAX);
    }

    #[test]
    fn normal_candidates_follow_the_ring() {
        let mut rng = content();
        let a = normal(4);
        assert_eq!(a.first_candidate(5, &mut rng), ResourceId(4));
        assert_eq!(a.second_candidate(5, &mut rng), ResourceId(0));
    }

    #[test]
    fn erratic_candidates_redraw_every_time() {
        let mut rng = content().with_indices([3, 1, 3]);
        let a = Agent::new(AgentId(0), Behavior::Erratic);
        assert_eq!(a.first_candidate(5, &mut rng), ResourceId(3));
        assert_eq!(a.first_candidate(5, &mut rng), ResourceId(1));
        assert_eq!(a.second_candidate(5, &mut rng), ResourceId(3));
    }

    #[test]
    fn state_buckets() {
        use crate::Activity;
        assert_eq!(AgentState::StoppedEating.activity(), Activity::Thinking);
        assert_eq!(AgentState::WaitingForFirst.activity(), Activity::Waiting);
        assert_eq!(AgentState::WaitingForSecond.activity(), Activity::Waiting);
        assert_eq!(AgentState::Eating.activity(), Activity::Eating);
        assert_eq!(AgentState::WaitingForSecond.to_string(), "WAITING_2");
        assert_eq!(AgentState::WaitingForFirst.to_string(), "WAITING_1");
    }
}

#[cfg(test)]
mod thinking_tests {
    use super::*;

    #[test]
    fn keeps_thinking_below_threshold() {
        let mut pool = ResourcePool::new(3);
        let s = step(&normal(0), &rules(false), &mut pool, &mut content());
        assert_eq!(s, Step::stay(AgentState::Thinking));
        assert_eq!(pool.owned_count(), 0);
    }

    #[test]
    fn hungry_with_free_first_goes_to_second() {
        let mut pool = ResourcePool::new(3);
        let s = step(&normal(1), &rules(false), &mut pool, &mut hungry());
        assert_eq!(s, Step::enter(AgentState::WaitingForSecond));
        assert_eq!(pool.owner(ResourceId(1)), Some(AgentId(1)));
    }

    #[test]
    fn hungry_with_taken_first_waits_for_first() {
        let mut pool = ResourcePool::new(3);
        pool.try_acquire(ResourceId(1), AgentId(0));
        let s = step(&normal(1), &rules(false), &mut pool, &mut hungry());
        assert_eq!(s, Step::enter(AgentState::WaitingForFirst));
        assert_eq!(pool.owner(ResourceId(1)), Some(AgentId(0)));
    }

    #[test]
    fn negative_probability_always_transitions() {
        // dwell 50 → 0.8 - 1.0 < 0, so even a 0.0 draw leaves Thinking.
        let mut a = normal(0);
        a.place(AgentState::Thinking, 50);
        let mut pool = ResourcePool::new(2);
        let s = step(&a, &rules(false), &mut pool, &mut content());
        assert_eq!(s.next, AgentState::WaitingForSecond);
    }
}

#[cfg(test)]
mod waiting_tests {
    use super::*;

    #[test]
    fn waiting_for_first_retries_without_drawing() {
        let mut a = normal(0);
        a.place(AgentState::WaitingForFirst, 2);
        let mut pool = ResourcePool::new(2);
        pool.try_acquire(ResourceId(0), AgentId(1));

        let mut rng = content().with_units([0.5]);
        let s = step(&a, &rules(true), &mut pool, &mut rng);
        assert_eq!(s, Step::stay(AgentState::WaitingForFirst));
        assert_eq!(rng.pending_units(), 1);

        pool.release_held_by(AgentId(1));
        let s = step(&a, &rules(true), &mut pool, &mut rng);
        assert_eq!(s, Step::enter(AgentState::WaitingForSecond));
    }

    #[test]
    fn second_acquired_starts_eating() {
        let mut a = normal(0);
        a.place(AgentState::WaitingForSecond, 0);
        let mut pool = ResourcePool::new(2);
        pool.try_acquire(ResourceId(0), AgentId(0));
        let s = step(&a, &rules(false), &mut pool, &mut hungry());
        assert_eq!(s, Step::enter(AgentState::Eating));
        assert_eq!(pool.held_by(AgentId(0)), vec![ResourceId(0), ResourceId(1)]);
    }

    #[test]
    fn blocked_second_without_random_drop_keeps_waiting_and_never_draws() {
        let mut a = normal(0);
        a.place(AgentState::WaitingForSecond, 7);
        let mut pool = ResourcePool::new(2);
        pool.try_acquire(ResourceId(0), AgentId(0));
        pool.try_acquire(ResourceId(1), AgentId(1));

        let mut rng = content().with_units([0.0]);
        let s = step(&a, &rules(false), &mut pool, &mut rng);
        assert_eq!(s, Step::stay(AgentState::WaitingForSecond));
        assert_eq!(rng.pending_units(), 1);
    }

    #[test]
    fn random_drop_releases_held_resource() {
        let mut a = normal(0);
        a.place(AgentState::WaitingForSecond, 3);
        let mut pool = ResourcePool::new(2);
        pool.try_acquire(ResourceId(0), AgentId(0));
        pool.try_acquire(ResourceId(1), AgentId(1));

        // drop(3) = 0.05; a 0.01 draw drops.
        let mut rng = content().with_units([0.01]);
        let s = step(&a, &rules(true), &mut pool, &mut rng);
        assert_eq!(s.next, AgentState::Thinking);
        assert!(s.reset_dwell);
        assert_eq!(s.event, Some(AgentEvent::RandomDrop { resource: Some(ResourceId(0)) }));
        assert_eq!(pool.owner(ResourceId(0)), None);
        assert_eq!(pool.owner(ResourceId(1)), Some(AgentId(1)));
    }

    #[test]
    fn random_drop_miss_keeps_waiting() {
        let mut a = normal(0);
        a.place(AgentState::WaitingForSecond, 0);
        let mut pool = ResourcePool::new(2);
        pool.try_acquire(ResourceId(0), AgentId(0));
        pool.try_acquire(ResourceId(1), AgentId(1));
        let s = step(&a, &rules(true), &mut pool, &mut hungry());
        assert_eq!(s, Step::stay(AgentState::WaitingForSecond));
        assert_eq!(pool.owner(ResourceId(0)), Some(AgentId(0)));
    }

    #[test]
    fn erratic_agent_blocks_on_itself() {
        let mut a = Agent::new(AgentId(0), Behavior::Erratic);
        a.place(AgentState::WaitingForSecond, 0);
        let mut pool = ResourcePool::new(3);
        pool.try_acquire(ResourceId(2), AgentId(0));
        let mut rng = content().with_indices([2]);
        let s = step(&a, &rules(false), &mut pool, &mut rng);
        assert_eq!(s, Step::stay(AgentState::WaitingForSecond));
    }
}

#[cfg(test)]
mod eating_tests {
    use super::*;

    #[test]
    fn keeps_eating_below_threshold() {
        let mut a = normal(0);
        a.place(AgentState::Eating, 1);
        let mut pool = ResourcePool::new(2);
        pool.try_acquire(ResourceId(0), AgentId(0));
        pool.try_acquire(ResourceId(1), AgentId(0));
        let s = step(&a, &rules(false), &mut pool, &mut content());
        assert_eq!(s, Step::stay(AgentState::Eating));
        assert_eq!(pool.owned_count(), 2);
    }

    #[test]
    fn releases_across_two_ticks() {
        let mut a = normal(0);
        a.place(AgentState::Eating, 0);
        let mut pool = ResourcePool::new(2);
        pool.try_acquire(ResourceId(0), AgentId(0));
        pool.try_acquire(ResourceId(1), AgentId(0));

        let s = step(&a, &rules(false), &mut pool, &mut hungry());
        assert_eq!(s, Step::enter(AgentState::StoppedEating));
        assert_eq!(pool.owned_count(), 1);
        a.apply(&s);

        let s = step(&a, &rules(false), &mut pool, &mut hungry());
        assert_eq!(s, Step::enter(AgentState::Thinking));
        assert_eq!(pool.owned_count(), 0);
    }

    #[test]
    fn stopped_eating_with_nothing_held_is_harmless() {
        let mut a = normal(0);
        a.place(AgentState::StoppedEating, 0);
        let mut pool = ResourcePool::new(2);
        let s = step(&a, &rules(false), &mut pool, &mut hungry());
        assert_eq!(s, Step::enter(AgentState::Thinking));
    }
}
