//! Per-state transition functions.
//!
//! Each function looks at one agent, touches the resource pool as the state
//! dictates, and returns the [`Step`] to apply.  Randomness only enters
//! through the injected [`RandomSource`]:
//!
//! | State              | Draws                                               |
//! |--------------------|-----------------------------------------------------|
//! | `Thinking`         | one unit; erratic agents also one index on hunger   |
//! | `WaitingForFirst`  | erratic agents one index                            |
//! | `WaitingForSecond` | erratic agents one index; one unit on failure, only under random drop |
//! | `Eating`           | one unit                                            |
//! | `StoppedEating`    | none                                                |

use dp_core::{Probabilities, RandomSource, ResourceId};
use dp_table::ResourcePool;

use crate::{Agent, AgentState};

/// Fixed per-run parameters the transitions need.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rules {
    pub probabilities: Probabilities,
    /// Whether waiting agents may drop their held resource.
    pub random_drop:   bool,
}

/// Something worth reporting that happened during a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentEvent {
    /// The agent gave up waiting and released what it held (if anything).
    RandomDrop { resource: Option<ResourceId> },
}

/// The outcome of one agent's transition for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub next:        AgentState,
    /// `true` on a state change: dwell goes back to 0.  `false`: dwell += 1.
    pub reset_dwell: bool,
    pub event:       Option<AgentEvent>,
}

impl Step {
    /// Remain in `state` for another tick.
    #[inline]
    pub fn stay(state: AgentState) -> Self {
        Self { next: state, reset_dwell: false, event: None }
    }

    /// Move to `state` with a fresh dwell counter.
    #[inline]
    pub fn enter(state: AgentState) -> Self {
        Self { next: state, reset_dwell: true, event: None }
    }

    fn with_event(mut self, event: AgentEvent) -> Self {
        self.event = Some(event);
        self
    }
}

/// Compute `agent`'s transition for this tick.
pub fn step<R: RandomSource + ?Sized>(
    agent: &Agent,
    rules: &Rules,
    pool:  &mut ResourcePool,
    rng:   &mut R,
) -> Step {
    match agent.state() {
        AgentState::Thinking         => thinking(agent, rules, pool, rng),
        AgentState::WaitingForFirst  => waiting_for_first(agent, pool, rng),
        AgentState::WaitingForSecond => waiting_for_second(agent, rules, pool, rng),
        AgentState::Eating           => eating(agent, rules, pool, rng),
        AgentState::StoppedEating    => stopped_eating(agent, pool),
    }
}

fn thinking<R: RandomSource + ?Sized>(
    agent: &Agent,
    rules: &Rules,
    pool:  &mut ResourcePool,
    rng:   &mut R,
) -> Step {
    if rng.next_unit() < rules.probabilities.think(agent.dwell()) {
        return Step::stay(AgentState::Thinking);
    }
    let first = agent.first_candidate(pool.len(), rng);
    if pool.try_acquire(first, agent.id) {
        Step::enter(AgentState::WaitingForSecond)
    } else {
        Step::enter(AgentState::WaitingForFirst)
    }
}

fn waiting_for_first<R: RandomSource + ?Sized>(
    agent: &Agent,
    pool:  &mut ResourcePool,
    rng:   &mut R,
) -> Step {
    let first = agent.first_candidate(pool.len(), rng);
    if pool.try_acquire(first, agent.id) {
        Step::enter(AgentState::WaitingForSecond)
    } else {
        Step::stay(AgentState::WaitingForFirst)
    }
}

fn waiting_for_second<R: RandomSource + ?Sized>(
    agent: &Agent,
    rules: &Rules,
    pool:  &mut ResourcePool,
    rng:   &mut R,
) -> Step {
    let second = agent.second_candidate(pool.len(), rng);
    if pool.try_acquire(second, agent.id) {
        return Step::enter(AgentState::Eating);
    }
    // No draw at all unless the policy is on.
    if rules.random_drop && rng.next_unit() < rules.probabilities.drop(agent.dwell()) {
        let resource = pool.release_held_by(agent.id);
        return Step::enter(AgentState::Thinking).with_event(AgentEvent::RandomDrop { resource });
    }
    Step::stay(AgentState::WaitingForSecond)
}

fn eating<R: RandomSource + ?Sized>(
    agent: &Agent,
    rules: &Rules,
    pool:  &mut ResourcePool,
    rng:   &mut R,
) -> Step {
    if rng.next_unit() < rules.probabilities.eat(agent.dwell()) {
        return Step::stay(AgentState::Eating);
    }
    pool.release_held_by(agent.id);
    Step::enter(AgentState::StoppedEating)
}

fn stopped_eating(agent: &Agent, pool: &mut ResourcePool) -> Step {
    pool.release_held_by(agent.id);
    Step::enter(AgentState::Thinking)
}
