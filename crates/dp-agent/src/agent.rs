//! Per-agent record.

use dp_core::{AgentId, RandomSource, ResourceId};

use crate::{AgentState, Step};

/// How an agent picks the resources it asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Behavior {
    /// First = own seat, second = next seat round the ring.
    #[default]
    Normal,
    /// Both candidates drawn uniformly from the whole pool on every attempt.
    /// The two may coincide, in which case the agent blocks on itself.
    Erratic,
}

/// One agent: fixed identity and behavior, plus the current state and how
/// many consecutive ticks it has spent there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    pub id:       AgentId,
    pub behavior: Behavior,
    state:        AgentState,
    dwell:        u32,
}

impl Agent {
    /// A new agent, thinking, dwell 0.
    pub fn new(id: AgentId, behavior: Behavior) -> Self {
        Self { id, behavior, state: AgentState::Thinking, dwell: 0 }
    }

    #[inline]
    pub fn state(&self) -> AgentState {
        self.state
    }

    #[inline]
    pub fn dwell(&self) -> u32 {
        self.dwell
    }

    #[inline]
    pub fn is_erratic(&self) -> bool {
        self.behavior == Behavior::Erratic
    }

    /// Apply a transition computed by [`step`](crate::step).
    pub fn apply(&mut self, step: &Step) {
        self.state = step.next;
        if step.reset_dwell {
            self.dwell = 0;
        } else {
            self.dwell = self.dwell.saturating_add(1);
        }
    }

    /// Back to `Thinking` with dwell 0.  Used by delayed recovery.
    pub fn reset(&mut self) {
        self.state = AgentState::Thinking;
        self.dwell = 0;
    }

    /// Seat the agent in an arbitrary state, e.g. to set up a scenario.
    ///
    /// The caller is responsible for making the resource pool agree.
    pub fn place(&mut self, state: AgentState, dwell: u32) {
        self.state = state;
        self.dwell = dwell;
    }

    /// The resource this agent asks for first.
    pub fn first_candidate<R: RandomSource + ?Sized>(&self, seats: usize, rng: &mut R) -> ResourceId {
        match self.behavior {
            Behavior::Normal  => ResourceId(self.id.0),
            Behavior::Erratic => ResourceId(rng.next_index(seats) as u32),
        }
    }

    /// The resource this agent asks for second.
    pub fn second_candidate<R: RandomSource + ?Sized>(&self, seats: usize, rng: &mut R) -> ResourceId {
        match self.behavior {
            Behavior::Normal  => ResourceId(((self.id.index() + 1) % seats) as u32),
            Behavior::Erratic => ResourceId(rng.next_index(seats) as u32),
        }
    }
}
