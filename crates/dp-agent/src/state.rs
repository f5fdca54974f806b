//! Agent life-cycle states.

use std::fmt;

/// The five states an agent cycles through.
///
/// ```text
/// Thinking ─▶ WaitingForFirst ─▶ WaitingForSecond ─▶ Eating ─▶ StoppedEating ─▶ Thinking
/// ```
///
/// `Thinking` skips straight to `WaitingForSecond` when the first acquire
/// succeeds; `WaitingForSecond` falls back to `Thinking` on a random drop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum AgentState {
    #[default]
    Thinking,
    WaitingForFirst,
    WaitingForSecond,
    Eating,
    /// Holds one resource after releasing the other; releases it next tick.
    StoppedEating,
}

impl AgentState {
    /// Upper-case name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            AgentState::Thinking         => "THINKING",
            AgentState::WaitingForFirst  => "WAITING_1",
            AgentState::WaitingForSecond => "WAITING_2",
            AgentState::Eating           => "EATING",
            AgentState::StoppedEating    => "STOPPED_EATING",
        }
    }

    /// The time-accounting bucket a tick spent in this state falls into.
    ///
    /// `StoppedEating` counts as thinking: the agent is already full.
    pub fn activity(self) -> Activity {
        match self {
            AgentState::Thinking | AgentState::StoppedEating => Activity::Thinking,
            AgentState::WaitingForFirst | AgentState::WaitingForSecond => Activity::Waiting,
            AgentState::Eating => Activity::Eating,
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse bucket for aggregate time statistics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Activity {
    Thinking,
    Waiting,
    Eating,
}
