//! Plain data row types written by output backends.

use dp_sim::TimeStats;

/// Cumulative time-in-state totals as of the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    pub thinking:         u64,
    pub waiting:          u64,
    pub eating:           u64,
    pub thinking_percent: f64,
    pub waiting_percent:  f64,
    pub eating_percent:   f64,
    pub drops:            u64,
    pub recoveries:       u64,
}

impl TickSummaryRow {
    pub fn from_stats(tick: u64, stats: &TimeStats) -> Self {
        Self {
            tick,
            thinking:         stats.thinking,
            waiting:          stats.waiting,
            eating:           stats.eating,
            thinking_percent: stats.thinking_percent(),
            waiting_percent:  stats.waiting_percent(),
            eating_percent:   stats.eating_percent(),
            drops:            stats.drops,
            recoveries:       stats.recoveries,
        }
    }
}

/// One agent's state at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentStateRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub state:    &'static str,
    pub dwell:    u32,
}

/// One resource's owner at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRow {
    pub tick:        u64,
    pub resource_id: u32,
    /// `None` if the resource is free.
    pub owner:       Option<u32>,
}

/// A notable mid-tick event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventRow {
    /// `agent` gave up waiting and released `resource` (`None` if it held
    /// nothing).
    RandomDrop { tick: u64, agent: u32, resource: Option<u32> },
    /// Every resource was force-released after `delay` ticks of deadlock.
    Recovery { tick: u64, delay: u32 },
}
