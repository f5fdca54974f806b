//! Aggregate time-in-state accounting.

use dp_agent::Activity;

/// Cumulative agent-ticks per activity bucket, plus recovery counters.
///
/// Every agent contributes exactly one agent-tick per simulated tick, bucketed
/// by the state it was in when its turn came up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeStats {
    pub thinking:   u64,
    pub waiting:    u64,
    pub eating:     u64,
    /// Random drops across all agents.
    pub drops:      u64,
    /// Delayed recoveries fired.
    pub recoveries: u64,
}

impl TimeStats {
    #[inline]
    pub fn record(&mut self, activity: Activity) {
        match activity {
            Activity::Thinking => self.thinking += 1,
            Activity::Waiting  => self.waiting += 1,
            Activity::Eating   => self.eating += 1,
        }
    }

    /// Total agent-ticks recorded (agents × ticks).
    #[inline]
    pub fn agent_ticks(&self) -> u64 {
        self.thinking + self.waiting + self.eating
    }

    /// `count` as a percentage of all agent-ticks, rounded to two decimals.
    /// Zero before anything has been recorded.
    pub fn percent(&self, count: u64) -> f64 {
        let total = self.agent_ticks();
        if total == 0 {
            return 0.0;
        }
        (count as f64 / total as f64 * 10_000.0).round() / 100.0
    }

    pub fn thinking_percent(&self) -> f64 {
        self.percent(self.thinking)
    }

    pub fn waiting_percent(&self) -> f64 {
        self.percent(self.waiting)
    }

    pub fn eating_percent(&self) -> f64 {
        self.percent(self.eating)
    }
}
