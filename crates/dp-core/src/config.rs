//! Run configuration.
//!
//! Every parameter is fixed when the simulation is built; nothing here is
//! mutated while ticks run.  Defaults reproduce the classic five-seat table
//! with one erratic diner at seat 2 and delayed recovery after 16 ticks.
//!
//! With the `serde` feature the structs deserialize from partial documents:
//! any missing field takes its default.

use crate::{AgentId, DpError, DpResult};

// ── Probabilities ─────────────────────────────────────────────────────────────

/// Transition-probability parameters.
///
/// "Stay" probabilities are linear in the dwell counter and are deliberately
/// not clamped: a negative value always transitions, a value above 1 always
/// stays.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Probabilities {
    /// Chance a thinking agent keeps thinking at dwell 0.
    pub base_think: f64,
    /// Chance an eating agent keeps eating at dwell 0.
    pub base_eat: f64,
    /// Subtracted from the think/eat probabilities per tick of dwell.
    pub decay_rate: f64,
    /// Chance a waiting agent drops its held resource at dwell 0
    /// (random-drop policy only).
    pub drop_base: f64,
    /// Added to the drop probability per tick of dwell.
    pub drop_increment: f64,
}

impl Default for Probabilities {
    fn default() -> Self {
        Self {
            base_think:     0.8,
            base_eat:       0.75,
            decay_rate:     0.02,
            drop_base:      0.02,
            drop_increment: 0.01,
        }
    }
}

impl Probabilities {
    /// Probability of remaining in `Thinking` after `dwell` ticks.
    #[inline]
    pub fn think(&self, dwell: u32) -> f64 {
        self.base_think - self.decay_rate * f64::from(dwell)
    }

    /// Probability of remaining in `Eating` after `dwell` ticks.
    #[inline]
    pub fn eat(&self, dwell: u32) -> f64 {
        self.base_eat - self.decay_rate * f64::from(dwell)
    }

    /// Probability of dropping the held resource after `dwell` ticks waiting.
    #[inline]
    pub fn drop(&self, dwell: u32) -> f64 {
        self.drop_base + self.drop_increment * f64::from(dwell)
    }

    fn validate(&self) -> DpResult<()> {
        let fields = [
            ("base_think", self.base_think),
            ("base_eat", self.base_eat),
            ("decay_rate", self.decay_rate),
            ("drop_base", self.drop_base),
            ("drop_increment", self.drop_increment),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(DpError::Config(format!("{name} must be finite, got {value}")));
            }
        }
        Ok(())
    }
}

// ── ReportFlags ───────────────────────────────────────────────────────────────

/// Which optional blocks the per-tick reporter emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportFlags {
    /// Cumulative thinking/waiting/eating totals.
    pub time_stats:      bool,
    /// One line per agent: state and dwell.
    pub agent_states:    bool,
    /// One line per resource: owner or empty.
    pub resource_states: bool,
}

// ── RecoveryPolicy ────────────────────────────────────────────────────────────

/// The single deadlock-handling policy active for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryPolicy {
    /// Waiting agents probabilistically drop their held resource.
    RandomDrop,
    /// Force-release everything once every agent has waited `delay` ticks
    /// for its second resource.
    Delayed { delay: u32 },
}

impl RecoveryPolicy {
    /// Resolve a pair of selector flags into a policy.
    ///
    /// Exactly one of `random_drop` and `delayed` must be set.
    pub fn from_selection(random_drop: bool, delayed: bool, delay: u32) -> DpResult<Self> {
        match (random_drop, delayed) {
            (true, false) => Ok(RecoveryPolicy::RandomDrop),
            (false, true) => Ok(RecoveryPolicy::Delayed { delay }),
            (true, true) => Err(DpError::Config(
                "random-drop and delayed recovery are mutually exclusive".into(),
            )),
            (false, false) => Err(DpError::Config(
                "one recovery policy (random-drop or delayed) must be selected".into(),
            )),
        }
    }

    #[inline]
    pub fn is_random_drop(self) -> bool {
        matches!(self, RecoveryPolicy::RandomDrop)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built from defaults plus CLI overrides, or loaded from a JSON
/// file by the application crate, then passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Number of agents, and therefore of resources (one per seat).
    pub agent_count: usize,

    /// Seat of the erratic agent, if any.
    pub erratic_agent: Option<AgentId>,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    pub probabilities: Probabilities,

    /// Select the random-drop policy.
    pub random_drop: bool,

    /// Select the delayed-recovery policy.
    pub delayed_recovery: bool,

    /// Ticks every agent must have waited for its second resource before
    /// delayed recovery fires.
    pub recovery_delay: u32,

    pub report: ReportFlags,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:      1_000,
            agent_count:      5,
            erratic_agent:    Some(AgentId(2)),
            seed:             0,
            probabilities:    Probabilities::default(),
            random_drop:      false,
            delayed_recovery: true,
            recovery_delay:   16,
            report:           ReportFlags::default(),
        }
    }
}

impl SimConfig {
    /// Resolve the two selector flags into the run's [`RecoveryPolicy`].
    pub fn recovery_policy(&self) -> DpResult<RecoveryPolicy> {
        RecoveryPolicy::from_selection(self.random_drop, self.delayed_recovery, self.recovery_delay)
    }

    /// Select the random-drop policy (and deselect delayed recovery).
    pub fn with_random_drop(mut self) -> Self {
        self.random_drop = true;
        self.delayed_recovery = false;
        self
    }

    /// Select delayed recovery with the given threshold.
    pub fn with_delayed_recovery(mut self, delay: u32) -> Self {
        self.random_drop = false;
        self.delayed_recovery = true;
        self.recovery_delay = delay;
        self
    }

    /// Check every invariant that must hold before the first tick.
    pub fn validate(&self) -> DpResult<RecoveryPolicy> {
        if self.agent_count == 0 {
            return Err(DpError::Config("agent_count must be at least 1".into()));
        }
        if u32::try_from(self.agent_count).is_err() {
            return Err(DpError::Config(format!(
                "agent_count {} exceeds the id space",
                self.agent_count
            )));
        }
        if let Some(erratic) = self.erratic_agent {
            if erratic.index() >= self.agent_count {
                return Err(DpError::Config(format!(
                    "erratic agent {} is outside the table of {} seats",
                    erratic.0, self.agent_count
                )));
            }
        }
        self.probabilities.validate()?;
        self.recovery_policy()
    }
}
