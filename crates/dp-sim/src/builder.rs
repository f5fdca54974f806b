//! Fluent builder for constructing a [`Sim`].

use dp_agent::{Agent, Behavior, Rules};
use dp_core::{AgentId, RandomSource, SimClock, SimConfig, SimRng};
use dp_table::ResourcePool;

use crate::{Sim, SimError, SimResult, TimeStats};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick count, table size, probabilities, recovery policy, …
/// - `R: RandomSource` — the injected randomness (see [`SimBuilder::seeded`]
///   for the usual seeded RNG)
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                               |
/// |-----------------|-------------------------------------------------------|
/// | `.behaviors(v)` | `Normal` everywhere except `config.erratic_agent`     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, ScriptedRng::constant(0.99))
///     .behaviors(vec![Behavior::Normal; 3])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: RandomSource> {
    config:    SimConfig,
    rng:       R,
    behaviors: Option<Vec<Behavior>>,
}

impl SimBuilder<SimRng> {
    /// Builder using a [`SimRng`] seeded from `config.seed`.
    pub fn seeded(config: SimConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self::new(config, rng)
    }
}

impl<R: RandomSource> SimBuilder<R> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, rng: R) -> Self {
        Self { config, rng, behaviors: None }
    }

    /// Supply per-agent behaviors (must be length `agent_count`).
    ///
    /// Overrides `config.erratic_agent`.
    pub fn behaviors(mut self, behaviors: Vec<Behavior>) -> Self {
        self.behaviors = Some(behaviors);
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sim`] with every
    /// agent thinking and every resource free.
    pub fn build(self) -> SimResult<Sim<R>> {
        let policy = self.config.validate()?;
        let agent_count = self.config.agent_count;

        let behaviors = match self.behaviors {
            Some(b) => {
                if b.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      b.len(),
                        what:     "behaviors",
                    });
                }
                b
            }
            None => (0..agent_count)
                .map(|i| {
                    if self.config.erratic_agent.map(AgentId::index) == Some(i) {
                        Behavior::Erratic
                    } else {
                        Behavior::Normal
                    }
                })
                .collect(),
        };

        // `validate` guarantees agent_count fits in u32.
        let agents: Vec<Agent> = behaviors
            .into_iter()
            .enumerate()
            .map(|(i, behavior)| Agent::new(AgentId(i as u32), behavior))
            .collect();
        let order = agents.iter().map(|a| a.id).collect();

        let rules = Rules {
            probabilities: self.config.probabilities,
            random_drop:   policy.is_random_drop(),
        };

        Ok(Sim {
            clock:  SimClock::new(),
            pool:   ResourcePool::new(agent_count),
            stats:  TimeStats::default(),
            config: self.config,
            policy,
            agents,
            rules,
            order,
            rng:    self.rng,
        })
    }
}
