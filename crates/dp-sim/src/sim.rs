//! The `Sim` struct and its tick loop.

use dp_agent::{Agent, AgentEvent, AgentState, Rules, step};
use dp_core::{AgentId, RandomSource, RecoveryPolicy, ResourceId, SimClock, SimConfig, Tick};
use dp_table::ResourcePool;
use tracing::{debug, info, trace};

use crate::{SimError, SimObserver, SimResult, TickSnapshot, TimeStats};

/// What happened during one tick, beyond the state changes visible in the
/// agents themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub tick:      Tick,
    /// Random drops, in processing order.
    pub drops:     Vec<(AgentId, Option<ResourceId>)>,
    /// Whether delayed recovery fired at the end of the tick.
    pub recovered: bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<R>` owns the table (agents and resource pool) and the injected
/// randomness, and is the only thing that mutates either.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: RandomSource> {
    /// Run configuration, validated at build time.
    pub config: SimConfig,

    /// The one deadlock policy active for this run.
    pub policy: RecoveryPolicy,

    /// Counts ticks processed; the first tick is `Tick(1)`.
    pub clock: SimClock,

    /// All agents, indexed by `AgentId`.
    pub agents: Vec<Agent>,

    /// The shared resources; the only state agents contend for.
    pub pool: ResourcePool,

    /// Cumulative time-in-state totals.
    pub stats: TimeStats,

    pub(crate) rules: Rules,

    /// Turn order, reshuffled in place every tick.
    pub(crate) order: Vec<AgentId>,

    pub(crate) rng: R,
}

impl<R: RandomSource> Sim<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.total_ticks`.
    ///
    /// Calls observer hooks for every tick, then `on_sim_end`.  An observer
    /// error stops the run at once.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            agents = self.agents.len(),
            ticks = self.config.total_ticks,
            policy = ?self.policy,
            "simulation starting"
        );
        while self.clock.current_tick.0 < self.config.total_ticks {
            self.step_observed(observer)?;
        }
        observer
            .on_sim_end(self.clock.current_tick, &self.stats)
            .map_err(SimError::Observer)?;
        info!(
            thinking = self.stats.thinking,
            waiting = self.stats.waiting,
            eating = self.stats.eating,
            recoveries = self.stats.recoveries,
            drops = self.stats.drops,
            "simulation finished"
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `total_ticks`
    /// and does not call `on_sim_end`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_observed(observer)?;
        }
        Ok(())
    }

    /// Process one tick with no observer and return what happened.
    pub fn step(&mut self) -> TickOutcome {
        let now = self.clock.advance();
        self.process_tick(now)
    }

    /// Resources currently held by `agent`, found by scanning the pool.
    pub fn held_by(&self, agent: AgentId) -> Vec<ResourceId> {
        self.pool.held_by(agent)
    }

    /// Borrow the end-of-tick view observers receive.
    pub fn snapshot(&self) -> TickSnapshot<'_> {
        TickSnapshot {
            tick:   self.clock.current_tick,
            agents: &self.agents,
            pool:   &self.pool,
            stats:  &self.stats,
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.advance();
        observer.on_tick_start(now).map_err(SimError::Observer)?;

        let outcome = self.process_tick(now);

        for &(agent, resource) in &outcome.drops {
            observer.on_drop(now, agent, resource).map_err(SimError::Observer)?;
        }
        if outcome.recovered {
            if let RecoveryPolicy::Delayed { delay } = self.policy {
                observer.on_recovery(now, delay).map_err(SimError::Observer)?;
            }
        }
        observer.on_tick_end(&self.snapshot()).map_err(SimError::Observer)?;
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> TickOutcome {
        let mut outcome = TickOutcome { tick: now, ..TickOutcome::default() };

        // ── Phase 1: fresh turn order ─────────────────────────────────────
        self.rng.shuffle(&mut self.order);

        // ── Phase 2: one transition per agent, strictly sequential ────────
        //
        // A resource taken by an earlier agent in `order` is unavailable to
        // every later agent this tick.
        for turn in 0..self.order.len() {
            let id = self.order[turn];
            let agent = &self.agents[id.index()];
            self.stats.record(agent.state().activity());

            let next = step(agent, &self.rules, &mut self.pool, &mut self.rng);
            if let Some(AgentEvent::RandomDrop { resource }) = next.event {
                debug!(tick = now.0, agent = id.0, ?resource, "random drop");
                self.stats.drops += 1;
                outcome.drops.push((id, resource));
            }
            self.agents[id.index()].apply(&next);
        }

        // ── Phase 3: global deadlock check (delayed policy only) ──────────
        if let RecoveryPolicy::Delayed { delay } = self.policy {
            if self.is_deadlocked(delay) {
                self.recover();
                debug!(tick = now.0, delay, "delayed recovery");
                outcome.recovered = true;
            }
        }

        trace!(tick = now.0, owned = self.pool.owned_count(), "tick processed");
        outcome
    }

    /// Every agent is waiting for its second resource and has been for at
    /// least `delay` ticks.
    ///
    /// Agents starved in `WaitingForFirst` never satisfy this: only the
    /// circular-wait deadlock is detected.
    fn is_deadlocked(&self, delay: u32) -> bool {
        self.agents
            .iter()
            .all(|a| a.state() == AgentState::WaitingForSecond && a.dwell() >= delay)
    }

    fn recover(&mut self) {
        self.pool.release_all();
        for agent in &mut self.agents {
            agent.reset();
        }
        self.stats.recoveries += 1;
    }
}
