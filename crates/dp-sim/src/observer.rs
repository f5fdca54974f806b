//! Simulation observer trait: the event interface to external reporters.

use dp_agent::Agent;
use dp_core::{AgentId, ResourceId, Tick};
use dp_table::ResourcePool;

use crate::TimeStats;

/// Error type observers return.  Any error aborts the run.
pub type ObserverError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type ObserverResult = Result<(), ObserverError>;

/// Read-only view of the table at the end of a tick.
#[derive(Clone, Copy, Debug)]
pub struct TickSnapshot<'a> {
    pub tick:   Tick,
    /// All agents, in ascending id order.
    pub agents: &'a [Agent],
    pub pool:   &'a ResourcePool,
    /// Cumulative totals including this tick.
    pub stats:  &'a TimeStats,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run], in this order each
/// tick: `on_tick_start`, zero or more `on_drop`, at most one `on_recovery`,
/// `on_tick_end`.  `on_sim_end` fires once after the last tick.
///
/// All methods default to doing nothing.  Returning an error stops the run
/// immediately; [`Sim::run`][crate::Sim::run] surfaces it as
/// [`SimError::Observer`][crate::SimError::Observer].
///
/// # Example — recovery counter
///
/// ```rust,ignore
/// struct Recoveries(u32);
///
/// impl SimObserver for Recoveries {
///     fn on_recovery(&mut self, _tick: Tick, _delay: u32) -> ObserverResult {
///         self.0 += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent moves.
    fn on_tick_start(&mut self, _tick: Tick) -> ObserverResult {
        Ok(())
    }

    /// An agent gave up waiting for its second resource and released
    /// `resource` (random-drop policy only).
    fn on_drop(&mut self, _tick: Tick, _agent: AgentId, _resource: Option<ResourceId>) -> ObserverResult {
        Ok(())
    }

    /// Delayed recovery freed every resource this tick.
    fn on_recovery(&mut self, _tick: Tick, _delay: u32) -> ObserverResult {
        Ok(())
    }

    /// Called at the end of each tick with the full table state.
    fn on_tick_end(&mut self, _snapshot: &TickSnapshot<'_>) -> ObserverResult {
        Ok(())
    }

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &TimeStats) -> ObserverResult {
        Ok(())
    }
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_tick_start(&mut self, tick: Tick) -> ObserverResult {
        (**self).on_tick_start(tick)
    }

    fn on_drop(&mut self, tick: Tick, agent: AgentId, resource: Option<ResourceId>) -> ObserverResult {
        (**self).on_drop(tick, agent, resource)
    }

    fn on_recovery(&mut self, tick: Tick, delay: u32) -> ObserverResult {
        (**self).on_recovery(tick, delay)
    }

    fn on_tick_end(&mut self, snapshot: &TickSnapshot<'_>) -> ObserverResult {
        (**self).on_tick_end(snapshot)
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &TimeStats) -> ObserverResult {
        (**self).on_sim_end(final_tick, stats)
    }
}
