//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use dp_agent::Agent;
use dp_core::{AgentId, ReportFlags, ResourceId, Tick};
use dp_sim::{ObserverResult, SimObserver, TickSnapshot, TimeStats};
use dp_table::ResourcePool;

use crate::row::{AgentStateRow, EventRow, ResourceRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// A [`SimObserver`] that writes every tick to an [`OutputWriter`] backend.
///
/// The tick header, events, and trailing terminator are always written; the
/// summary, agent, and resource blocks only when the matching
/// [`ReportFlags`] field is set.  A writer error is returned to the
/// simulation, which aborts the run.
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    flags:  ReportFlags,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, flags: ReportFlags) -> Self {
        Self { writer, flags }
    }

    /// Unwrap the inner writer (e.g. to inspect output after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

pub(crate) fn agent_rows(tick: u64, agents: &[Agent]) -> Vec<AgentStateRow> {
    agents
        .iter()
        .map(|a| AgentStateRow {
            tick,
            agent_id: a.id.0,
            state:    a.state().name(),
            dwell:    a.dwell(),
        })
        .collect()
}

pub(crate) fn resource_rows(tick: u64, pool: &ResourcePool) -> Vec<ResourceRow> {
    pool.iter()
        .map(|(id, owner)| ResourceRow {
            tick,
            resource_id: id.0,
            owner:       owner.map(|a| a.0),
        })
        .collect()
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_start(&mut self, tick: Tick) -> ObserverResult {
        self.writer.begin_tick(tick.0)?;
        Ok(())
    }

    fn on_drop(&mut self, tick: Tick, agent: AgentId, resource: Option<ResourceId>) -> ObserverResult {
        self.writer.write_event(&EventRow::RandomDrop {
            tick:     tick.0,
            agent:    agent.0,
            resource: resource.map(|r| r.0),
        })?;
        Ok(())
    }

    fn on_recovery(&mut self, tick: Tick, delay: u32) -> ObserverResult {
        self.writer.write_event(&EventRow::Recovery { tick: tick.0, delay })?;
        Ok(())
    }

    fn on_tick_end(&mut self, s: &TickSnapshot<'_>) -> ObserverResult {
        let tick = s.tick.0;
        if self.flags.time_stats {
            self.writer.write_tick_summary(&TickSummaryRow::from_stats(tick, s.stats))?;
        }
        if self.flags.agent_states {
            self.writer.write_agent_states(&agent_rows(tick, s.agents))?;
        }
        if self.flags.resource_states {
            self.writer.write_resource_states(&resource_rows(tick, s.pool))?;
        }
        self.writer.end_tick(tick)?;
        Ok(())
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &TimeStats) -> ObserverResult {
        self.writer.finish()?;
        Ok(())
    }
}
