//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentStateRow, EventRow, OutputResult, ResourceRow, TickSummaryRow};

/// Trait implemented by the text log and CSV writers.
///
/// Calls for one tick arrive in report order: `begin_tick`, events,
/// then whichever of the summary / agent / resource blocks are enabled,
/// then `end_tick`.
pub trait OutputWriter {
    /// Start the block for `tick`.
    fn begin_tick(&mut self, _tick: u64) -> OutputResult<()> {
        Ok(())
    }

    /// Write one random-drop or recovery event.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Write the cumulative time-in-state totals.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write one row per agent.
    fn write_agent_states(&mut self, rows: &[AgentStateRow]) -> OutputResult<()>;

    /// Write one row per resource.
    fn write_resource_states(&mut self, rows: &[ResourceRow]) -> OutputResult<()>;

    /// Close the block for `tick`.
    fn end_tick(&mut self, _tick: u64) -> OutputResult<()> {
        Ok(())
    }

    /// Flush all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Fans every call out to several writers, in order.  Stops at the first
/// error.
#[derive(Default)]
pub struct MultiWriter {
    writers: Vec<Box<dyn OutputWriter>>,
}

impl MultiWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<W: OutputWriter + 'static>(&mut self, writer: W) {
        self.writers.push(Box::new(writer));
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl OutputWriter for MultiWriter {
    fn begin_tick(&mut self, tick: u64) -> OutputResult<()> {
        self.writers.iter_mut().try_for_each(|w| w.begin_tick(tick))
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.writers.iter_mut().try_for_each(|w| w.write_event(row))
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.writers.iter_mut().try_for_each(|w| w.write_tick_summary(row))
    }

    fn write_agent_states(&mut self, rows: &[AgentStateRow]) -> OutputResult<()> {
        self.writers.iter_mut().try_for_each(|w| w.write_agent_states(rows))
    }

    fn write_resource_states(&mut self, rows: &[ResourceRow]) -> OutputResult<()> {
        self.writers.iter_mut().try_for_each(|w| w.write_resource_states(rows))
    }

    fn end_tick(&mut self, tick: u64) -> OutputResult<()> {
        self.writers.iter_mut().try_for_each(|w| w.end_tick(tick))
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.writers.iter_mut().try_for_each(|w| w.finish())
    }
}
