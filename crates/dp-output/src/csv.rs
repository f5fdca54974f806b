//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `tick_summaries.csv`
//! - `agent_states.csv`
//! - `resource_states.csv`
//! - `events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentStateRow, EventRow, OutputResult, ResourceRow, TickSummaryRow};

/// Writes simulation output to four CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    agents:    Writer<File>,
    resources: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "thinking", "waiting", "eating",
            "thinking_pct", "waiting_pct", "eating_pct", "drops", "recoveries",
        ])?;

        let mut agents = Writer::from_path(dir.join("agent_states.csv"))?;
        agents.write_record(["tick", "agent_id", "state", "dwell"])?;

        let mut resources = Writer::from_path(dir.join("resource_states.csv"))?;
        resources.write_record(["tick", "resource_id", "owner"])?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["tick", "kind", "agent_id", "resource_id", "delay"])?;

        Ok(Self {
            summaries,
            agents,
            resources,
            events,
            finished: false,
        })
    }
}

fn opt(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        let record = match *row {
            EventRow::RandomDrop { tick, agent, resource } => [
                tick.to_string(),
                "random_drop".to_owned(),
                agent.to_string(),
                opt(resource),
                String::new(),
            ],
            EventRow::Recovery { tick, delay } => [
                tick.to_string(),
                "recovery".to_owned(),
                String::new(),
                String::new(),
                delay.to_string(),
            ],
        };
        self.events.write_record(&record)?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.thinking.to_string(),
            row.waiting.to_string(),
            row.eating.to_string(),
            format!("{:.2}", row.thinking_percent),
            format!("{:.2}", row.waiting_percent),
            format!("{:.2}", row.eating_percent),
            row.drops.to_string(),
            row.recoveries.to_string(),
        ])?;
        Ok(())
    }

    fn write_agent_states(&mut self, rows: &[AgentStateRow]) -> OutputResult<()> {
        for row in rows {
            self.agents.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.state.to_owned(),
                row.dwell.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_resource_states(&mut self, rows: &[ResourceRow]) -> OutputResult<()> {
        for row in rows {
            self.resources.write_record(&[
                row.tick.to_string(),
                row.resource_id.to_string(),
                opt(row.owner),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.agents.flush()?;
        self.resources.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
