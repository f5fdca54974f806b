//! Line-oriented text log backend.
//!
//! One block per tick:
//!
//! ```text
//! ============ CURRENT TIME: 7 ============
//! PHILOSOPHER 3 RANDOMLY DROPPED CHOPSTICK 3
//! TOTAL TIME SPENT THINKING: 21 (60.0%)
//! TOTAL TIME SPENT WAITING: 9 (25.71%)
//! TOTAL TIME SPENT EATING: 5 (14.29%)
//! PHILOSOPHER 0 STATUS: EATING FOR 2 TIME STEPS
//! CHOPSTICK 0 OWNER: 0
//! CHOPSTICK 2 OWNER: EMPTY
//!
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::writer::OutputWriter;
use crate::{AgentStateRow, EventRow, OutputResult, ResourceRow, TickSummaryRow};

/// Writes the per-tick log to any `io::Write` sink.
pub struct TextLogWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl TextLogWriter<BufWriter<File>> {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> TextLogWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner sink (e.g. to inspect a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// The three `TOTAL TIME SPENT …` lines, shared with the end-of-run summary.
///
/// Percentages are already rounded to hundredths; `{:?}` prints them without
/// padding (`60.0`, `25.71`).
pub(crate) fn write_totals<W: Write>(out: &mut W, row: &TickSummaryRow) -> std::io::Result<()> {
    writeln!(out, "TOTAL TIME SPENT THINKING: {} ({:?}%)", row.thinking, row.thinking_percent)?;
    writeln!(out, "TOTAL TIME SPENT WAITING: {} ({:?}%)", row.waiting, row.waiting_percent)?;
    writeln!(out, "TOTAL TIME SPENT EATING: {} ({:?}%)", row.eating, row.eating_percent)
}

impl<W: Write> OutputWriter for TextLogWriter<W> {
    fn begin_tick(&mut self, tick: u64) -> OutputResult<()> {
        writeln!(self.out, "============ CURRENT TIME: {tick} ============")?;
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        match *row {
            EventRow::RandomDrop { agent, resource: Some(r), .. } => {
                writeln!(self.out, "PHILOSOPHER {agent} RANDOMLY DROPPED CHOPSTICK {r}")?
            }
            EventRow::RandomDrop { agent, resource: None, .. } => {
                writeln!(self.out, "PHILOSOPHER {agent} RANDOMLY DROPPED CHOPSTICK NONE")?
            }
            EventRow::Recovery { delay, .. } => {
                writeln!(self.out, "DELAYED RECOVERY OCCURRED, USING WAIT TIME = {delay}")?
            }
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        write_totals(&mut self.out, row)?;
        Ok(())
    }

    fn write_agent_states(&mut self, rows: &[AgentStateRow]) -> OutputResult<()> {
        for row in rows {
            writeln!(
                self.out,
                "PHILOSOPHER {} STATUS: {} FOR {} TIME STEPS",
                row.agent_id, row.state, row.dwell
            )?;
        }
        Ok(())
    }

    fn write_resource_states(&mut self, rows: &[ResourceRow]) -> OutputResult<()> {
        for row in rows {
            match row.owner {
                Some(owner) => writeln!(self.out, "CHOPSTICK {} OWNER: {owner}", row.resource_id)?,
                None => writeln!(self.out, "CHOPSTICK {} OWNER: EMPTY", row.resource_id)?,
            }
        }
        Ok(())
    }

    fn end_tick(&mut self, _tick: u64) -> OutputResult<()> {
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
