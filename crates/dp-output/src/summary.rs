//! End-of-run summary, written once to a sink separate from the tick log.

use std::io::Write;

use dp_sim::TimeStats;

use crate::row::TickSummaryRow;
use crate::text::write_totals;

/// Write the final totals:
///
/// ```text
/// SIMULATION TIME: 1000
/// TOTAL TIME SPENT THINKING: 2710 (54.2%)
/// TOTAL TIME SPENT WAITING: 1580 (31.6%)
/// TOTAL TIME SPENT EATING: 710 (14.2%)
/// ```
pub fn write_summary<W: Write>(out: &mut W, ticks: u64, stats: &TimeStats) -> std::io::Result<()> {
    writeln!(out, "SIMULATION TIME: {ticks}")?;
    write_totals(out, &TickSummaryRow::from_stats(ticks, stats))?;
    if stats.recoveries > 0 {
        writeln!(out, "DELAYED RECOVERIES: {}", stats.recoveries)?;
    }
    if stats.drops > 0 {
        writeln!(out, "RANDOM DROPS: {}", stats.drops)?;
    }
    Ok(())
}
