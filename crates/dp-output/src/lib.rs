//! `dp-output` — per-tick reporters for the rust_dp simulator.
//!
//! Two backends implement [`OutputWriter`]:
//!
//! | Backend         | Files created                                                         |
//! |-----------------|-----------------------------------------------------------------------|
//! | `TextLogWriter` | one line-oriented log (any `io::Write`), e.g. `output.txt`            |
//! | `CsvWriter`     | `tick_summaries.csv`, `agent_states.csv`, `resource_states.csv`, `events.csv` |
//!
//! Both are driven by [`SimOutputObserver`], which implements
//! `dp_sim::SimObserver` and applies the run's `ReportFlags`.  The end-of-run
//! totals go to a separate sink through [`write_summary`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use dp_output::{SimOutputObserver, TextLogWriter, write_summary};
//!
//! let writer = TextLogWriter::create(Path::new("output.txt"))?;
//! let mut obs = SimOutputObserver::new(writer, config.report);
//! sim.run(&mut obs)?;
//! write_summary(&mut std::io::stdout(), sim.clock.elapsed(), &sim.stats)?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod summary;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentStateRow, EventRow, ResourceRow, TickSummaryRow};
pub use summary::write_summary;
pub use text::TextLogWriter;
pub use writer::{MultiWriter, OutputWriter};
