//! `dp-sim` — tick loop orchestrator for the rust_dp simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 1..=config.total_ticks:
//!   ① Shuffle   — fresh uniform permutation of all agents.
//!   ② Agents    — in that order, each agent takes exactly one transition
//!                 against the shared pool (earlier agents win contested
//!                 resources this tick).
//!   ③ Recovery  — delayed policy only: if every agent has waited at least
//!                 `recovery_delay` ticks for its second resource, free the
//!                 whole pool and send everyone back to Thinking.
//!   ④ Report    — observer hooks: tick start, drops, recovery, tick end.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dp_core::SimConfig;
//! use dp_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::seeded(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{:.2}% eating", sim.stats.eating_percent());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, ObserverError, ObserverResult, SimObserver, TickSnapshot};
pub use sim::{Sim, TickOutcome};
pub use stats::TimeStats;
