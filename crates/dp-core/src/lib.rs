//! `dp-core` — foundational types for the `rust_dp` dining-table simulator.
//!
//! This crate is a dependency of every other `dp-*` crate.  It has no `dp-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `ResourceId`                                      |
//! | [`time`]   | `Tick`, `SimClock`                                           |
//! | [`config`] | `SimConfig`, `Probabilities`, `ReportFlags`, `RecoveryPolicy` |
//! | [`rng`]    | `RandomSource` trait, `SimRng`, `ScriptedRng`                |
//! | [`error`]  | `DpError`, `DpResult`                                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and configuration.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Probabilities, RecoveryPolicy, ReportFlags, SimConfig};
pub use error::{DpError, DpResult};
pub use ids::{AgentId, ResourceId};
pub use rng::{RandomSource, ScriptedRng, SimRng};
pub use time::{SimClock, Tick};
