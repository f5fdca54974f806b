//! `dp-agent` — the agents at the table and how each one moves per tick.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`state`]      | `AgentState` (five life-cycle states), `Activity`         |
//! | [`agent`]      | `Agent`, `Behavior` (normal / erratic candidate choice)   |
//! | [`transition`] | `Rules`, `Step`, `AgentEvent`, one function per state     |
//!
//! # Design notes
//!
//! A transition never mutates the agent.  [`transition::step`] inspects the
//! agent, acquires or releases resources in the pool, and returns a [`Step`]
//! naming the next state, whether the dwell counter resets, and any event to
//! report.  The caller then applies it with [`Agent::apply`].  Keeping the
//! write in one place is what guarantees the dwell invariant: reset to 0 on
//! every state change, +1 on every tick spent in the same state.

pub mod agent;
pub mod state;
pub mod transition;

#[cfg(test)]
mod tests;

pub use agent::{Agent, Behavior};
pub use state::{Activity, AgentState};
pub use transition::{AgentEvent, Rules, Step, step};
