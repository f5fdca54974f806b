//! `dp-table` — the shared resources on the table.
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`resource`] | `Resource`: one exclusively-ownable slot               |
//! | [`pool`]     | `ResourcePool`: N resources in a ring, scan-release    |
//!
//! Ownership lives on the resource only.  Agents never cache what they hold;
//! "what does agent A hold?" is answered by scanning the pool.

pub mod pool;
pub mod resource;

#[cfg(test)]
mod tests;

pub use pool::ResourcePool;
pub use resource::Resource;
