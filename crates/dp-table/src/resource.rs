//! A single shared resource (one chopstick).

use dp_core::AgentId;

/// An exclusively-ownable slot.
///
/// At most one owner at a time.  The simulation is single-threaded, so
/// `try_acquire` taking `&mut self` is already an atomic check-and-set; a
/// concurrent port would have to turn this into a compare-and-swap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resource {
    owner: Option<AgentId>,
}

impl Resource {
    /// A free resource.
    pub const fn new() -> Self {
        Self { owner: None }
    }

    /// Take ownership for `agent` iff the resource is free.
    ///
    /// A resource already held (even by `agent` itself) is left untouched and
    /// `false` is returned.
    #[inline]
    pub fn try_acquire(&mut self, agent: AgentId) -> bool {
        if self.owner.is_some() {
            return false;
        }
        self.owner = Some(agent);
        true
    }

    /// Clear the owner.  Releasing a free resource is a no-op.
    #[inline]
    pub fn release(&mut self) {
        self.owner = None;
    }

    #[inline]
    pub fn owner(&self) -> Option<AgentId> {
        self.owner
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }
}
