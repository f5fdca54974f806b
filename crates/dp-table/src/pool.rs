//! The ring of resources shared by the agents.

use dp_core::{AgentId, ResourceId};

use crate::Resource;

/// `N` resources indexed `0..N`, laid out in a ring alongside `N` agents:
/// agent `i` sits between resources `i` and `(i + 1) % N`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePool {
    resources: Vec<Resource>,
}

impl ResourcePool {
    /// `count` free resources.
    pub fn new(count: usize) -> Self {
        Self { resources: vec![Resource::new(); count] }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Acquire-if-free on resource `id` for `agent`.
    #[inline]
    pub fn try_acquire(&mut self, id: ResourceId, agent: AgentId) -> bool {
        self.resources[id.index()].try_acquire(agent)
    }

    #[inline]
    pub fn owner(&self, id: ResourceId) -> Option<AgentId> {
        self.resources[id.index()].owner()
    }

    /// Release the lowest-indexed resource held by `agent`.
    ///
    /// Returns the released id, or `None` (a no-op) if `agent` holds nothing.
    pub fn release_held_by(&mut self, agent: AgentId) -> Option<ResourceId> {
        let index = self.resources.iter().position(|r| r.owner() == Some(agent))?;
        self.resources[index].release();
        Some(ResourceId(index as u32))
    }

    /// Force every resource free.
    pub fn release_all(&mut self) {
        for r in &mut self.resources {
            r.release();
        }
    }

    /// Resources currently owned by `agent`, in index order.
    pub fn held_by(&self, agent: AgentId) -> Vec<ResourceId> {
        self.iter()
            .filter(|&(_, owner)| owner == Some(agent))
            .map(|(id, _)| id)
            .collect()
    }

    /// `(id, owner)` for every resource, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceId, Option<AgentId>)> + '_ {
        self.resources
            .iter()
            .enumerate()
            .map(|(i, r)| (ResourceId(i as u32), r.owner()))
    }

    /// Number of resources currently owned.
    pub fn owned_count(&self) -> usize {
        self.resources.iter().filter(|r| !r.is_free()).count()
    }
}
