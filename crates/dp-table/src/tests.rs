//! Unit tests for resources and the pool.

#[cfg(test)]
mod resource_tests {
    use dp_core::AgentId;

    use crate::Resource;

    #[test]
    fn acquire_free_resource() {
        let mut r = Resource::new();
        assert!(r.is_free());
        assert!(r.try_acquire(AgentId(3)));
        assert_eq!(r.owner(), Some(AgentId(3)));
    }

    #[test]
    fn acquire_owned_resource_fails_without_effect() {
        let mut r = Resource::new();
        assert!(r.try_acquire(AgentId(0)));
        assert!(!r.try_acquire(AgentId(1)));
        assert_eq!(r.owner(), Some(AgentId(0)));
    }

    #[test]
    fn owner_cannot_reacquire() {
        let mut r = Resource::new();
        assert!(r.try_acquire(AgentId(0)));
        assert!(!r.try_acquire(AgentId(0)));
    }

    #[test]
    fn release_is_idempotent() {
        let mut r = Resource::new();
        r.release();
        assert!(r.is_free());
        r.try_acquire(AgentId(2));
        r.release();
        r.release();
        assert!(r.is_free());
    }
}

#[cfg(test)]
mod pool_tests {
    use dp_core::{AgentId, ResourceId};

    use crate::ResourcePool;

    #[test]
    fn new_pool_is_free() {
        let pool = ResourcePool::new(5);
        assert_eq!(pool.len(), 5);
        assert_eq!(pool.owned_count(), 0);
        assert!(pool.iter().all(|(_, owner)| owner.is_none()));
    }

    #[test]
    fn release_held_by_picks_lowest_index() {
        let mut pool = ResourcePool::new(4);
        assert!(pool.try_acquire(ResourceId(3), AgentId(1)));
        assert!(pool.try_acquire(ResourceId(1), AgentId(1)));
        assert_eq!(pool.held_by(AgentId(1)), vec![ResourceId(1), ResourceId(3)]);

        assert_eq!(pool.release_held_by(AgentId(1)), Some(ResourceId(1)));
        assert_eq!(pool.release_held_by(AgentId(1)), Some(ResourceId(3)));
        assert_eq!(pool.owned_count(), 0);
    }

    #[test]
    fn release_for_non_holder_is_noop() {
        let mut pool = ResourcePool::new(3);
        pool.try_acquire(ResourceId(0), AgentId(0));
        assert_eq!(pool.release_held_by(AgentId(2)), None);
        assert_eq!(pool.owner(ResourceId(0)), Some(AgentId(0)));
    }

    #[test]
    fn release_all_frees_everything() {
        let mut pool = ResourcePool::new(3);
        for i in 0..3 {
            pool.try_acquire(ResourceId(i), AgentId(i));
        }
        assert_eq!(pool.owned_count(), 3);
        pool.release_all();
        assert_eq!(pool.owned_count(), 0);
        pool.release_all();
        assert_eq!(pool.owned_count(), 0);
    }
}
