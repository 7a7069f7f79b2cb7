//! Tests for the pool registry

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use poolkeep::{
        host::{pool_key, InMemoryHost, ObjectHost, Prototype},
        loader::{ResourceLoader, TemplateCatalog},
        registry::{PoolRegistry, RegistryConfig},
        PoolConfig, PoolError, Result,
    };

    type Registry<L> = PoolRegistry<InMemoryHost, L>;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn create_catalog() -> TemplateCatalog<Prototype> {
        TemplateCatalog::new()
            .with("prefabs/pooled", Prototype::new("foo"))
            .with("prefabs/pooled", Prototype::new("Rocket (Heavy)").with_id("rocket"))
            .with("prefabs/pooled", Prototype::new("explosion"))
            .with("prefabs/other", Prototype::new("tree"))
    }

    fn create_registry() -> (Rc<InMemoryHost>, Registry<TemplateCatalog<Prototype>>) {
        init_logging();
        let host = Rc::new(InMemoryHost::new());
        let registry = PoolRegistry::new(Rc::clone(&host), create_catalog(), "prefabs/pooled");
        (host, registry)
    }

    /// Loader that has nothing and says so
    #[derive(Debug)]
    struct BrokenLoader;

    impl ResourceLoader for BrokenLoader {
        type Template = Prototype;

        fn load_all(&self, _namespace: &str) -> Result<Vec<Prototype>> {
            Err(PoolError::loader("catalog offline"))
        }

        fn load(&self, _namespace: &str, _key: &str) -> Result<Prototype> {
            Err(PoolError::loader("catalog offline"))
        }
    }

    #[test]
    fn test_obtain_auto_creates_single_instance_pool() {
        let (host, mut registry) = create_registry();
        assert!(registry.is_empty());

        let foo = registry.obtain("foo").unwrap();
        assert_eq!(pool_key(&foo), "foo");
        assert!(foo.is_active());

        let pool = registry.get_pool("foo").unwrap();
        assert_eq!(pool.capacity(), 1);
        assert_eq!(pool.active_count(), 1);
        assert_eq!(host.constructed(), 1);
    }

    #[test]
    fn test_add_pool_twice_returns_same_pool() {
        let (_host, mut registry) = create_registry();

        let first: *const _ = registry.add_pool(Prototype::new("shard"), "shard", 3, true);
        let second: *const _ = registry.add_pool(Prototype::new("shard"), "shard", 12, false);
        assert!(std::ptr::eq(first, second));

        let pool = registry.get_pool("shard").unwrap();
        assert_eq!(pool.available(), 3);
        assert!(pool.is_tracking());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_pool_by_key_reuses_existing_without_loading() {
        init_logging();
        let host = Rc::new(InMemoryHost::new());
        let mut registry = PoolRegistry::new(Rc::clone(&host), BrokenLoader, "prefabs/pooled");
        registry.add_pool(Prototype::new("foo"), "foo", 1, true);

        // Existing key: the loader is never asked.
        assert!(registry.add_pool_by_key("foo", 5, false).is_ok());

        let err = registry.add_pool_by_key("bar", 1, true).unwrap_err();
        assert!(matches!(err, PoolError::Loader { .. }));
        assert!(registry.preload(1, true).is_err());
        assert!(registry.obtain("bar").is_err());
    }

    #[test]
    fn test_preload_uses_identifiable_keys() {
        let (host, mut registry) = create_registry();
        assert_eq!(registry.preload(2, false).unwrap(), 3);

        assert_eq!(
            registry.keys(),
            vec!["explosion".to_string(), "foo".to_string(), "rocket".to_string()]
        );
        assert!(!registry.contains("tree"));
        assert_eq!(host.constructed(), 6);
        assert!(registry.iter().all(|(_, pool)| !pool.is_tracking()));
    }

    #[test]
    fn test_free_routes_by_derived_key() {
        let (_host, mut registry) = create_registry();
        registry.preload(1, true).unwrap();

        let rocket = registry.obtain("rocket").unwrap();
        assert_eq!(pool_key(&rocket), "rocket");
        registry.free_instance(rocket.clone()).unwrap();

        let pool = registry.get_pool("rocket").unwrap();
        assert_eq!(pool.available(), 1);
        assert_eq!(registry.obtain("rocket").unwrap(), rocket);
    }

    #[test]
    fn test_free_with_explicit_key() {
        let (_host, mut registry) = create_registry();
        let foo = registry.obtain("foo").unwrap();

        let err = registry.free(foo.clone(), "explosion").unwrap_err();
        assert!(matches!(err.error, PoolError::PoolNotFound { ref key } if key == "explosion"));
        assert_eq!(err.instance, foo);

        registry.free(foo, "foo").unwrap();
    }

    #[test]
    fn test_free_without_pool_is_precondition_failure() {
        let (host, mut registry) = create_registry();
        let orphan = host.construct(&Prototype::new("orphan"));

        let err = registry.free_instance(orphan.clone()).unwrap_err();
        assert!(err.error().is_usage_error());
        assert_eq!(err.into_instance(), orphan);
        assert!(!orphan.is_destroyed());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_free_all_across_pools() {
        let (_host, mut registry) = create_registry();
        registry.preload(1, true).unwrap();

        let out = vec![
            registry.obtain("foo").unwrap(),
            registry.obtain("foo").unwrap(),
            registry.obtain("rocket").unwrap(),
            registry.obtain("explosion").unwrap(),
        ];

        assert_eq!(registry.free_all(), out.len());
        assert!(registry.iter().all(|(_, pool)| pool.active_count() == 0));
        assert_eq!(registry.get_pool("foo").unwrap().available(), 2);
    }

    #[test]
    fn test_release_all_keeps_pools_registered() {
        let (host, mut registry) = create_registry();
        registry.preload(3, true).unwrap();
        let foo = registry.obtain("foo").unwrap();

        registry.release_all(false);
        assert_eq!(registry.len(), 3);
        assert!(!foo.is_destroyed());
        assert_eq!(host.live(), 1);
        assert!(registry.iter().all(|(_, pool)| pool.capacity() == 1));

        // Pools come back cold.
        let again = registry.obtain("foo").unwrap();
        assert_ne!(again, foo);
    }

    #[test]
    fn test_release_all_destroying_active() {
        let (host, mut registry) = create_registry();
        registry.preload(2, true).unwrap();
        let foo = registry.obtain("foo").unwrap();

        registry.release_all(true);
        assert!(foo.is_destroyed());
        assert_eq!(host.live(), 0);
    }

    #[test]
    fn test_obtain_from_source() {
        let (host, mut registry) = create_registry();
        let source = Prototype::new("Crate #7").with_id("crate");

        let a = registry.obtain_from(&source);
        let b = registry.obtain_from(&source);
        assert_ne!(a, b);
        assert_eq!(registry.get_pool("crate").unwrap().active_count(), 2);
        assert_eq!(host.constructed(), 2);
        assert_eq!(registry.stats().lazy_creations, 1);
    }

    #[test]
    fn test_registry_config_controls_on_demand_pools() {
        init_logging();
        let host = Rc::new(InMemoryHost::new());
        let config = RegistryConfig::new("prefabs/pooled")
            .with_lazy_initial_count(4)
            .with_lazy_track_active(false);
        let mut registry =
            PoolRegistry::with_config(Rc::clone(&host), create_catalog(), config).unwrap();

        registry.obtain("explosion").unwrap();
        let pool = registry.get_pool("explosion").unwrap();
        assert_eq!(pool.available(), 3);
        assert!(!pool.is_tracking());
    }

    #[test]
    fn test_add_pool_with_config_and_stats() {
        let (_host, mut registry) = create_registry();
        let config = PoolConfig::new("spark").with_initial_count(2).with_track_active(true);
        registry
            .add_pool_with_config(Prototype::new("spark"), &config)
            .unwrap();
        registry.obtain("spark").unwrap();
        registry.obtain("foo").unwrap();

        let stats = registry.all_pool_stats();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].key, "foo");
        assert_eq!(stats[1].key, "spark");
        assert_eq!(stats[1].active, 1);
        assert_eq!(stats[1].buffer.available, 1);
        assert_eq!(registry.stats().pools_created, 2);
        assert_eq!(registry.stats().lazy_creations, 1);
    }
}
