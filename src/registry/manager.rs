//! Keyed registry of pools over a resource namespace

use std::{
    collections::{hash_map::Entry, HashMap},
    rc::Rc,
};

use log::{debug, info};

use crate::{
    error::{FreeError, FreeResult, PoolError, Result},
    host::{pool_key, ObjectHost},
    loader::ResourceLoader,
    pools::{Pool, PoolConfig, PoolStats},
};

use super::{config::RegistryConfig, stats::RegistryStats};

/// Registry of pools keyed by string
///
/// Owns every pool it creates. Templates for pools the registry has to
/// create by key alone come from the loader, under the configured namespace.
#[derive(Debug)]
pub struct PoolRegistry<H, L>
where
    H: ObjectHost,
    L: ResourceLoader<Template = H::Template>,
{
    /// Map of key to pool
    pools: HashMap<String, Pool<H>>,
    /// Namespace and on-demand pool settings
    config: RegistryConfig,
    /// Host shared by every pool
    host: Rc<H>,
    /// Template source
    loader: L,
    /// Registry counters
    stats: RegistryStats,
}

impl<H, L> PoolRegistry<H, L>
where
    H: ObjectHost,
    L: ResourceLoader<Template = H::Template>,
{
    /// Create a new registry over a namespace with default settings
    pub fn new(host: Rc<H>, loader: L, namespace: impl Into<String>) -> Self {
        Self {
            pools: HashMap::new(),
            config: RegistryConfig::new(namespace),
            host,
            loader,
            stats: RegistryStats::new(),
        }
    }

    /// Create a new registry from a validated configuration
    pub fn with_config(host: Rc<H>, loader: L, config: RegistryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            pools: HashMap::new(),
            config,
            host,
            loader,
            stats: RegistryStats::new(),
        })
    }

    /// Create a pool for every template in the namespace
    ///
    /// Keys already registered are left as they are. Returns the number of
    /// pools created.
    pub fn preload(&mut self, initial_count: usize, track_active: bool) -> Result<usize> {
        let templates = self.loader.load_all(&self.config.namespace)?;
        let total = templates.len();
        let mut created = 0;

        for template in templates {
            let key = pool_key(&template);
            if self.insert_pool(key, template, initial_count, track_active) {
                created += 1;
            }
        }

        self.stats.preloaded += created;
        info!(
            "Preloaded {} pools from namespace '{}' ({} templates found)",
            created, self.config.namespace, total
        );
        Ok(created)
    }

    /// Register a pool for a template under `key`
    ///
    /// Idempotent: if the key is taken, the existing pool is returned as is
    /// and `count` and `track_active` are ignored.
    pub fn add_pool(
        &mut self,
        template: H::Template,
        key: impl Into<String>,
        count: usize,
        track_active: bool,
    ) -> &mut Pool<H> {
        let key = key.into();
        match self.pools.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let pool = Pool::new(
                    entry.key().clone(),
                    Rc::clone(&self.host),
                    template,
                    count,
                    track_active,
                );
                self.stats.pools_created += 1;
                debug!("Registered pool '{}' with {} instances", entry.key(), count);
                entry.insert(pool)
            }
        }
    }

    /// Register a pool for a template from a pool configuration
    pub fn add_pool_with_config(
        &mut self,
        template: H::Template,
        config: &PoolConfig,
    ) -> Result<&mut Pool<H>> {
        config.validate()?;
        Ok(self.add_pool(
            template,
            config.key.clone(),
            config.effective_initial_count(),
            config.track_active,
        ))
    }

    /// Register a pool for `key`, loading its template from the namespace
    ///
    /// The loader is not consulted when the key is already registered.
    pub fn add_pool_by_key(
        &mut self,
        key: &str,
        count: usize,
        track_active: bool,
    ) -> Result<&mut Pool<H>> {
        if !self.pools.contains_key(key) {
            let template = self.loader.load(&self.config.namespace, key)?;
            self.insert_pool(key.to_string(), template, count, track_active);
        }

        self.pools
            .get_mut(key)
            .ok_or_else(|| PoolError::pool_not_found(key))
    }

    /// Look up a pool without creating one
    pub fn get_pool(&self, key: &str) -> Option<&Pool<H>> {
        self.pools.get(key)
    }

    /// Look up a pool mutably without creating one
    pub fn get_pool_mut(&mut self, key: &str) -> Option<&mut Pool<H>> {
        self.pools.get_mut(key)
    }

    /// Obtain an instance from the pool for `key`
    ///
    /// A missing pool is created on demand from the loader, with the
    /// configured on-demand count and tracking.
    pub fn obtain(&mut self, key: &str) -> Result<H::Instance> {
        let created = !self.pools.contains_key(key);
        let count = self.config.lazy_initial_count;
        let track_active = self.config.lazy_track_active;

        let instance = self.add_pool_by_key(key, count, track_active)?.obtain();

        if created {
            self.stats.lazy_creations += 1;
            debug!("Pool '{}' created on demand", key);
        }
        Ok(instance)
    }

    /// Obtain an instance of `source`, keyed by its id or name
    ///
    /// A missing pool is created from `source` itself, so the loader is never
    /// consulted.
    pub fn obtain_from(&mut self, source: &H::Template) -> H::Instance {
        let key = pool_key(source);
        let created = !self.pools.contains_key(&key);
        let count = self.config.lazy_initial_count;
        let track_active = self.config.lazy_track_active;

        let instance = self.add_pool(source.clone(), key, count, track_active).obtain();

        if created {
            self.stats.lazy_creations += 1;
        }
        instance
    }

    /// Return an instance to the pool registered under `key`
    ///
    /// On rejection the instance is handed back in the error.
    pub fn free(&mut self, instance: H::Instance, key: &str) -> FreeResult<H::Instance> {
        match self.pools.get_mut(key) {
            Some(pool) => pool.free(instance),
            None => Err(FreeError::new(PoolError::pool_not_found(key), instance)),
        }
    }

    /// Return an instance to the pool its id or name points at
    pub fn free_instance(&mut self, instance: H::Instance) -> FreeResult<H::Instance> {
        let key = pool_key(&instance);
        self.free(instance, &key)
    }

    /// Free every tracked instance in every pool
    ///
    /// Returns the total number of instances freed.
    pub fn free_all(&mut self) -> usize {
        self.pools.values_mut().map(Pool::free_all).sum()
    }

    /// Release every pool; pools stay registered but cold
    pub fn release_all(&mut self, destroy_active: bool) {
        for pool in self.pools.values_mut() {
            pool.release(destroy_active);
        }
        info!(
            "Released {} pools in namespace '{}'",
            self.pools.len(),
            self.config.namespace
        );
    }

    /// Unregister a pool and destroy its pooled instances
    ///
    /// Refused while the pool tracks checked-out instances.
    pub fn remove_pool(&mut self, key: &str) -> Result<()> {
        let active = self
            .pools
            .get(key)
            .ok_or_else(|| PoolError::pool_not_found(key))?
            .active_count();
        if active > 0 {
            return Err(PoolError::pool_busy(key, active));
        }

        if let Some(mut pool) = self.pools.remove(key) {
            pool.release(false);
            self.stats.pools_removed += 1;
        }
        Ok(())
    }

    /// Whether a pool is registered under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.pools.contains_key(key)
    }

    /// Number of registered pools
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Whether no pool is registered
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.pools.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Iterate over registered pools in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Pool<H>)> {
        self.pools.iter().map(|(key, pool)| (key.as_str(), pool))
    }

    /// Resource namespace
    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    /// Registry configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Host shared by every pool
    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    /// Template source
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Registry counters
    pub fn stats(&self) -> &RegistryStats {
        &self.stats
    }

    /// Statistics for every pool, sorted by key
    pub fn all_pool_stats(&self) -> Vec<PoolStats> {
        let mut stats: Vec<PoolStats> = self.pools.values().map(Pool::stats).collect();
        stats.sort_by(|a, b| a.key.cmp(&b.key));
        stats
    }

    fn insert_pool(
        &mut self,
        key: String,
        template: H::Template,
        count: usize,
        track_active: bool,
    ) -> bool {
        if self.pools.contains_key(&key) {
            return false;
        }
        self.add_pool(template, key, count, track_active);
        true
    }
}
