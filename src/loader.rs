//! Resource loading capability
//!
//! The registry loads templates by namespace and key when it has to create a
//! pool on its own. Where templates come from is up to the implementor;
//! [`TemplateCatalog`] keeps them in memory.

use std::collections::HashMap;

use crate::{
    error::{PoolError, Result},
    host::{pool_key, Identifiable},
};

/// Source of templates grouped by namespace
pub trait ResourceLoader {
    /// Template type produced by the loader
    type Template;

    /// Load every template under a namespace
    fn load_all(&self, namespace: &str) -> Result<Vec<Self::Template>>;

    /// Load the template registered under `key`
    fn load(&self, namespace: &str, key: &str) -> Result<Self::Template>;
}

/// In-memory loader keyed by namespace and derived pool key
#[derive(Debug, Clone)]
pub struct TemplateCatalog<T> {
    namespaces: HashMap<String, Vec<T>>,
}

impl<T> Default for TemplateCatalog<T> {
    fn default() -> Self {
        Self {
            namespaces: HashMap::new(),
        }
    }
}

impl<T: Identifiable + Clone> TemplateCatalog<T> {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template under a namespace, replacing one with the same key
    pub fn insert(&mut self, namespace: impl Into<String>, template: T) {
        let templates = self.namespaces.entry(namespace.into()).or_default();
        let key = pool_key(&template);

        match templates.iter().position(|existing| pool_key(existing) == key) {
            Some(index) => templates[index] = template,
            None => templates.push(template),
        }
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, namespace: impl Into<String>, template: T) -> Self {
        self.insert(namespace, template);
        self
    }

    /// Number of templates under a namespace
    pub fn len(&self, namespace: &str) -> usize {
        self.namespaces.get(namespace).map_or(0, Vec::len)
    }

    /// Whether a namespace has no templates
    pub fn is_empty(&self, namespace: &str) -> bool {
        self.len(namespace) == 0
    }
}

impl<T: Identifiable + Clone> ResourceLoader for TemplateCatalog<T> {
    type Template = T;

    fn load_all(&self, namespace: &str) -> Result<Vec<T>> {
        Ok(self.namespaces.get(namespace).cloned().unwrap_or_default())
    }

    fn load(&self, namespace: &str, key: &str) -> Result<T> {
        self.namespaces
            .get(namespace)
            .and_then(|templates| templates.iter().find(|t| pool_key(*t) == key))
            .cloned()
            .ok_or_else(|| PoolError::resource_not_found(namespace, key))
    }
}
