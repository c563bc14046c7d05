//! Named adapter set
//!
//! The typed replacement for resolving adapter modules by import path:
//! every available adapter implementation is registered under the
//! module name configuration refers to, before the registry is built.

use crate::contract::SourceAdapter;
use crate::error::RegistryError;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// All adapter implementations available to registry construction,
/// keyed by the module name used in `"module.function"` references.
#[derive(Default)]
pub struct AdapterSet {
    adapters: FxHashMap<String, Arc<dyn SourceAdapter>>,
}

impl AdapterSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter under `name`.
    ///
    /// Two adapters under the same name is a wiring mistake, fatal at
    /// startup like every other registry configuration error.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        adapter: Arc<dyn SourceAdapter>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.adapters.contains_key(&name) {
            return Err(RegistryError::DuplicateAdapter(name));
        }
        self.adapters.insert(name, adapter);
        Ok(())
    }

    /// Look up an adapter by module name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn SourceAdapter>> {
        self.adapters.get(name)
    }

    /// Number of registered adapters.
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Whether no adapter is registered.
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl std::fmt::Debug for AdapterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.adapters.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("AdapterSet").field("adapters", &names).finish()
    }
}
