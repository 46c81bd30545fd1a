// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

//! Discovery of catalog implementations from key-value configuration.

use std::collections::HashMap;
use std::sync::Arc;

use super::{Catalog, CatalogError, MemoryCatalog};

/// The option key selecting a catalog implementation.
pub const CATALOG_TYPE_KEY: &str = "type";

/// Instantiates a catalog from its declared options.
///
/// The returned catalog is a value only; registering it into the session
/// is a separate downstream responsibility.
pub trait CatalogFactory: Send + Sync {
    fn create(
        &self,
        name: &str,
        options: &HashMap<String, String>,
    ) -> Result<Arc<dyn Catalog>, CatalogError>;
}

/// A pluggable registry resolving a [`CatalogFactory`] from the `type`
/// entry of an options map.
#[derive(Default)]
pub struct CatalogFactoryRegistry {
    factories: HashMap<String, Arc<dyn CatalogFactory>>,
}

impl CatalogFactoryRegistry {
    /// A registry with the built-in `memory` factory registered.
    pub fn standard() -> Self {
        let mut registry = Self::default();
        registry.register("memory", Arc::new(MemoryCatalogFactory));
        registry
    }

    pub fn register(&mut self, type_name: impl Into<String>, factory: Arc<dyn CatalogFactory>) {
        self.factories.insert(type_name.into(), factory);
    }

    pub fn find(
        &self,
        options: &HashMap<String, String>,
    ) -> Result<Arc<dyn CatalogFactory>, CatalogError> {
        let type_name = options
            .get(CATALOG_TYPE_KEY)
            .ok_or_else(|| CatalogError::NotFound("catalog option", CATALOG_TYPE_KEY.into()))?;
        self.factories
            .get(type_name)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound("catalog factory", type_name.clone()))
    }
}

/// Factory for [`MemoryCatalog`].
pub struct MemoryCatalogFactory;

impl MemoryCatalogFactory {
    /// Option naming the database the new catalog starts with.
    pub const DEFAULT_DATABASE_KEY: &'static str = "default-database";
}

impl CatalogFactory for MemoryCatalogFactory {
    fn create(
        &self,
        _name: &str,
        options: &HashMap<String, String>,
    ) -> Result<Arc<dyn Catalog>, CatalogError> {
        let default_database = options
            .get(Self::DEFAULT_DATABASE_KEY)
            .map(String::as_str)
            .unwrap_or("default");
        Ok(Arc::new(MemoryCatalog::new(default_database)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_type_option() {
        let registry = CatalogFactoryRegistry::standard();
        let options = HashMap::from([("type".to_string(), "memory".to_string())]);
        let factory = registry.find(&options).unwrap();
        let catalog = factory.create("cat", &options).unwrap();
        assert!(catalog.database("default").is_ok());
    }

    #[test]
    fn find_unknown_type_fails() {
        let registry = CatalogFactoryRegistry::standard();
        let options = HashMap::from([("type".to_string(), "hive".to_string())]);
        assert_eq!(
            registry.find(&options).err(),
            Some(CatalogError::NotFound("catalog factory", "hive".into()))
        );
        assert!(registry.find(&HashMap::new()).is_err());
    }
}
