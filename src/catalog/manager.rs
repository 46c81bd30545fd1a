// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{
    CatalogBaseTable, CatalogDatabase, CatalogError, ObjectIdentifier, UnresolvedIdentifier,
};

/// Read access to one catalog.
///
/// Implementations own their synchronization; each call observes a
/// consistent snapshot at call time, with no guarantee across calls.
pub trait Catalog: Send + Sync {
    /// Look up a database. Fails with [`CatalogError::NotFound`] if it
    /// does not exist within this catalog.
    fn database(&self, name: &str) -> Result<CatalogDatabase, CatalogError>;

    /// Look up a table or view within a database.
    fn table(&self, database: &str, name: &str) -> Result<CatalogBaseTable, CatalogError>;
}

/// The result of looking a table up through the manager: the stored
/// descriptor plus whether it is a session-temporary object.
#[derive(Debug, Clone)]
pub struct TableLookup {
    pub base: CatalogBaseTable,
    pub is_temporary: bool,
}

/// Session-scoped catalog state: registered catalogs, the ambient current
/// catalog/database, and temporary tables shadowing the permanent ones.
///
/// The conversion stage only ever reads through this type. Registration
/// methods exist for the session layer that owns the state.
pub struct CatalogManager {
    inner: Mutex<Inner>,
}

struct Inner {
    current_catalog: String,
    current_database: String,
    catalogs: HashMap<String, Arc<dyn Catalog>>,
    temporary_tables: HashMap<ObjectIdentifier, CatalogBaseTable>,
}

impl CatalogManager {
    pub fn new(
        default_catalog_name: impl Into<String>,
        default_database_name: impl Into<String>,
        default_catalog: Arc<dyn Catalog>,
    ) -> Self {
        let current_catalog = default_catalog_name.into();
        let mut catalogs = HashMap::new();
        catalogs.insert(current_catalog.clone(), default_catalog);
        CatalogManager {
            inner: Mutex::new(Inner {
                current_catalog,
                current_database: default_database_name.into(),
                catalogs,
                temporary_tables: HashMap::new(),
            }),
        }
    }

    pub fn current_catalog(&self) -> String {
        self.inner.lock().unwrap().current_catalog.clone()
    }

    pub fn current_database(&self) -> String {
        self.inner.lock().unwrap().current_database.clone()
    }

    pub fn set_current_catalog(&self, name: impl Into<String>) {
        self.inner.lock().unwrap().current_catalog = name.into();
    }

    pub fn set_current_database(&self, name: impl Into<String>) {
        self.inner.lock().unwrap().current_database = name.into();
    }

    pub fn register_catalog(&self, name: impl Into<String>, catalog: Arc<dyn Catalog>) {
        self.inner.lock().unwrap().catalogs.insert(name.into(), catalog);
    }

    pub fn register_temporary_table(&self, id: ObjectIdentifier, table: CatalogBaseTable) {
        self.inner.lock().unwrap().temporary_tables.insert(id, table);
    }

    /// Fill omitted catalog/database parts from the ambient context.
    /// A fully specified name passes through unchanged.
    pub fn qualify(&self, id: &UnresolvedIdentifier) -> ObjectIdentifier {
        let inner = self.inner.lock().unwrap();
        let catalog = id
            .catalog_name()
            .unwrap_or(&inner.current_catalog)
            .to_string();
        let database = id
            .database_name()
            .unwrap_or(&inner.current_database)
            .to_string();
        ObjectIdentifier::new(catalog, database, id.object_name().to_string())
    }

    /// Look up a catalog by name.
    pub fn catalog(&self, name: &str) -> Option<Arc<dyn Catalog>> {
        self.inner.lock().unwrap().catalogs.get(name).cloned()
    }

    /// Look up a table or view, temporary objects shadowing permanent ones.
    pub fn table(&self, id: &ObjectIdentifier) -> Option<TableLookup> {
        let inner = self.inner.lock().unwrap();
        if let Some(base) = inner.temporary_tables.get(id) {
            return Some(TableLookup {
                base: base.clone(),
                is_temporary: true,
            });
        }
        let catalog = inner.catalogs.get(id.catalog_name())?;
        let base = catalog.table(id.database_name(), id.object_name()).ok()?;
        Some(TableLookup {
            base,
            is_temporary: false,
        })
    }
}
