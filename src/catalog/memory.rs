// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{Catalog, CatalogBaseTable, CatalogDatabase, CatalogError};

/// An in-process catalog backed by hash maps.
///
/// The default product of [`MemoryCatalogFactory`](super::MemoryCatalogFactory)
/// and the fixture catalog for tests.
pub struct MemoryCatalog {
    inner: Mutex<Inner>,
}

struct Inner {
    databases: HashMap<String, CatalogDatabase>,
    /// Keyed by `(database name, object name)`.
    tables: HashMap<(String, String), CatalogBaseTable>,
}

impl MemoryCatalog {
    /// Create a catalog containing one empty default database.
    pub fn new(default_database: impl Into<String>) -> Self {
        let mut databases = HashMap::new();
        databases.insert(default_database.into(), CatalogDatabase::default());
        MemoryCatalog {
            inner: Mutex::new(Inner {
                databases,
                tables: HashMap::new(),
            }),
        }
    }

    pub fn create_database(
        &self,
        name: impl Into<String>,
        database: CatalogDatabase,
    ) -> Result<(), CatalogError> {
        let mut inner = self.inner.lock().unwrap();
        let name = name.into();
        if inner.databases.contains_key(&name) {
            return Err(CatalogError::Duplicated("database", name));
        }
        inner.databases.insert(name, database);
        Ok(())
    }

    pub fn create_table(
        &self,
        database: impl Into<String>,
        name: impl Into<String>,
        table: CatalogBaseTable,
    ) -> Result<(), CatalogError> {
        let mut inner = self.inner.lock().unwrap();
        let database = database.into();
        if !inner.databases.contains_key(&database) {
            return Err(CatalogError::NotFound("database", database));
        }
        let key = (database, name.into());
        if inner.tables.contains_key(&key) {
            return Err(CatalogError::Duplicated("table", key.1));
        }
        inner.tables.insert(key, table);
        Ok(())
    }
}

impl Catalog for MemoryCatalog {
    fn database(&self, name: &str) -> Result<CatalogDatabase, CatalogError> {
        let inner = self.inner.lock().unwrap();
        inner
            .databases
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound("database", name.into()))
    }

    fn table(&self, database: &str, name: &str) -> Result<CatalogBaseTable, CatalogError> {
        let inner = self.inner.lock().unwrap();
        inner
            .tables
            .get(&(database.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| CatalogError::NotFound("table", format!("{database}.{name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogTable, Schema};

    #[test]
    fn database_and_table_lookup() {
        let catalog = MemoryCatalog::new("db0");
        assert!(catalog.database("db0").is_ok());
        assert_eq!(
            catalog.database("nope"),
            Err(CatalogError::NotFound("database", "nope".into()))
        );

        let table = CatalogBaseTable::Table(CatalogTable::new(
            Schema::new(vec![]),
            vec![],
            HashMap::new(),
            None,
        ));
        catalog.create_table("db0", "t", table).unwrap();
        assert!(catalog.table("db0", "t").is_ok());
        assert!(catalog.table("db0", "missing").is_err());
        assert!(catalog.create_table("missing", "t2", CatalogBaseTable::Table(
            CatalogTable::new(Schema::new(vec![]), vec![], HashMap::new(), None)
        )).is_err());
    }
}
