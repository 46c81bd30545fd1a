// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

use std::collections::HashMap;

use tracing::debug;

use super::{merge_options, ConvertError, Converter, Operation, Result};
use crate::catalog::CatalogDatabase;
use crate::convert::operation::CreateCatalogOperation;
use crate::stmt::{AlterDatabase, CreateCatalog, CreateDatabase, DropDatabase};

impl Converter<'_> {
    pub(super) fn convert_use_database(&self, database: Vec<String>) -> Result {
        let (catalog, database) = self.database_parts("use", &database)?;
        Ok(Operation::UseDatabase { catalog, database })
    }

    pub(super) fn convert_create_database(&self, create: CreateDatabase) -> Result {
        let (catalog, database) = self.database_parts("create", &create.database)?;
        let properties = merge_options(&HashMap::new(), create.properties);
        Ok(Operation::CreateDatabase {
            catalog,
            database,
            definition: CatalogDatabase::new(properties, create.comment),
            if_not_exists: create.if_not_exists,
        })
    }

    pub(super) fn convert_drop_database(&self, drop: DropDatabase) -> Result {
        let (catalog, database) = self.database_parts("drop", &drop.database)?;
        Ok(Operation::DropDatabase {
            catalog,
            database,
            if_exists: drop.if_exists,
            cascade: drop.cascade,
        })
    }

    /// ALTER DATABASE reads the stored database live: the new descriptor is
    /// the stored one with the declared properties merged over its own.
    pub(super) fn convert_alter_database(&self, alter: AlterDatabase) -> Result {
        let (catalog_name, database_name) = self.database_parts("alter", &alter.database)?;
        let catalog = self
            .catalogs()
            .catalog(&catalog_name)
            .ok_or_else(|| ConvertError::CatalogNotFound(catalog_name.clone()))?;
        let original = catalog
            .database(&database_name)
            .map_err(|_| ConvertError::DatabaseNotFound(database_name.clone()))?;
        let merged = merge_options(original.properties(), alter.properties);
        Ok(Operation::AlterDatabase {
            catalog: catalog_name,
            database: database_name,
            definition: original.copy_with_properties(merged),
        })
    }

    /// CREATE CATALOG instantiates the catalog through the factory selected
    /// by its `type` option. Registering it into the session happens
    /// downstream, when the operation is executed.
    pub(super) fn convert_create_catalog(&self, create: CreateCatalog) -> Result {
        let options = merge_options(&HashMap::new(), create.properties);
        let factory = self.factories().find(&options)?;
        debug!(catalog = %create.catalog, "instantiating catalog from factory");
        let catalog = factory.create(&create.catalog, &options)?;
        Ok(Operation::CreateCatalog(CreateCatalogOperation {
            name: create.catalog,
            catalog,
        }))
    }

    /// Split a raw database name into `(catalog, database)`. Database names
    /// carry at most two parts; the catalog part defaults to the current
    /// catalog when omitted.
    fn database_parts(&self, verb: &'static str, parts: &[String]) -> Result<(String, String)> {
        match parts {
            [database] => Ok((self.catalogs().current_catalog(), database.clone())),
            [catalog, database] => Ok((catalog.clone(), database.clone())),
            _ => Err(ConvertError::DatabaseIdentifierFormat(verb)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::super::testing::*;
    use super::*;
    use crate::catalog::CatalogFactoryRegistry;
    use crate::stmt::Statement;

    fn convert(
        catalogs: &crate::catalog::CatalogManager,
        factories: &CatalogFactoryRegistry,
        stmt: Statement,
    ) -> Result {
        let planner = StubPlanner::with_schema(int_schema(&[]));
        let converter = Converter::new(&planner, catalogs, factories);
        converter.convert(stmt).map(|op| op.unwrap())
    }

    #[test]
    fn use_database_fills_current_catalog() {
        let catalogs = fixture_manager();
        let factories = empty_registry();
        let operation = convert(
            &catalogs,
            &factories,
            Statement::UseDatabase {
                database: vec!["db2".into()],
            },
        )
        .unwrap();
        let Operation::UseDatabase { catalog, database } = operation else {
            panic!("expected UseDatabase");
        };
        assert_eq!((catalog.as_str(), database.as_str()), ("c0", "db2"));
    }

    #[test]
    fn database_names_carry_at_most_two_parts() {
        let catalogs = fixture_manager();
        let factories = empty_registry();
        let err = convert(
            &catalogs,
            &factories,
            Statement::UseDatabase {
                database: vec!["a".into(), "b".into(), "c".into()],
            },
        )
        .unwrap_err();
        assert_eq!(err, ConvertError::DatabaseIdentifierFormat("use"));
        assert_eq!(err.to_string(), "use database identifier format error");

        let err = convert(
            &catalogs,
            &factories,
            Statement::DropDatabase(DropDatabase {
                database: vec!["a".into(), "b".into(), "c".into()],
                if_exists: false,
                cascade: false,
            }),
        )
        .unwrap_err();
        assert_eq!(err, ConvertError::DatabaseIdentifierFormat("drop"));
    }

    #[test]
    fn alter_database_merges_over_stored_properties() {
        let catalogs = fixture_manager();
        let factories = empty_registry();
        let operation = convert(
            &catalogs,
            &factories,
            Statement::AlterDatabase(AlterDatabase {
                database: vec!["db1".into()],
                properties: vec![("k".into(), "v".into())],
            }),
        )
        .unwrap();
        let Operation::AlterDatabase { definition, .. } = operation else {
            panic!("expected AlterDatabase");
        };
        assert_eq!(
            definition.properties(),
            &HashMap::from([("k".to_string(), "v".to_string())])
        );
    }

    #[test]
    fn alter_database_distinguishes_missing_catalog_and_database() {
        let catalogs = fixture_manager();
        let factories = empty_registry();
        let err = convert(
            &catalogs,
            &factories,
            Statement::AlterDatabase(AlterDatabase {
                database: vec!["nope".into(), "db1".into()],
                properties: vec![],
            }),
        )
        .unwrap_err();
        assert_eq!(err, ConvertError::CatalogNotFound("nope".into()));

        let err = convert(
            &catalogs,
            &factories,
            Statement::AlterDatabase(AlterDatabase {
                database: vec!["db9".into()],
                properties: vec![],
            }),
        )
        .unwrap_err();
        assert_eq!(err, ConvertError::DatabaseNotFound("db9".into()));
    }

    #[test]
    fn create_catalog_resolves_factory_by_type_option() {
        let catalogs = fixture_manager();
        let factories = CatalogFactoryRegistry::standard();
        let operation = convert(
            &catalogs,
            &factories,
            Statement::CreateCatalog(CreateCatalog {
                catalog: "mem1".into(),
                properties: vec![
                    ("type".into(), "memory".into()),
                    ("default-database".into(), "d0".into()),
                ],
            }),
        )
        .unwrap();
        let Operation::CreateCatalog(create) = operation else {
            panic!("expected CreateCatalog");
        };
        assert_eq!(create.name, "mem1");
        assert!(create.catalog.database("d0").is_ok());
        // instantiation does not register the catalog into the session
        assert!(catalogs.catalog("mem1").is_none());
    }

    #[test]
    fn create_catalog_without_matching_factory_fails() {
        let catalogs = fixture_manager();
        let factories = CatalogFactoryRegistry::standard();
        let err = convert(
            &catalogs,
            &factories,
            Statement::CreateCatalog(CreateCatalog {
                catalog: "h".into(),
                properties: vec![("type".into(), "hive".into())],
            }),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::Catalog(_)));
    }
}
