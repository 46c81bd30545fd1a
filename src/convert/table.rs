// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

use std::collections::HashMap;

use super::{merge_options, ConvertError, Converter, Operation, Result};
use crate::catalog::{CatalogTable, Field, ObjectIdentifier, SchemaBuilder};
use crate::stmt::{AlterTable, AlterTableOp, CreateTable, DropTable, TableConstraint};

impl Converter<'_> {
    pub(super) fn convert_create_table(&self, create: CreateTable) -> Result {
        let table = self.qualify(&create.table)?;

        let mut builder = SchemaBuilder::new();
        for column in &create.columns {
            builder = builder.field(Field::new(
                column.name.clone(),
                column.data_type,
                column.nullable,
            ));
        }
        for constraint in &create.constraints {
            validate_constraint(constraint)?;
            builder = builder.primary_key(constraint.name.clone(), constraint.columns.clone())?;
        }
        let schema = builder.build();

        // partition keys must be derived from the schema
        for key in &create.partition_keys {
            if !schema.fields().iter().any(|f| &f.name == key) {
                return Err(crate::catalog::SchemaError::UnknownColumn(key.clone()).into());
            }
        }

        let properties = merge_options(&HashMap::new(), create.properties);
        let definition = CatalogTable::new(schema, create.partition_keys, properties, create.comment);
        Ok(Operation::CreateTable {
            table,
            definition,
            if_not_exists: create.if_not_exists,
            temporary: create.temporary,
        })
    }

    pub(super) fn convert_drop_table(&self, drop: DropTable) -> Result {
        let table = self.qualify(&drop.table)?;
        Ok(Operation::DropTable {
            table,
            if_exists: drop.if_exists,
            temporary: drop.temporary,
        })
    }

    pub(super) fn convert_alter_table(&self, alter: AlterTable) -> Result {
        let table = self.qualify(&alter.table)?;
        match alter.op {
            AlterTableOp::Rename { new_table } => {
                // pure identifier remap, no catalog read required
                let new_table = self.qualify(&new_table)?;
                Ok(Operation::AlterTableRename { table, new_table })
            }
            AlterTableOp::SetProperties { properties } => {
                let original = self.permanent_table(&table)?;
                let merged = merge_options(original.options(), properties);
                Ok(Operation::AlterTableProperties {
                    table,
                    definition: original.copy_with_options(merged),
                })
            }
            AlterTableOp::AddConstraint(constraint) => {
                let original = self.permanent_table(&table)?;
                validate_constraint(&constraint)?;
                // dry run: apply the key to a copy of the stored schema to
                // surface name/column conflicts, then discard the result
                original
                    .schema()
                    .to_builder()
                    .primary_key(constraint.name.clone(), constraint.columns.clone())?;
                Ok(Operation::AlterTableAddConstraint {
                    table,
                    constraint_name: constraint.name,
                    columns: constraint.columns,
                })
            }
            AlterTableOp::DropConstraint { name } => {
                let original = self.permanent_table(&table)?;
                match original.schema().primary_key() {
                    Some(pk) if pk.name == name => Ok(Operation::AlterTableDropConstraint {
                        table,
                        constraint_name: name,
                    }),
                    _ => Err(ConvertError::ConstraintNotFound(name)),
                }
            }
            AlterTableOp::RenameColumn { .. } => {
                Err(ConvertError::UnsupportedAlterTable("RENAME COLUMN"))
            }
        }
    }

    pub(super) fn convert_describe_table(
        &self,
        table: Vec<String>,
        extended: bool,
    ) -> Result {
        let table = self.qualify(&table)?;
        Ok(Operation::DescribeTable { table, extended })
    }

    /// Look up an existing, non-temporary table.
    fn permanent_table(&self, table: &ObjectIdentifier) -> Result<CatalogTable> {
        match self.catalogs().table(table) {
            Some(lookup) if !lookup.is_temporary => lookup
                .base
                .as_table()
                .cloned()
                .ok_or_else(|| ConvertError::NoPermanentTable(table.clone())),
            _ => Err(ConvertError::NoPermanentTable(table.clone())),
        }
    }
}

/// Reject constraints this engine cannot honor: UNIQUE keys are not
/// supported, and constraint checks are never performed here, so an
/// ENFORCED key is illegal.
fn validate_constraint(constraint: &TableConstraint) -> Result<()> {
    if constraint.is_unique {
        return Err(ConvertError::UniqueConstraint);
    }
    if constraint.is_enforced {
        return Err(ConvertError::EnforcedConstraint);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::super::testing::*;
    use super::*;
    use crate::catalog::{CatalogBaseTable, CatalogTable, Schema};
    use crate::stmt::Statement;

    fn convert_alter(catalogs: &crate::catalog::CatalogManager, alter: AlterTable) -> Result {
        let planner = StubPlanner::with_schema(int_schema(&[]));
        let factories = empty_registry();
        let converter = Converter::new(&planner, catalogs, &factories);
        converter
            .convert(Statement::AlterTable(alter))
            .map(|op| op.unwrap())
    }

    #[test]
    fn set_properties_merges_over_stored_options() {
        let catalogs = fixture_manager();
        let operation = convert_alter(
            &catalogs,
            AlterTable {
                table: vec!["t".into()],
                op: AlterTableOp::SetProperties {
                    properties: vec![("a".into(), "1".into())],
                },
            },
        )
        .unwrap();
        let Operation::AlterTableProperties { definition, .. } = operation else {
            panic!("expected AlterTableProperties, got {operation}");
        };
        assert_eq!(
            definition.options(),
            &HashMap::from([
                ("x".to_string(), "y".to_string()),
                ("a".to_string(), "1".to_string()),
            ])
        );
    }

    #[test]
    fn set_properties_rejects_missing_and_temporary_tables() {
        let catalogs = fixture_manager();
        let set = AlterTableOp::SetProperties { properties: vec![] };
        let err = convert_alter(
            &catalogs,
            AlterTable {
                table: vec!["missing".into()],
                op: set.clone(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::NoPermanentTable(_)));

        let id = ObjectIdentifier::new("c0".into(), "db1".into(), "tmp".into());
        let table = CatalogTable::new(Schema::new(vec![]), vec![], HashMap::new(), None);
        catalogs.register_temporary_table(id, CatalogBaseTable::Table(table));
        let err = convert_alter(
            &catalogs,
            AlterTable {
                table: vec!["tmp".into()],
                op: set,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::NoPermanentTable(_)));
    }

    #[test]
    fn add_constraint_rejects_unique_and_enforced() {
        let catalogs = fixture_manager();
        let err = convert_alter(
            &catalogs,
            AlterTable {
                table: vec!["t".into()],
                op: AlterTableOp::AddConstraint(TableConstraint {
                    name: None,
                    columns: vec!["b".into()],
                    is_unique: true,
                    is_enforced: false,
                }),
            },
        )
        .unwrap_err();
        assert_eq!(err, ConvertError::UniqueConstraint);

        let err = convert_alter(
            &catalogs,
            AlterTable {
                table: vec!["t".into()],
                op: AlterTableOp::AddConstraint(TableConstraint {
                    name: Some("pk".into()),
                    columns: vec!["b".into()],
                    is_unique: false,
                    is_enforced: true,
                }),
            },
        )
        .unwrap_err();
        assert_eq!(err, ConvertError::EnforcedConstraint);
    }

    #[test]
    fn add_constraint_dry_run_catches_conflicts() {
        // fixture table already has primary key pk_a
        let catalogs = fixture_manager();
        let err = convert_alter(
            &catalogs,
            AlterTable {
                table: vec!["t".into()],
                op: AlterTableOp::AddConstraint(TableConstraint {
                    name: Some("pk_b".into()),
                    columns: vec!["b".into()],
                    is_unique: false,
                    is_enforced: false,
                }),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConvertError::Schema(crate::catalog::SchemaError::PrimaryKeyExists("pk_a".into()))
        );
    }

    #[test]
    fn drop_constraint_requires_exact_primary_key_name() {
        let catalogs = fixture_manager();
        // a primary key exists, but under the name pk_a
        let err = convert_alter(
            &catalogs,
            AlterTable {
                table: vec!["t".into()],
                op: AlterTableOp::DropConstraint { name: "pk_b".into() },
            },
        )
        .unwrap_err();
        assert_eq!(err, ConvertError::ConstraintNotFound("pk_b".into()));

        let operation = convert_alter(
            &catalogs,
            AlterTable {
                table: vec!["t".into()],
                op: AlterTableOp::DropConstraint { name: "pk_a".into() },
            },
        )
        .unwrap();
        assert!(matches!(
            operation,
            Operation::AlterTableDropConstraint { constraint_name, .. } if constraint_name == "pk_a"
        ));
    }

    #[test]
    fn rename_needs_no_catalog_read() {
        let catalogs = fixture_manager();
        let operation = convert_alter(
            &catalogs,
            AlterTable {
                table: vec!["no_such_table".into()],
                op: AlterTableOp::Rename {
                    new_table: vec!["db2".into(), "renamed".into()],
                },
            },
        )
        .unwrap();
        let Operation::AlterTableRename { table, new_table } = operation else {
            panic!("expected AlterTableRename");
        };
        assert_eq!(table.to_string(), "c0.db1.no_such_table");
        assert_eq!(new_table.to_string(), "c0.db2.renamed");
    }

    #[test]
    fn unimplemented_alter_form_is_unsupported() {
        let catalogs = fixture_manager();
        let err = convert_alter(
            &catalogs,
            AlterTable {
                table: vec!["t".into()],
                op: AlterTableOp::RenameColumn {
                    old_name: "a".into(),
                    new_name: "a2".into(),
                },
            },
        )
        .unwrap_err();
        assert_eq!(err, ConvertError::UnsupportedAlterTable("RENAME COLUMN"));
    }
}
