// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

//! Statement-to-operation conversion.
//!
//! [`Converter::convert`] is the single entry point: it dispatches one
//! validated [`Statement`] to the conversion rule for its variant and
//! returns one immutable [`Operation`], or `None` for the statement kinds
//! this stage deliberately does not cover yet. Converters resolve
//! identifiers against the ambient session context, consult catalog state
//! read-only, and never persist anything.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::{
    CatalogFactoryRegistry, CatalogManager, ObjectIdentifier, UnresolvedIdentifier,
};
use crate::planner::{DialectSettings, Planner};
use crate::stmt::Statement;

mod database;
mod error;
mod function;
mod insert;
mod operation;
mod query;
mod table;
mod view;

pub use self::error::ConvertError;
pub use self::operation::{
    CreateCatalogOperation, CreateFunctionOperation, DropFunctionOperation, InsertOperation,
    Operation,
};

pub type Result<T = Operation> = std::result::Result<T, ConvertError>;

/// Converts validated statements into operations.
///
/// Holds only borrowed collaborators and the active dialect settings; one
/// converter can serve any number of sequential conversion calls.
pub struct Converter<'a> {
    planner: &'a dyn Planner,
    catalogs: &'a CatalogManager,
    factories: &'a CatalogFactoryRegistry,
    dialect: DialectSettings,
}

impl<'a> Converter<'a> {
    pub fn new(
        planner: &'a dyn Planner,
        catalogs: &'a CatalogManager,
        factories: &'a CatalogFactoryRegistry,
    ) -> Self {
        Converter {
            planner,
            catalogs,
            factories,
            dialect: DialectSettings::default(),
        }
    }

    pub fn with_dialect(mut self, dialect: DialectSettings) -> Self {
        self.dialect = dialect;
        self
    }

    /// Convert one validated statement.
    ///
    /// Returns `Ok(None)` for statement kinds without a conversion rule.
    /// That arm is deliberate: a new [`Statement`] variant is a compile
    /// error here until it is either converted or explicitly passed over.
    pub fn convert(&self, stmt: Statement) -> Result<Option<Operation>> {
        debug!(statement = stmt.name(), "converting statement");
        let operation = match stmt {
            Statement::CreateTable(create) => Some(self.convert_create_table(create)?),
            Statement::DropTable(drop) => Some(self.convert_drop_table(drop)?),
            Statement::AlterTable(alter) => Some(self.convert_alter_table(alter)?),
            Statement::CreateFunction(create) => Some(self.convert_create_function(create)?),
            Statement::AlterFunction(alter) => Some(self.convert_alter_function(alter)?),
            Statement::DropFunction(drop) => Some(self.convert_drop_function(drop)?),
            Statement::Insert(insert) => Some(self.convert_insert(insert)?),
            Statement::UseCatalog { catalog } => Some(Operation::UseCatalog { catalog }),
            Statement::UseDatabase { database } => Some(self.convert_use_database(database)?),
            Statement::CreateDatabase(create) => Some(self.convert_create_database(create)?),
            Statement::DropDatabase(drop) => Some(self.convert_drop_database(drop)?),
            Statement::AlterDatabase(alter) => Some(self.convert_alter_database(alter)?),
            Statement::CreateCatalog(create) => Some(self.convert_create_catalog(create)?),
            Statement::ShowCatalogs => Some(Operation::ShowCatalogs),
            Statement::ShowDatabases => Some(Operation::ShowDatabases),
            Statement::ShowTables => Some(Operation::ShowTables),
            Statement::ShowFunctions => Some(Operation::ShowFunctions),
            Statement::ShowViews => Some(Operation::ShowViews),
            Statement::CreateView(create) => Some(self.convert_create_view(create)?),
            Statement::DropView(drop) => Some(self.convert_drop_view(drop)?),
            Statement::Explain(explain) => Some(self.convert_explain(explain)?),
            Statement::DescribeTable { table, extended } => {
                Some(self.convert_describe_table(table, extended)?)
            }
            Statement::Query(query) => Some(self.convert_query(query)?),
            // Session commands are handled outside statement conversion.
            Statement::Set { .. } => None,
        };
        if let Some(operation) = &operation {
            debug!(operation = operation.name(), "converted statement");
        }
        Ok(operation)
    }

    fn planner(&self) -> &dyn Planner {
        self.planner
    }

    fn catalogs(&self) -> &CatalogManager {
        self.catalogs
    }

    fn factories(&self) -> &CatalogFactoryRegistry {
        self.factories
    }

    fn dialect(&self) -> &DialectSettings {
        &self.dialect
    }

    /// Qualify a raw table/function/view name against the ambient context.
    /// The part-count limit is the qualification collaborator's rule.
    fn qualify(&self, parts: &[String]) -> Result<ObjectIdentifier> {
        let unresolved = UnresolvedIdentifier::of(parts.iter().cloned())?;
        Ok(self.catalogs.qualify(&unresolved))
    }
}

/// Merge an option overlay into an existing mapping: every original entry
/// is kept unless the overlay writes the same key, in which case the
/// overlay wins. Both inputs stay untouched.
pub(crate) fn merge_options(
    original: &HashMap<String, String>,
    overlay: impl IntoIterator<Item = (String, String)>,
) -> HashMap<String, String> {
    let mut merged = original.clone();
    merged.extend(overlay);
    merged
}
