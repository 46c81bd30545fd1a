// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

//! The backend-agnostic intermediate representation produced by
//! conversion.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use itertools::Itertools;
use pretty_xmlish::helper::delegate_fmt;
use pretty_xmlish::Pretty;

use crate::catalog::{
    Catalog, CatalogDatabase, CatalogFunction, CatalogTable, CatalogView, FunctionLanguage,
    ObjectIdentifier,
};
use crate::planner::PlanRoot;

/// One converted statement, ready for planning and execution.
///
/// Constructed once per conversion call and immutable thereafter. No
/// variant references the input statement tree.
#[derive(Debug, Clone)]
pub enum Operation {
    CreateTable {
        table: ObjectIdentifier,
        definition: CatalogTable,
        if_not_exists: bool,
        temporary: bool,
    },
    DropTable {
        table: ObjectIdentifier,
        if_exists: bool,
        temporary: bool,
    },
    AlterTableRename {
        table: ObjectIdentifier,
        new_table: ObjectIdentifier,
    },
    AlterTableProperties {
        table: ObjectIdentifier,
        definition: CatalogTable,
    },
    AlterTableAddConstraint {
        table: ObjectIdentifier,
        constraint_name: Option<String>,
        columns: Vec<String>,
    },
    AlterTableDropConstraint {
        table: ObjectIdentifier,
        constraint_name: String,
    },
    CreateFunction(CreateFunctionOperation),
    AlterFunction {
        function: ObjectIdentifier,
        definition: CatalogFunction,
        if_exists: bool,
        temporary: bool,
    },
    DropFunction(DropFunctionOperation),
    Insert(InsertOperation),
    UseCatalog {
        catalog: String,
    },
    UseDatabase {
        catalog: String,
        database: String,
    },
    CreateDatabase {
        catalog: String,
        database: String,
        definition: CatalogDatabase,
        if_not_exists: bool,
    },
    DropDatabase {
        catalog: String,
        database: String,
        if_exists: bool,
        cascade: bool,
    },
    AlterDatabase {
        catalog: String,
        database: String,
        definition: CatalogDatabase,
    },
    CreateCatalog(CreateCatalogOperation),
    ShowCatalogs,
    ShowDatabases,
    ShowTables,
    ShowFunctions,
    ShowViews,
    CreateView {
        view: ObjectIdentifier,
        definition: CatalogView,
        if_not_exists: bool,
        temporary: bool,
    },
    DropView {
        view: ObjectIdentifier,
        if_exists: bool,
        temporary: bool,
    },
    Explain {
        child: Box<Operation>,
    },
    DescribeTable {
        table: ObjectIdentifier,
        extended: bool,
    },
    Query(PlanRoot),
}

/// CREATE FUNCTION splits on the system flag: temporary system functions
/// live in the session and are keyed by bare name only.
#[derive(Debug, Clone)]
pub enum CreateFunctionOperation {
    System {
        name: String,
        class_name: String,
        language: FunctionLanguage,
        if_not_exists: bool,
    },
    Catalog {
        function: ObjectIdentifier,
        definition: CatalogFunction,
        if_not_exists: bool,
        temporary: bool,
    },
}

#[derive(Debug, Clone)]
pub enum DropFunctionOperation {
    System {
        name: String,
        if_exists: bool,
    },
    Catalog {
        function: ObjectIdentifier,
        if_exists: bool,
        temporary: bool,
    },
}

/// A sink-modify operation: write a query's result into a target table.
#[derive(Debug, Clone)]
pub struct InsertOperation {
    pub table: ObjectIdentifier,
    pub query: PlanRoot,
    /// Static partition spec in declaration order.
    pub static_partitions: Vec<(String, String)>,
    pub overwrite: bool,
    /// Planning-time overlay for the target's stored options; nothing is
    /// persisted.
    pub dynamic_options: HashMap<String, String>,
}

/// Carries the instantiated (but not yet registered) catalog value.
#[derive(Clone)]
pub struct CreateCatalogOperation {
    pub name: String,
    pub catalog: Arc<dyn Catalog>,
}

impl fmt::Debug for CreateCatalogOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateCatalogOperation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Operation {
    /// The variant tag, used in diagnostics and display.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateTable { .. } => "CreateTable",
            Operation::DropTable { .. } => "DropTable",
            Operation::AlterTableRename { .. } => "AlterTableRename",
            Operation::AlterTableProperties { .. } => "AlterTableProperties",
            Operation::AlterTableAddConstraint { .. } => "AlterTableAddConstraint",
            Operation::AlterTableDropConstraint { .. } => "AlterTableDropConstraint",
            Operation::CreateFunction(CreateFunctionOperation::System { .. }) => {
                "CreateTempSystemFunction"
            }
            Operation::CreateFunction(CreateFunctionOperation::Catalog { .. }) => {
                "CreateCatalogFunction"
            }
            Operation::AlterFunction { .. } => "AlterCatalogFunction",
            Operation::DropFunction(DropFunctionOperation::System { .. }) => {
                "DropTempSystemFunction"
            }
            Operation::DropFunction(DropFunctionOperation::Catalog { .. }) => {
                "DropCatalogFunction"
            }
            Operation::Insert(_) => "Insert",
            Operation::UseCatalog { .. } => "UseCatalog",
            Operation::UseDatabase { .. } => "UseDatabase",
            Operation::CreateDatabase { .. } => "CreateDatabase",
            Operation::DropDatabase { .. } => "DropDatabase",
            Operation::AlterDatabase { .. } => "AlterDatabase",
            Operation::CreateCatalog(_) => "CreateCatalog",
            Operation::ShowCatalogs => "ShowCatalogs",
            Operation::ShowDatabases => "ShowDatabases",
            Operation::ShowTables => "ShowTables",
            Operation::ShowFunctions => "ShowFunctions",
            Operation::ShowViews => "ShowViews",
            Operation::CreateView { .. } => "CreateView",
            Operation::DropView { .. } => "DropView",
            Operation::Explain { .. } => "Explain",
            Operation::DescribeTable { .. } => "DescribeTable",
            Operation::Query(_) => "Query",
        }
    }

    fn pretty_fields<'a>(&self) -> Vec<(&'a str, Pretty<'a>)> {
        match self {
            Operation::CreateTable {
                table,
                definition,
                if_not_exists,
                temporary,
            } => vec![
                ("table", Pretty::display(table)),
                ("columns", pretty_names(definition.schema().field_names())),
                ("if_not_exists", Pretty::display(if_not_exists)),
                ("temporary", Pretty::display(temporary)),
            ],
            Operation::DropTable {
                table,
                if_exists,
                temporary,
            } => vec![
                ("table", Pretty::display(table)),
                ("if_exists", Pretty::display(if_exists)),
                ("temporary", Pretty::display(temporary)),
            ],
            Operation::AlterTableRename { table, new_table } => vec![
                ("table", Pretty::display(table)),
                ("new_table", Pretty::display(new_table)),
            ],
            Operation::AlterTableProperties { table, definition } => vec![
                ("table", Pretty::display(table)),
                ("options", pretty_map(definition.options())),
            ],
            Operation::AlterTableAddConstraint {
                table,
                constraint_name,
                columns,
            } => vec![
                ("table", Pretty::display(table)),
                (
                    "constraint",
                    match constraint_name {
                        Some(name) => Pretty::display(name),
                        None => Pretty::display(&"<unnamed>"),
                    },
                ),
                ("columns", pretty_names(columns.iter().map(String::as_str))),
            ],
            Operation::AlterTableDropConstraint {
                table,
                constraint_name,
            } => vec![
                ("table", Pretty::display(table)),
                ("constraint", Pretty::display(constraint_name)),
            ],
            Operation::CreateFunction(CreateFunctionOperation::System {
                name,
                class_name,
                language,
                if_not_exists,
            }) => vec![
                ("name", Pretty::display(name)),
                ("class", Pretty::display(class_name)),
                ("language", Pretty::display(language)),
                ("if_not_exists", Pretty::display(if_not_exists)),
            ],
            Operation::CreateFunction(CreateFunctionOperation::Catalog {
                function,
                definition,
                if_not_exists,
                temporary,
            }) => vec![
                ("function", Pretty::display(function)),
                ("class", Pretty::display(&definition.class_name())),
                ("language", Pretty::display(&definition.language())),
                ("if_not_exists", Pretty::display(if_not_exists)),
                ("temporary", Pretty::display(temporary)),
            ],
            Operation::AlterFunction {
                function,
                definition,
                if_exists,
                temporary,
            } => vec![
                ("function", Pretty::display(function)),
                ("class", Pretty::display(&definition.class_name())),
                ("language", Pretty::display(&definition.language())),
                ("if_exists", Pretty::display(if_exists)),
                ("temporary", Pretty::display(temporary)),
            ],
            Operation::DropFunction(DropFunctionOperation::System { name, if_exists }) => vec![
                ("name", Pretty::display(name)),
                ("if_exists", Pretty::display(if_exists)),
            ],
            Operation::DropFunction(DropFunctionOperation::Catalog {
                function,
                if_exists,
                temporary,
            }) => vec![
                ("function", Pretty::display(function)),
                ("if_exists", Pretty::display(if_exists)),
                ("temporary", Pretty::display(temporary)),
            ],
            Operation::Insert(insert) => vec![
                ("table", Pretty::display(&insert.table)),
                ("overwrite", Pretty::display(&insert.overwrite)),
                ("dynamic_options", pretty_map(&insert.dynamic_options)),
            ],
            Operation::UseCatalog { catalog } => vec![("catalog", Pretty::display(catalog))],
            Operation::UseDatabase { catalog, database } => vec![
                ("catalog", Pretty::display(catalog)),
                ("database", Pretty::display(database)),
            ],
            Operation::CreateDatabase {
                catalog,
                database,
                if_not_exists,
                ..
            } => vec![
                ("catalog", Pretty::display(catalog)),
                ("database", Pretty::display(database)),
                ("if_not_exists", Pretty::display(if_not_exists)),
            ],
            Operation::DropDatabase {
                catalog,
                database,
                if_exists,
                cascade,
            } => vec![
                ("catalog", Pretty::display(catalog)),
                ("database", Pretty::display(database)),
                ("if_exists", Pretty::display(if_exists)),
                ("cascade", Pretty::display(cascade)),
            ],
            Operation::AlterDatabase {
                catalog,
                database,
                definition,
            } => vec![
                ("catalog", Pretty::display(catalog)),
                ("database", Pretty::display(database)),
                ("properties", pretty_map(definition.properties())),
            ],
            Operation::CreateCatalog(create) => vec![("catalog", Pretty::display(&create.name))],
            Operation::ShowCatalogs
            | Operation::ShowDatabases
            | Operation::ShowTables
            | Operation::ShowFunctions
            | Operation::ShowViews => vec![],
            Operation::CreateView {
                view,
                definition,
                if_not_exists,
                temporary,
            } => vec![
                ("view", Pretty::display(view)),
                ("query", Pretty::display(&definition.expanded_query())),
                ("if_not_exists", Pretty::display(if_not_exists)),
                ("temporary", Pretty::display(temporary)),
            ],
            Operation::DropView {
                view,
                if_exists,
                temporary,
            } => vec![
                ("view", Pretty::display(view)),
                ("if_exists", Pretty::display(if_exists)),
                ("temporary", Pretty::display(temporary)),
            ],
            Operation::Explain { child } => vec![("child", Pretty::display(&child.name()))],
            Operation::DescribeTable { table, extended } => vec![
                ("table", Pretty::display(table)),
                ("extended", Pretty::display(extended)),
            ],
            Operation::Query(plan) => vec![(
                "schema",
                pretty_names(plan.schema().field_names()),
            )],
        }
    }
}

fn pretty_names<'a, 'b>(names: impl IntoIterator<Item = &'b str>) -> Pretty<'a> {
    Pretty::Array(names.into_iter().map(|n| Pretty::display(&n)).collect())
}

fn pretty_map<'a>(map: &HashMap<String, String>) -> Pretty<'a> {
    Pretty::Array(
        map.iter()
            .sorted()
            .map(|(k, v)| Pretty::display(&format!("{k}={v}")))
            .collect(),
    )
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let explainer = Pretty::childless_record(self.name(), self.pretty_fields());
        delegate_fmt(&explainer, f, String::with_capacity(1000))
    }
}
