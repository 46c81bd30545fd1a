// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

//! The validated statement tree handed in by the external validator.
//!
//! This is a closed tagged union: adding a variant here is a compile-time
//! signal in the converter's dispatch match. Query nodes embed the
//! [`sqlparser`] AST unchanged; the relational planner consumes them.

use crate::parser::Query;
use crate::types::DataType;

/// A raw multi-part object name, outermost part first.
pub type NameParts = Vec<String>;

/// One validated SQL statement.
#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    DropTable(DropTable),
    AlterTable(AlterTable),
    CreateFunction(CreateFunction),
    AlterFunction(AlterFunction),
    DropFunction(DropFunction),
    Insert(Insert),
    UseCatalog { catalog: String },
    UseDatabase { database: NameParts },
    CreateDatabase(CreateDatabase),
    DropDatabase(DropDatabase),
    AlterDatabase(AlterDatabase),
    CreateCatalog(CreateCatalog),
    ShowCatalogs,
    ShowDatabases,
    ShowTables,
    ShowFunctions,
    ShowViews,
    CreateView(CreateView),
    DropView(DropView),
    Explain(Explain),
    DescribeTable { table: NameParts, extended: bool },
    Query(Query),
    /// Session variable assignment. Handled by the session layer, not by
    /// statement conversion.
    Set { key: String, value: String },
}

impl Statement {
    /// The runtime kind tag, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Statement::CreateTable(_) => "CREATE TABLE",
            Statement::DropTable(_) => "DROP TABLE",
            Statement::AlterTable(_) => "ALTER TABLE",
            Statement::CreateFunction(_) => "CREATE FUNCTION",
            Statement::AlterFunction(_) => "ALTER FUNCTION",
            Statement::DropFunction(_) => "DROP FUNCTION",
            Statement::Insert(_) => "INSERT",
            Statement::UseCatalog { .. } => "USE CATALOG",
            Statement::UseDatabase { .. } => "USE",
            Statement::CreateDatabase(_) => "CREATE DATABASE",
            Statement::DropDatabase(_) => "DROP DATABASE",
            Statement::AlterDatabase(_) => "ALTER DATABASE",
            Statement::CreateCatalog(_) => "CREATE CATALOG",
            Statement::ShowCatalogs => "SHOW CATALOGS",
            Statement::ShowDatabases => "SHOW DATABASES",
            Statement::ShowTables => "SHOW TABLES",
            Statement::ShowFunctions => "SHOW FUNCTIONS",
            Statement::ShowViews => "SHOW VIEWS",
            Statement::CreateView(_) => "CREATE VIEW",
            Statement::DropView(_) => "DROP VIEW",
            Statement::Explain(_) => "EXPLAIN",
            Statement::DescribeTable { .. } => "DESCRIBE",
            Statement::Query(_) => "QUERY",
            Statement::Set { .. } => "SET",
        }
    }
}

/// One column definition in CREATE TABLE.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

/// A declared table constraint, before legality checks.
#[derive(Debug, Clone)]
pub struct TableConstraint {
    pub name: Option<String>,
    pub columns: Vec<String>,
    /// `UNIQUE (...)` as opposed to `PRIMARY KEY (...)`.
    pub is_unique: bool,
    /// `ENFORCED` as opposed to `NOT ENFORCED`.
    pub is_enforced: bool,
}

#[derive(Debug, Clone)]
pub struct CreateTable {
    pub table: NameParts,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<TableConstraint>,
    pub partition_keys: Vec<String>,
    pub properties: Vec<(String, String)>,
    pub comment: Option<String>,
    pub if_not_exists: bool,
    pub temporary: bool,
}

#[derive(Debug, Clone)]
pub struct DropTable {
    pub table: NameParts,
    pub if_exists: bool,
    pub temporary: bool,
}

#[derive(Debug, Clone)]
pub struct AlterTable {
    pub table: NameParts,
    pub op: AlterTableOp,
}

#[derive(Debug, Clone)]
pub enum AlterTableOp {
    Rename { new_table: NameParts },
    SetProperties { properties: Vec<(String, String)> },
    AddConstraint(TableConstraint),
    DropConstraint { name: String },
    /// Parsed but without a conversion rule yet.
    RenameColumn { old_name: String, new_name: String },
}

#[derive(Debug, Clone)]
pub struct CreateFunction {
    pub function: NameParts,
    pub class_name: String,
    /// Raw `LANGUAGE` clause, `None` when absent.
    pub language: Option<String>,
    /// `CREATE TEMPORARY SYSTEM FUNCTION`: session-temporary, keyed by
    /// bare name, never catalog-qualified.
    pub system: bool,
    pub temporary: bool,
    pub if_not_exists: bool,
}

#[derive(Debug, Clone)]
pub struct AlterFunction {
    pub function: NameParts,
    pub class_name: String,
    pub language: Option<String>,
    pub system: bool,
    pub temporary: bool,
    pub if_exists: bool,
}

#[derive(Debug, Clone)]
pub struct DropFunction {
    pub function: NameParts,
    pub system: bool,
    pub temporary: bool,
    pub if_exists: bool,
}

/// A declarative hint attached to the INSERT target.
#[derive(Debug, Clone)]
pub struct TableHint {
    pub name: String,
    pub options: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub table: NameParts,
    pub hints: Vec<TableHint>,
    /// Static partition spec in declaration order.
    pub static_partitions: Vec<(String, String)>,
    pub overwrite: bool,
    /// The source sub-tree; converted by recursing through the top-level
    /// dispatcher and required to come back as a query operation.
    pub source: Box<Statement>,
}

#[derive(Debug, Clone)]
pub struct CreateDatabase {
    pub database: NameParts,
    pub properties: Vec<(String, String)>,
    pub comment: Option<String>,
    pub if_not_exists: bool,
}

#[derive(Debug, Clone)]
pub struct DropDatabase {
    pub database: NameParts,
    pub if_exists: bool,
    pub cascade: bool,
}

#[derive(Debug, Clone)]
pub struct AlterDatabase {
    pub database: NameParts,
    pub properties: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct CreateCatalog {
    pub catalog: String,
    pub properties: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct CreateView {
    pub view: NameParts,
    /// Optional explicit column aliases for the query's output.
    pub columns: Vec<String>,
    pub query: Query,
    pub comment: Option<String>,
    pub if_not_exists: bool,
    pub temporary: bool,
}

#[derive(Debug, Clone)]
pub struct DropView {
    pub view: NameParts,
    pub if_exists: bool,
    pub temporary: bool,
}

#[derive(Debug, Clone)]
pub struct Explain {
    pub query: Query,
    pub level: ExplainLevel,
    pub depth: ExplainDepth,
    pub format: ExplainFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplainLevel {
    #[default]
    Attributes,
    AllAttributes,
    NoAttributes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplainDepth {
    #[default]
    Physical,
    Logical,
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplainFormat {
    #[default]
    Text,
    Xml,
    Json,
}
