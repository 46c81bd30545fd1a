// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

//! The error type of statement conversion.

use crate::catalog::{CatalogError, ObjectIdentifier, SchemaError};
use crate::planner::PlanError;

/// The error type of statement conversion.
///
/// Every failure is raised synchronously at the point of detection; no
/// partial operation is ever returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A database name with more than two parts. Table-like names have
    /// their own limit, enforced by the qualification collaborator and
    /// surfacing through the [`Catalog`](Self::Catalog) arm.
    #[error("{0} database identifier format error")]
    DatabaseIdentifierFormat(&'static str),
    #[error("catalog {0:?} does not exist")]
    CatalogNotFound(String),
    #[error("database {0:?} does not exist")]
    DatabaseNotFound(String),
    #[error("table {0} doesn't exist or is a temporary table")]
    NoPermanentTable(ObjectIdentifier),
    #[error("constraint {0:?} does not exist")]
    ConstraintNotFound(String),
    #[error("UNIQUE constraints are not supported")]
    UniqueConstraint,
    #[error(
        "primary key constraints must be NOT ENFORCED: constraint checks are \
         not performed on the data owned by this engine"
    )]
    EnforcedConstraint,
    #[error("altering a temporary system function is not supported")]
    AlterSystemFunction,
    #[error("unrecognized function language {0:?}")]
    UnknownFunctionLanguage(String),
    #[error("unsupported ALTER TABLE statement: {0}")]
    UnsupportedAlterTable(&'static str),
    #[error("only the default EXPLAIN form is supported")]
    NonDefaultExplain,
    #[error(
        "VIEW definition and input fields do not match:\n  def fields: {0:?}\n  input fields: {1:?}"
    )]
    ViewFieldsMismatch(Vec<String>, Vec<String>),
    /// Internal-invariant violation: the validator handed an INSERT whose
    /// source does not convert to a query operation.
    #[error("unexpected INSERT source node: {0}")]
    UnexpectedInsertSource(&'static str),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Plan(#[from] PlanError),
}
