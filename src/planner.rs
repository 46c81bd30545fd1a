// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

//! The seam between statement conversion and the relational planner.
//!
//! The converter never builds relational trees itself. It hands query
//! nodes to a [`Planner`] and embeds the returned [`PlanRoot`] into the
//! produced operation. The view rule additionally re-validates its
//! defining query here to obtain the expanded, fully-qualified form.

use serde::{Deserialize, Serialize};

use crate::catalog::Schema;
use crate::parser::Query;

/// The error type of planner calls.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("planner error: {0}")]
pub struct PlanError(pub String);

/// The root of a relational plan produced for one query.
///
/// Downstream planning owns the actual tree; conversion only needs the
/// output schema to reconcile view column aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRoot {
    schema: Schema,
}

impl PlanRoot {
    pub fn new(schema: Schema) -> Self {
        PlanRoot { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

/// How identifiers are cased when a query is rendered back to SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdentifierCasing {
    #[default]
    Unchanged,
    ToUpper,
    ToLower,
}

/// Rendering configuration drawn from the active SQL dialect.
///
/// The expanded query text stored with a view is rendered under these
/// settings so it replays identically regardless of later session changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectSettings {
    pub identifier_quote: char,
    pub quoted_casing: IdentifierCasing,
    pub unquoted_casing: IdentifierCasing,
}

impl Default for DialectSettings {
    fn default() -> Self {
        DialectSettings {
            identifier_quote: '`',
            quoted_casing: IdentifierCasing::Unchanged,
            unquoted_casing: IdentifierCasing::Unchanged,
        }
    }
}

/// Relational-planning collaborator consumed by the converter.
pub trait Planner {
    /// Validate a query standalone, returning its expanded form with all
    /// identifiers fully qualified against the current session context.
    fn validate(&self, query: &Query) -> Result<Query, PlanError>;

    /// Convert a validated query to a relational plan.
    fn to_relational(&self, query: &Query) -> Result<PlanRoot, PlanError>;

    /// Render a query as SQL text under the given dialect settings.
    fn render(&self, query: &Query, settings: &DialectSettings) -> String;
}
