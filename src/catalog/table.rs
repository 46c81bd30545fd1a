// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Schema;

/// An immutable snapshot of a table stored in a catalog.
///
/// Converters that alter an existing table build a *new* descriptor with
/// the copy constructors below; stored state is never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogTable {
    schema: Schema,
    partition_keys: Vec<String>,
    options: HashMap<String, String>,
    comment: Option<String>,
}

impl CatalogTable {
    pub fn new(
        schema: Schema,
        partition_keys: Vec<String>,
        options: HashMap<String, String>,
        comment: Option<String>,
    ) -> Self {
        CatalogTable {
            schema,
            partition_keys,
            options,
            comment,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn partition_keys(&self) -> &[String] {
        &self.partition_keys
    }

    pub fn options(&self) -> &HashMap<String, String> {
        &self.options
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// A copy of this table with the given options, everything else kept.
    pub fn copy_with_options(&self, options: HashMap<String, String>) -> Self {
        CatalogTable {
            schema: self.schema.clone(),
            partition_keys: self.partition_keys.clone(),
            options,
            comment: self.comment.clone(),
        }
    }
}

/// An immutable snapshot of a view stored in a catalog.
///
/// Carries both textual renderings of the defining query: the text as the
/// author wrote it, and the expanded form with every identifier fully
/// qualified so the view replays correctly under any later session
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogView {
    original_query: String,
    expanded_query: String,
    schema: Schema,
    properties: HashMap<String, String>,
    comment: Option<String>,
}

impl CatalogView {
    pub fn new(
        original_query: String,
        expanded_query: String,
        schema: Schema,
        properties: HashMap<String, String>,
        comment: Option<String>,
    ) -> Self {
        CatalogView {
            original_query,
            expanded_query,
            schema,
            properties,
            comment,
        }
    }

    pub fn original_query(&self) -> &str {
        &self.original_query
    }

    pub fn expanded_query(&self) -> &str {
        &self.expanded_query
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// A table-like object looked up from a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogBaseTable {
    Table(CatalogTable),
    View(CatalogView),
}

impl CatalogBaseTable {
    pub fn as_table(&self) -> Option<&CatalogTable> {
        match self {
            CatalogBaseTable::Table(table) => Some(table),
            CatalogBaseTable::View(_) => None,
        }
    }

    pub fn schema(&self) -> &Schema {
        match self {
            CatalogBaseTable::Table(table) => table.schema(),
            CatalogBaseTable::View(view) => view.schema(),
        }
    }
}
