// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An immutable snapshot of a database stored in a catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogDatabase {
    properties: HashMap<String, String>,
    comment: Option<String>,
}

impl CatalogDatabase {
    pub fn new(properties: HashMap<String, String>, comment: Option<String>) -> Self {
        CatalogDatabase {
            properties,
            comment,
        }
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// A copy of this database with the given properties, comment kept.
    pub fn copy_with_properties(&self, properties: HashMap<String, String>) -> Self {
        CatalogDatabase {
            properties,
            comment: self.comment.clone(),
        }
    }
}
