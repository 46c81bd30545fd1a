// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

//! Catalog identifiers, descriptors, and read-only lookup interfaces.
//!
//! Everything in this module is a value object or a read path. Writing to
//! a catalog (actually creating tables, registering catalogs into the
//! session, ...) is the execution layer's job; the conversion stage only
//! reads snapshots and builds new descriptor values.

use serde::{Deserialize, Serialize};

pub use self::database::*;
pub use self::factory::*;
pub use self::function::*;
pub use self::manager::*;
pub use self::memory::*;
pub use self::schema::*;
pub use self::table::*;

mod database;
mod factory;
mod function;
mod manager;
mod memory;
mod schema;
mod table;

/// The maximum number of parts in a raw object name.
pub const MAX_NAME_PARTS: usize = 3;

/// The error type of catalog operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),
    #[error("duplicated {0}: {1}")]
    Duplicated(&'static str, String),
    #[error("invalid identifier {0:?}: at most {MAX_NAME_PARTS} name parts allowed")]
    TooManyNameParts(Vec<String>),
}

/// A raw, possibly-partial object name as written by the user.
///
/// Holds 1 to 3 parts mapping onto `object`, `database.object`, or
/// `catalog.database.object`. No defaults are applied yet; that is
/// [`CatalogManager::qualify`]'s job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnresolvedIdentifier {
    parts: Vec<String>,
}

impl UnresolvedIdentifier {
    /// Wrap raw name parts, rejecting sequences longer than
    /// [`MAX_NAME_PARTS`].
    pub fn of(parts: impl IntoIterator<Item = String>) -> Result<Self, CatalogError> {
        let parts: Vec<String> = parts.into_iter().collect();
        assert!(!parts.is_empty(), "identifier must have at least one part");
        if parts.len() > MAX_NAME_PARTS {
            return Err(CatalogError::TooManyNameParts(parts));
        }
        Ok(UnresolvedIdentifier { parts })
    }

    pub fn catalog_name(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [catalog, _, _] => Some(catalog),
            _ => None,
        }
    }

    pub fn database_name(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [_, database, _] | [database, _] => Some(database),
            _ => None,
        }
    }

    pub fn object_name(&self) -> &str {
        self.parts.last().expect("checked in constructor")
    }
}

/// A fully qualified `catalog.database.object` name.
///
/// All three parts are always populated. Produced by
/// [`CatalogManager::qualify`]; converters never assemble one by hand.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectIdentifier {
    catalog: String,
    database: String,
    object: String,
}

impl ObjectIdentifier {
    pub fn new(catalog: String, database: String, object: String) -> Self {
        ObjectIdentifier {
            catalog,
            database,
            object,
        }
    }

    pub fn catalog_name(&self) -> &str {
        &self.catalog
    }

    pub fn database_name(&self) -> &str {
        &self.database
    }

    pub fn object_name(&self) -> &str {
        &self.object
    }
}

impl std::fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.catalog, self.database, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_identifier_arity() {
        let id = UnresolvedIdentifier::of(["t".into()]).unwrap();
        assert_eq!(id.catalog_name(), None);
        assert_eq!(id.database_name(), None);
        assert_eq!(id.object_name(), "t");

        let id = UnresolvedIdentifier::of(["db".into(), "t".into()]).unwrap();
        assert_eq!(id.catalog_name(), None);
        assert_eq!(id.database_name(), Some("db"));
        assert_eq!(id.object_name(), "t");

        let id = UnresolvedIdentifier::of(["cat".into(), "db".into(), "t".into()]).unwrap();
        assert_eq!(id.catalog_name(), Some("cat"));
        assert_eq!(id.database_name(), Some("db"));
        assert_eq!(id.object_name(), "t");
    }

    #[test]
    fn unresolved_identifier_too_long() {
        let parts: Vec<String> = ["a", "b", "c", "d"].map(String::from).into();
        assert_eq!(
            UnresolvedIdentifier::of(parts.clone()),
            Err(CatalogError::TooManyNameParts(parts))
        );
    }
}
