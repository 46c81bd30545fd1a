// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

use serde::{Deserialize, Serialize};

use crate::types::DataType;

/// One column of a table or view schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Field {
            name: name.into(),
            data_type,
            nullable,
        }
    }
}

/// A named primary-key constraint over a set of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryKey {
    pub name: String,
    pub columns: Vec<String>,
}

/// The error type of schema construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("column {0:?} does not exist in the schema")]
    UnknownColumn(String),
    #[error("duplicated column {0:?} in primary key")]
    DuplicatedKeyColumn(String),
    #[error("a primary key {0:?} is already defined")]
    PrimaryKeyExists(String),
}

/// An immutable table or view schema: ordered fields plus an optional
/// primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<Field>,
    primary_key: Option<PrimaryKey>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Schema {
            fields,
            primary_key: None,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn primary_key(&self) -> Option<&PrimaryKey> {
        self.primary_key.as_ref()
    }

    /// Start a builder pre-populated with this schema, for overlay edits.
    pub fn to_builder(&self) -> SchemaBuilder {
        SchemaBuilder {
            fields: self.fields.clone(),
            primary_key: self.primary_key.clone(),
        }
    }

    /// A copy of this schema with fields renamed in order. Types, nullability
    /// and positions are preserved. The caller must have checked the count.
    pub fn rename_fields(&self, names: Vec<String>) -> Schema {
        assert_eq!(names.len(), self.fields.len());
        Schema {
            fields: self
                .fields
                .iter()
                .zip(names)
                .map(|(f, name)| Field {
                    name,
                    data_type: f.data_type,
                    nullable: f.nullable,
                })
                .collect(),
            primary_key: None,
        }
    }
}

/// Builds a [`Schema`], validating primary-key declarations.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<Field>,
    primary_key: Option<PrimaryKey>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Declare a primary key. An absent name derives `PK_<col>_<col>`.
    ///
    /// Fails if a primary key is already declared, a column is unknown, or
    /// a column appears twice. Key columns become non-nullable.
    pub fn primary_key(
        mut self,
        name: Option<String>,
        columns: Vec<String>,
    ) -> Result<Self, SchemaError> {
        if let Some(pk) = &self.primary_key {
            return Err(SchemaError::PrimaryKeyExists(pk.name.clone()));
        }
        let mut seen = Vec::with_capacity(columns.len());
        for column in &columns {
            if seen.contains(&column) {
                return Err(SchemaError::DuplicatedKeyColumn(column.clone()));
            }
            seen.push(column);
            let field = self
                .fields
                .iter_mut()
                .find(|f| &f.name == column)
                .ok_or_else(|| SchemaError::UnknownColumn(column.clone()))?;
            field.nullable = false;
        }
        let name = name.unwrap_or_else(|| format!("PK_{}", columns.join("_")));
        self.primary_key = Some(PrimaryKey { name, columns });
        Ok(self)
    }

    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
            primary_key: self.primary_key,
        }
    }
}
