// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The implementation language of a user-defined function.
///
/// Tags are matched case-sensitively against the SQL `LANGUAGE` clause;
/// an absent or blank clause falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FunctionLanguage {
    #[default]
    Java,
    Scala,
    Python,
}

impl FromStr for FunctionLanguage {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JAVA" => Ok(Self::Java),
            "SCALA" => Ok(Self::Scala),
            "PYTHON" => Ok(Self::Python),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for FunctionLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Java => write!(f, "JAVA"),
            Self::Scala => write!(f, "SCALA"),
            Self::Python => write!(f, "PYTHON"),
        }
    }
}

/// An immutable snapshot of a function registered in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFunction {
    class_name: String,
    language: FunctionLanguage,
}

impl CatalogFunction {
    pub fn new(class_name: String, language: FunctionLanguage) -> Self {
        CatalogFunction {
            class_name,
            language,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn language(&self) -> FunctionLanguage {
        self.language
    }
}
