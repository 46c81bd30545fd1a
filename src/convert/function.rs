// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

use super::{ConvertError, Converter, Operation, Result};
use crate::catalog::{CatalogFunction, FunctionLanguage};
use crate::convert::operation::{CreateFunctionOperation, DropFunctionOperation};
use crate::stmt::{AlterFunction, CreateFunction, DropFunction};

impl Converter<'_> {
    pub(super) fn convert_create_function(&self, create: CreateFunction) -> Result {
        let language = resolve_language(create.language)?;
        if create.system {
            // temporary system functions live in the session, keyed by
            // bare name, never catalog-qualified
            Ok(Operation::CreateFunction(CreateFunctionOperation::System {
                name: bare_name(&create.function),
                class_name: create.class_name,
                language,
                if_not_exists: create.if_not_exists,
            }))
        } else {
            let function = self.qualify(&create.function)?;
            Ok(Operation::CreateFunction(CreateFunctionOperation::Catalog {
                function,
                definition: CatalogFunction::new(create.class_name, language),
                if_not_exists: create.if_not_exists,
                temporary: create.temporary,
            }))
        }
    }

    pub(super) fn convert_alter_function(&self, alter: AlterFunction) -> Result {
        if alter.system {
            return Err(ConvertError::AlterSystemFunction);
        }
        let language = resolve_language(alter.language)?;
        let function = self.qualify(&alter.function)?;
        Ok(Operation::AlterFunction {
            function,
            definition: CatalogFunction::new(alter.class_name, language),
            if_exists: alter.if_exists,
            temporary: alter.temporary,
        })
    }

    pub(super) fn convert_drop_function(&self, drop: DropFunction) -> Result {
        if drop.system {
            Ok(Operation::DropFunction(DropFunctionOperation::System {
                name: bare_name(&drop.function),
                if_exists: drop.if_exists,
            }))
        } else {
            let function = self.qualify(&drop.function)?;
            Ok(Operation::DropFunction(DropFunctionOperation::Catalog {
                function,
                if_exists: drop.if_exists,
                temporary: drop.temporary,
            }))
        }
    }
}

/// The session key of a system function is the last name part alone.
fn bare_name(parts: &[String]) -> String {
    parts.last().cloned().unwrap_or_default()
}

/// Resolve a raw `LANGUAGE` clause. Absent or blank falls back to the
/// default; anything else must match a known tag exactly.
fn resolve_language(language: Option<String>) -> Result<FunctionLanguage> {
    match language {
        None => Ok(FunctionLanguage::default()),
        Some(tag) if tag.trim().is_empty() => Ok(FunctionLanguage::default()),
        Some(tag) => tag
            .parse()
            .map_err(|()| ConvertError::UnknownFunctionLanguage(tag)),
    }
}
