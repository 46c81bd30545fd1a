// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

use super::{ConvertError, Converter, Operation, Result};
use crate::parser::Query;
use crate::stmt::{Explain, ExplainDepth, ExplainFormat, ExplainLevel};

impl Converter<'_> {
    pub(super) fn convert_query(&self, query: Query) -> Result {
        let plan = self.planner().to_relational(&query)?;
        Ok(Operation::Query(plan))
    }

    /// Only the canonical EXPLAIN form has a conversion rule; every
    /// level/depth/format deviation is rejected up front.
    pub(super) fn convert_explain(&self, explain: Explain) -> Result {
        let canonical = explain.level == ExplainLevel::default()
            && explain.depth == ExplainDepth::default()
            && explain.format == ExplainFormat::default();
        if !canonical {
            return Err(ConvertError::NonDefaultExplain);
        }
        let child = self.convert_query(explain.query)?;
        Ok(Operation::Explain {
            child: Box::new(child),
        })
    }
}
