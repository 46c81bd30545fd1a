// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

use std::collections::HashMap;

use itertools::Itertools;

use super::{ConvertError, Converter, Operation, Result};
use crate::catalog::CatalogView;
use crate::stmt::{CreateView, DropView};

impl Converter<'_> {
    /// CREATE VIEW re-validates the defining query to obtain its expanded
    /// form, then stores both textual renderings alongside the inferred
    /// schema. Explicit column aliases must cover the query's output
    /// exactly.
    pub(super) fn convert_create_view(&self, create: CreateView) -> Result {
        let view = self.qualify(&create.view)?;

        let expanded = self.planner().validate(&create.query)?;
        let plan = self.planner().to_relational(&expanded)?;
        let mut schema = plan.schema().clone();

        if !create.columns.is_empty() {
            if create.columns.len() != schema.fields().len() {
                let inferred = schema.field_names().into_iter().map_into().collect_vec();
                return Err(ConvertError::ViewFieldsMismatch(create.columns, inferred));
            }
            schema = schema.rename_fields(create.columns);
        }

        let original_query = self.planner().render(&create.query, self.dialect());
        let expanded_query = self.planner().render(&expanded, self.dialect());
        let definition = CatalogView::new(
            original_query,
            expanded_query,
            schema,
            HashMap::new(),
            create.comment,
        );
        Ok(Operation::CreateView {
            view,
            definition,
            if_not_exists: create.if_not_exists,
            temporary: create.temporary,
        })
    }

    pub(super) fn convert_drop_view(&self, drop: DropView) -> Result {
        let view = self.qualify(&drop.view)?;
        Ok(Operation::DropView {
            view,
            if_exists: drop.if_exists,
            temporary: drop.temporary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use crate::parser::parse_query;
    use crate::stmt::Statement;

    fn create_view(columns: Vec<String>) -> CreateView {
        CreateView {
            view: vec!["v".into()],
            columns,
            query: parse_query("SELECT a, b FROM t").unwrap(),
            comment: None,
            if_not_exists: false,
            temporary: false,
        }
    }

    fn convert(planner: StubPlanner, stmt: Statement) -> Result {
        let catalogs = fixture_manager();
        let factories = empty_registry();
        let converter = Converter::new(&planner, &catalogs, &factories);
        converter.convert(stmt).map(|op| op.unwrap())
    }

    #[test]
    fn stores_both_query_renderings_and_aliased_schema() {
        let planner = StubPlanner {
            schema: int_schema(&["a", "b"]),
            expanded: Some(parse_query("SELECT a, b FROM c0.db1.t").unwrap()),
        };
        let operation = convert(
            planner,
            Statement::CreateView(create_view(vec!["x".into(), "y".into()])),
        )
        .unwrap();
        let Operation::CreateView {
            view, definition, ..
        } = operation
        else {
            panic!("expected CreateView");
        };
        assert_eq!(view.to_string(), "c0.db1.v");
        assert_eq!(definition.original_query(), "SELECT a, b FROM t");
        assert_eq!(definition.expanded_query(), "SELECT a, b FROM c0.db1.t");
        assert_eq!(definition.schema().field_names(), ["x", "y"]);
    }

    #[test]
    fn no_aliases_keeps_the_inferred_names() {
        let planner = StubPlanner::with_schema(int_schema(&["a", "b"]));
        let operation = convert(planner, Statement::CreateView(create_view(vec![]))).unwrap();
        let Operation::CreateView { definition, .. } = operation else {
            panic!("expected CreateView");
        };
        assert_eq!(definition.schema().field_names(), ["a", "b"]);
    }

    #[test]
    fn alias_count_must_match_the_inferred_fields() {
        let planner = StubPlanner::with_schema(int_schema(&["a", "b"]));
        let err = convert(
            planner,
            Statement::CreateView(create_view(vec!["x".into()])),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConvertError::ViewFieldsMismatch(
                vec!["x".into()],
                vec!["a".into(), "b".into()]
            )
        );
    }

    #[test]
    fn drop_view_is_a_pure_identifier_remap() {
        let planner = StubPlanner::with_schema(int_schema(&[]));
        let operation = convert(
            planner,
            Statement::DropView(DropView {
                view: vec!["db2".into(), "v".into()],
                if_exists: true,
                temporary: false,
            }),
        )
        .unwrap();
        assert!(matches!(
            operation,
            Operation::DropView { view, if_exists: true, temporary: false }
                if view.to_string() == "c0.db2.v"
        ));
    }
}
