// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

use std::collections::HashMap;

use super::{ConvertError, Converter, Operation, Result};
use crate::convert::operation::InsertOperation;
use crate::stmt::{Insert, TableHint};

/// The one hint name carrying per-statement option overlays.
const OPTIONS_HINT: &str = "OPTIONS";

impl Converter<'_> {
    pub(super) fn convert_insert(&self, insert: Insert) -> Result {
        let table = self.qualify(&insert.table)?;
        let dynamic_options = collect_dynamic_options(&insert.hints);

        // the source sub-tree goes back through the top-level dispatch and
        // must come out as a query operation
        let source_kind = insert.source.name();
        let query = match self.convert(*insert.source)? {
            Some(Operation::Query(plan)) => plan,
            Some(other) => return Err(ConvertError::UnexpectedInsertSource(other.name())),
            None => return Err(ConvertError::UnexpectedInsertSource(source_kind)),
        };

        Ok(Operation::Insert(InsertOperation {
            table,
            query,
            static_partitions: insert.static_partitions,
            overwrite: insert.overwrite,
            dynamic_options,
        }))
    }
}

/// Flatten every `OPTIONS(...)` hint into one overlay map. Hints are
/// applied in declaration order, so a later hint wins on key collision.
fn collect_dynamic_options(hints: &[TableHint]) -> HashMap<String, String> {
    let mut options = HashMap::new();
    for hint in hints {
        if hint.name.eq_ignore_ascii_case(OPTIONS_HINT) {
            options.extend(hint.options.iter().cloned());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use crate::parser::parse_query;
    use crate::stmt::Statement;

    fn insert_of(hints: Vec<TableHint>, source: Statement) -> Statement {
        Statement::Insert(Insert {
            table: vec!["t".into()],
            hints,
            static_partitions: vec![("p".into(), "1".into())],
            overwrite: false,
            source: Box::new(source),
        })
    }

    fn convert(stmt: Statement) -> Result {
        let planner = StubPlanner::with_schema(int_schema(&["a"]));
        let catalogs = fixture_manager();
        let factories = empty_registry();
        let converter = Converter::new(&planner, &catalogs, &factories);
        converter.convert(stmt).map(|op| op.unwrap())
    }

    #[test]
    fn options_hints_become_dynamic_options() {
        let query = parse_query("SELECT 1").unwrap();
        let hints = vec![
            TableHint {
                name: "options".into(),
                options: vec![("k".into(), "a".into())],
            },
            TableHint {
                name: "broadcast".into(),
                options: vec![("ignored".into(), "x".into())],
            },
            TableHint {
                name: "OPTIONS".into(),
                options: vec![("k".into(), "b".into())],
            },
        ];
        let operation = convert(insert_of(hints, Statement::Query(query))).unwrap();
        let Operation::Insert(insert) = operation else {
            panic!("expected Insert");
        };
        assert_eq!(insert.table.to_string(), "c0.db1.t");
        assert_eq!(insert.static_partitions, [("p".to_string(), "1".to_string())]);
        // later OPTIONS hint wins, unrelated hints are dropped
        assert_eq!(
            insert.dynamic_options,
            HashMap::from([("k".to_string(), "b".to_string())])
        );
    }

    #[test]
    fn non_query_source_is_an_internal_invariant_error() {
        let err = convert(insert_of(
            vec![],
            Statement::Set {
                key: "k".into(),
                value: "v".into(),
            },
        ))
        .unwrap_err();
        assert_eq!(err, ConvertError::UnexpectedInsertSource("SET"));

        let err = convert(insert_of(vec![], Statement::ShowTables)).unwrap_err();
        assert_eq!(err, ConvertError::UnexpectedInsertSource("ShowTables"));
    }
}
