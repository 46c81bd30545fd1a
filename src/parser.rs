// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

//! The parser module directly uses the [`sqlparser`] crate for the query
//! nodes embedded in validated statements, and re-exports its AST types.

pub use sqlparser::ast::Query;
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;
pub use sqlparser::parser::ParserError;

/// Parse a single SQL query into its AST.
///
/// Only query-shaped statements are accepted; everything else is an error.
/// DDL and DML statement trees are produced by the external validator, not
/// by this function.
pub fn parse_query(sql: &str) -> Result<Query, ParserError> {
    let dialect = GenericDialect {};
    let mut stmts = Parser::parse_sql(&dialect, sql)?;
    if stmts.len() != 1 {
        return Err(ParserError::ParserError(format!(
            "expected a single query, got {} statements",
            stmts.len()
        )));
    }
    match stmts.remove(0) {
        sqlparser::ast::Statement::Query(query) => Ok(*query),
        other => Err(ParserError::ParserError(format!(
            "expected a query, got: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_query() {
        let query = parse_query("SELECT a, b FROM t").unwrap();
        assert_eq!(query.to_string(), "SELECT a, b FROM t");
    }

    #[test]
    fn reject_non_query() {
        assert!(parse_query("DROP TABLE t").is_err());
        assert!(parse_query("SELECT 1; SELECT 2").is_err());
    }
}
