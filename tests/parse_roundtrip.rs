//! Integration tests feeding rendered statements back through a SQL
//! parser to check they are well-formed.

use sql_grants::prelude::*;
use sqlparser::{ast::Statement, dialect::SnowflakeDialect, parser::Parser};

fn parse_one(sql: &str) -> Statement {
    let statements = Parser::parse_sql(&SnowflakeDialect {}, sql)
        .unwrap_or_else(|error| panic!("failed to parse `{sql}`: {error}"));
    assert_eq!(statements.len(), 1, "expected a single statement from `{sql}`");
    statements.into_iter().next().expect("one statement was asserted")
}

#[test]
fn rendered_grants_parse() {
    let schema = ObjectGrantBuilder::schema("ACME", "SALES");
    assert!(matches!(parse_one(&schema.role("ADMIN").grant("USAGE", false)), Statement::Grant { .. }));

    let orders = ObjectGrantBuilder::schema_object(ObjectKind::Table, "ACME", "SALES", "ORDERS")
        .expect("tables are schema objects");
    assert!(matches!(
        parse_one(&orders.role("ANALYST").grant("SELECT", true)),
        Statement::Grant { .. }
    ));

    let database = ObjectGrantBuilder::account_object(ObjectKind::Database, "ACME")
        .expect("databases are account objects");
    assert!(matches!(
        parse_one(&database.role("ADMIN").grant("USAGE", false)),
        Statement::Grant { .. }
    ));

    let tables = CollectionGrantBuilder::all(ObjectKind::Table, "ACME", Some("SALES"))
        .expect("tables support collection grants");
    assert!(matches!(
        parse_one(&tables.role("ANALYST").grant("SELECT", false)),
        Statement::Grant { .. }
    ));
}

#[test]
fn rendered_revokes_parse() {
    let tables = CollectionGrantBuilder::all(ObjectKind::Table, "ACME", Some("SALES"))
        .expect("tables support collection grants");
    for statement in tables.role("ANALYST").revoke("SELECT") {
        assert!(matches!(parse_one(&statement), Statement::Revoke { .. }));
    }
}
