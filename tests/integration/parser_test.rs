#[path = "../common/mod.rs"]
mod common;

use anyhow::Result;
use common::parse_sql;
use mongosql::query::parser::ast::{Identifier, SelectStatement};
use mongosql::query::parser::{parse, ParseError, Parser};
use mongosql::{ErrorKind, TrailingTokens};

#[test]
fn test_simple_select_query() -> Result<()> {
    let select = parse_sql("SELECT id, name FROM test_table")?;

    let columns = select.columns.expect("Expected explicit columns");
    assert_eq!(columns.len(), 2);
    assert_eq!(columns.first(), &Identifier::bare("id"));
    assert_eq!(select.table, Identifier::bare("test_table"));
    assert!(select.condition.is_none());
    assert!(select.offset.is_none());
    assert!(select.limit.is_none());

    Ok(())
}

#[test]
fn test_wildcard_has_no_projection() -> Result<()> {
    let select = parse_sql("SELECT * FROM products LIMIT 0")?;
    assert!(select.columns.is_none());
    assert_eq!(select.limit, Some(0));
    Ok(())
}

#[test]
fn test_parse_accepts_plain_string_slices() -> Result<()> {
    let tokens = ["select", "*", "from", "'order items'", "offset", "+3"];
    let select = parse(&tokens)?;
    assert_eq!(select.table, Identifier::quoted("order items"));
    assert_eq!(select.offset, Some(3));
    Ok(())
}

#[test]
fn test_syntax_error() {
    // Misspelled SELECT
    let err = parse_sql("SELCT id FROM table").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn test_limit_before_offset_is_rejected() {
    let err = parse_sql("SELECT * FROM t LIMIT 1 OFFSET 2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn test_repeated_clause_is_rejected() {
    let err = parse_sql("SELECT * FROM t OFFSET 1 OFFSET 2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn test_lenient_parser_drops_trailing_tokens() -> Result<()> {
    let tokens = ["SELECT", "*", "FROM", "t", "LIMIT", "4", "garbage", "here"];
    let select = Parser::new(&tokens)
        .with_trailing_tokens(TrailingTokens::Ignore)
        .parse_select()?;

    let mut expected = SelectStatement::all_from(Identifier::bare("t"));
    expected.limit = Some(4);
    assert_eq!(select, expected);
    Ok(())
}

#[test]
fn test_where_is_recognized_but_unsupported() {
    for sql in [
        "SELECT * FROM t WHERE a = b",
        "SELECT a FROM t where NOT a > b",
        "SELECT * FROM t WHERE",
    ] {
        let err = parse_sql(sql).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported, "for {}", sql);
    }
}

#[test]
fn test_errors_carry_token_index() {
    let tokens = ["SELECT", "a", ",", "b", "FROM", "t", "OFFSET", "x"];
    let err = parse(&tokens).unwrap_err();
    assert_eq!(err.index(), 7);
    assert!(matches!(err, ParseError::InvalidInteger { .. }));
    assert_eq!(err.to_string(), "Expected integer, found 'x' at token 7");
}

#[test]
fn test_integer_overflow_is_not_an_integer() {
    let err = parse_sql("SELECT * FROM t LIMIT 99999999999999999999").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
}
