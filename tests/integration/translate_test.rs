use anyhow::Result;
use mongosql::{translate, ErrorKind, TrailingTokens, Translator, TranslatorConfig};

#[test]
fn test_select_all_renders_member_reference() -> Result<()> {
    for table in ["table", "users", "myNiceTable", "a.b", "t_1"] {
        let query = translate(&format!("SELECT * FROM {}", table))?;
        assert_eq!(query, format!("db.{}.find({{}})", table));
    }
    Ok(())
}

#[test]
fn test_pagination_suffix() -> Result<()> {
    let cases = [
        (None, None, ""),
        (Some(8), None, ".skip(8)"),
        (None, Some(64), ".limit(64)"),
        (Some(0), Some(0), ".skip(0).limit(0)"),
        (Some(8), Some(10), ".skip(8).limit(10)"),
    ];

    for (offset, limit, suffix) in cases {
        let mut sql = "SELECT * FROM table".to_string();
        if let Some(offset) = offset {
            sql.push_str(&format!(" OFFSET {}", offset));
        }
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }
        assert_eq!(translate(&sql)?, format!("db.table.find({{}}){}", suffix));
    }
    Ok(())
}

#[test]
fn test_negative_values_fail_with_range_error() {
    for sql in [
        "SELECT * FROM table OFFSET -5",
        "SELECT * FROM table LIMIT -23",
        "SELECT * FROM table OFFSET 1 LIMIT -1",
    ] {
        let err = translate(sql).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range, "for {}", sql);
    }
}

#[test]
fn test_quoted_table_names_keep_spaces() -> Result<()> {
    for sql in [
        "SELECT * FROM `sales management`",
        "SELECT * FROM \"sales management\"",
        "SELECT * FROM 'sales management'",
    ] {
        assert_eq!(translate(sql)?, "db['sales management'].find({})");
    }
    Ok(())
}

#[test]
fn test_projection() -> Result<()> {
    assert_eq!(translate("SELECT X, Y, Z FROM T")?, "db.T.find({}, {X: 1,Y: 1,Z: 1})");
    assert_eq!(
        translate("SELECT X , Y , Z FROM `sales management` OFFSET 8 LIMIT 10")?,
        "db['sales management'].find({}, {X: 1,Y: 1,Z: 1}).skip(8).limit(10)"
    );
    assert_eq!(
        translate("SELECT X, \"looong spacy name\", Z FROM `sales management` OFFSET 8 LIMIT 10")?,
        "db['sales management'].find({}, {X: 1,'looong spacy name': 1,Z: 1}).skip(8).limit(10)"
    );
    Ok(())
}

#[test]
fn test_quoted_keywords_are_names() -> Result<()> {
    assert_eq!(
        translate("SELECT `from`, `limit` FROM \"select\"")?,
        "db['select'].find({}, {'from': 1,'limit': 1})"
    );
    Ok(())
}

#[test]
fn test_where_never_silently_dropped() {
    let err = translate("SELECT a FROM t WHERE a = b OFFSET 1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert!(err.to_string().contains("WHERE"));
}

#[test]
fn test_lex_errors_surface() {
    let err = translate("SELECT * FROM `sales").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert_eq!(
        err.to_string(),
        "Lex error: unterminated quoted identifier at position 14"
    );
}

#[test]
fn test_translator_shared_across_threads() -> Result<()> {
    let translator = Translator::new(
        TranslatorConfig::default()
            .with_database("store")
            .with_trailing_tokens(TrailingTokens::Reject),
    );

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let translator = &translator;
                scope.spawn(move || translator.translate(&format!("SELECT * FROM t LIMIT {}", i)))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let query = handle.join().expect("translation thread panicked")?;
            assert_eq!(query, format!("store.t.find({{}}).limit({})", i));
        }
        Ok(())
    })
}
