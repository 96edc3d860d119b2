use anyhow::Result;

use mongosql::Translator;

/// Statements exercising every supported clause, plus a few that must fail.
const SAMPLES: &[&str] = &[
    "SELECT * FROM table",
    "SELECT * FROM table OFFSET -5",
    "SELECT * FROM table LIMIT -23",
    "SELECT * FROM table OFFSET 8",
    "SELECT * FROM table LIMIT 64",
    "SELECT * FROM myNiceTable OFFSET 8 LIMIT 10",
    "SELECT * FROM `sales management` OFFSET 8 LIMIT 10",
    "SELECT X , Y , Z FROM `sales management` OFFSET 8 LIMIT 10",
    "SELECT X, Y, Z FROM `sales management` OFFSET 8 LIMIT 10",
    "SELECT X, \"looong spacy name\", Z FROM `sales management` OFFSET 8 LIMIT 10",
    "SELECT * FROM table WHERE a > b",
];

fn main() -> Result<()> {
    env_logger::init();

    let translator = Translator::default();
    for sql in SAMPLES {
        match translator.translate(sql) {
            Ok(query) => println!("{} -> {}", sql, query),
            Err(err) => println!("{} -> {}: {}", sql, err.kind(), err),
        }
    }

    Ok(())
}
