// Reserved Words and Punctuation
//
// Fixed token tables shared by the lexer and the parser.

/// Reserved words; a bare token matching one of these (case-insensitively)
/// can never be used as a table or column name.
pub const KEYWORDS: &[&str] = &["SELECT", "FROM", "WHERE", "OFFSET", "LIMIT"];

/// Characters that always form a token on their own.
pub const SINGLE_CHAR_TOKENS: &[char] = &[','];

/// Characters that open and close a delimited identifier.
pub const QUOTE_DELIMITERS: &[char] = &['"', '\'', '`'];

/// Escape character inside delimited identifiers
pub const ESCAPE: char = '\\';

pub const COMMA: &str = ",";
pub const WILDCARD: &str = "*";

pub fn is_keyword(token: &str) -> bool {
    KEYWORDS.iter().any(|keyword| keyword.eq_ignore_ascii_case(token))
}

/// Case-insensitive match of `token` against a specific keyword.
pub fn matches_keyword(token: &str, keyword: &str) -> bool {
    token.eq_ignore_ascii_case(keyword)
}

pub fn is_single_char_token(ch: char) -> bool {
    SINGLE_CHAR_TOKENS.contains(&ch)
}

pub fn is_quote_delimiter(ch: char) -> bool {
    QUOTE_DELIMITERS.contains(&ch)
}
