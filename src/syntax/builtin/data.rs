//! Data and query languages: JSON, YAML, SQL

use super::{alternation, context_rule, rule, words, DECIMAL, DOUBLE_QUOTED, HASH_COMMENT, OPERATORS, SIGNED_DECIMAL, SINGLE_QUOTED};
use crate::syntax::language::{LanguageDefinition, LanguageFastPath, LanguageId};
use crate::syntax::rules::TokenRule;
use crate::syntax::tokens::TokenKind;

const SQL_KEYWORDS: &[&str] = &[
    "select", "from", "where", "join", "left", "right", "inner", "outer", "on", "insert", "into",
    "update", "delete", "create", "table", "alter", "drop", "values", "group", "by", "order", "limit",
    "offset", "distinct", "as", "and", "or", "not", "null", "is", "in", "like", "between", "case",
    "when", "then", "else", "end", "having", "union", "all",
];

pub(crate) fn json_language() -> LanguageDefinition {
    let rules = vec![
        rule(TokenKind::STRING, DOUBLE_QUOTED),
        rule(TokenKind::NUMBER, SIGNED_DECIMAL),
        words(TokenKind::KEYWORD, &["true", "false", "null"]),
        rule(TokenKind::PUNCTUATION, r"[\[\]{}(),:]"),
    ];
    LanguageDefinition::new(LanguageId::JSON, "JSON", rules)
}

pub(crate) fn yaml_language() -> LanguageDefinition {
    let rules = vec![
        rule(TokenKind::COMMENT, HASH_COMMENT),
        rule(TokenKind::STRING, DOUBLE_QUOTED),
        rule(TokenKind::STRING, SINGLE_QUOTED),
        rule(TokenKind::NUMBER, SIGNED_DECIMAL),
        words(TokenKind::KEYWORD, &["true", "false", "null", "yes", "no", "on", "off"]),
        context_rule(TokenKind::PROPERTY, r"(?m)^[\s-]*[A-Za-z0-9_-]+", r"\s*:"),
        rule(TokenKind::PUNCTUATION, r"[\[\]{}(),:]"),
    ];
    LanguageDefinition::new(LanguageId::YAML, "YAML", rules)
}

/// Create SQL language definition
///
/// Keywords match in any case, so they are a flagged word-list rule
/// without a word set and the fast path stays empty.
pub(crate) fn sql_language() -> LanguageDefinition {
    let keywords = format!(r"(?i)\b(?:{})\b", alternation(SQL_KEYWORDS));
    let keyword_rule = TokenRule::word_list(TokenKind::KEYWORD, &keywords)
        .unwrap_or_else(|e| panic!("invalid built-in SQL keyword pattern: {e}"));

    let rules = vec![
        rule(TokenKind::COMMENT, r"--[^\n\r]*"),
        rule(TokenKind::COMMENT, r"/\*[\s\S]*?\*/"),
        rule(TokenKind::STRING, SINGLE_QUOTED),
        rule(TokenKind::STRING, DOUBLE_QUOTED),
        rule(TokenKind::NUMBER, DECIMAL),
        keyword_rule,
        rule(TokenKind::OPERATOR, OPERATORS),
        rule(TokenKind::PUNCTUATION, r"[\[\]{}().,;]"),
    ];
    LanguageDefinition::new(LanguageId::SQL, "SQL", rules).with_fast_path(LanguageFastPath::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::RegexTokenizer;
    use std::sync::Arc;

    #[test]
    fn test_json_document() {
        let code = r#"{"a": [1, -2.5, null]}"#;
        let tokens = RegexTokenizer::new(Arc::new(json_language())).tokenize(code);
        let kinds: Vec<_> = tokens.iter().map(|t| (t.kind.clone(), t.text(code))).collect();
        assert_eq!(
            kinds,
            vec![
                (TokenKind::PUNCTUATION, "{"),
                (TokenKind::STRING, "\"a\""),
                (TokenKind::PUNCTUATION, ":"),
                (TokenKind::PLAIN, " "),
                (TokenKind::PUNCTUATION, "["),
                (TokenKind::NUMBER, "1"),
                (TokenKind::PUNCTUATION, ","),
                (TokenKind::PLAIN, " -"),
                (TokenKind::NUMBER, "2.5"),
                (TokenKind::PUNCTUATION, ","),
                (TokenKind::PLAIN, " "),
                (TokenKind::KEYWORD, "null"),
                (TokenKind::PUNCTUATION, "]}"),
            ]
        );
    }
}
