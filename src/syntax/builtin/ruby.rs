//! Ruby language definition

use super::{context_rule, rule, words, CALL, DECIMAL, DOUBLE_QUOTED, HASH_COMMENT, IDENTIFIER, OPERATORS, SINGLE_QUOTED};
use crate::syntax::language::{LanguageDefinition, LanguageFastPath, LanguageId};
use crate::syntax::tokens::TokenKind;

const KEYWORDS: &[&str] = &[
    "BEGIN", "END", "alias", "and", "begin", "break", "case", "class", "def", "defined?", "do", "else",
    "elsif", "end", "ensure", "false", "for", "if", "in", "module", "next", "nil", "not", "or", "redo",
    "rescue", "retry", "return", "self", "super", "then", "true", "undef", "unless", "until", "when",
    "while", "yield",
];

const TYPES: &[&str] = &["String", "Integer", "Float", "Array", "Hash", "Symbol", "Object", "Module", "Class"];

/// Create Ruby language definition
///
/// `defined?` is not a plain identifier, so the keyword set stays on the
/// regex path.
pub(crate) fn ruby_language() -> LanguageDefinition {
    let rules = vec![
        rule(TokenKind::COMMENT, HASH_COMMENT),
        rule(TokenKind::STRING, DOUBLE_QUOTED),
        rule(TokenKind::STRING, SINGLE_QUOTED),
        rule(TokenKind::NUMBER, r"\b0x[0-9a-fA-F]+\b"),
        rule(TokenKind::NUMBER, DECIMAL),
        words(TokenKind::KEYWORD, KEYWORDS),
        words(TokenKind::TYPE, TYPES),
        context_rule(TokenKind::FUNCTION, IDENTIFIER, CALL),
        rule(TokenKind::OPERATOR, OPERATORS),
        rule(TokenKind::PUNCTUATION, r"[\[\]{}().,;:]"),
    ];
    LanguageDefinition::new(LanguageId::RUBY, "Ruby", rules).with_fast_path(LanguageFastPath::new(KEYWORDS, TYPES))
}
