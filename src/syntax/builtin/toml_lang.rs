//! TOML language definition

use super::{context_rule, rule, words, DOUBLE_QUOTED, HASH_COMMENT, OPERATORS, SIGNED_DECIMAL, SINGLE_QUOTED};
use crate::syntax::language::{LanguageDefinition, LanguageId};
use crate::syntax::tokens::TokenKind;

/// Create TOML language definition
pub(crate) fn toml_language() -> LanguageDefinition {
    let rules = vec![
        rule(TokenKind::COMMENT, HASH_COMMENT),
        // Multi-line strings
        rule(TokenKind::STRING, r#""""[\s\S]*?""""#),
        rule(TokenKind::STRING, r"'''[\s\S]*?'''"),
        rule(TokenKind::STRING, DOUBLE_QUOTED),
        rule(TokenKind::STRING, SINGLE_QUOTED),
        rule(TokenKind::NUMBER, SIGNED_DECIMAL),
        words(TokenKind::KEYWORD, &["true", "false"]),
        // Bare keys at line start
        context_rule(TokenKind::PROPERTY, r"(?m)^[A-Za-z0-9_.-]+", r"\s*="),
        rule(TokenKind::OPERATOR, OPERATORS),
        rule(TokenKind::PUNCTUATION, r"[\[\]{}(),;]"),
    ];
    LanguageDefinition::new(LanguageId::TOML, "TOML", rules)
}
