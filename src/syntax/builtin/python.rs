//! Python and Lua language definitions

use super::{context_rule, rule, words, CALL, DECIMAL, DOUBLE_QUOTED, HASH_COMMENT, IDENTIFIER, OPERATORS, SINGLE_QUOTED};
use crate::syntax::language::{LanguageDefinition, LanguageFastPath, LanguageId};
use crate::syntax::tokens::TokenKind;

const PYTHON_KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif", "else",
    "except", "False", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "None",
    "nonlocal", "not", "or", "pass", "raise", "return", "True", "try", "while", "with", "yield",
];

const PYTHON_TYPES: &[&str] = &["int", "float", "str", "bytes", "bool", "list", "dict", "set", "tuple", "object", "type"];

const LUA_KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "if", "in", "local",
    "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

const LUA_TYPES: &[&str] = &["string", "number", "table", "boolean", "function"];

/// Create Python language definition
pub(crate) fn python_language() -> LanguageDefinition {
    let rules = vec![
        rule(TokenKind::COMMENT, HASH_COMMENT),
        rule(TokenKind::STRING, r#""""[\s\S]*?""""#),
        rule(TokenKind::STRING, r"'''[\s\S]*?'''"),
        rule(TokenKind::STRING, DOUBLE_QUOTED),
        rule(TokenKind::STRING, SINGLE_QUOTED),
        rule(TokenKind::NUMBER, r"\b0x[0-9a-fA-F]+\b"),
        rule(TokenKind::NUMBER, DECIMAL),
        words(TokenKind::KEYWORD, PYTHON_KEYWORDS),
        words(TokenKind::TYPE, PYTHON_TYPES),
        context_rule(TokenKind::FUNCTION, IDENTIFIER, CALL),
        rule(TokenKind::OPERATOR, OPERATORS),
        rule(TokenKind::PUNCTUATION, r"[\[\]{}().,;:]"),
    ];
    LanguageDefinition::new(LanguageId::PYTHON, "Python", rules)
        .with_fast_path(LanguageFastPath::new(PYTHON_KEYWORDS, PYTHON_TYPES))
}

/// Create Lua language definition
pub(crate) fn lua_language() -> LanguageDefinition {
    let rules = vec![
        rule(TokenKind::COMMENT, r"--\[\[[\s\S]*?\]\]"),
        rule(TokenKind::COMMENT, r"--[^\n\r]*"),
        rule(TokenKind::STRING, r"\[\[[\s\S]*?\]\]"),
        rule(TokenKind::STRING, DOUBLE_QUOTED),
        rule(TokenKind::STRING, SINGLE_QUOTED),
        rule(TokenKind::NUMBER, DECIMAL),
        words(TokenKind::KEYWORD, LUA_KEYWORDS),
        words(TokenKind::TYPE, LUA_TYPES),
        context_rule(TokenKind::FUNCTION, IDENTIFIER, CALL),
        rule(TokenKind::OPERATOR, OPERATORS),
        rule(TokenKind::PUNCTUATION, r"[\[\]{}().,;:]"),
    ];
    LanguageDefinition::new(LanguageId::LUA, "Lua", rules).with_fast_path(LanguageFastPath::new(LUA_KEYWORDS, LUA_TYPES))
}
