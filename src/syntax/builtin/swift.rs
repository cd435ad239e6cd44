//! Swift language definition

use super::{c_style_rules, rule, DOUBLE_QUOTED};
use crate::syntax::language::{LanguageDefinition, LanguageFastPath, LanguageId};
use crate::syntax::tokens::TokenKind;

const KEYWORDS: &[&str] = &[
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import", "init",
    "inout", "internal", "let", "operator", "private", "protocol", "public", "static", "struct", "subscript",
    "typealias", "var", "break", "case", "continue", "default", "defer", "do", "else", "fallthrough", "for",
    "guard", "if", "in", "repeat", "return", "switch", "where", "while", "as", "catch", "false", "is", "nil",
    "rethrows", "super", "self", "Self", "throw", "throws", "true", "try", "Any",
];

const TYPES: &[&str] = &[
    "Bool", "Int", "Int8", "Int16", "Int32", "Int64", "UInt", "UInt8", "UInt16", "UInt32", "UInt64",
    "Float", "Double", "String", "Character", "Substring", "Array", "Dictionary", "Set", "Optional",
    "Result", "Error", "Never", "Void",
];

/// Create Swift language definition
pub(crate) fn swift_language() -> LanguageDefinition {
    let rules = c_style_rules(
        KEYWORDS,
        TYPES,
        &[r#""""[\s\S]*?""""#, DOUBLE_QUOTED],
        vec![
            // compiler directives (#if, #available) and attributes (@MainActor)
            rule(TokenKind::KEYWORD, r"#\w+"),
            rule(TokenKind::KEYWORD, r"@[A-Za-z_][A-Za-z0-9_]*\b"),
        ],
    );
    LanguageDefinition::new(LanguageId::SWIFT, "Swift", rules).with_fast_path(LanguageFastPath::new(KEYWORDS, TYPES))
}
