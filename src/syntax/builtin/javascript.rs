//! JavaScript and TypeScript language definitions, with their JSX variants

use super::{c_style_rules, context_rule, rule, DOUBLE_QUOTED, SINGLE_QUOTED};
use crate::syntax::language::{LanguageDefinition, LanguageFastPath, LanguageId};
use crate::syntax::rules::TokenRule;
use crate::syntax::tokens::TokenKind;

const JS_KEYWORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "export", "extends", "finally", "for", "function", "if", "import", "in", "instanceof", "let",
    "new", "return", "super", "switch", "this", "throw", "try", "typeof", "var", "void", "while", "with",
    "yield", "true", "false", "null", "undefined",
];

const TS_KEYWORDS: &[&str] = &[
    "any", "as", "asserts", "async", "await", "bigint", "boolean", "break", "case", "catch", "class", "const",
    "continue", "debugger", "declare", "default", "delete", "do", "else", "enum", "export", "extends",
    "false", "finally", "for", "from", "function", "get", "if", "implements", "import", "in", "infer",
    "instanceof", "interface", "is", "keyof", "let", "module", "namespace", "never", "new", "null",
    "number", "object", "package", "private", "protected", "public", "readonly", "return", "satisfies",
    "set", "static", "string", "super", "switch", "symbol", "this", "throw", "true", "try", "type",
    "typeof", "undefined", "unique", "unknown", "var", "void", "while", "with", "yield",
];

const TYPES: &[&str] = &[
    "String", "Number", "Boolean", "Object", "Array", "Map", "Set", "Date", "RegExp", "Promise", "Error",
    "Symbol", "BigInt",
];

const STRINGS: &[&str] = &[r"`[\s\S]*?`", DOUBLE_QUOTED, SINGLE_QUOTED];

/// Tag and attribute rules layered on top for JSX/TSX
fn jsx_rules() -> Vec<TokenRule> {
    vec![
        rule(TokenKind::KEYWORD, r"</?[A-Za-z][A-Za-z0-9:_-]*"),
        context_rule(TokenKind::PROPERTY, r"\b[A-Za-z_:][A-Za-z0-9:._-]*\b", r"\s*="),
    ]
}

fn build(id: LanguageId, name: &str, keywords: &[&str], extra: Vec<TokenRule>) -> LanguageDefinition {
    let rules = c_style_rules(keywords, TYPES, STRINGS, extra);
    LanguageDefinition::new(id, name, rules).with_fast_path(LanguageFastPath::new(keywords, TYPES))
}

pub(crate) fn javascript_language() -> LanguageDefinition {
    build(LanguageId::JAVASCRIPT, "JavaScript", JS_KEYWORDS, Vec::new())
}

pub(crate) fn jsx_language() -> LanguageDefinition {
    build(LanguageId::JSX, "JSX", JS_KEYWORDS, jsx_rules())
}

pub(crate) fn typescript_language() -> LanguageDefinition {
    build(LanguageId::TYPESCRIPT, "TypeScript", TS_KEYWORDS, Vec::new())
}

pub(crate) fn tsx_language() -> LanguageDefinition {
    build(LanguageId::TSX, "TSX", TS_KEYWORDS, jsx_rules())
}
