//! Built-in language definitions
//!
//! This module provides syntax highlighting definitions for
//! common programming languages, plus the shared rule builders
//! (C-style, markup, stylesheet) most of them are assembled from.

mod c;
mod data;
mod go;
mod java;
mod javascript;
mod markdown;
mod python;
mod ruby;
mod rust;
mod shell;
pub(crate) mod swift;
mod toml_lang;
mod web;

use super::language::{LanguageDefinition, LanguageId};
use super::rules::TokenRule;
use super::tokens::TokenKind;

/// Double-quoted string with backslash escapes
pub(crate) const DOUBLE_QUOTED: &str = r#""(?:\\.|[^"\\])*""#;
/// Single-quoted string with backslash escapes
pub(crate) const SINGLE_QUOTED: &str = r"'(?:\\.|[^'\\])*'";
/// Decimal integer or float
pub(crate) const DECIMAL: &str = r"\b\d+(?:\.\d+)?\b";
/// Decimal with optional leading minus (data formats)
pub(crate) const SIGNED_DECIMAL: &str = r"\b-?\d+(?:\.\d+)?\b";
/// Run of operator characters
pub(crate) const OPERATORS: &str = r"[+\-*/%&|^!~=<>?:]+";
/// Identifier (used with a `\s*\(` trailing context for calls)
pub(crate) const IDENTIFIER: &str = r"\b[A-Za-z_][A-Za-z0-9_]*\b";
/// Trailing context of a call
pub(crate) const CALL: &str = r"\s*\(";
/// `#` line comment
pub(crate) const HASH_COMMENT: &str = r"#[^\n\r]*";

/// Get all built-in language definitions, aliases included
pub fn all_languages() -> Vec<LanguageDefinition> {
    let objective_c = c::objective_c_language();
    let cpp = c::cpp_language();
    let javascript = javascript::javascript_language();
    let typescript = javascript::typescript_language();
    let python = python::python_language();
    let ruby = ruby::ruby_language();
    let go = go::go_language();
    let csharp = java::csharp_language();
    let bash = shell::bash_language();
    let yaml = data::yaml_language();
    let markdown = markdown::markdown_language();

    vec![
        swift::swift_language(),
        objective_c.alias(LanguageId::OBJC, None),
        objective_c,
        c::c_language(),
        cpp.alias(LanguageId::CPLUSPLUS, Some("C++")),
        cpp.alias(LanguageId::CXX, Some("C++")),
        cpp,
        javascript.alias(LanguageId::JS, None),
        javascript,
        javascript::jsx_language(),
        typescript.alias(LanguageId::TS, None),
        typescript,
        javascript::tsx_language(),
        python.alias(LanguageId::PY, None),
        python,
        ruby.alias(LanguageId::RB, None),
        ruby,
        go.alias(LanguageId::GOLANG, None),
        go,
        rust::rust_language(),
        java::kotlin_language(),
        java::java_language(),
        csharp.alias(LanguageId::CS, None),
        csharp,
        web::php_language(),
        java::dart_language(),
        python::lua_language(),
        bash.alias(LanguageId::SH, Some("Shell")),
        bash.alias(LanguageId::ZSH, Some("Shell")),
        bash,
        data::sql_language(),
        web::css_language(),
        web::scss_language(),
        web::sass_language(),
        web::less_language(),
        web::html_language(),
        web::xml_language(),
        data::json_language(),
        yaml.alias(LanguageId::YML, None),
        yaml,
        toml_lang::toml_language(),
        markdown.alias(LanguageId::MD, None),
        markdown,
        shell::dockerfile_language(),
        shell::makefile_language(),
    ]
}

/// Compile a built-in pattern
///
/// Built-in patterns are fixed at compile time; failing to compile one is a
/// programming error.
pub(crate) fn rule(kind: TokenKind, pattern: &str) -> TokenRule {
    TokenRule::new(kind, pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// Compile a built-in pattern that must be followed by `trailing`
pub(crate) fn context_rule(kind: TokenKind, pattern: &str, trailing: &str) -> TokenRule {
    TokenRule::with_context(kind, pattern, trailing)
        .unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// Compile a built-in word list
pub(crate) fn words(kind: TokenKind, words: &[&str]) -> TokenRule {
    TokenRule::words(words, kind).unwrap_or_else(|e| panic!("invalid built-in word list: {e}"))
}

/// Escaped alternation of `words`, longest first
pub(crate) fn alternation(words: &[&str]) -> String {
    let mut escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    escaped.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    escaped.join("|")
}

/// Rule set shared by the C family
///
/// Comments, strings, numbers, keywords, types, call and member
/// heuristics, operators, punctuation, then any language extras.
pub(crate) fn c_style_rules(
    keywords: &[&str],
    types: &[&str],
    strings: &[&str],
    extra: Vec<TokenRule>,
) -> Vec<TokenRule> {
    let mut rules = vec![
        rule(TokenKind::COMMENT, r"//[^\n\r]*"),
        rule(TokenKind::COMMENT, r"/\*[\s\S]*?\*/"),
    ];
    rules.extend(strings.iter().map(|pattern| rule(TokenKind::STRING, pattern)));
    rules.extend([
        rule(TokenKind::NUMBER, r"\b0x[0-9a-fA-F]+\b"),
        rule(TokenKind::NUMBER, DECIMAL),
        words(TokenKind::KEYWORD, keywords),
        words(TokenKind::TYPE, types),
        context_rule(TokenKind::FUNCTION, IDENTIFIER, CALL),
        rule(TokenKind::PROPERTY, r"\.[A-Za-z_][A-Za-z0-9_]*\b"),
        rule(TokenKind::OPERATOR, OPERATORS),
        rule(TokenKind::PUNCTUATION, r"[\[\]{}().,;]"),
    ]);
    rules.extend(extra);
    rules
}

/// Rule set shared by HTML and XML
pub(crate) fn markup_rules(extra: Vec<TokenRule>) -> Vec<TokenRule> {
    let mut rules = vec![
        rule(TokenKind::COMMENT, r"<!--[\s\S]*?-->"),
        rule(TokenKind::STRING, DOUBLE_QUOTED),
        rule(TokenKind::STRING, SINGLE_QUOTED),
        rule(TokenKind::NUMBER, DECIMAL),
        rule(TokenKind::KEYWORD, r"</?[A-Za-z][A-Za-z0-9:_-]*"),
        context_rule(TokenKind::PROPERTY, r"\b[A-Za-z_:][A-Za-z0-9:._-]*\b", r"\s*="),
        rule(TokenKind::PUNCTUATION, r"[<>/=]"),
        rule(TokenKind::PUNCTUATION, r"[\[\]{}().,;:]"),
    ];
    rules.extend(extra);
    rules
}

/// Rule set shared by the stylesheet languages
pub(crate) fn css_rules(extra: Vec<TokenRule>) -> Vec<TokenRule> {
    let mut rules = vec![
        rule(TokenKind::COMMENT, r"/\*[\s\S]*?\*/"),
        rule(TokenKind::STRING, DOUBLE_QUOTED),
        rule(TokenKind::STRING, SINGLE_QUOTED),
        rule(TokenKind::NUMBER, r"#[0-9a-fA-F]{3,8}\b"),
        rule(TokenKind::NUMBER, DECIMAL),
        rule(TokenKind::KEYWORD, r"@[A-Za-z_-]+"),
        context_rule(TokenKind::PROPERTY, r"\b[A-Za-z_-]+", r"\s*:"),
        rule(TokenKind::TYPE, r"[.#][A-Za-z_-][A-Za-z0-9_-]*"),
        rule(TokenKind::OPERATOR, OPERATORS),
        rule(TokenKind::PUNCTUATION, r"[\[\]{}().,;:]"),
    ];
    rules.extend(extra);
    rules
}
