//! Web languages: PHP, markup, and stylesheets

use super::{
    context_rule, css_rules, markup_rules, rule, words, CALL, DECIMAL, DOUBLE_QUOTED, HASH_COMMENT, IDENTIFIER,
    OPERATORS, SINGLE_QUOTED,
};
use crate::syntax::language::{LanguageDefinition, LanguageFastPath, LanguageId};
use crate::syntax::rules::TokenRule;
use crate::syntax::tokens::TokenKind;

const PHP_KEYWORDS: &[&str] = &[
    "abstract", "array", "as", "break", "case", "catch", "class", "clone", "const", "continue",
    "declare", "default", "do", "echo", "else", "elseif", "empty", "enddeclare", "endfor", "endforeach",
    "endif", "endswitch", "endwhile", "eval", "exit", "extends", "final", "finally", "for", "foreach",
    "function", "global", "goto", "if", "implements", "include", "include_once", "instanceof", "interface",
    "isset", "list", "namespace", "new", "null", "print", "private", "protected", "public", "require",
    "require_once", "return", "static", "switch", "throw", "trait", "try", "unset", "use", "var", "while",
    "true", "false",
];

const PHP_TYPES: &[&str] = &["string", "int", "float", "bool", "array", "callable", "iterable", "object", "void", "mixed"];

pub(crate) fn php_language() -> LanguageDefinition {
    let rules = vec![
        rule(TokenKind::COMMENT, r"//[^\n\r]*"),
        rule(TokenKind::COMMENT, HASH_COMMENT),
        rule(TokenKind::COMMENT, r"/\*[\s\S]*?\*/"),
        rule(TokenKind::STRING, DOUBLE_QUOTED),
        rule(TokenKind::STRING, SINGLE_QUOTED),
        rule(TokenKind::NUMBER, DECIMAL),
        rule(TokenKind::KEYWORD, r"<\?php"),
        words(TokenKind::KEYWORD, PHP_KEYWORDS),
        words(TokenKind::TYPE, PHP_TYPES),
        rule(TokenKind::PROPERTY, r"\$[A-Za-z_][A-Za-z0-9_]*"),
        context_rule(TokenKind::FUNCTION, IDENTIFIER, CALL),
        rule(TokenKind::OPERATOR, OPERATORS),
        rule(TokenKind::PUNCTUATION, r"[\[\]{}().,;]"),
    ];
    LanguageDefinition::new(LanguageId::PHP, "PHP", rules)
        .with_fast_path(LanguageFastPath::new(PHP_KEYWORDS, PHP_TYPES))
}

fn important() -> TokenRule {
    rule(TokenKind::KEYWORD, r"!important\b")
}

fn sass_variable() -> TokenRule {
    rule(TokenKind::PROPERTY, r"\$[A-Za-z_-][A-Za-z0-9_-]*")
}

pub(crate) fn css_language() -> LanguageDefinition {
    LanguageDefinition::new(LanguageId::CSS, "CSS", css_rules(vec![important()]))
}

pub(crate) fn scss_language() -> LanguageDefinition {
    LanguageDefinition::new(LanguageId::SCSS, "SCSS", css_rules(vec![sass_variable(), important()]))
}

pub(crate) fn sass_language() -> LanguageDefinition {
    LanguageDefinition::new(LanguageId::SASS, "Sass", css_rules(vec![sass_variable(), important()]))
}

pub(crate) fn less_language() -> LanguageDefinition {
    LanguageDefinition::new(LanguageId::LESS, "Less", css_rules(vec![important()]))
}

pub(crate) fn html_language() -> LanguageDefinition {
    let rules = markup_rules(vec![rule(TokenKind::KEYWORD, r"(?i)<!doctype[\s\S]*?>")]);
    LanguageDefinition::new(LanguageId::HTML, "HTML", rules)
}

pub(crate) fn xml_language() -> LanguageDefinition {
    let rules = markup_rules(vec![
        rule(TokenKind::KEYWORD, r"<\?xml[\s\S]*?\?>"),
        rule(TokenKind::STRING, r"<!\[CDATA\[[\s\S]*?\]\]>"),
    ]);
    LanguageDefinition::new(LanguageId::XML, "XML", rules)
}
