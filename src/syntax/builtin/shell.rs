//! Shell-like languages: Bash, Dockerfile, Makefile

use super::{alternation, context_rule, rule, words, DECIMAL, DOUBLE_QUOTED, HASH_COMMENT, OPERATORS, SINGLE_QUOTED};
use crate::syntax::language::{LanguageDefinition, LanguageFastPath, LanguageId};
use crate::syntax::tokens::TokenKind;

const BASH_KEYWORDS: &[&str] = &[
    "if", "then", "fi", "for", "do", "done", "while", "case", "esac", "in", "function", "select",
    "until", "elif", "else", "export", "return", "local", "readonly",
];

const DOCKER_INSTRUCTIONS: &[&str] = &[
    "FROM", "RUN", "CMD", "LABEL", "MAINTAINER", "EXPOSE", "ENV", "ADD", "COPY", "ENTRYPOINT",
    "VOLUME", "USER", "WORKDIR", "ARG", "ONBUILD", "STOPSIGNAL", "HEALTHCHECK", "SHELL",
];

/// Create Bash language definition
pub(crate) fn bash_language() -> LanguageDefinition {
    let rules = vec![
        rule(TokenKind::COMMENT, HASH_COMMENT),
        rule(TokenKind::STRING, DOUBLE_QUOTED),
        rule(TokenKind::STRING, SINGLE_QUOTED),
        rule(TokenKind::STRING, r"`[^`]*`"),
        rule(TokenKind::NUMBER, DECIMAL),
        words(TokenKind::KEYWORD, BASH_KEYWORDS),
        rule(TokenKind::PROPERTY, r"\$\{[^}]+\}"),
        rule(TokenKind::PROPERTY, r"\$[A-Za-z_][A-Za-z0-9_]*"),
        rule(TokenKind::OPERATOR, OPERATORS),
        rule(TokenKind::PUNCTUATION, r"[\[\]{}().,;]"),
    ];
    let empty: &[&str] = &[];
    LanguageDefinition::new(LanguageId::BASH, "Bash", rules).with_fast_path(LanguageFastPath::new(BASH_KEYWORDS, empty))
}

/// Create Dockerfile language definition
///
/// Instructions are only recognized at the start of a line, in any case.
pub(crate) fn dockerfile_language() -> LanguageDefinition {
    let instructions = format!(r"(?mi)^\s*(?:{})\b", alternation(DOCKER_INSTRUCTIONS));
    let rules = vec![
        rule(TokenKind::COMMENT, HASH_COMMENT),
        rule(TokenKind::STRING, DOUBLE_QUOTED),
        rule(TokenKind::STRING, SINGLE_QUOTED),
        rule(TokenKind::KEYWORD, &instructions),
        rule(TokenKind::PROPERTY, r"\$\{[^}]+\}"),
        rule(TokenKind::PROPERTY, r"\$[A-Za-z_][A-Za-z0-9_]*"),
        rule(TokenKind::NUMBER, DECIMAL),
        rule(TokenKind::OPERATOR, OPERATORS),
        rule(TokenKind::PUNCTUATION, r"[\[\]{}().,;:]"),
    ];
    LanguageDefinition::new(LanguageId::DOCKERFILE, "Dockerfile", rules)
}

/// Create Makefile language definition
pub(crate) fn makefile_language() -> LanguageDefinition {
    let rules = vec![
        rule(TokenKind::COMMENT, HASH_COMMENT),
        rule(TokenKind::STRING, DOUBLE_QUOTED),
        rule(TokenKind::STRING, SINGLE_QUOTED),
        context_rule(TokenKind::KEYWORD, r"(?m)^[A-Za-z0-9_.-]+", r"\s*:"),
        rule(TokenKind::PROPERTY, r"\$\([A-Za-z0-9_.-]+\)"),
        rule(TokenKind::PROPERTY, r"\$\{[^}]+\}"),
        rule(TokenKind::NUMBER, DECIMAL),
        rule(TokenKind::OPERATOR, OPERATORS),
        rule(TokenKind::PUNCTUATION, r"[\[\]{}().,;:]"),
    ];
    LanguageDefinition::new(LanguageId::MAKEFILE, "Makefile", rules)
}
