//! Markdown language definition
//!
//! These rules cover prose only. Fence interiors are handed to the
//! fenced language by the Markdown tokenizer.

use super::rule;
use crate::syntax::language::{LanguageDefinition, LanguageId};
use crate::syntax::tokens::TokenKind;

/// Create Markdown language definition
pub(crate) fn markdown_language() -> LanguageDefinition {
    let rules = vec![
        // Fence lines
        rule(TokenKind::KEYWORD, r"(?m)^\s*```.*$"),
        rule(TokenKind::KEYWORD, r"(?m)^\s*~~~.*$"),
        // Headers
        rule(TokenKind::KEYWORD, r"(?m)^#{1,6}\s+.*$"),
        // Blockquotes and list markers
        rule(TokenKind::PUNCTUATION, r"(?m)^\s*>\s+"),
        rule(TokenKind::PUNCTUATION, r"(?m)^\s*(?:[-*+]\s+|\d+\.\s+)"),
        // Inline code
        rule(TokenKind::STRING, r"`[^`]+`"),
        // Bold and italic
        rule(TokenKind::KEYWORD, r"\*\*[^*]+\*\*"),
        rule(TokenKind::KEYWORD, r"__[^_]+__"),
        rule(TokenKind::KEYWORD, r"\*[^*]+\*"),
        rule(TokenKind::KEYWORD, r"_[^_]+_"),
        // Links
        rule(TokenKind::STRING, r"\[[^\]]+\]\([^)]+\)"),
    ];
    LanguageDefinition::new(LanguageId::MARKDOWN, "Markdown", rules).with_fenced_code()
}
