//! Syntax module
//!
//! This module provides the tokenizing half of the highlighter:
//! - Token kinds and tokens
//! - Pattern rules and language definitions
//! - The language registry with the built-in tables
//! - The longest-match tokenizer and the fenced-Markdown tokenizer

mod tokens;
mod rules;
mod language;
mod registry;
mod tokenizer;
mod markdown;
pub(crate) mod builtin;

pub use tokens::{coalesce, Token, TokenKind};
pub use rules::TokenRule;
pub use language::{LanguageDefinition, LanguageFastPath, LanguageId};
pub use registry::LanguageRegistry;
pub use tokenizer::{RegexTokenizer, TokenizerMetrics};
pub use markdown::MarkdownTokenizer;
