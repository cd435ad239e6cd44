//! Token kinds and tokens
//!
//! Token kinds are an open set: the built-in kinds are constants, and
//! embedding applications can mint their own with [`TokenKind::new`].

use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

/// Semantic token kind for syntax highlighting
///
/// Equality and hashing are exact, case-sensitive string comparison, so
/// `TokenKind::new("keyword") == TokenKind::KEYWORD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenKind(Cow<'static, str>);

impl TokenKind {
    /// Default/plain text (no special highlighting)
    pub const PLAIN: TokenKind = TokenKind(Cow::Borrowed("plain"));
    /// Language keywords (if, else, fn, let, etc.)
    pub const KEYWORD: TokenKind = TokenKind(Cow::Borrowed("keyword"));
    /// Type names (String, i32, etc.)
    pub const TYPE: TokenKind = TokenKind(Cow::Borrowed("type"));
    /// Numeric literals
    pub const NUMBER: TokenKind = TokenKind(Cow::Borrowed("number"));
    /// String literals
    pub const STRING: TokenKind = TokenKind(Cow::Borrowed("string"));
    /// Comments
    pub const COMMENT: TokenKind = TokenKind(Cow::Borrowed("comment"));
    /// Function names
    pub const FUNCTION: TokenKind = TokenKind(Cow::Borrowed("function"));
    /// Properties, attributes and variables
    pub const PROPERTY: TokenKind = TokenKind(Cow::Borrowed("property"));
    /// Punctuation (, ; { } etc.)
    pub const PUNCTUATION: TokenKind = TokenKind(Cow::Borrowed("punctuation"));
    /// Operators (+, -, *, /, etc.)
    pub const OPERATOR: TokenKind = TokenKind(Cow::Borrowed("operator"));

    /// All built-in kinds
    pub const BUILTIN: [TokenKind; 10] = [
        Self::PLAIN,
        Self::KEYWORD,
        Self::TYPE,
        Self::NUMBER,
        Self::STRING,
        Self::COMMENT,
        Self::FUNCTION,
        Self::PROPERTY,
        Self::PUNCTUATION,
        Self::OPERATOR,
    ];

    /// Create a custom token kind
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The kind's name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the plain kind
    pub fn is_plain(&self) -> bool {
        self.as_str() == "plain"
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TokenKind {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

/// A classified span of the input
///
/// Offsets are UTF-8 byte offsets into the text that was tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token kind
    pub kind: TokenKind,
    /// Byte offset where this token starts (inclusive)
    pub start: usize,
    /// Length in bytes
    pub len: usize,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, start: usize, len: usize) -> Self {
        Self { kind, start, len }
    }

    /// Byte offset where this token ends (exclusive)
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Byte range covered by this token
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The slice of `source` this token covers
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range()]
    }

    /// Copy of this token moved `offset` bytes to the right
    pub fn shifted(&self, offset: usize) -> Self {
        Self {
            kind: self.kind.clone(),
            start: self.start + offset,
            len: self.len,
        }
    }
}

/// Merge adjacent tokens of identical kind
///
/// Only contiguous tokens merge; running this twice gives the same result
/// as running it once.
pub fn coalesce(tokens: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Some(last) = merged.last_mut() {
            if last.kind == token.kind && last.end() == token.start {
                last.len += token.len;
                continue;
            }
        }
        merged.push(token);
    }
    merged
}
