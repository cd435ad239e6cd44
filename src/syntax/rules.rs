//! Pattern rules for syntax highlighting
//!
//! This module defines the rule type used to classify spans of
//! source code at a scan position.

use std::collections::HashSet;
use std::fmt;

use regex::Regex;

use super::tokens::TokenKind;

/// Name of the capture group holding the token span of a context rule
const TOKEN_GROUP: &str = "tok";

/// A single pattern rule
///
/// Rules are evaluated in declared order. A rule built from a flat word
/// list (keywords, types) is flagged so scanners may short-circuit it.
#[derive(Clone)]
pub struct TokenRule {
    /// Token kind to assign to matches
    pub kind: TokenKind,
    /// Compiled regex pattern
    pattern: Regex,
    /// Whether the pattern carries trailing context outside the token
    has_context: bool,
    /// Whether this rule was synthesized from a word list
    is_word_list: bool,
    /// The source words, when built with [`TokenRule::words`]
    words: Option<HashSet<String>>,
}

impl TokenRule {
    /// Create a new pattern rule
    pub fn new(kind: TokenKind, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            kind,
            pattern: Regex::new(pattern)?,
            has_context: false,
            is_word_list: false,
            words: None,
        })
    }

    /// Create a rule whose match must be followed by `trailing`
    ///
    /// The token covers only the text matched by `pattern`; the trailing
    /// context is required but not consumed.
    pub fn with_context(kind: TokenKind, pattern: &str, trailing: &str) -> Result<Self, regex::Error> {
        let combined = format!("(?P<{TOKEN_GROUP}>{pattern})(?:{trailing})");
        Ok(Self {
            kind,
            pattern: Regex::new(&combined)?,
            has_context: true,
            is_word_list: false,
            words: None,
        })
    }

    /// Create a word-boundary rule like `\b(?:a|b|c)\b`
    ///
    /// Longer words are tried first so that a word is never shadowed by
    /// one of its prefixes.
    pub fn words<S: AsRef<str>>(words: &[S], kind: TokenKind) -> Result<Self, regex::Error> {
        let mut escaped: Vec<String> = words.iter().map(|w| regex::escape(w.as_ref())).collect();
        escaped.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        let pattern = format!(r"\b(?:{})\b", escaped.join("|"));
        Ok(Self {
            kind,
            pattern: Regex::new(&pattern)?,
            has_context: false,
            is_word_list: true,
            words: Some(words.iter().map(|w| w.as_ref().to_string()).collect()),
        })
    }

    /// Create a word-list rule from a hand-written pattern
    ///
    /// Used for alternations that need flags (e.g. case-insensitive SQL
    /// keywords); such rules carry no word set and are never fast-pathed.
    pub fn word_list(kind: TokenKind, pattern: &str) -> Result<Self, regex::Error> {
        let mut rule = Self::new(kind, pattern)?;
        rule.is_word_list = true;
        Ok(rule)
    }

    /// Whether this rule was synthesized from a word list
    pub fn is_word_list(&self) -> bool {
        self.is_word_list
    }

    /// The words this rule was built from, if any
    pub fn word_set(&self) -> Option<&HashSet<String>> {
        self.words.as_ref()
    }

    /// The compiled pattern source
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Find the first match at or after `start`
    ///
    /// Returns the byte range of the token. Word boundaries and anchors see
    /// the whole haystack, not just the text after `start`.
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start > text.len() {
            return None;
        }
        if self.has_context {
            let caps = self.pattern.captures_at(text, start)?;
            let token = caps.name(TOKEN_GROUP)?;
            return Some((token.start(), token.end()));
        }
        self.pattern.find_at(text, start).map(|m| (m.start(), m.end()))
    }

    /// Length of the match anchored exactly at `pos`, if any
    pub fn match_len_at(&self, text: &str, pos: usize) -> Option<usize> {
        match self.find_at(text, pos) {
            Some((start, end)) if start == pos && end > start => Some(end - start),
            _ => None,
        }
    }
}

impl fmt::Debug for TokenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRule")
            .field("kind", &self.kind)
            .field("pattern", &self.pattern.as_str())
            .field("is_word_list", &self.is_word_list)
            .finish()
    }
}
