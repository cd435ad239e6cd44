//! Longest-match regex tokenizer
//!
//! Scans left to right. At each position every rule is tried anchored at
//! that position; the longest match wins and ties go to the rule declared
//! first. Positions no rule matches become one grapheme of `plain`.
//! Adjacent tokens of the same kind are merged as they are produced.

use std::collections::HashSet;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use super::language::LanguageDefinition;
use super::tokens::{Token, TokenKind};

/// Counters collected by [`RegexTokenizer::tokenize_with_metrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerMetrics {
    /// Scan positions visited
    pub iterations: usize,
    /// Regex searches run
    pub rules_evaluated: usize,
    /// Regex searches that found a match
    pub matches_found: usize,
    /// Rules answered from the keyword/type sets
    pub fast_path_hits: usize,
    /// Graphemes emitted as fallback plain text
    pub fallback_units: usize,
    /// Tokens produced before merging
    pub tokens_emitted: usize,
    /// Merges of adjacent same-kind tokens
    pub coalesced_merges: usize,
}

/// How a rule is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Matcher {
    Regex,
    Keywords,
    Types,
}

/// Outcome of a fast-path probe
enum Probe {
    Hit(usize),
    Miss,
    /// Non-ASCII neighbourhood; defer to the regex
    Unknown,
}

/// Next known match of one rule, reused while the scan position has not passed it
#[derive(Debug, Clone, Copy, Default)]
struct RuleCache {
    next: Option<(usize, usize)>,
    exhausted: bool,
}

/// Tokenizer bound to one language's rule set
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    language: Arc<LanguageDefinition>,
    matchers: Vec<Matcher>,
}

impl RegexTokenizer {
    /// Create a tokenizer for a language
    pub fn new(language: Arc<LanguageDefinition>) -> Self {
        let matchers = language
            .rules
            .iter()
            .map(|rule| {
                let Some(fast_path) = language.fast_path.as_ref() else {
                    return Matcher::Regex;
                };
                let (Some(words), Some(set)) = (rule.word_set(), fast_path.set_for(&rule.kind)) else {
                    return Matcher::Regex;
                };
                if !rule.is_word_list() || words != set || !words.iter().all(|w| is_ascii_word(w)) {
                    return Matcher::Regex;
                }
                if rule.kind == TokenKind::KEYWORD {
                    Matcher::Keywords
                } else {
                    Matcher::Types
                }
            })
            .collect();
        Self { language, matchers }
    }

    /// The language this tokenizer scans
    pub fn language(&self) -> &LanguageDefinition {
        &self.language
    }

    /// Number of rules answered from the keyword/type sets
    pub fn fast_path_rules(&self) -> usize {
        self.matchers.iter().filter(|m| **m != Matcher::Regex).count()
    }

    /// Tokenize a whole string
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.scan_inner(text, None, &mut |token| tokens.push(token));
        tokens
    }

    /// Tokenize and report scan counters
    pub fn tokenize_with_metrics(&self, text: &str) -> (Vec<Token>, TokenizerMetrics) {
        let mut tokens = Vec::new();
        let mut metrics = TokenizerMetrics::default();
        self.scan_inner(text, Some(&mut metrics), &mut |token| tokens.push(token));
        (tokens, metrics)
    }

    /// Stream tokens to `emit` as they are produced
    pub fn scan<F: FnMut(Token)>(&self, text: &str, mut emit: F) {
        self.scan_inner(text, None, &mut emit);
    }

    fn scan_inner(&self, text: &str, mut metrics: Option<&mut TokenizerMetrics>, emit: &mut dyn FnMut(Token)) {
        let rules = &self.language.rules;
        let mut caches = vec![RuleCache::default(); rules.len()];
        let mut pending: Option<Token> = None;
        let mut pos = 0;

        let mut push = |token: Token, metrics: &mut Option<&mut TokenizerMetrics>| {
            if let Some(m) = metrics.as_deref_mut() {
                m.tokens_emitted += 1;
            }
            if let Some(current) = pending.as_mut() {
                if current.kind == token.kind && current.end() == token.start {
                    current.len += token.len;
                    if let Some(m) = metrics.as_deref_mut() {
                        m.coalesced_merges += 1;
                    }
                    return;
                }
            }
            if let Some(done) = pending.replace(token) {
                emit(done);
            }
        };

        while pos < text.len() {
            if let Some(m) = metrics.as_deref_mut() {
                m.iterations += 1;
            }

            let mut best: Option<(usize, usize)> = None;
            for (index, matcher) in self.matchers.iter().enumerate() {
                let len = match self.probe(*matcher, text, pos) {
                    Probe::Hit(len) => {
                        if let Some(m) = metrics.as_deref_mut() {
                            m.fast_path_hits += 1;
                        }
                        Some(len)
                    }
                    Probe::Miss => None,
                    Probe::Unknown => self.cached_match(index, &mut caches[index], text, pos, &mut metrics),
                };
                if let Some(len) = len {
                    // Strictly longer only: on a tie the earlier rule keeps the slot.
                    if best.map_or(true, |(best_len, _)| len > best_len) {
                        best = Some((len, index));
                    }
                }
            }

            match best {
                Some((len, index)) => {
                    push(Token::new(rules[index].kind.clone(), pos, len), &mut metrics);
                    pos += len;
                }
                None => {
                    let len = grapheme_len(text, pos);
                    if let Some(m) = metrics.as_deref_mut() {
                        m.fallback_units += 1;
                    }
                    push(Token::new(TokenKind::PLAIN, pos, len), &mut metrics);
                    pos += len;
                }
            }
        }

        if let Some(done) = pending {
            emit(done);
        }
    }

    fn cached_match(
        &self,
        index: usize,
        cache: &mut RuleCache,
        text: &str,
        pos: usize,
        metrics: &mut Option<&mut TokenizerMetrics>,
    ) -> Option<usize> {
        if cache.exhausted {
            return None;
        }
        let stale = cache.next.map_or(true, |(start, _)| start < pos);
        if stale {
            if let Some(m) = metrics.as_deref_mut() {
                m.rules_evaluated += 1;
            }
            cache.next = self.language.rules[index].find_at(text, pos);
            match cache.next {
                Some(_) => {
                    if let Some(m) = metrics.as_deref_mut() {
                        m.matches_found += 1;
                    }
                }
                None => cache.exhausted = true,
            }
        }
        match cache.next {
            Some((start, end)) if start == pos && end > start => Some(end - start),
            _ => None,
        }
    }

    fn probe(&self, matcher: Matcher, text: &str, pos: usize) -> Probe {
        let set = match (matcher, self.language.fast_path.as_ref()) {
            (Matcher::Keywords, Some(fast_path)) => &fast_path.keywords,
            (Matcher::Types, Some(fast_path)) => &fast_path.types,
            _ => return Probe::Unknown,
        };
        probe_word(set, text, pos)
    }
}

/// Classify the identifier run at `pos` against a word set
///
/// Equivalent to `\b(?:w1|w2|..)\b` when every word is ASCII `[A-Za-z0-9_]+`:
/// a match must start after a non-word character and end before one, so it
/// can only be the whole word run beginning at `pos`.
fn probe_word(set: &HashSet<String>, text: &str, pos: usize) -> Probe {
    let bytes = text.as_bytes();
    if let Some(&prev) = pos.checked_sub(1).and_then(|i| bytes.get(i)) {
        if !prev.is_ascii() {
            return Probe::Unknown;
        }
        if is_word_byte(prev) {
            return Probe::Miss;
        }
    }
    match bytes.get(pos) {
        Some(&b) if is_word_byte(b) => {}
        Some(&b) if !b.is_ascii() => return Probe::Unknown,
        _ => return Probe::Miss,
    }

    let end = bytes[pos..]
        .iter()
        .position(|&b| !is_word_byte(b))
        .map_or(bytes.len(), |offset| pos + offset);
    if bytes.get(end).is_some_and(|b| !b.is_ascii()) {
        return Probe::Unknown;
    }
    if set.contains(&text[pos..end]) {
        Probe::Hit(end - pos)
    } else {
        Probe::Miss
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_ascii_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(is_word_byte)
}

/// Byte length of the grapheme starting at `pos`
fn grapheme_len(text: &str, pos: usize) -> usize {
    text[pos..].graphemes(true).next().map_or(1, str::len)
}
