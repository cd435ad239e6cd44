//! Markdown tokenizer with fenced code blocks
//!
//! Prose is scanned with the Markdown rules. Lines between an opening and
//! closing fence are batched into one segment and scanned with the rules of
//! the fence's language, with offsets translated back into the document.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::language::{LanguageDefinition, LanguageId};
use super::registry::LanguageRegistry;
use super::tokenizer::RegexTokenizer;
use super::tokens::{Token, TokenKind};

/// A parsed fence line
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fence<'a> {
    marker: char,
    count: usize,
    language: Option<&'a str>,
}

/// What an open fence contains
#[derive(Debug, Clone)]
struct OpenFence {
    marker: char,
    count: usize,
    language: Option<LanguageId>,
}

/// Tokenizer for documents that embed other languages in fences
pub struct MarkdownTokenizer<'r> {
    prose: RegexTokenizer,
    registry: &'r LanguageRegistry,
}

impl<'r> MarkdownTokenizer<'r> {
    /// Create a tokenizer from the Markdown definition and a registry
    pub fn new(markdown: Arc<LanguageDefinition>, registry: &'r LanguageRegistry) -> Self {
        Self {
            prose: RegexTokenizer::new(markdown),
            registry,
        }
    }

    /// Tokenize a whole document
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.scan(text, |token| tokens.push(token));
        tokens
    }

    /// Stream tokens in document order
    pub fn scan<F: FnMut(Token)>(&self, text: &str, mut emit: F) {
        let mut cache: HashMap<LanguageId, RegexTokenizer> = HashMap::new();
        let mut fence: Option<OpenFence> = None;
        let mut segment_start = 0;
        let mut line_start = 0;

        while line_start < text.len() {
            let line_end = text[line_start..]
                .find('\n')
                .map_or(text.len(), |offset| line_start + offset + 1);
            let line = text[line_start..line_end].trim();

            if let Some(parsed) = parse_fence(line) {
                match &fence {
                    None => {
                        self.scan_prose(text, segment_start, line_start, &mut emit);
                        self.scan_prose(text, line_start, line_end, &mut emit);
                        fence = Some(OpenFence {
                            marker: parsed.marker,
                            count: parsed.count,
                            language: self.resolve_language(parsed.language),
                        });
                        segment_start = line_end;
                    }
                    Some(open) if parsed.marker == open.marker && parsed.count >= open.count => {
                        self.scan_code(text, segment_start, line_start, open.language.as_ref(), &mut cache, &mut emit);
                        self.scan_prose(text, line_start, line_end, &mut emit);
                        fence = None;
                        segment_start = line_end;
                    }
                    Some(_) => {}
                }
            }

            line_start = line_end;
        }

        match fence {
            Some(open) => {
                self.scan_code(text, segment_start, text.len(), open.language.as_ref(), &mut cache, &mut emit)
            }
            None => self.scan_prose(text, segment_start, text.len(), &mut emit),
        }
    }

    fn scan_prose(&self, text: &str, start: usize, end: usize, emit: &mut dyn FnMut(Token)) {
        if start >= end {
            return;
        }
        self.prose.scan(&text[start..end], |token| emit(token.shifted(start)));
    }

    fn scan_code(
        &self,
        text: &str,
        start: usize,
        end: usize,
        language: Option<&LanguageId>,
        cache: &mut HashMap<LanguageId, RegexTokenizer>,
        emit: &mut dyn FnMut(Token),
    ) {
        if start >= end {
            return;
        }
        let Some(id) = language else {
            emit(Token::new(TokenKind::PLAIN, start, end - start));
            return;
        };
        if !cache.contains_key(id) {
            let Some(definition) = self.registry.language(id) else {
                emit(Token::new(TokenKind::PLAIN, start, end - start));
                return;
            };
            cache.insert(id.clone(), RegexTokenizer::new(definition));
        }
        if let Some(tokenizer) = cache.get(id) {
            tokenizer.scan(&text[start..end], |token| emit(token.shifted(start)));
        }
    }

    /// Map a fence tag to a registered, non-Markdown language
    fn resolve_language(&self, tag: Option<&str>) -> Option<LanguageId> {
        let tag = tag.filter(|t| !t.is_empty())?;
        let normalized = tag.to_lowercase();

        let id = match fence_alias(&normalized) {
            Some(id) => id,
            None => LanguageId::new(normalized),
        };
        let Some(definition) = self.registry.language(&id) else {
            debug!(tag, "unknown fence language, rendering as plain");
            return None;
        };
        if definition.embeds_fenced_code {
            debug!(tag, "fence refers to markdown itself, rendering as plain");
            return None;
        }
        Some(id)
    }
}

fn fence_alias(tag: &str) -> Option<LanguageId> {
    let id = match tag {
        "js" => LanguageId::JAVASCRIPT,
        "jsx" => LanguageId::JSX,
        "ts" => LanguageId::TYPESCRIPT,
        "tsx" => LanguageId::TSX,
        "c++" | "cpp" | "cxx" | "h++" | "cc" => LanguageId::CPP,
        "sh" | "shell" | "bash" => LanguageId::BASH,
        "zsh" => LanguageId::ZSH,
        "yml" => LanguageId::YAML,
        "md" | "markdown" => LanguageId::MARKDOWN,
        "py" => LanguageId::PYTHON,
        "rb" => LanguageId::RUBY,
        "rs" => LanguageId::RUST,
        _ => return None,
    };
    Some(id)
}

/// Parse a trimmed line as a fence: three or more of `` ` `` or `~`,
/// optionally followed by a language tag
fn parse_fence(line: &str) -> Option<Fence<'_>> {
    let marker = line.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let count = line.chars().take_while(|c| *c == marker).count();
    if count < 3 {
        return None;
    }

    // The marker is ASCII, so `count` is also its byte length.
    let rest = line[count..].trim_start();
    let language = rest.split_whitespace().next();
    Some(Fence { marker, count, language })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<Token> {
        let registry = LanguageRegistry::with_builtins();
        let markdown = registry.language(&LanguageId::MARKDOWN).unwrap();
        MarkdownTokenizer::new(markdown, &registry).tokenize(text)
    }

    fn assert_covers(tokens: &[Token], text: &str) {
        let mut pos = 0;
        for token in tokens {
            assert_eq!(token.start, pos, "gap or overlap at {pos}");
            pos = token.end();
        }
        assert_eq!(pos, text.len());
    }

    #[test]
    fn test_parse_fence() {
        assert_eq!(
            parse_fence("```swift"),
            Some(Fence { marker: '`', count: 3, language: Some("swift") })
        );
        assert_eq!(
            parse_fence("~~~~  rust extra"),
            Some(Fence { marker: '~', count: 4, language: Some("rust") })
        );
        assert_eq!(parse_fence("```"), Some(Fence { marker: '`', count: 3, language: None }));
        assert_eq!(parse_fence("``"), None);
        assert_eq!(parse_fence("text ```"), None);
    }

    #[test]
    fn test_swift_fence() {
        let text = "Intro\n```swift\nlet x = 1\n```\nDone";
        let tokens = tokenize(text);
        assert_covers(&tokens, text);

        let open = tokens.iter().find(|t| t.start == 6).unwrap();
        assert_eq!(open.kind, TokenKind::KEYWORD);
        assert_eq!(open.text(text), "```swift");

        let let_kw = tokens.iter().find(|t| t.text(text) == "let").unwrap();
        assert_eq!(let_kw.kind, TokenKind::KEYWORD);
        assert_eq!(let_kw.start, 15);

        let number = tokens.iter().find(|t| t.text(text) == "1").unwrap();
        assert_eq!(number.kind, TokenKind::NUMBER);

        let close = tokens.iter().find(|t| t.start == 25).unwrap();
        assert_eq!(close.text(text), "```");
        assert_eq!(close.kind, TokenKind::KEYWORD);
    }

    #[test]
    fn test_unknown_language_is_plain() {
        let text = "```nosuchlang\nlet x = 1\n```\n";
        let tokens = tokenize(text);
        assert_covers(&tokens, text);
        let body = tokens.iter().find(|t| t.start == 14).unwrap();
        assert_eq!(body.kind, TokenKind::PLAIN);
        assert_eq!(body.text(text), "let x = 1\n");
    }

    #[test]
    fn test_markdown_fence_does_not_recurse() {
        let text = "```md\n# Title\n```\n";
        let tokens = tokenize(text);
        assert_covers(&tokens, text);
        let body = tokens.iter().find(|t| t.start == 6).unwrap();
        assert_eq!(body.kind, TokenKind::PLAIN);
        assert_eq!(body.text(text), "# Title\n");
    }

    #[test]
    fn test_unterminated_fence_runs_to_end() {
        let text = "```rust\nfn main() {}";
        let tokens = tokenize(text);
        assert_covers(&tokens, text);
        let fn_kw = tokens.iter().find(|t| t.text(text) == "fn").unwrap();
        assert_eq!(fn_kw.kind, TokenKind::KEYWORD);
    }

    #[test]
    fn test_close_requires_same_marker_and_length() {
        let text = "````py\nx = 1\n```\n~~~~\nif x:\n````\nafter";
        let tokens = tokenize(text);
        assert_covers(&tokens, text);
        // "```" and "~~~~" are inside the four-backtick python fence
        let if_kw = tokens.iter().find(|t| t.text(text) == "if").unwrap();
        assert_eq!(if_kw.kind, TokenKind::KEYWORD);
        let last = tokens.last().unwrap();
        assert_eq!(last.text(text), "after");
    }

    #[test]
    fn test_alias_tags() {
        let text = "```JS\nconst a = 1\n```";
        let tokens = tokenize(text);
        let const_kw = tokens.iter().find(|t| t.text(text) == "const").unwrap();
        assert_eq!(const_kw.kind, TokenKind::KEYWORD);
    }

    #[test]
    fn test_crlf_fence_lines() {
        let text = "```rust\r\nlet a = 1;\r\n```\r\ntext";
        let tokens = tokenize(text);
        assert_covers(&tokens, text);
        let let_kw = tokens.iter().find(|t| t.text(text) == "let").unwrap();
        assert_eq!(let_kw.kind, TokenKind::KEYWORD);
    }
}
