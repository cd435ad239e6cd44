//! Language definitions for syntax highlighting
//!
//! This module provides the LanguageDefinition struct that combines an
//! ordered rule list with optional keyword/type fast-path sets, plus the
//! open language identifier and file-name based detection.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use super::rules::TokenRule;
use super::tokens::TokenKind;

/// Language identifier
///
/// An open, case-sensitive key. Several identifiers may alias the same
/// definition (`"js"` and `"javascript"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageId(Cow<'static, str>);

impl LanguageId {
    pub const SWIFT: LanguageId = LanguageId(Cow::Borrowed("swift"));
    pub const OBJECTIVE_C: LanguageId = LanguageId(Cow::Borrowed("objective-c"));
    pub const OBJC: LanguageId = LanguageId(Cow::Borrowed("objc"));
    pub const C: LanguageId = LanguageId(Cow::Borrowed("c"));
    pub const CPP: LanguageId = LanguageId(Cow::Borrowed("cpp"));
    pub const CXX: LanguageId = LanguageId(Cow::Borrowed("cxx"));
    pub const CPLUSPLUS: LanguageId = LanguageId(Cow::Borrowed("c++"));
    pub const JAVASCRIPT: LanguageId = LanguageId(Cow::Borrowed("javascript"));
    pub const JS: LanguageId = LanguageId(Cow::Borrowed("js"));
    pub const JSX: LanguageId = LanguageId(Cow::Borrowed("jsx"));
    pub const TYPESCRIPT: LanguageId = LanguageId(Cow::Borrowed("typescript"));
    pub const TS: LanguageId = LanguageId(Cow::Borrowed("ts"));
    pub const TSX: LanguageId = LanguageId(Cow::Borrowed("tsx"));
    pub const PYTHON: LanguageId = LanguageId(Cow::Borrowed("python"));
    pub const PY: LanguageId = LanguageId(Cow::Borrowed("py"));
    pub const RUBY: LanguageId = LanguageId(Cow::Borrowed("ruby"));
    pub const RB: LanguageId = LanguageId(Cow::Borrowed("rb"));
    pub const GO: LanguageId = LanguageId(Cow::Borrowed("go"));
    pub const GOLANG: LanguageId = LanguageId(Cow::Borrowed("golang"));
    pub const RUST: LanguageId = LanguageId(Cow::Borrowed("rust"));
    pub const KOTLIN: LanguageId = LanguageId(Cow::Borrowed("kotlin"));
    pub const JAVA: LanguageId = LanguageId(Cow::Borrowed("java"));
    pub const CSHARP: LanguageId = LanguageId(Cow::Borrowed("csharp"));
    pub const CS: LanguageId = LanguageId(Cow::Borrowed("cs"));
    pub const PHP: LanguageId = LanguageId(Cow::Borrowed("php"));
    pub const DART: LanguageId = LanguageId(Cow::Borrowed("dart"));
    pub const LUA: LanguageId = LanguageId(Cow::Borrowed("lua"));
    pub const BASH: LanguageId = LanguageId(Cow::Borrowed("bash"));
    pub const SH: LanguageId = LanguageId(Cow::Borrowed("sh"));
    pub const ZSH: LanguageId = LanguageId(Cow::Borrowed("zsh"));
    pub const SQL: LanguageId = LanguageId(Cow::Borrowed("sql"));
    pub const CSS: LanguageId = LanguageId(Cow::Borrowed("css"));
    pub const SCSS: LanguageId = LanguageId(Cow::Borrowed("scss"));
    pub const SASS: LanguageId = LanguageId(Cow::Borrowed("sass"));
    pub const LESS: LanguageId = LanguageId(Cow::Borrowed("less"));
    pub const HTML: LanguageId = LanguageId(Cow::Borrowed("html"));
    pub const XML: LanguageId = LanguageId(Cow::Borrowed("xml"));
    pub const JSON: LanguageId = LanguageId(Cow::Borrowed("json"));
    pub const YAML: LanguageId = LanguageId(Cow::Borrowed("yaml"));
    pub const YML: LanguageId = LanguageId(Cow::Borrowed("yml"));
    pub const TOML: LanguageId = LanguageId(Cow::Borrowed("toml"));
    pub const MARKDOWN: LanguageId = LanguageId(Cow::Borrowed("markdown"));
    pub const MD: LanguageId = LanguageId(Cow::Borrowed("md"));
    pub const DOCKERFILE: LanguageId = LanguageId(Cow::Borrowed("dockerfile"));
    pub const MAKEFILE: LanguageId = LanguageId(Cow::Borrowed("makefile"));

    /// Create a language identifier
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    /// The identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Infer a language from a file name
    ///
    /// Special names (`Makefile`, `Dockerfile`, `Gemfile`, ...) are checked
    /// first, then the extension. Matching is case-insensitive.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let trimmed = file_name.trim();
        let name = trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed);
        if name.is_empty() {
            return None;
        }

        let lowercased = name.to_lowercase();
        if let Some(id) = lookup_file_name(&lowercased) {
            return Some(id);
        }
        if lowercased.starts_with("dockerfile.") {
            return Some(Self::DOCKERFILE);
        }
        if lowercased.starts_with("makefile.") {
            return Some(Self::MAKEFILE);
        }

        let (_, ext) = lowercased.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    /// Infer a language from a file path
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_file_name(path.file_name()?.to_str()?)
    }

    /// Look up the extension table (without the leading dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        lookup_extension(&ext.to_lowercase())
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for LanguageId {
    fn from(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }
}

fn lookup_file_name(name: &str) -> Option<LanguageId> {
    let id = match name {
        "makefile" | "gnumakefile" => LanguageId::MAKEFILE,
        "dockerfile" | "containerfile" => LanguageId::DOCKERFILE,
        "gemfile" | "rakefile" | "podfile" | "fastfile" => LanguageId::RUBY,
        _ => return None,
    };
    Some(id)
}

fn lookup_extension(ext: &str) -> Option<LanguageId> {
    let id = match ext {
        "swift" => LanguageId::SWIFT,
        "m" | "mm" => LanguageId::OBJECTIVE_C,
        "c" | "h" => LanguageId::C,
        "cpp" | "cc" | "hpp" | "hh" => LanguageId::CPP,
        "cxx" | "hxx" => LanguageId::CXX,
        "c++" => LanguageId::CPLUSPLUS,
        "js" | "mjs" | "cjs" => LanguageId::JS,
        "jsx" => LanguageId::JSX,
        "ts" | "mts" | "cts" => LanguageId::TS,
        "tsx" => LanguageId::TSX,
        "py" | "pyw" => LanguageId::PY,
        "rb" | "gemspec" | "rake" => LanguageId::RB,
        "go" => LanguageId::GO,
        "rs" => LanguageId::RUST,
        "kt" | "kts" => LanguageId::KOTLIN,
        "java" => LanguageId::JAVA,
        "cs" => LanguageId::CS,
        "php" => LanguageId::PHP,
        "dart" => LanguageId::DART,
        "lua" => LanguageId::LUA,
        "sh" => LanguageId::SH,
        "bash" => LanguageId::BASH,
        "zsh" => LanguageId::ZSH,
        "sql" => LanguageId::SQL,
        "css" => LanguageId::CSS,
        "scss" => LanguageId::SCSS,
        "sass" => LanguageId::SASS,
        "less" => LanguageId::LESS,
        "html" | "htm" => LanguageId::HTML,
        "xml" | "plist" | "svg" => LanguageId::XML,
        "json" => LanguageId::JSON,
        "yaml" => LanguageId::YAML,
        "yml" => LanguageId::YML,
        "toml" => LanguageId::TOML,
        "md" | "mkd" => LanguageId::MD,
        "markdown" => LanguageId::MARKDOWN,
        "dockerfile" => LanguageId::DOCKERFILE,
        "mk" | "mak" => LanguageId::MAKEFILE,
        _ => return None,
    };
    Some(id)
}

/// Precomputed keyword/type membership sets
///
/// Mirrors the language's word-list rules so a scanner can classify a bare
/// identifier without running the regex alternation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageFastPath {
    pub keywords: HashSet<String>,
    pub types: HashSet<String>,
}

impl LanguageFastPath {
    /// Create fast-path sets from keyword and type lists
    pub fn new<S: AsRef<str>>(keywords: &[S], types: &[S]) -> Self {
        Self {
            keywords: keywords.iter().map(|w| w.as_ref().to_string()).collect(),
            types: types.iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }

    /// The set mirroring rules of `kind`, if fast-pathed
    pub fn set_for(&self, kind: &TokenKind) -> Option<&HashSet<String>> {
        if *kind == TokenKind::KEYWORD {
            Some(&self.keywords)
        } else if *kind == TokenKind::TYPE {
            Some(&self.types)
        } else {
            None
        }
    }
}

/// A complete language definition for syntax highlighting
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Registry key
    pub id: LanguageId,
    /// Human-readable name (e.g., "Rust", "Python")
    pub display_name: String,
    /// Rules in evaluation order
    pub rules: Vec<TokenRule>,
    /// Optional keyword/type sets mirroring the word-list rules
    pub fast_path: Option<LanguageFastPath>,
    /// Whether fenced code blocks embed other languages (Markdown)
    pub embeds_fenced_code: bool,
}

impl LanguageDefinition {
    /// Create a new language definition
    pub fn new(id: LanguageId, display_name: &str, rules: Vec<TokenRule>) -> Self {
        Self {
            id,
            display_name: display_name.to_string(),
            rules,
            fast_path: None,
            embeds_fenced_code: false,
        }
    }

    /// Builder: attach fast-path sets
    pub fn with_fast_path(mut self, fast_path: LanguageFastPath) -> Self {
        self.fast_path = Some(fast_path);
        self
    }

    /// Builder: mark as a fenced-code host (Markdown)
    pub fn with_fenced_code(mut self) -> Self {
        self.embeds_fenced_code = true;
        self
    }

    /// Copy of this definition registered under another identifier
    pub fn alias(&self, id: LanguageId, display_name: Option<&str>) -> Self {
        let mut lang = self.clone();
        lang.id = id;
        if let Some(name) = display_name {
            lang.display_name = name.to_string();
        }
        lang
    }

    /// Append a word-list rule, keeping the fast path in sync
    pub fn add_words<S: AsRef<str>>(&mut self, words: &[S], kind: TokenKind) -> Result<(), regex::Error> {
        let rule = TokenRule::words(words, kind.clone())?;
        self.rules.push(rule);

        if kind == TokenKind::KEYWORD || kind == TokenKind::TYPE {
            let fast_path = self.fast_path.get_or_insert_with(LanguageFastPath::default);
            let set = if kind == TokenKind::KEYWORD {
                &mut fast_path.keywords
            } else {
                &mut fast_path.types
            };
            set.extend(words.iter().map(|w| w.as_ref().to_string()));
        }
        Ok(())
    }
}
