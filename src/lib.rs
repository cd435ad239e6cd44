//! chroma - regex-driven syntax and diff highlighting for terminals
//!
//! Text is split into tokens by per-language rule tables (longest match
//! wins, earlier rule on ties), then rendered to ANSI escape sequences
//! with a theme. Unified diffs get per-line backgrounds, and Markdown
//! fences are highlighted in their own language.
//!
//! ```no_run
//! use chroma::{HighlightOptions, LanguageId};
//!
//! let out = chroma::highlight("let x = 1", Some(&LanguageId::SWIFT), &HighlightOptions::default())?;
//! print!("{out}");
//! # Ok::<(), chroma::Error>(())
//! ```

mod ansi;
mod color;
mod diff;
mod error;
mod highlighter;
mod options;
mod render;
mod style;
mod syntax;
mod theme;

use std::sync::OnceLock;

pub use ansi::AnsiWriter;
pub use color::{color_enabled, set_color_enabled, ColorMode, ColorOutput};
pub use diff::{split_lines, DiffDetector, DiffLineKind, HunkStart};
pub use error::{Error, Result, ThemeError};
pub use highlighter::Highlighter;
pub use options::{
    CodeStyle, DiffHighlightMode, DiffPresentation, DiffRendering, DiffStyle, HighlightOptions, LineNumbers,
    LineRangeSet, MissingLanguage,
};
pub use render::Renderer;
pub use style::{Color, Decorations, TextStyle};
pub use syntax::{
    coalesce, LanguageDefinition, LanguageFastPath, LanguageId, LanguageRegistry, MarkdownTokenizer, RegexTokenizer,
    Token, TokenKind, TokenRule, TokenizerMetrics,
};
pub use theme::{StyleCache, Theme};

/// Shared highlighter with the built-in languages and the dark theme
pub fn shared() -> &'static Highlighter {
    static SHARED: OnceLock<Highlighter> = OnceLock::new();
    SHARED.get_or_init(Highlighter::with_builtins)
}

/// Highlight with the [`shared`] highlighter
pub fn highlight(code: &str, language: Option<&LanguageId>, options: &HighlightOptions) -> Result<String> {
    shared().highlight(code, language, options)
}

/// Highlight with the language detected from a file name
pub fn highlight_file_name(code: &str, file_name: &str, options: &HighlightOptions) -> String {
    shared().highlight_file_name(code, file_name, options)
}

/// Tokenize with the [`shared`] highlighter
pub fn tokenize(code: &str, language: Option<&LanguageId>) -> Result<Vec<Token>> {
    shared().tokenize(code, language)
}
