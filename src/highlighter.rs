//! Highlighter
//!
//! Ties the registry, tokenizers, theme and renderer together. A
//! `Highlighter` is immutable apart from its theme and can be shared
//! between threads; per-call state lives in the renderer.

use std::sync::Arc;

use tracing::debug;

use crate::diff::DiffDetector;
use crate::error::{Error, Result};
use crate::options::{HighlightOptions, MissingLanguage};
use crate::render::Renderer;
use crate::syntax::{LanguageDefinition, LanguageId, LanguageRegistry, MarkdownTokenizer, RegexTokenizer, Token, TokenKind};
use crate::theme::Theme;

/// Syntax and diff highlighter
#[derive(Debug, Clone)]
pub struct Highlighter {
    theme: Theme,
    registry: Arc<LanguageRegistry>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl Highlighter {
    pub fn new(theme: Theme, registry: Arc<LanguageRegistry>) -> Self {
        Self { theme, registry }
    }

    /// Dark theme and the built-in languages
    pub fn with_builtins() -> Self {
        Self::new(Theme::dark(), Arc::new(LanguageRegistry::with_builtins()))
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn registry(&self) -> &Arc<LanguageRegistry> {
        &self.registry
    }

    /// Highlight `code` as `language`
    ///
    /// `None` renders plain text; when diff rendering applies, the language
    /// of the patched file is inferred from its headers. An explicit
    /// language that is not registered is an error unless
    /// `options.missing_language` asks for plain text.
    pub fn highlight(&self, code: &str, language: Option<&LanguageId>, options: &HighlightOptions) -> Result<String> {
        let theme = options.theme.as_ref().unwrap_or(&self.theme);
        let renderer = Renderer::new(theme, options);

        let definition = match language {
            Some(id) => match self.registry.language(id) {
                Some(definition) => Some(definition),
                None if options.missing_language == MissingLanguage::Error => {
                    return Err(Error::LanguageNotFound(id.clone()));
                }
                None => {
                    debug!(language = %id, "language not registered, rendering plain text");
                    None
                }
            },
            None => self.inferred_language(code, options),
        };

        let Some(definition) = definition else {
            return Ok(renderer.render(code, plain_tokens(code)));
        };

        if options.should_skip_tokenization(code) {
            debug!(language = %definition.id, "plain diff styles, skipping tokenization");
            return Ok(renderer.render(code, plain_tokens(code)));
        }

        Ok(self.render_with(&renderer, code, definition))
    }

    /// Highlight `code` with the language detected from `file_name`
    ///
    /// Unknown names and unregistered languages render as plain text.
    pub fn highlight_file_name(&self, code: &str, file_name: &str, options: &HighlightOptions) -> String {
        let language = LanguageId::from_file_name(file_name);
        let options = options.clone().with_missing_language(MissingLanguage::FallbackToPlainText);
        match self.highlight(code, language.as_ref(), &options) {
            Ok(output) => output,
            Err(_) => code.to_string(),
        }
    }

    /// Tokenize `code` as `language`
    ///
    /// `None` yields a single plain token (none for empty input).
    pub fn tokenize(&self, code: &str, language: Option<&LanguageId>) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        self.tokenize_with(code, language, |token| tokens.push(token))?;
        Ok(tokens)
    }

    /// Tokenize `code`, handing each token to `emit` as it is produced
    pub fn tokenize_with<F: FnMut(Token)>(&self, code: &str, language: Option<&LanguageId>, mut emit: F) -> Result<()> {
        let Some(id) = language else {
            plain_tokens(code).into_iter().for_each(emit);
            return Ok(());
        };
        let definition = self
            .registry
            .language(id)
            .ok_or_else(|| Error::LanguageNotFound(id.clone()))?;

        if definition.embeds_fenced_code {
            MarkdownTokenizer::new(definition, &self.registry).scan(code, &mut emit);
        } else {
            RegexTokenizer::new(definition).scan(code, &mut emit);
        }
        Ok(())
    }

    /// Render tokens produced elsewhere
    pub fn render(&self, code: &str, tokens: Vec<Token>, options: &HighlightOptions) -> String {
        let theme = options.theme.as_ref().unwrap_or(&self.theme);
        Renderer::new(theme, options).render(code, tokens)
    }

    /// Render tokens produced lazily by `stream`
    pub fn render_stream<F>(&self, code: &str, options: &HighlightOptions, stream: F) -> String
    where
        F: FnOnce(&mut dyn FnMut(Token)),
    {
        let theme = options.theme.as_ref().unwrap_or(&self.theme);
        Renderer::new(theme, options).render_stream(code, stream)
    }

    fn inferred_language(&self, code: &str, options: &HighlightOptions) -> Option<Arc<LanguageDefinition>> {
        if options.diff.rendering(code).is_none() {
            return None;
        }
        let id = DiffDetector::infer_language(code)?;
        let definition = self.registry.language(&id);
        if definition.is_none() {
            debug!(language = %id, "inferred diff language is not registered");
        }
        definition
    }

    fn render_with(&self, renderer: &Renderer<'_>, code: &str, definition: Arc<LanguageDefinition>) -> String {
        if definition.embeds_fenced_code {
            let tokenizer = MarkdownTokenizer::new(definition, &self.registry);
            renderer.render_stream(code, |emit| tokenizer.scan(code, emit))
        } else {
            let tokenizer = RegexTokenizer::new(definition);
            renderer.render_stream(code, |emit| tokenizer.scan(code, emit))
        }
    }
}

/// The whole text as one plain token
fn plain_tokens(code: &str) -> Vec<Token> {
    if code.is_empty() {
        return Vec::new();
    }
    vec![Token::new(TokenKind::PLAIN, 0, code.len())]
}
