//! Token stream to styled text
//!
//! Rendering is two phases. The plan phase splits the text into lines once
//! and decides, per line, its diff role, background, gutter label and
//! whether it is shown at all. The emit phase walks the tokens, splits
//! them at newlines and writes each fragment with the style of its kind
//! and the background of its line.

use tracing::trace;

use crate::ansi::AnsiWriter;
use crate::diff::{split_lines, DiffDetector, DiffLineKind, HunkStart};
use crate::options::{CodeStyle, DiffPresentation, DiffRendering, DiffStyle, HighlightOptions};
use crate::style::{Color, TextStyle};
use crate::syntax::{Token, TokenKind};
use crate::theme::{StyleCache, Theme};

const SEPARATOR: &str = "⋮";

/// Renders tokens of one text with one theme and set of options
pub struct Renderer<'a> {
    theme: &'a Theme,
    options: &'a HighlightOptions,
    color_enabled: bool,
}

impl<'a> Renderer<'a> {
    /// Create a renderer; color is resolved from `options.color_mode`
    pub fn new(theme: &'a Theme, options: &'a HighlightOptions) -> Self {
        Self {
            theme,
            options,
            color_enabled: options.color_mode.is_enabled(),
        }
    }

    /// Override the resolved color decision
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    /// Render a complete token sequence
    pub fn render<I>(&self, code: &str, tokens: I) -> String
    where
        I: IntoIterator<Item = Token>,
    {
        self.render_stream(code, |emit| tokens.into_iter().for_each(emit))
    }

    /// Render tokens produced lazily by `stream`
    ///
    /// `stream` is handed an emit callback and must call it with tokens in
    /// increasing offset order.
    pub fn render_stream<F>(&self, code: &str, stream: F) -> String
    where
        F: FnOnce(&mut dyn FnMut(Token)),
    {
        let plan = RenderPlan::build(code, self.theme, self.options);
        let mut emitter = Emitter {
            code,
            theme: self.theme,
            styles: self.theme.style_cache(),
            indent: " ".repeat(self.options.indent),
            plan: &plan,
            writer: AnsiWriter::new(self.color_enabled, code.len() + code.len() / 2),
            line: 0,
            line_started: false,
        };
        stream(&mut |token: Token| emitter.token(&token));
        emitter.writer.finish()
    }
}

/// Per-line decisions
#[derive(Debug, Clone, Default)]
struct LinePlan {
    diff: Option<DiffLineKind>,
    hunk: Option<HunkStart>,
    background: Option<Color>,
    label: Option<usize>,
    hidden: bool,
    separators: usize,
}

#[derive(Debug)]
struct RenderPlan {
    lines: Vec<LinePlan>,
    rendering: Option<DiffRendering>,
    /// Width of the number column; `None` when line numbers are off
    gutter_width: Option<usize>,
}

impl RenderPlan {
    fn build(code: &str, theme: &Theme, options: &HighlightOptions) -> Self {
        let rendering = options.diff.rendering(code);
        let mut lines: Vec<LinePlan> = split_lines(code)
            .map(|text| {
                let diff = DiffDetector::classify(text);
                let hunk = match diff {
                    Some(DiffLineKind::HunkHeader) => DiffDetector::parse_hunk_header(text),
                    _ => None,
                };
                LinePlan {
                    diff,
                    hunk,
                    ..Default::default()
                }
            })
            .collect();

        if let Some(DiffRendering {
            style: DiffStyle::Background { .. },
            ..
        }) = rendering
        {
            for line in &mut lines {
                line.background = match line.diff {
                    Some(DiffLineKind::Added) => Some(theme.diff_added_background),
                    Some(DiffLineKind::Removed) => Some(theme.diff_removed_background),
                    _ => None,
                };
            }
        }

        if !options.highlight_lines.is_empty() {
            for (index, line) in lines.iter_mut().enumerate() {
                if options.highlight_lines.contains(index + 1) {
                    line.background = Some(theme.line_highlight_background);
                }
            }
        }

        if matches!(rendering, Some(r) if r.presentation == DiffPresentation::Compact) {
            plan_compact(&mut lines);
        }

        let gutter_width = options.line_numbers.map(|numbers| {
            let visible = visible_lines(code, lines.len());
            assign_labels(&mut lines[..visible], numbers.start());
            lines[..visible]
                .iter()
                .filter(|line| !line.hidden)
                .filter_map(|line| line.label)
                .map(digits)
                .max()
                .unwrap_or(1)
        });

        Self {
            lines,
            rendering,
            gutter_width,
        }
    }

    fn line(&self, index: usize) -> Option<&LinePlan> {
        self.lines.get(index)
    }
}

/// Lines that are drawn; a trailing newline leaves an empty last line that is not
fn visible_lines(code: &str, count: usize) -> usize {
    if count > 1 && code.ends_with('\n') {
        count - 1
    } else {
        count
    }
}

fn digits(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

/// Hide header lines and mark where hunk separators go
fn plan_compact(lines: &mut [LinePlan]) {
    let mut hunks = 0;
    let mut new_file = false;
    for line in lines {
        match line.diff {
            Some(DiffLineKind::Meta | DiffLineKind::FileHeader) => {
                line.hidden = true;
                if hunks > 0 {
                    new_file = true;
                }
            }
            Some(DiffLineKind::HunkHeader) => {
                line.hidden = true;
                if hunks > 0 {
                    line.separators = if new_file { 2 } else { 1 };
                }
                hunks += 1;
                new_file = false;
            }
            _ => {}
        }
    }
}

/// Number lines, following hunk headers when the text has any
fn assign_labels(lines: &mut [LinePlan], start: usize) {
    if !lines.iter().any(|line| line.diff == Some(DiffLineKind::HunkHeader)) {
        for (index, line) in lines.iter_mut().enumerate() {
            line.label = Some(start + index);
        }
        return;
    }

    // (old, new) counters of the current hunk
    let mut counters: Option<(usize, usize)> = None;
    for line in lines {
        line.label = match line.diff {
            Some(DiffLineKind::HunkHeader) => {
                counters = line.hunk.map(|h| (h.old_start, h.new_start)).or(counters);
                None
            }
            Some(DiffLineKind::Meta | DiffLineKind::FileHeader) => None,
            Some(DiffLineKind::Removed) => counters.as_mut().map(|(old, _)| post_increment(old)),
            Some(DiffLineKind::Added) => counters.as_mut().map(|(_, new)| post_increment(new)),
            None => counters.as_mut().map(|(old, new)| {
                *old += 1;
                post_increment(new)
            }),
        };
    }
}

fn post_increment(counter: &mut usize) -> usize {
    let value = *counter;
    *counter += 1;
    value
}

/// Emit-phase state
struct Emitter<'r> {
    code: &'r str,
    theme: &'r Theme,
    styles: StyleCache<'r>,
    indent: String,
    plan: &'r RenderPlan,
    writer: AnsiWriter,
    line: usize,
    line_started: bool,
}

impl Emitter<'_> {
    fn token(&mut self, token: &Token) {
        let Some(text) = self.code.get(token.range()) else {
            trace!(start = token.start, len = token.len, "skipping token outside the text");
            return;
        };

        let mut pieces = text.split('\n');
        if let Some(first) = pieces.next() {
            self.fragment(first, &token.kind);
        }
        for piece in pieces {
            self.newline();
            self.fragment(piece, &token.kind);
        }
    }

    fn fragment(&mut self, text: &str, kind: &TokenKind) {
        if text.is_empty() {
            return;
        }
        self.begin_line();
        let plan = self.plan;
        let Some(line) = plan.line(self.line) else {
            self.writer.push_plain(text);
            return;
        };
        if line.hidden {
            return;
        }
        let style = self.token_style(kind, line);
        self.writer.push(text, style);
    }

    fn newline(&mut self) {
        self.begin_line();
        let plan = self.plan;
        if !plan.line(self.line).is_some_and(|line| line.hidden) {
            self.writer.push_plain("\n");
        }
        self.line += 1;
        self.line_started = false;
    }

    /// Separators, indent and gutter in front of the current line
    fn begin_line(&mut self) {
        if self.line_started {
            return;
        }
        self.line_started = true;
        let plan = self.plan;
        let Some(line) = plan.line(self.line) else {
            return;
        };

        for _ in 0..line.separators {
            self.separator();
        }
        if line.hidden {
            return;
        }

        let plain = self.styles.style(&TokenKind::PLAIN);
        let plain = plain.with_bg(line.background.or(plain.background));
        if !self.indent.is_empty() {
            self.writer.push(&self.indent, plain);
        }
        if let Some(width) = plan.gutter_width {
            let label = match line.label {
                Some(number) => format!("{number:>width$}"),
                None => " ".repeat(width),
            };
            let style = self.number_style(line);
            self.writer.push(&label, style);
            self.writer.push(" ", plain);
        }
    }

    fn separator(&mut self) {
        let plain = self.styles.style(&TokenKind::PLAIN);
        if !self.indent.is_empty() {
            self.writer.push(&self.indent, plain);
        }
        let text = match self.plan.gutter_width {
            Some(width) => format!("{SEPARATOR:>width$}"),
            None => SEPARATOR.to_string(),
        };
        let style = self
            .styles
            .style(&TokenKind::COMMENT)
            .with_fg(self.theme.line_number_foreground);
        self.writer.push(&text, style);
        self.writer.push_plain("\n");
    }

    fn number_style(&self, line: &LinePlan) -> TextStyle {
        let comment = self.styles.style(&TokenKind::COMMENT);
        let diff_line = self.diff_line_color(line);
        match (self.plan.rendering.map(|r| r.style), diff_line) {
            (Some(DiffStyle::Background { .. }), Some(_)) => self
                .styles
                .style(&TokenKind::PLAIN)
                .with_fg(Color::White)
                .with_bg(line.background),
            (Some(DiffStyle::Foreground { .. }), Some(foreground)) => {
                comment.with_fg(foreground).with_bg(line.background.or(comment.background))
            }
            _ => comment
                .with_fg(self.theme.line_number_foreground)
                .with_bg(line.background.or(comment.background)),
        }
    }

    /// Diff foreground of an added or removed line while diff rendering is on
    fn diff_line_color(&self, line: &LinePlan) -> Option<Color> {
        if self.plan.rendering.is_none() {
            return None;
        }
        match line.diff {
            Some(DiffLineKind::Added) => Some(self.theme.diff_added_foreground),
            Some(DiffLineKind::Removed) => Some(self.theme.diff_removed_foreground),
            _ => None,
        }
    }

    fn token_style(&self, kind: &TokenKind, line: &LinePlan) -> TextStyle {
        let code_style = |code: CodeStyle| match code {
            CodeStyle::Syntax => self.styles.style(kind),
            CodeStyle::Plain => self.styles.style(&TokenKind::PLAIN),
        };
        let diff_line = self.diff_line_color(line);

        let style = match self.plan.rendering.map(|r| r.style) {
            None => self.styles.style(kind),
            Some(DiffStyle::Background { diff_code, context_code }) => {
                code_style(if diff_line.is_some() { diff_code } else { context_code })
            }
            Some(DiffStyle::Foreground { context_code }) => match diff_line {
                Some(foreground) => self.styles.style(&TokenKind::PLAIN).with_fg(foreground),
                None => code_style(context_code),
            },
        };
        style.with_bg(line.background.or(style.background))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{DiffHighlightMode, LineNumbers, LineRangeSet};
    use crate::syntax::{LanguageId, LanguageRegistry, RegexTokenizer};

    fn stable_theme() -> Theme {
        let mut theme = Theme::dark();
        theme.kind_styles.insert(TokenKind::PLAIN, TextStyle::fg(Color::BrightWhite));
        theme
    }

    fn seg(text: &str, style: TextStyle) -> String {
        let mut writer = AnsiWriter::new(true, 0);
        writer.push(text, style);
        writer.finish()
    }

    fn swift_tokens(code: &str) -> Vec<Token> {
        let registry = LanguageRegistry::with_builtins();
        let swift = registry.language(&LanguageId::SWIFT).expect("swift is built in");
        RegexTokenizer::new(swift).tokenize(code)
    }

    fn whole(code: &str) -> Vec<Token> {
        vec![Token::new(TokenKind::PLAIN, 0, code.len())]
    }

    fn render(theme: &Theme, options: &HighlightOptions, code: &str, tokens: Vec<Token>) -> String {
        Renderer::new(theme, options).with_color(true).render(code, tokens)
    }

    fn diff_patch(style: DiffStyle) -> DiffHighlightMode {
        DiffHighlightMode::patch().with_style(style)
    }

    #[test]
    fn test_line_highlight_background() {
        let theme = stable_theme();
        let options = HighlightOptions::new()
            .with_diff(DiffHighlightMode::None)
            .with_highlight_lines([2..=2].into_iter().collect());
        let code = "let a\nlet b";
        let tokens = vec![
            Token::new(TokenKind::KEYWORD, 0, 3),
            Token::new(TokenKind::PLAIN, 3, 2),
            Token::new(TokenKind::PLAIN, 5, 1),
            Token::new(TokenKind::KEYWORD, 6, 3),
            Token::new(TokenKind::PLAIN, 9, 2),
        ];

        let keyword = theme.style(&TokenKind::KEYWORD);
        let plain = theme.style(&TokenKind::PLAIN);
        let highlight = Some(theme.line_highlight_background);
        let expected = [
            seg("let", keyword),
            seg(" a", plain),
            "\n".to_string(),
            seg("let", keyword.with_bg(highlight)),
            seg(" b", plain.with_bg(highlight)),
        ]
        .concat();
        assert_eq!(render(&theme, &options, code, tokens), expected);
    }

    #[test]
    fn test_line_highlight_overrides_diff() {
        let theme = stable_theme();
        let options = HighlightOptions::new()
            .with_diff(DiffHighlightMode::patch())
            .with_highlight_lines([1..=1].into_iter().collect());
        let code = "+let a = 1";
        let output = render(&theme, &options, code, swift_tokens(code));

        let keyword = theme.style(&TokenKind::KEYWORD);
        assert!(output.contains(&seg("let", keyword.with_bg(Some(theme.line_highlight_background)))));
        assert!(!output.contains(&seg("let", keyword.with_bg(Some(theme.diff_added_background)))));
    }

    #[test]
    fn test_diff_foreground_uses_plain_style() {
        let theme = stable_theme();
        let options = HighlightOptions::new().with_diff(diff_patch(DiffStyle::foreground()));
        let code = "let a\n+let value = 1";
        let output = render(&theme, &options, code, swift_tokens(code));

        let keyword = theme.style(&TokenKind::KEYWORD);
        let plain = theme.style(&TokenKind::PLAIN);
        assert!(output.contains(&seg("let", plain)));
        assert!(output.contains(&seg("let", plain.with_fg(theme.diff_added_foreground))));
        assert!(!output.contains(&seg("let", keyword)));
        assert!(!output.contains(&seg("let", keyword.with_fg(theme.diff_added_foreground))));
    }

    #[test]
    fn test_diff_foreground_keeps_context_syntax() {
        let theme = stable_theme();
        let style = DiffStyle::Foreground {
            context_code: CodeStyle::Syntax,
        };
        let options = HighlightOptions::new().with_diff(diff_patch(style));
        let code = "let a\n+let b";
        let output = render(&theme, &options, code, swift_tokens(code));
        assert!(output.contains(&seg("let", theme.style(&TokenKind::KEYWORD))));
    }

    #[test]
    fn test_diff_background_code_styles() {
        let theme = stable_theme();
        let keyword = theme.style(&TokenKind::KEYWORD);
        let plain = theme.style(&TokenKind::PLAIN);
        let added = Some(theme.diff_added_background);
        let code = "let a\n+let b";

        let plain_diff = HighlightOptions::new().with_diff(diff_patch(DiffStyle::Background {
            diff_code: CodeStyle::Plain,
            context_code: CodeStyle::Syntax,
        }));
        let output = render(&theme, &plain_diff, code, swift_tokens(code));
        assert!(output.contains(&seg("let", keyword)));
        assert!(output.contains(&seg("let", plain.with_bg(added))));
        assert!(!output.contains(&seg("let", keyword.with_bg(added))));

        let plain_context = HighlightOptions::new().with_diff(diff_patch(DiffStyle::Background {
            diff_code: CodeStyle::Syntax,
            context_code: CodeStyle::Plain,
        }));
        let output = render(&theme, &plain_context, code, swift_tokens(code));
        assert!(output.contains(&seg("let", plain)));
        assert!(output.contains(&seg("let", keyword.with_bg(added))));
        assert!(!output.contains(&seg("let", keyword)));

        let default = HighlightOptions::new().with_diff(DiffHighlightMode::patch());
        let output = render(&theme, &default, code, swift_tokens(code));
        assert!(output.contains(&seg("let", keyword)));
        assert!(output.contains(&seg("let", keyword.with_bg(added))));
    }

    const TWO_HUNKS: &str = "diff --git a/A.swift b/A.swift\n--- a/A.swift\n+++ b/A.swift\n@@ -1,1 +1,1 @@\n-let a = 1\n+let a = 2\n@@ -4,1 +4,1 @@\n-let b = 1\n+let b = 2";

    #[test]
    fn test_compact_hides_headers_and_separates_hunks() {
        let theme = stable_theme();
        let options = HighlightOptions::new()
            .with_diff(DiffHighlightMode::patch().with_presentation(DiffPresentation::Compact))
            .with_line_numbers(LineNumbers::new(1));
        let output = Renderer::new(&theme, &options)
            .with_color(false)
            .render(TWO_HUNKS, whole(TWO_HUNKS));
        assert_eq!(output, "1 -let a = 1\n1 +let a = 2\n⋮\n4 -let b = 1\n4 +let b = 2");
    }

    #[test]
    fn test_compact_double_separator_between_files() {
        let theme = stable_theme();
        let options = HighlightOptions::new()
            .with_diff(DiffHighlightMode::patch().with_presentation(DiffPresentation::Compact));
        let code = "diff --git a/A.swift b/A.swift\n--- a/A.swift\n+++ b/A.swift\n@@ -1,1 +1,1 @@\n-let a = 1\n+let a = 2\ndiff --git a/B.swift b/B.swift\n--- a/B.swift\n+++ b/B.swift\n@@ -1,1 +1,1 @@\n-let b = 1\n+let b = 2";
        let output = Renderer::new(&theme, &options).with_color(false).render(code, whole(code));
        assert_eq!(output, "-let a = 1\n+let a = 2\n⋮\n⋮\n-let b = 1\n+let b = 2");
    }

    #[test]
    fn test_verbose_keeps_headers() {
        let theme = stable_theme();
        let options = HighlightOptions::new().with_diff(DiffHighlightMode::patch());
        let output = Renderer::new(&theme, &options)
            .with_color(false)
            .render(TWO_HUNKS, whole(TWO_HUNKS));
        assert_eq!(output, TWO_HUNKS);
    }

    #[test]
    fn test_line_numbers_plain_text() {
        let theme = stable_theme();
        let options = HighlightOptions::new()
            .with_diff(DiffHighlightMode::None)
            .with_line_numbers(LineNumbers::new(1));
        let code = "let a\nlet b";

        let number = theme.style(&TokenKind::COMMENT).with_fg(theme.line_number_foreground);
        let plain = theme.style(&TokenKind::PLAIN);
        let expected = [
            seg("1", number),
            seg(" ", plain),
            seg("let a", plain),
            "\n".to_string(),
            seg("2", number),
            seg(" ", plain),
            seg("let b", plain),
        ]
        .concat();
        assert_eq!(render(&theme, &options, code, whole(code)), expected);
    }

    #[test]
    fn test_line_numbers_align_and_indent() {
        let theme = stable_theme();
        let options = HighlightOptions::new()
            .with_diff(DiffHighlightMode::None)
            .with_line_numbers(LineNumbers::new(9))
            .with_indent(2);
        let code = "a\nb";

        let number = theme.style(&TokenKind::COMMENT).with_fg(theme.line_number_foreground);
        let plain = theme.style(&TokenKind::PLAIN);
        let expected = [
            seg("  ", plain),
            seg(" 9", number),
            seg(" ", plain),
            seg("a", plain),
            "\n".to_string(),
            seg("  ", plain),
            seg("10", number),
            seg(" ", plain),
            seg("b", plain),
        ]
        .concat();
        assert_eq!(render(&theme, &options, code, whole(code)), expected);
    }

    #[test]
    fn test_trailing_newline_not_numbered() {
        let theme = stable_theme();
        let options = HighlightOptions::new()
            .with_diff(DiffHighlightMode::None)
            .with_line_numbers(LineNumbers::new(8));
        let code = "a\nb\n";
        let output = Renderer::new(&theme, &options).with_color(false).render(code, whole(code));
        assert_eq!(output, "8 a\n9 b\n");
    }

    #[test]
    fn test_line_numbers_follow_hunks() {
        let theme = stable_theme();
        let options = HighlightOptions::new()
            .with_diff(DiffHighlightMode::None)
            .with_line_numbers(LineNumbers::new(1));
        let code = "@@ -10,2 +20,2 @@\n-let a\n+let b\n let c";

        let number = theme.style(&TokenKind::COMMENT).with_fg(theme.line_number_foreground);
        let plain = theme.style(&TokenKind::PLAIN);
        let expected = [
            seg("  ", number),
            seg(" ", plain),
            seg("@@ -10,2 +20,2 @@", plain),
            "\n".to_string(),
            seg("10", number),
            seg(" ", plain),
            seg("-let a", plain),
            "\n".to_string(),
            seg("20", number),
            seg(" ", plain),
            seg("+let b", plain),
            "\n".to_string(),
            seg("21", number),
            seg(" ", plain),
            seg(" let c", plain),
        ]
        .concat();
        assert_eq!(render(&theme, &options, code, whole(code)), expected);
    }

    #[test]
    fn test_line_numbers_white_on_diff_background() {
        let theme = stable_theme();
        let options = HighlightOptions::new()
            .with_diff(DiffHighlightMode::patch())
            .with_line_numbers(LineNumbers::new(1));
        let code = "@@ -10,1 +20,1 @@\n-let a\n+let b";
        let output = render(&theme, &options, code, whole(code));

        let plain = theme.style(&TokenKind::PLAIN).with_fg(Color::White);
        assert!(output.contains(&seg("10", plain.with_bg(Some(theme.diff_removed_background)))));
        assert!(output.contains(&seg("20", plain.with_bg(Some(theme.diff_added_background)))));
    }

    #[test]
    fn test_line_numbers_use_diff_foregrounds() {
        let theme = stable_theme();
        let options = HighlightOptions::new()
            .with_diff(diff_patch(DiffStyle::foreground()))
            .with_line_numbers(LineNumbers::new(1));
        let code = "@@ -10,1 +20,1 @@\n-let a\n+let b";
        let output = render(&theme, &options, code, whole(code));

        let comment = theme.style(&TokenKind::COMMENT);
        assert!(output.contains(&seg("10", comment.with_fg(theme.diff_removed_foreground))));
        assert!(output.contains(&seg("20", comment.with_fg(theme.diff_added_foreground))));
    }

    #[test]
    fn test_indent_applies_to_empty_lines() {
        let theme = Theme::dark();
        let options = HighlightOptions::new().with_diff(DiffHighlightMode::None).with_indent(2);
        let code = "let a\n\nlet b\n";
        assert_eq!(render(&theme, &options, code, whole(code)), "  let a\n  \n  let b\n");
    }

    #[test]
    fn test_indent_carries_line_background() {
        let theme = stable_theme();
        let plain = theme.style(&TokenKind::PLAIN);

        let highlighted = HighlightOptions::new()
            .with_diff(DiffHighlightMode::None)
            .with_highlight_lines(LineRangeSet::from_iter([2..=2]))
            .with_indent(2);
        let output = render(&theme, &highlighted, "a\nb", whole("a\nb"));
        assert!(output.starts_with(&seg("  ", plain)));
        assert!(output.contains(&seg("  ", plain.with_bg(Some(theme.line_highlight_background)))));

        let diff = HighlightOptions::new().with_diff(DiffHighlightMode::patch()).with_indent(1);
        let code = "+let a\n-let b";
        let added = plain.with_bg(Some(theme.diff_added_background));
        let removed = plain.with_bg(Some(theme.diff_removed_background));
        let expected = [
            seg(" ", added),
            seg("+let a", added),
            "\n".to_string(),
            seg(" ", removed),
            seg("-let b", removed),
        ]
        .concat();
        assert_eq!(render(&theme, &diff, code, whole(code)), expected);
    }

    #[test]
    fn test_color_disabled_passes_through() {
        let theme = stable_theme();
        let options = HighlightOptions::new().with_diff(DiffHighlightMode::patch());
        let code = "let a\n+let b = \"é\"\n";
        let output = Renderer::new(&theme, &options).with_color(false).render(code, swift_tokens(code));
        assert_eq!(output, code);
    }

    #[test]
    fn test_stream_matches_batch() {
        let theme = stable_theme();
        let options = HighlightOptions::new();
        let code = "let x = 1 // one\nlet y = \"two\"";
        let tokens = swift_tokens(code);
        let renderer = Renderer::new(&theme, &options).with_color(true);
        let streamed = renderer.render_stream(code, |emit| tokens.iter().cloned().for_each(emit));
        assert_eq!(streamed, renderer.render(code, tokens.clone()));
    }

    #[test]
    fn test_out_of_range_token_skipped() {
        let theme = stable_theme();
        let options = HighlightOptions::new();
        let tokens = vec![Token::new(TokenKind::PLAIN, 0, 2), Token::new(TokenKind::KEYWORD, 2, 40)];
        let output = Renderer::new(&theme, &options).with_color(false).render("ab", tokens);
        assert_eq!(output, "ab");
    }
}
