//! Highlighting options
//!
//! Everything a single `highlight` call can be configured with: theme
//! override, color mode, missing-language policy, diff rendering, line
//! highlighting, line numbers and indent.

use std::ops::RangeInclusive;

use crate::color::ColorMode;
use crate::diff::DiffDetector;
use crate::theme::Theme;

/// What to do when an explicit language is not registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingLanguage {
    /// Fail with [`crate::Error::LanguageNotFound`]
    #[default]
    Error,
    /// Render the input as a single plain token
    FallbackToPlainText,
}

/// Whether code on a group of lines keeps its token styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeStyle {
    #[default]
    Syntax,
    Plain,
}

/// How added and removed lines are marked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStyle {
    /// Added/removed lines get a background color
    Background { diff_code: CodeStyle, context_code: CodeStyle },
    /// Added/removed lines are drawn in the diff foreground colors
    Foreground { context_code: CodeStyle },
}

impl DiffStyle {
    /// Background style with syntax styling everywhere
    pub fn background() -> Self {
        DiffStyle::Background {
            diff_code: CodeStyle::Syntax,
            context_code: CodeStyle::Syntax,
        }
    }

    /// Foreground style with plain context lines
    pub fn foreground() -> Self {
        DiffStyle::Foreground {
            context_code: CodeStyle::Plain,
        }
    }

    /// Code style of added and removed lines
    pub fn diff_code(self) -> CodeStyle {
        match self {
            DiffStyle::Background { diff_code, .. } => diff_code,
            DiffStyle::Foreground { .. } => CodeStyle::Plain,
        }
    }

    /// Code style of every other line
    pub fn context_code(self) -> CodeStyle {
        match self {
            DiffStyle::Background { context_code, .. } | DiffStyle::Foreground { context_code } => context_code,
        }
    }
}

impl Default for DiffStyle {
    fn default() -> Self {
        Self::background()
    }
}

/// Whether diff header lines are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffPresentation {
    #[default]
    Verbose,
    /// Hide meta and header lines, separate hunks with `⋮`
    Compact,
}

/// When diff rendering applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffHighlightMode {
    None,
    /// Only when the text looks like a patch
    Auto { style: DiffStyle, presentation: DiffPresentation },
    /// Always treat the text as a patch
    Patch { style: DiffStyle, presentation: DiffPresentation },
}

impl DiffHighlightMode {
    pub fn auto() -> Self {
        DiffHighlightMode::Auto {
            style: DiffStyle::default(),
            presentation: DiffPresentation::default(),
        }
    }

    pub fn patch() -> Self {
        DiffHighlightMode::Patch {
            style: DiffStyle::default(),
            presentation: DiffPresentation::default(),
        }
    }

    /// Builder: replace the style (no effect on `None`)
    pub fn with_style(self, new_style: DiffStyle) -> Self {
        match self {
            DiffHighlightMode::None => self,
            DiffHighlightMode::Auto { presentation, .. } => DiffHighlightMode::Auto {
                style: new_style,
                presentation,
            },
            DiffHighlightMode::Patch { presentation, .. } => DiffHighlightMode::Patch {
                style: new_style,
                presentation,
            },
        }
    }

    /// Builder: replace the presentation (no effect on `None`)
    pub fn with_presentation(self, new_presentation: DiffPresentation) -> Self {
        match self {
            DiffHighlightMode::None => self,
            DiffHighlightMode::Auto { style, .. } => DiffHighlightMode::Auto {
                style,
                presentation: new_presentation,
            },
            DiffHighlightMode::Patch { style, .. } => DiffHighlightMode::Patch {
                style,
                presentation: new_presentation,
            },
        }
    }

    /// Diff rendering in effect for `code`, if any
    pub fn rendering(&self, code: &str) -> Option<DiffRendering> {
        match *self {
            DiffHighlightMode::None => None,
            DiffHighlightMode::Patch { style, presentation } => Some(DiffRendering { style, presentation }),
            DiffHighlightMode::Auto { style, presentation } => {
                DiffDetector::looks_like_patch(code).then_some(DiffRendering { style, presentation })
            }
        }
    }

    /// Whether a call could skip tokenization, before looking at the text
    pub(crate) fn may_skip_tokenization(&self) -> bool {
        match *self {
            DiffHighlightMode::None => false,
            DiffHighlightMode::Auto { style, .. } | DiffHighlightMode::Patch { style, .. } => {
                style.diff_code() == CodeStyle::Plain && style.context_code() == CodeStyle::Plain
            }
        }
    }
}

impl Default for DiffHighlightMode {
    fn default() -> Self {
        Self::auto()
    }
}

/// Resolved diff rendering for one call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffRendering {
    pub style: DiffStyle,
    pub presentation: DiffPresentation,
}

/// Set of 1-based inclusive line ranges
///
/// Ranges are kept as given; overlaps are harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineRangeSet {
    ranges: Vec<RangeInclusive<usize>>,
}

impl LineRangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, range: RangeInclusive<usize>) {
        self.ranges.push(range);
    }

    pub fn contains(&self, line: usize) -> bool {
        self.ranges.iter().any(|range| range.contains(&line))
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[RangeInclusive<usize>] {
        &self.ranges
    }
}

impl FromIterator<RangeInclusive<usize>> for LineRangeSet {
    fn from_iter<I: IntoIterator<Item = RangeInclusive<usize>>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}

/// Line-number gutter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineNumbers {
    start: usize,
}

impl LineNumbers {
    /// Number the first line `start` (at least 1)
    pub fn new(start: usize) -> Self {
        Self { start: start.max(1) }
    }

    pub fn start(&self) -> usize {
        self.start
    }
}

impl Default for LineNumbers {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Options for a single highlight or render call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Overrides the highlighter's theme
    pub theme: Option<Theme>,
    pub color_mode: ColorMode,
    pub missing_language: MissingLanguage,
    pub diff: DiffHighlightMode,
    /// 1-based lines drawn with the line highlight background
    pub highlight_lines: LineRangeSet,
    pub line_numbers: Option<LineNumbers>,
    /// Spaces in front of every line
    pub indent: usize,
}

impl HighlightOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    pub fn with_missing_language(mut self, missing_language: MissingLanguage) -> Self {
        self.missing_language = missing_language;
        self
    }

    pub fn with_diff(mut self, diff: DiffHighlightMode) -> Self {
        self.diff = diff;
        self
    }

    pub fn with_highlight_lines(mut self, lines: LineRangeSet) -> Self {
        self.highlight_lines = lines;
        self
    }

    pub fn with_line_numbers(mut self, line_numbers: LineNumbers) -> Self {
        self.line_numbers = Some(line_numbers);
        self
    }

    /// Builder: set the indent; negative values become 0
    pub fn with_indent(mut self, indent: isize) -> Self {
        self.indent = indent.max(0).unsigned_abs();
        self
    }

    /// Whether `code` can be rendered as one plain token
    ///
    /// True when diff rendering applies to `code` and both the diff and
    /// context code styles are plain.
    pub fn should_skip_tokenization(&self, code: &str) -> bool {
        self.diff.may_skip_tokenization() && self.diff.rendering(code).is_some()
    }
}
