//! Themes
//!
//! A theme maps token kinds to text styles and carries the backgrounds and
//! foregrounds used for line highlighting, diffs and line numbers.
//!
//! Themes can be loaded from TOML:
//!
//! ```text
//! name = "example"
//! [styles]
//! keyword = { fg = "magenta", bold = true }
//! comment = { fg = "#5c6370", dim = true }
//! [ui]
//! line_highlight_bg = "bright-black"
//! diff_added_bg = "green"
//! ```

use std::collections::HashMap;

use crate::error::ThemeError;
use crate::style::{Color, Decorations, TextStyle};
use crate::syntax::TokenKind;

/// Token styles plus the colors the renderer applies per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub kind_styles: HashMap<TokenKind, TextStyle>,
    /// Background for explicitly highlighted lines
    pub line_highlight_background: Color,
    /// Background for added diff lines
    pub diff_added_background: Color,
    /// Background for removed diff lines
    pub diff_removed_background: Color,
    /// Foreground for added lines in foreground diff style
    pub diff_added_foreground: Color,
    /// Foreground for removed lines in foreground diff style
    pub diff_removed_foreground: Color,
    /// Foreground for the line-number gutter
    pub line_number_foreground: Color,
}

impl Theme {
    /// Built-in theme for dark terminals
    pub fn dark() -> Self {
        let styles = [
            (TokenKind::PLAIN, TextStyle::default()),
            (TokenKind::KEYWORD, TextStyle::fg(Color::BrightMagenta).with(Decorations::BOLD)),
            (TokenKind::TYPE, TextStyle::fg(Color::BrightCyan)),
            (TokenKind::NUMBER, TextStyle::fg(Color::BrightYellow)),
            (TokenKind::STRING, TextStyle::fg(Color::BrightGreen)),
            (TokenKind::COMMENT, TextStyle::fg(Color::White).with(Decorations::DIM)),
            (TokenKind::FUNCTION, TextStyle::fg(Color::BrightBlue)),
            (TokenKind::PROPERTY, TextStyle::fg(Color::Cyan)),
            (TokenKind::PUNCTUATION, TextStyle::fg(Color::BrightWhite)),
            (TokenKind::OPERATOR, TextStyle::fg(Color::BrightWhite)),
        ];
        Self {
            name: "dark".to_string(),
            kind_styles: styles.into_iter().collect(),
            line_highlight_background: Color::BrightBlack,
            diff_added_background: Color::Green,
            diff_removed_background: Color::Red,
            diff_added_foreground: Color::BrightGreen,
            diff_removed_foreground: Color::BrightRed,
            line_number_foreground: Color::White,
        }
    }

    /// Built-in theme for light terminals
    pub fn light() -> Self {
        let styles = [
            (TokenKind::PLAIN, TextStyle::default()),
            (TokenKind::KEYWORD, TextStyle::fg(Color::Magenta).with(Decorations::BOLD)),
            (TokenKind::TYPE, TextStyle::fg(Color::Blue)),
            (TokenKind::NUMBER, TextStyle::fg(Color::Yellow)),
            (TokenKind::STRING, TextStyle::fg(Color::Green)),
            (TokenKind::COMMENT, TextStyle::fg(Color::Black).with(Decorations::DIM)),
            (TokenKind::FUNCTION, TextStyle::fg(Color::Blue)),
            (TokenKind::PROPERTY, TextStyle::fg(Color::Cyan)),
            (TokenKind::PUNCTUATION, TextStyle::fg(Color::Black)),
            (TokenKind::OPERATOR, TextStyle::fg(Color::Black)),
        ];
        Self {
            name: "light".to_string(),
            kind_styles: styles.into_iter().collect(),
            line_highlight_background: Color::BrightYellow,
            diff_added_background: Color::BrightGreen,
            diff_removed_background: Color::BrightRed,
            diff_added_foreground: Color::Green,
            diff_removed_foreground: Color::Red,
            line_number_foreground: Color::Black,
        }
    }

    /// Look up a built-in theme by name (case-insensitive)
    pub fn named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Build a 24-bit theme from a base16 palette
    ///
    /// `palette[i]` is `base0i` as an RGB triple. Diff backgrounds are not
    /// part of base16 and are passed separately.
    pub fn from_base16(
        name: &str,
        palette: [(u8, u8, u8); 16],
        diff_added_background: Color,
        diff_removed_background: Color,
    ) -> Self {
        let base = |i: usize| {
            let (r, g, b) = palette[i];
            Color::Rgb(r, g, b)
        };
        let styles = [
            (TokenKind::PLAIN, TextStyle::fg(base(0x05))),
            (TokenKind::KEYWORD, TextStyle::fg(base(0x0E))),
            (TokenKind::TYPE, TextStyle::fg(base(0x0A))),
            (TokenKind::NUMBER, TextStyle::fg(base(0x09))),
            (TokenKind::STRING, TextStyle::fg(base(0x0B))),
            (TokenKind::COMMENT, TextStyle::fg(base(0x03)).with(Decorations::DIM)),
            (TokenKind::FUNCTION, TextStyle::fg(base(0x0D))),
            (TokenKind::PROPERTY, TextStyle::fg(base(0x08))),
            (TokenKind::PUNCTUATION, TextStyle::fg(base(0x05))),
            (TokenKind::OPERATOR, TextStyle::fg(base(0x05))),
        ];
        Self {
            name: name.to_string(),
            kind_styles: styles.into_iter().collect(),
            line_highlight_background: base(0x02),
            diff_added_background,
            diff_removed_background,
            diff_added_foreground: base(0x0B),
            diff_removed_foreground: base(0x08),
            line_number_foreground: base(0x04),
        }
    }

    /// Style for `kind`, falling back to `plain`, then to no style
    pub fn style(&self, kind: &TokenKind) -> TextStyle {
        self.kind_styles
            .get(kind)
            .or_else(|| self.kind_styles.get(&TokenKind::PLAIN))
            .copied()
            .unwrap_or_default()
    }

    /// Per-call lookup table for token styles
    pub fn style_cache(&self) -> StyleCache<'_> {
        StyleCache {
            styles: &self.kind_styles,
            fallback: self.kind_styles.get(&TokenKind::PLAIN).copied().unwrap_or_default(),
        }
    }

    /// Load a theme from TOML text
    ///
    /// Missing `[ui]` colors fall back to the dark theme.
    pub fn from_toml_str(text: &str) -> Result<Self, ThemeError> {
        let table: toml::Table = text.parse()?;
        let mut theme = Self::dark();
        theme.name = "custom".to_string();
        theme.kind_styles.clear();

        for (key, value) in &table {
            match key.as_str() {
                "name" => {
                    theme.name = value
                        .as_str()
                        .ok_or_else(|| invalid_field("name", "expected a string"))?
                        .to_string();
                }
                "styles" => {
                    let styles = value
                        .as_table()
                        .ok_or_else(|| invalid_field("styles", "expected a table"))?;
                    for (kind, style) in styles {
                        let parsed = parse_style(&format!("styles.{kind}"), style)?;
                        theme.kind_styles.insert(TokenKind::new(kind.clone()), parsed);
                    }
                }
                "ui" => {
                    let ui = value.as_table().ok_or_else(|| invalid_field("ui", "expected a table"))?;
                    for (field, color) in ui {
                        let path = format!("ui.{field}");
                        let color = parse_color(&path, color)?;
                        let slot = match field.as_str() {
                            "line_highlight_bg" => &mut theme.line_highlight_background,
                            "diff_added_bg" => &mut theme.diff_added_background,
                            "diff_removed_bg" => &mut theme.diff_removed_background,
                            "diff_added_fg" => &mut theme.diff_added_foreground,
                            "diff_removed_fg" => &mut theme.diff_removed_foreground,
                            "line_number_fg" => &mut theme.line_number_foreground,
                            _ => return Err(invalid_field(&path, "unknown ui color")),
                        };
                        *slot = color;
                    }
                }
                other => return Err(invalid_field(other, "unknown top-level key")),
            }
        }

        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Token-kind to style lookup built once per render call
#[derive(Debug, Clone)]
pub struct StyleCache<'t> {
    styles: &'t HashMap<TokenKind, TextStyle>,
    fallback: TextStyle,
}

impl StyleCache<'_> {
    pub fn style(&self, kind: &TokenKind) -> TextStyle {
        self.styles.get(kind).copied().unwrap_or(self.fallback)
    }
}

fn invalid_field(field: &str, reason: &str) -> ThemeError {
    ThemeError::InvalidField {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_color(field: &str, value: &toml::Value) -> Result<Color, ThemeError> {
    let parsed = match value {
        toml::Value::String(s) => Color::parse(s),
        toml::Value::Integer(i) => u8::try_from(*i).ok().map(Color::Ansi256),
        _ => None,
    };
    parsed.ok_or_else(|| ThemeError::InvalidColor {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn parse_style(field: &str, value: &toml::Value) -> Result<TextStyle, ThemeError> {
    let table = value
        .as_table()
        .ok_or_else(|| invalid_field(field, "expected an inline table"))?;

    let mut style = TextStyle::default();
    for (key, entry) in table {
        let path = format!("{field}.{key}");
        match key.as_str() {
            "fg" => style.foreground = Some(parse_color(&path, entry)?),
            "bg" => style.background = Some(parse_color(&path, entry)?),
            name => {
                let (_, flag) = Decorations::NAMES
                    .iter()
                    .find(|(n, _)| *n == name)
                    .ok_or_else(|| invalid_field(&path, "unknown style attribute"))?;
                let enabled = entry
                    .as_bool()
                    .ok_or_else(|| invalid_field(&path, "expected a boolean"))?;
                style.decorations.set(*flag, enabled);
            }
        }
    }
    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_fallback() {
        let mut theme = Theme::dark();
        theme
            .kind_styles
            .insert(TokenKind::PLAIN, TextStyle::fg(Color::Red));
        assert_eq!(theme.style(&TokenKind::new("custom")), TextStyle::fg(Color::Red));

        theme.kind_styles.clear();
        assert_eq!(theme.style(&TokenKind::KEYWORD), TextStyle::default());
    }

    #[test]
    fn test_style_cache_matches_theme() {
        let theme = Theme::light();
        let cache = theme.style_cache();
        for kind in TokenKind::BUILTIN.iter() {
            assert_eq!(cache.style(kind), theme.style(kind));
        }
        assert_eq!(cache.style(&TokenKind::new("unknown")), theme.style(&TokenKind::PLAIN));
    }

    #[test]
    fn test_named_themes() {
        assert_eq!(Theme::named("Dark").unwrap().name, "dark");
        assert_eq!(Theme::named("light").unwrap().line_number_foreground, Color::Black);
        assert!(Theme::named("solarized").is_none());
    }

    #[test]
    fn test_from_toml() {
        let text = r##"
name = "example"
[styles]
plain = {}
keyword = { fg = "magenta", bold = true }
comment = { fg = "#5c6370", dim = true }
number = { fg = 208, bg = "bright-black", underline = true }
[ui]
line_highlight_bg = "blue"
"##;
        let theme = Theme::from_toml_str(text).unwrap();
        assert_eq!(theme.name, "example");
        assert_eq!(theme.style(&TokenKind::KEYWORD), TextStyle::fg(Color::Magenta).with(Decorations::BOLD));
        assert_eq!(
            theme.style(&TokenKind::COMMENT),
            TextStyle::fg(Color::Rgb(0x5c, 0x63, 0x70)).with(Decorations::DIM)
        );
        assert_eq!(
            theme.style(&TokenKind::NUMBER),
            TextStyle::fg(Color::Ansi256(208))
                .with_bg(Some(Color::BrightBlack))
                .with(Decorations::UNDERLINE)
        );
        // unlisted kinds fall back to plain
        assert_eq!(theme.style(&TokenKind::STRING), TextStyle::default());
        assert_eq!(theme.line_highlight_background, Color::Blue);
        assert_eq!(theme.diff_added_background, Theme::dark().diff_added_background);
    }

    #[test]
    fn test_from_toml_errors() {
        let bad_color = "[styles]\nkeyword = { fg = \"mauve\" }";
        assert!(matches!(
            Theme::from_toml_str(bad_color),
            Err(ThemeError::InvalidColor { field, .. }) if field == "styles.keyword.fg"
        ));

        let bad_key = "[styles]\nkeyword = { sparkle = true }";
        assert!(matches!(
            Theme::from_toml_str(bad_key),
            Err(ThemeError::InvalidField { field, .. }) if field == "styles.keyword.sparkle"
        ));

        let bad_ui = "[ui]\ngutter = \"red\"";
        assert!(matches!(Theme::from_toml_str(bad_ui), Err(ThemeError::InvalidField { .. })));

        assert!(matches!(Theme::from_toml_str("name = "), Err(ThemeError::Toml(_))));
        assert!(matches!(
            Theme::from_toml_str("[styles]\nnumber = { fg = 300 }"),
            Err(ThemeError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_from_base16() {
        let mut palette = [(0, 0, 0); 16];
        palette[0x0E] = (200, 100, 50);
        palette[0x04] = (1, 2, 3);
        let theme = Theme::from_base16("base16-test", palette, Color::Green, Color::Red);
        assert_eq!(theme.style(&TokenKind::KEYWORD).foreground, Some(Color::Rgb(200, 100, 50)));
        assert_eq!(theme.line_number_foreground, Color::Rgb(1, 2, 3));
        assert!(theme.style(&TokenKind::COMMENT).decorations.contains(Decorations::DIM));
    }
}
