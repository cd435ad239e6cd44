use chroma::{
    ColorMode, ColorOutput, DiffDetector, DiffHighlightMode, DiffLineKind, DiffPresentation, HighlightOptions,
    Highlighter, LanguageDefinition, LanguageId, LanguageRegistry, LineNumbers, MissingLanguage, RegexTokenizer, Theme,
    Token, TokenKind, TokenRule,
};
use std::collections::HashMap;
use std::sync::Arc;

fn kinds<'a>(code: &'a str, tokens: &[Token]) -> Vec<(&'a str, String)> {
    tokens.iter().map(|t| (t.text(code), t.kind.to_string())).collect()
}

fn always() -> HighlightOptions {
    HighlightOptions::new().with_color_mode(ColorMode::Always)
}

#[test]
fn test_swift_assignment_tokens() {
    let code = "let value = 42";
    let tokens = chroma::tokenize(code, Some(&LanguageId::SWIFT)).unwrap();
    assert_eq!(
        kinds(code, &tokens),
        vec![
            ("let", "keyword".to_string()),
            (" value ", "plain".to_string()),
            ("=", "operator".to_string()),
            (" ", "plain".to_string()),
            ("42", "number".to_string()),
        ]
    );
}

#[test]
fn test_longest_match_beats_rule_order() {
    let rules = vec![
        TokenRule::new(TokenKind::KEYWORD, "let").unwrap(),
        TokenRule::new(TokenKind::TYPE, "letter").unwrap(),
    ];
    let language = LanguageDefinition::new(LanguageId::new("letters"), "Letters", rules);
    let tokens = RegexTokenizer::new(Arc::new(language)).tokenize("letter");
    assert_eq!(tokens, vec![Token::new(TokenKind::TYPE, 0, 6)]);
}

#[test]
fn test_equal_length_goes_to_earlier_rule() {
    let rules = vec![
        TokenRule::new(TokenKind::STRING, "ab").unwrap(),
        TokenRule::new(TokenKind::NUMBER, "a.").unwrap(),
    ];
    let language = LanguageDefinition::new(LanguageId::new("tie"), "Tie", rules);
    let tokens = RegexTokenizer::new(Arc::new(language)).tokenize("ab");
    assert_eq!(tokens, vec![Token::new(TokenKind::STRING, 0, 2)]);
}

#[test]
fn test_diff_file_header_is_not_added() {
    assert_eq!(DiffDetector::classify("+++ b/foo"), Some(DiffLineKind::FileHeader));
    assert_eq!(DiffDetector::classify(" -let a = 1"), None);
}

#[test]
fn test_markdown_swift_fence() {
    let code = "Intro\n```swift\nlet x = 1\n```\n";
    let tokens = chroma::tokenize(code, Some(&LanguageId::MARKDOWN)).unwrap();

    let at = |offset: usize| tokens.iter().find(|t| t.start == offset).expect("token at offset");
    assert_eq!(at(6).kind, TokenKind::KEYWORD);
    assert_eq!(at(6).text(code), "```swift");
    assert_eq!(at(15).kind, TokenKind::KEYWORD);
    assert_eq!(at(15).text(code), "let");
    assert_eq!(at(25).kind, TokenKind::KEYWORD);
    assert_eq!(at(25).text(code), "```");
    assert!(kinds(code, &tokens).contains(&("1", "number".to_string())));
}

#[test]
fn test_markdown_self_fence_is_plain() {
    let code = "```md\n# not a header\n```";
    let tokens = chroma::tokenize(code, Some(&LanguageId::MD)).unwrap();
    let inner = tokens.iter().find(|t| t.start == 6).expect("fence body");
    assert_eq!(inner.kind, TokenKind::PLAIN);
    assert_eq!(inner.text(code), "# not a header\n");
}

#[test]
fn test_pass_through_without_language() {
    let text = "diff --git a/x b/x\n+added\n-removed\nplain ✓\n";
    let options = HighlightOptions::new().with_color_mode(ColorMode::Never);
    assert_eq!(chroma::highlight(text, None, &options).unwrap(), text);

    let plain = always().with_diff(DiffHighlightMode::None);
    assert_eq!(chroma::highlight(text, None, &plain).unwrap(), text);
}

#[test]
fn test_line_highlight_beats_diff_background() {
    let theme = Theme::dark();
    let options = always()
        .with_diff(DiffHighlightMode::patch())
        .with_highlight_lines([1..=1].into_iter().collect());
    let output = chroma::highlight("+let a = 1\n+let b = 2", Some(&LanguageId::SWIFT), &options).unwrap();

    let keyword = theme.style(&TokenKind::KEYWORD);
    let mut expect_highlight = chroma::AnsiWriter::new(true, 0);
    expect_highlight.push("let", keyword.with_bg(Some(theme.line_highlight_background)));
    let mut expect_added = chroma::AnsiWriter::new(true, 0);
    expect_added.push("let", keyword.with_bg(Some(theme.diff_added_background)));

    let (first, second) = output.split_once('\n').unwrap();
    assert!(first.contains(&expect_highlight.finish()));
    assert!(second.contains(&expect_added.finish()));
}

#[test]
fn test_no_color_disables_auto_on_tty() {
    let env: HashMap<&str, &str> = [("NO_COLOR", "1")].into_iter().collect();
    let mode = ColorMode::Auto(ColorOutput::Stdout);
    assert!(!mode.resolve(true, |key| env.get(key).map(|v| v.to_string()), |_| true));
    assert!(mode.resolve(true, |_| None, |_| true));
}

#[test]
fn test_compact_patch_with_line_numbers() {
    let patch = "\
diff --git a/lib.rs b/lib.rs
index 1111111..2222222 100644
--- a/lib.rs
+++ b/lib.rs
@@ -1,3 +1,3 @@
 use std::fmt;
-fn old() {}
+fn new() {}
@@ -10,2 +10,2 @@
 // tail
-let a = 1;
+let a = 2;";
    let options = HighlightOptions::new()
        .with_color_mode(ColorMode::Never)
        .with_diff(DiffHighlightMode::auto().with_presentation(DiffPresentation::Compact))
        .with_line_numbers(LineNumbers::new(1))
        .with_indent(2);
    let output = chroma::highlight(patch, None, &options).unwrap();
    let expected = [
        "   1  use std::fmt;",
        "   2 -fn old() {}",
        "   2 +fn new() {}",
        "   ⋮",
        "  10  // tail",
        "  11 -let a = 1;",
        "  11 +let a = 2;",
    ]
    .join("\n");
    assert_eq!(output, expected);
}

#[test]
fn test_fallback_keeps_line_numbers() {
    let options = HighlightOptions::new()
        .with_color_mode(ColorMode::Never)
        .with_missing_language(MissingLanguage::FallbackToPlainText)
        .with_line_numbers(LineNumbers::new(1));
    let output = chroma::highlight("a\nb", Some(&LanguageId::new("nope")), &options).unwrap();
    assert_eq!(output, "1 a\n2 b");
}

#[test]
fn test_separate_registry_is_isolated() {
    let registry = Arc::new(LanguageRegistry::new(Vec::new()));
    let highlighter = Highlighter::new(Theme::light(), Arc::clone(&registry));
    assert!(highlighter.tokenize("x", Some(&LanguageId::SWIFT)).is_err());
    assert!(chroma::tokenize("x", Some(&LanguageId::SWIFT)).is_ok());
}

#[test]
fn test_theme_from_toml_drives_output() {
    let theme = Theme::from_toml_str(
        r#"
name = "mono"
[styles]
keyword = { fg = "red", bold = true }
"#,
    )
    .unwrap();
    let options = always().with_theme(theme);
    let output = chroma::highlight("let a", Some(&LanguageId::SWIFT), &options).unwrap();
    assert_eq!(output, "\x1b[31;1mlet\x1b[0m a");
}
