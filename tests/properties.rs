use chroma::{
    coalesce, ColorMode, DiffDetector, DiffHighlightMode, DiffLineKind, HighlightOptions, LanguageDefinition,
    LanguageId, LanguageRegistry, MarkdownTokenizer, RegexTokenizer, Token,
};
use proptest::prelude::*;
use std::sync::{Arc, OnceLock};

fn registry() -> &'static LanguageRegistry {
    static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();
    REGISTRY.get_or_init(LanguageRegistry::with_builtins)
}

fn language(id: &LanguageId) -> Arc<LanguageDefinition> {
    registry().language(id).expect("built-in language")
}

/// Code-like text with quotes, comments, operators and non-ASCII
fn source_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9_ \t\n\"'#/*+=\\-.,;:(){}<>\\[\\]`~@$é✓漢]{0,120}",
        "\\PC{0,60}",
        "(let|fn|def|select|SELECT|struct|if|else|return|true|nil|x|é|_|[0-9]| |\n|\"|//|#|```swift\n|```\n)*",
    ]
}

fn assert_covers(text: &str, tokens: &[Token]) -> Result<(), TestCaseError> {
    let mut offset = 0;
    for token in tokens {
        prop_assert_eq!(token.start, offset);
        prop_assert!(token.len > 0);
        prop_assert!(text.is_char_boundary(token.start));
        prop_assert!(text.is_char_boundary(token.end()));
        offset = token.end();
    }
    prop_assert_eq!(offset, text.len());
    Ok(())
}

const SAMPLED: [LanguageId; 8] = [
    LanguageId::SWIFT,
    LanguageId::RUST,
    LanguageId::SQL,
    LanguageId::RUBY,
    LanguageId::YAML,
    LanguageId::HTML,
    LanguageId::BASH,
    LanguageId::JAVASCRIPT,
];

proptest! {
    #[test]
    fn test_tokens_cover_input(text in source_text(), index in 0..SAMPLED.len()) {
        let tokens = RegexTokenizer::new(language(&SAMPLED[index])).tokenize(&text);
        assert_covers(&text, &tokens)?;
    }

    #[test]
    fn test_markdown_tokens_cover_input(text in source_text()) {
        let tokens = MarkdownTokenizer::new(language(&LanguageId::MARKDOWN), registry()).tokenize(&text);
        assert_covers(&text, &tokens)?;
    }

    #[test]
    fn test_tokens_already_coalesced(text in source_text(), index in 0..SAMPLED.len()) {
        let tokens = RegexTokenizer::new(language(&SAMPLED[index])).tokenize(&text);
        for pair in tokens.windows(2) {
            prop_assert_ne!(&pair[0].kind, &pair[1].kind);
        }
        let once = coalesce(tokens.clone());
        prop_assert_eq!(&once, &tokens);
        prop_assert_eq!(coalesce(once.clone()), once);
    }

    #[test]
    fn test_fast_path_matches_regex(text in source_text(), index in 0..SAMPLED.len()) {
        let with_fast_path = language(&SAMPLED[index]);
        let mut without = (*with_fast_path).clone();
        without.fast_path = None;

        let fast = RegexTokenizer::new(with_fast_path).tokenize(&text);
        let slow = RegexTokenizer::new(Arc::new(without)).tokenize(&text);
        prop_assert_eq!(fast, slow);
    }

    #[test]
    fn test_uncolored_highlight_is_identity(text in source_text(), index in 0..SAMPLED.len()) {
        let options = HighlightOptions::new().with_color_mode(ColorMode::Never);
        let output = chroma::highlight(&text, Some(&SAMPLED[index]), &options).unwrap();
        prop_assert_eq!(output, text.clone());

        let plain = HighlightOptions::new()
            .with_color_mode(ColorMode::Always)
            .with_diff(DiffHighlightMode::None);
        prop_assert_eq!(chroma::highlight(&text, None, &plain).unwrap(), text);
    }

    #[test]
    fn test_file_header_never_added(rest in "\\PC{0,40}") {
        prop_assert_eq!(DiffDetector::classify(&format!("+++ {rest}")), Some(DiffLineKind::FileHeader));
        prop_assert_eq!(DiffDetector::classify(&format!("--- {rest}")), Some(DiffLineKind::FileHeader));
    }
}
