//! Rust language definition

use super::{c_style_rules, DOUBLE_QUOTED, SINGLE_QUOTED};
use crate::syntax::language::{LanguageDefinition, LanguageFastPath, LanguageId};

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where", "while",
];

const TYPES: &[&str] = &[
    "bool", "char", "str", "String", "usize", "isize", "u8", "u16", "u32", "u64", "u128", "i8", "i16",
    "i32", "i64", "i128", "f32", "f64", "Option", "Result",
];

/// Create Rust language definition
pub(crate) fn rust_language() -> LanguageDefinition {
    // raw strings first so r#"..."# is not split at the inner quote
    let rules = c_style_rules(KEYWORDS, TYPES, &[r##"r#*"[\s\S]*?"#*"##, DOUBLE_QUOTED, SINGLE_QUOTED], Vec::new());
    LanguageDefinition::new(LanguageId::RUST, "Rust", rules).with_fast_path(LanguageFastPath::new(KEYWORDS, TYPES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tokens::TokenKind;
    use crate::syntax::RegexTokenizer;
    use std::sync::Arc;

    #[test]
    fn test_rust_function_signature() {
        let code = "fn main() -> Result<u8> {}";
        let tokens = RegexTokenizer::new(Arc::new(rust_language())).tokenize(code);
        let kinds: Vec<_> = tokens.iter().map(|t| (t.kind.clone(), t.text(code))).collect();
        assert_eq!(
            kinds,
            vec![
                (TokenKind::KEYWORD, "fn"),
                (TokenKind::PLAIN, " "),
                (TokenKind::FUNCTION, "main"),
                (TokenKind::PUNCTUATION, "()"),
                (TokenKind::PLAIN, " "),
                (TokenKind::OPERATOR, "->"),
                (TokenKind::PLAIN, " "),
                (TokenKind::TYPE, "Result"),
                (TokenKind::OPERATOR, "<"),
                (TokenKind::TYPE, "u8"),
                (TokenKind::OPERATOR, ">"),
                (TokenKind::PLAIN, " "),
                (TokenKind::PUNCTUATION, "{}"),
            ]
        );
    }
}
