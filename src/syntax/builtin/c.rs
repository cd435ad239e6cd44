//! C family language definitions (C, C++, Objective-C)

use super::{alternation, c_style_rules, rule, DOUBLE_QUOTED, SINGLE_QUOTED};
use crate::syntax::language::{LanguageDefinition, LanguageFastPath, LanguageId};
use crate::syntax::tokens::TokenKind;

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else", "enum", "extern",
    "float", "for", "goto", "if", "inline", "int", "long", "register", "restrict", "return", "short", "signed",
    "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void", "volatile", "while",
];

const C_TYPES: &[&str] = &[
    "size_t", "ptrdiff_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t", "int8_t", "int16_t", "int32_t",
    "int64_t",
];

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break", "case",
    "catch", "char", "char16_t", "char32_t", "class", "compl", "const", "constexpr", "consteval",
    "constinit", "continue", "decltype", "default", "delete", "do", "double", "dynamic_cast", "else",
    "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if", "inline",
    "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator",
    "or", "or_eq", "private", "protected", "public", "register", "reinterpret_cast", "return", "short",
    "signed", "sizeof", "static", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual",
    "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

const CPP_TYPES: &[&str] = &[
    "size_t", "std", "string", "vector", "map", "unordered_map", "unique_ptr", "shared_ptr", "weak_ptr",
    "optional", "variant",
];

const OBJC_AT_KEYWORDS: &[&str] = &[
    "interface", "implementation", "end", "protocol", "class", "public", "private", "protected",
    "package", "property", "synthesize", "dynamic", "selector", "try", "catch", "finally", "throw",
    "autoreleasepool", "import", "synchronized",
];

const OBJC_TYPES: &[&str] = &[
    "id", "BOOL", "NSInteger", "NSUInteger", "CGFloat", "NSObject", "NSString", "NSArray", "NSDictionary",
    "NSSet", "NSData", "NSError",
];

const PREPROCESSOR: &str = r"#\s*(?:include|define|undef|if|ifdef|ifndef|elif|else|endif|pragma)\b.*";

/// Create C language definition
pub(crate) fn c_language() -> LanguageDefinition {
    let rules = c_style_rules(
        C_KEYWORDS,
        C_TYPES,
        &[DOUBLE_QUOTED, SINGLE_QUOTED],
        vec![rule(TokenKind::KEYWORD, PREPROCESSOR)],
    );
    LanguageDefinition::new(LanguageId::C, "C", rules).with_fast_path(LanguageFastPath::new(C_KEYWORDS, C_TYPES))
}

/// Create C++ language definition
pub(crate) fn cpp_language() -> LanguageDefinition {
    let rules = c_style_rules(
        CPP_KEYWORDS,
        CPP_TYPES,
        &[r#"R"[\s\S]*?""#, DOUBLE_QUOTED, SINGLE_QUOTED],
        vec![rule(TokenKind::KEYWORD, PREPROCESSOR)],
    );
    LanguageDefinition::new(LanguageId::CPP, "C++", rules)
        .with_fast_path(LanguageFastPath::new(CPP_KEYWORDS, CPP_TYPES))
}

/// Create Objective-C language definition
pub(crate) fn objective_c_language() -> LanguageDefinition {
    let mut keywords = C_KEYWORDS.to_vec();
    keywords.push("self");

    let rules = c_style_rules(
        &keywords,
        OBJC_TYPES,
        &[r#"@"(?:\\.|[^"\\])*""#, DOUBLE_QUOTED, SINGLE_QUOTED],
        vec![
            rule(
                TokenKind::KEYWORD,
                r"#\s*(?:import|include|define|undef|if|ifdef|ifndef|elif|else|endif|pragma)\b.*",
            ),
            rule(TokenKind::KEYWORD, &format!(r"@(?:{})\b", alternation(OBJC_AT_KEYWORDS))),
        ],
    );
    LanguageDefinition::new(LanguageId::OBJECTIVE_C, "Objective-C", rules)
        .with_fast_path(LanguageFastPath::new(&keywords, OBJC_TYPES))
}
