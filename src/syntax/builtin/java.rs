//! JVM and managed-runtime languages (Java, Kotlin, C#, Dart)

use super::{c_style_rules, rule, DOUBLE_QUOTED, SINGLE_QUOTED};
use crate::syntax::language::{LanguageDefinition, LanguageFastPath, LanguageId};
use crate::syntax::tokens::TokenKind;

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long", "native",
    "new", "null", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false",
];

const JAVA_TYPES: &[&str] = &[
    "String", "Object", "List", "Map", "Set", "Optional", "Integer", "Long", "Double", "Float", "Boolean",
];

const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in", "interface", "is",
    "null", "object", "package", "return", "super", "this", "throw", "true", "try", "typealias", "val",
    "var", "when", "while", "by", "catch", "constructor", "delegate", "dynamic", "field", "file",
    "finally", "get", "import", "init", "param", "property", "receiver", "set", "setparam", "where",
];

const KOTLIN_TYPES: &[&str] = &[
    "Any", "Boolean", "Byte", "Char", "Double", "Float", "Int", "Long", "Short", "String", "Unit",
    "List", "Map", "Set",
];

const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked", "class", "const",
    "continue", "decimal", "default", "delegate", "do", "double", "else", "enum", "event", "explicit",
    "extern", "false", "finally", "fixed", "float", "for", "foreach", "goto", "if", "implicit", "in",
    "int", "interface", "internal", "is", "lock", "long", "namespace", "new", "null", "object", "operator",
    "out", "override", "params", "private", "protected", "public", "readonly", "ref", "return", "sbyte",
    "sealed", "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw",
    "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual", "void",
    "volatile", "while", "var", "record", "init", "required", "with", "when",
];

const CSHARP_TYPES: &[&str] = &[
    "bool", "byte", "sbyte", "short", "ushort", "int", "uint", "long", "ulong", "float", "double", "decimal",
    "char", "string", "object", "dynamic", "DateTime", "Guid", "Task", "ValueTask",
];

const DART_KEYWORDS: &[&str] = &[
    "abstract", "as", "assert", "async", "await", "break", "case", "catch", "class", "const", "continue",
    "default", "do", "else", "enum", "export", "extends", "extension", "external", "false", "final",
    "finally", "for", "function", "get", "if", "implements", "import", "in", "is", "late", "mixin",
    "new", "null", "on", "operator", "required", "return", "set", "static", "super", "switch", "this",
    "throw", "true", "try", "var", "void", "while", "with", "yield",
];

const DART_TYPES: &[&str] = &["int", "double", "bool", "String", "List", "Map", "Set", "Object", "Future", "Stream"];

pub(crate) fn java_language() -> LanguageDefinition {
    let rules = c_style_rules(
        JAVA_KEYWORDS,
        JAVA_TYPES,
        &[DOUBLE_QUOTED, SINGLE_QUOTED],
        vec![rule(TokenKind::KEYWORD, r"@[A-Za-z_][A-Za-z0-9_]*\b")],
    );
    LanguageDefinition::new(LanguageId::JAVA, "Java", rules)
        .with_fast_path(LanguageFastPath::new(JAVA_KEYWORDS, JAVA_TYPES))
}

pub(crate) fn kotlin_language() -> LanguageDefinition {
    let rules = c_style_rules(
        KOTLIN_KEYWORDS,
        KOTLIN_TYPES,
        &[r#""""[\s\S]*?""""#, DOUBLE_QUOTED, SINGLE_QUOTED],
        Vec::new(),
    );
    LanguageDefinition::new(LanguageId::KOTLIN, "Kotlin", rules)
        .with_fast_path(LanguageFastPath::new(KOTLIN_KEYWORDS, KOTLIN_TYPES))
}

pub(crate) fn csharp_language() -> LanguageDefinition {
    let rules = c_style_rules(
        CSHARP_KEYWORDS,
        CSHARP_TYPES,
        &[
            r#"\$@"(?:""|[\s\S])*?""#,
            r#"@"(?:""|[\s\S])*?""#,
            r#"\$"(?:\\.|[^"\\])*""#,
            DOUBLE_QUOTED,
            SINGLE_QUOTED,
        ],
        Vec::new(),
    );
    LanguageDefinition::new(LanguageId::CSHARP, "C#", rules)
        .with_fast_path(LanguageFastPath::new(CSHARP_KEYWORDS, CSHARP_TYPES))
}

pub(crate) fn dart_language() -> LanguageDefinition {
    let rules = c_style_rules(
        DART_KEYWORDS,
        DART_TYPES,
        &[
            r#"r"[\s\S]*?""#,
            r"r'[\s\S]*?'",
            r#""""[\s\S]*?""""#,
            r"'''[\s\S]*?'''",
            DOUBLE_QUOTED,
            SINGLE_QUOTED,
        ],
        Vec::new(),
    );
    LanguageDefinition::new(LanguageId::DART, "Dart", rules)
        .with_fast_path(LanguageFastPath::new(DART_KEYWORDS, DART_TYPES))
}
