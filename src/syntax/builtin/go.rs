//! Go language definition

use super::{c_style_rules, DOUBLE_QUOTED, SINGLE_QUOTED};
use crate::syntax::language::{LanguageDefinition, LanguageFastPath, LanguageId};

const KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough", "for", "func",
    "go", "goto", "if", "import", "interface", "map", "package", "range", "return", "select", "struct",
    "switch", "type", "var", "true", "false", "nil", "iota",
];

const TYPES: &[&str] = &[
    "bool", "byte", "complex64", "complex128", "error", "float32", "float64", "int", "int8", "int16",
    "int32", "int64", "rune", "string", "uint", "uint8", "uint16", "uint32", "uint64", "uintptr", "any",
];

/// Create Go language definition
pub(crate) fn go_language() -> LanguageDefinition {
    // raw strings are backquoted and may span lines
    let rules = c_style_rules(KEYWORDS, TYPES, &["`[^`]*`", DOUBLE_QUOTED, SINGLE_QUOTED], Vec::new());
    LanguageDefinition::new(LanguageId::GO, "Go", rules).with_fast_path(LanguageFastPath::new(KEYWORDS, TYPES))
}
