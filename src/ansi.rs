//! ANSI SGR output
//!
//! Accumulates styled text into a string. Escape prefixes are built once
//! per distinct style and reused for the rest of the call.

use std::collections::HashMap;
use std::fmt::Write;

use crate::style::TextStyle;

const RESET: &str = "\x1b[0m";

/// Per-call styled string builder
pub struct AnsiWriter {
    enabled: bool,
    out: String,
    prefixes: HashMap<TextStyle, String>,
}

impl AnsiWriter {
    /// Create a writer; when `enabled` is false text passes through untouched
    pub fn new(enabled: bool, capacity: usize) -> Self {
        Self {
            enabled,
            out: String::with_capacity(capacity),
            prefixes: HashMap::new(),
        }
    }

    /// Whether escape sequences are being emitted
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Append unstyled text
    pub fn push_plain(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Append `text` wrapped in the escape sequence for `style`
    ///
    /// Empty text and styles without any SGR codes are appended as-is.
    pub fn push(&mut self, text: &str, style: TextStyle) {
        if !self.enabled || text.is_empty() || style.is_default() {
            self.out.push_str(text);
            return;
        }

        let prefix = self.prefixes.entry(style).or_insert_with(|| build_prefix(&style));
        if prefix.is_empty() {
            self.out.push_str(text);
            return;
        }
        self.out.push_str(prefix);
        self.out.push_str(text);
        self.out.push_str(RESET);
    }

    /// Number of distinct style prefixes built so far
    pub fn cached_prefixes(&self) -> usize {
        self.prefixes.len()
    }

    pub fn finish(self) -> String {
        self.out
    }
}

fn build_prefix(style: &TextStyle) -> String {
    let codes = style.sgr_codes();
    if codes.is_empty() {
        return String::new();
    }

    let mut prefix = String::from("\x1b[");
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            prefix.push(';');
        }
        let _ = write!(prefix, "{code}");
    }
    prefix.push('m');
    prefix
}
