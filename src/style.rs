//! Style types for text rendering
//!
//! This module provides the colors, decorations and style tuples that
//! themes map token kinds to and the ANSI writer turns into SGR codes.

use bitflags::bitflags;

/// Terminal colors
///
/// The 16 named ANSI colors plus the 256-color palette and 24-bit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// Index into the 256-color palette
    Ansi256(u8),
    /// 24-bit color
    Rgb(u8, u8, u8),
}

impl Color {
    const NAMED: [(&'static str, Color); 16] = [
        ("black", Color::Black),
        ("red", Color::Red),
        ("green", Color::Green),
        ("yellow", Color::Yellow),
        ("blue", Color::Blue),
        ("magenta", Color::Magenta),
        ("cyan", Color::Cyan),
        ("white", Color::White),
        ("bright-black", Color::BrightBlack),
        ("bright-red", Color::BrightRed),
        ("bright-green", Color::BrightGreen),
        ("bright-yellow", Color::BrightYellow),
        ("bright-blue", Color::BrightBlue),
        ("bright-magenta", Color::BrightMagenta),
        ("bright-cyan", Color::BrightCyan),
        ("bright-white", Color::BrightWhite),
    ];

    /// Parse a color name, `#rrggbb`, or a palette index
    ///
    /// Names are case-insensitive and accept `_` in place of `-`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
        }
        if let Ok(index) = value.parse::<u8>() {
            return Some(Color::Ansi256(index));
        }

        let name = value.to_ascii_lowercase().replace('_', "-");
        Self::NAMED.iter().find(|(n, _)| *n == name).map(|(_, color)| *color)
    }

    /// Base SGR code of a named color (30..=37, 90..=97)
    fn named_code(self) -> Option<u8> {
        let code = match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::BrightBlack => 90,
            Color::BrightRed => 91,
            Color::BrightGreen => 92,
            Color::BrightYellow => 93,
            Color::BrightBlue => 94,
            Color::BrightMagenta => 95,
            Color::BrightCyan => 96,
            Color::BrightWhite => 97,
            Color::Ansi256(_) | Color::Rgb(..) => return None,
        };
        Some(code)
    }

    /// Append the SGR parameters selecting this color as foreground
    pub fn push_foreground_codes(self, codes: &mut Vec<u8>) {
        self.push_codes(codes, 0, 38);
    }

    /// Append the SGR parameters selecting this color as background
    pub fn push_background_codes(self, codes: &mut Vec<u8>) {
        self.push_codes(codes, 10, 48);
    }

    fn push_codes(self, codes: &mut Vec<u8>, named_offset: u8, extended: u8) {
        if let Some(code) = self.named_code() {
            codes.push(code + named_offset);
            return;
        }
        match self {
            Color::Ansi256(index) => codes.extend([extended, 5, index]),
            Color::Rgb(r, g, b) => codes.extend([extended, 2, r, g, b]),
            _ => {}
        }
    }
}

bitflags! {
    /// Text decorations
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Decorations: u8 {
        const BOLD          = 1 << 0;
        const DIM           = 1 << 1;
        const ITALIC        = 1 << 2;
        const UNDERLINE     = 1 << 3;
        const BLINK         = 1 << 4;
        const REVERSE       = 1 << 5;
        const STRIKETHROUGH = 1 << 6;
    }
}

impl Decorations {
    /// Decoration names as accepted in theme files
    pub const NAMES: [(&'static str, Decorations); 7] = [
        ("bold", Decorations::BOLD),
        ("dim", Decorations::DIM),
        ("italic", Decorations::ITALIC),
        ("underline", Decorations::UNDERLINE),
        ("blink", Decorations::BLINK),
        ("reverse", Decorations::REVERSE),
        ("strikethrough", Decorations::STRIKETHROUGH),
    ];

    /// Append SGR parameters, lowest code first
    pub fn push_codes(self, codes: &mut Vec<u8>) {
        const SGR: [(Decorations, u8); 7] = [
            (Decorations::BOLD, 1),
            (Decorations::DIM, 2),
            (Decorations::ITALIC, 3),
            (Decorations::UNDERLINE, 4),
            (Decorations::BLINK, 5),
            (Decorations::REVERSE, 7),
            (Decorations::STRIKETHROUGH, 9),
        ];
        codes.extend(SGR.iter().filter(|(flag, _)| self.contains(*flag)).map(|(_, code)| *code));
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextStyle {
    /// Foreground color
    pub foreground: Option<Color>,
    /// Background color
    pub background: Option<Color>,
    /// Bold, dim, italic, ...
    pub decorations: Decorations,
}

impl TextStyle {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            foreground: Some(color),
            ..Default::default()
        }
    }

    /// Create a style with just background color
    pub fn bg(color: Color) -> Self {
        Self {
            background: Some(color),
            ..Default::default()
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Builder: set or clear background color
    pub fn with_bg(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    /// Builder: add decorations
    pub fn with(mut self, decorations: Decorations) -> Self {
        self.decorations |= decorations;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// SGR parameters in emission order: foreground, background, decorations
    pub fn sgr_codes(&self) -> Vec<u8> {
        let mut codes = Vec::new();
        if let Some(fg) = self.foreground {
            fg.push_foreground_codes(&mut codes);
        }
        if let Some(bg) = self.background {
            bg.push_background_codes(&mut codes);
        }
        self.decorations.push_codes(&mut codes);
        codes
    }
}
