#![forbid(unsafe_code)]

//! ANSI 16-color model and SGR style values.

/// ANSI 16-color indices (0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ansi16 {
    /// Black (index 0).
    Black = 0,
    /// Red (index 1).
    Red = 1,
    /// Green (index 2).
    Green = 2,
    /// Yellow (index 3).
    Yellow = 3,
    /// Blue (index 4).
    Blue = 4,
    /// Magenta (index 5).
    Magenta = 5,
    /// Cyan (index 6).
    Cyan = 6,
    /// White (index 7).
    White = 7,
    /// Bright black (index 8).
    BrightBlack = 8,
    /// Bright red (index 9).
    BrightRed = 9,
    /// Bright green (index 10).
    BrightGreen = 10,
    /// Bright yellow (index 11).
    BrightYellow = 11,
    /// Bright blue (index 12).
    BrightBlue = 12,
    /// Bright magenta (index 13).
    BrightMagenta = 13,
    /// Bright cyan (index 14).
    BrightCyan = 14,
    /// Bright white (index 15).
    BrightWhite = 15,
}

impl Ansi16 {
    /// Return the raw ANSI index (0-15).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// SGR foreground code: 30-37 for the base colors, 90-97 for bright ones.
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        let index = self.as_u8();
        if index < 8 { 30 + index } else { 90 + index - 8 }
    }
}

/// Leading SGR attribute of a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Attr {
    /// `0`: normal intensity (resets other attributes).
    #[default]
    Normal = 0,
    /// `1`: bold.
    Bold = 1,
    /// `7`: reverse video.
    Reverse = 7,
}

impl Attr {
    /// SGR parameter for the attribute.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// A two-parameter SGR style, `ESC [ attr ; fg m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sgr {
    /// Attribute parameter.
    pub attr: Attr,
    /// Foreground color.
    pub fg: Ansi16,
}

impl Sgr {
    /// Create a style.
    #[must_use]
    pub const fn new(attr: Attr, fg: Ansi16) -> Self {
        Self { attr, fg }
    }

    /// Normal-intensity color.
    #[must_use]
    pub const fn normal(fg: Ansi16) -> Self {
        Self::new(Attr::Normal, fg)
    }

    /// Bold color.
    #[must_use]
    pub const fn bold(fg: Ansi16) -> Self {
        Self::new(Attr::Bold, fg)
    }

    /// Same color drawn in reverse video.
    ///
    /// Used for changes that consist only of whitespace, which would be
    /// invisible in a foreground color.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(Attr::Reverse, self.fg)
    }

    /// SGR parameters as `(attr, fg)`.
    #[must_use]
    pub const fn params(self) -> (u8, u8) {
        (self.attr.code(), self.fg.fg_code())
    }
}
