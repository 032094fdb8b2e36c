//! Styles for segments and borders.
//!
//! A [`Style`] is a foreground color, a background color, and a set of
//! attribute flags. Styles parse from the word syntax used throughout the
//! crate (`"bold red on blue"`), and [`StyleSpec`] lets callers hand either
//! a name to be resolved at render time or an already-resolved [`Style`].

use crate::color::Color;

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const REVERSE = 1 << 5;
        const STRIKE = 1 << 6;
    }
}

/// A resolved text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Attribute flags.
    pub attrs: Attr,
}

impl Style {
    /// The plain style: terminal default colors, no attributes.
    pub const fn new() -> Self {
        Self {
            fg: Color::Default,
            bg: Color::Default,
            attrs: Attr::NONE,
        }
    }

    /// Check if this style changes nothing.
    pub const fn is_plain(&self) -> bool {
        self.fg.is_default() && self.bg.is_default() && self.attrs.is_empty()
    }

    /// Set the foreground color.
    pub fn fg(mut self, color: impl Into<Color>) -> Self {
        self.fg = color.into();
        self
    }

    /// Set the background color.
    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.bg = color.into();
        self
    }

    /// Add bold.
    pub const fn bold(mut self) -> Self {
        self.attrs = self.attrs.union(Attr::BOLD);
        self
    }

    /// Add dim.
    pub const fn dim(mut self) -> Self {
        self.attrs = self.attrs.union(Attr::DIM);
        self
    }

    /// Add italic.
    pub const fn italic(mut self) -> Self {
        self.attrs = self.attrs.union(Attr::ITALIC);
        self
    }

    /// Add underline.
    pub const fn underline(mut self) -> Self {
        self.attrs = self.attrs.union(Attr::UNDERLINE);
        self
    }

    /// Add reverse video.
    pub const fn reverse(mut self) -> Self {
        self.attrs = self.attrs.union(Attr::REVERSE);
        self
    }

    /// Layer `other` over this style.
    ///
    /// Colors in `other` win unless they are the terminal default;
    /// attributes are the union of both.
    pub fn combine(self, other: Self) -> Self {
        Self {
            fg: if other.fg.is_default() { self.fg } else { other.fg },
            bg: if other.bg.is_default() { self.bg } else { other.bg },
            attrs: self.attrs | other.attrs,
        }
    }

    /// Parse a style description.
    ///
    /// The description is whitespace-separated words: attribute words
    /// (`bold`, `dim`, `italic`, `underline`, `blink`, `reverse`,
    /// `strike`), a color word for the foreground, and `on <color>` for
    /// the background. `"none"` and the empty string are the plain style.
    /// Any unrecognized word fails the whole parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use quillbox::style::Style;
    /// use quillbox::color::Color;
    ///
    /// let style = Style::parse("bold red on black").unwrap();
    /// assert_eq!(style.fg, Color::Ansi(1));
    /// assert_eq!(style.bg, Color::Ansi(0));
    ///
    /// assert_eq!(Style::parse("none"), Some(Style::new()));
    /// assert_eq!(Style::parse("loud"), None);
    /// ```
    pub fn parse(description: &str) -> Option<Self> {
        let mut style = Self::new();
        let mut words = description.split_whitespace().peekable();

        if words.peek().is_none() {
            return Some(style);
        }

        while let Some(word) = words.next() {
            match word.to_lowercase().as_str() {
                "none" => {}
                "bold" => style.attrs |= Attr::BOLD,
                "dim" => style.attrs |= Attr::DIM,
                "italic" => style.attrs |= Attr::ITALIC,
                "underline" => style.attrs |= Attr::UNDERLINE,
                "blink" => style.attrs |= Attr::BLINK,
                "reverse" => style.attrs |= Attr::REVERSE,
                "strike" => style.attrs |= Attr::STRIKE,
                "on" => {
                    style.bg = Color::parse(words.next()?)?;
                }
                other => {
                    style.fg = Color::parse(other)?;
                }
            }
        }

        Some(style)
    }
}

/// A style given either by name or already resolved.
///
/// Named specs are resolved once at render time by
/// [`Console::get_style`](crate::console::Console::get_style).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSpec {
    /// A style description to be parsed (`"bold magenta"`).
    Named(String),
    /// An already-resolved style.
    Resolved(Style),
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self::Resolved(Style::new())
    }
}

impl From<&str> for StyleSpec {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for StyleSpec {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Style> for StyleSpec {
    fn from(style: Style) -> Self {
        Self::Resolved(style)
    }
}
