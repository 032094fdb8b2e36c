//! Plain text as a renderable.
//!
//! [`Text`] wraps a string (optionally styled) and gives it the measure +
//! render protocol: measurement reports the widest word and widest line,
//! rendering word-wraps to the requested width. The wrapping functions are
//! public; other renderables build on them.

use unicode_segmentation::UnicodeSegmentation;

use crate::cells::{grapheme_width, string_width};
use crate::console::{Console, ConsoleOptions, Renderable};
use crate::measure::Measurement;
use crate::segment::Segment;
use crate::style::Style;

/// A string with an optional style, renderable into wrapped lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    /// The raw content. Explicit newlines are hard line breaks.
    pub content: String,
    /// Style applied to every emitted segment.
    pub style: Option<Style>,
}

impl Text {
    /// Create unstyled text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: None,
        }
    }

    /// Create styled text.
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style: Some(style),
        }
    }

    /// Set the style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl Renderable for Text {
    fn render(&self, _console: &Console, options: &ConsoleOptions) -> Vec<Segment> {
        let lines = wrap_words(&self.content, options.max_width);
        if lines.is_empty() {
            // Empty text still occupies one blank visual line.
            return vec![Segment::line()];
        }

        let mut segments = Vec::with_capacity(lines.len() * 2);
        for line in lines {
            if !line.is_empty() {
                segments.push(Segment {
                    text: line,
                    style: self.style,
                });
            }
            segments.push(Segment::line());
        }
        segments
    }

    fn measure(&self, _console: &Console, max_width: usize) -> Measurement {
        let maximum = self
            .content
            .split('\n')
            .map(string_width)
            .max()
            .unwrap_or(0);
        let minimum = self
            .content
            .split_whitespace()
            .map(string_width)
            .max()
            .unwrap_or(0);
        Measurement::new(minimum.min(maximum), maximum).with_maximum(max_width)
    }
}

/// Strings are renderable directly.
impl Renderable for String {
    fn render(&self, console: &Console, options: &ConsoleOptions) -> Vec<Segment> {
        Text::new(self.as_str()).render(console, options)
    }

    fn measure(&self, console: &Console, max_width: usize) -> Measurement {
        Text::new(self.as_str()).measure(console, max_width)
    }
}

impl Renderable for &'static str {
    fn render(&self, console: &Console, options: &ConsoleOptions) -> Vec<Segment> {
        Text::new(*self).render(console, options)
    }

    fn measure(&self, console: &Console, max_width: usize) -> Measurement {
        Text::new(*self).measure(console, max_width)
    }
}

/// Word-wrap text to a maximum cell width.
///
/// Breaks at Unicode word boundaries, falling back to grapheme boundaries
/// for words wider than the line. Whitespace at a wrap break is swallowed;
/// explicit newlines are hard breaks. Returns no lines for empty input and
/// unwrapped lines for `max_width` 0.
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if max_width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        fold_line(raw_line, max_width, &mut lines);
    }
    lines
}

/// Wrap a single newline-free line into `lines`.
fn fold_line(line: &str, max_width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut used = 0usize;

    for word in line.split_word_bounds() {
        let word_width: usize = word.graphemes(true).map(grapheme_width).sum();

        if used + word_width > max_width {
            if used > 0 {
                let full = std::mem::take(&mut current);
                lines.push(full.trim_end().to_string());
                used = 0;
            }

            // A word wider than the line breaks at grapheme boundaries.
            if word_width > max_width {
                for grapheme in word.graphemes(true) {
                    let gw = grapheme_width(grapheme);
                    if used + gw > max_width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        used = 0;
                    }
                    current.push_str(grapheme);
                    used += gw;
                }
                continue;
            }

            // The whitespace that forced the break disappears with it.
            if word.chars().all(char::is_whitespace) {
                continue;
            }
        }

        current.push_str(word);
        used += word_width;
    }

    lines.push(current);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> Console {
        Console::with_width(80)
    }

    // ── wrap_words ──

    #[test]
    fn wrap_empty() {
        assert!(wrap_words("", 10).is_empty());
    }

    #[test]
    fn wrap_fits() {
        assert_eq!(wrap_words("hello", 10), vec!["hello"]);
        assert_eq!(wrap_words("hello", 5), vec!["hello"]);
    }

    #[test]
    fn wrap_at_word_boundary() {
        assert_eq!(wrap_words("hello world", 8), vec!["hello", "world"]);
        assert_eq!(wrap_words("one two three four", 9), vec!["one two", "three", "four"]);
    }

    #[test]
    fn wrap_swallows_break_space() {
        let lines = wrap_words("aa bb", 2);
        assert_eq!(lines, vec!["aa", "bb"]);
    }

    #[test]
    fn wrap_long_word_breaks_by_grapheme() {
        assert_eq!(wrap_words("abcdefghij", 5), vec!["abcde", "fghij"]);
    }

    #[test]
    fn wrap_hard_newlines() {
        assert_eq!(wrap_words("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap_words("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn wrap_cjk() {
        // Width 5 fits two CJK cells-pairs; the third wraps.
        assert_eq!(wrap_words("你好世界", 5), vec!["你好", "世界"]);
    }

    #[test]
    fn wrap_width_zero_keeps_lines() {
        assert_eq!(wrap_words("ab\ncd", 0), vec!["ab", "cd"]);
    }

    // ── measure ──

    #[test]
    fn measure_single_line() {
        let m = Text::new("Hello, World!").measure(&console(), 40);
        assert_eq!(m.maximum, 13);
        assert_eq!(m.minimum, 6); // "Hello," / "World!"
    }

    #[test]
    fn measure_multi_line() {
        let m = Text::new("short\na much longer line").measure(&console(), 40);
        assert_eq!(m.maximum, 18);
        assert_eq!(m.minimum, 6); // "longer"
    }

    #[test]
    fn measure_caps_at_max_width() {
        let m = Text::new("an extremely long single line of text").measure(&console(), 10);
        assert_eq!(m.maximum, 10);
        assert!(m.minimum <= 10);
    }

    #[test]
    fn measure_empty() {
        let m = Text::new("").measure(&console(), 40);
        assert_eq!(m, Measurement::new(0, 0));
    }

    // ── render ──

    #[test]
    fn render_wraps_and_marks_lines() {
        let c = console();
        let segments = Text::new("hello world").render(&c, &ConsoleOptions::new(8));
        assert_eq!(
            segments,
            vec![
                Segment::plain("hello"),
                Segment::line(),
                Segment::plain("world"),
                Segment::line(),
            ]
        );
    }

    #[test]
    fn render_carries_style() {
        let c = console();
        let style = Style::new().bold();
        let segments = Text::styled("hi", style).render(&c, &ConsoleOptions::new(10));
        assert_eq!(segments[0], Segment::styled("hi", style));
    }

    #[test]
    fn render_empty_is_one_blank_line() {
        let c = console();
        let segments = Text::new("").render(&c, &ConsoleOptions::new(10));
        assert_eq!(segments, vec![Segment::line()]);
    }

    #[test]
    fn render_str_delegates() {
        let c = console();
        let via_str = "hello".render(&c, &ConsoleOptions::new(10));
        let via_text = Text::new("hello").render(&c, &ConsoleOptions::new(10));
        assert_eq!(via_str, via_text);
    }
}
