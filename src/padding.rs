//! Blank space around a renderable.
//!
//! [`Padding`] insets its content by a number of cells on each side.
//! Composes with [`Panel`](crate::panel::Panel) for the classic
//! `Panel(Padding(Text))` shape.

use crate::console::{Console, ConsoleOptions, Renderable};
use crate::measure::Measurement;
use crate::segment::Segment;

/// A renderable that surrounds its content with blank cells.
pub struct Padding {
    content: Box<dyn Renderable>,
    top: usize,
    right: usize,
    bottom: usize,
    left: usize,
}

impl Padding {
    /// Pad by `(vertical, horizontal)` cells.
    pub fn new(content: impl Renderable + 'static, (vertical, horizontal): (usize, usize)) -> Self {
        Self {
            content: Box::new(content),
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Pad by the same amount on all four sides.
    pub fn uniform(content: impl Renderable + 'static, pad: usize) -> Self {
        Self::new(content, (pad, pad))
    }

    /// Set each side separately: top, right, bottom, left.
    pub fn sides(
        content: impl Renderable + 'static,
        top: usize,
        right: usize,
        bottom: usize,
        left: usize,
    ) -> Self {
        Self {
            content: Box::new(content),
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Renderable for Padding {
    fn render(&self, console: &Console, options: &ConsoleOptions) -> Vec<Segment> {
        let horizontal = self.left + self.right;
        let inner = options.max_width.saturating_sub(horizontal);
        let lines = console.render_lines(&*self.content, &options.update_width(inner));
        let width = inner + horizontal;

        let blank_line = [Segment::plain(" ".repeat(width)), Segment::line()];
        let mut segments =
            Vec::with_capacity((lines.len() + self.top + self.bottom) * 4);

        for _ in 0..self.top {
            segments.extend(blank_line.iter().cloned());
        }
        for line in lines {
            if self.left > 0 {
                segments.push(Segment::plain(" ".repeat(self.left)));
            }
            segments.extend(line);
            if self.right > 0 {
                segments.push(Segment::plain(" ".repeat(self.right)));
            }
            segments.push(Segment::line());
        }
        for _ in 0..self.bottom {
            segments.extend(blank_line.iter().cloned());
        }
        segments
    }

    fn measure(&self, console: &Console, max_width: usize) -> Measurement {
        let horizontal = self.left + self.right;
        let inner = console.measure(&*self.content, max_width.saturating_sub(horizontal));
        Measurement::new(inner.minimum + horizontal, inner.maximum + horizontal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::string_width;
    use crate::panel::Panel;

    fn render_plain(renderable: &dyn Renderable, max_width: usize) -> Vec<String> {
        let console = Console::with_width(80);
        let segments = renderable.render(&console, &ConsoleOptions::new(max_width));
        Segment::split_lines(segments)
            .into_iter()
            .map(|line| line.into_iter().map(|s| s.text).collect())
            .collect()
    }

    #[test]
    fn pads_all_sides() {
        let lines = render_plain(&Padding::uniform("hi", 1), 4);
        assert_eq!(lines, vec!["    ", " hi ", "    "]);
    }

    #[test]
    fn horizontal_only() {
        let lines = render_plain(&Padding::new("ab", (0, 2)), 6);
        assert_eq!(lines, vec!["  ab  "]);
    }

    #[test]
    fn measure_adds_horizontal_padding() {
        let console = Console::with_width(80);
        let padding = Padding::new("Hello", (1, 3));
        let m = padding.measure(&console, 40);
        assert_eq!(m, Measurement::new(11, 11));
    }

    #[test]
    fn content_wraps_inside_padding() {
        let lines = render_plain(&Padding::new("hello world", (0, 1)), 7);
        assert_eq!(lines, vec![" hello ", " world "]);
    }

    #[test]
    fn composes_with_panel() {
        let lines = render_plain(&Panel::fit(Padding::new("Hello", (1, 2))), 40);
        assert_eq!(
            lines,
            vec![
                "╭─────────╮",
                "│         │",
                "│  Hello  │",
                "│         │",
                "╰─────────╯",
            ]
        );
    }
}
