//! Segments: the atomic unit of rendered output.
//!
//! Everything a renderable produces is a flat sequence of [`Segment`]s:
//! styled runs of text punctuated by line-break markers. This module also
//! carries the line-level plumbing the console needs to reshape a segment
//! stream into fixed-width visual lines.

use unicode_segmentation::UnicodeSegmentation;

use crate::cells::{grapheme_width, string_width};
use crate::style::Style;

/// A styled run of text, or a line-break marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The text of the segment.
    pub text: String,
    /// Style to apply, `None` for unstyled text.
    pub style: Option<Style>,
}

impl Segment {
    /// Create a styled segment.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }

    /// Create an unstyled segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// The line-break marker.
    pub fn line() -> Self {
        Self {
            text: "\n".to_string(),
            style: None,
        }
    }

    /// Display width of this segment in terminal cells.
    pub fn cell_len(&self) -> usize {
        string_width(&self.text)
    }

    /// Split a flat segment stream on line breaks into visual lines.
    ///
    /// Newlines are consumed, whether they arrive as dedicated
    /// [`Segment::line`] markers or embedded in a longer segment's text.
    /// A trailing run with no final newline still forms a line.
    pub fn split_lines(segments: impl IntoIterator<Item = Segment>) -> Vec<Vec<Segment>> {
        let mut lines: Vec<Vec<Segment>> = Vec::new();
        let mut current: Vec<Segment> = Vec::new();

        for segment in segments {
            if !segment.text.contains('\n') {
                current.push(segment);
                continue;
            }

            let mut pieces = segment.text.split('\n').peekable();
            while let Some(piece) = pieces.next() {
                if !piece.is_empty() {
                    current.push(Segment {
                        text: piece.to_string(),
                        style: segment.style,
                    });
                }
                // Every split point except the last marks the end of a line.
                if pieces.peek().is_some() {
                    lines.push(std::mem::take(&mut current));
                }
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    /// Pad or crop a visual line so its total width is exactly `width` cells.
    ///
    /// Short lines get a trailing spaces segment carrying `style`. Long
    /// lines are cropped at a grapheme boundary; when a wide character
    /// straddles the boundary, the remainder is filled with spaces so the
    /// result is never narrower than `width`.
    pub fn adjust_line_length(
        line: Vec<Segment>,
        width: usize,
        style: Option<Style>,
    ) -> Vec<Segment> {
        let line_width: usize = line.iter().map(Segment::cell_len).sum();

        if line_width < width {
            let mut line = line;
            let padding = " ".repeat(width - line_width);
            line.push(Segment {
                text: padding,
                style,
            });
            return line;
        }

        if line_width > width {
            return crop_line(line, width, style);
        }

        line
    }

    /// Total cell width of a visual line.
    pub fn line_cell_len(line: &[Segment]) -> usize {
        line.iter().map(Segment::cell_len).sum()
    }
}

/// Crop a line to `width` cells, space-filling if a wide grapheme straddles
/// the cut.
fn crop_line(line: Vec<Segment>, width: usize, style: Option<Style>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(line.len());
    let mut remaining = width;

    for segment in line {
        if remaining == 0 {
            break;
        }
        let seg_width = segment.cell_len();
        if seg_width <= remaining {
            remaining -= seg_width;
            out.push(segment);
            continue;
        }

        // Partial fit: take graphemes until the budget runs out.
        let mut taken = String::new();
        for grapheme in segment.text.graphemes(true) {
            let gw = grapheme_width(grapheme);
            if gw > remaining {
                break;
            }
            taken.push_str(grapheme);
            remaining -= gw;
        }
        if !taken.is_empty() {
            out.push(Segment {
                text: taken,
                style: segment.style,
            });
        }
        break;
    }

    if remaining > 0 {
        out.push(Segment {
            text: " ".repeat(remaining),
            style,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Segment {
        Segment::plain(text)
    }

    // ── constructors ──

    #[test]
    fn line_marker() {
        let marker = Segment::line();
        assert_eq!(marker.text, "\n");
        assert_eq!(marker.style, None);
    }

    #[test]
    fn cell_len_cjk() {
        assert_eq!(plain("abc").cell_len(), 3);
        assert_eq!(plain("你好").cell_len(), 4);
    }

    // ── split_lines ──

    #[test]
    fn split_on_markers() {
        let lines = Segment::split_lines(vec![
            plain("hello"),
            Segment::line(),
            plain("world"),
            Segment::line(),
        ]);
        assert_eq!(lines, vec![vec![plain("hello")], vec![plain("world")]]);
    }

    #[test]
    fn split_embedded_newlines() {
        let lines = Segment::split_lines(vec![plain("a\nb\nc")]);
        assert_eq!(
            lines,
            vec![vec![plain("a")], vec![plain("b")], vec![plain("c")]]
        );
    }

    #[test]
    fn split_keeps_styles() {
        let style = Style::new().bold();
        let lines = Segment::split_lines(vec![
            Segment::styled("head", style),
            plain(" tail"),
            Segment::line(),
        ]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], vec![Segment::styled("head", style), plain(" tail")]);
    }

    #[test]
    fn split_trailing_run_without_newline() {
        let lines = Segment::split_lines(vec![plain("loose end")]);
        assert_eq!(lines, vec![vec![plain("loose end")]]);
    }

    #[test]
    fn split_empty_stream() {
        let lines = Segment::split_lines(vec![]);
        assert!(lines.is_empty());
    }

    #[test]
    fn split_blank_line_between() {
        let lines = Segment::split_lines(vec![plain("a\n\nb")]);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
    }

    // ── adjust_line_length ──

    #[test]
    fn adjust_pads_short_line() {
        let line = Segment::adjust_line_length(vec![plain("hi")], 5, None);
        assert_eq!(line, vec![plain("hi"), plain("   ")]);
        assert_eq!(Segment::line_cell_len(&line), 5);
    }

    #[test]
    fn adjust_pad_carries_style() {
        let style = Style::new().bold();
        let line = Segment::adjust_line_length(vec![plain("x")], 3, Some(style));
        assert_eq!(line[1], Segment::styled("  ", style));
    }

    #[test]
    fn adjust_exact_line_untouched() {
        let line = vec![plain("exact")];
        assert_eq!(
            Segment::adjust_line_length(line.clone(), 5, None),
            line
        );
    }

    #[test]
    fn adjust_crops_long_line() {
        let line = Segment::adjust_line_length(vec![plain("overflowing")], 4, None);
        assert_eq!(line, vec![plain("over")]);
    }

    #[test]
    fn adjust_crops_across_segments() {
        let line = Segment::adjust_line_length(vec![plain("ab"), plain("cdef")], 3, None);
        assert_eq!(line, vec![plain("ab"), plain("c")]);
    }

    #[test]
    fn adjust_crop_wide_char_space_fills() {
        // Width 3 cuts through the second CJK char: one cell left over.
        let line = Segment::adjust_line_length(vec![plain("你好")], 3, None);
        assert_eq!(Segment::line_cell_len(&line), 3);
        assert_eq!(line, vec![plain("你"), plain(" ")]);
    }

    #[test]
    fn adjust_to_zero_width() {
        let line = Segment::adjust_line_length(vec![plain("gone")], 0, None);
        assert!(line.is_empty());
    }
}
