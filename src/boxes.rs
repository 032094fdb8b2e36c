//! Box-drawing character sets.
//!
//! A [`BoxChars`] is an immutable set of border glyphs plus the functions
//! that lay a full top or bottom border line out of them. Border lines are
//! built for a list of column widths so that multi-column consumers
//! (tables) can join columns with tee glyphs; a panel passes a single
//! width.

/// An immutable set of box-drawing glyphs.
///
/// Every glyph is exactly one terminal cell wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top: char,
    pub top_right: char,
    pub mid_left: char,
    pub mid_right: char,
    pub bottom_left: char,
    pub bottom: char,
    pub bottom_right: char,
    /// Join glyph between columns in a top border.
    pub top_divider: char,
    /// Join glyph between columns in a bottom border.
    pub bottom_divider: char,
}

impl BoxChars {
    /// Build a full top border line for the given column widths.
    pub fn top_border(&self, widths: &[usize]) -> String {
        horizontal_line(
            self.top_left,
            self.top,
            self.top_divider,
            self.top_right,
            widths,
        )
    }

    /// Build a full bottom border line for the given column widths.
    pub fn bottom_border(&self, widths: &[usize]) -> String {
        horizontal_line(
            self.bottom_left,
            self.bottom,
            self.bottom_divider,
            self.bottom_right,
            widths,
        )
    }
}

/// Corner + filled columns joined by divider glyphs + corner.
fn horizontal_line(
    left: char,
    fill: char,
    divider: char,
    right: char,
    widths: &[usize],
) -> String {
    let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) + 2;
    let mut line = String::with_capacity(total * fill.len_utf8());

    line.push(left);
    for (i, &width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(divider);
        }
        for _ in 0..width {
            line.push(fill);
        }
    }
    line.push(right);
    line
}

/// Rounded corners: `╭─╮ │ ╰─╯`. The default panel box.
pub const ROUNDED: BoxChars = BoxChars {
    top_left: '╭',
    top: '─',
    top_right: '╮',
    mid_left: '│',
    mid_right: '│',
    bottom_left: '╰',
    bottom: '─',
    bottom_right: '╯',
    top_divider: '┬',
    bottom_divider: '┴',
};

/// Square corners: `┌─┐ │ └─┘`.
pub const SQUARE: BoxChars = BoxChars {
    top_left: '┌',
    top: '─',
    top_right: '┐',
    mid_left: '│',
    mid_right: '│',
    bottom_left: '└',
    bottom: '─',
    bottom_right: '┘',
    top_divider: '┬',
    bottom_divider: '┴',
};

/// Double lines: `╔═╗ ║ ╚═╝`.
pub const DOUBLE: BoxChars = BoxChars {
    top_left: '╔',
    top: '═',
    top_right: '╗',
    mid_left: '║',
    mid_right: '║',
    bottom_left: '╚',
    bottom: '═',
    bottom_right: '╝',
    top_divider: '╦',
    bottom_divider: '╩',
};

/// Heavy lines: `┏━┓ ┃ ┗━┛`.
pub const HEAVY: BoxChars = BoxChars {
    top_left: '┏',
    top: '━',
    top_right: '┓',
    mid_left: '┃',
    mid_right: '┃',
    bottom_left: '┗',
    bottom: '━',
    bottom_right: '┛',
    top_divider: '┳',
    bottom_divider: '┻',
};

/// Dashed edges with square corners: `┌┄┐ ┆ └┄┘`.
pub const DASHED: BoxChars = BoxChars {
    top_left: '┌',
    top: '┄',
    top_right: '┐',
    mid_left: '┆',
    mid_right: '┆',
    bottom_left: '└',
    bottom: '┄',
    bottom_right: '┘',
    top_divider: '┬',
    bottom_divider: '┴',
};

/// Pure ASCII: `+-+ | +-+`. For terminals without box-drawing glyphs.
pub const ASCII: BoxChars = BoxChars {
    top_left: '+',
    top: '-',
    top_right: '+',
    mid_left: '|',
    mid_right: '|',
    bottom_left: '+',
    bottom: '-',
    bottom_right: '+',
    top_divider: '+',
    bottom_divider: '+',
};
