//! A bordered panel around any renderable.
//!
//! [`Panel`] draws a box of [`BoxChars`] glyphs around its content. The
//! content is anything implementing [`Renderable`], including another
//! panel. The border consumes one column on each side; the content is
//! wrapped by the console to the remaining inner width.
//!
//! ```
//! use quillbox::console::Console;
//! use quillbox::panel::Panel;
//!
//! let console = Console::with_width(40);
//! let panel = Panel::fit("Hello, World!");
//! print!("{}", console.render_to_string(&panel));
//! // ╭─────────────╮
//! // │Hello, World!│
//! // ╰─────────────╯
//! ```

use crate::boxes::{BoxChars, ROUNDED};
use crate::console::{Console, ConsoleOptions, Renderable};
use crate::measure::Measurement;
use crate::segment::Segment;
use crate::style::StyleSpec;

/// A renderable that draws a border around its contents.
pub struct Panel {
    content: Box<dyn Renderable>,
    box_chars: &'static BoxChars,
    expand: bool,
    border_style: StyleSpec,
    width: Option<usize>,
}

impl Panel {
    /// Create a panel that expands to the full available width.
    ///
    /// Defaults: rounded box, no border styling, automatic width.
    pub fn new(content: impl Renderable + 'static) -> Self {
        Self {
            content: Box::new(content),
            box_chars: &ROUNDED,
            expand: true,
            border_style: StyleSpec::default(),
            width: None,
        }
    }

    /// Create a panel sized to fit its content.
    pub fn fit(content: impl Renderable + 'static) -> Self {
        Self::new(content).expand(false)
    }

    /// Set the box-drawing character set.
    pub fn box_chars(mut self, box_chars: &'static BoxChars) -> Self {
        self.box_chars = box_chars;
        self
    }

    /// Expand to the full available width (`true`) or shrink to fit the
    /// content (`false`).
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Style the border glyphs.
    pub fn border_style(mut self, style: impl Into<StyleSpec>) -> Self {
        self.border_style = style.into();
        self
    }

    /// Cap the panel's outer width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

impl Renderable for Panel {
    fn render(&self, console: &Console, options: &ConsoleOptions) -> Vec<Segment> {
        let style = console.get_style(&self.border_style);

        let outer = match self.width {
            Some(fixed) => fixed.min(options.max_width),
            None => options.max_width,
        };
        // Inner width can reach 0 for degenerate outer widths; the border
        // is still drawn.
        let inner = if self.expand {
            outer.saturating_sub(2)
        } else {
            console
                .measure(&*self.content, outer.saturating_sub(2))
                .maximum
        };
        log::trace!("panel: outer {} inner {}", inner + 2, inner);

        let child_options = options.update_width(inner);
        let lines = console.render_lines(&*self.content, &child_options);

        let mut segments = Vec::with_capacity(lines.len() * 4 + 4);
        segments.push(Segment::styled(self.box_chars.top_border(&[inner]), style));
        segments.push(Segment::line());
        for line in lines {
            segments.push(Segment::styled(self.box_chars.mid_left, style));
            segments.extend(line);
            segments.push(Segment::styled(self.box_chars.mid_right, style));
            segments.push(Segment::line());
        }
        segments.push(Segment::styled(self.box_chars.bottom_border(&[inner]), style));
        segments.push(Segment::line());
        segments
    }

    fn measure(&self, console: &Console, max_width: usize) -> Measurement {
        if self.expand {
            return Measurement::new(max_width, max_width);
        }
        let width = console
            .measure(&*self.content, max_width.saturating_sub(2))
            .maximum
            + 2;
        Measurement::new(width, width)
    }
}
