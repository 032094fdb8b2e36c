//! The console: renderable protocol, layout options, and output.
//!
//! A [`Console`] knows how wide the output is and drives the measure +
//! render protocol: any type implementing [`Renderable`] can be measured
//! for width negotiation, rendered into a segment stream, reshaped into
//! fixed-width lines, or flushed to the terminal with ANSI styling.

use std::io::Write;

use crate::ansi;
use crate::measure::Measurement;
use crate::segment::Segment;
use crate::style::{Style, StyleSpec};

/// Fallback width when the terminal size cannot be determined.
const DEFAULT_WIDTH: usize = 80;

/// Layout options handed to a renderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Maximum width in cells a rendered line may occupy.
    pub max_width: usize,
}

impl ConsoleOptions {
    /// Create options with the given maximum width.
    pub const fn new(max_width: usize) -> Self {
        Self { max_width }
    }

    /// Derive child options with a different width.
    pub const fn update_width(self, max_width: usize) -> Self {
        Self { max_width }
    }
}

/// The measure + render capability.
///
/// Anything renderable can be handed to a [`Console`] or nested inside
/// another renderable (a panel inside a panel works without
/// special-casing). Rendering must be pure: no mutation, identical
/// output for identical inputs.
pub trait Renderable {
    /// Produce the segment stream for this content at the given options.
    ///
    /// Lines are separated by [`Segment::line`] markers. No line may
    /// exceed `options.max_width` cells.
    fn render(&self, console: &Console, options: &ConsoleOptions) -> Vec<Segment>;

    /// Report the width range this content can be rendered at.
    ///
    /// The default claims any width up to `max_width`.
    fn measure(&self, _console: &Console, max_width: usize) -> Measurement {
        Measurement::new(0, max_width)
    }
}

/// Renders renderables and writes them out.
#[derive(Debug, Clone)]
pub struct Console {
    width: usize,
}

impl Console {
    /// A console as wide as the attached terminal, or 80 columns when the
    /// size cannot be determined (pipes, tests, CI).
    pub fn new() -> Self {
        let width = crossterm::terminal::size()
            .map(|(cols, _rows)| cols as usize)
            .unwrap_or(DEFAULT_WIDTH);
        log::debug!("console width {width}");
        Self { width }
    }

    /// A console with a fixed width.
    pub const fn with_width(width: usize) -> Self {
        Self { width }
    }

    /// The console width in cells.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Layout options at full console width.
    pub const fn options(&self) -> ConsoleOptions {
        ConsoleOptions::new(self.width)
    }

    /// Resolve a style spec to a concrete style.
    ///
    /// Named specs are parsed with [`Style::parse`]; a name that does not
    /// parse resolves to the plain style rather than failing the render.
    pub fn get_style(&self, spec: &StyleSpec) -> Style {
        match spec {
            StyleSpec::Resolved(style) => *style,
            StyleSpec::Named(name) => Style::parse(name).unwrap_or_else(|| {
                log::warn!("unresolvable style {name:?}, rendering unstyled");
                Style::new()
            }),
        }
    }

    /// Measure a renderable, clamped and normalized to `max_width`.
    pub fn measure(&self, renderable: &dyn Renderable, max_width: usize) -> Measurement {
        renderable
            .measure(self, max_width)
            .normalized()
            .with_maximum(max_width)
    }

    /// Render a renderable into visual lines of exactly
    /// `options.max_width` cells.
    ///
    /// Lines shorter than the width are padded with unstyled spaces;
    /// longer lines are cropped.
    pub fn render_lines(
        &self,
        renderable: &dyn Renderable,
        options: &ConsoleOptions,
    ) -> Vec<Vec<Segment>> {
        let segments = renderable.render(self, options);
        let lines = Segment::split_lines(segments);
        log::trace!("render_lines: {} lines at width {}", lines.len(), options.max_width);
        lines
            .into_iter()
            .map(|line| Segment::adjust_line_length(line, options.max_width, None))
            .collect()
    }

    /// Render a renderable to a string with ANSI styling applied.
    ///
    /// Each styled segment is wrapped in its SGR sequence and a reset;
    /// unstyled segments pass through untouched.
    pub fn render_to_string(&self, renderable: &dyn Renderable) -> String {
        let options = self.options();
        let mut buf: Vec<u8> = Vec::new();
        for segment in renderable.render(self, &options) {
            self.write_segment(&mut buf, &segment);
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Render a renderable and write it to stdout.
    pub fn print(&self, renderable: &dyn Renderable) {
        print!("{}", self.render_to_string(renderable));
    }

    fn write_segment(&self, buf: &mut Vec<u8>, segment: &Segment) {
        // Writes into a Vec cannot fail.
        match segment.style {
            Some(style) if !style.is_plain() => {
                let _ = ansi::style(buf, &style);
                let _ = buf.write_all(segment.text.as_bytes());
                let _ = ansi::reset(buf);
            }
            _ => {
                let _ = buf.write_all(segment.text.as_bytes());
            }
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
