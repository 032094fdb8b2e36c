//! # quillbox
//!
//! Segment-based console rendering: styled text, measurement, wrapping,
//! and bordered panels.
//!
//! ## Architecture
//!
//! Everything renders through one protocol: a [`Renderable`] is measured
//! for width negotiation, then rendered into a flat stream of [`Segment`]s
//! (styled text runs and line-break markers) which the [`Console`] reshapes
//! into fixed-width lines or flushes to the terminal as ANSI output.
//!
//! ```text
//! Renderable -- measure --> Measurement (min/max width)
//!            -- render ---> [Segment] --> lines / ANSI bytes
//! ```
//!
//! Renderables nest: a [`Panel`] draws a border box around any other
//! renderable, including another panel.
//!
//! ## Modules
//!
//! - [`cells`] - Display width of text in terminal cells
//! - [`color`] / [`style`] - Colors, attributes, style parsing
//! - [`segment`] - The atomic unit of rendered output
//! - [`measure`] - Width measurement
//! - [`console`] - The renderable protocol and output
//! - [`text`] - Plain text renderable and word wrapping
//! - [`boxes`] - Box-drawing character sets
//! - [`panel`] - Bordered panels
//! - [`padding`] - Blank space around content
//! - [`ansi`] - SGR escape sequences
//!
//! ## Example
//!
//! ```
//! use quillbox::{Console, Panel};
//!
//! let console = Console::with_width(40);
//! let panel = Panel::fit("Hello, World!").border_style("bold magenta");
//! console.print(&panel);
//! ```

pub mod ansi;
pub mod boxes;
pub mod cells;
pub mod color;
pub mod console;
pub mod measure;
pub mod padding;
pub mod panel;
pub mod segment;
pub mod style;
pub mod text;

// Re-export commonly used items
pub use boxes::{ASCII, BoxChars, DASHED, DOUBLE, HEAVY, ROUNDED, SQUARE};
pub use cells::{char_width, grapheme_width, string_width};
pub use color::Color;
pub use console::{Console, ConsoleOptions, Renderable};
pub use measure::Measurement;
pub use padding::Padding;
pub use panel::Panel;
pub use segment::Segment;
pub use style::{Attr, Style, StyleSpec};
pub use text::{Text, wrap_words};
