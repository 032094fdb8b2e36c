//! SGR escape sequences for styled output.
//!
//! Writes the color and attribute sequences a segment stream needs:
//! foreground, background, attributes, reset. Screen and cursor control
//! are out of scope here; this crate emits text, it does not own the
//! terminal.

use std::io::Write;

use crate::color::Color;
use crate::style::{Attr, Style};

/// Escape character.
pub const ESC: &str = "\x1b";

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Reset all attributes and colors.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[0m")
}

/// Set the foreground color.
pub fn fg<W: Write>(w: &mut W, color: Color) -> std::io::Result<()> {
    match color {
        Color::Default => write!(w, "\x1b[39m"),
        Color::Ansi(index) if index < 8 => write!(w, "\x1b[{}m", 30 + index),
        Color::Ansi(index) if index < 16 => write!(w, "\x1b[{}m", 90 + index - 8),
        Color::Ansi(index) => write!(w, "\x1b[38;5;{}m", index),
        Color::Rgb { r, g, b } => write!(w, "\x1b[38;2;{};{};{}m", r, g, b),
    }
}

/// Set the background color.
pub fn bg<W: Write>(w: &mut W, color: Color) -> std::io::Result<()> {
    match color {
        Color::Default => write!(w, "\x1b[49m"),
        Color::Ansi(index) if index < 8 => write!(w, "\x1b[{}m", 40 + index),
        Color::Ansi(index) if index < 16 => write!(w, "\x1b[{}m", 100 + index - 8),
        Color::Ansi(index) => write!(w, "\x1b[48;5;{}m", index),
        Color::Rgb { r, g, b } => write!(w, "\x1b[48;2;{};{};{}m", r, g, b),
    }
}

/// Set text attributes from bitflags.
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> std::io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    const CODES: [(Attr, u8); 7] = [
        (Attr::BOLD, 1),
        (Attr::DIM, 2),
        (Attr::ITALIC, 3),
        (Attr::UNDERLINE, 4),
        (Attr::BLINK, 5),
        (Attr::REVERSE, 7),
        (Attr::STRIKE, 9),
    ];

    write!(w, "\x1b[")?;
    let mut first = true;
    for (flag, code) in CODES {
        if attr.contains(flag) {
            if !first {
                write!(w, ";")?;
            }
            write!(w, "{}", code)?;
            first = false;
        }
    }
    write!(w, "m")
}

/// Emit everything a style needs before its text.
///
/// Attributes first, then colors; terminal-default colors are skipped
/// rather than reset, so a plain style writes nothing at all.
pub fn style<W: Write>(w: &mut W, style: &Style) -> std::io::Result<()> {
    attrs(w, style.attrs)?;
    if !style.fg.is_default() {
        fg(w, style.fg)?;
    }
    if !style.bg.is_default() {
        bg(w, style.bg)?;
    }
    Ok(())
}
