//! Display width of text in terminal cells.
//!
//! Terminal columns are not characters: CJK ideographs and emoji occupy two
//! cells, combining marks and control characters occupy none, and a grapheme
//! cluster (a user-perceived character) may span many codepoints. Everything
//! in this crate that needs a width goes through this module so that borders
//! and padding line up for non-ASCII content.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Display width of a single codepoint in terminal cells.
///
/// - `0` for control characters, combining marks, zero-width characters
/// - `1` for normal-width characters (ASCII, Latin, Cyrillic, etc.)
/// - `2` for wide characters (CJK ideographs, fullwidth forms, emoji)
#[inline]
pub fn char_width(c: char) -> usize {
    // Terminals render these emoji ranges wide even where East Asian Width
    // says otherwise.
    match c as u32 {
        0x2600..=0x27BF => 2,   // Misc symbols, dingbats (✨ ⚡ ✅)
        0x1F300..=0x1F5FF => 2, // Misc symbols and pictographs
        0x1F600..=0x1F64F => 2, // Emoticons
        0x1F680..=0x1F6FF => 2, // Transport and map symbols
        0x1F900..=0x1F9FF => 2, // Supplemental symbols and pictographs
        0x1FA70..=0x1FAFF => 2, // Symbols and pictographs extended-A
        _ => c.width().unwrap_or(0),
    }
}

/// Display width of a grapheme cluster in terminal cells.
///
/// Handles the multi-codepoint cases a per-char sum gets wrong:
/// ZWJ sequences (`👨‍👩‍👧‍👦` is one cluster, two cells), flag pairs (`🇺🇸`),
/// skin-tone modifiers, keycaps, and base + combining marks (`e´` is one
/// cell, not two).
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    // Single codepoint: the char table is authoritative.
    if chars.as_str().is_empty() {
        return char_width(first);
    }

    // Regional indicator pair (flag emoji).
    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    // Any emoji-sequence marker in the tail makes the cluster wide.
    for c in chars {
        match c as u32 {
            0x200D => return 2,            // Zero-width joiner
            0xFE0F => return 2,            // VS16, emoji presentation
            0x1F3FB..=0x1F3FF => return 2, // Skin tone modifier
            0x20E3 => return 2,            // Combining enclosing keycap
            _ => {}
        }
    }

    // Base character plus combining marks: base width only.
    char_width(first)
}

/// Display width of a string in terminal cells.
///
/// ANSI escape sequences are stripped before measuring, so already-styled
/// text measures by its visible content.
pub fn string_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    // Fast path: plain ASCII measures by printable byte count.
    if s.is_ascii() && !s.as_bytes().contains(&0x1B) {
        return s.bytes().filter(|&b| b >= 0x20).count();
    }

    strip_ansi(s).graphemes(true).map(grapheme_width).sum()
}

/// Remove ANSI escape sequences from a string.
///
/// Borrows when the input contains none. Understands CSI sequences
/// (`ESC [ ... <final>`), OSC sequences (`ESC ] ... BEL` or `ESC ] ... ESC \`),
/// and bare two-byte escapes.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            // CSI: parameters and intermediates end at a byte in @..=~
            Some('[') => {
                chars.next();
                for c in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&c) {
                        break;
                    }
                }
            }
            // OSC: terminated by BEL or ST (ESC \)
            Some(']') => {
                chars.next();
                while let Some(c) = chars.next() {
                    if c == '\x07' {
                        break;
                    }
                    if c == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            // Two-byte escape (ESC 7, ESC 8, ...)
            Some(_) => {
                chars.next();
            }
            None => {}
        }
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── char_width ──

    #[test]
    fn char_width_ascii() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width(' '), 1);
        assert_eq!(char_width('~'), 1);
    }

    #[test]
    fn char_width_control() {
        assert_eq!(char_width('\0'), 0);
        assert_eq!(char_width('\t'), 0);
        assert_eq!(char_width('\n'), 0);
    }

    #[test]
    fn char_width_cjk() {
        assert_eq!(char_width('你'), 2);
        assert_eq!(char_width('界'), 2);
        assert_eq!(char_width('한'), 2);
    }

    #[test]
    fn char_width_fullwidth() {
        assert_eq!(char_width('Ａ'), 2);
        assert_eq!(char_width('０'), 2);
    }

    #[test]
    fn char_width_combining() {
        assert_eq!(char_width('\u{0300}'), 0);
        assert_eq!(char_width('\u{0301}'), 0);
    }

    #[test]
    fn char_width_emoji() {
        assert_eq!(char_width('😀'), 2);
        assert_eq!(char_width('🚀'), 2);
        assert_eq!(char_width('⚡'), 2);
    }

    // ── grapheme_width ──

    #[test]
    fn grapheme_single() {
        assert_eq!(grapheme_width("a"), 1);
        assert_eq!(grapheme_width("你"), 2);
        assert_eq!(grapheme_width(""), 0);
    }

    #[test]
    fn grapheme_combining_marks() {
        assert_eq!(grapheme_width("e\u{0301}"), 1);
        assert_eq!(grapheme_width("a\u{030A}"), 1);
    }

    #[test]
    fn grapheme_zwj_sequence() {
        assert_eq!(grapheme_width("👨\u{200D}👩\u{200D}👧\u{200D}👦"), 2);
    }

    #[test]
    fn grapheme_flag() {
        assert_eq!(grapheme_width("🇺🇸"), 2);
    }

    #[test]
    fn grapheme_skin_tone() {
        assert_eq!(grapheme_width("👍\u{1F3FD}"), 2);
    }

    #[test]
    fn grapheme_keycap() {
        assert_eq!(grapheme_width("1\u{FE0F}\u{20E3}"), 2);
    }

    // ── string_width ──

    #[test]
    fn string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("a b c"), 5);
    }

    #[test]
    fn string_width_cjk_mix() {
        assert_eq!(string_width("你好"), 4);
        assert_eq!(string_width("hi你好"), 6);
    }

    #[test]
    fn string_width_emoji_sequence() {
        // One cluster, two cells, not the sum of its codepoints.
        assert_eq!(string_width("👨\u{200D}👩\u{200D}👧\u{200D}👦"), 2);
    }

    #[test]
    fn string_width_combining() {
        assert_eq!(string_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn string_width_ignores_ansi() {
        assert_eq!(string_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(string_width("\x1b[1m\x1b[31m你好\x1b[0m"), 4);
    }

    // ── strip_ansi ──

    #[test]
    fn strip_ansi_borrows_clean_input() {
        assert!(matches!(strip_ansi("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn strip_ansi_csi() {
        assert_eq!(strip_ansi("\x1b[1;31mbold red\x1b[0m"), "bold red");
    }

    #[test]
    fn strip_ansi_osc() {
        assert_eq!(strip_ansi("\x1b]0;title\x07text"), "text");
        assert_eq!(strip_ansi("\x1b]8;;url\x1b\\link"), "link");
    }

    #[test]
    fn strip_ansi_trailing_escape() {
        assert_eq!(strip_ansi("end\x1b"), "end");
    }
}
