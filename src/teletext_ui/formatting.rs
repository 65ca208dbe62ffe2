// src/teletext_ui/formatting.rs - Padding and coloring helpers shared by the views

use crossterm::style::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Helper function to extract ANSI color code from crossterm Color enum.
/// Provides a fallback value for non-ANSI colors.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}

/// Wraps `text` in a 256-color foreground escape when `colored` is set
pub fn paint(text: &str, color: Color, fallback: u8, colored: bool) -> String {
    if colored {
        format!("\x1b[38;5;{}m{}\x1b[0m", get_ansi_code(color, fallback), text)
    } else {
        text.to_string()
    }
}

/// Same as [`paint`] with a background color as well
pub fn paint_on(text: &str, fg: Color, bg: Color, colored: bool) -> String {
    if colored {
        format!(
            "\x1b[38;5;{}m\x1b[48;5;{}m{}\x1b[0m",
            get_ansi_code(fg, 231),
            get_ansi_code(bg, 21),
            text
        )
    } else {
        text.to_string()
    }
}

/// Counts visible characters, skipping ANSI escape sequences
pub fn count_visible_chars(text: &str) -> usize {
    let mut visible_len = 0;
    let mut in_ansi = false;
    for c in text.chars() {
        if c == '\x1b' {
            in_ansi = true;
        } else if in_ansi && c == 'm' {
            in_ansi = false;
        } else if !in_ansi {
            visible_len += c.width().unwrap_or(0);
        }
    }
    visible_len
}

/// Cuts `text` to at most `max_width` display columns
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    text.chars()
        .take_while(|c| {
            width += c.width().unwrap_or(0);
            width <= max_width
        })
        .collect()
}

/// Left-aligns `text` in exactly `width` display columns
pub fn pad_right(text: &str, width: usize) -> String {
    let cut = truncate_to_width(text, width);
    let fill = width.saturating_sub(cut.width());
    format!("{cut}{}", " ".repeat(fill))
}

/// Right-aligns `text` in exactly `width` display columns
pub fn pad_left(text: &str, width: usize) -> String {
    let cut = truncate_to_width(text, width);
    let fill = width.saturating_sub(cut.width());
    format!("{}{cut}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_uses_display_width() {
        assert_eq!(pad_right("Toño", 6), "Toño  ");
        assert_eq!(pad_left("3", 3), "  3");
        assert_eq!(pad_right("Deportivo Tlalnepantla", 9), "Deportivo");
    }

    #[test]
    fn test_count_visible_chars_skips_escapes() {
        let painted = paint("GOL", Color::AnsiValue(226), 226, true);
        assert_eq!(count_visible_chars(&painted), 3);
        assert_eq!(paint("GOL", Color::AnsiValue(226), 226, false), "GOL");
    }

    #[test]
    fn test_get_ansi_code_fallback() {
        assert_eq!(get_ansi_code(Color::AnsiValue(46), 0), 46);
        assert_eq!(get_ansi_code(Color::Red, 196), 196);
    }
}
