//! Teletext palette, as 256-color ANSI values.

use crossterm::style::Color;

const BLUE: u8 = 21;
const GREEN: u8 = 46;
const CYAN: u8 = 51;
const RED: u8 = 196;
const MAGENTA: u8 = 201;
const YELLOW: u8 = 226;
const WHITE: u8 = 231;

/// Title bar background
pub fn header_bg() -> Color {
    Color::AnsiValue(BLUE)
}

pub fn header_fg() -> Color {
    Color::AnsiValue(WHITE)
}

/// Section titles, the active tab and the scoreboard
pub fn subheader_fg() -> Color {
    Color::AnsiValue(GREEN)
}

pub fn result_fg() -> Color {
    Color::AnsiValue(GREEN)
}

pub fn text_fg() -> Color {
    Color::AnsiValue(WHITE)
}

pub fn local_fg() -> Color {
    Color::AnsiValue(CYAN)
}

pub fn visitor_fg() -> Color {
    Color::AnsiValue(CYAN)
}

pub fn goal_fg() -> Color {
    Color::AnsiValue(YELLOW)
}

/// Second-yellow and straight-red markers
pub fn expulsion_fg() -> Color {
    Color::AnsiValue(RED)
}

pub fn injury_fg() -> Color {
    Color::AnsiValue(MAGENTA)
}

/// Footer hint under the summary tab
pub fn hint_fg() -> Color {
    Color::AnsiValue(YELLOW)
}
