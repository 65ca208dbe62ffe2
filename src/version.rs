use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::stdout;

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

/// Rows of a status box, padded to the widest line
pub fn status_box_lines(lines: &[String]) -> Vec<String> {
    let max_content_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let inner = max_content_width + 2;

    let mut rows = Vec::with_capacity(lines.len() + 3);
    rows.push(format!("╔{:═<inner$}╗", ""));
    for (i, line) in lines.iter().enumerate() {
        rows.push(format!("║ {line:<max_content_width$} ║"));
        if i == 0 && lines.len() > 2 {
            rows.push(format!("╠{:═<inner$}╣", ""));
        }
    }
    rows.push(format!("╚{:═<inner$}╝", ""));
    rows
}

/// Prints a box around `lines` in teletext white
pub fn print_version_status_box(lines: &[String]) {
    let body = status_box_lines(lines).join("\n");
    execute!(
        stdout(),
        SetForegroundColor(Color::AnsiValue(231)), // Authentic teletext white
        Print(format!("{body}\n")),
        ResetColor
    )
    .ok();
}

pub fn print_version_info() {
    print_version_status_box(&[
        "EMaster Fuchiboli".to_string(),
        String::new(),
        format!("{CRATE_NAME} {CURRENT_VERSION}"),
    ]);
}

pub fn print_logo() {
    execute!(
        stdout(),
        SetForegroundColor(Color::AnsiValue(51)), // Authentic teletext cyan
        Print(format!(
            "\n{}",
            r#"
█▀▀ █ █ █▀▀ █ █ █ █▄▄ █▀█ █   █
█▀  █▄█ █▄▄ █▀█ █ █▄█ █▄█ █▄▄ █
"#
        )),
        ResetColor
    )
    .ok();
}
