// src/teletext_ui/mod.rs - Teletext-style text views of matches and lists

pub mod colors;
pub mod formatting;
pub mod list_views;
pub mod match_view;

pub use formatting::{count_visible_chars, get_ansi_code};
pub use list_views::{render_matches, render_rounds, render_teams};
pub use match_view::{render_header, render_match, render_tab};
