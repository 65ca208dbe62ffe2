pub mod match_info;

pub use match_info::{normalize_match_info, normalize_player_stat};
