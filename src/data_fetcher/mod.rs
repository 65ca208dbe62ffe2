pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::ApiClient;
pub use models::{Encounter, MatchInfo, PlayerStat, Round, SaveMatchPayload, Session, Team};
pub use processors::normalize_match_info;
