pub mod auth;
pub mod lenient;
pub mod match_info;
pub mod rounds;

pub use auth::{LoginData, LoginRequest, Season, Session, Team, User};
pub use match_info::{
    EncounterSummary, MatchInfo, MatchTeam, PlayerStat, PlayerStatSave, SaveMatchPayload,
    Suspension,
};
pub use rounds::{Encounter, EncounterTeam, PublishingUser, Round};
