//! Canonical match-detail types produced by the normalizer, and the save payload.

use serde::{Deserialize, Serialize};

/// One player's statistics for a match.
///
/// `second_yellow` and `red_card` are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub player_id: i64,
    pub player_name: String,
    pub goals: u32,
    pub second_yellow: bool,
    pub red_card: bool,
    pub injury: bool,
}

impl PlayerStat {
    /// True when the player has anything worth storing for this match
    pub fn has_event(&self) -> bool {
        self.goals > 0 || self.second_yellow || self.red_card || self.injury
    }

    pub fn is_expelled(&self) -> bool {
        self.second_yellow || self.red_card
    }
}

/// A player who may not take part in the match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspension {
    pub player_name: String,
    pub injury: bool,
}

impl Suspension {
    /// Short teletext tag: `LES` for injured, `SUSP` for suspended
    pub fn tag(&self) -> &'static str {
        if self.injury { "LES" } else { "SUSP" }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTeam {
    pub id: i64,
    pub name: String,
    pub crest_url: String,
}

/// Match record as last persisted by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterSummary {
    pub id: i64,
    pub local_team: MatchTeam,
    pub visitor_team: MatchTeam,
    pub local_score: u32,
    pub visitor_score: u32,
    pub closed: bool,
    pub completed: bool,
}

/// Everything a result-capture session needs, in canonical shape
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchInfo {
    pub encounter: EncounterSummary,
    pub local_stats: Vec<PlayerStat>,
    pub visitor_stats: Vec<PlayerStat>,
    pub local_suspensions: Vec<Suspension>,
    pub visitor_suspensions: Vec<Suspension>,
    /// Saved evidence URLs, or a single blank slot when none were saved
    pub image_urls: Vec<String>,
}

/// Statistic entry as sent to `guardarEncuentro`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatSave {
    pub id_jugador: i64,
    pub cantidad_goles: u32,
    pub expulsion: bool,
    pub expulsion_directa: bool,
    pub lesion: bool,
}

impl From<&PlayerStat> for PlayerStatSave {
    fn from(stat: &PlayerStat) -> Self {
        Self {
            id_jugador: stat.player_id,
            cantidad_goles: stat.goals,
            expulsion: stat.second_yellow,
            expulsion_directa: stat.red_card,
            lesion: stat.injury,
        }
    }
}

/// Body of the close-match request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveMatchPayload {
    #[serde(rename = "idEncuentro")]
    pub match_id: i64,
    #[serde(rename = "marcadorLocal")]
    pub local_score: u32,
    #[serde(rename = "marcadorVisita")]
    pub visitor_score: u32,
    #[serde(rename = "lstEstadisticasLocal")]
    pub local_stats: Vec<PlayerStatSave>,
    #[serde(rename = "lstEstadisticasVisita")]
    pub visitor_stats: Vec<PlayerStatSave>,
    #[serde(rename = "lstUrlImagenes")]
    pub image_urls: Vec<String>,
}
