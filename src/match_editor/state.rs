use std::fmt;
use std::str::FromStr;

use crate::data_fetcher::models::{EncounterSummary, PlayerStat};

/// Which team a player or own-goal counter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Local,
    Visitor,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Local => Side::Visitor,
            Side::Visitor => Side::Local,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Local => "local",
            Side::Visitor => "visitante",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "l" => Ok(Side::Local),
            "visitante" | "visita" | "visitor" | "v" => Ok(Side::Visitor),
            other => Err(format!("Lado desconocido: {other}")),
        }
    }
}

/// A single field change for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatUpdate {
    Goals(u32),
    SecondYellow(bool),
    RedCard(bool),
    Injury(bool),
}

impl StatUpdate {
    /// Applies the change. Raising one expulsion kind lowers the other.
    pub fn apply(self, stat: &mut PlayerStat) {
        match self {
            StatUpdate::Goals(goals) => stat.goals = goals,
            StatUpdate::SecondYellow(value) => {
                stat.second_yellow = value;
                if value {
                    stat.red_card = false;
                }
            }
            StatUpdate::RedCard(value) => {
                stat.red_card = value;
                if value {
                    stat.second_yellow = false;
                }
            }
            StatUpdate::Injury(value) => stat.injury = value,
        }
    }
}

/// Views of an editing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Local,
    Visitor,
    Summary,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Local, Tab::Visitor, Tab::Summary];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Local => "LOCAL",
            Tab::Visitor => "VISITA",
            Tab::Summary => "RESUMEN",
        }
    }

    /// Side whose roster the tab edits, if any
    pub fn side(self) -> Option<Side> {
        match self {
            Tab::Local => Some(Side::Local),
            Tab::Visitor => Some(Side::Visitor),
            Tab::Summary => None,
        }
    }
}

/// Lifecycle of a session.
///
/// `Open -> Submitting -> Closed`, or back to `Open { edited: true }` when
/// the save fails. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Open { edited: bool },
    Submitting,
    Closed,
}

/// Scoreline and status of the match being edited.
///
/// `own_goals_local` counts own goals by local players and is credited to the
/// visitor; `own_goals_visitor` is credited to the local side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchState {
    pub local_score: u32,
    pub visitor_score: u32,
    pub own_goals_local: u32,
    pub own_goals_visitor: u32,
    pub closed: bool,
    pub completed: bool,
}

impl MatchState {
    pub fn from_encounter(encounter: &EncounterSummary) -> Self {
        Self {
            local_score: encounter.local_score,
            visitor_score: encounter.visitor_score,
            own_goals_local: 0,
            own_goals_visitor: 0,
            closed: encounter.closed,
            completed: encounter.completed,
        }
    }

    pub fn own_goals(&self, side: Side) -> u32 {
        match side {
            Side::Local => self.own_goals_local,
            Side::Visitor => self.own_goals_visitor,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.closed {
            "CERRADO"
        } else if self.completed {
            "COMPLETADO"
        } else {
            "PENDIENTE"
        }
    }
}
