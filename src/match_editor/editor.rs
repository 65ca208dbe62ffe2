use tracing::debug;

use super::scoreline::derive_scoreline;
use super::state::{EditorPhase, MatchState, Side, StatUpdate, Tab};
use crate::data_fetcher::models::{MatchInfo, MatchTeam, PlayerStat, Suspension};

/// Editing session for one match.
///
/// Mutators are silent no-ops unless the session is open, so a closed match
/// keeps exactly the score and statistics the server persisted.
#[derive(Debug, Clone)]
pub struct MatchEditor {
    pub(super) match_id: i64,
    pub(super) local_team: MatchTeam,
    pub(super) visitor_team: MatchTeam,
    pub(super) local_stats: Vec<PlayerStat>,
    pub(super) visitor_stats: Vec<PlayerStat>,
    pub(super) local_suspensions: Vec<Suspension>,
    pub(super) visitor_suspensions: Vec<Suspension>,
    pub(super) state: MatchState,
    pub(super) image_urls: Vec<String>,
    pub(super) tab: Tab,
    pub(super) phase: EditorPhase,
}

impl MatchEditor {
    /// Seeds a session from a freshly normalized match detail.
    ///
    /// A closed match opens on the summary tab; an open one has its score
    /// derived from the statistics straight away.
    pub fn new(info: MatchInfo) -> Self {
        let state = MatchState::from_encounter(&info.encounter);
        let image_urls = if info.image_urls.is_empty() {
            vec![String::new()]
        } else {
            info.image_urls
        };

        let mut editor = Self {
            match_id: info.encounter.id,
            local_team: info.encounter.local_team,
            visitor_team: info.encounter.visitor_team,
            local_stats: info.local_stats,
            visitor_stats: info.visitor_stats,
            local_suspensions: info.local_suspensions,
            visitor_suspensions: info.visitor_suspensions,
            state,
            image_urls,
            tab: if state.closed { Tab::Summary } else { Tab::Local },
            phase: if state.closed {
                EditorPhase::Closed
            } else {
                EditorPhase::Open { edited: false }
            },
        };
        editor.recompute_score();
        editor
    }

    pub fn match_id(&self) -> i64 {
        self.match_id
    }

    pub fn team(&self, side: Side) -> &MatchTeam {
        match side {
            Side::Local => &self.local_team,
            Side::Visitor => &self.visitor_team,
        }
    }

    pub fn stats(&self, side: Side) -> &[PlayerStat] {
        match side {
            Side::Local => &self.local_stats,
            Side::Visitor => &self.visitor_stats,
        }
    }

    pub fn suspensions(&self, side: Side) -> &[Suspension] {
        match side {
            Side::Local => &self.local_suspensions,
            Side::Visitor => &self.visitor_suspensions,
        }
    }

    pub fn player(&self, side: Side, player_id: i64) -> Option<&PlayerStat> {
        self.stats(side).iter().find(|p| p.player_id == player_id)
    }

    pub fn has_player(&self, side: Side, player_id: i64) -> bool {
        self.player(side, player_id).is_some()
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// `(local, visitor)`
    pub fn score(&self) -> (u32, u32) {
        (self.state.local_score, self.state.visitor_score)
    }

    pub fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.phase == EditorPhase::Closed
    }

    /// True while mutations are accepted
    pub fn is_editable(&self) -> bool {
        matches!(self.phase, EditorPhase::Open { .. })
    }

    pub fn is_edited(&self) -> bool {
        matches!(self.phase, EditorPhase::Open { edited: true })
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    fn stats_mut(&mut self, side: Side) -> &mut Vec<PlayerStat> {
        match side {
            Side::Local => &mut self.local_stats,
            Side::Visitor => &mut self.visitor_stats,
        }
    }

    fn mark_edited(&mut self) {
        if self.is_editable() {
            self.phase = EditorPhase::Open { edited: true };
        }
    }

    /// Re-derives the score of an open match. Closed matches keep the
    /// persisted score. Idempotent.
    pub(super) fn recompute_score(&mut self) {
        if self.state.closed {
            return;
        }
        let (local, visitor) = derive_scoreline(
            &self.local_stats,
            &self.visitor_stats,
            self.state.own_goals_local,
            self.state.own_goals_visitor,
        );
        self.state.local_score = local;
        self.state.visitor_score = visitor;
    }

    fn update_player(&mut self, side: Side, player_id: i64, change: impl FnOnce(&mut PlayerStat)) {
        if !self.is_editable() {
            return;
        }
        let Some(stat) = self
            .stats_mut(side)
            .iter_mut()
            .find(|p| p.player_id == player_id)
        else {
            debug!("Ignoring update for unknown {} player {}", side, player_id);
            return;
        };
        change(stat);
        self.mark_edited();
        self.recompute_score();
    }

    /// Sets one statistic field. Unknown players are ignored.
    pub fn set_field(&mut self, side: Side, player_id: i64, update: StatUpdate) {
        self.update_player(side, player_id, |stat| update.apply(stat));
    }

    pub fn increment_goals(&mut self, side: Side, player_id: i64) {
        self.update_player(side, player_id, |stat| {
            stat.goals = stat.goals.saturating_add(1);
        });
    }

    /// Removes one goal; a player without goals is left untouched
    pub fn decrement_goals(&mut self, side: Side, player_id: i64) {
        if self.player(side, player_id).is_some_and(|p| p.goals == 0) {
            return;
        }
        self.update_player(side, player_id, |stat| {
            stat.goals = stat.goals.saturating_sub(1);
        });
    }

    pub fn clear_expulsion(&mut self, side: Side, player_id: i64) {
        self.update_player(side, player_id, |stat| {
            stat.second_yellow = false;
            stat.red_card = false;
        });
    }

    fn own_goals_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Local => &mut self.state.own_goals_local,
            Side::Visitor => &mut self.state.own_goals_visitor,
        }
    }

    /// Records an own goal scored by a player of `side`
    pub fn increment_own_goals(&mut self, side: Side) {
        if !self.is_editable() {
            return;
        }
        let counter = self.own_goals_mut(side);
        *counter = counter.saturating_add(1);
        self.mark_edited();
        self.recompute_score();
    }

    /// Removes an own goal of `side`, stopping at zero
    pub fn decrement_own_goals(&mut self, side: Side) {
        if !self.is_editable() || self.state.own_goals(side) == 0 {
            return;
        }
        let counter = self.own_goals_mut(side);
        *counter -= 1;
        self.mark_edited();
        self.recompute_score();
    }

    pub fn add_image_slot(&mut self) {
        if !self.is_editable() {
            return;
        }
        self.image_urls.push(String::new());
        self.mark_edited();
    }

    /// Overwrites the slot at `index`. Out-of-range indexes are ignored.
    pub fn update_image_url(&mut self, index: usize, value: impl Into<String>) {
        if !self.is_editable() {
            return;
        }
        if let Some(slot) = self.image_urls.get_mut(index) {
            *slot = value.into();
            self.mark_edited();
        }
    }

    /// Removes the slot at `index`. The last remaining slot is never removed.
    pub fn remove_image_url(&mut self, index: usize) {
        if !self.is_editable() || self.image_urls.len() <= 1 || index >= self.image_urls.len() {
            return;
        }
        self.image_urls.remove(index);
        self.mark_edited();
    }

    /// Replaces the whole evidence list, keeping at least one slot
    pub fn replace_image_urls(&mut self, urls: Vec<String>) {
        if !self.is_editable() {
            return;
        }
        self.image_urls = if urls.is_empty() {
            vec![String::new()]
        } else {
            urls
        };
        self.mark_edited();
    }
}
