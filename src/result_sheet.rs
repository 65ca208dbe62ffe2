//! Result sheets: TOML files describing the edits to replay on a match.
//!
//! ```toml
//! own_goals_visitor = 1
//! images = ["https://example.com/result.png"]
//!
//! [[local]]
//! player_id = 10
//! goals = 2
//!
//! [[visitor]]
//! player_id = 20
//! red_card = true
//! ```
//!
//! Fields left out of a player entry keep the value loaded from the server.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::AppError;
use crate::match_editor::{MatchEditor, Side, StatUpdate};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerEntry {
    pub player_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_yellow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red_card: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury: Option<bool>,
}

impl PlayerEntry {
    /// Field changes in replay order. A straight red listed together with a
    /// second yellow is applied last and wins.
    fn updates(&self) -> Vec<StatUpdate> {
        [
            self.goals.map(StatUpdate::Goals),
            self.injury.map(StatUpdate::Injury),
            self.second_yellow.map(StatUpdate::SecondYellow),
            self.red_card.map(StatUpdate::RedCard),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResultSheet {
    pub own_goals_local: u32,
    pub own_goals_visitor: u32,
    pub images: Vec<String>,
    pub local: Vec<PlayerEntry>,
    pub visitor: Vec<PlayerEntry>,
}

impl ResultSheet {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    fn entries(&self) -> impl Iterator<Item = (Side, &PlayerEntry)> {
        self.local
            .iter()
            .map(|entry| (Side::Local, entry))
            .chain(self.visitor.iter().map(|entry| (Side::Visitor, entry)))
    }

    /// Replays the sheet through the editor.
    ///
    /// Every player is checked against the loaded rosters first, so an
    /// unknown id leaves the editor untouched.
    pub fn apply(&self, editor: &mut MatchEditor) -> Result<(), AppError> {
        if editor.is_closed() {
            return Err(AppError::MatchClosed {
                match_id: editor.match_id(),
            });
        }

        if let Some((side, entry)) = self
            .entries()
            .find(|(side, entry)| !editor.has_player(*side, entry.player_id))
        {
            return Err(AppError::unknown_player(entry.player_id, side.label()));
        }

        for (side, entry) in self.entries() {
            for update in entry.updates() {
                editor.set_field(side, entry.player_id, update);
            }
        }

        for (side, target) in [
            (Side::Local, self.own_goals_local),
            (Side::Visitor, self.own_goals_visitor),
        ] {
            while editor.state().own_goals(side) < target {
                editor.increment_own_goals(side);
            }
            while editor.state().own_goals(side) > target {
                editor.decrement_own_goals(side);
            }
        }

        if !self.images.is_empty() {
            editor.replace_image_urls(self.images.clone());
        }

        let (local, visitor) = editor.score();
        info!(
            "Applied result sheet to match {}: {} player entries, score {}-{}",
            editor.match_id(),
            self.local.len() + self.visitor.len(),
            local,
            visitor
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{EncounterSummary, MatchInfo, PlayerStat};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SHEET: &str = r#"
own_goals_local = 0
own_goals_visitor = 1
images = ["https://example.com/result.png"]

[[local]]
player_id = 10
goals = 2

[[visitor]]
player_id = 20
red_card = true
injury = true
"#;

    fn editor(closed: bool) -> MatchEditor {
        let player = |player_id| PlayerStat {
            player_id,
            player_name: format!("Jugador {player_id}"),
            ..PlayerStat::default()
        };
        MatchEditor::new(MatchInfo {
            encounter: EncounterSummary {
                id: 81,
                local_score: 1,
                visitor_score: 1,
                closed,
                ..EncounterSummary::default()
            },
            local_stats: vec![player(10)],
            visitor_stats: vec![player(20)],
            image_urls: vec![String::new()],
            ..MatchInfo::default()
        })
    }

    #[test]
    fn test_apply_sheet() {
        let sheet = ResultSheet::parse(SHEET).unwrap();
        let mut editor = editor(false);
        sheet.apply(&mut editor).unwrap();

        assert_eq!(editor.score(), (3, 0));
        assert_eq!(editor.image_urls(), ["https://example.com/result.png"]);
        let visitor = editor.player(Side::Visitor, 20).cloned().unwrap();
        assert!(visitor.red_card && visitor.injury && !visitor.second_yellow);
    }

    #[test]
    fn test_unknown_player_leaves_editor_untouched() {
        let sheet = ResultSheet::parse(
            r#"
[[local]]
player_id = 10
goals = 3

[[local]]
player_id = 20
goals = 1
"#,
        )
        .unwrap();
        let mut editor = editor(false);

        let err = sheet.apply(&mut editor).unwrap_err();
        assert!(matches!(
            err,
            AppError::UnknownPlayer { player_id: 20, .. }
        ));
        assert_eq!(editor.score(), (0, 0));
        assert!(!editor.is_edited());
    }

    #[test]
    fn test_closed_match_rejects_sheet() {
        let sheet = ResultSheet::parse(SHEET).unwrap();
        let mut editor = editor(true);
        assert!(matches!(
            sheet.apply(&mut editor),
            Err(AppError::MatchClosed { match_id: 81 })
        ));
        assert_eq!(editor.score(), (1, 1));
    }

    #[test]
    fn test_both_cards_keep_the_red() {
        let sheet = ResultSheet::parse(
            r#"
[[visitor]]
player_id = 20
second_yellow = true
red_card = true
"#,
        )
        .unwrap();
        let mut editor = editor(false);
        sheet.apply(&mut editor).unwrap();

        let stat = editor.player(Side::Visitor, 20).cloned().unwrap();
        assert!(stat.red_card);
        assert!(!stat.second_yellow);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(matches!(
            ResultSheet::parse("autogoles = 1"),
            Err(AppError::TomlDeserialize(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SHEET.as_bytes()).unwrap();

        let sheet = ResultSheet::load(file.path()).await.unwrap();
        assert_eq!(sheet.own_goals_visitor, 1);
        assert_eq!(sheet.local[0].goals, Some(2));
        assert_eq!(sheet.visitor[0].red_card, Some(true));
    }
}
