//! Validation and commit of a captured result.

use tracing::{debug, info, warn};

use super::editor::MatchEditor;
use super::state::EditorPhase;
use crate::constants::CLOSE_CONFIRMATION_PROMPT;
use crate::data_fetcher::ApiClient;
use crate::data_fetcher::cache::{get_http_response_cache_info, invalidate_match_lists};
use crate::data_fetcher::models::{PlayerStat, PlayerStatSave, SaveMatchPayload};
use crate::error::AppError;

/// How a submit attempt ended without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server stored the result; the session is closed
    Saved,
    /// The operator declined the confirmation; nothing was sent
    Cancelled,
}

/// Evidence URLs that are not blank, in their original order
pub fn non_blank_urls(urls: &[String]) -> Vec<String> {
    urls.iter()
        .filter(|url| !url.trim().is_empty())
        .cloned()
        .collect()
}

/// Holds the editor in `Submitting` while the save request is pending.
///
/// Dropped without `finish` (failed save, or the submit future itself was
/// dropped) it reopens the session with its edits.
struct InFlight<'a> {
    phase: &'a mut EditorPhase,
}

impl<'a> InFlight<'a> {
    fn begin(phase: &'a mut EditorPhase) -> Self {
        *phase = EditorPhase::Submitting;
        Self { phase }
    }

    fn finish(self, phase: EditorPhase) {
        *self.phase = phase;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if *self.phase == EditorPhase::Submitting {
            *self.phase = EditorPhase::Open { edited: true };
        }
    }
}

impl MatchEditor {
    /// Checks everything that must hold before the operator is even asked to
    /// confirm. Sends nothing.
    pub fn validate(&self) -> Result<(), AppError> {
        match self.phase {
            EditorPhase::Closed => {
                return Err(AppError::MatchClosed {
                    match_id: self.match_id,
                });
            }
            EditorPhase::Submitting => {
                return Err(AppError::SubmissionInFlight {
                    match_id: self.match_id,
                });
            }
            EditorPhase::Open { .. } => {}
        }

        if non_blank_urls(&self.image_urls).is_empty() {
            return Err(AppError::MissingEvidence);
        }
        Ok(())
    }

    /// Body of the save request. Players without any event are left out.
    pub fn build_payload(&self) -> SaveMatchPayload {
        let with_events = |stats: &[PlayerStat]| -> Vec<PlayerStatSave> {
            stats
                .iter()
                .filter(|stat| stat.has_event())
                .map(PlayerStatSave::from)
                .collect()
        };

        SaveMatchPayload {
            match_id: self.match_id,
            local_score: self.state.local_score,
            visitor_score: self.state.visitor_score,
            local_stats: with_events(&self.local_stats),
            visitor_stats: with_events(&self.visitor_stats),
            image_urls: non_blank_urls(&self.image_urls),
        }
    }

    /// Validates, asks for confirmation and sends the result once.
    ///
    /// `confirm` receives the irreversibility warning and resolves to whether
    /// the operator accepted it. On success the cached match lists are dropped and
    /// the session closes. On failure the session stays open with its edits
    /// and the error is returned; nothing is retried.
    pub async fn submit<F, Fut>(
        &mut self,
        api: &ApiClient,
        confirm: F,
    ) -> Result<SubmitOutcome, AppError>
    where
        F: FnOnce(&'static str) -> Fut,
        Fut: Future<Output = Result<bool, AppError>>,
    {
        self.validate()?;

        if !confirm(CLOSE_CONFIRMATION_PROMPT).await? {
            info!("Close of match {} cancelled by the operator", self.match_id);
            return Ok(SubmitOutcome::Cancelled);
        }

        let payload = self.build_payload();
        let in_flight = InFlight::begin(&mut self.phase);

        match api.save_match(&payload).await {
            Ok(()) => {
                in_flight.finish(EditorPhase::Closed);
                self.state.closed = true;
                let dropped = invalidate_match_lists().await;
                info!(
                    "Match {} closed at {}-{}, {} cached list(s) dropped",
                    self.match_id, payload.local_score, payload.visitor_score, dropped
                );
                let cache = get_http_response_cache_info().await;
                debug!("Response cache holds {}/{} entries", cache.size, cache.capacity);
                Ok(SubmitOutcome::Saved)
            }
            Err(e) => {
                drop(in_flight);
                warn!("Saving match {} failed: {}", self.match_id, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::endpoints;
    use crate::data_fetcher::cache::{
        cache_http_response, clear_http_response_cache, get_cached_http_response,
    };
    use crate::data_fetcher::models::{EncounterSummary, MatchInfo, Session};
    use crate::match_editor::{Side, StatUpdate};
    use serde_json::json;
    use serial_test::serial;
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path},
    };

    fn player(player_id: i64) -> PlayerStat {
        PlayerStat {
            player_id,
            player_name: format!("Jugador {player_id}"),
            ..PlayerStat::default()
        }
    }

    fn open_editor() -> MatchEditor {
        MatchEditor::new(MatchInfo {
            encounter: EncounterSummary {
                id: 81,
                ..EncounterSummary::default()
            },
            local_stats: vec![player(10), player(11)],
            visitor_stats: vec![player(20), player(21)],
            image_urls: vec![String::new()],
            ..MatchInfo::default()
        })
    }

    fn api(uri: &str) -> ApiClient {
        ApiClient::new(uri, 30, Some(Session::new("tok", "admin"))).unwrap()
    }

    #[test]
    fn test_validate_requires_evidence() {
        let mut editor = open_editor();
        assert!(matches!(editor.validate(), Err(AppError::MissingEvidence)));

        editor.update_image_url(0, "   ");
        assert!(matches!(editor.validate(), Err(AppError::MissingEvidence)));

        editor.add_image_slot();
        editor.update_image_url(1, "https://img/1.png");
        assert!(editor.validate().is_ok());
    }

    #[test]
    fn test_payload_skips_players_without_events() {
        let mut editor = open_editor();
        editor.set_field(Side::Local, 10, StatUpdate::Goals(2));
        editor.set_field(Side::Visitor, 21, StatUpdate::Injury(true));
        editor.update_image_url(0, "https://img/1.png");
        editor.add_image_slot();

        let payload = editor.build_payload();
        assert_eq!(payload.match_id, 81);
        assert_eq!((payload.local_score, payload.visitor_score), (2, 0));
        assert_eq!(payload.local_stats.len(), 1);
        assert_eq!(payload.local_stats[0].id_jugador, 10);
        assert_eq!(payload.visitor_stats.len(), 1);
        assert!(payload.visitor_stats[0].lesion);
        assert_eq!(payload.image_urls, vec!["https://img/1.png".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_evidence_sends_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut editor = open_editor();
        let mut asked = false;
        let result = editor
            .submit(&api(&mock_server.uri()), |_| {
                asked = true;
                async { Ok(true) }
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(
            err.user_message(),
            "Es obligatorio capturar al menos un link de imagen del resultado."
        );
        assert!(!asked);
        assert!(editor.is_editable());
    }

    #[tokio::test]
    async fn test_declined_confirmation_has_no_side_effects() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut editor = open_editor();
        editor.update_image_url(0, "https://img/1.png");
        let before = editor.phase();

        let outcome = editor
            .submit(&api(&mock_server.uri()), |prompt| {
                assert_eq!(prompt, CLOSE_CONFIRMATION_PROMPT);
                async { Ok(false) }
            })
            .await
            .unwrap();

        assert_eq!(outcome, SubmitOutcome::Cancelled);
        assert_eq!(editor.phase(), before);
    }

    #[tokio::test]
    #[serial]
    async fn test_confirmed_close_saves_once_and_invalidates_lists() {
        clear_http_response_cache().await;

        let mock_server = MockServer::start().await;
        let mut editor = open_editor();
        editor.set_field(Side::Local, 10, StatUpdate::Goals(2));
        editor.set_field(Side::Visitor, 20, StatUpdate::RedCard(true));
        editor.increment_own_goals(Side::Visitor);
        editor.update_image_url(0, "https://img/1.png");

        Mock::given(method("POST"))
            .and(path(endpoints::SAVE_MATCH))
            .and(body_json(json!({
                "idEncuentro": 81,
                "marcadorLocal": 3,
                "marcadorVisita": 0,
                "lstEstadisticasLocal": [
                    {"idJugador": 10, "cantidadGoles": 2, "expulsion": false, "expulsionDirecta": false, "lesion": false}
                ],
                "lstEstadisticasVisita": [
                    {"idJugador": 20, "cantidadGoles": 0, "expulsion": false, "expulsionDirecta": true, "lesion": false}
                ],
                "lstUrlImagenes": ["https://img/1.png"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"estado": 200})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let round_url = format!("{}{}?idJornada=5", mock_server.uri(), endpoints::ROUND_MATCHES);
        cache_http_response(round_url.clone(), "[]".to_string(), 600).await;

        let outcome = editor
            .submit(&api(&mock_server.uri()), |_| async { Ok(true) })
            .await
            .unwrap();

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert!(editor.is_closed());
        assert!(editor.state().closed);
        assert!(get_cached_http_response(&round_url).await.is_none());

        // A closed session refuses further submits and edits.
        let again = editor.submit(&api(&mock_server.uri()), |_| async { Ok(true) }).await;
        assert!(matches!(again, Err(AppError::MatchClosed { match_id: 81 })));
        editor.increment_goals(Side::Local, 10);
        assert_eq!(editor.score(), (3, 0));

        clear_http_response_cache().await;
    }

    #[tokio::test]
    async fn test_failed_save_keeps_session_editable() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoints::SAVE_MATCH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "estado": 409,
                "mensaje": "El encuentro ya fue cerrado por otro administrador"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut editor = open_editor();
        editor.set_field(Side::Local, 11, StatUpdate::Goals(1));
        editor.update_image_url(0, "https://img/1.png");

        let err = editor
            .submit(&api(&mock_server.uri()), |_| async { Ok(true) })
            .await
            .unwrap_err();

        assert_eq!(
            err.user_message(),
            "El encuentro ya fue cerrado por otro administrador"
        );
        assert_eq!(editor.phase(), EditorPhase::Open { edited: true });
        assert_eq!(editor.player(Side::Local, 11).map(|p| p.goals), Some(1));

        editor.increment_goals(Side::Local, 11);
        assert_eq!(editor.score(), (2, 0));
    }

    #[tokio::test]
    async fn test_abandoned_submit_reopens_session() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoints::SAVE_MATCH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"estado": 200}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&mock_server)
            .await;

        let mut editor = open_editor();
        editor.set_field(Side::Local, 10, StatUpdate::Goals(1));
        editor.update_image_url(0, "https://img/1.png");
        let api = api(&mock_server.uri());

        let result = tokio::time::timeout(
            Duration::from_millis(200),
            editor.submit(&api, |_| async { Ok(true) }),
        )
        .await;
        assert!(result.is_err());

        assert_eq!(editor.phase(), EditorPhase::Open { edited: true });
        assert!(editor.validate().is_ok());
        editor.increment_goals(Side::Local, 10);
        assert_eq!(editor.score(), (2, 0));
    }

    #[test]
    fn test_submit_while_in_flight_is_rejected() {
        let mut editor = open_editor();
        editor.update_image_url(0, "https://img/1.png");
        editor.phase = EditorPhase::Submitting;

        assert!(matches!(
            editor.validate(),
            Err(AppError::SubmissionInFlight { match_id: 81 })
        ));
    }
}
