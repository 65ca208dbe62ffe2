use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::fetch_utils::{auth_headers, decode, get_value, post_json};
use super::http_client::create_http_client_with_timeout;
use super::urls::{
    build_endpoint_url, build_match_info_url, build_pending_matches_url,
    build_played_matches_url, build_round_matches_url, build_rounds_url,
};
use crate::config::Config;
use crate::constants::{cache_ttl, endpoints};
use crate::data_fetcher::models::{
    Encounter, LoginData, LoginRequest, MatchInfo, Round, SaveMatchPayload, Session, Team,
};
use crate::data_fetcher::processors::normalize_match_info;
use crate::error::AppError;

/// Client for the league backend.
///
/// The session is held explicitly and attached to every authenticated call;
/// calls made without one fail with [`AppError::NotAuthenticated`] before any
/// request is sent.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    api_domain: String,
    session: Option<Session>,
}

impl ApiClient {
    pub fn new(
        api_domain: impl Into<String>,
        timeout_seconds: u64,
        session: Option<Session>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            http: create_http_client_with_timeout(timeout_seconds)?,
            api_domain: api_domain.into(),
            session,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            config.api_domain.clone(),
            config.http_timeout_seconds,
            config.session.clone(),
        )
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn api_domain(&self) -> &str {
        &self.api_domain
    }

    fn headers(&self) -> Result<HeaderMap, AppError> {
        auth_headers(self.session.as_ref())
    }

    /// Exchanges credentials for a session. The only unauthenticated call.
    #[instrument(skip(self, password))]
    pub async fn login(
        &self,
        usuario: &str,
        password: &str,
        dispositivo: &str,
    ) -> Result<LoginData, AppError> {
        let url = build_endpoint_url(&self.api_domain, endpoints::LOGIN);
        let request = LoginRequest {
            usuario: usuario.to_string(),
            password: password.to_string(),
            dispositivo: dispositivo.to_string(),
        };
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let value = post_json(&self.http, &url, headers, &request).await?;
        let data: LoginData = decode(value, &url)?;
        if data.usuario.token.trim().is_empty() {
            return Err(AppError::api_unexpected_structure(
                "Login response carries no token",
                url,
            ));
        }
        info!(
            "Logged in as {} (season {})",
            data.usuario.nombre_usuario, data.temporada.id
        );
        Ok(data)
    }

    pub async fn fetch_teams(&self) -> Result<Vec<Team>, AppError> {
        let url = build_endpoint_url(&self.api_domain, endpoints::TEAMS);
        self.fetch_list(&url, cache_ttl::TEAMS_SECONDS).await
    }

    pub async fn fetch_rounds(
        &self,
        season_id: i64,
        tournament_id: i64,
    ) -> Result<Vec<Round>, AppError> {
        let url = build_rounds_url(&self.api_domain, season_id, tournament_id);
        self.fetch_list(&url, cache_ttl::ROUNDS_SECONDS).await
    }

    pub async fn fetch_round_matches(&self, round_id: i64) -> Result<Vec<Encounter>, AppError> {
        let url = build_round_matches_url(&self.api_domain, round_id);
        self.fetch_list(&url, cache_ttl::MATCH_LIST_SECONDS).await
    }

    pub async fn fetch_pending_matches(
        &self,
        season_id: i64,
        tournament_id: i64,
        team_id: i64,
    ) -> Result<Vec<Encounter>, AppError> {
        let url = build_pending_matches_url(&self.api_domain, season_id, tournament_id, team_id);
        self.fetch_list(&url, cache_ttl::MATCH_LIST_SECONDS).await
    }

    pub async fn fetch_played_matches(
        &self,
        season_id: i64,
        tournament_id: i64,
        team_id: i64,
    ) -> Result<Vec<Encounter>, AppError> {
        let url = build_played_matches_url(&self.api_domain, season_id, tournament_id, team_id);
        self.fetch_list(&url, cache_ttl::MATCH_LIST_SECONDS).await
    }

    /// Raw match-detail payload. Never served from cache, since an editing
    /// session must start from what the server holds right now.
    #[instrument(skip(self))]
    pub async fn fetch_match_info(&self, match_id: i64) -> Result<Value, AppError> {
        let url = build_match_info_url(&self.api_domain, match_id);
        get_value(&self.http, &url, self.headers()?, None).await
    }

    /// Fetches and normalizes the match detail
    pub async fn load_match_info(&self, match_id: i64) -> Result<MatchInfo, AppError> {
        let raw = self.fetch_match_info(match_id).await?;
        Ok(normalize_match_info(&raw))
    }

    /// Sends the close-match request once.
    #[instrument(skip(self, payload), fields(match_id = payload.match_id))]
    pub async fn save_match(&self, payload: &SaveMatchPayload) -> Result<(), AppError> {
        let url = build_endpoint_url(&self.api_domain, endpoints::SAVE_MATCH);
        post_json(&self.http, &url, self.headers()?, payload).await?;
        info!(
            "Saved match {} with score {}-{}",
            payload.match_id, payload.local_score, payload.visitor_score
        );
        Ok(())
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        url: &str,
        ttl_seconds: u64,
    ) -> Result<Vec<T>, AppError> {
        let headers = self.headers()?;
        let value = get_value(&self.http, url, headers, Some(ttl_seconds)).await?;
        if !value.is_array() {
            // Envelopes with empty `datos` unwrap to the whole body.
            warn!("Expected a list from {}, treating as empty", url);
            return Ok(Vec::new());
        }
        decode(value, url)
    }
}
