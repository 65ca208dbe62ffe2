//! URL building utilities for API endpoints
//!
//! The backend binds query parameters case-sensitively and different
//! deployments expect different casing, so identifiers are sent under both
//! the camelCase and the PascalCase key.

use crate::constants::endpoints;

/// Joins the API domain and an endpoint path.
///
/// # Example
/// ```
/// use fuchiboli_admin::data_fetcher::api::build_endpoint_url;
///
/// let url = build_endpoint_url("https://api.example.com/", "/api/equipos/obtener");
/// assert_eq!(url, "https://api.example.com/api/equipos/obtener");
/// ```
pub fn build_endpoint_url(api_domain: &str, path: &str) -> String {
    format!("{}{}", api_domain.trim_end_matches('/'), path)
}

fn dual_case_params(params: &[(&str, i64)]) -> String {
    let lower = params.iter().map(|(key, value)| format!("{key}={value}"));
    let upper = params.iter().map(|(key, value)| {
        let mut chars = key.chars();
        let pascal: String = chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        format!("{pascal}={value}")
    });
    lower.chain(upper).collect::<Vec<_>>().join("&")
}

/// Builds the URL listing the rounds of a season's tournament.
///
/// # Example
/// ```
/// use fuchiboli_admin::data_fetcher::api::build_rounds_url;
///
/// let url = build_rounds_url("https://api.example.com", 3, 1);
/// assert_eq!(
///     url,
///     "https://api.example.com/api/jornadas/obtener?idTemporada=3&idTorneo=1&IdTemporada=3&IdTorneo=1"
/// );
/// ```
pub fn build_rounds_url(api_domain: &str, season_id: i64, tournament_id: i64) -> String {
    format!(
        "{}?{}",
        build_endpoint_url(api_domain, endpoints::ROUNDS),
        dual_case_params(&[("idTemporada", season_id), ("idTorneo", tournament_id)])
    )
}

/// Builds the URL listing the matches of one round.
pub fn build_round_matches_url(api_domain: &str, round_id: i64) -> String {
    format!(
        "{}?{}",
        build_endpoint_url(api_domain, endpoints::ROUND_MATCHES),
        dual_case_params(&[("idJornada", round_id)])
    )
}

fn team_matches_url(
    api_domain: &str,
    path: &str,
    season_id: i64,
    tournament_id: i64,
    team_id: i64,
) -> String {
    format!(
        "{}?{}",
        build_endpoint_url(api_domain, path),
        dual_case_params(&[
            ("idTemporada", season_id),
            ("idTorneo", tournament_id),
            ("idEquipo", team_id),
        ])
    )
}

/// Builds the URL listing a team's matches that still await a result.
pub fn build_pending_matches_url(
    api_domain: &str,
    season_id: i64,
    tournament_id: i64,
    team_id: i64,
) -> String {
    team_matches_url(
        api_domain,
        endpoints::PENDING_MATCHES,
        season_id,
        tournament_id,
        team_id,
    )
}

/// Builds the URL listing a team's played matches.
pub fn build_played_matches_url(
    api_domain: &str,
    season_id: i64,
    tournament_id: i64,
    team_id: i64,
) -> String {
    team_matches_url(
        api_domain,
        endpoints::PLAYED_MATCHES,
        season_id,
        tournament_id,
        team_id,
    )
}

/// Builds the match-detail URL.
///
/// # Example
/// ```
/// use fuchiboli_admin::data_fetcher::api::build_match_info_url;
///
/// let url = build_match_info_url("https://api.example.com", 81);
/// assert_eq!(
///     url,
///     "https://api.example.com/api/jornadas/informacion-encuentro?idEncuentro=81&IdEncuentro=81"
/// );
/// ```
pub fn build_match_info_url(api_domain: &str, match_id: i64) -> String {
    format!(
        "{}?{}",
        build_endpoint_url(api_domain, endpoints::MATCH_INFO),
        dual_case_params(&[("idEncuentro", match_id)])
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_matches_url() {
        assert_eq!(
            build_round_matches_url("http://localhost:5000", 7),
            "http://localhost:5000/api/jornadas/encuentros?idJornada=7&IdJornada=7"
        );
    }

    #[test]
    fn test_team_match_urls() {
        assert_eq!(
            build_pending_matches_url("https://x", 3, 1, 12),
            "https://x/api/jornadas/pendientes?idTemporada=3&idTorneo=1&idEquipo=12&IdTemporada=3&IdTorneo=1&IdEquipo=12"
        );
        assert_eq!(
            build_played_matches_url("https://x", 3, 1, 12),
            "https://x/api/jornadas/jugados?idTemporada=3&idTorneo=1&idEquipo=12&IdTemporada=3&IdTorneo=1&IdEquipo=12"
        );
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        assert_eq!(
            build_match_info_url("https://x/", 1),
            "https://x/api/jornadas/informacion-encuentro?idEncuentro=1&IdEncuentro=1"
        );
    }
}
