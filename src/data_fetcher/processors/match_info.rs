//! Normalization of the match-info response.
//!
//! The backend has shipped several shapes of the "información de encuentro"
//! payload over time: the data may be wrapped in `datos` or `data`, the match
//! record may sit under `encuentro`, and the statistics lists and their fields
//! have carried different names. [`normalize_match_info`] resolves every value
//! through a fixed candidate list and never fails; anything missing becomes its
//! default.
//!
//! Candidates are tried in order and the first "truthy" one wins: `null`,
//! `false`, `0` and `""` are skipped, any array or object qualifies. Goal
//! counts instead take the first non-null candidate, so an explicit `0` stops
//! the search.

use serde_json::Value;
use tracing::{debug, warn};

use crate::constants::DEFAULT_PLAYER_NAME;
use crate::data_fetcher::models::{EncounterSummary, MatchInfo, MatchTeam, PlayerStat, Suspension};

/// Keys that may wrap the real payload, outermost first
const PAYLOAD_KEYS: &[&str] = &["datos", "data"];

const LOCAL_STATS_KEYS: &[&str] = &[
    "lstEstadisticasLocal",
    "estadisticasLocal",
    "goleadoresLocal",
    "jugadoresLocal",
    "encuentro.lstEstadisticasLocal",
];

const VISITOR_STATS_KEYS: &[&str] = &[
    "lstEstadisticasVisita",
    "estadisticasVisita",
    "goleadoresVisita",
    "jugadoresVisita",
    "encuentro.lstEstadisticasVisita",
];

const LOCAL_SUSPENSIONS_KEYS: &[&str] = &["lstSuspensionesLocal"];
const VISITOR_SUSPENSIONS_KEYS: &[&str] = &["lstSuspensionesVisita"];

const PLAYER_ID_KEYS: &[&str] = &["idJugador", "jugador.id", "id"];
const PLAYER_NAME_KEYS: &[&str] = &["nombreJugador", "jugador.nombre", "nombre"];
const GOALS_KEYS: &[&str] = &["cantidadGoles", "goles"];
const SECOND_YELLOW_KEYS: &[&str] = &["expulsion", "expulsionDobleAmarilla", "roja"];
const RED_CARD_KEYS: &[&str] = &["expulsionDirecta", "rojaDirecta"];
const INJURY_KEYS: &[&str] = &["lesion"];

const SUSPENDED_NAME_KEYS: &[&str] = &["nombreJugador", "jugador.nombre"];

/// Follows a dotted path through nested objects
fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, key| current.get(key))
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn first_truthy<'a>(value: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths
        .iter()
        .filter_map(|path| lookup(value, path))
        .find(|candidate| is_truthy(candidate))
}

fn first_non_null<'a>(value: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths
        .iter()
        .filter_map(|path| lookup(value, path))
        .find(|candidate| !candidate.is_null())
}

/// First candidate that is an array. Truthy non-arrays are skipped.
fn first_array<'a>(value: &'a Value, paths: &[&str]) -> &'a [Value] {
    paths
        .iter()
        .filter_map(|path| lookup(value, path))
        .filter(|candidate| is_truthy(candidate))
        .find_map(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Reads a non-negative count. Negative or unreadable values become 0.
fn as_count(value: Option<&Value>) -> u32 {
    value
        .and_then(as_integer)
        .map(|n| n.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

/// Boolean flag with string tolerance, so `"false"` and `"0"` stay false
fn as_flag(value: &Value) -> bool {
    match value {
        Value::String(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "1" | "si" | "sí"
        ),
        other => is_truthy(other),
    }
}

fn any_flag(value: &Value, paths: &[&str]) -> bool {
    paths
        .iter()
        .filter_map(|path| lookup(value, path))
        .any(as_flag)
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_text(value: &Value, paths: &[&str]) -> Option<String> {
    paths
        .iter()
        .filter_map(|path| lookup(value, path))
        .filter(|candidate| is_truthy(candidate))
        .find_map(as_text)
}

fn first_id(value: &Value, paths: &[&str]) -> i64 {
    paths
        .iter()
        .filter_map(|path| lookup(value, path))
        .filter_map(as_integer)
        .find(|id| *id != 0)
        .unwrap_or(0)
}

/// Normalizes one statistic entry. Non-object entries yield a default record.
pub fn normalize_player_stat(entry: &Value) -> PlayerStat {
    let mut stat = PlayerStat {
        player_id: first_id(entry, PLAYER_ID_KEYS),
        player_name: first_text(entry, PLAYER_NAME_KEYS)
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string()),
        goals: as_count(first_non_null(entry, GOALS_KEYS)),
        second_yellow: any_flag(entry, SECOND_YELLOW_KEYS),
        red_card: any_flag(entry, RED_CARD_KEYS),
        injury: any_flag(entry, INJURY_KEYS),
    };

    if stat.second_yellow && stat.red_card {
        warn!(
            "Player {} arrived with both expulsion kinds; keeping the straight red",
            stat.player_id
        );
        stat.second_yellow = false;
    }

    stat
}

fn normalize_suspension(entry: &Value) -> Suspension {
    Suspension {
        player_name: first_text(entry, SUSPENDED_NAME_KEYS)
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string()),
        injury: any_flag(entry, INJURY_KEYS),
    }
}

fn normalize_team(value: Option<&Value>) -> MatchTeam {
    let Some(team) = value else {
        return MatchTeam::default();
    };
    MatchTeam {
        id: first_id(team, &["id"]),
        name: first_text(team, &["nombre"]).unwrap_or_default(),
        crest_url: first_text(team, &["urlEscudo"]).unwrap_or_default(),
    }
}

fn normalize_encounter(record: &Value) -> EncounterSummary {
    EncounterSummary {
        id: first_id(record, &["id"]),
        local_team: normalize_team(first_truthy(record, &["equipoLocal"])),
        visitor_team: normalize_team(first_truthy(record, &["equipoVisita"])),
        local_score: as_count(first_non_null(record, &["marcadorLocal"])),
        visitor_score: as_count(first_non_null(record, &["marcadorVisita"])),
        closed: any_flag(record, &["cerrado"]),
        completed: any_flag(record, &["completado"]),
    }
}

fn normalize_image_urls(root: &Value, record: &Value) -> Vec<String> {
    let saved = [
        lookup(root, "lstUrlImagenes"),
        lookup(root, "imagenes"),
        lookup(record, "lstUrlImagenes"),
    ]
    .into_iter()
    .flatten()
    .filter(|candidate| is_truthy(candidate))
    .find_map(Value::as_array);

    let urls: Vec<String> = saved
        .map(|list| {
            list.iter()
                .filter_map(|url| url.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    if urls.is_empty() {
        vec![String::new()]
    } else {
        urls
    }
}

/// Extracts the canonical [`MatchInfo`] from any known response shape.
///
/// Pure and total: malformed or missing parts are replaced by defaults.
pub fn normalize_match_info(payload: &Value) -> MatchInfo {
    let root = first_truthy(payload, PAYLOAD_KEYS).unwrap_or(payload);
    let record = first_truthy(root, &["encuentro"]).unwrap_or(root);

    let local_stats: Vec<PlayerStat> = first_array(root, LOCAL_STATS_KEYS)
        .iter()
        .map(normalize_player_stat)
        .collect();
    let visitor_stats: Vec<PlayerStat> = first_array(root, VISITOR_STATS_KEYS)
        .iter()
        .map(normalize_player_stat)
        .collect();

    let info = MatchInfo {
        encounter: normalize_encounter(record),
        local_stats,
        visitor_stats,
        local_suspensions: first_array(root, LOCAL_SUSPENSIONS_KEYS)
            .iter()
            .map(normalize_suspension)
            .collect(),
        visitor_suspensions: first_array(root, VISITOR_SUSPENSIONS_KEYS)
            .iter()
            .map(normalize_suspension)
            .collect(),
        image_urls: normalize_image_urls(root, record),
    };

    debug!(
        "Normalized match {}: {} local stats, {} visitor stats, {} image slots, closed={}",
        info.encounter.id,
        info.local_stats.len(),
        info.visitor_stats.len(),
        info.image_urls.len(),
        info.encounter.closed
    );

    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn modern_payload() -> Value {
        json!({
            "estado": 200,
            "mensaje": "",
            "datos": {
                "encuentro": {
                    "id": 81,
                    "marcadorLocal": 2,
                    "marcadorVisita": 1,
                    "cerrado": false,
                    "completado": true,
                    "equipoLocal": { "id": 1, "nombre": "Rayados FC", "urlEscudo": "https://x/1.png" },
                    "equipoVisita": { "id": 2, "nombre": "Tuzos", "urlEscudo": "https://x/2.png" }
                },
                "lstEstadisticasLocal": [
                    { "idJugador": 10, "nombreJugador": "Chucho", "cantidadGoles": 2,
                      "expulsion": false, "expulsionDirecta": false, "lesion": false }
                ],
                "lstEstadisticasVisita": [
                    { "idJugador": 20, "nombreJugador": "Lalo", "cantidadGoles": 0,
                      "expulsion": true, "expulsionDirecta": false, "lesion": true }
                ],
                "lstSuspensionesLocal": [ { "nombreJugador": "Pepe", "lesion": true } ],
                "lstSuspensionesVisita": [ { "jugador": { "nombre": "Toño" } } ],
                "lstUrlImagenes": ["https://img.example/a.png", "https://img.example/b.png"]
            }
        })
    }

    #[test]
    fn test_modern_payload() {
        let info = normalize_match_info(&modern_payload());

        assert_eq!(info.encounter.id, 81);
        assert_eq!(info.encounter.local_team.name, "Rayados FC");
        assert_eq!(info.encounter.visitor_team.crest_url, "https://x/2.png");
        assert_eq!(info.encounter.local_score, 2);
        assert_eq!(info.encounter.visitor_score, 1);
        assert!(!info.encounter.closed);
        assert!(info.encounter.completed);

        assert_eq!(info.local_stats.len(), 1);
        assert_eq!(info.local_stats[0].player_id, 10);
        assert_eq!(info.local_stats[0].goals, 2);
        assert!(info.visitor_stats[0].second_yellow);
        assert!(info.visitor_stats[0].injury);

        assert_eq!(info.local_suspensions[0].tag(), "LES");
        assert_eq!(info.visitor_suspensions[0].player_name, "Toño");
        assert_eq!(info.visitor_suspensions[0].tag(), "SUSP");
        assert_eq!(info.image_urls.len(), 2);
    }

    #[test]
    fn test_data_wrapper_and_flat_record() {
        let payload = json!({
            "data": {
                "id": 5,
                "marcadorLocal": 0,
                "marcadorVisita": 3,
                "cerrado": true,
                "estadisticasLocal": [ { "id": 4, "nombre": "Memo", "goles": 1 } ]
            }
        });

        let info = normalize_match_info(&payload);
        assert_eq!(info.encounter.id, 5);
        assert!(info.encounter.closed);
        assert_eq!(info.encounter.visitor_score, 3);
        assert_eq!(info.local_stats[0].player_id, 4);
        assert_eq!(info.local_stats[0].player_name, "Memo");
        assert_eq!(info.local_stats[0].goals, 1);
        assert!(info.visitor_stats.is_empty());
    }

    #[test]
    fn test_unwrapped_payload_with_legacy_list_names() {
        let payload = json!({
            "encuentro": { "id": 9 },
            "goleadoresLocal": [ { "jugador": { "id": 77, "nombre": "Beto" }, "goles": 3 } ],
            "jugadoresVisita": [ { "idJugador": 88, "roja": true, "rojaDirecta": false } ]
        });

        let info = normalize_match_info(&payload);
        assert_eq!(info.encounter.id, 9);
        assert_eq!(info.local_stats[0].player_id, 77);
        assert_eq!(info.local_stats[0].player_name, "Beto");
        assert_eq!(info.local_stats[0].goals, 3);
        assert!(info.visitor_stats[0].second_yellow);
        assert!(!info.visitor_stats[0].red_card);
    }

    #[test]
    fn test_list_nested_under_encounter_is_last_resort() {
        let payload = json!({
            "datos": {
                "encuentro": {
                    "id": 12,
                    "lstEstadisticasLocal": [ { "idJugador": 1 } ],
                    "lstEstadisticasVisita": [ { "idJugador": 2 }, { "idJugador": 3 } ]
                }
            }
        });

        let info = normalize_match_info(&payload);
        assert_eq!(info.local_stats.len(), 1);
        assert_eq!(info.visitor_stats.len(), 2);
    }

    #[test]
    fn test_first_list_candidate_wins_even_when_empty() {
        let payload = json!({
            "lstEstadisticasLocal": [],
            "estadisticasLocal": [ { "idJugador": 1 } ]
        });

        let info = normalize_match_info(&payload);
        assert!(info.local_stats.is_empty());
    }

    #[test]
    fn test_non_array_list_candidate_is_skipped() {
        let payload = json!({
            "lstEstadisticasLocal": "n/a",
            "estadisticasLocal": [ { "idJugador": 1 } ]
        });

        let info = normalize_match_info(&payload);
        assert_eq!(info.local_stats.len(), 1);
    }

    #[test]
    fn test_entry_defaults() {
        let stat = normalize_player_stat(&json!({}));
        assert_eq!(stat.player_id, 0);
        assert_eq!(stat.player_name, DEFAULT_PLAYER_NAME);
        assert_eq!(stat.goals, 0);
        assert!(!stat.second_yellow && !stat.red_card && !stat.injury);

        let from_garbage = normalize_player_stat(&json!("not an object"));
        assert_eq!(from_garbage, stat);
    }

    #[test]
    fn test_goal_counts_are_tolerant() {
        assert_eq!(normalize_player_stat(&json!({ "cantidadGoles": "4" })).goals, 4);
        assert_eq!(normalize_player_stat(&json!({ "cantidadGoles": -2 })).goals, 0);
        assert_eq!(normalize_player_stat(&json!({ "cantidadGoles": 2.0 })).goals, 2);
        assert_eq!(normalize_player_stat(&json!({ "cantidadGoles": "dos" })).goals, 0);
        // explicit zero stops the search
        assert_eq!(
            normalize_player_stat(&json!({ "cantidadGoles": 0, "goles": 5 })).goals,
            0
        );
        // null falls through
        assert_eq!(
            normalize_player_stat(&json!({ "cantidadGoles": null, "goles": 5 })).goals,
            5
        );
    }

    #[test]
    fn test_flag_strings() {
        let stat = normalize_player_stat(&json!({ "lesion": "false", "expulsion": "true" }));
        assert!(!stat.injury);
        assert!(stat.second_yellow);
    }

    #[test]
    fn test_second_yellow_alias() {
        let stat = normalize_player_stat(&json!({ "expulsionDobleAmarilla": true }));
        assert!(stat.second_yellow);
        assert!(!stat.red_card);
    }

    #[test]
    fn test_conflicting_cards_keep_red() {
        let stat = normalize_player_stat(&json!({ "expulsion": true, "expulsionDirecta": true }));
        assert!(stat.red_card);
        assert!(!stat.second_yellow);
    }

    #[test]
    fn test_image_fallbacks() {
        let info = normalize_match_info(&json!({ "imagenes": ["https://a"] }));
        assert_eq!(info.image_urls, vec!["https://a".to_string()]);

        let info = normalize_match_info(&json!({
            "encuentro": { "id": 1, "lstUrlImagenes": ["https://b", 7, null] }
        }));
        assert_eq!(info.image_urls, vec!["https://b".to_string()]);

        let info = normalize_match_info(&json!({ "lstUrlImagenes": [] }));
        assert_eq!(info.image_urls, vec![String::new()]);
    }

    #[test]
    fn test_normalization_is_total() {
        let payloads = vec![
            json!(null),
            json!(0),
            json!(""),
            json!("texto"),
            json!([]),
            json!([1, 2, 3]),
            json!({}),
            json!({ "datos": null }),
            json!({ "datos": false, "data": 0 }),
            json!({ "datos": [] }),
            json!({ "encuentro": "nope", "lstEstadisticasLocal": [null, 1, "x", []] }),
            json!({ "datos": { "encuentro": { "equipoLocal": "Rayados", "marcadorLocal": "x" } } }),
            json!({ "lstSuspensionesLocal": { "nombreJugador": "Pepe" } }),
        ];

        for payload in payloads {
            let info = normalize_match_info(&payload);
            assert!(!info.image_urls.is_empty(), "payload {payload}");
            for stat in info.local_stats.iter().chain(info.visitor_stats.iter()) {
                assert!(!stat.player_name.is_empty());
                assert!(!(stat.second_yellow && stat.red_card));
            }
        }
    }

    #[test]
    fn test_garbage_entries_still_yield_records() {
        let info = normalize_match_info(&json!({
            "lstEstadisticasLocal": [null, 1, "x", { "idJugador": "15", "nombreJugador": 99 }]
        }));
        assert_eq!(info.local_stats.len(), 4);
        assert_eq!(info.local_stats[3].player_id, 15);
        assert_eq!(info.local_stats[3].player_name, "99");
    }
}
