use fuchiboli_admin::data_fetcher::processors::normalize_match_info;
use fuchiboli_admin::match_editor::{MatchEditor, Side, Tab};
use serde_json::{Value, json};

fn legacy_fixture() -> Value {
    serde_json::from_str(include_str!("fixtures/match_info_legacy.json"))
        .expect("fixture is valid JSON")
}

#[test]
fn test_legacy_fixture_normalizes_every_field() {
    let info = normalize_match_info(&legacy_fixture());

    assert_eq!(info.encounter.id, 57);
    assert_eq!(info.encounter.local_team.name, "Deportivo Tlalnepantla");
    assert!(!info.encounter.closed);

    let memo = &info.local_stats[0];
    assert_eq!((memo.player_id, memo.player_name.as_str()), (31, "Memo"));
    assert_eq!(memo.goals, 1);
    assert!(memo.second_yellow);

    let beto = &info.local_stats[1];
    assert_eq!(beto.goals, 0);
    assert!(!beto.injury);

    let paco = &info.visitor_stats[0];
    assert_eq!(paco.goals, 2);
    assert!(paco.red_card);

    let unnamed = &info.visitor_stats[1];
    assert_eq!(unnamed.player_name, "Jugador");
    assert_eq!(unnamed.goals, 0);
    assert!(unnamed.red_card);
    assert!(!unnamed.second_yellow);

    assert_eq!(info.image_urls, vec![String::new()]);
}

#[test]
fn test_open_fixture_score_is_rederived() {
    let editor = MatchEditor::new(normalize_match_info(&legacy_fixture()));

    // The stored 4-4 is replaced by the goals actually listed.
    assert_eq!(editor.score(), (1, 2));
    assert_eq!(editor.tab(), Tab::Local);
    assert_eq!(editor.stats(Side::Visitor).len(), 2);
}

#[test]
fn test_normalization_is_total() {
    let payloads = [
        Value::Null,
        json!(42),
        json!("texto"),
        json!([]),
        json!({}),
        json!({"datos": null, "data": false}),
        json!({"datos": {"lstEstadisticasLocal": "no es lista", "lstEstadisticasVisita": [1, null, "x"]}}),
        json!({"encuentro": {"equipoLocal": 5, "marcadorLocal": "dos"}}),
    ];

    for payload in &payloads {
        let info = normalize_match_info(payload);
        assert!(!info.image_urls.is_empty(), "payload {payload}");
        for stat in info.local_stats.iter().chain(info.visitor_stats.iter()) {
            assert!(!(stat.second_yellow && stat.red_card), "payload {payload}");
            assert!(!stat.player_name.is_empty(), "payload {payload}");
        }
    }
}

#[test]
fn test_closed_fixture_opens_on_summary_with_persisted_score() {
    let mut fixture = legacy_fixture();
    fixture["data"]["cerrado"] = json!(true);

    let editor = MatchEditor::new(normalize_match_info(&fixture));
    assert!(editor.is_closed());
    assert_eq!(editor.tab(), Tab::Summary);
    assert_eq!(editor.score(), (4, 4));
}
