use serde_json::json;

use super::*;

// =============================================================
// League summaries: array location
// =============================================================

#[test]
fn summaries_from_root_array() {
    let payload = json!([
        {"league_id": 7, "league_name": "Gran Premio"},
        {"league_id": 8, "league_name": "Monza Club"},
    ]);

    let leagues = normalize_league_summaries(&payload);

    assert_eq!(leagues.len(), 2);
    assert_eq!(leagues[0].id, "7");
    assert_eq!(leagues[0].name, "Gran Premio");
    assert_eq!(leagues[1].id, "8");
}

#[test]
fn summaries_from_leagues_key() {
    let payload = json!({"leagues": [{"id": "a1", "name": "Lega A"}]});

    let leagues = normalize_league_summaries(&payload);

    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0].id, "a1");
    assert_eq!(leagues[0].name, "Lega A");
}

#[test]
fn summaries_from_data_key() {
    let payload = json!({"data": [{"leagueId": 3, "nome": "Lega B"}]});

    let leagues = normalize_league_summaries(&payload);

    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0].id, "3");
    assert_eq!(leagues[0].name, "Lega B");
}

#[test]
fn summaries_from_nested_data_leagues() {
    let payload = json!({"data": {"leagues": [{"idLega": 12, "name": "Lega C"}]}});

    let leagues = normalize_league_summaries(&payload);

    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0].id, "12");
}

#[test]
fn summaries_prefer_earliest_array_location() {
    let payload = json!({
        "leagues": [{"id": 1, "name": "Prima"}],
        "data": [{"id": 2, "name": "Seconda"}],
    });

    let leagues = normalize_league_summaries(&payload);

    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0].name, "Prima");
}

#[test]
fn summaries_without_any_array_are_empty() {
    for payload in [
        json!({}),
        json!(null),
        json!("testo"),
        json!(42),
        json!({"data": {"leagues": {"id": 1}}}),
    ] {
        assert!(normalize_league_summaries(&payload).is_empty());
    }
}

// =============================================================
// League summaries: per-element fallbacks
// =============================================================

#[test]
fn summary_id_falls_back_to_position() {
    let payload = json!([{"name": "Senza Id"}]);

    let leagues = normalize_league_summaries(&payload);

    assert_eq!(leagues[0].id, "0");
    assert_eq!(leagues[0].name, "Senza Id");
}

#[test]
fn summary_name_falls_back_to_position() {
    let payload = json!([
        {"id": 1, "name": "Con Nome"},
        {"id": 2},
        {"id": 3, "name": "Altro Nome"},
    ]);

    let leagues = normalize_league_summaries(&payload);

    assert_eq!(leagues[1].name, "Lega 2");
    assert_eq!(leagues[2].name, "Altro Nome");
}

#[test]
fn summary_handles_non_object_elements() {
    let payload = json!([null, "x", 7]);

    let leagues = normalize_league_summaries(&payload);

    assert_eq!(leagues.len(), 3);
    assert_eq!(leagues[0].id, "0");
    assert_eq!(leagues[0].name, "Lega 1");
    assert_eq!(leagues[2].id, "2");
    assert_eq!(leagues[2].name, "Lega 3");
}

#[test]
fn summary_alias_order_is_stable() {
    let payload = json!([{"league_id": "srv", "id": "alt", "league_name": "A", "nome": "B"}]);

    let leagues = normalize_league_summaries(&payload);

    assert_eq!(leagues[0].id, "srv");
    assert_eq!(leagues[0].name, "A");
}

#[test]
fn summary_skips_null_and_object_alias_values() {
    let payload = json!([{"league_id": null, "id": {"v": 1}, "leagueId": 5, "name": "Lega D"}]);

    let leagues = normalize_league_summaries(&payload);

    assert_eq!(leagues[0].id, "5");
}

#[test]
fn summary_renders_numeric_and_boolean_ids_as_text() {
    let payload = json!([
        {"id": 10, "name": "Intera"},
        {"id": 10.0, "name": "Decimale"},
        {"id": true, "name": "Booleana"},
    ]);

    let leagues = normalize_league_summaries(&payload);

    assert_eq!(leagues[0].id, "10");
    assert_eq!(leagues[1].id, "10");
    assert_eq!(leagues[2].id, "true");
}

// =============================================================
// League detail: source selection
// =============================================================

#[test]
fn detail_absent_for_empty_shapes() {
    for payload in [json!({}), json!([]), json!(null), json!({"data": {}})] {
        assert_eq!(normalize_league_detail(&payload), None);
    }
}

#[test]
fn detail_from_root_object() {
    let payload = json!({
        "league_id": 4,
        "league_name": "Paddock",
        "description": "Lega di prova",
        "super_user": 1,
    });

    let detail = normalize_league_detail(&payload).unwrap();

    assert_eq!(detail.id, "4");
    assert_eq!(detail.name, "Paddock");
    assert_eq!(detail.description, "Lega di prova");
    assert!(detail.is_super_user);
}

#[test]
fn detail_from_root_array_first_element() {
    let payload = json!([{"id": "x9", "name": "Prima"}, {"id": "x10", "name": "Seconda"}]);

    let detail = normalize_league_detail(&payload).unwrap();

    assert_eq!(detail.id, "x9");
    assert_eq!(detail.name, "Prima");
}

#[test]
fn detail_from_data_array_and_data_object() {
    let wrapped = json!({"data": [{"id": 1, "nome": "Annidata"}]});
    let plain = json!({"data": {"id": 2, "nome": "Oggetto"}});

    assert_eq!(normalize_league_detail(&wrapped).unwrap().name, "Annidata");
    assert_eq!(normalize_league_detail(&plain).unwrap().name, "Oggetto");
}

#[test]
fn detail_skips_falsy_data_and_uses_root() {
    let payload = json!({"data": "", "league_id": 9, "name": "Radice"});

    let detail = normalize_league_detail(&payload).unwrap();

    assert_eq!(detail.id, "9");
    assert_eq!(detail.name, "Radice");
}

#[test]
fn detail_without_id_is_absent() {
    let payload = json!({"name": "Anonima", "description": "manca l'id"});

    assert_eq!(normalize_league_detail(&payload), None);
}

#[test]
fn detail_defaults_name_and_description() {
    let payload = json!({"id": 5});

    let detail = normalize_league_detail(&payload).unwrap();

    assert_eq!(detail.name, "Lega");
    assert_eq!(detail.description, "");
    assert!(!detail.is_super_user);
}

// =============================================================
// League detail: super-user coercion
// =============================================================

#[test]
fn super_user_requires_numeric_one() {
    let cases = [
        (json!({"id": 1, "super_user": 1}), true),
        (json!({"id": 1, "super_user": "1"}), true),
        (json!({"id": 1, "super_user": " 1 "}), true),
        (json!({"id": 1, "super_user": true}), true),
        (json!({"id": 1, "super_user": 1.0}), true),
        (json!({"id": 1, "super_user": 0}), false),
        (json!({"id": 1, "super_user": 2}), false),
        (json!({"id": 1, "super_user": "0"}), false),
        (json!({"id": 1, "super_user": "admin"}), false),
        (json!({"id": 1, "super_user": false}), false),
        (json!({"id": 1, "super_user": null}), false),
        (json!({"id": 1, "super_user": [1]}), false),
        (json!({"id": 1}), false),
    ];

    for (payload, expected) in cases {
        let detail = normalize_league_detail(&payload).unwrap();
        assert_eq!(detail.is_super_user, expected, "payload: {payload}");
    }
}

#[test]
fn super_user_reads_snake_alias_first() {
    let primary = json!({"id": 1, "super_user": 0, "is_super_user": 1});
    let secondary = json!({"id": 1, "is_super_user": "1"});

    assert!(!normalize_league_detail(&primary).unwrap().is_super_user);
    assert!(normalize_league_detail(&secondary).unwrap().is_super_user);
}

// =============================================================
// League detail: timestamps
// =============================================================

#[test]
fn timestamps_accept_number_and_numeric_string() {
    let payload = json!({
        "id": 1,
        "created_at": 1_700_000_000,
        "updated_at": "1700003600",
    });

    let detail = normalize_league_detail(&payload).unwrap();

    assert_eq!(detail.created_at, Some(1_700_000_000));
    assert_eq!(detail.updated_at, Some(1_700_003_600));
}

#[test]
fn timestamps_accept_integral_floats() {
    let payload = json!({"id": 1, "created_at": 1.7e9, "updated_at": "1.7e9"});

    let detail = normalize_league_detail(&payload).unwrap();

    assert_eq!(detail.created_at, Some(1_700_000_000));
    assert_eq!(detail.updated_at, Some(1_700_000_000));
}

#[test]
fn invalid_timestamps_are_absent() {
    let payload = json!({
        "id": 1,
        "created_at": "domani",
        "updated_at": 3.5,
    });

    let detail = normalize_league_detail(&payload).unwrap();

    assert_eq!(detail.created_at, None);
    assert_eq!(detail.updated_at, None);
}

#[test]
fn timestamps_read_camel_case_alias() {
    let payload = json!({"id": 1, "createdAt": 100, "updatedAt": "200"});

    let detail = normalize_league_detail(&payload).unwrap();

    assert_eq!(detail.created_at, Some(100));
    assert_eq!(detail.updated_at, Some(200));
}

// =============================================================
// Drivers
// =============================================================

#[test]
fn drivers_from_each_array_location() {
    let shapes = [
        json!([{"driver_id": 1, "driver_name": "A", "team_name": "T", "driver_number": 44}]),
        json!({"drivers": [{"driver_id": 1, "driver_name": "A", "team_name": "T", "driver_number": 44}]}),
        json!({"data": [{"driver_id": 1, "driver_name": "A", "team_name": "T", "driver_number": 44}]}),
        json!({"data": {"drivers": [{"driver_id": 1, "driver_name": "A", "team_name": "T", "driver_number": 44}]}}),
    ];

    for payload in shapes {
        let drivers = normalize_drivers(&payload);
        assert_eq!(drivers.len(), 1, "payload: {payload}");
        assert_eq!(drivers[0].id, "1");
        assert_eq!(drivers[0].name, "A");
        assert_eq!(drivers[0].team, "T");
        assert_eq!(drivers[0].number, "44");
    }
}

#[test]
fn drivers_without_any_array_are_empty() {
    for payload in [json!({}), json!(null), json!({"drivers": {"id": 1}})] {
        assert!(normalize_drivers(&payload).is_empty());
    }
}

#[test]
fn driver_fields_resolve_italian_aliases() {
    let payload = json!([{"numero": 16, "nome": "Charles Leclerc", "scuderia": "Ferrari"}]);

    let drivers = normalize_drivers(&payload);

    assert_eq!(drivers[0].id, "16");
    assert_eq!(drivers[0].name, "Charles Leclerc");
    assert_eq!(drivers[0].team, "Ferrari");
    assert_eq!(drivers[0].number, "16");
}

#[test]
fn driver_fallbacks_fill_missing_fields() {
    let payload = json!([{}, {"name": "Solo Nome"}]);

    let drivers = normalize_drivers(&payload);

    assert_eq!(drivers[0].id, "0");
    assert_eq!(drivers[0].name, "Pilota 1");
    assert_eq!(drivers[0].team, "N/D");
    assert_eq!(drivers[0].number, "");
    assert_eq!(drivers[1].id, "1");
    assert_eq!(drivers[1].name, "Solo Nome");
}

#[test]
fn driver_number_falls_back_to_id() {
    let payload = json!([{"id": 81, "name": "Oscar Piastri", "team": "McLaren"}]);

    let drivers = normalize_drivers(&payload);

    assert_eq!(drivers[0].number, "81");
}

#[test]
fn driver_order_is_preserved() {
    let payload = json!({"data": {"drivers": [
        {"id": "c", "name": "Terzo"},
        {"id": "a", "name": "Primo"},
        {"id": "b", "name": "Secondo"},
    ]}});

    let ids: Vec<String> = normalize_drivers(&payload).into_iter().map(|d| d.id).collect();

    assert_eq!(ids, ["c", "a", "b"]);
}
