use super::*;

fn selection(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_owned()).collect()
}

// =========================================================================
// Selection toggling
// =========================================================================

#[test]
fn regular_users_cannot_toggle() {
    assert_eq!(toggle_selection(&selection(&["44"]), "16", false), None);
}

#[test]
fn toggling_adds_at_the_end() {
    let next = toggle_selection(&selection(&["44", "16"]), "1", true);
    assert_eq!(next, Some(selection(&["44", "16", "1"])));
}

#[test]
fn toggling_removes_an_existing_entry() {
    let next = toggle_selection(&selection(&["44", "16", "1"]), "16", true);
    assert_eq!(next, Some(selection(&["44", "1"])));
}

#[test]
fn toggling_starts_from_an_empty_selection() {
    let next = toggle_selection(&[], "63", true);
    assert_eq!(next, Some(selection(&["63"])));
}

// =========================================================================
// Roster fallback
// =========================================================================

#[test]
fn empty_roster_falls_back_to_the_fixed_list() {
    let roster = resolve_roster(Vec::new());
    assert_eq!(roster.len(), 8);
    assert_eq!(roster[0].name, "Lewis Hamilton");
    assert_eq!(roster[0].team, "Ferrari");
    assert_eq!(roster[0].number, "44");
}

#[test]
fn non_empty_roster_is_kept() {
    let roster = resolve_roster(vec![Driver {
        id: "99".to_owned(),
        name: "Pilota Prova".to_owned(),
        team: "Scuderia Prova".to_owned(),
        number: "99".to_owned(),
    }]);
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, "99");
}

#[test]
fn fallback_covers_four_teams_in_pairs() {
    let roster = fallback_drivers();
    let teams: Vec<&str> = roster.iter().map(|driver| driver.team.as_str()).collect();
    assert_eq!(
        teams,
        [
            "Ferrari", "Ferrari", "Red Bull", "Red Bull", "McLaren", "McLaren", "Mercedes",
            "Mercedes"
        ]
    );
    assert!(roster.iter().all(|driver| driver.id == driver.number));
}
