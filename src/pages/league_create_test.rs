use super::*;

#[test]
fn name_is_required() {
    assert_eq!(name_error(""), Some("Inserisci il nome della lega"));
    assert_eq!(name_error("   "), Some("Inserisci il nome della lega"));
    assert_eq!(name_error("Lega del lunedì"), None);
}

#[test]
fn description_is_required() {
    assert_eq!(description_error(""), Some("Inserisci una descrizione"));
    assert_eq!(description_error("\t\n"), Some("Inserisci una descrizione"));
    assert_eq!(description_error("Gara tra amici"), None);
}
