use super::*;

#[test]
fn plain_enter_submits() {
    assert!(submits_on_key("Enter", false, false));
}

#[test]
fn shift_enter_does_not_submit() {
    assert!(!submits_on_key("Enter", true, false));
}

#[test]
fn enter_during_ime_composition_does_not_submit() {
    assert!(!submits_on_key("Enter", false, true));
}

#[test]
fn other_keys_do_not_submit() {
    assert!(!submits_on_key("a", false, false));
    assert!(!submits_on_key("Tab", false, false));
}
