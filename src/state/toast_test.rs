use super::*;

#[test]
fn toast_state_defaults_empty() {
    let s = ToastState::default();
    assert!(s.items.is_empty());
}

#[test]
fn push_appends_and_returns_id() {
    let mut s = ToastState::default();
    let id = s.push("Incorrect username or password");
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.items[0].id, id);
    assert_eq!(s.items[0].text, "Incorrect username or password");
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut s = ToastState::default();
    let first = s.push("one");
    let _second = s.push("two");

    s.dismiss(&first);
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.items[0].text, "two");
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut s = ToastState::default();
    s.push("one");
    s.dismiss("not-an-id");
    assert_eq!(s.items.len(), 1);
}
