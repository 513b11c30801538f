use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_session_has_no_identity() {
    let s = SessionState::default();
    assert!(s.user_id.is_none());
    assert!(s.role.is_none());
    assert!(!s.is_authenticated());
}

#[test]
fn default_session_is_resolving() {
    let s = SessionState::default();
    assert!(s.resolving);
    assert_eq!(s.generation, 0);
}

// =============================================================
// Login / logout actions
// =============================================================

#[test]
fn login_populates_identity_and_bumps_generation() {
    let mut s = SessionState::default();
    s.login("u1".to_owned(), Role::Teacher, AccountStatus::Active);

    assert_eq!(s.user_id.as_deref(), Some("u1"));
    assert_eq!(s.role, Some(Role::Teacher));
    assert_eq!(s.status, AccountStatus::Active);
    assert!(!s.resolving);
    assert_eq!(s.generation, 1);
}

#[test]
fn logout_clears_every_identity_field() {
    let mut s = SessionState::default();
    s.login("u1".to_owned(), Role::Principal, AccountStatus::Initial);
    s.logout();

    assert!(s.user_id.is_none());
    assert!(s.role.is_none());
    assert_eq!(s.status, AccountStatus::Active);
    assert!(!s.resolving);
}

#[test]
fn logout_is_idempotent() {
    let mut s = SessionState::default();
    s.login("u1".to_owned(), Role::Cashier, AccountStatus::Active);

    s.logout();
    let once = s.clone();
    s.logout();

    assert_eq!(s.user_id, once.user_id);
    assert_eq!(s.role, once.role);
    assert_eq!(s.status, once.status);
}

#[test]
fn logout_when_never_logged_in_yields_logged_out_state() {
    let mut s = SessionState::default();
    s.logout();
    assert!(!s.is_authenticated());
    assert!(s.role.is_none());
}

// =============================================================
// Bootstrap resolution actions
// =============================================================

#[test]
fn refresh_identity_populates_without_generation_bump() {
    let mut s = SessionState::default();
    s.refresh_identity("u1".to_owned(), Role::Teacher, AccountStatus::Active);

    assert_eq!(s.user_id.as_deref(), Some("u1"));
    assert_eq!(s.role, Some(Role::Teacher));
    assert!(!s.resolving);
    assert_eq!(s.generation, 0);
}

#[test]
fn resolved_logged_out_finishes_resolution_with_no_identity() {
    let mut s = SessionState::default();
    s.resolved_logged_out();

    assert!(s.user_id.is_none());
    assert!(s.role.is_none());
    assert!(!s.resolving);
}

#[test]
fn stale_resolution_is_detectable_after_logout() {
    let mut s = SessionState::default();
    let started = s.generation;

    // Logout lands while the identity fetch is in flight.
    s.logout();

    // The resolver compares generations and must discard its result.
    assert_ne!(s.generation, started);
}

#[test]
fn stale_resolution_is_detectable_after_login() {
    let mut s = SessionState::default();
    let started = s.generation;
    s.login("u2".to_owned(), Role::Teacher, AccountStatus::Active);
    assert_ne!(s.generation, started);
}

// =============================================================
// Status transitions
// =============================================================

#[test]
fn initial_account_transitions_to_active() {
    let mut s = SessionState::default();
    s.login("u1".to_owned(), Role::Teacher, AccountStatus::Initial);
    s.set_status(AccountStatus::Active);
    assert_eq!(s.status, AccountStatus::Active);
}

// =============================================================
// Role / status deserialization
// =============================================================

#[test]
fn known_role_tags_deserialize() {
    let role: Role = serde_json::from_str("\"principal\"").unwrap();
    assert_eq!(role, Role::Principal);
    let role: Role = serde_json::from_str("\"cashier\"").unwrap();
    assert_eq!(role, Role::Cashier);
}

#[test]
fn unknown_role_tag_degrades_to_unknown() {
    let role: Role = serde_json::from_str("\"janitor\"").unwrap();
    assert_eq!(role, Role::Unknown);
}

#[test]
fn status_tags_deserialize() {
    let status: AccountStatus = serde_json::from_str("\"initial\"").unwrap();
    assert_eq!(status, AccountStatus::Initial);
    let status: AccountStatus = serde_json::from_str("\"active\"").unwrap();
    assert_eq!(status, AccountStatus::Active);
}
