use super::*;
use crate::state::session::Role;

fn logged_in(status: AccountStatus) -> SessionState {
    let mut s = SessionState::default();
    s.login("u1".to_owned(), Role::Teacher, status);
    s
}

fn logged_out() -> SessionState {
    let mut s = SessionState::default();
    s.resolved_logged_out();
    s
}

// =============================================================
// Guest guard
// =============================================================

#[test]
fn guest_renders_when_logged_out() {
    assert_eq!(guest_outcome(&logged_out()), GuardOutcome::Render);
}

#[test]
fn guest_renders_while_resolving() {
    assert_eq!(guest_outcome(&SessionState::default()), GuardOutcome::Render);
}

#[test]
fn guest_redirects_home_when_authenticated() {
    assert_eq!(guest_outcome(&logged_in(AccountStatus::Active)), GuardOutcome::RedirectHome);
}

// =============================================================
// Authenticated shell guard
// =============================================================

#[test]
fn admin_renders_while_resolving() {
    assert_eq!(admin_outcome(&SessionState::default()), GuardOutcome::Render);
}

#[test]
fn admin_redirects_login_once_resolved_logged_out() {
    assert_eq!(admin_outcome(&logged_out()), GuardOutcome::RedirectLogin);
}

#[test]
fn admin_renders_for_active_account() {
    assert_eq!(admin_outcome(&logged_in(AccountStatus::Active)), GuardOutcome::Render);
}

#[test]
fn admin_forces_initial_account_into_password_change() {
    assert_eq!(
        admin_outcome(&logged_in(AccountStatus::Initial)),
        GuardOutcome::RedirectChangePassword
    );
}

// =============================================================
// Forced password-change guard
// =============================================================

#[test]
fn change_password_renders_for_initial_account() {
    assert_eq!(
        change_password_outcome(&logged_in(AccountStatus::Initial)),
        GuardOutcome::Render
    );
}

#[test]
fn change_password_redirects_home_for_active_account() {
    assert_eq!(
        change_password_outcome(&logged_in(AccountStatus::Active)),
        GuardOutcome::RedirectHome
    );
}

#[test]
fn change_password_redirects_login_when_logged_out() {
    assert_eq!(change_password_outcome(&logged_out()), GuardOutcome::RedirectLogin);
}

// =============================================================
// Navigation soft lock
// =============================================================

#[test]
fn nav_locked_only_for_initial_status() {
    assert!(nav_locked(&logged_in(AccountStatus::Initial)));
    assert!(!nav_locked(&logged_in(AccountStatus::Active)));
    assert!(!nav_locked(&logged_out()));
}
