#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{AccountStatus, SessionState};

/// What a route guard should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    RedirectLogin,
    RedirectHome,
    RedirectChangePassword,
}

/// Guest routes (login): authenticated users are sent to the landing route,
/// everyone else sees the page. Never redirects on a `resolving` session —
/// an unauthenticated first paint of the login page is the desired state.
pub fn guest_outcome(session: &SessionState) -> GuardOutcome {
    if session.is_authenticated() {
        GuardOutcome::RedirectHome
    } else {
        GuardOutcome::Render
    }
}

/// Authenticated routes: render while the bootstrap resolver is still
/// running (first paint always precedes resolution), redirect to login once
/// resolution confirms there is no principal, and force `Initial` accounts
/// into the password-change flow. This is the single authorization boundary
/// for the shell; the navigation soft lock is presentation only.
pub fn admin_outcome(session: &SessionState) -> GuardOutcome {
    if session.resolving {
        return GuardOutcome::Render;
    }
    if !session.is_authenticated() {
        return GuardOutcome::RedirectLogin;
    }
    if session.status == AccountStatus::Initial {
        return GuardOutcome::RedirectChangePassword;
    }
    GuardOutcome::Render
}

/// The forced password-change page: only reachable by an authenticated
/// session still in `Initial` status. Accounts that already completed the
/// step are sent back to the landing route.
pub fn change_password_outcome(session: &SessionState) -> GuardOutcome {
    if session.resolving {
        return GuardOutcome::Render;
    }
    if !session.is_authenticated() {
        return GuardOutcome::RedirectLogin;
    }
    if session.status == AccountStatus::Initial {
        GuardOutcome::Render
    } else {
        GuardOutcome::RedirectHome
    }
}

/// Whether the side navigation is rendered dimmed and non-interactive.
pub fn nav_locked(session: &SessionState) -> bool {
    session.status == AccountStatus::Initial
}
