#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Deserialize;

/// Role tag asserted by the server for the authenticated principal.
///
/// Governs which navigation entries and guarded routes are reachable.
/// Unrecognized tags deserialize to `Unknown` so a new server-side role
/// degrades to an empty navigation rather than a parse failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Principal,
    Teacher,
    Cashier,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Display label for the header and navigation.
    pub fn label(self) -> &'static str {
        match self {
            Role::Principal => "Principal",
            Role::Teacher => "Teacher",
            Role::Cashier => "Cashier",
            Role::Unknown => "Staff",
        }
    }
}

/// Account lifecycle flag. `Initial` accounts must complete the forced
/// password-change step (or explicitly keep their password) before normal
/// navigation is permitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Initial,
    #[default]
    Active,
    #[serde(other)]
    Unknown,
}

/// Client-held session: cached identity facts about the principal owning
/// the persisted bearer token.
///
/// The token itself lives in localStorage (`util::token`) and is the single
/// source of truth for "is this session valid"; these fields are refreshed
/// from the identity endpoint on every application load and after login.
/// All mutation goes through the named actions below.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user_id: Option<String>,
    pub role: Option<Role>,
    pub status: AccountStatus,
    /// True until the bootstrap resolver has reconciled the persisted token
    /// with the identity endpoint. Guards must not redirect away from
    /// authenticated routes while this is set.
    pub resolving: bool,
    /// Bumped on every authentication boundary change (login, logout).
    /// An async resolution that started under an older generation must be
    /// discarded instead of applied.
    pub generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user_id: None,
            role: None,
            status: AccountStatus::Active,
            resolving: true,
            generation: 0,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Populate the session after a successful credential exchange and
    /// identity fetch. Crosses an authentication boundary.
    pub fn login(&mut self, user_id: String, role: Role, status: AccountStatus) {
        self.user_id = Some(user_id);
        self.role = Some(role);
        self.status = status;
        self.resolving = false;
        self.generation += 1;
    }

    /// Reset to the logged-out state. Clears every identity field in one
    /// action; callers pair this with `util::token::clear` in the same
    /// event handler so no guard can observe a partial clear.
    pub fn logout(&mut self) {
        self.user_id = None;
        self.role = None;
        self.status = AccountStatus::Active;
        self.resolving = false;
        self.generation += 1;
    }

    /// Apply a bootstrap resolution that confirmed the persisted token.
    /// Does not cross an authentication boundary (no generation bump).
    pub fn refresh_identity(&mut self, user_id: String, role: Role, status: AccountStatus) {
        self.user_id = Some(user_id);
        self.role = Some(role);
        self.status = status;
        self.resolving = false;
    }

    /// Mark bootstrap as finished with no authenticated principal.
    pub fn resolved_logged_out(&mut self) {
        self.user_id = None;
        self.role = None;
        self.status = AccountStatus::Active;
        self.resolving = false;
    }

    /// Account status transition, e.g. `Initial` -> `Active` after the
    /// forced password change or the keep-password activation.
    pub fn set_status(&mut self, status: AccountStatus) {
        self.status = status;
    }
}
