//! One-shot session bootstrap run when the application mounts.
//!
//! Reconciles the persisted bearer token with the identity endpoint and
//! writes the result into the shared `SessionState` signal. First paint
//! never waits on this: the UI renders with `resolving` set and re-renders
//! once resolution lands.
//!
//! STALENESS
//! =========
//! The session generation is captured before the identity fetch. If a
//! logout (or a fresh login) bumps the generation while the fetch is in
//! flight, the late resolution is discarded instead of clobbering the
//! newer session.

use leptos::prelude::RwSignal;

use crate::state::session::SessionState;

/// Spawn the bootstrap resolution as a local async task. No-op on the
/// server, where there is no persisted token to reconcile.
pub fn spawn_bootstrap(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(resolve(session));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

#[cfg(feature = "hydrate")]
async fn resolve(session: RwSignal<SessionState>) {
    use leptos::prelude::{GetUntracked, Update};

    use crate::net::types::ApiError;

    // No persisted token: logged out, no network call.
    let Some(token) = crate::util::token::read() else {
        session.update(SessionState::resolved_logged_out);
        return;
    };

    let started = session.get_untracked().generation;
    let result = crate::net::api::fetch_identity(&token).await;

    if session.get_untracked().generation != started {
        leptos::logging::log!("discarding stale bootstrap resolution");
        return;
    }

    match result {
        Ok(identity) => {
            session.update(|s| s.refresh_identity(identity.id, identity.role, identity.status));
        }
        Err(ApiError::Rejected { message }) => {
            // The server no longer recognizes the token's principal, so the
            // stored token is dead weight. Drop it to keep reloads clean.
            leptos::logging::warn!("persisted token rejected by identity endpoint: {message}");
            crate::util::token::clear();
            session.update(SessionState::resolved_logged_out);
        }
        Err(ApiError::Transport(e)) => {
            // Possibly transient (offline). Keep the token for the next
            // load and treat the session as logged out in memory only.
            leptos::logging::warn!("identity fetch failed: {e}");
            session.update(SessionState::resolved_logged_out);
        }
    }
}
