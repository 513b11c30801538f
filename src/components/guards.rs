//! Route guard components.
//!
//! Each guard reads the shared session signal, delegates the decision to
//! `state::guard`, and performs a replace-history redirect from an effect
//! so back-navigation cannot return to the guarded page. Centralizing the
//! checks here keeps individual pages free of session logic.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::guard::{self, GuardOutcome};
use crate::state::session::SessionState;

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..Default::default() }
}

/// Wraps unauthenticated-only pages (login). Authenticated sessions are
/// redirected to the landing route.
#[component]
pub fn GuestGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if guard::guest_outcome(&session.get()) == GuardOutcome::RedirectHome {
            navigate("/", replace());
        }
    });

    view! {
        <Show when=move || guard::guest_outcome(&session.get()) == GuardOutcome::Render>
            {children()}
        </Show>
    }
}

/// Wraps the authenticated application shell. Renders while the bootstrap
/// resolver is still running, then enforces login and the forced
/// password-change step for `Initial` accounts.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        match guard::admin_outcome(&session.get()) {
            GuardOutcome::RedirectLogin => navigate("/login", replace()),
            GuardOutcome::RedirectChangePassword => navigate("/change-password", replace()),
            GuardOutcome::Render | GuardOutcome::RedirectHome => {}
        }
    });

    view! {
        <Show when=move || guard::admin_outcome(&session.get()) == GuardOutcome::Render>
            {children()}
        </Show>
    }
}

/// Wraps the forced password-change page: authenticated `Initial` accounts
/// only. Completed accounts are sent back to the landing route.
#[component]
pub fn ForcedChangeGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        match guard::change_password_outcome(&session.get()) {
            GuardOutcome::RedirectLogin => navigate("/login", replace()),
            GuardOutcome::RedirectHome => navigate("/", replace()),
            GuardOutcome::Render | GuardOutcome::RedirectChangePassword => {}
        }
    });

    view! {
        <Show when=move || guard::change_password_outcome(&session.get()) == GuardOutcome::Render>
            {children()}
        </Show>
    }
}
