//! Authenticated application shell: header, side navigation, content area.
//!
//! The shell always renders; access control lives in the `RequireAuth`
//! guard. The side navigation is filtered by role and rendered dimmed and
//! non-interactive while the account is still in `Initial` status — a UX
//! hint on top of the guard, not the enforcement itself.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::guard;
use crate::state::session::{Role, SessionState};

struct NavEntry {
    label: &'static str,
    href: &'static str,
}

/// Navigation entries visible to the given role.
fn nav_entries(role: Option<Role>) -> Vec<NavEntry> {
    let mut entries = vec![NavEntry { label: "Dashboard", href: "/" }];
    if role == Some(Role::Principal) {
        entries.push(NavEntry { label: "Register Employee", href: "/register" });
    }
    entries
}

/// Shell layout wrapping every authenticated page.
#[component]
pub fn AdminShell(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let role_label = move || {
        session
            .get()
            .role
            .map(Role::label)
            .unwrap_or_default()
    };

    // Token clear and store reset happen in one handler so no guard can
    // observe a half-cleared session. Idempotent when already logged out.
    let on_logout = move |_| {
        crate::util::token::clear();
        session.update(SessionState::logout);
        navigate("/login", NavigateOptions { replace: true, ..Default::default() });
    };

    let nav_class = move || {
        if guard::nav_locked(&session.get()) {
            "side-nav side-nav--locked"
        } else {
            "side-nav"
        }
    };

    view! {
        <div class="shell">
            <header class="shell__header">
                <span class="shell__brand">"Kids Hub"</span>
                <span class="shell__spacer"></span>
                <span class="shell__role">{role_label}</span>
                <button class="btn shell__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <div class="shell__body">
                <nav class=nav_class>
                    {move || {
                        let locked = guard::nav_locked(&session.get());
                        nav_entries(session.get().role)
                            .into_iter()
                            .map(|entry| {
                                if locked {
                                    view! {
                                        <span class="side-nav__link side-nav__link--disabled">
                                            {entry.label}
                                        </span>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <a class="side-nav__link" href=entry.href>
                                            {entry.label}
                                        </a>
                                    }
                                        .into_any()
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}
