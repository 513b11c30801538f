//! Forced password-change page for accounts in `Initial` status.
//!
//! Two ways out, both confirmed by the server before the in-memory status
//! flips to `Active`: submit old+new+confirmation passwords, or explicitly
//! keep the current password via the activation endpoint. Mismatched
//! confirmation is caught client-side before any network call.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::toast::push_toast;
use crate::state::session::{AccountStatus, SessionState};
use crate::state::toast::ToastState;
use crate::util::password::confirmation_matches;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let navigate_keep = navigate.clone();

    let on_change = Callback::new(move |_: ()| {
        if pending.get() {
            return;
        }
        if !confirmation_matches(&new_password.get(), &confirmation.get()) {
            push_toast(toasts, "New password and confirmation do not match");
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let old = old_password.get();
            let new = new_password.get();
            pending.set(true);
            leptos::task::spawn_local(async move {
                let Some(token) = crate::util::token::read() else {
                    pending.set(false);
                    push_toast(toasts, "Session expired. Please sign in again.");
                    return;
                };
                match crate::net::api::change_password(&token, &old, &new).await {
                    Ok(()) => {
                        session.update(|s| s.set_status(AccountStatus::Active));
                        navigate("/", NavigateOptions { replace: true, ..Default::default() });
                    }
                    Err(err) => {
                        pending.set(false);
                        push_toast(toasts, err.user_message());
                    }
                }
            });
        }
    });

    let on_keep = Callback::new(move |_: ()| {
        if pending.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_keep.clone();
            pending.set(true);
            leptos::task::spawn_local(async move {
                let Some(token) = crate::util::token::read() else {
                    pending.set(false);
                    push_toast(toasts, "Session expired. Please sign in again.");
                    return;
                };
                match crate::net::api::activate(&token).await {
                    Ok(()) => {
                        session.update(|s| s.set_status(AccountStatus::Active));
                        navigate("/", NavigateOptions { replace: true, ..Default::default() });
                    }
                    Err(err) => {
                        pending.set(false);
                        push_toast(toasts, err.user_message());
                    }
                }
            });
        }
    });

    view! {
        <div class="change-password-page">
            <h1>"Update your password"</h1>
            <p>"Your account was created with a temporary password. Choose a new one, or keep the current password to continue."</p>
            <form class="change-password-page__form" on:submit=move |ev| ev.prevent_default()>
                <label class="change-password-page__label">
                    "Current password"
                    <input
                        type="password"
                        prop:value=move || old_password.get()
                        on:input=move |ev| old_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="change-password-page__label">
                    "New password"
                    <input
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="change-password-page__label">
                    "Confirm new password"
                    <input
                        type="password"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                </label>
                <div class="change-password-page__actions">
                    <button class="btn" type="button" on:click=move |_| on_keep.run(())>
                        "Keep current password"
                    </button>
                    <button
                        class="btn btn--primary"
                        type="button"
                        disabled=move || pending.get()
                        on:click=move |_| on_change.run(())
                    >
                        "Change password"
                    </button>
                </div>
            </form>
        </div>
    }
}
