//! Employee registration page (principal only via navigation).
//!
//! The strength gate runs client-side before any network call: a candidate
//! password must be at least 8 characters with an uppercase letter, a
//! lowercase letter, a digit, and a symbol, and match its confirmation.
//! Registering never mutates the acting session.

use leptos::prelude::*;

use crate::components::toast::push_toast;
use crate::state::toast::ToastState;
use crate::util::password::{confirmation_matches, strength_errors};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let role = RwSignal::new("teacher".to_owned());
    let pending = RwSignal::new(false);

    let can_submit = move || !username.get().trim().is_empty() && !pending.get();

    let submit = Callback::new(move |_: ()| {
        if !can_submit() {
            return;
        }
        let missing = strength_errors(&password.get());
        if !missing.is_empty() {
            push_toast(toasts, format!("Password needs {}", missing.join(", ")));
            return;
        }
        if !confirmation_matches(&password.get(), &confirmation.get()) {
            push_toast(toasts, "Password and confirmation do not match");
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let user = username.get().trim().to_owned();
            let pass = password.get();
            let role = role.get();
            pending.set(true);
            leptos::task::spawn_local(async move {
                let Some(token) = crate::util::token::read() else {
                    pending.set(false);
                    push_toast(toasts, "Session expired. Please sign in again.");
                    return;
                };
                match crate::net::api::register(&token, &user, &pass, &role).await {
                    Ok(()) => {
                        username.set(String::new());
                        password.set(String::new());
                        confirmation.set(String::new());
                        push_toast(toasts, "Employee account created");
                    }
                    Err(err) => push_toast(toasts, err.user_message()),
                }
                pending.set(false);
            });
        }
    });

    view! {
        <div class="register-page">
            <h1>"Register employee"</h1>
            <form class="register-page__form" on:submit=move |ev| ev.prevent_default()>
                <label class="register-page__label">
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="register-page__label">
                    "Role"
                    <select
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="principal">"Principal"</option>
                        <option value="teacher">"Teacher"</option>
                        <option value="cashier">"Cashier"</option>
                    </select>
                </label>
                <label class="register-page__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="register-page__label">
                    "Confirm password"
                    <input
                        type="password"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary"
                    type="button"
                    disabled=move || !can_submit()
                    on:click=move |_| submit.run(())
                >
                    "Create account"
                </button>
            </form>
        </div>
    }
}
