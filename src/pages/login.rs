//! Login page with the username/password credential exchange.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::toast::push_toast;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// Login page — exchanges credentials for a bearer token, persists it,
/// fetches the identity behind it, and navigates to the landing route
/// replacing history. Submission stays disabled until both fields are
/// non-empty; failures surface a toast and leave the form untouched.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let can_submit =
        move || !username.get().trim().is_empty() && !password.get().is_empty() && !pending.get();

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |_: ()| {
        if !can_submit() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let user = username.get().trim().to_owned();
            let pass = password.get();
            pending.set(true);
            leptos::task::spawn_local(async move {
                let token = match crate::net::api::login(&user, &pass).await {
                    Ok(token) => token,
                    Err(err) => {
                        pending.set(false);
                        push_toast(toasts, err.user_message());
                        return;
                    }
                };

                // Persist before the identity fetch so the follow-up call is
                // made with exactly the token we will reload with.
                crate::util::token::store(&token);

                match crate::net::api::fetch_identity(&token).await {
                    Ok(identity) => {
                        session.update(|s| s.login(identity.id, identity.role, identity.status));
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
        <div class="login-page">
            <h1>"Kids Hub"</h1>
            <p>"School administration"</p>
            <form class="login-page__form" on:submit=move |ev| ev.prevent_default()>
                <label class="login-page__label">
                    "Username"
                    <input
                        class="login-page__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <button
                    class="btn btn--primary"
                    type="button"
                    disabled=move || !can_submit()
                    on:click=move |_| submit.run(())
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
