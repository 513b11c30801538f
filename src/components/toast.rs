//! Toast notification stack.
//!
//! Toasts are non-blocking and auto-dismiss after a few seconds; each one
//! also carries a close button. Pushing goes through `push_toast` so the
//! timed dismissal is wired up in one place.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[cfg(feature = "hydrate")]
const DISMISS_AFTER: std::time::Duration = std::time::Duration::from_secs(5);

/// Queue a toast and schedule its dismissal.
pub fn push_toast(toasts: RwSignal<ToastState>, text: impl Into<String>) {
    let text = text.into();
    let id = toasts.try_update(|t| t.push(text)).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(DISMISS_AFTER).await;
            toasts.update(|t| t.dismiss(&id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Fixed-position stack rendering every queued toast.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|t| {
                        let id = t.id.clone();
                        view! {
                            <div class="toast">
                                <span class="toast__text">{t.text}</span>
                                <button
                                    class="toast__close"
                                    on:click=move |_| toasts.update(|s| s.dismiss(&id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
