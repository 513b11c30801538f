//! Authenticated landing page.
//!
//! The administration screens (students, classes, enrollments, tuition)
//! live behind the same shell; this page is the default route they share.

use leptos::prelude::*;

use crate::state::session::{Role, SessionState};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        session
            .get()
            .role
            .map(Role::label)
            .map_or_else(|| "Welcome".to_owned(), |label| format!("Welcome, {label}"))
    };

    view! {
        <div class="dashboard-page">
            <h1>{greeting}</h1>
            <p>"Use the navigation to manage the school."</p>
        </div>
    }
}
