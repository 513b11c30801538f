//! Root application component with routing, context providers, and the
//! session bootstrap.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::{ForcedChangeGuard, GuestGuard, RequireAuth};
use crate::components::shell::AdminShell;
use crate::components::toast::ToastStack;
use crate::pages::{
    change_password::ChangePasswordPage, dashboard::DashboardPage, login::LoginPage,
    register::RegisterPage,
};
use crate::state::{session::SessionState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, kicks off the one-time
/// bootstrap resolution, and sets up client-side routing. Guards wrap
/// each route; first paint never waits on the bootstrap.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    // Reconcile the persisted token with the identity endpoint.
    crate::net::bootstrap::spawn_bootstrap(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/kids-hub.css"/>
        <Title text="Kids Hub"/>

        <Router>
            <ToastStack/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <GuestGuard><LoginPage/></GuestGuard> }
                />
                <Route
                    path=StaticSegment("change-password")
                    view=|| view! { <ForcedChangeGuard><ChangePasswordPage/></ForcedChangeGuard> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! {
                        <RequireAuth>
                            <AdminShell>
                                <RegisterPage/>
                            </AdminShell>
                        </RequireAuth>
                    }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! {
                        <RequireAuth>
                            <AdminShell>
                                <DashboardPage/>
                            </AdminShell>
                        </RequireAuth>
                    }
                />
            </Routes>
        </Router>
    }
}
