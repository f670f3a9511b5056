//! Composition root: the session provider wraps the router so every screen
//! receives the auth context by injection instead of ambient lookup.

use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Router>
                <main class="min-h-screen bg-black">
                    <AppRoutes />
                </main>
            </Router>
        </AuthProvider>
    }
}
