mod home;
mod not_found;
mod sign_in;
mod sign_up;

pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use sign_in::SignInPage;
pub(crate) use sign_up::SignUpPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths shared by navigation links and redirects.
pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const SIGN_IN: &str = "/sign-in";
    pub const SIGN_UP: &str = "/sign-up";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/sign-in") view=SignInPage />
            <Route path=path!("/sign-up") view=SignUpPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
