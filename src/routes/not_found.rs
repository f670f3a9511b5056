//! Minimalistic 404 page for unknown routes.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center bg-black px-4 text-center">
            <h1 class="select-none text-9xl font-black text-[#2A2A2A]">"404"</h1>
            <p class="mt-4 text-2xl font-bold text-white">"Page not found"</p>
            <p class="mt-2 max-w-sm text-[#B3B3B3]">
                "The title you are looking for is not in our catalog."
            </p>
            <A
                href=paths::HOME
                {..}
                class="mt-8 inline-flex items-center rounded bg-[#7F00FF] px-5 py-2.5 text-sm font-bold text-white hover:bg-[#6A00D6]"
            >
                "Go Home"
            </A>
        </div>
    }
}
