//! Landing screen. Branches purely on session presence: a marketing hero for
//! visitors, a minimal welcome view with sign-out for members.

use crate::app_lib::theme::Theme;
use crate::components::{Button, TextVariant, ThemedText};
use crate::features::auth::{client, state::use_auth};
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;

    view! {
        <Show when=move || is_authenticated.get() fallback=|| view! { <Hero /> }>
            <WelcomeBack />
        </Show>
    }
}

/// Marketing call-to-action shown to visitors without a session.
#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="relative flex min-h-screen items-center justify-center bg-black px-5">
            <div class="absolute inset-0 bg-gradient-to-b from-black/80 via-black/40 to-black"></div>
            <div class="relative flex w-full max-w-xl flex-col items-center gap-5 text-center">
                <ThemedText variant=TextVariant::Title>"FreeMov"</ThemedText>
                <ThemedText variant=TextVariant::Subtitle>
                    "Unlimited movies, TV shows, and more."
                </ThemedText>
                <ThemedText>"Watch anywhere. Cancel anytime."</ThemedText>
                <A
                    href=paths::SIGN_UP
                    {..}
                    class="w-full rounded bg-[#7F00FF] px-5 py-4 text-center text-lg font-bold text-white hover:bg-[#6A00D6]"
                >
                    "Get Started"
                </A>
                <A href=paths::SIGN_IN {..} class="mt-2 font-semibold text-white hover:underline">
                    "Sign In"
                </A>
            </div>
        </div>
    }
}

/// Minimal authenticated view with the session's email and sign-out.
#[component]
fn WelcomeBack() -> impl IntoView {
    let auth = use_auth();
    let user_email = Signal::derive(move || {
        auth.session
            .get()
            .map(|session| session.email)
            .unwrap_or_default()
    });

    let on_sign_out = Callback::new(move |_| {
        spawn_local(async move {
            let _ = client::terminate_session().await;
            auth.clear_session();
        });
    });

    view! {
        <div class="flex min-h-screen items-center justify-center bg-black px-5">
            <div class=format!("{} text-center", Theme::SURFACE_CARD)>
                <ThemedText variant=TextVariant::Subtitle>"Welcome back!"</ThemedText>
                <p class="mt-2 text-[#B3B3B3]">{move || user_email.get()}</p>
                <div class="mt-6">
                    <Button on_click=on_sign_out>"Sign Out"</Button>
                </div>
                <p class="mt-10">
                    <ThemedText variant=TextVariant::Caption>
                        "Video player and content rails coming soon."
                    </ThemedText>
                </p>
            </div>
        </div>
    }
}
