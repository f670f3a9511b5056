use leptos::prelude::*;

/// Centers the translucent form card over the dark backdrop shared by the
/// sign-in and sign-up screens.
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen items-center justify-center bg-black px-5">
            <div class="w-full max-w-md space-y-5 rounded-lg bg-black/75 p-8">
                {children()}
            </div>
        </div>
    }
}
