use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-[#7F00FF]/30 border-t-[#7F00FF]"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
