//! Alert banners for success and error messages. Messages must be safe to
//! render and should never include secrets or codes.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded border border-[#CF6679]/40 bg-[#CF6679]/10 px-4 py-3 text-sm text-[#CF6679]"
        }
        AlertKind::Success => {
            "rounded border border-[#00E676]/40 bg-[#00E676]/10 px-4 py-3 text-sm text-[#00E676]"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
