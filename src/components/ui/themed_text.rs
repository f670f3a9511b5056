//! Themed text primitive applying the shared palette. Cosmetic only.

use crate::app_lib::theme::Theme;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum TextVariant {
    Default,
    Title,
    Subtitle,
    Link,
    Caption,
}

#[component]
pub fn ThemedText(
    #[prop(optional)] variant: Option<TextVariant>,
    children: Children,
) -> impl IntoView {
    let class = match variant.unwrap_or(TextVariant::Default) {
        TextVariant::Default => Theme::TEXT,
        TextVariant::Title => Theme::TITLE,
        TextVariant::Subtitle => Theme::SUBTITLE,
        TextVariant::Link => Theme::LINK,
        TextVariant::Caption => Theme::CAPTION,
    };

    view! { <span class=class>{children()}</span> }
}
