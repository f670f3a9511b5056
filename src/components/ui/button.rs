use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum ButtonVariant {
    /// Brand primary action.
    Primary,
    /// High-contrast light button, used for the external-provider action.
    Inverted,
}

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] variant: Option<ButtonVariant>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let class = match variant.unwrap_or(ButtonVariant::Primary) {
        ButtonVariant::Primary => {
            "w-full rounded bg-[#7F00FF] px-5 py-3.5 text-center text-base font-bold text-white hover:bg-[#6A00D6] focus:outline-none focus:ring-2 focus:ring-[#7F00FF]/60"
        }
        ButtonVariant::Inverted => {
            "w-full rounded bg-white px-5 py-3.5 text-center text-base font-bold text-black hover:bg-gray-200 focus:outline-none focus:ring-2 focus:ring-white/60"
        }
    };

    view! {
        <button
            type=button_type
            class=class
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            disabled=move || disabled.get()
            on:click=move |event| {
                if let Some(on_click) = on_click {
                    on_click.run(event);
                }
            }
        >
            {children()}
        </button>
    }
}
