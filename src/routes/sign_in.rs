//! Sign-in screen. Credentials go to the identity service as one attempt; a
//! complete attempt yields a session id that is activated before the user
//! lands back on the home route. The external-provider redirect path
//! activates and navigates the same way but swallows its own failures.

use crate::app_lib::errors::surface_message;
use crate::app_lib::theme::Theme;
use crate::app_lib::AppError;
use crate::components::{
    Alert, AlertKind, AuthLayout, Button, ButtonVariant, Spinner, TextVariant, ThemedText,
};
use crate::features::auth::{client, state::use_auth};
use crate::identity::flow::{resolve_attempt, Resolution};
use crate::identity::types::{SignInAttemptRequest, UserSession};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[derive(Clone)]
struct SignInInput {
    identifier: String,
    password: String,
}

/// Outcome of one submission, consumed by the navigation effect.
#[derive(Clone)]
enum SignInOutcome {
    Activated(Option<UserSession>),
    Incomplete,
}

#[derive(Clone)]
enum OAuthOutcome {
    Activated(Option<UserSession>),
    NoSession,
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let (identifier, set_identifier) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let sign_in_action = Action::new_local(move |input: &SignInInput| {
        let input = input.clone();
        async move {
            let request = SignInAttemptRequest {
                identifier: input.identifier,
                password: input.password,
            };
            let attempt = client::create_sign_in_attempt(&request).await?;

            match resolve_attempt(&attempt) {
                Resolution::Activate { session_id } => {
                    client::activate_session(&session_id).await?;
                    let session = client::fetch_session().await?;
                    Ok::<_, AppError>(SignInOutcome::Activated(session))
                }
                Resolution::Incomplete { status } => {
                    leptos::logging::error!("sign-in attempt incomplete: {status:?}");
                    Ok(SignInOutcome::Incomplete)
                }
            }
        }
    });

    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(result) = sign_in_action.value().get() {
            match result {
                Ok(SignInOutcome::Activated(session)) => {
                    if let Some(session) = session {
                        auth.set_session(session);
                    }
                    navigate(
                        paths::HOME,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Ok(SignInOutcome::Incomplete) => {
                    set_error.set(Some("Sign in failed".to_string()));
                }
                Err(err) => set_error.set(Some(surface_message(&err, "Sign in failed"))),
            }
        }
    });

    let oauth_action = Action::new_local(move |_: &()| async move {
        let response = client::start_oauth_redirect().await?;

        match response.created_session_id {
            Some(session_id) => {
                client::activate_session(&session_id).await?;
                let session = client::fetch_session().await?;
                Ok::<_, AppError>(OAuthOutcome::Activated(session))
            }
            None => Ok(OAuthOutcome::NoSession),
        }
    });

    let oauth_navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(result) = oauth_action.value().get() {
            match result {
                Ok(OAuthOutcome::Activated(session)) => {
                    if let Some(session) = session {
                        auth.set_session(session);
                    }
                    oauth_navigate(
                        paths::HOME,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Ok(OAuthOutcome::NoSession) => {}
                // No user-facing signal on redirect failures; the user stays
                // on the sign-in screen.
                Err(err) => leptos::logging::error!("oauth redirect failed: {err}"),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if sign_in_action.pending().get_untracked() {
            return;
        }
        set_error.set(None);

        let identifier_value = identifier.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if identifier_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some("Email and password are required.".to_string()));
            return;
        }

        sign_in_action.dispatch(SignInInput {
            identifier: identifier_value,
            password: password_value,
        });
    };

    view! {
        <AuthLayout>
            <div class="text-center">
                <ThemedText variant=TextVariant::Title>"FreeMov"</ThemedText>
            </div>
            <ThemedText variant=TextVariant::Subtitle>"Sign In"</ThemedText>

            <Button
                variant=ButtonVariant::Inverted
                disabled=oauth_action.pending()
                on_click=Callback::new(move |_| {
                    oauth_action.dispatch(());
                })
            >
                "Continue with Google"
            </Button>

            <div class="flex items-center gap-2.5">
                <div class="h-px flex-1 bg-[#333333]"></div>
                <span class="text-sm text-[#666666]">"OR"</span>
                <div class="h-px flex-1 bg-[#333333]"></div>
            </div>

            <form class="space-y-4" on:submit=on_submit>
                <input
                    id="identifier"
                    type="email"
                    class=Theme::INPUT
                    autocomplete="email"
                    placeholder="Email or phone number"
                    on:input=move |event| set_identifier.set(event_target_value(&event))
                />
                <input
                    id="password"
                    type="password"
                    class=Theme::INPUT
                    autocomplete="current-password"
                    placeholder="Password"
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
                <Button button_type="submit" disabled=sign_in_action.pending()>
                    "Sign In"
                </Button>
            </form>

            {move || {
                sign_in_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="text-center"><Spinner /></div> })
            }}
            {move || {
                error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}

            <div class="flex gap-1">
                <span class="text-[#737373]">"New to FreeMov? "</span>
                <A href=paths::SIGN_UP>
                    <ThemedText variant=TextVariant::Link>"Sign up now."</ThemedText>
                </A>
            </div>
        </AuthLayout>
    }
}
