//! Sign-up screen. Registration and code verification are distinct phases of
//! one flow: registering asks the service to email a code, and verifying the
//! code is a second attempt that yields the session to activate. The phase
//! enum decides which sub-view renders; the two forms can never show at once.

use crate::app_lib::errors::surface_message;
use crate::app_lib::theme::Theme;
use crate::app_lib::AppError;
use crate::components::{
    Alert, AlertKind, AuthLayout, Button, ButtonVariant, Spinner, TextVariant, ThemedText,
};
use crate::features::auth::{client, state::use_auth};
use crate::identity::flow::{resolve_attempt, Resolution, SignUpPhase};
use crate::identity::types::{SignUpCreateRequest, UserSession, VerificationAttemptRequest};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[derive(Clone)]
struct SignUpInput {
    email: String,
    password: String,
}

/// Outcome of one verification submission, consumed by the navigation effect.
#[derive(Clone)]
enum VerifyOutcome {
    Activated(Option<UserSession>),
    Incomplete,
}

#[derive(Clone)]
enum OAuthOutcome {
    Activated(Option<UserSession>),
    NoSession,
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (code, set_code) = signal(String::new());
    let (phase, set_phase) = signal(SignUpPhase::Registering);
    let (error, set_error) = signal::<Option<String>>(None);

    let register_action = Action::new_local(move |input: &SignUpInput| {
        let input = input.clone();
        async move {
            let request = SignUpCreateRequest {
                email: input.email,
                password: input.password,
            };
            client::create_sign_up(&request).await?;
            client::prepare_email_verification().await?;
            Ok::<_, AppError>(())
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => set_phase.update(|phase| *phase = phase.after_registration()),
                Err(err) => set_error.set(Some(surface_message(&err, "Sign up failed"))),
            }
        }
    });

    let verify_action = Action::new_local(move |code: &String| {
        let code = code.clone();
        async move {
            let request = VerificationAttemptRequest { code };
            let attempt = client::attempt_email_verification(&request).await?;

            match resolve_attempt(&attempt) {
                Resolution::Activate { session_id } => {
                    client::activate_session(&session_id).await?;
                    let session = client::fetch_session().await?;
                    Ok::<_, AppError>(VerifyOutcome::Activated(session))
                }
                Resolution::Incomplete { status } => {
                    leptos::logging::error!("verification attempt incomplete: {status:?}");
                    Ok(VerifyOutcome::Incomplete)
                }
            }
        }
    });

    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(VerifyOutcome::Activated(session)) => {
                    if let Some(session) = session {
                        auth.set_session(session);
                    }
                    set_phase.update(|phase| *phase = phase.after_activation());
                    navigate(
                        paths::HOME,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Ok(VerifyOutcome::Incomplete) => {}
                Err(err) => set_error.set(Some(surface_message(&err, "Verification failed"))),
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
                // on the sign-up screen.
                Err(err) => leptos::logging::error!("oauth redirect failed: {err}"),
            }
        }
    });

    let on_register = move |event: SubmitEvent| {
        event.prevent_default();
        if register_action.pending().get_untracked() {
            return;
        }
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some("Email and password are required.".to_string()));
            return;
        }

        register_action.dispatch(SignUpInput {
            email: email_value,
            password: password_value,
        });
    };

    let on_verify = move |event: SubmitEvent| {
        event.prevent_default();
        if verify_action.pending().get_untracked() {
            return;
        }
        set_error.set(None);

        let code_value = code.get_untracked().trim().to_string();
        if code_value.is_empty() {
            set_error.set(Some("Verification code is required.".to_string()));
            return;
        }

        verify_action.dispatch(code_value);
    };

    view! {
        <AuthLayout>
            {move || match phase.get() {
                SignUpPhase::Registering => view! {
                    <div class="space-y-5">
                        <div class="text-center">
                            <ThemedText variant=TextVariant::Title>"FreeMov"</ThemedText>
                        </div>
                        <ThemedText variant=TextVariant::Subtitle>"Sign Up"</ThemedText>

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

                        <form class="space-y-4" on:submit=on_register>
                            <input
                                id="email"
                                type="email"
                                class=Theme::INPUT
                                autocomplete="email"
                                placeholder="Email address"
                                on:input=move |event| set_email.set(event_target_value(&event))
                            />
                            <input
                                id="password"
                                type="password"
                                class=Theme::INPUT
                                autocomplete="new-password"
                                placeholder="Add a password"
                                on:input=move |event| set_password.set(event_target_value(&event))
                            />
                            <Button button_type="submit" disabled=register_action.pending()>
                                "Start Membership"
                            </Button>
                        </form>

                        {move || {
                            register_action
                                .pending()
                                .get()
                                .then_some(view! { <div class="text-center"><Spinner /></div> })
                        }}
                        {move || {
                            error
                                .get()
                                .map(|message| {
                                    view! { <Alert kind=AlertKind::Error message=message /> }
                                })
                        }}

                        <div class="flex gap-1">
                            <span class="text-[#737373]">"Already have an account? "</span>
                            <A href=paths::SIGN_IN>
                                <ThemedText variant=TextVariant::Link>"Sign in."</ThemedText>
                            </A>
                        </div>
                    </div>
                }
                .into_any(),
                SignUpPhase::AwaitingCode => view! {
                    <div class="space-y-5">
                        <ThemedText variant=TextVariant::Subtitle>"Verify Email"</ThemedText>
                        <Alert
                            kind=AlertKind::Success
                            message=format!("We sent a code to {}.", email.get_untracked())
                        />

                        <form class="space-y-4" on:submit=on_verify>
                            <input
                                id="code"
                                type="text"
                                class=Theme::INPUT
                                inputmode="numeric"
                                autocomplete="one-time-code"
                                placeholder="Enter verification code"
                                on:input=move |event| set_code.set(event_target_value(&event))
                            />
                            <Button button_type="submit" disabled=verify_action.pending()>
                                "Verify"
                            </Button>
                        </form>

                        {move || {
                            verify_action
                                .pending()
                                .get()
                                .then_some(view! { <div class="text-center"><Spinner /></div> })
                        }}
                        {move || {
                            error
                                .get()
                                .map(|message| {
                                    view! { <Alert kind=AlertKind::Error message=message /> }
                                })
                        }}
                    </div>
                }
                .into_any(),
                SignUpPhase::Done => view! {
                    <div class="text-center"><Spinner /></div>
                }
                .into_any(),
            }}
        </AuthLayout>
    }
}
