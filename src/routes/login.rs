//! Login route driving the demo authentication flow: blur validation, the
//! simulated call, session persistence, and the delayed redirect to the
//! landing page. Any well-formed email with a six-character password is
//! accepted; this form is a UI demo, not an access control point.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::session;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::{LoginPhase, LoginRequest};
use crate::features::auth::validate::{check_credentials, validate_email, validate_password, FieldError};
use crate::routes::paths;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

/// Delay between the success alert and the redirect to the landing page.
const REDIRECT_DELAY_MS: u32 = 1_500;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember, set_remember) = signal(false);
    let (email_error, set_email_error) = signal::<Option<FieldError>>(None);
    let (password_error, set_password_error) = signal::<Option<FieldError>>(None);
    let (phase, set_phase) = signal(LoginPhase::Idle);
    let (notice, set_notice) = signal::<Option<(AlertKind, String)>>(None);

    // Pre-fill the email field from any restored session.
    if let Some(record) = auth.session.get_untracked() {
        set_email.set(record.email);
    }

    let login_action = Action::new_local({
        let auth = auth.clone();
        move |request: &LoginRequest| {
            let request = request.clone();
            let auth = auth.clone();
            async move { session::perform_login(auth.vault(), &request).await }
        }
    });

    Effect::new({
        let auth = auth.clone();
        let navigate = navigate.clone();
        move |_| {
            if let Some(record) = login_action.value().get() {
                set_phase.set(LoginPhase::Succeeded);
                set_notice.set(Some((
                    AlertKind::Success,
                    format!("Login successful! Welcome, {}", record.email),
                )));
                auth.set_session(record);

                let navigate = navigate.clone();
                spawn_local(async move {
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate(paths::HOME, Default::default());
                });
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_notice.set(None);
        set_phase.set(LoginPhase::Validating);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();

        let verdicts = check_credentials(&email_value, &password_value);
        set_email_error.set(verdicts.email);
        set_password_error.set(verdicts.password);

        if let Some(reason) = verdicts.first_error() {
            set_phase.set(LoginPhase::Failed);
            set_notice.set(Some((AlertKind::Error, form_message(reason))));
            return;
        }

        set_phase.set(LoginPhase::Submitting);
        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
            remember: remember.get_untracked(),
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <div class="mb-5">
                    <label class=Theme::LABEL for="email">
                        "Your email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class=Theme::INPUT
                        autocomplete="email"
                        placeholder="name@inbox.im"
                        prop:value=move || email.get()
                        on:input=move |event| set_email.set(event_target_value(&event))
                        on:blur=move |_| {
                            set_email_error.set(validate_email(&email.get_untracked()).err());
                        }
                    />
                    {move || {
                        email_error
                            .get()
                            .map(|reason| view! { <p class=Theme::FIELD_ERROR>{reason.to_string()}</p> })
                    }}
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="password">
                        "Your password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="current-password"
                        on:input=move |event| set_password.set(event_target_value(&event))
                        on:blur=move |_| {
                            set_password_error.set(validate_password(&password.get_untracked()).err());
                        }
                    />
                    {move || {
                        password_error
                            .get()
                            .map(|reason| view! { <p class=Theme::FIELD_ERROR>{reason.to_string()}</p> })
                    }}
                </div>
                <div class="flex items-center mb-5">
                    <input
                        id="remember"
                        type="checkbox"
                        class=Theme::CHECKBOX
                        prop:checked=move || remember.get()
                        on:change=move |event| set_remember.set(event_target_checked(&event))
                    />
                    <label class=Theme::CHECKBOX_LABEL for="remember">
                        "Remember me"
                    </label>
                </div>
                <Button button_type="submit" disabled=Signal::derive(move || phase.get().is_busy())>
                    {move || if phase.get().is_busy() { "Logging in..." } else { "Sign In" }}
                </Button>
                {move || {
                    phase
                        .get()
                        .is_busy()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    notice
                        .get()
                        .map(|(kind, message)| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=kind message=message />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}

/// Maps a field failure to the form-level alert message shown on submit.
fn form_message(reason: FieldError) -> String {
    match reason {
        FieldError::InvalidEmail => "Please enter a valid email address".to_string(),
        FieldError::PasswordTooShort => reason.to_string(),
    }
}
