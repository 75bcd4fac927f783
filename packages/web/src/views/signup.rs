//! Registration page. A successful signup goes back to login with the email filled in.

use dioxus::prelude::*;
use store::{SessionState, SignupForm};
use ui::{log_activity, make_service, use_activity_log, ErrorBanner, LogLevel};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();
    let mut activity = use_activity_log();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let form = SignupForm::new(name(), email(), password());
        if let Err(err) = form.validate() {
            error.set(Some(err.user_message()));
            return;
        }
        error.set(None);
        loading.set(true);
        spawn(async move {
            let service = make_service(&SessionState::default());
            match store::auth::signup(&service, &form).await {
                Ok(signed_up) => {
                    log_activity(
                        &mut activity,
                        LogLevel::Success,
                        &format!("Created account for {}", signed_up.email),
                    );
                    nav.push(Route::Login {
                        email: signed_up.email,
                    });
                }
                Err(err) => {
                    let message = err.user_message();
                    log_activity(&mut activity, LogLevel::Error, &format!("Signup failed: {message}"));
                    error.set(Some(message));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: handle_signup,
                h1 { "Create account" }

                label { r#for: "signup-name", "Name" }
                input {
                    id: "signup-name",
                    r#type: "text",
                    disabled: loading(),
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }

                label { r#for: "signup-email", "Email" }
                input {
                    id: "signup-email",
                    r#type: "email",
                    autocomplete: "username",
                    disabled: loading(),
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                label { r#for: "signup-password", "Password" }
                input {
                    id: "signup-password",
                    r#type: "password",
                    autocomplete: "new-password",
                    disabled: loading(),
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                ErrorBanner { message: error() }

                button {
                    class: "btn primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }

                p {
                    class: "auth-switch",
                    "Already registered? "
                    Link { to: Route::Login { email: String::new() }, "Sign in" }
                }
            }
        }
    }
}
