//! Login page: email/password form, pre-filled after signup.

use dioxus::prelude::*;
use store::{LoginForm, SessionState};
use ui::{log_activity, make_service, make_session, use_activity_log, use_session, ErrorBanner, LogLevel};

use crate::Route;

#[component]
pub fn Login(email: String) -> Element {
    let nav = use_navigator();
    let mut session = use_session();
    let mut activity = use_activity_log();
    let mut email = use_signal(move || email);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if session.read().is_signed_in() {
        nav.replace(Route::Todo {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let form = LoginForm::new(email(), password());
        error.set(None);
        loading.set(true);
        spawn(async move {
            let service = make_service(&SessionState::default());
            match store::auth::login(&service, &make_session(), &form).await {
                Ok(state) => {
                    log_activity(&mut activity, LogLevel::Success, "Signed in");
                    session.set(state);
                    nav.push(Route::Todo {});
                }
                Err(err) => {
                    let message = err.user_message();
                    log_activity(&mut activity, LogLevel::Warning, &format!("Login failed: {message}"));
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
                onsubmit: handle_login,
                h1 { "Todo board" }
                p { class: "auth-subtitle", "Sign in to see your tasks" }

                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    autocomplete: "username",
                    disabled: loading(),
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    autocomplete: "current-password",
                    disabled: loading(),
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                ErrorBanner { message: error() }

                button {
                    class: "btn primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }

                p {
                    class: "auth-switch",
                    "No account yet? "
                    Link { to: Route::Signup {}, "Create one" }
                }
            }
        }
    }
}
