use dioxus::prelude::*;

use ui::{use_session, ActivityLog, ActivityLogPanel, SessionProvider};
use views::{Login, Signup, Todo};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login?:email")]
    Login { email: String },
    #[route("/signup")]
    Signup {},
    #[route("/todo")]
    Todo {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
        ActivityLogPanel {}
    }
}

/// Send `/` to the task board when signed in, to login otherwise.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    let session = use_session();
    if session.read().is_signed_in() {
        nav.replace(Route::Todo {});
    } else {
        nav.replace(Route::Login {
            email: String::new(),
        });
    }
    rsx! {}
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::warn!("No route for /{}", segments.join("/"));
    let nav = use_navigator();
    nav.replace(Route::Root {});
    rsx! {}
}
