//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::SessionState;

use crate::backend::make_session;

/// Get the current session.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that reads the persisted session once on mount.
/// Wrap your app with this component; views read it with [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| make_session().state());

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        session.set(store::auth::logout(&make_session()));
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
