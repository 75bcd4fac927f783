use dioxus::prelude::*;

const MODAL_CSS: Asset = asset!("/assets/styling/modal.css");

/// A full-screen overlay that centers its children in a card.
/// Clicking the backdrop triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: MODAL_CSS }

        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
