//! Non-blocking confirmation dialog.
//!
//! Stands in for a blocking prompt: the question renders as a modal and the
//! caller only hears back through `on_confirm`. No confirmation, no call.

use dioxus::prelude::*;

#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "modal modal-confirm",
                onclick: |e| e.stop_propagation(),

                h2 { "{title}" }
                p { class: "confirm-message", "{message}" }

                div { class: "modal-actions",
                    button {
                        class: "btn-ghost",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
