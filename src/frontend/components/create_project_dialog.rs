//! Project creation dialog.

use dioxus::prelude::*;

use crate::frontend::services::projects::ProjectService;

#[derive(Props, Clone, PartialEq)]
pub struct CreateProjectDialogProps {
    pub show: Signal<bool>,
    pub profile_id: ReadOnlySignal<String>,
    /// Draft fields live in the parent so closing the dialog does not
    /// discard what the user typed.
    pub name: Signal<String>,
    pub description: Signal<String>,
}

/// The create control is enabled exactly when the draft name is non-empty.
/// Presence check only, no trimming.
fn submit_enabled(name: &str) -> bool {
    !name.is_empty()
}

#[component]
pub fn CreateProjectDialog(props: CreateProjectDialogProps) -> Element {
    let mut show = props.show;
    let profile_id = props.profile_id;
    let mut name = props.name;
    let mut description = props.description;

    let service = use_context::<ProjectService>();
    let mut pending = use_signal(|| false);

    if !show() {
        return rsx! {};
    }

    let can_submit = submit_enabled(&name()) && !pending();

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        let pid = profile_id();
        if pid.is_empty() || !submit_enabled(&name()) || pending() {
            return;
        }
        pending.set(true);
        let service = service.clone();
        spawn(async move {
            match service.create_project(&pid, &name(), &description()).await {
                Ok(()) => {
                    name.set(String::new());
                    description.set(String::new());
                    show.set(false);
                }
                Err(e) => log::error!("Failed to create project: {e}"),
            }
            pending.set(false);
        });
    };

    let handle_cancel = move |e: Event<MouseData>| {
        e.stop_propagation();
        show.set(false);
    };

    let handle_key_press = move |e: Event<KeyboardData>| {
        if e.key() == Key::Escape {
            show.set(false);
        }
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| show.set(false),

            div {
                class: "modal",
                onclick: |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { "New Project" }
                    p { "Define a new container for your tracking ecosystems." }
                }

                form { class: "modal-form", onsubmit: handle_submit,
                    label { r#for: "project-name", "Project Name" }
                    input {
                        id: "project-name",
                        r#type: "text",
                        class: "form-input",
                        value: "{name()}",
                        placeholder: "e.g. Personal Health, My Business",
                        autofocus: true,
                        oninput: move |e| name.set(e.value()),
                        onkeydown: handle_key_press,
                    }

                    label { r#for: "project-description", "Description (Optional)" }
                    textarea {
                        id: "project-description",
                        class: "form-input",
                        value: "{description()}",
                        placeholder: "What are you tracking in this project?",
                        oninput: move |e| description.set(e.value()),
                    }

                    div { class: "modal-actions",
                        button {
                            r#type: "button",
                            class: "btn-ghost",
                            onclick: handle_cancel,
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn-primary",
                            disabled: !can_submit,
                            "Create Project"
                        }
                    }
                }
            }
        }
    }
}
