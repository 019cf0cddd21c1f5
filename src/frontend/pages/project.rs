//! Project detail page, the dashboard's navigation target.

use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::navigator;

use crate::backend::store::ProjectStore;
use crate::frontend::app::Route;

#[component]
pub fn ProjectPage(
    profile_id: ReadOnlySignal<String>,
    project_id: ReadOnlySignal<String>,
) -> Element {
    let store = use_context::<Arc<dyn ProjectStore>>();
    let nav = navigator();

    let mut new_ledger_name = use_signal(String::new);

    let resource_store = store.clone();
    let mut detail = use_resource(move || {
        let store = resource_store.clone();
        let pid = profile_id();
        let prid = project_id();
        async move {
            let project = match store.get_project(&pid, &prid).await {
                Ok(project) => project,
                Err(e) => {
                    log::error!("Failed to load project {prid}: {e}");
                    None
                }
            };
            match project {
                Some(project) => {
                    let ledgers = match store.list_ledgers(&pid, &prid).await {
                        Ok(ledgers) => ledgers,
                        Err(e) => {
                            log::error!("Failed to load ledgers for project {prid}: {e}");
                            Vec::new()
                        }
                    };
                    Some((project, ledgers))
                }
                None => None,
            }
        }
    });

    let add_store = store.clone();
    let handle_add_ledger = move |e: Event<FormData>| {
        e.prevent_default();
        if new_ledger_name().is_empty() {
            return;
        }
        let store = add_store.clone();
        spawn(async move {
            let pid = profile_id();
            let prid = project_id();
            match store
                .create_ledger(&pid, &new_ledger_name(), Some(prid.as_str()))
                .await
            {
                Ok(_) => {
                    new_ledger_name.set(String::new());
                    detail.restart();
                }
                Err(e) => log::error!("Failed to create ledger: {e}"),
            }
        });
    };

    let body = {
        let state = detail.read();
        match &*state {
            None => rsx! {
                div { class: "loading-state",
                    p { "Loading project..." }
                }
            },
            Some(None) => rsx! {
                div { class: "empty-state",
                    p { "This project does not exist." }
                }
            },
            Some(Some((project, ledgers))) => rsx! {
                section { class: "project-detail",
                    h1 { "{project.name}" }
                    if !project.description.is_empty() {
                        p { class: "project-detail-description", "{project.description}" }
                    }

                    h2 { "Ledgers" }
                    if ledgers.is_empty() {
                        p { class: "empty-state", "No ledgers linked to this project yet." }
                    } else {
                        ul { class: "ledger-list",
                            for ledger in ledgers.iter() {
                                li { key: "{ledger.id}", "{ledger.name}" }
                            }
                        }
                    }

                    form { class: "ledger-create", onsubmit: handle_add_ledger,
                        input {
                            r#type: "text",
                            class: "form-input",
                            value: "{new_ledger_name()}",
                            placeholder: "New ledger name",
                            oninput: move |e| new_ledger_name.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "btn-primary",
                            disabled: new_ledger_name().is_empty(),
                            "Add Ledger"
                        }
                    }
                }
            },
        }
    };

    rsx! {
        div { class: "project-page",
            button {
                class: "btn-ghost back-link",
                onclick: move |_| {
                    nav.push(Route::Dashboard {
                        profile_id: profile_id(),
                    });
                },
                "Back to projects"
            }
            {body}
        }
    }
}
