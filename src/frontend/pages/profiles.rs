//! Profile selection page, the entry point of the application.

use dioxus::prelude::*;
use dioxus_router::prelude::navigator;

use crate::frontend::app::Route;
use crate::frontend::services::profiles::ProfileService;

#[component]
pub fn ProfilesPage() -> Element {
    let service = use_context::<ProfileService>();
    let nav = navigator();

    let mut new_name = use_signal(String::new);
    let mut pending = use_signal(|| false);

    {
        let service = service.clone();
        use_effect(move || service.fetch_profiles());
    }

    let profiles = (service.profiles)();
    let is_loading = (service.is_loading)();

    let create_service = service.clone();
    let handle_create = move |e: Event<FormData>| {
        e.prevent_default();
        if new_name().is_empty() || pending() {
            return;
        }
        pending.set(true);
        let service = create_service.clone();
        spawn(async move {
            match service.create_profile(&new_name()).await {
                Ok(()) => new_name.set(String::new()),
                Err(e) => log::error!("Failed to create profile: {e}"),
            }
            pending.set(false);
        });
    };

    rsx! {
        div { class: "profiles-page",
            header { class: "profiles-header",
                h1 { "Profiles" }
                p { "Pick a profile to open its projects." }
            }

            if is_loading {
                div { class: "loading-state",
                    p { "Loading profiles..." }
                }
            } else if profiles.is_empty() {
                div { class: "empty-state",
                    p { "No profiles yet. Create one below." }
                }
            } else {
                ul { class: "profile-list",
                    for profile in profiles {
                        li { key: "{profile.id}",
                            button {
                                class: "profile-entry",
                                onclick: {
                                    let profile_id = profile.id.clone();
                                    move |_| {
                                        nav.push(Route::Dashboard {
                                            profile_id: profile_id.clone(),
                                        });
                                    }
                                },
                                "{profile.name}"
                            }
                        }
                    }
                }
            }

            form { class: "profile-create", onsubmit: handle_create,
                input {
                    r#type: "text",
                    class: "form-input",
                    value: "{new_name()}",
                    placeholder: "New profile name",
                    oninput: move |e| new_name.set(e.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn-primary",
                    disabled: new_name().is_empty() || pending(),
                    "Create Profile"
                }
            }
        }
    }
}
