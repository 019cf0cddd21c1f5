//! Project dashboard, the landing view of a profile.
//!
//! Lists the profile's projects, hosts the create dialog and the delete
//! confirmation, and navigates into a project on card click. All data goes
//! through [`ProjectService`]; this view owns nothing but draft state.

use dioxus::prelude::*;
use dioxus_router::prelude::navigator;

use crate::backend::store::Project;
use crate::frontend::app::Route;
use crate::frontend::components::confirm_dialog::ConfirmDialog;
use crate::frontend::components::create_project_dialog::CreateProjectDialog;
use crate::frontend::services::projects::ProjectService;

/// Shown before a project is deleted. Ledgers survive deletion, they only
/// lose their link.
const DELETE_PROJECT_WARNING: &str = "Are you sure you want to delete this project? \
     All associated ledgers will remain in the database but will be unlinked.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardState {
    Loading,
    Empty,
    Grid,
}

/// Loading always wins; an empty snapshot only counts once loading settles.
fn dashboard_state(is_loading: bool, project_count: usize) -> DashboardState {
    if is_loading {
        DashboardState::Loading
    } else if project_count == 0 {
        DashboardState::Empty
    } else {
        DashboardState::Grid
    }
}

#[component]
pub fn ProjectDashboard(profile_id: ReadOnlySignal<String>) -> Element {
    let service = use_context::<ProjectService>();

    let mut show_create = use_signal(|| false);
    let draft_name = use_signal(String::new);
    let draft_description = use_signal(String::new);
    let mut pending_delete = use_signal(|| None::<String>);

    // One fetch per profile change, none when the identifier is missing
    {
        let service = service.clone();
        use_effect(move || {
            let pid = profile_id();
            if !pid.is_empty() {
                service.fetch_projects(pid);
            }
        });
    }

    let projects = (service.projects)();
    let is_loading = (service.is_loading)();

    let body = match dashboard_state(is_loading, projects.len()) {
        DashboardState::Loading => rsx! {
            div { class: "loading-state",
                p { "Loading projects..." }
            }
        },
        DashboardState::Empty => rsx! {
            div { class: "empty-state",
                h2 { "No projects yet" }
                p { "Create your first project to organize your tracking ledgers." }
                button {
                    class: "btn-primary",
                    onclick: move |_| show_create.set(true),
                    "Get Started"
                }
            }
        },
        DashboardState::Grid => rsx! {
            div { class: "project-grid",
                for project in projects {
                    ProjectCard {
                        key: "{project.id}",
                        profile_id: profile_id(),
                        project,
                        on_delete: move |id: String| pending_delete.set(Some(id)),
                    }
                }
            }
        },
    };

    let delete_service = service.clone();

    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                div {
                    h1 { "Projects" }
                    p { class: "dashboard-subtitle",
                        "Select a project to start tracking or build your ecosystem."
                    }
                }
                button {
                    class: "btn-primary",
                    onclick: move |_| show_create.set(true),
                    "New Project"
                }
            }

            {body}

            CreateProjectDialog {
                show: show_create,
                profile_id,
                name: draft_name,
                description: draft_description,
            }

            if pending_delete().is_some() {
                ConfirmDialog {
                    title: "Delete project",
                    message: "{DELETE_PROJECT_WARNING}",
                    confirm_label: "Delete",
                    on_confirm: move |_| {
                        if let Some(project_id) = pending_delete() {
                            let pid = profile_id();
                            if !pid.is_empty() {
                                delete_service.delete_project(pid, project_id);
                            }
                        }
                        pending_delete.set(None);
                    },
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn ProjectCard(profile_id: String, project: Project, on_delete: EventHandler<String>) -> Element {
    let nav = navigator();

    let detail = Route::ProjectDetail {
        profile_id,
        project_id: project.id.clone(),
    };
    let delete_id = project.id.clone();

    rsx! {
        div {
            class: "project-card",
            onclick: move |_| {
                nav.push(detail.clone());
            },
            div { class: "project-card-top",
                span { class: "project-card-kicker", "Project" }
                button {
                    class: "card-delete",
                    title: "Delete Project",
                    onclick: move |e: Event<MouseData>| {
                        e.stop_propagation();
                        on_delete.call(delete_id.clone());
                    },
                    "Delete"
                }
            }
            h2 { class: "project-card-name", "{project.name}" }
            if !project.description.is_empty() {
                p { class: "project-card-description", "{project.description}" }
            }
            span { class: "project-card-open", "Open Project" }
        }
    }
}
