//! Application routing system.

use crate::frontend::pages::dashboard::ProjectDashboard;
use crate::frontend::pages::profiles::ProfilesPage;
use crate::frontend::pages::project::ProjectPage;

use dioxus::prelude::*;
use dioxus_router::Routable;

#[component]
pub fn Profiles() -> Element {
    rsx! { ProfilesPage {} }
}

#[component]
pub fn Dashboard(profile_id: String) -> Element {
    rsx! { ProjectDashboard { profile_id } }
}

#[component]
pub fn ProjectDetail(profile_id: String, project_id: String) -> Element {
    rsx! { ProjectPage { profile_id, project_id } }
}

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    /// Profile selection, the entry point.
    #[redirect("/", || Route::Profiles {})]
    #[route("/profiles")]
    Profiles {},
    /// Project dashboard for one profile.
    #[route("/app/:profile_id")]
    Dashboard { profile_id: String },
    /// Detail view for a single project.
    #[route("/app/:profile_id/project/:project_id")]
    ProjectDetail {
        profile_id: String,
        project_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn detail_route_composes_profile_and_project_ids() {
        let route = Route::ProjectDetail {
            profile_id: "p1".to_string(),
            project_id: "a".to_string(),
        };
        assert_eq!(route.to_string(), "/app/p1/project/a");
    }

    #[test]
    fn dashboard_route_composes_profile_id() {
        let route = Route::Dashboard {
            profile_id: "p1".to_string(),
        };
        assert_eq!(route.to_string(), "/app/p1");
    }
}
