//! Project management service.

use std::sync::Arc;

use anyhow::Result;
use dioxus::prelude::*;

use crate::backend::store::{Project, ProjectStore};

/// Reactive view over one profile's projects.
///
/// Views read `projects` and `is_loading` and call the three operations
/// below; the backing store is injected so tests and alternative storage
/// can substitute it.
#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
    pub projects: Signal<Vec<Project>>,
    pub is_loading: Signal<bool>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self {
            store,
            projects: Signal::new(Vec::new()),
            is_loading: Signal::new(false),
        }
    }

    /// Refresh the snapshot for a profile. Safe to call repeatedly; each
    /// call replaces the snapshot wholesale in whatever order the store
    /// returns. Failures are logged, the previous snapshot stays visible.
    pub fn fetch_projects(&self, profile_id: String) {
        let store = self.store.clone();
        let mut projects = self.projects;
        let mut is_loading = self.is_loading;

        is_loading.set(true);
        spawn(async move {
            match store.list_projects(&profile_id).await {
                Ok(list) => projects.set(list),
                Err(e) => log::error!("Failed to fetch projects for profile {profile_id}: {e}"),
            }
            is_loading.set(false);
        });
    }

    /// Create a project and append it to the snapshot. Awaited by the
    /// caller so the create dialog can close after the store accepts it.
    pub async fn create_project(
        &self,
        profile_id: &str,
        name: &str,
        description: &str,
    ) -> Result<()> {
        let project = self
            .store
            .create_project(profile_id, name, description)
            .await?;
        let mut projects = self.projects;
        projects.write().push(project);
        Ok(())
    }

    /// Delete a project. Fire-and-forget: the snapshot is updated once the
    /// store confirms, the caller does not wait for it.
    pub fn delete_project(&self, profile_id: String, project_id: String) {
        let store = self.store.clone();
        let mut projects = self.projects;

        spawn(async move {
            match store.delete_project(&profile_id, &project_id).await {
                Ok(()) => projects.write().retain(|p| p.id != project_id),
                Err(e) => log::error!("Failed to delete project {project_id}: {e}"),
            }
        });
    }
}
