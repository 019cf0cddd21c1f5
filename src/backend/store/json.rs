//! JSON-file backed store.
//!
//! Each profile's projects and ledgers live in one document under
//! `profiles/<profile_id>.json`; the profile index itself is `profiles.json`.
//! Documents are rewritten whole on every mutation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tokio::fs as async_fs;
use uuid::Uuid;

use super::{Ledger, Profile, Project, ProjectStore};

/// Everything one profile owns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProfileDoc {
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    ledgers: Vec<Ledger>,
}

/// Index of all known profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProfileIndex {
    #[serde(default)]
    profiles: Vec<Profile>,
}

pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn profile_doc_path(&self, profile_id: &str) -> PathBuf {
        self.root.join("profiles").join(format!("{profile_id}.json"))
    }

    fn index_path(&self) -> PathBuf {
        self.root.join("profiles.json")
    }
}

/// Load a JSON document, falling back to the default for a missing file.
async fn load<T: Default + for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let json = async_fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&json)?)
}

/// Save a JSON document, creating parent directories on demand.
async fn save<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_string_pretty(value)?;
    async_fs::write(path, json).await?;
    Ok(())
}

impl ProjectStore for JsonStore {
    fn list_projects(&self, profile_id: &str) -> BoxFuture<'static, Result<Vec<Project>>> {
        let path = self.profile_doc_path(profile_id);
        Box::pin(async move {
            let doc: ProfileDoc = load(&path).await?;
            Ok(doc.projects)
        })
    }

    fn create_project(
        &self,
        profile_id: &str,
        name: &str,
        description: &str,
    ) -> BoxFuture<'static, Result<Project>> {
        let path = self.profile_doc_path(profile_id);
        let profile_id = profile_id.to_string();
        let name = name.to_string();
        let description = description.to_string();
        Box::pin(async move {
            if name.is_empty() {
                return Err(anyhow::anyhow!("Project name cannot be empty"));
            }

            let mut doc: ProfileDoc = load(&path).await?;
            let project = Project {
                id: Uuid::new_v4().to_string(),
                name,
                description,
                created_at: Utc::now(),
            };
            doc.projects.push(project.clone());
            save(&path, &doc).await?;

            log::info!(
                "Created project {} ('{}') for profile {profile_id}",
                project.id,
                project.name
            );
            Ok(project)
        })
    }

    fn delete_project(
        &self,
        profile_id: &str,
        project_id: &str,
    ) -> BoxFuture<'static, Result<()>> {
        let path = self.profile_doc_path(profile_id);
        let profile_id = profile_id.to_string();
        let project_id = project_id.to_string();
        Box::pin(async move {
            let mut doc: ProfileDoc = load(&path).await?;
            let before = doc.projects.len();
            doc.projects.retain(|p| p.id != project_id);
            if doc.projects.len() == before {
                // Unknown id, nothing to do
                return Ok(());
            }

            let mut unlinked = 0;
            for ledger in doc
                .ledgers
                .iter_mut()
                .filter(|l| l.project_id.as_deref() == Some(project_id.as_str()))
            {
                ledger.project_id = None;
                unlinked += 1;
            }
            save(&path, &doc).await?;

            log::info!(
                "Deleted project {project_id} for profile {profile_id}, unlinked {unlinked} ledgers"
            );
            Ok(())
        })
    }

    fn get_project(
        &self,
        profile_id: &str,
        project_id: &str,
    ) -> BoxFuture<'static, Result<Option<Project>>> {
        let path = self.profile_doc_path(profile_id);
        let project_id = project_id.to_string();
        Box::pin(async move {
            let doc: ProfileDoc = load(&path).await?;
            Ok(doc.projects.into_iter().find(|p| p.id == project_id))
        })
    }

    fn list_ledgers(
        &self,
        profile_id: &str,
        project_id: &str,
    ) -> BoxFuture<'static, Result<Vec<Ledger>>> {
        let path = self.profile_doc_path(profile_id);
        let project_id = project_id.to_string();
        Box::pin(async move {
            let doc: ProfileDoc = load(&path).await?;
            Ok(doc
                .ledgers
                .into_iter()
                .filter(|l| l.project_id.as_deref() == Some(project_id.as_str()))
                .collect())
        })
    }

    fn list_all_ledgers(&self, profile_id: &str) -> BoxFuture<'static, Result<Vec<Ledger>>> {
        let path = self.profile_doc_path(profile_id);
        Box::pin(async move {
            let doc: ProfileDoc = load(&path).await?;
            Ok(doc.ledgers)
        })
    }

    fn create_ledger(
        &self,
        profile_id: &str,
        name: &str,
        project_id: Option<&str>,
    ) -> BoxFuture<'static, Result<Ledger>> {
        let path = self.profile_doc_path(profile_id);
        let name = name.to_string();
        let project_id = project_id.map(str::to_string);
        Box::pin(async move {
            if name.is_empty() {
                return Err(anyhow::anyhow!("Ledger name cannot be empty"));
            }

            let mut doc: ProfileDoc = load(&path).await?;
            let ledger = Ledger {
                id: Uuid::new_v4().to_string(),
                name,
                project_id,
                created_at: Utc::now(),
            };
            doc.ledgers.push(ledger.clone());
            save(&path, &doc).await?;
            Ok(ledger)
        })
    }

    fn list_profiles(&self) -> BoxFuture<'static, Result<Vec<Profile>>> {
        let path = self.index_path();
        Box::pin(async move {
            let index: ProfileIndex = load(&path).await?;
            Ok(index.profiles)
        })
    }

    fn create_profile(&self, name: &str) -> BoxFuture<'static, Result<Profile>> {
        let path = self.index_path();
        let name = name.to_string();
        Box::pin(async move {
            if name.is_empty() {
                return Err(anyhow::anyhow!("Profile name cannot be empty"));
            }

            let mut index: ProfileIndex = load(&path).await?;
            let profile = Profile {
                id: Uuid::new_v4().to_string(),
                name,
                created_at: Utc::now(),
            };
            index.profiles.push(profile.clone());
            save(&path, &index).await?;

            log::info!("Created profile {} ('{}')", profile.id, profile.name);
            Ok(profile)
        })
    }
}
