//! Persistent storage for profiles, projects and ledgers.
//!
//! Views never talk to a concrete store. They go through the [`ProjectStore`]
//! trait so the whole storage layer can be swapped out (or faked) without
//! touching any UI code.

use anyhow::Result;
use chrono::{DateTime, Utc};
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};

pub mod json;

/// A named container for ledgers, owned by a single profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A tracking ledger. Linked to at most one project; an unlinked ledger
/// keeps existing with `project_id = None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub project_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An account context. Every profile owns its own set of projects and
/// ledgers, stored independently from all other profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Storage operations consumed by the UI layer.
///
/// All methods return boxed futures to keep the trait object-safe; services
/// hold an `Arc<dyn ProjectStore>`.
pub trait ProjectStore: Send + Sync {
    /// List the projects of one profile, in creation order.
    fn list_projects(&self, profile_id: &str) -> BoxFuture<'static, Result<Vec<Project>>>;

    /// Create a project. The store assigns the id and timestamp.
    /// An empty name is rejected.
    fn create_project(
        &self,
        profile_id: &str,
        name: &str,
        description: &str,
    ) -> BoxFuture<'static, Result<Project>>;

    /// Delete a project by id. Ledgers linked to it are unlinked, not
    /// deleted. Deleting an unknown id is a no-op.
    fn delete_project(&self, profile_id: &str, project_id: &str)
    -> BoxFuture<'static, Result<()>>;

    /// Look up a single project.
    fn get_project(
        &self,
        profile_id: &str,
        project_id: &str,
    ) -> BoxFuture<'static, Result<Option<Project>>>;

    /// List the ledgers linked to one project, in creation order.
    fn list_ledgers(
        &self,
        profile_id: &str,
        project_id: &str,
    ) -> BoxFuture<'static, Result<Vec<Ledger>>>;

    /// List every ledger of a profile, linked or not.
    fn list_all_ledgers(&self, profile_id: &str) -> BoxFuture<'static, Result<Vec<Ledger>>>;

    /// Create a ledger, optionally linked to a project.
    fn create_ledger(
        &self,
        profile_id: &str,
        name: &str,
        project_id: Option<&str>,
    ) -> BoxFuture<'static, Result<Ledger>>;

    /// List all known profiles, in creation order.
    fn list_profiles(&self) -> BoxFuture<'static, Result<Vec<Profile>>>;

    /// Create a profile. An empty name is rejected.
    fn create_profile(&self, name: &str) -> BoxFuture<'static, Result<Profile>>;
}
