//! Integration tests for project storage.
//!
//! Tests cover:
//! - Creating projects and listing them in creation order
//! - Profile scoping of project lists
//! - Deleting projects, including ledger unlinking
//! - Persistence through store reloads

mod common;

use common::temp_store;
use ledgerdeck::backend::store::ProjectStore;
use ledgerdeck::backend::store::json::JsonStore;

#[tokio::test]
async fn create_and_list_projects_in_creation_order() -> anyhow::Result<()> {
    let (store, _dir) = temp_store();

    // 1. Create two projects
    let first = store.create_project("p1", "Health", "Daily habits").await?;
    let second = store.create_project("p1", "Business", "").await?;
    assert!(!first.id.is_empty());
    assert_ne!(first.id, second.id);

    // 2. Listing preserves creation order and field values
    let projects = store.list_projects("p1").await?;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "Health");
    assert_eq!(projects[0].description, "Daily habits");
    assert_eq!(projects[1].name, "Business");

    Ok(())
}

#[tokio::test]
async fn projects_are_scoped_to_their_profile() -> anyhow::Result<()> {
    let (store, _dir) = temp_store();

    store.create_project("p1", "Health", "").await?;

    // Another profile sees nothing
    let other = store.list_projects("p2").await?;
    assert!(other.is_empty());

    Ok(())
}

#[tokio::test]
async fn unknown_profile_lists_empty_and_accepts_creations() -> anyhow::Result<()> {
    let (store, _dir) = temp_store();

    assert!(store.list_projects("fresh").await?.is_empty());

    store.create_project("fresh", "First", "").await?;
    assert_eq!(store.list_projects("fresh").await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn empty_project_name_is_rejected() {
    let (store, _dir) = temp_store();

    let result = store.create_project("p1", "", "description").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn delete_project_unlinks_its_ledgers() -> anyhow::Result<()> {
    let (store, _dir) = temp_store();

    // 1. Two projects, three ledgers: one linked to each, one free-floating
    let health = store.create_project("p1", "Health", "").await?;
    let business = store.create_project("p1", "Business", "").await?;
    let steps = store
        .create_ledger("p1", "Steps", Some(health.id.as_str()))
        .await?;
    let invoices = store
        .create_ledger("p1", "Invoices", Some(business.id.as_str()))
        .await?;
    store.create_ledger("p1", "Scratch", None).await?;

    // 2. Delete one project
    store.delete_project("p1", &health.id).await?;

    // 3. The project is gone, the other survives
    let projects = store.list_projects("p1").await?;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, business.id);

    // 4. Its ledger still exists but is unlinked; other links are untouched
    let ledgers = store.list_all_ledgers("p1").await?;
    assert_eq!(ledgers.len(), 3);
    let steps_after = ledgers.iter().find(|l| l.id == steps.id).unwrap();
    assert_eq!(steps_after.project_id, None);
    let invoices_after = ledgers.iter().find(|l| l.id == invoices.id).unwrap();
    assert_eq!(invoices_after.project_id.as_deref(), Some(business.id.as_str()));

    // 5. The deleted project no longer lists any ledgers
    assert!(store.list_ledgers("p1", &health.id).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn deleting_unknown_project_is_a_noop() -> anyhow::Result<()> {
    let (store, _dir) = temp_store();

    store.create_project("p1", "Health", "").await?;
    store.delete_project("p1", "no-such-project").await?;

    assert_eq!(store.list_projects("p1").await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn projects_persist_across_reload() -> anyhow::Result<()> {
    let (store, dir) = temp_store();

    let first = store.create_project("p1", "Health", "Daily habits").await?;
    let second = store.create_project("p1", "Business", "").await?;
    drop(store);

    // A fresh store over the same directory sees the same data
    let reopened = JsonStore::new(dir.path().to_path_buf());
    let projects = reopened.list_projects("p1").await?;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, first.id);
    assert_eq!(projects[1].id, second.id);
    assert_eq!(projects[0].description, "Daily habits");

    Ok(())
}

#[tokio::test]
async fn get_project_finds_by_id() -> anyhow::Result<()> {
    let (store, _dir) = temp_store();

    let created = store.create_project("p1", "Health", "").await?;

    let found = store.get_project("p1", &created.id).await?;
    assert_eq!(found.map(|p| p.name), Some("Health".to_string()));

    let missing = store.get_project("p1", "no-such-project").await?;
    assert!(missing.is_none());

    Ok(())
}

#[tokio::test]
async fn ledgers_list_only_their_project() -> anyhow::Result<()> {
    let (store, _dir) = temp_store();

    let health = store.create_project("p1", "Health", "").await?;
    let business = store.create_project("p1", "Business", "").await?;
    store
        .create_ledger("p1", "Steps", Some(health.id.as_str()))
        .await?;
    store
        .create_ledger("p1", "Sleep", Some(health.id.as_str()))
        .await?;
    store
        .create_ledger("p1", "Invoices", Some(business.id.as_str()))
        .await?;

    let health_ledgers = store.list_ledgers("p1", &health.id).await?;
    assert_eq!(health_ledgers.len(), 2);
    assert_eq!(health_ledgers[0].name, "Steps");
    assert_eq!(health_ledgers[1].name, "Sleep");

    Ok(())
}

#[tokio::test]
async fn empty_ledger_name_is_rejected() {
    let (store, _dir) = temp_store();

    let result = store.create_ledger("p1", "", None).await;
    assert!(result.is_err());
}
