//! Integration tests for the profile index.

mod common;

use common::temp_store;
use ledgerdeck::backend::store::ProjectStore;
use ledgerdeck::backend::store::json::JsonStore;

#[tokio::test]
async fn create_and_list_profiles_in_creation_order() -> anyhow::Result<()> {
    let (store, _dir) = temp_store();

    let personal = store.create_profile("Personal").await?;
    let work = store.create_profile("Work").await?;
    assert_ne!(personal.id, work.id);

    let profiles = store.list_profiles().await?;
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].name, "Personal");
    assert_eq!(profiles[1].name, "Work");

    Ok(())
}

#[tokio::test]
async fn empty_profile_name_is_rejected() {
    let (store, _dir) = temp_store();

    let result = store.create_profile("").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn profiles_persist_across_reload() -> anyhow::Result<()> {
    let (store, dir) = temp_store();

    let created = store.create_profile("Personal").await?;
    drop(store);

    let reopened = JsonStore::new(dir.path().to_path_buf());
    let profiles = reopened.list_profiles().await?;
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id, created.id);

    Ok(())
}

#[tokio::test]
async fn profile_data_is_independent_of_the_index() -> anyhow::Result<()> {
    let (store, _dir) = temp_store();

    // Projects can exist under a profile id that was never registered in
    // the index; the dashboard only needs the route parameter
    store.create_project("unregistered", "Health", "").await?;
    assert!(store.list_profiles().await?.is_empty());
    assert_eq!(store.list_projects("unregistered").await?.len(), 1);

    Ok(())
}
