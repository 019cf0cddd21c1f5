//! Profile management service.

use std::sync::Arc;

use anyhow::Result;
use dioxus::prelude::*;

use crate::backend::store::{Profile, ProjectStore};

/// Reactive view over the master profile index.
#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn ProjectStore>,
    pub profiles: Signal<Vec<Profile>>,
    pub is_loading: Signal<bool>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self {
            store,
            profiles: Signal::new(Vec::new()),
            is_loading: Signal::new(false),
        }
    }

    pub fn fetch_profiles(&self) {
        let store = self.store.clone();
        let mut profiles = self.profiles;
        let mut is_loading = self.is_loading;

        is_loading.set(true);
        spawn(async move {
            match store.list_profiles().await {
                Ok(list) => profiles.set(list),
                Err(e) => log::error!("Failed to fetch profiles: {e}"),
            }
            is_loading.set(false);
        });
    }

    pub async fn create_profile(&self, name: &str) -> Result<()> {
        let profile = self.store.create_profile(name).await?;
        let mut profiles = self.profiles;
        profiles.write().push(profile);
        Ok(())
    }
}
