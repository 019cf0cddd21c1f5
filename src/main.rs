//! LedgerDeck desktop entry point.

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;

use ledgerdeck::backend::store::ProjectStore;
use ledgerdeck::backend::store::json::JsonStore;
use ledgerdeck::backend::utils::paths::data_dir;
use ledgerdeck::frontend::app::Route;
use ledgerdeck::frontend::services::profiles::ProfileService;
use ledgerdeck::frontend::services::projects::ProjectService;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let size = LogicalSize::new(1280.0, 832.0);
    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("LedgerDeck")
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(960.0, 640.0)),
        )
        .with_custom_head(format!(
            "<style>{}</style>",
            include_str!("../assets/styles/main.css")
        ))
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(App);
}

#[component]
fn App() -> Element {
    let store: Arc<dyn ProjectStore> = use_hook(|| {
        let dir = data_dir().unwrap_or_else(|e| {
            log::warn!("Could not resolve data directory ({e}), falling back to ./LedgerDeck");
            PathBuf::from("LedgerDeck")
        });
        Arc::new(JsonStore::new(dir)) as Arc<dyn ProjectStore>
    });

    use_context_provider(|| store.clone());
    use_context_provider(|| ProjectService::new(store.clone()));
    use_context_provider(|| ProfileService::new(store));

    rsx! { Router::<Route> {} }
}
