//! Shared helpers for store integration tests.

use ledgerdeck::backend::store::json::JsonStore;
use tempfile::TempDir;

/// Create a store rooted in a fresh temporary directory. Keep the returned
/// guard alive for the duration of the test; dropping it deletes the files.
pub fn temp_store() -> (JsonStore, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let store = JsonStore::new(dir.path().to_path_buf());
    (store, dir)
}
