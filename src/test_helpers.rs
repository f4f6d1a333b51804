#[cfg(test)]
use crate::store::ExpenseStore;
#[cfg(test)]
use crate::workspace::DATA_FILE_NAME;
#[cfg(test)]
use axum::Router;
#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use tempfile::TempDir;

#[cfg(test)]
pub fn test_store() -> (TempDir, ExpenseStore) {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = ExpenseStore::new(temp_dir.path().join(DATA_FILE_NAME));
    (temp_dir, store)
}

#[cfg(test)]
pub fn create_test_server<F>(routes: F) -> (TempDir, TestServer)
where
    F: FnOnce() -> Router<Arc<ExpenseStore>>,
{
    let (temp_dir, store) = test_store();
    let app = routes().with_state(Arc::new(store));
    (temp_dir, TestServer::new(app).unwrap())
}
