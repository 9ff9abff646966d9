use std::sync::Arc;

use digitalpro_db::RecordStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Backend for the four record collections.
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}
