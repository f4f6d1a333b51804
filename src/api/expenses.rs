use crate::expense::{Expense, NewExpense};
use crate::store::{ExpenseStore, StoreError};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::{
    Router,
    routing::{delete, get},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

#[derive(Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

pub fn routes() -> Router<Arc<ExpenseStore>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", delete(delete_expense))
}

fn store_error_status(err: StoreError) -> StatusCode {
    match err {
        StoreError::InvalidAmount(_) | StoreError::EmptyDescription => StatusCode::BAD_REQUEST,
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Io(_) | StoreError::Corrupt(_) => {
            error!(error = %err, "Expense store operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn list_expenses(
    State(store): State<Arc<ExpenseStore>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Expense>>, StatusCode> {
    store
        .list(params.category.as_deref())
        .await
        .map(Json)
        .map_err(store_error_status)
}

async fn create_expense(
    State(store): State<Arc<ExpenseStore>>,
    Json(input): Json<NewExpense>,
) -> Result<Json<Expense>, StatusCode> {
    store.create(input).await.map(Json).map_err(store_error_status)
}

async fn delete_expense(
    State(store): State<Arc<ExpenseStore>>,
    Path(id): Path<String>,
) -> Result<Json<Expense>, StatusCode> {
    store.delete(&id).await.map(Json).map_err(store_error_status)
}
