use crate::store::ExpenseStore;
use crate::ui::static_handler;
use crate::workspace;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

mod expenses;

pub async fn main(port: u16) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let store = Arc::new(ExpenseStore::new(workspace::data_file()?));

    let api_routes = Router::new().merge(expenses::routes()).with_state(store);

    let app = Router::new()
        .nest("/api", api_routes)
        .fallback(static_handler)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    println!("Expense tracker listening on http://0.0.0.0:{port}");
    axum::serve(listener, app).await?;

    Ok(())
}
