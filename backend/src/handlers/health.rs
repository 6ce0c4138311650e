//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
    pub ledger: String,
}

/// Liveness plus readiness of the ledger store. `database` reflects raw
/// connectivity; `ledger` turns unavailable when the transaction log
/// cannot be queried (e.g. migrations not applied).
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    let ledger = match sqlx::query_scalar::<_, i64>("SELECT count(*) FROM inventory_transactions")
        .fetch_one(&state.db)
        .await
    {
        Ok(_) => "ready",
        Err(_) => "unavailable",
    };

    let status = if database == "connected" && ledger == "ready" {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        service: "ledger-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        ledger: ledger.to_string(),
    })
}
