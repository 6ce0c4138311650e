//! Route definitions for the Inventory Ledger Platform

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Protected routes - inventory ledger
        .nest("/inventory", inventory_routes())
}

/// Inventory ledger routes (protected)
fn inventory_routes() -> Router<AppState> {
    Router::new()
        // Transactions
        .route(
            "/transactions",
            get(handlers::list_transactions).post(handlers::record_transaction),
        )
        .route("/transactions/:transaction_id", get(handlers::get_transaction))
        // Balances
        .route(
            "/balances/:product_id/:location_id",
            get(handlers::get_balance),
        )
        // Ledger operations
        .route("/adjustments", post(handlers::create_adjustment))
        .route("/transfers", post(handlers::create_transfer))
        .route("/counts", post(handlers::create_count))
        // Movement history
        .route(
            "/movements/product/:product_id",
            get(handlers::get_product_movements),
        )
        .route(
            "/movements/location/:location_id",
            get(handlers::get_location_movements),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}
