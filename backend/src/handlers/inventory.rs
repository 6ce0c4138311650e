//! HTTP handlers for inventory ledger endpoints
//!
//! Retried adjust/transfer/count requests are not idempotent: resubmitting
//! the same payload posts its deltas again. Deduplication is the caller's
//! responsibility.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use shared::types::{DateWindow, Pagination};

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::services::inventory::{
    InventoryBalance, InventoryService, InventoryTransaction, InventoryTransactionWithDetails,
    RecordEntryInput, StockAdjustment, StockCount, StockTransfer, TransactionFilter,
    TransactionType,
};
use crate::AppState;

/// Query parameters for the transaction list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListTransactionsQuery {
    #[serde(default)]
    pub skip: i64,
    pub limit: Option<i64>,
    pub product_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
    pub transaction_type: Option<TransactionType>,
    pub from_date: Option<DateTime<Utc>>,
    pub to_date: Option<DateTime<Utc>>,
}

/// Query parameters for movement endpoints
#[derive(Debug, Default, Deserialize)]
pub struct MovementQuery {
    pub from_date: Option<DateTime<Utc>>,
    pub to_date: Option<DateTime<Utc>>,
}

fn service(state: AppState) -> InventoryService {
    InventoryService::new(state.db, state.config.ledger.enforce_references)
}

/// Record an inventory transaction
pub async fn record_transaction(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<RecordEntryInput>,
) -> AppResult<Json<InventoryTransaction>> {
    let transaction = service(state)
        .record_entry(current_user.0.user_id, input)
        .await?;
    Ok(Json(transaction))
}

/// List inventory transactions with optional filtering
pub async fn list_transactions(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Query(query): Query<ListTransactionsQuery>,
) -> AppResult<Json<Vec<InventoryTransaction>>> {
    let filter = TransactionFilter {
        product_id: query.product_id,
        location_id: query.location_id,
        transaction_type: query.transaction_type,
        from_date: query.from_date,
        to_date: query.to_date,
    };
    let pagination = Pagination {
        skip: query.skip,
        limit: query.limit.unwrap_or(100),
    };

    let transactions = service(state).list_transactions(filter, pagination).await?;
    Ok(Json(transactions))
}

/// Get detailed information about a specific transaction
pub async fn get_transaction(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(transaction_id): Path<Uuid>,
) -> AppResult<Json<InventoryTransactionWithDetails>> {
    let transaction = service(state)
        .get_transaction_with_details(transaction_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Transaction".to_string()))?;
    Ok(Json(transaction))
}

/// Get current inventory balance for a product at a specific location
pub async fn get_balance(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path((product_id, location_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<InventoryBalance>> {
    let balance = service(state)
        .get_balance(product_id, location_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("Balance for this product at this location".to_string())
        })?;
    Ok(Json(balance))
}

/// Create an inventory adjustment transaction
pub async fn create_adjustment(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<StockAdjustment>,
) -> AppResult<Json<InventoryTransaction>> {
    let transaction = service(state)
        .process_adjustment(current_user.0.user_id, input)
        .await?
        .ok_or(AppError::NoAdjustmentNeeded)?;
    Ok(Json(transaction))
}

/// Create an inventory transfer between locations
pub async fn create_transfer(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<StockTransfer>,
) -> AppResult<Json<Vec<InventoryTransaction>>> {
    let (outbound, inbound) = service(state)
        .process_transfer(current_user.0.user_id, input)
        .await?;
    Ok(Json(vec![outbound, inbound]))
}

/// Process inventory count results and post reconciliation transactions
pub async fn create_count(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<StockCount>,
) -> AppResult<Json<Vec<InventoryTransaction>>> {
    let transactions = service(state)
        .process_count(current_user.0.user_id, input)
        .await?;
    Ok(Json(transactions))
}

/// Get all movements for a specific product
pub async fn get_product_movements(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(product_id): Path<Uuid>,
    Query(query): Query<MovementQuery>,
) -> AppResult<Json<Vec<InventoryTransaction>>> {
    let window = DateWindow {
        from_date: query.from_date,
        to_date: query.to_date,
    };
    let movements = service(state).product_movements(product_id, window).await?;
    Ok(Json(movements))
}

/// Get all movements for a specific location, including transfer legs
/// arriving at it
pub async fn get_location_movements(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(location_id): Path<Uuid>,
    Query(query): Query<MovementQuery>,
) -> AppResult<Json<Vec<InventoryTransaction>>> {
    let window = DateWindow {
        from_date: query.from_date,
        to_date: query.to_date,
    };
    let movements = service(state)
        .location_movements(location_id, window)
        .await?;
    Ok(Json(movements))
}
