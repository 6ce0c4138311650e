//! Inventory ledger service: the stock-movement log and balance store
//!
//! Every stock movement is an immutable row in `inventory_transactions`;
//! `inventory_balances` is a per-(product, location) cache of the log's
//! sum, updated atomically alongside each log insert. The log is the
//! source of truth; corrections are posted as new offsetting entries,
//! never as mutations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use uuid::Uuid;
use validator::Validate;

use shared::types::{DateWindow, Pagination};
use shared::validation::{
    validate_count_lines, validate_entry_quantity, validate_transfer_locations,
    validate_transfer_quantity, validate_unit_cost,
};

use crate::error::{AppError, AppResult};
use crate::models::{adjustment_delta, count_deltas, entry_value, transfer_legs, CountLine};

/// Inventory ledger service
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
    enforce_references: bool,
}

/// Stock movement types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "inventory_transaction_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Purchase,
    Sale,
    Adjustment,
    Transfer,
    Count,
}

/// Originating business document of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "inventory_reference_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReferenceType {
    PurchaseOrder,
    SalesOrder,
    Adjustment,
    Transfer,
    Count,
}

/// Inventory transaction record (immutable once written)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InventoryTransaction {
    pub id: Uuid,
    pub product_id: Uuid,
    pub location_id: Uuid,
    pub to_location_id: Option<Uuid>,
    pub transaction_type: TransactionType,
    pub quantity: Decimal,
    pub unit_cost: Option<Decimal>,
    pub value: Decimal,
    pub running_balance: Decimal,
    pub reference_type: Option<ReferenceType>,
    pub reference_id: Option<Uuid>,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Current balance for a (product, location) key
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InventoryBalance {
    pub product_id: Uuid,
    pub location_id: Uuid,
    pub quantity: Decimal,
    pub value: Decimal,
    pub last_transaction_date: Option<DateTime<Utc>>,
    pub last_count_date: Option<DateTime<Utc>>,
}

/// Input for posting a generic ledger entry
#[derive(Debug, Deserialize, Validate)]
pub struct RecordEntryInput {
    pub product_id: Uuid,
    pub location_id: Uuid,
    pub to_location_id: Option<Uuid>,
    pub transaction_type: TransactionType,
    pub quantity: Decimal,
    pub unit_cost: Option<Decimal>,
    pub reference_type: Option<ReferenceType>,
    pub reference_id: Option<Uuid>,
    #[validate(length(max = 500, message = "Reason is too long"))]
    pub reason: Option<String>,
    #[validate(length(max = 1000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

/// Input for an inventory adjustment
#[derive(Debug, Deserialize, Validate)]
pub struct StockAdjustment {
    pub product_id: Uuid,
    pub location_id: Uuid,
    pub actual_quantity: Decimal,
    pub system_quantity: Decimal,
    #[validate(length(min = 1, max = 500, message = "Reason is required"))]
    pub reason: String,
    #[validate(length(max = 1000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

/// Input for a transfer between locations
#[derive(Debug, Deserialize, Validate)]
pub struct StockTransfer {
    pub product_id: Uuid,
    pub from_location_id: Uuid,
    pub to_location_id: Uuid,
    pub quantity: Decimal,
    #[validate(length(max = 500, message = "Reason is too long"))]
    pub reason: Option<String>,
    #[validate(length(max = 1000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

/// Input for a physical count at one location
#[derive(Debug, Deserialize, Validate)]
pub struct StockCount {
    pub location_id: Uuid,
    #[validate(length(min = 1, message = "Count sheet has no lines"))]
    pub lines: Vec<CountLine>,
    #[validate(length(max = 1000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

/// Filters for the transaction history view
#[derive(Debug, Default, Deserialize)]
pub struct TransactionFilter {
    pub product_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
    pub transaction_type: Option<TransactionType>,
    pub from_date: Option<DateTime<Utc>>,
    pub to_date: Option<DateTime<Utc>>,
}

/// Product fields joined into the detail view
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
}

/// Location fields joined into the detail view
#[derive(Debug, Clone, Serialize)]
pub struct LocationSummary {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

/// Transaction with joined reference details
#[derive(Debug, Clone, Serialize)]
pub struct InventoryTransactionWithDetails {
    #[serde(flatten)]
    pub transaction: InventoryTransaction,
    pub product: Option<ProductSummary>,
    pub location: Option<LocationSummary>,
    pub to_location: Option<LocationSummary>,
}

/// Row for the joined detail query
#[derive(Debug, FromRow)]
struct DetailRow {
    id: Uuid,
    product_id: Uuid,
    location_id: Uuid,
    to_location_id: Option<Uuid>,
    transaction_type: TransactionType,
    quantity: Decimal,
    unit_cost: Option<Decimal>,
    value: Decimal,
    running_balance: Decimal,
    reference_type: Option<ReferenceType>,
    reference_id: Option<Uuid>,
    reason: Option<String>,
    notes: Option<String>,
    created_by: Uuid,
    created_at: DateTime<Utc>,
    product_sku: Option<String>,
    product_name: Option<String>,
    location_code: Option<String>,
    location_name: Option<String>,
    to_location_code: Option<String>,
    to_location_name: Option<String>,
}

/// One delta to be committed as a single atomic log+balance unit
struct LedgerEntry {
    product_id: Uuid,
    location_id: Uuid,
    to_location_id: Option<Uuid>,
    transaction_type: TransactionType,
    quantity: Decimal,
    unit_cost: Option<Decimal>,
    reference_type: Option<ReferenceType>,
    reference_id: Option<Uuid>,
    reason: Option<String>,
    notes: Option<String>,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(db: PgPool, enforce_references: bool) -> Self {
        Self {
            db,
            enforce_references,
        }
    }

    /// Commit one ledger entry inside an open database transaction.
    ///
    /// The balance upsert is a single atomic increment: it never reads the
    /// current quantity on the Rust side, and the row lock it takes holds
    /// until the enclosing transaction commits, so concurrent commits to
    /// the same (product, location) key serialize and running balances
    /// stay gap-free. The log insert and the balance update become visible
    /// together or not at all.
    async fn commit_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        entry: LedgerEntry,
    ) -> AppResult<InventoryTransaction> {
        validate_entry_quantity(entry.quantity).map_err(|msg| AppError::Validation {
            field: "quantity".to_string(),
            message: msg.to_string(),
        })?;
        validate_unit_cost(entry.unit_cost).map_err(|msg| AppError::Validation {
            field: "unit_cost".to_string(),
            message: msg.to_string(),
        })?;

        if self.enforce_references {
            self.check_references(tx, entry.product_id, entry.location_id, entry.to_location_id)
                .await?;
        }

        let value = entry_value(entry.quantity, entry.unit_cost);
        let now = Utc::now();

        let running_balance = sqlx::query_scalar::<_, Decimal>(
            r#"
            INSERT INTO inventory_balances (product_id, location_id, quantity, value, last_transaction_date)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (product_id, location_id) DO UPDATE
            SET quantity = inventory_balances.quantity + EXCLUDED.quantity,
                value = inventory_balances.value + EXCLUDED.value,
                last_transaction_date = EXCLUDED.last_transaction_date
            RETURNING quantity
            "#,
        )
        .bind(entry.product_id)
        .bind(entry.location_id)
        .bind(entry.quantity)
        .bind(value)
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;

        let transaction = sqlx::query_as::<_, InventoryTransaction>(
            r#"
            INSERT INTO inventory_transactions (
                product_id, location_id, to_location_id, transaction_type, quantity,
                unit_cost, value, running_balance, reference_type, reference_id,
                reason, notes, created_by, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id, product_id, location_id, to_location_id, transaction_type, quantity,
                      unit_cost, value, running_balance, reference_type, reference_id,
                      reason, notes, created_by, created_at
            "#,
        )
        .bind(entry.product_id)
        .bind(entry.location_id)
        .bind(entry.to_location_id)
        .bind(entry.transaction_type)
        .bind(entry.quantity)
        .bind(entry.unit_cost)
        .bind(value)
        .bind(running_balance)
        .bind(entry.reference_type)
        .bind(entry.reference_id)
        .bind(&entry.reason)
        .bind(&entry.notes)
        .bind(user_id)
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;

        tracing::debug!(
            product_id = %entry.product_id,
            location_id = %entry.location_id,
            quantity = %entry.quantity,
            running_balance = %running_balance,
            "committed ledger entry"
        );

        Ok(transaction)
    }

    /// Verify product and location rows exist, inside the same transaction
    async fn check_references(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product_id: Uuid,
        location_id: Uuid,
        to_location_id: Option<Uuid>,
    ) -> AppResult<()> {
        let product_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(product_id)
                .fetch_one(&mut **tx)
                .await?;
        if !product_exists {
            return Err(AppError::NotFound("Product".to_string()));
        }

        let location_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM locations WHERE id = $1)")
                .bind(location_id)
                .fetch_one(&mut **tx)
                .await?;
        if !location_exists {
            return Err(AppError::NotFound("Location".to_string()));
        }

        if let Some(to_location) = to_location_id {
            let to_exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM locations WHERE id = $1)",
            )
            .bind(to_location)
            .fetch_one(&mut **tx)
            .await?;
            if !to_exists {
                return Err(AppError::NotFound("Destination location".to_string()));
            }
        }

        Ok(())
    }

    /// Post a generic ledger entry (purchase/sale receipts from other
    /// subsystems, manual corrections)
    pub async fn record_entry(
        &self,
        user_id: Uuid,
        input: RecordEntryInput,
    ) -> AppResult<InventoryTransaction> {
        input.validate()?;

        let mut tx = self.db.begin().await?;

        let transaction = self
            .commit_entry(
                &mut tx,
                user_id,
                LedgerEntry {
                    product_id: input.product_id,
                    location_id: input.location_id,
                    to_location_id: input.to_location_id,
                    transaction_type: input.transaction_type,
                    quantity: input.quantity,
                    unit_cost: input.unit_cost,
                    reference_type: input.reference_type,
                    reference_id: input.reference_id,
                    reason: input.reason,
                    notes: input.notes,
                },
            )
            .await?;

        tx.commit().await?;
        Ok(transaction)
    }

    /// Process an inventory adjustment. Returns `None` when the counted
    /// quantity already matches the system quantity: nothing is written
    /// and the caller decides how to surface the no-op.
    pub async fn process_adjustment(
        &self,
        user_id: Uuid,
        input: StockAdjustment,
    ) -> AppResult<Option<InventoryTransaction>> {
        input.validate()?;

        let delta = adjustment_delta(input.actual_quantity, input.system_quantity);
        if delta.is_zero() {
            return Ok(None);
        }

        let mut tx = self.db.begin().await?;

        let transaction = self
            .commit_entry(
                &mut tx,
                user_id,
                LedgerEntry {
                    product_id: input.product_id,
                    location_id: input.location_id,
                    to_location_id: None,
                    transaction_type: TransactionType::Adjustment,
                    quantity: delta,
                    unit_cost: None,
                    reference_type: Some(ReferenceType::Adjustment),
                    reference_id: None,
                    reason: Some(input.reason),
                    notes: input.notes,
                },
            )
            .await?;

        tx.commit().await?;
        Ok(Some(transaction))
    }

    /// Transfer stock between two locations. Both legs are committed in
    /// one atomic scope: a debit at the source (with the destination
    /// recorded for audit) and a credit at the destination. Neither leg
    /// is visible unless both succeed.
    pub async fn process_transfer(
        &self,
        user_id: Uuid,
        input: StockTransfer,
    ) -> AppResult<(InventoryTransaction, InventoryTransaction)> {
        input.validate()?;
        validate_transfer_quantity(input.quantity).map_err(|msg| AppError::Validation {
            field: "quantity".to_string(),
            message: msg.to_string(),
        })?;
        validate_transfer_locations(input.from_location_id, input.to_location_id).map_err(
            |msg| AppError::Validation {
                field: "to_location_id".to_string(),
                message: msg.to_string(),
            },
        )?;

        let (outbound_qty, inbound_qty) = transfer_legs(input.quantity);

        let mut tx = self.db.begin().await?;

        let outbound = self
            .commit_entry(
                &mut tx,
                user_id,
                LedgerEntry {
                    product_id: input.product_id,
                    location_id: input.from_location_id,
                    to_location_id: Some(input.to_location_id),
                    transaction_type: TransactionType::Transfer,
                    quantity: outbound_qty,
                    unit_cost: None,
                    reference_type: Some(ReferenceType::Transfer),
                    reference_id: None,
                    reason: input.reason.clone(),
                    notes: input.notes.clone(),
                },
            )
            .await?;

        let inbound = self
            .commit_entry(
                &mut tx,
                user_id,
                LedgerEntry {
                    product_id: input.product_id,
                    location_id: input.to_location_id,
                    to_location_id: None,
                    transaction_type: TransactionType::Transfer,
                    quantity: inbound_qty,
                    unit_cost: None,
                    reference_type: Some(ReferenceType::Transfer),
                    reference_id: None,
                    reason: input.reason,
                    notes: input.notes,
                },
            )
            .await?;

        tx.commit().await?;
        Ok((outbound, inbound))
    }

    /// Reconcile a physical count at one location. Lines with drift each
    /// post one count entry; lines that match post nothing. All postings
    /// plus the `last_count_date` stamp (applied to every balance row at
    /// the location, drift or not) form one atomic scope.
    pub async fn process_count(
        &self,
        user_id: Uuid,
        input: StockCount,
    ) -> AppResult<Vec<InventoryTransaction>> {
        input.validate()?;
        validate_count_lines(&input.lines).map_err(|msg| AppError::Validation {
            field: "lines".to_string(),
            message: msg.to_string(),
        })?;

        let mut tx = self.db.begin().await?;
        let mut transactions = Vec::new();

        for delta in count_deltas(&input.lines) {
            let transaction = self
                .commit_entry(
                    &mut tx,
                    user_id,
                    LedgerEntry {
                        product_id: delta.product_id,
                        location_id: input.location_id,
                        to_location_id: None,
                        transaction_type: TransactionType::Count,
                        quantity: delta.quantity,
                        unit_cost: None,
                        reference_type: Some(ReferenceType::Count),
                        reference_id: None,
                        reason: None,
                        notes: input.notes.clone(),
                    },
                )
                .await?;
            transactions.push(transaction);
        }

        sqlx::query("UPDATE inventory_balances SET last_count_date = $1 WHERE location_id = $2")
            .bind(Utc::now())
            .bind(input.location_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(transactions)
    }

    /// Get one transaction by id
    pub async fn get_transaction(
        &self,
        transaction_id: Uuid,
    ) -> AppResult<Option<InventoryTransaction>> {
        let transaction = sqlx::query_as::<_, InventoryTransaction>(
            r#"
            SELECT id, product_id, location_id, to_location_id, transaction_type, quantity,
                   unit_cost, value, running_balance, reference_type, reference_id,
                   reason, notes, created_by, created_at
            FROM inventory_transactions
            WHERE id = $1
            "#,
        )
        .bind(transaction_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(transaction)
    }

    /// Get one transaction with product/location details joined in.
    /// Joins are LEFT so permissive-mode entries against unknown keys
    /// still resolve.
    pub async fn get_transaction_with_details(
        &self,
        transaction_id: Uuid,
    ) -> AppResult<Option<InventoryTransactionWithDetails>> {
        let row = sqlx::query_as::<_, DetailRow>(
            r#"
            SELECT t.id, t.product_id, t.location_id, t.to_location_id, t.transaction_type,
                   t.quantity, t.unit_cost, t.value, t.running_balance, t.reference_type,
                   t.reference_id, t.reason, t.notes, t.created_by, t.created_at,
                   p.sku AS product_sku, p.name AS product_name,
                   l.code AS location_code, l.name AS location_name,
                   tl.code AS to_location_code, tl.name AS to_location_name
            FROM inventory_transactions t
            LEFT JOIN products p ON p.id = t.product_id
            LEFT JOIN locations l ON l.id = t.location_id
            LEFT JOIN locations tl ON tl.id = t.to_location_id
            WHERE t.id = $1
            "#,
        )
        .bind(transaction_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(DetailRow::into_details))
    }

    /// List transactions with optional filters, newest first
    pub async fn list_transactions(
        &self,
        filter: TransactionFilter,
        pagination: Pagination,
    ) -> AppResult<Vec<InventoryTransaction>> {
        let pagination = pagination.clamped();

        let transactions = sqlx::query_as::<_, InventoryTransaction>(
            r#"
            SELECT id, product_id, location_id, to_location_id, transaction_type, quantity,
                   unit_cost, value, running_balance, reference_type, reference_id,
                   reason, notes, created_by, created_at
            FROM inventory_transactions
            WHERE ($1::uuid IS NULL OR product_id = $1)
              AND ($2::uuid IS NULL OR location_id = $2)
              AND ($3::inventory_transaction_type IS NULL OR transaction_type = $3)
              AND ($4::timestamptz IS NULL OR created_at >= $4)
              AND ($5::timestamptz IS NULL OR created_at <= $5)
            ORDER BY created_at DESC
            OFFSET $6 LIMIT $7
            "#,
        )
        .bind(filter.product_id)
        .bind(filter.location_id)
        .bind(filter.transaction_type)
        .bind(filter.from_date)
        .bind(filter.to_date)
        .bind(pagination.skip)
        .bind(pagination.limit)
        .fetch_all(&self.db)
        .await?;

        Ok(transactions)
    }

    /// Current balance for a (product, location) key. `None` means no
    /// transaction has ever touched the key, distinct from a zero balance
    /// with history.
    pub async fn get_balance(
        &self,
        product_id: Uuid,
        location_id: Uuid,
    ) -> AppResult<Option<InventoryBalance>> {
        let balance = sqlx::query_as::<_, InventoryBalance>(
            r#"
            SELECT product_id, location_id, quantity, value,
                   last_transaction_date, last_count_date
            FROM inventory_balances
            WHERE product_id = $1 AND location_id = $2
            "#,
        )
        .bind(product_id)
        .bind(location_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(balance)
    }

    /// All movements for a product, oldest first
    pub async fn product_movements(
        &self,
        product_id: Uuid,
        window: DateWindow,
    ) -> AppResult<Vec<InventoryTransaction>> {
        let movements = sqlx::query_as::<_, InventoryTransaction>(
            r#"
            SELECT id, product_id, location_id, to_location_id, transaction_type, quantity,
                   unit_cost, value, running_balance, reference_type, reference_id,
                   reason, notes, created_by, created_at
            FROM inventory_transactions
            WHERE product_id = $1
              AND ($2::timestamptz IS NULL OR created_at >= $2)
              AND ($3::timestamptz IS NULL OR created_at <= $3)
            ORDER BY created_at ASC
            "#,
        )
        .bind(product_id)
        .bind(window.from_date)
        .bind(window.to_date)
        .fetch_all(&self.db)
        .await?;

        Ok(movements)
    }

    /// All movements touching a location, oldest first. Matches entries
    /// where the location is either the primary key or the transfer
    /// destination, so both legs of transfers surface.
    pub async fn location_movements(
        &self,
        location_id: Uuid,
        window: DateWindow,
    ) -> AppResult<Vec<InventoryTransaction>> {
        let movements = sqlx::query_as::<_, InventoryTransaction>(
            r#"
            SELECT id, product_id, location_id, to_location_id, transaction_type, quantity,
                   unit_cost, value, running_balance, reference_type, reference_id,
                   reason, notes, created_by, created_at
            FROM inventory_transactions
            WHERE (location_id = $1 OR to_location_id = $1)
              AND ($2::timestamptz IS NULL OR created_at >= $2)
              AND ($3::timestamptz IS NULL OR created_at <= $3)
            ORDER BY created_at ASC
            "#,
        )
        .bind(location_id)
        .bind(window.from_date)
        .bind(window.to_date)
        .fetch_all(&self.db)
        .await?;

        Ok(movements)
    }
}

impl DetailRow {
    fn into_details(self) -> InventoryTransactionWithDetails {
        let product = match (self.product_sku, self.product_name) {
            (Some(sku), Some(name)) => Some(ProductSummary {
                id: self.product_id,
                sku,
                name,
            }),
            _ => None,
        };
        let location = match (self.location_code, self.location_name) {
            (Some(code), Some(name)) => Some(LocationSummary {
                id: self.location_id,
                code,
                name,
            }),
            _ => None,
        };
        let to_location = match (self.to_location_id, self.to_location_code, self.to_location_name)
        {
            (Some(id), Some(code), Some(name)) => Some(LocationSummary { id, code, name }),
            _ => None,
        };

        InventoryTransactionWithDetails {
            transaction: InventoryTransaction {
                id: self.id,
                product_id: self.product_id,
                location_id: self.location_id,
                to_location_id: self.to_location_id,
                transaction_type: self.transaction_type,
                quantity: self.quantity,
                unit_cost: self.unit_cost,
                value: self.value,
                running_balance: self.running_balance,
                reference_type: self.reference_type,
                reference_id: self.reference_id,
                reason: self.reason,
                notes: self.notes,
                created_by: self.created_by,
                created_at: self.created_at,
            },
            product,
            location,
            to_location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn adjustment(reason: &str) -> StockAdjustment {
        StockAdjustment {
            product_id: Uuid::new_v4(),
            location_id: Uuid::new_v4(),
            actual_quantity: dec("7"),
            system_quantity: dec("10"),
            reason: reason.to_string(),
            notes: None,
        }
    }

    #[test]
    fn adjustment_requires_reason() {
        assert!(adjustment("").validate().is_err());
        assert!(adjustment("cycle count variance").validate().is_ok());
    }

    #[test]
    fn count_sheet_requires_lines() {
        let input = StockCount {
            location_id: Uuid::new_v4(),
            lines: Vec::new(),
            notes: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn transfer_optional_fields_may_be_absent() {
        let input = StockTransfer {
            product_id: Uuid::new_v4(),
            from_location_id: Uuid::new_v4(),
            to_location_id: Uuid::new_v4(),
            quantity: dec("5"),
            reason: None,
            notes: None,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn oversized_notes_rejected() {
        let mut input = adjustment("recount");
        input.notes = Some("x".repeat(1001));
        assert!(input.validate().is_err());
    }

    #[test]
    fn validation_failure_names_the_field() {
        let err = AppError::from(adjustment("").validate().unwrap_err());
        match err {
            AppError::Validation { field, .. } => assert_eq!(field, "reason"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
