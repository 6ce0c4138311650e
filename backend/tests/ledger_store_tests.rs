//! Storage-level ledger tests
//!
//! These run against a real Postgres instance: `#[sqlx::test]` provisions
//! a fresh database per test from `DATABASE_URL` and applies the
//! migrations before handing over the pool.
//!
//! Covered here, where the pure-logic tests cannot reach:
//! - every leg of a multi-leg operation becomes visible together or not
//!   at all
//! - concurrent commits to one (product, location) key serialize without
//!   losing updates, leaving gap-free running balances
//! - the transaction log rejects updates and deletes

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use ledger_server::error::AppError;
use ledger_server::services::inventory::{
    InventoryService, RecordEntryInput, StockCount, StockTransfer, TransactionType,
};
use shared::models::CountLine;

fn dec(n: i64) -> Decimal {
    Decimal::from(n)
}

async fn seed_product(pool: &PgPool, sku: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO products (sku, name) VALUES ($1, $2) RETURNING id")
        .bind(sku)
        .bind(format!("Product {sku}"))
        .fetch_one(pool)
        .await
        .expect("seed product")
}

async fn seed_location(pool: &PgPool, code: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO locations (code, name) VALUES ($1, $2) RETURNING id")
        .bind(code)
        .bind(format!("Location {code}"))
        .fetch_one(pool)
        .await
        .expect("seed location")
}

fn purchase(product_id: Uuid, location_id: Uuid, quantity: Decimal) -> RecordEntryInput {
    RecordEntryInput {
        product_id,
        location_id,
        to_location_id: None,
        transaction_type: TransactionType::Purchase,
        quantity,
        unit_cost: None,
        reference_type: None,
        reference_id: None,
        reason: None,
        notes: None,
    }
}

async fn balance_quantity(pool: &PgPool, product_id: Uuid, location_id: Uuid) -> Option<Decimal> {
    sqlx::query_scalar(
        "SELECT quantity FROM inventory_balances WHERE product_id = $1 AND location_id = $2",
    )
    .bind(product_id)
    .bind(location_id)
    .fetch_optional(pool)
    .await
    .expect("fetch balance")
}

#[sqlx::test]
async fn transfer_moves_stock_between_locations(pool: PgPool) {
    let user = Uuid::new_v4();
    let product = seed_product(&pool, "SKU-001").await;
    let source = seed_location(&pool, "WH-A").await;
    let destination = seed_location(&pool, "WH-B").await;

    let service = InventoryService::new(pool.clone(), true);
    service
        .record_entry(user, purchase(product, source, dec(10)))
        .await
        .unwrap();

    let (outbound, inbound) = service
        .process_transfer(
            user,
            StockTransfer {
                product_id: product,
                from_location_id: source,
                to_location_id: destination,
                quantity: dec(4),
                reason: None,
                notes: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(outbound.quantity, dec(-4));
    assert_eq!(outbound.running_balance, dec(6));
    assert_eq!(outbound.to_location_id, Some(destination));
    assert_eq!(inbound.quantity, dec(4));
    assert_eq!(inbound.running_balance, dec(4));

    assert_eq!(balance_quantity(&pool, product, source).await, Some(dec(6)));
    assert_eq!(
        balance_quantity(&pool, product, destination).await,
        Some(dec(4))
    );
}

#[sqlx::test]
async fn transfer_to_unknown_destination_leaves_source_untouched(pool: PgPool) {
    let user = Uuid::new_v4();
    let product = seed_product(&pool, "SKU-001").await;
    let source = seed_location(&pool, "WH-A").await;

    let service = InventoryService::new(pool.clone(), true);
    service
        .record_entry(user, purchase(product, source, dec(10)))
        .await
        .unwrap();

    let result = service
        .process_transfer(
            user,
            StockTransfer {
                product_id: product,
                from_location_id: source,
                to_location_id: Uuid::new_v4(),
                quantity: dec(4),
                reason: None,
                notes: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(balance_quantity(&pool, product, source).await, Some(dec(10)));

    let logged: i64 = sqlx::query_scalar("SELECT count(*) FROM inventory_transactions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(logged, 1);
}

#[sqlx::test]
async fn failed_count_line_rolls_back_earlier_postings(pool: PgPool) {
    let user = Uuid::new_v4();
    let known = seed_product(&pool, "SKU-001").await;
    let location = seed_location(&pool, "WH-A").await;

    let service = InventoryService::new(pool.clone(), true);
    service
        .record_entry(user, purchase(known, location, dec(10)))
        .await
        .unwrap();

    // The first line posts its drift before the second line's unknown
    // product is rejected; the whole count must roll back.
    let result = service
        .process_count(
            user,
            StockCount {
                location_id: location,
                lines: vec![
                    CountLine {
                        product_id: known,
                        counted_quantity: dec(7),
                        system_quantity: dec(10),
                    },
                    CountLine {
                        product_id: Uuid::new_v4(),
                        counted_quantity: dec(3),
                        system_quantity: dec(0),
                    },
                ],
                notes: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(balance_quantity(&pool, known, location).await, Some(dec(10)));

    let count_rows: i64 = sqlx::query_scalar(
        "SELECT count(*) FROM inventory_transactions WHERE transaction_type = 'count'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count_rows, 0);
}

#[sqlx::test]
async fn concurrent_commits_on_one_key_serialize(pool: PgPool) {
    let user = Uuid::new_v4();
    let product = Uuid::new_v4();
    let location = Uuid::new_v4();

    // Permissive mode: the commit path itself is under test here.
    let service = InventoryService::new(pool.clone(), false);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .record_entry(user, purchase(product, location, dec(1)))
                .await
        }));
    }
    for handle in handles {
        handle.await.expect("task panicked").expect("commit failed");
    }

    assert_eq!(
        balance_quantity(&pool, product, location).await,
        Some(dec(8))
    );

    // Serialized commits leave gap-free running balances: sorted, they
    // are exactly 1..=8.
    let mut balances: Vec<Decimal> = sqlx::query_scalar(
        "SELECT running_balance FROM inventory_transactions \
         WHERE product_id = $1 AND location_id = $2",
    )
    .bind(product)
    .bind(location)
    .fetch_all(&pool)
    .await
    .unwrap();
    balances.sort();

    let expected: Vec<Decimal> = (1..=8).map(dec).collect();
    assert_eq!(balances, expected);
}

#[sqlx::test]
async fn transaction_log_rejects_mutation(pool: PgPool) {
    let user = Uuid::new_v4();
    let service = InventoryService::new(pool.clone(), false);
    let transaction = service
        .record_entry(user, purchase(Uuid::new_v4(), Uuid::new_v4(), dec(5)))
        .await
        .unwrap();

    let update = sqlx::query("UPDATE inventory_transactions SET quantity = 99 WHERE id = $1")
        .bind(transaction.id)
        .execute(&pool)
        .await;
    assert!(update.is_err());

    let delete = sqlx::query("DELETE FROM inventory_transactions WHERE id = $1")
        .bind(transaction.id)
        .execute(&pool)
        .await;
    assert!(delete.is_err());
}
