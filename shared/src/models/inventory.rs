//! Ledger arithmetic for stock movements
//!
//! Pure planning logic used by the backend ledger service and by clients
//! that want to preview the effect of an operation. The backend persists
//! the results; nothing here touches storage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of a count sheet: what was counted vs. what the system thinks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountLine {
    pub product_id: Uuid,
    pub counted_quantity: Decimal,
    pub system_quantity: Decimal,
}

impl CountLine {
    /// Drift between the physical count and the system quantity
    pub fn delta(&self) -> Decimal {
        self.counted_quantity - self.system_quantity
    }
}

/// A planned posting for one count line that found drift
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountDelta {
    pub product_id: Uuid,
    pub quantity: Decimal,
}

/// Value of a ledger entry: `quantity * unit_cost`, zero when no cost is known
pub fn entry_value(quantity: Decimal, unit_cost: Option<Decimal>) -> Decimal {
    match unit_cost {
        Some(cost) => quantity * cost,
        None => Decimal::ZERO,
    }
}

/// Signed delta an adjustment must post to bring the system quantity in
/// line with the counted one. Zero means no adjustment is needed.
pub fn adjustment_delta(actual_quantity: Decimal, system_quantity: Decimal) -> Decimal {
    actual_quantity - system_quantity
}

/// The two signed legs of a transfer: (outbound at source, inbound at
/// destination). `quantity` must already be validated positive.
pub fn transfer_legs(quantity: Decimal) -> (Decimal, Decimal) {
    (-quantity, quantity)
}

/// Plan the postings for a count sheet: one delta per line with drift,
/// lines that match the system produce nothing.
pub fn count_deltas(lines: &[CountLine]) -> Vec<CountDelta> {
    lines
        .iter()
        .filter(|line| !line.delta().is_zero())
        .map(|line| CountDelta {
            product_id: line.product_id,
            quantity: line.delta(),
        })
        .collect()
}

/// Replay a sequence of committed deltas into the balance they produce.
/// The balance row is a cache of exactly this sum.
pub fn replay_balance(deltas: &[Decimal]) -> Decimal {
    deltas.iter().copied().sum()
}

/// Running balance after each delta, starting from `opening`. Entry `i` of
/// the result is the `running_balance` the log entry for delta `i` carries.
pub fn running_balances(opening: Decimal, deltas: &[Decimal]) -> Vec<Decimal> {
    deltas
        .iter()
        .scan(opening, |balance, delta| {
            *balance += *delta;
            Some(*balance)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_entry_value_with_cost() {
        assert_eq!(entry_value(dec("4"), Some(dec("2.5"))), dec("10"));
        assert_eq!(entry_value(dec("-4"), Some(dec("2.5"))), dec("-10"));
    }

    #[test]
    fn test_entry_value_without_cost() {
        assert_eq!(entry_value(dec("4"), None), Decimal::ZERO);
    }

    #[test]
    fn test_adjustment_delta() {
        assert_eq!(adjustment_delta(dec("12"), dec("10")), dec("2"));
        assert_eq!(adjustment_delta(dec("8"), dec("10")), dec("-2"));
        assert!(adjustment_delta(dec("10"), dec("10")).is_zero());
    }

    #[test]
    fn test_transfer_legs_cancel() {
        let (out, inb) = transfer_legs(dec("5"));
        assert_eq!(out, dec("-5"));
        assert_eq!(inb, dec("5"));
        assert_eq!(out + inb, Decimal::ZERO);
    }

    #[test]
    fn test_count_deltas_skip_matching_lines() {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let lines = vec![
            CountLine {
                product_id: p1,
                counted_quantity: dec("8"),
                system_quantity: dec("10"),
            },
            CountLine {
                product_id: p2,
                counted_quantity: dec("5"),
                system_quantity: dec("5"),
            },
        ];

        let deltas = count_deltas(&lines);
        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas[0].product_id, p1);
        assert_eq!(deltas[0].quantity, dec("-2"));
    }

    #[test]
    fn test_running_balances() {
        let deltas = [dec("10"), dec("-3"), dec("5")];
        let balances = running_balances(Decimal::ZERO, &deltas);
        assert_eq!(balances, vec![dec("10"), dec("7"), dec("12")]);
        assert_eq!(*balances.last().unwrap(), replay_balance(&deltas));
    }
}
