//! Validation utilities for the Inventory Ledger Platform
//!
//! Request-level checks performed before any ledger write. These reject
//! malformed input; business-level stock checks (e.g. preventing negative
//! balances) are deliberately not enforced here.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::CountLine;

/// A ledger entry may be positive or negative but never zero
pub fn validate_entry_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity.is_zero() {
        return Err("Quantity must not be zero");
    }
    Ok(())
}

/// Unit cost is optional but never negative
pub fn validate_unit_cost(unit_cost: Option<Decimal>) -> Result<(), &'static str> {
    if let Some(cost) = unit_cost {
        if cost < Decimal::ZERO {
            return Err("Unit cost cannot be negative");
        }
    }
    Ok(())
}

/// Transfers move a strictly positive quantity
pub fn validate_transfer_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Transfer quantity must be positive");
    }
    Ok(())
}

/// Source and destination of a transfer must differ
pub fn validate_transfer_locations(from: Uuid, to: Uuid) -> Result<(), &'static str> {
    if from == to {
        return Err("Transfer source and destination must differ");
    }
    Ok(())
}

/// A count sheet must have lines, and no product may appear twice (a
/// duplicate line would post the same drift delta twice)
pub fn validate_count_lines(lines: &[CountLine]) -> Result<(), &'static str> {
    if lines.is_empty() {
        return Err("Count sheet has no lines");
    }
    let mut seen: Vec<Uuid> = Vec::with_capacity(lines.len());
    for line in lines {
        if seen.contains(&line.product_id) {
            return Err("Count sheet lists the same product more than once");
        }
        seen.push(line.product_id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_entry_quantity() {
        assert!(validate_entry_quantity(dec("1")).is_ok());
        assert!(validate_entry_quantity(dec("-1")).is_ok());
        assert!(validate_entry_quantity(Decimal::ZERO).is_err());
    }

    #[test]
    fn test_unit_cost() {
        assert!(validate_unit_cost(None).is_ok());
        assert!(validate_unit_cost(Some(Decimal::ZERO)).is_ok());
        assert!(validate_unit_cost(Some(dec("12.50"))).is_ok());
        assert!(validate_unit_cost(Some(dec("-0.01"))).is_err());
    }

    #[test]
    fn test_transfer_quantity() {
        assert!(validate_transfer_quantity(dec("5")).is_ok());
        assert!(validate_transfer_quantity(Decimal::ZERO).is_err());
        assert!(validate_transfer_quantity(dec("-3")).is_err());
    }

    #[test]
    fn test_transfer_locations() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert!(validate_transfer_locations(a, b).is_ok());
        assert!(validate_transfer_locations(a, a).is_err());
    }

    #[test]
    fn test_count_lines_empty() {
        assert!(validate_count_lines(&[]).is_err());
    }

    #[test]
    fn test_count_lines_duplicate_product() {
        let p = Uuid::new_v4();
        let lines = vec![
            CountLine {
                product_id: p,
                counted_quantity: dec("8"),
                system_quantity: dec("10"),
            },
            CountLine {
                product_id: p,
                counted_quantity: dec("9"),
                system_quantity: dec("10"),
            },
        ];
        assert!(validate_count_lines(&lines).is_err());
    }

    #[test]
    fn test_count_lines_valid() {
        let lines = vec![
            CountLine {
                product_id: Uuid::new_v4(),
                counted_quantity: dec("8"),
                system_quantity: dec("10"),
            },
            CountLine {
                product_id: Uuid::new_v4(),
                counted_quantity: dec("5"),
                system_quantity: dec("5"),
            },
        ];
        assert!(validate_count_lines(&lines).is_ok());
    }
}
