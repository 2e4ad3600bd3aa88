// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::pricing::{LineItem, resolve_legacy};
use club_ledger_domain::{DomainError, LegacyPricing, LegacyRegistrationCounts, Money};

/// Sums `quantity * unit_price` over all line items.
///
/// Returns 0 for an empty list. Line items are validated non-negative at
/// construction, so the result is never negative.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if the sum does not fit in `Money`.
pub fn calculate_revenue(line_items: &[LineItem]) -> Result<Money, DomainError> {
    line_items.iter().try_fold(0, |total: Money, item| {
        total.checked_add(item.subtotal()).ok_or_else(|| {
            DomainError::invalid_input("revenue", "total revenue overflows the money range")
        })
    })
}

/// Calculates revenue for legacy full/half/subscription registrations.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if a count or a price is negative,
/// or the revenue does not fit in `Money`.
pub fn calculate_legacy_revenue(
    counts: &LegacyRegistrationCounts,
    pricing: &LegacyPricing,
) -> Result<Money, DomainError> {
    let line_items: Vec<LineItem> = resolve_legacy(pricing, counts)?;
    calculate_revenue(&line_items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_revenue_is_zero() {
        assert_eq!(calculate_revenue(&[]), Ok(0));
    }

    #[test]
    fn test_single_item_revenue_is_quantity_times_price() {
        for (quantity, price) in [(0, 0), (0, 50_000), (1, 0), (7, 3_250), (13, 50_000)] {
            let item: LineItem = LineItem::new("tier", quantity, price).unwrap();
            assert_eq!(calculate_revenue(&[item]), Ok(quantity * price));
        }
    }

    #[test]
    fn test_revenue_sums_all_items() {
        let items: Vec<LineItem> = vec![
            LineItem::new("a", 2, 1_000).unwrap(),
            LineItem::new("b", 3, 500).unwrap(),
        ];
        assert_eq!(calculate_revenue(&items), Ok(3_500));
    }

    #[test]
    fn test_overflowing_revenue_sum_is_rejected() {
        let items: Vec<LineItem> = vec![
            LineItem::new("a", 1, Money::MAX).unwrap(),
            LineItem::new("b", 1, 1).unwrap(),
        ];

        let result: Result<Money, DomainError> = calculate_revenue(&items);

        assert!(matches!(result, Err(DomainError::InvalidInput { .. })));
    }

    #[test]
    fn test_legacy_revenue_rejects_overflowing_registrations() {
        let pricing: LegacyPricing = LegacyPricing {
            full_price: 5_000_000_000,
            half_price: None,
            subscription_price: None,
        };
        let counts: LegacyRegistrationCounts = LegacyRegistrationCounts {
            full_registrations: 5_000_000_000,
            ..LegacyRegistrationCounts::default()
        };

        let result: Result<Money, DomainError> = calculate_legacy_revenue(&counts, &pricing);
        assert!(matches!(result, Err(DomainError::InvalidInput { .. })));
    }

    #[test]
    fn test_legacy_revenue_rejects_negative_price() {
        let pricing: LegacyPricing = LegacyPricing {
            full_price: -1,
            half_price: None,
            subscription_price: None,
        };
        let counts: LegacyRegistrationCounts = LegacyRegistrationCounts {
            full_registrations: 1,
            ..LegacyRegistrationCounts::default()
        };

        let result: Result<Money, DomainError> = calculate_legacy_revenue(&counts, &pricing);
        assert!(matches!(result, Err(DomainError::InvalidInput { .. })));
    }
}
