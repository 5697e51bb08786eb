//! Pre-order payment split.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{Discount, Money};

/// Share of the total collected up front on every pre-order.
pub const ADVANCE_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// How a pre-order's price splits into advance and balance.
///
/// The total is rounded to cents. The advance is exactly half of it, which
/// may leave a half cent (`0.005`) on each side; `paid + due == total` and
/// `paid == due` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreOrderPayment {
    pub total_amount: Money,
    pub paid_amount: Money,
    pub due_amount: Money,
}

impl PreOrderPayment {
    #[must_use]
    pub fn compute(price: Money, discount: Discount) -> Self {
        let total_amount = discount.apply(price).round();
        let paid_amount = total_amount * ADVANCE_RATE;
        Self {
            total_amount,
            paid_amount,
            due_amount: total_amount - paid_amount,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_advance_rate_is_half() {
        assert_eq!(ADVANCE_RATE, dec!(0.5));
    }

    #[test]
    fn test_half_advance() {
        let payment = PreOrderPayment::compute(Money::from(500), Discount::new(dec!(10)).unwrap());
        assert_eq!(payment.total_amount.amount(), dec!(450));
        assert_eq!(payment.paid_amount.amount(), dec!(225));
        assert_eq!(payment.due_amount.amount(), dec!(225));
    }

    #[test]
    fn test_odd_cents_stay_balanced() {
        for cents in [1, 3, 5, 999, 12_345, 100_001] {
            let payment = PreOrderPayment::compute(Money::from_cents(cents), Discount::NONE);
            assert_eq!(
                payment.paid_amount + payment.due_amount,
                payment.total_amount
            );
            assert_eq!(payment.paid_amount, payment.due_amount);
            assert_eq!(payment.paid_amount.times(2), payment.total_amount);
        }
    }

    #[test]
    fn test_advance_is_exact_half_of_odd_totals() {
        let payment = PreOrderPayment::compute(Money::from_cents(3), Discount::NONE);
        assert_eq!(payment.paid_amount.amount(), dec!(0.015));
        assert_eq!(payment.due_amount.amount(), dec!(0.015));

        let payment = PreOrderPayment::compute(Money::from_cents(5), Discount::NONE);
        assert_eq!(payment.paid_amount.amount(), dec!(0.025));
        assert_eq!(payment.due_amount.amount(), dec!(0.025));
    }

    #[test]
    fn test_total_rounds_half_cents_up() {
        // 0.15 * 0.9 = 0.135
        let payment =
            PreOrderPayment::compute(Money::from_cents(15), Discount::new(dec!(10)).unwrap());
        assert_eq!(payment.total_amount.amount(), dec!(0.14));
        assert_eq!(payment.paid_amount.amount(), dec!(0.07));
    }

    #[test]
    fn test_full_discount() {
        let payment = PreOrderPayment::compute(Money::from(80), Discount::new(dec!(100)).unwrap());
        assert!(payment.total_amount.is_zero());
        assert!(payment.paid_amount.is_zero());
        assert!(payment.due_amount.is_zero());
    }
}
