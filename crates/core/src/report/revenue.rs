//! Month-over-month revenue comparison.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::growth_percent;
use crate::models::{MonthlyRevenue, SalesItem};
use crate::types::{Money, YearMonth};

/// Revenue of one month against the month before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevenueComparison {
    pub month: YearMonth,
    pub current: Money,
    pub previous: Money,
    pub change: Money,
    /// Percent growth over the previous month; zero if the previous month had no revenue.
    pub growth: Decimal,
}

impl RevenueComparison {
    /// Compare `month` with the month before it. Months missing from the
    /// series count as zero revenue.
    #[must_use]
    pub fn from_series(series: &[MonthlyRevenue], month: YearMonth) -> Self {
        let revenue_of = |wanted: YearMonth| -> Money {
            series
                .iter()
                .filter(|row| row.month == wanted)
                .map(|row| row.revenue)
                .sum()
        };
        let current = revenue_of(month);
        let previous = revenue_of(month.previous());
        Self {
            month,
            current,
            previous,
            change: current - previous,
            growth: growth_percent(current, previous),
        }
    }

    /// Compare the latest month present in the series, if any.
    #[must_use]
    pub fn latest(series: &[MonthlyRevenue]) -> Option<Self> {
        let month = series.iter().map(|row| row.month).max()?;
        Some(Self::from_series(series, month))
    }
}

/// Build a monthly revenue series from raw sales, oldest month first.
///
/// Used when the backend's pre-aggregated series is unavailable. Sales
/// without a creation date are left out.
#[must_use]
pub fn monthly_revenue(sales: &[SalesItem]) -> Vec<MonthlyRevenue> {
    let mut months: BTreeMap<YearMonth, Money> = BTreeMap::new();
    for sale in sales {
        let Some(at) = sale.created_at else { continue };
        *months.entry(YearMonth::of(at)).or_default() += sale.final_price();
    }
    months
        .into_iter()
        .map(|(month, revenue)| MonthlyRevenue { month, revenue })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::types::{Discount, ProductId, SalesItemId};

    fn row(month: &str, revenue: u32) -> MonthlyRevenue {
        MonthlyRevenue {
            month: month.parse().unwrap(),
            revenue: Money::from(revenue),
        }
    }

    #[test]
    fn test_compare_with_previous_month() {
        let series = vec![row("2024-04", 1000), row("2024-05", 1250)];
        let cmp = RevenueComparison::from_series(&series, "2024-05".parse().unwrap());
        assert_eq!(cmp.current.amount(), dec!(1250));
        assert_eq!(cmp.previous.amount(), dec!(1000));
        assert_eq!(cmp.change.amount(), dec!(250));
        assert_eq!(cmp.growth, dec!(25));
    }

    #[test]
    fn test_missing_previous_month_is_zero_growth() {
        let series = vec![row("2024-05", 1250)];
        let cmp = RevenueComparison::from_series(&series, "2024-05".parse().unwrap());
        assert!(cmp.previous.is_zero());
        assert_eq!(cmp.growth, Decimal::ZERO);
    }

    #[test]
    fn test_january_compares_with_december() {
        let series = vec![row("2023-12", 400), row("2024-01", 300)];
        let cmp = RevenueComparison::latest(&series).unwrap();
        assert_eq!(cmp.month.to_string(), "2024-01");
        assert_eq!(cmp.growth, dec!(-25));
    }

    #[test]
    fn test_latest_of_empty_series() {
        assert!(RevenueComparison::latest(&[]).is_none());
    }

    #[test]
    fn test_monthly_revenue_from_sales() {
        let sale = |id: &str, price: u32, at: &str| SalesItem {
            id: SalesItemId::new(id),
            product_id: ProductId::new("p"),
            product_name: "P".into(),
            product_price: Money::from(price),
            discount: Discount::NONE,
            category: String::new(),
            sales_manager: String::new(),
            created_at: Some(at.parse().unwrap()),
        };
        let mut undated = sale("4", 99, "2024-05-01T00:00:00Z");
        undated.created_at = None;
        let series = monthly_revenue(&[
            sale("1", 10, "2024-05-31T23:59:59Z"),
            sale("2", 20, "2024-04-02T00:00:00Z"),
            sale("3", 5, "2024-05-01T00:00:00Z"),
            undated,
        ]);
        assert_eq!(series, vec![row("2024-04", 20), row("2024-05", 15)]);
    }
}
