//! Sales reports over completed sales items.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{Bucket, group_by_key, group_by_total, label};
use crate::models::SalesItem;
use crate::types::{DateRange, Money, ProductId};

/// Totals and groupings of sales within a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesReport {
    pub count: usize,
    /// Sum of list prices before discount.
    pub gross: Money,
    /// Sum of discounts given.
    pub discounts: Money,
    /// Sum of amounts actually collected.
    pub net_revenue: Money,
    pub average_sale: Money,
    /// Net revenue per calendar day (UTC), oldest first.
    pub by_date: Vec<Bucket<NaiveDate>>,
    /// Net revenue of sales without a creation date.
    pub undated: Money,
    /// Net revenue per product category, largest first.
    pub by_category: Vec<Bucket<String>>,
    pub by_sales_manager: Vec<Bucket<String>>,
}

impl SalesReport {
    /// Build a report from the sales whose creation date falls in `range`.
    ///
    /// Undated sales only count towards an unbounded range.
    #[must_use]
    pub fn build(sales: &[SalesItem], range: DateRange) -> Self {
        let in_range: Vec<&SalesItem> = sales
            .iter()
            .filter(|sale| range.admits(sale.created_at.map(|at| at.date_naive())))
            .collect();

        let gross: Money = in_range.iter().map(|sale| sale.product_price).sum();
        let net_revenue: Money = in_range.iter().map(|sale| sale.final_price()).sum();
        let count = in_range.len();

        let average_sale = if count == 0 {
            Money::ZERO
        } else {
            Money::new(net_revenue.amount() / Decimal::from(count)).round()
        };

        Self {
            count,
            gross,
            discounts: gross - net_revenue,
            net_revenue,
            average_sale,
            by_date: group_by_key(in_range.iter().filter_map(|sale| {
                sale.created_at
                    .map(|at| (at.date_naive(), sale.final_price()))
            })),
            undated: in_range
                .iter()
                .filter(|sale| sale.created_at.is_none())
                .map(|sale| sale.final_price())
                .sum(),
            by_category: group_by_total(
                in_range
                    .iter()
                    .map(|sale| (label(&sale.category), sale.final_price())),
            ),
            by_sales_manager: group_by_total(
                in_range
                    .iter()
                    .map(|sale| (label(&sale.sales_manager), sale.final_price())),
            ),
        }
    }
}

/// Sales totals for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSales {
    pub product_id: ProductId,
    pub product_name: String,
    pub units: usize,
    pub revenue: Money,
}

/// Best-selling products by units sold, then by revenue.
#[must_use]
pub fn top_products(sales: &[SalesItem], limit: usize) -> Vec<ProductSales> {
    let mut per_product: HashMap<&ProductId, ProductSales> = HashMap::new();
    for sale in sales {
        let entry = per_product
            .entry(&sale.product_id)
            .or_insert_with(|| ProductSales {
                product_id: sale.product_id.clone(),
                product_name: sale.product_name.clone(),
                units: 0,
                revenue: Money::ZERO,
            });
        entry.units += 1;
        entry.revenue += sale.final_price();
    }

    let mut ranked: Vec<ProductSales> = per_product.into_values().collect();
    ranked.sort_by(|a, b| {
        b.units
            .cmp(&a.units)
            .then_with(|| b.revenue.cmp(&a.revenue))
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
    ranked.truncate(limit);
    ranked
}
