//! Stock valuation and low-stock alerts.

use std::collections::BTreeMap;

use serde::Serialize;

use super::label;
use crate::models::Product;
use crate::types::{Money, ProductId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStock {
    pub category: String,
    pub products: usize,
    pub units: u64,
    pub retail_value: Money,
}

/// A product that needs restocking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockAlert {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
}

impl From<&Product> for StockAlert {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            quantity: product.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub product_count: usize,
    pub total_units: u64,
    /// What the stock on hand cost (`costPrice * quantity`).
    pub stock_value: Money,
    /// What the stock on hand sells for (`price * quantity`).
    pub retail_value: Money,
    pub potential_profit: Money,
    /// Sorted by category name.
    pub by_category: Vec<CategoryStock>,
    /// In stock but at or below the threshold, lowest quantity first.
    pub low_stock: Vec<StockAlert>,
    pub out_of_stock: Vec<StockAlert>,
}

impl InventorySummary {
    #[must_use]
    pub fn build(products: &[Product], low_stock_threshold: u32) -> Self {
        let mut by_category: BTreeMap<String, CategoryStock> = BTreeMap::new();
        let mut stock_value = Money::ZERO;
        let mut retail_value = Money::ZERO;
        let mut total_units = 0_u64;

        for product in products {
            let retail = product.price.times(product.quantity);
            stock_value += product.cost_price.times(product.quantity);
            retail_value += retail;
            total_units += u64::from(product.quantity);

            let category = label(&product.category);
            let entry = by_category
                .entry(category.clone())
                .or_insert_with(|| CategoryStock {
                    category,
                    products: 0,
                    units: 0,
                    retail_value: Money::ZERO,
                });
            entry.products += 1;
            entry.units += u64::from(product.quantity);
            entry.retail_value += retail;
        }

        let mut low_stock: Vec<StockAlert> = products
            .iter()
            .filter(|p| p.quantity > 0 && p.quantity <= low_stock_threshold)
            .map(StockAlert::from)
            .collect();
        low_stock.sort_by(|a, b| a.quantity.cmp(&b.quantity).then_with(|| a.name.cmp(&b.name)));

        let out_of_stock = products
            .iter()
            .filter(|p| p.is_out_of_stock())
            .map(StockAlert::from)
            .collect();

        Self {
            product_count: products.len(),
            total_units,
            stock_value,
            retail_value,
            potential_profit: retail_value - stock_value,
            by_category: by_category.into_values().collect(),
            low_stock,
            out_of_stock,
        }
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn product(id: &str, category: &str, price: u32, cost: u32, quantity: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            category: category.to_string(),
            price: Money::from(price),
            cost_price: Money::from(cost),
            quantity,
            created_at: None,
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("lamp", "Lighting", 45, 30, 10),
            product("bulb", "Lighting", 5, 2, 3),
            product("desk", "Furniture", 500, 350, 1),
            product("chair", "Furniture", 120, 80, 0),
        ]
    }

    #[test]
    fn test_valuation() {
        let summary = InventorySummary::build(&fixture(), 5);
        assert_eq!(summary.product_count, 4);
        assert_eq!(summary.total_units, 14);
        assert_eq!(summary.retail_value.amount(), dec!(965));
        assert_eq!(summary.stock_value.amount(), dec!(656));
        assert_eq!(summary.potential_profit.amount(), dec!(309));
    }

    #[test]
    fn test_by_category() {
        let summary = InventorySummary::build(&fixture(), 5);
        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.by_category[0].category, "Furniture");
        assert_eq!(summary.by_category[0].products, 2);
        assert_eq!(summary.by_category[1].units, 13);
    }

    #[test]
    fn test_alerts() {
        let summary = InventorySummary::build(&fixture(), 5);
        let low: Vec<_> = summary.low_stock.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(low, vec!["desk", "bulb"]);
        assert_eq!(summary.out_of_stock.len(), 1);
        assert_eq!(summary.out_of_stock[0].name, "chair");
    }

    #[test]
    fn test_zero_threshold_has_no_low_stock() {
        let summary = InventorySummary::build(&fixture(), 0);
        assert!(summary.low_stock.is_empty());
    }
}
