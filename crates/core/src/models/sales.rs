//! Completed sales and the backend's monthly revenue series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Discount, Money, ProductId, SalesItemId, YearMonth};

/// One completed sale of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: SalesItemId,
    #[serde(rename = "productID", alias = "productId")]
    pub product_id: ProductId,
    pub product_name: String,
    /// List price at the time of sale, before discount.
    pub product_price: Money,
    #[serde(default)]
    pub discount: Discount,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sales_manager: String,
    /// Missing on some imported records; such sales have no date bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SalesItem {
    /// Amount actually collected for this sale.
    #[must_use]
    pub fn final_price(&self) -> Money {
        self.discount.apply(self.product_price)
    }
}

/// Payload for recording a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSalesItem {
    #[serde(rename = "productID")]
    pub product_id: ProductId,
    pub product_name: String,
    pub product_price: Money,
    pub discount: Discount,
    pub category: String,
    pub sales_manager: String,
}

/// Revenue for one calendar month, as computed by the backend.
///
/// Accepts `{"month": "2024-05", "revenue": 1200}` as well as the raw
/// aggregation shape `{"year": 2024, "month": 5, "totalRevenue": 1200}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyRevenue {
    pub month: YearMonth,
    pub revenue: Money,
}

impl<'de> Deserialize<'de> for MonthlyRevenue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum MonthField {
            Label(YearMonth),
            Number(u32),
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            year: Option<i32>,
            month: MonthField,
            #[serde(alias = "totalRevenue", alias = "total")]
            revenue: Money,
        }

        let raw = Raw::deserialize(deserializer)?;
        let month = match (raw.month, raw.year) {
            (MonthField::Label(month), _) => month,
            (MonthField::Number(month), Some(year)) => YearMonth::new(year, month)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid month number {month}")))?,
            (MonthField::Number(_), None) => {
                return Err(serde::de::Error::missing_field("year"));
            }
        };
        Ok(Self {
            month,
            revenue: raw.revenue,
        })
    }
}
