//! Landing-page overview assembled from several endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use stockdesk_core::report::{
    ExpenseSummary, InventorySummary, RevenueComparison, SalesReport, monthly_revenue,
};
use stockdesk_core::{DateRange, Money, YearMonth};
use tracing::{info, instrument};

use crate::{ApiClient, ApiError};

/// Everything the dashboard shows, computed from one round of fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    /// Current month against the previous one. `None` when there are no
    /// sales at all.
    pub revenue: Option<RevenueComparison>,
    pub sales: SalesReport,
    pub expenses: ExpenseSummary,
    pub inventory: InventorySummary,
    /// Net sales revenue minus non-cancelled expenses
    pub net_profit: Money,
}

/// Builds [`Overview`]s from an [`ApiClient`].
#[derive(Debug, Clone)]
pub struct Dashboard {
    client: ApiClient,
}

impl Dashboard {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch products, sales, expenses and the revenue series concurrently,
    /// then aggregate.
    ///
    /// Revenue growth compares the month of `now` with the month before it.
    ///
    /// # Errors
    ///
    /// Returns the first error from any of the fetches; nothing is
    /// aggregated from a partial result.
    #[instrument(skip(self))]
    pub async fn overview(&self, now: DateTime<Utc>) -> Result<Overview, ApiError> {
        let (products, sales, expenses, series) = tokio::try_join!(
            self.client.list_products(),
            self.client.list_sales_items(),
            self.client.list_expenses(),
            self.client.monthly_revenue(),
        )?;

        // Older backends return an empty series; derive it from the sales.
        let series = if series.is_empty() {
            monthly_revenue(&sales)
        } else {
            series
        };
        let revenue = (!series.is_empty())
            .then(|| RevenueComparison::from_series(&series, YearMonth::of(now)));

        let sales = SalesReport::build(&sales, DateRange::ALL);
        let expenses = ExpenseSummary::build(&expenses);
        let inventory = InventorySummary::build(&products, self.client.low_stock_threshold());
        let net_profit = sales.net_revenue - expenses.total;

        info!(
            products = inventory.product_count,
            sales = sales.count,
            expenses = expenses.count,
            net_profit = %net_profit,
            "Dashboard overview built"
        );

        Ok(Overview {
            revenue,
            sales,
            expenses,
            inventory,
            net_profit,
        })
    }
}
