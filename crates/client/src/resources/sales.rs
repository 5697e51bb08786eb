//! `/sales-items`

use stockdesk_core::models::{MonthlyRevenue, NewSalesItem, SalesItem};
use stockdesk_core::validation::SaleForm;
use tracing::{info, instrument};

use super::{MONTHLY_REVENUE, SALES_ITEMS};
use crate::cache::CacheKey;
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// List every recorded sale.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_sales_items(&self) -> Result<Vec<SalesItem>, ApiError> {
        self.get(SALES_ITEMS).await
    }

    /// Per-month revenue as aggregated by the backend.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn monthly_revenue(&self) -> Result<Vec<MonthlyRevenue>, ApiError> {
        self.get(MONTHLY_REVENUE).await
    }

    /// Record a sale. The backend decrements stock, so the cached product
    /// list is dropped.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or the backend rejects it.
    #[instrument(skip(self, sale), fields(product_id = %sale.product_id))]
    pub async fn record_sale(&self, sale: &NewSalesItem) -> Result<SalesItem, ApiError> {
        let created: SalesItem = self.post(SALES_ITEMS, sale).await?;
        self.invalidate(CacheKey::Products).await;
        Ok(created)
    }

    /// Validate the form and record the sale.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if the form
    /// is invalid, otherwise any error from [`Self::record_sale`].
    pub async fn submit_sale(&self, form: SaleForm) -> Result<SalesItem, ApiError> {
        let payload = form.into_payload()?;
        let sale = self.record_sale(&payload).await?;
        info!(
            sale_id = %sale.id,
            product = %sale.product_name,
            amount = %sale.final_price(),
            "Sale recorded"
        );
        Ok(sale)
    }
}
