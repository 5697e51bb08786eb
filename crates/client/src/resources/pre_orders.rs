//! `/pre-order-sale`

use stockdesk_core::{PreOrderId, PreOrderStatus};
use stockdesk_core::models::{PreOrder, PreOrderUpdate};
use stockdesk_core::validation::PreOrderForm;
use tracing::{info, instrument};

use super::PRE_ORDERS;
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_pre_orders(&self) -> Result<Vec<PreOrder>, ApiError> {
        self.get(PRE_ORDERS).await
    }

    /// Find one pre-order by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the id is not in the list.
    pub async fn find_pre_order(&self, id: &PreOrderId) -> Result<PreOrder, ApiError> {
        self.list_pre_orders()
            .await?
            .into_iter()
            .find(|order| &order.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("{PRE_ORDERS}/{id}")))
    }

    /// # Errors
    ///
    /// Returns error if the API request fails or the backend rejects it.
    #[instrument(skip(self, update), fields(pre_order_id = %id))]
    pub async fn update_pre_order(
        &self,
        id: &PreOrderId,
        update: &PreOrderUpdate,
    ) -> Result<PreOrder, ApiError> {
        self.put(&format!("{PRE_ORDERS}/{id}"), update).await
    }

    /// Validate the form and take the pre-order with its 50% advance.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if the form
    /// is invalid, otherwise any API error.
    #[instrument(skip(self, form))]
    pub async fn submit_pre_order(&self, form: PreOrderForm) -> Result<PreOrder, ApiError> {
        let payload = form.into_payload()?;
        let order: PreOrder = self.post(PRE_ORDERS, &payload).await?;
        info!(
            pre_order_id = %order.id,
            total = %order.total_amount,
            paid = %order.paid_amount,
            due = %order.due_amount,
            "Pre-order taken"
        );
        Ok(order)
    }

    /// Collect the balance of a pending pre-order and mark it delivered.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] if the order is cancelled, in an
    /// unknown state or already settled, otherwise any API error.
    #[instrument(skip(self), fields(pre_order_id = %id))]
    pub async fn settle_pre_order(&self, id: &PreOrderId) -> Result<PreOrder, ApiError> {
        let order = self.find_pre_order(id).await?;
        if matches!(order.status, PreOrderStatus::Cancelled | PreOrderStatus::Other) {
            return Err(ApiError::Rejected(format!("pre-order {id} is {}", order.status)));
        }
        if order.is_settled() {
            return Err(ApiError::Rejected(format!("pre-order {id} is already paid")));
        }
        let collected = order.due_amount;
        let updated = self
            .update_pre_order(id, &PreOrderUpdate::settle(&order))
            .await?;
        info!(pre_order_id = %id, collected = %collected, "Pre-order settled");
        Ok(updated)
    }

    /// Cancel a pre-order that is still pending.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] if the order is no longer pending,
    /// otherwise any API error.
    #[instrument(skip(self), fields(pre_order_id = %id))]
    pub async fn cancel_pre_order(&self, id: &PreOrderId) -> Result<PreOrder, ApiError> {
        let order = self.find_pre_order(id).await?;
        if order.status != PreOrderStatus::Pending {
            return Err(ApiError::Rejected(format!("pre-order {id} is {}", order.status)));
        }
        let updated = self.update_pre_order(id, &PreOrderUpdate::cancel()).await?;
        info!(pre_order_id = %id, "Pre-order cancelled");
        Ok(updated)
    }
}
