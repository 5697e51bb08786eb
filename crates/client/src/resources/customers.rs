//! `/customers`

use std::sync::Arc;

use stockdesk_core::CustomerId;
use stockdesk_core::models::{Customer, NewCustomer};
use stockdesk_core::validation::CustomerForm;
use tracing::{info, instrument};

use super::CUSTOMERS;
use crate::cache::{CacheKey, CacheValue};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// List all customers. Served from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        if let Some(CacheValue::Customers(customers)) = self.cached(CacheKey::Customers).await {
            return Ok(customers.as_ref().clone());
        }
        let customers: Vec<Customer> = self.get(CUSTOMERS).await?;
        self.store(
            CacheKey::Customers,
            CacheValue::Customers(Arc::new(customers.clone())),
        )
        .await;
        Ok(customers)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no such customer exists.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn get_customer(&self, id: &CustomerId) -> Result<Customer, ApiError> {
        self.get(&format!("{CUSTOMERS}/{id}")).await
    }

    /// # Errors
    ///
    /// Returns error if the API request fails or the backend rejects it.
    #[instrument(skip(self, customer), fields(name = %customer.name))]
    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer, ApiError> {
        let created: Customer = self.post(CUSTOMERS, customer).await?;
        self.invalidate(CacheKey::Customers).await;
        Ok(created)
    }

    /// # Errors
    ///
    /// Returns error if the API request fails or the backend rejects it.
    #[instrument(skip(self, customer), fields(customer_id = %id))]
    pub async fn update_customer(
        &self,
        id: &CustomerId,
        customer: &NewCustomer,
    ) -> Result<Customer, ApiError> {
        let updated: Customer = self.put(&format!("{CUSTOMERS}/{id}"), customer).await?;
        self.invalidate(CacheKey::Customers).await;
        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns error if the API request fails or the backend rejects it.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn delete_customer(&self, id: &CustomerId) -> Result<(), ApiError> {
        self.delete(&format!("{CUSTOMERS}/{id}")).await?;
        self.invalidate(CacheKey::Customers).await;
        Ok(())
    }

    /// Validate the form and create the customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if the form
    /// is invalid, otherwise any error from [`Self::create_customer`].
    pub async fn submit_customer(&self, form: CustomerForm) -> Result<Customer, ApiError> {
        let payload = form.into_payload()?;
        let customer = self.create_customer(&payload).await?;
        info!(customer_id = %customer.id, name = %customer.name, "Customer added");
        Ok(customer)
    }
}
