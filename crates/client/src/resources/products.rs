//! `/products`

use std::sync::Arc;

use stockdesk_core::ProductId;
use stockdesk_core::models::{NewProduct, Product};
use stockdesk_core::validation::ProductForm;
use tracing::{info, instrument};

use super::PRODUCTS;
use crate::cache::{CacheKey, CacheValue};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// List all products. Served from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        if let Some(CacheValue::Products(products)) = self.cached(CacheKey::Products).await {
            return Ok(products.as_ref().clone());
        }
        let products: Vec<Product> = self.get(PRODUCTS).await?;
        self.store(CacheKey::Products, CacheValue::Products(Arc::new(products.clone())))
            .await;
        Ok(products)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no such product exists.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        self.get(&format!("{PRODUCTS}/{id}")).await
    }

    /// # Errors
    ///
    /// Returns error if the API request fails or the backend rejects it.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let created: Product = self.post(PRODUCTS, product).await?;
        self.invalidate(CacheKey::Products).await;
        Ok(created)
    }

    /// Replace a product's editable fields.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or the backend rejects it.
    #[instrument(skip(self, product), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: &ProductId,
        product: &NewProduct,
    ) -> Result<Product, ApiError> {
        let updated: Product = self.put(&format!("{PRODUCTS}/{id}"), product).await?;
        self.invalidate(CacheKey::Products).await;
        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns error if the API request fails or the backend rejects it.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        self.delete(&format!("{PRODUCTS}/{id}")).await?;
        self.invalidate(CacheKey::Products).await;
        Ok(())
    }

    /// Validate the form and create the product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if the form
    /// is invalid, otherwise any error from [`Self::create_product`].
    pub async fn submit_product(&self, form: ProductForm) -> Result<Product, ApiError> {
        let payload = form.into_payload()?;
        let product = self.create_product(&payload).await?;
        info!(product_id = %product.id, name = %product.name, "Product added");
        Ok(product)
    }

    /// Find a product by id in the (cached) product list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the id is not in the list.
    pub async fn find_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        self.list_products()
            .await?
            .into_iter()
            .find(|product| &product.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("{PRODUCTS}/{id}")))
    }
}
