//! `/expenses` and `/expense-category`

use std::sync::Arc;

use stockdesk_core::models::{Expense, ExpenseCategory, NewExpense, NewExpenseCategory};
use stockdesk_core::validation::{ExpenseCategoryForm, ExpenseForm, FieldErrors};
use stockdesk_core::{ExpenseCategoryId, ExpenseId};
use tracing::{info, instrument};

use super::{EXPENSE_CATEGORIES, EXPENSES};
use crate::cache::{CacheKey, CacheValue};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        self.get(EXPENSES).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no such expense exists.
    #[instrument(skip(self), fields(expense_id = %id))]
    pub async fn get_expense(&self, id: &ExpenseId) -> Result<Expense, ApiError> {
        self.get(&format!("{EXPENSES}/{id}")).await
    }

    /// # Errors
    ///
    /// Returns error if the API request fails or the backend rejects it.
    #[instrument(skip(self, expense), fields(name = %expense.name, cost = %expense.cost))]
    pub async fn create_expense(&self, expense: &NewExpense) -> Result<Expense, ApiError> {
        self.post(EXPENSES, expense).await
    }

    /// # Errors
    ///
    /// Returns error if the API request fails or the backend rejects it.
    #[instrument(skip(self, expense), fields(expense_id = %id))]
    pub async fn update_expense(
        &self,
        id: &ExpenseId,
        expense: &NewExpense,
    ) -> Result<Expense, ApiError> {
        self.put(&format!("{EXPENSES}/{id}"), expense).await
    }

    /// # Errors
    ///
    /// Returns error if the API request fails or the backend rejects it.
    #[instrument(skip(self), fields(expense_id = %id))]
    pub async fn delete_expense(&self, id: &ExpenseId) -> Result<(), ApiError> {
        self.delete(&format!("{EXPENSES}/{id}")).await
    }

    /// Validate the form and create the expense.
    ///
    /// The category must be one of the backend's expense categories
    /// (matched case-insensitively, sent with the backend's spelling).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without creating anything if the form
    /// is invalid or names an unknown category.
    pub async fn submit_expense(&self, form: ExpenseForm) -> Result<Expense, ApiError> {
        let mut payload = form.into_payload()?;

        let categories = self.list_expense_categories().await?;
        let Some(category) = categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(&payload.category))
        else {
            let mut errors = FieldErrors::new();
            errors.insert(
                "category",
                format!("Unknown expense category {:?}", payload.category),
            );
            return Err(ApiError::Validation(errors));
        };
        payload.category.clone_from(&category.name);

        let expense = self.create_expense(&payload).await?;
        info!(expense_id = %expense.id, cost = %expense.cost, "Expense added");
        Ok(expense)
    }

    /// List expense categories. Served from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_expense_categories(&self) -> Result<Vec<ExpenseCategory>, ApiError> {
        if let Some(CacheValue::ExpenseCategories(categories)) =
            self.cached(CacheKey::ExpenseCategories).await
        {
            return Ok(categories.as_ref().clone());
        }
        let categories: Vec<ExpenseCategory> = self.get(EXPENSE_CATEGORIES).await?;
        self.store(
            CacheKey::ExpenseCategories,
            CacheValue::ExpenseCategories(Arc::new(categories.clone())),
        )
        .await;
        Ok(categories)
    }

    /// # Errors
    ///
    /// Returns error if the API request fails or the backend rejects it
    /// (for example, a duplicate name).
    #[instrument(skip(self, category), fields(name = %category.name))]
    pub async fn create_expense_category(
        &self,
        category: &NewExpenseCategory,
    ) -> Result<ExpenseCategory, ApiError> {
        let created: ExpenseCategory = self.post(EXPENSE_CATEGORIES, category).await?;
        self.invalidate(CacheKey::ExpenseCategories).await;
        Ok(created)
    }

    /// # Errors
    ///
    /// Returns error if the API request fails or the backend rejects it.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn delete_expense_category(&self, id: &ExpenseCategoryId) -> Result<(), ApiError> {
        self.delete(&format!("{EXPENSE_CATEGORIES}/{id}")).await?;
        self.invalidate(CacheKey::ExpenseCategories).await;
        Ok(())
    }

    /// Validate the form and create the category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if the form
    /// is invalid, otherwise any error from [`Self::create_expense_category`].
    pub async fn submit_expense_category(
        &self,
        form: ExpenseCategoryForm,
    ) -> Result<ExpenseCategory, ApiError> {
        let payload = form.into_payload()?;
        let category = self.create_expense_category(&payload).await?;
        info!(category_id = %category.id, name = %category.name, "Expense category added");
        Ok(category)
    }
}
